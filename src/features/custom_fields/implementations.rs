use tracing::debug;
use uuid::Uuid;

use crate::features::custom_fields::models::{
    CustomFieldEntry, CustomFieldInput, CustomFieldValue, CustomFields,
};

/// Folds form fields into the stored map. Blank labels are dropped; a
/// repeated label keeps its first position and takes the last value.
/// No count limit is applied here.
pub fn serialize_custom_fields(fields: &[CustomFieldInput]) -> CustomFields {
    let mut map = CustomFields::with_capacity(fields.len());
    for field in fields {
        let label = field.label.trim();
        if label.is_empty() {
            debug!("dropping custom field with blank label");
            continue;
        }
        map.insert(
            label.to_string(),
            CustomFieldValue {
                value: field.value.clone(),
                field_type: field.field_type,
            },
        );
    }
    map
}

/// Expands the stored map back into editable rows in map order. Row ids are
/// derived from the label, so the same field gets the same id every time.
pub fn deserialize_custom_fields(fields: &CustomFields) -> Vec<CustomFieldEntry> {
    fields
        .iter()
        .map(|(label, field)| CustomFieldEntry {
            id: field_id(label),
            label: label.clone(),
            value: field.value.clone(),
            field_type: field.field_type,
        })
        .collect()
}

pub fn field_id(label: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, label.as_bytes())
}

impl From<CustomFieldEntry> for CustomFieldInput {
    fn from(entry: CustomFieldEntry) -> Self {
        Self {
            label: entry.label,
            value: entry.value,
            field_type: entry.field_type,
        }
    }
}
