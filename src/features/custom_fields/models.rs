use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
}

/// Stored shape of one custom field, keyed by its label.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Default, Debug)]
pub struct CustomFieldValue {
    #[serde(deserialize_with = "deserialize_scalar_as_string")]
    pub value: String,
    #[serde(rename = "type", default)]
    pub field_type: CustomFieldType,
}

/// Label → value map. Keys keep authoring order.
pub type CustomFields = IndexMap<String, CustomFieldValue>;

/// A field as the form edits it, before labels become map keys.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default)]
pub struct CustomFieldInput {
    pub label: String,
    #[serde(deserialize_with = "deserialize_scalar_as_string")]
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct CustomFieldEntry {
    pub id: Uuid,
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: CustomFieldType,
}

fn deserialize_scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a scalar custom field value, found {other}"
            )));
        }
    })
}
