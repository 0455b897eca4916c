pub mod implementations;
pub mod models;

pub use implementations::{deserialize_custom_fields, serialize_custom_fields};
pub use models::{CustomFieldEntry, CustomFieldInput, CustomFieldType, CustomFieldValue, CustomFields};
