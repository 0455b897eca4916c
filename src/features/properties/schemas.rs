use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::{
    custom_fields::models::CustomFields,
    properties::models::{Address, PropertyType},
};

// -- =====================
// -- IN
// -- =====================
#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyIn {
    #[validate(length(min = 1, max = 120, message = "Property name is required"))]
    pub name: String,
    pub address: Address,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub total_units: u32,
    pub occupied_units: u32,
    pub monthly_revenue: BigDecimal,
    #[validate(url(message = "Image url must be a valid url"))]
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub custom_fields: CustomFields,
}

/// Fields left `None` keep their current value. `custom_fields` replaces the
/// whole map when present.
#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyPatch {
    #[validate(length(min = 1, max = 120, message = "Property name is required"))]
    pub name: Option<String>,
    pub address: Option<Address>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub total_units: Option<u32>,
    pub occupied_units: Option<u32>,
    pub monthly_revenue: Option<BigDecimal>,
    #[serde(with = "::serde_with::rust::double_option")]
    #[validate(url(message = "Image url must be a valid url"))]
    pub image_url: Option<Option<String>>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub custom_fields: Option<CustomFields>,
}
