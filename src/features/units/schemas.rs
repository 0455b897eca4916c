use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::units::models::UnitStatus;

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitIn {
    pub property_id: Uuid,
    #[validate(length(min = 1, max = 32, message = "Unit number is required"))]
    pub unit_number: String,
    pub floor: i32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
    pub rent: BigDecimal,
    pub status: UnitStatus,
}

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitPatch {
    pub property_id: Option<Uuid>,
    #[validate(length(min = 1, max = 32, message = "Unit number is required"))]
    pub unit_number: Option<String>,
    pub floor: Option<i32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub square_footage: Option<u32>,
    pub rent: Option<BigDecimal>,
    pub status: Option<UnitStatus>,
}
