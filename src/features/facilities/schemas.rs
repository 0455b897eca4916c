use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::facilities::models::{FacilityCondition, FacilityStatus};

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityIn {
    pub property_id: Uuid,
    #[validate(length(min = 1, max = 120, message = "Facility name is required"))]
    pub name: String,
    pub category: String,
    pub status: FacilityStatus,
    pub condition: FacilityCondition,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub maintenance_cost: BigDecimal,
    pub maintenance_schedule: String,
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: String,
}

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityPatch {
    pub property_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120, message = "Facility name is required"))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<FacilityStatus>,
    pub condition: Option<FacilityCondition>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub last_maintenance: Option<Option<NaiveDate>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub next_maintenance: Option<Option<NaiveDate>>,
    pub maintenance_cost: Option<BigDecimal>,
    pub maintenance_schedule: Option<String>,
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: Option<String>,
}
