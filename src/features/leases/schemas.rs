use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::{custom_fields::models::CustomFields, leases::models::LeaseStatus};

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaseIn {
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    #[validate(length(max = 32, message = "Unit identifier is too long"))]
    pub unit: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: BigDecimal,
    pub security_deposit: BigDecimal,
    /// Classified from the dates when omitted.
    pub status: Option<LeaseStatus>,
    pub custom_fields: CustomFields,
}

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LeasePatch {
    pub tenant_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
    #[validate(length(max = 32, message = "Unit identifier is too long"))]
    pub unit: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: Option<BigDecimal>,
    pub security_deposit: Option<BigDecimal>,
    pub status: Option<LeaseStatus>,
    pub custom_fields: Option<CustomFields>,
}
