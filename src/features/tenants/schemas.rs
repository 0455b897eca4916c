use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::{custom_fields::models::CustomFields, tenants::models::TenantStatus};

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantIn {
    pub property_id: Uuid,
    pub unit_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120, message = "Tenant name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: Option<String>,
    pub monthly_rent: BigDecimal,
    pub balance: BigDecimal,
    pub status: TenantStatus,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub custom_fields: CustomFields,
}

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantPatch {
    pub property_id: Option<Uuid>,
    /// `Some(None)` moves the tenant out of any unit.
    #[serde(with = "::serde_with::rust::double_option")]
    pub unit_id: Option<Option<Uuid>>,
    #[validate(length(min = 1, max = 120, message = "Tenant name is required"))]
    pub name: Option<String>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub email: Option<Option<String>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
    pub monthly_rent: Option<BigDecimal>,
    pub balance: Option<BigDecimal>,
    pub status: Option<TenantStatus>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub lease_start: Option<Option<NaiveDate>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub lease_end: Option<Option<NaiveDate>>,
    pub custom_fields: Option<CustomFields>,
}
