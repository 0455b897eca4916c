use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::utilities::dates::option_flexible_date;
use uuid::Uuid;

use crate::{
    features::custom_fields::models::CustomFields,
    services::collection::{Entity, EntityKind},
};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    #[default]
    Pending,
    Expired,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default)]
    pub unit_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub monthly_rent: BigDecimal,
    /// Positive is owed by the tenant, negative is credit.
    pub balance: BigDecimal,
    #[serde(default)]
    pub status: TenantStatus,
    #[serde(default, with = "option_flexible_date")]
    pub lease_start: Option<NaiveDate>,
    #[serde(default, with = "option_flexible_date")]
    pub lease_end: Option<NaiveDate>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Tenant {
    const KIND: EntityKind = EntityKind::Tenant;

    fn id(&self) -> Uuid {
        self.id
    }
}
