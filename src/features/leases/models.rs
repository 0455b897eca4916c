use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::utilities::dates::flexible_date;
use uuid::Uuid;

use crate::{
    features::custom_fields::models::CustomFields,
    services::collection::{Entity, EntityKind},
};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    #[default]
    Active,
    Expiring,
    Expired,
    /// Set by hand and never overwritten by date-based classification.
    Terminated,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    #[serde(default)]
    pub unit: String,
    #[serde(with = "flexible_date")]
    pub start_date: NaiveDate,
    #[serde(with = "flexible_date")]
    pub end_date: NaiveDate,
    pub monthly_rent: BigDecimal,
    #[serde(default)]
    pub security_deposit: BigDecimal,
    #[serde(default)]
    pub status: LeaseStatus,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Lease {
    const KIND: EntityKind = EntityKind::Lease;

    fn id(&self) -> Uuid {
        self.id
    }
}
