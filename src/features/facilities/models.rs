use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::utilities::dates::option_flexible_date;
use uuid::Uuid;

use crate::services::collection::{Entity, EntityKind};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    #[default]
    Operational,
    Maintenance,
    Offline,
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: Uuid,
    pub property_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: FacilityStatus,
    #[serde(default)]
    pub condition: FacilityCondition,
    #[serde(default, with = "option_flexible_date")]
    pub last_maintenance: Option<NaiveDate>,
    #[serde(default, with = "option_flexible_date")]
    pub next_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub maintenance_cost: BigDecimal,
    /// Free-form cadence such as "monthly" or "every 6 months".
    #[serde(default)]
    pub maintenance_schedule: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Facility {
    const KIND: EntityKind = EntityKind::Facility;

    fn id(&self) -> Uuid {
        self.id
    }
}
