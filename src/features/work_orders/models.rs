use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::utilities::dates::{flexible_date, option_flexible_date};
use uuid::Uuid;

use crate::services::collection::{Entity, EntityKind};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum WorkOrderPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    /// Anything not yet completed or cancelled.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Open or in progress, the states shown on navigation badges.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: Uuid,
    pub property_id: Uuid,
    #[serde(default)]
    pub unit: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: WorkOrderPriority,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub reported_by: String,
    #[serde(with = "flexible_date")]
    pub created_date: NaiveDate,
    #[serde(default, with = "option_flexible_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, with = "option_flexible_date")]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_cost: Option<BigDecimal>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl WorkOrder {
    pub fn is_urgent_and_open(&self) -> bool {
        self.priority == WorkOrderPriority::Urgent && self.status.is_open()
    }
}

impl Entity for WorkOrder {
    const KIND: EntityKind = EntityKind::WorkOrder;

    fn id(&self) -> Uuid {
        self.id
    }
}
