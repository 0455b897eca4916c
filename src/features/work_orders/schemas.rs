use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::features::work_orders::models::{WorkOrderPriority, WorkOrderStatus};

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkOrderIn {
    pub property_id: Uuid,
    pub unit: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Work order title is required"))]
    pub title: String,
    pub description: String,
    #[validate(length(max = 64, message = "Category is too long"))]
    pub category: String,
    pub priority: WorkOrderPriority,
    pub status: WorkOrderStatus,
    pub assigned_to: Option<String>,
    pub reported_by: String,
    /// Defaults to the creation day.
    pub created_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub estimated_cost: Option<BigDecimal>,
}

#[derive(Deserialize, Serialize, Validate, Clone, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkOrderPatch {
    pub property_id: Option<Uuid>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub unit: Option<Option<String>>,
    #[validate(length(min = 1, max = 200, message = "Work order title is required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 64, message = "Category is too long"))]
    pub category: Option<String>,
    pub priority: Option<WorkOrderPriority>,
    pub status: Option<WorkOrderStatus>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub assigned_to: Option<Option<String>>,
    pub reported_by: Option<String>,
    pub created_date: Option<NaiveDate>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub completed_date: Option<Option<NaiveDate>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub estimated_cost: Option<Option<BigDecimal>>,
}
