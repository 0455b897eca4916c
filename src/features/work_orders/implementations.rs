use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::work_orders::{
    models::{WorkOrder, WorkOrderStatus},
    schemas::{WorkOrderIn, WorkOrderPatch},
};

impl WorkOrderIn {
    pub fn into_work_order(self, id: Uuid, now: DateTime<Utc>) -> WorkOrder {
        WorkOrder {
            id,
            property_id: self.property_id,
            unit: trimmed(self.unit),
            title: self.title.trim().to_string(),
            description: self.description,
            category: self.category.trim().to_string(),
            priority: self.priority,
            status: self.status,
            assigned_to: trimmed(self.assigned_to),
            reported_by: self.reported_by.trim().to_string(),
            created_date: self.created_date.unwrap_or_else(|| now.date_naive()),
            due_date: self.due_date,
            completed_date: self.completed_date,
            estimated_cost: self.estimated_cost,
            created_at: now,
            updated_at: now,
        }
    }
}

impl WorkOrderPatch {
    pub fn apply_to(self, order: &mut WorkOrder) {
        if let Some(property_id) = self.property_id {
            order.property_id = property_id;
        }
        if let Some(unit) = self.unit {
            order.unit = trimmed(unit);
        }
        if let Some(title) = self.title {
            order.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            order.description = description;
        }
        if let Some(category) = self.category {
            order.category = category.trim().to_string();
        }
        if let Some(priority) = self.priority {
            order.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            order.assigned_to = trimmed(assigned_to);
        }
        if let Some(reported_by) = self.reported_by {
            order.reported_by = reported_by.trim().to_string();
        }
        if let Some(created_date) = self.created_date {
            order.created_date = created_date;
        }
        if let Some(due_date) = self.due_date {
            order.due_date = due_date;
        }
        if let Some(estimated_cost) = self.estimated_cost {
            order.estimated_cost = estimated_cost;
        }

        if let Some(status) = self.status {
            // leaving completed drops the stamp unless one is sent explicitly
            if order.status == WorkOrderStatus::Completed && status != WorkOrderStatus::Completed {
                order.completed_date = None;
            }
            order.status = status;
        }
        if let Some(completed_date) = self.completed_date {
            order.completed_date = completed_date;
        }
    }
}

impl WorkOrder {
    /// Stamps `today` on a completed order that has no completion date.
    pub fn stamp_completion(&mut self, today: NaiveDate) {
        if self.status == WorkOrderStatus::Completed && self.completed_date.is_none() {
            self.completed_date = Some(today);
        }
    }

    pub fn verify(&self) -> Result<(), AppError> {
        if self.title.is_empty() {
            return Err(AppError::ValidationError(
                "Work order title is required".to_string(),
            ));
        }

        if self.status != WorkOrderStatus::Completed && self.completed_date.is_some() {
            return Err(AppError::ValidationError(
                "Completed date is only allowed on completed work orders".to_string(),
            ));
        }

        if let Some(completed) = self.completed_date
            && completed < self.created_date
        {
            return Err(AppError::ValidationError(format!(
                "Completed date {completed} is before created date {}",
                self.created_date
            )));
        }

        if let Some(cost) = &self.estimated_cost
            && *cost < BigDecimal::from(0)
        {
            return Err(AppError::ValidationError(
                "Estimated cost cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status.is_open() && self.due_date.is_some_and(|due| due < today)
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
