use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::facilities::{
    models::{Facility, FacilityStatus},
    schemas::{FacilityIn, FacilityPatch},
};

impl FacilityIn {
    pub fn into_facility(self, id: Uuid, now: DateTime<Utc>) -> Facility {
        Facility {
            id,
            property_id: self.property_id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            status: self.status,
            condition: self.condition,
            last_maintenance: self.last_maintenance,
            next_maintenance: self.next_maintenance,
            maintenance_cost: self.maintenance_cost,
            maintenance_schedule: self.maintenance_schedule.trim().to_string(),
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl FacilityPatch {
    pub fn apply_to(self, facility: &mut Facility) {
        if let Some(property_id) = self.property_id {
            facility.property_id = property_id;
        }
        if let Some(name) = self.name {
            facility.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            facility.category = category.trim().to_string();
        }
        if let Some(status) = self.status {
            facility.status = status;
        }
        if let Some(condition) = self.condition {
            facility.condition = condition;
        }
        if let Some(last_maintenance) = self.last_maintenance {
            facility.last_maintenance = last_maintenance;
        }
        if let Some(next_maintenance) = self.next_maintenance {
            facility.next_maintenance = next_maintenance;
        }
        if let Some(maintenance_cost) = self.maintenance_cost {
            facility.maintenance_cost = maintenance_cost;
        }
        if let Some(maintenance_schedule) = self.maintenance_schedule {
            facility.maintenance_schedule = maintenance_schedule.trim().to_string();
        }
        if let Some(notes) = self.notes {
            facility.notes = notes;
        }
    }
}

impl Facility {
    pub fn verify(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::ValidationError(
                "Facility name is required".to_string(),
            ));
        }
        if self.maintenance_cost < BigDecimal::from(0) {
            return Err(AppError::ValidationError(
                "Maintenance cost cannot be negative".to_string(),
            ));
        }
        if let (Some(last), Some(next)) = (self.last_maintenance, self.next_maintenance)
            && next < last
        {
            return Err(AppError::ValidationError(format!(
                "Next maintenance {next} is before last maintenance {last}"
            )));
        }
        Ok(())
    }

    pub fn maintenance_due(&self, today: NaiveDate) -> bool {
        self.status != FacilityStatus::Offline
            && self.next_maintenance.is_some_and(|next| next <= today)
    }
}
