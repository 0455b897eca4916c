use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::units::{
    models::Unit,
    schemas::{UnitIn, UnitPatch},
};

impl UnitIn {
    pub fn into_unit(self, id: Uuid, now: DateTime<Utc>) -> Unit {
        Unit {
            id,
            property_id: self.property_id,
            unit_number: self.unit_number.trim().to_string(),
            floor: self.floor,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_footage: self.square_footage,
            rent: self.rent,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UnitPatch {
    pub fn apply_to(self, unit: &mut Unit) {
        if let Some(property_id) = self.property_id {
            unit.property_id = property_id;
        }
        if let Some(unit_number) = self.unit_number {
            unit.unit_number = unit_number.trim().to_string();
        }
        if let Some(floor) = self.floor {
            unit.floor = floor;
        }
        if let Some(bedrooms) = self.bedrooms {
            unit.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            unit.bathrooms = bathrooms;
        }
        if let Some(square_footage) = self.square_footage {
            unit.square_footage = square_footage;
        }
        if let Some(rent) = self.rent {
            unit.rent = rent;
        }
        if let Some(status) = self.status {
            unit.status = status;
        }
    }
}

impl Unit {
    pub fn verify(&self) -> Result<(), AppError> {
        if self.unit_number.is_empty() {
            return Err(AppError::ValidationError(
                "Unit number is required".to_string(),
            ));
        }
        if self.rent < BigDecimal::from(0) {
            return Err(AppError::ValidationError(
                "Rent cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
