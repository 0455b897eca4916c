use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::properties::{
    models::Property,
    schemas::{PropertyIn, PropertyPatch},
};

impl PropertyIn {
    pub fn into_property(self, id: Uuid, now: DateTime<Utc>) -> Property {
        Property {
            id,
            name: self.name.trim().to_string(),
            address: self.address,
            property_type: self.property_type,
            total_units: self.total_units,
            occupied_units: self.occupied_units,
            monthly_revenue: self.monthly_revenue,
            image_url: self.image_url,
            images: self.images,
            amenities: self.amenities,
            custom_fields: self.custom_fields,
            created_at: now,
            updated_at: now,
        }
    }
}

impl PropertyPatch {
    pub fn apply_to(self, property: &mut Property) {
        if let Some(name) = self.name {
            property.name = name.trim().to_string();
        }
        if let Some(address) = self.address {
            property.address = address;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(total_units) = self.total_units {
            property.total_units = total_units;
        }
        if let Some(occupied_units) = self.occupied_units {
            property.occupied_units = occupied_units;
        }
        if let Some(monthly_revenue) = self.monthly_revenue {
            property.monthly_revenue = monthly_revenue;
        }
        if let Some(image_url) = self.image_url {
            property.image_url = image_url;
        }
        if let Some(images) = self.images {
            property.images = images;
        }
        if let Some(amenities) = self.amenities {
            property.amenities = amenities;
        }
        if let Some(custom_fields) = self.custom_fields {
            property.custom_fields = custom_fields;
        }
    }
}

impl Property {
    pub fn verify(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Property name is required".to_string(),
            ));
        }

        if self.occupied_units > self.total_units {
            return Err(AppError::ValidationError(format!(
                "Occupied units ({}) cannot exceed total units ({})",
                self.occupied_units, self.total_units
            )));
        }

        if self.monthly_revenue < BigDecimal::from(0) {
            return Err(AppError::ValidationError(
                "Monthly revenue cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    pub fn vacant_units(&self) -> u32 {
        self.total_units.saturating_sub(self.occupied_units)
    }

    pub fn occupancy_rate(&self) -> u32 {
        occupancy_rate(self.occupied_units.into(), self.total_units.into())
    }
}

/// `round(100 * occupied / total)` with halves rounded up; 0 when there are
/// no units.
pub fn occupancy_rate(occupied: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (200 * occupied + total) / (2 * total);
    u32::try_from(rate).unwrap_or(u32::MAX)
}
