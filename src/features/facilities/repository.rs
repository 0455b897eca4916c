use chrono::Utc;
use shared::utilities::errors::AppError;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::facilities::{
        models::Facility,
        schemas::{FacilityIn, FacilityPatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

impl DataContext {
    pub fn list_facilities(&self) -> &[Facility] {
        self.facilities.list()
    }

    pub fn get_facility(&self, id: Uuid) -> Option<&Facility> {
        self.facilities.get_by_id(id)
    }

    pub fn create_facility(&mut self, input: FacilityIn) -> Result<Facility, AppError> {
        input.validate()?;

        let facility = input.into_facility(Uuid::new_v4(), Utc::now());
        self.ensure_property(facility.property_id)?;
        facility.verify()?;

        self.facilities.insert(facility.clone());
        self.persist(&self.facilities);
        self.emit(EntityKind::Facility, facility.id, ChangeAction::Created);

        debug!("created facility {} ({})", facility.id, facility.name);
        Ok(facility)
    }

    pub fn update_facility(
        &mut self,
        id: Uuid,
        patch: FacilityPatch,
    ) -> Result<Facility, AppError> {
        let mut facility = self
            .facilities
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Facility.to_string(), id))?;

        patch.validate()?;
        patch.apply_to(&mut facility);
        facility.updated_at = Utc::now();
        self.ensure_property(facility.property_id)?;
        facility.verify()?;

        self.facilities.replace(facility.clone());
        self.persist(&self.facilities);
        self.emit(EntityKind::Facility, id, ChangeAction::Updated);

        debug!("updated facility {id}");
        Ok(facility)
    }

    pub fn remove_facility(&mut self, id: Uuid) -> Result<Facility, AppError> {
        let facility = self
            .facilities
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Facility.to_string(), id))?;

        self.persist(&self.facilities);
        self.emit(EntityKind::Facility, id, ChangeAction::Deleted);

        debug!("removed facility {id}");
        Ok(facility)
    }
}
