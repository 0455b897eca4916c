use chrono::Utc;
use shared::utilities::{config::DeletePolicy, errors::AppError};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::units::{
        models::Unit,
        schemas::{UnitIn, UnitPatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

impl DataContext {
    pub fn list_units(&self) -> &[Unit] {
        self.units.list()
    }

    pub fn get_unit(&self, id: Uuid) -> Option<&Unit> {
        self.units.get_by_id(id)
    }

    pub fn create_unit(&mut self, input: UnitIn) -> Result<Unit, AppError> {
        input.validate()?;

        let unit = input.into_unit(Uuid::new_v4(), Utc::now());
        unit.verify()?;
        self.check_unit_links(&unit)?;

        self.units.insert(unit.clone());
        self.persist(&self.units);
        self.emit(EntityKind::Unit, unit.id, ChangeAction::Created);

        debug!("created unit {} ({}) in property {}", unit.id, unit.unit_number, unit.property_id);
        Ok(unit)
    }

    pub fn update_unit(&mut self, id: Uuid, patch: UnitPatch) -> Result<Unit, AppError> {
        let current = self
            .units
            .get_by_id(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Unit.to_string(), id))?;
        let mut unit = current.clone();

        patch.validate()?;
        patch.apply_to(&mut unit);
        unit.updated_at = Utc::now();
        unit.verify()?;
        self.check_unit_links(&unit)?;

        if unit.property_id != current.property_id
            && self.tenants.iter().any(|tenant| tenant.unit_id == Some(id))
        {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Unit {id} has tenants and cannot move to another property"
            )));
        }

        self.units.replace(unit.clone());
        self.persist(&self.units);
        self.emit(EntityKind::Unit, id, ChangeAction::Updated);

        debug!("updated unit {id}");
        Ok(unit)
    }

    /// Deletes a unit under `unit_delete_policy`. Cascade unlinks tenants
    /// living in it rather than deleting them.
    pub fn remove_unit(&mut self, id: Uuid) -> Result<Unit, AppError> {
        if !self.units.contains(id) {
            return Err(AppError::not_found(EntityKind::Unit.to_string(), id));
        }

        let occupants = self.tenants.count_by(|tenant| tenant.unit_id == Some(id));
        if self.config.unit_delete_policy == DeletePolicy::Restrict && occupants > 0 {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Unit {id} is still assigned to {occupants} tenants"
            )));
        }

        let now = Utc::now();
        let mut unlinked = Vec::with_capacity(occupants);
        for tenant in self.tenants.iter_mut() {
            if tenant.unit_id == Some(id) {
                tenant.unit_id = None;
                tenant.updated_at = now;
                unlinked.push(tenant.id);
            }
        }

        let unit = self
            .units
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Unit.to_string(), id))?;

        if !unlinked.is_empty() {
            self.persist(&self.tenants);
        }
        self.persist(&self.units);

        for tenant_id in &unlinked {
            self.emit(EntityKind::Tenant, *tenant_id, ChangeAction::Updated);
        }
        self.emit(EntityKind::Unit, id, ChangeAction::Deleted);

        info!("removed unit {id}, unlinked {} tenants", unlinked.len());
        Ok(unit)
    }

    fn check_unit_links(&self, unit: &Unit) -> Result<(), AppError> {
        self.ensure_property(unit.property_id)?;

        let duplicate = self.units.iter().any(|other| {
            other.id != unit.id
                && other.property_id == unit.property_id
                && other.unit_number.eq_ignore_ascii_case(&unit.unit_number)
        });
        if duplicate {
            return Err(AppError::ValidationError(format!(
                "Unit number {} already exists in this property",
                unit.unit_number
            )));
        }

        Ok(())
    }
}
