use std::collections::HashSet;

use chrono::Utc;
use shared::utilities::{config::DeletePolicy, errors::AppError};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::properties::{
        models::Property,
        schemas::{PropertyIn, PropertyPatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

/// Records that point at one property.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PropertyDependents {
    pub units: usize,
    pub tenants: usize,
    pub leases: usize,
    pub work_orders: usize,
    pub facilities: usize,
}

impl PropertyDependents {
    pub fn total(&self) -> usize {
        self.units + self.tenants + self.leases + self.work_orders + self.facilities
    }
}

impl DataContext {
    pub fn list_properties(&self) -> &[Property] {
        self.properties.list()
    }

    pub fn get_property(&self, id: Uuid) -> Option<&Property> {
        self.properties.get_by_id(id)
    }

    pub fn create_property(&mut self, input: PropertyIn) -> Result<Property, AppError> {
        input.validate()?;

        let property = input.into_property(Uuid::new_v4(), Utc::now());
        property.verify()?;

        self.properties.insert(property.clone());
        self.persist(&self.properties);
        self.emit(EntityKind::Property, property.id, ChangeAction::Created);

        debug!("created property {} ({})", property.id, property.name);
        Ok(property)
    }

    pub fn update_property(&mut self, id: Uuid, patch: PropertyPatch) -> Result<Property, AppError> {
        let mut property = self
            .properties
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Property.to_string(), id))?;

        patch.validate()?;
        patch.apply_to(&mut property);
        property.updated_at = Utc::now();
        property.verify()?;

        self.properties.replace(property.clone());
        self.persist(&self.properties);
        self.emit(EntityKind::Property, id, ChangeAction::Updated);

        debug!("updated property {id}");
        Ok(property)
    }

    pub fn property_dependents(&self, id: Uuid) -> PropertyDependents {
        PropertyDependents {
            units: self.units.count_by(|unit| unit.property_id == id),
            tenants: self.tenants.count_by(|tenant| tenant.property_id == id),
            leases: self.leases.count_by(|lease| lease.property_id == id),
            work_orders: self.work_orders.count_by(|order| order.property_id == id),
            facilities: self.facilities.count_by(|facility| facility.property_id == id),
        }
    }

    /// Deletes a property under `property_delete_policy`: cascade removes
    /// every record pointing at it, restrict refuses while any exist.
    pub fn remove_property(&mut self, id: Uuid) -> Result<Property, AppError> {
        if !self.properties.contains(id) {
            return Err(AppError::not_found(EntityKind::Property.to_string(), id));
        }

        let dependents = self.property_dependents(id);
        if self.config.property_delete_policy == DeletePolicy::Restrict && dependents.total() > 0
        {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Property {id} still has {} units, {} tenants, {} leases, {} work orders and {} facilities",
                dependents.units,
                dependents.tenants,
                dependents.leases,
                dependents.work_orders,
                dependents.facilities
            )));
        }

        let units = self.units.remove_where(|unit| unit.property_id == id);
        let tenants = self.tenants.remove_where(|tenant| tenant.property_id == id);
        let tenant_ids: HashSet<Uuid> = tenants.iter().map(|tenant| tenant.id).collect();
        let leases = self
            .leases
            .remove_where(|lease| lease.property_id == id || tenant_ids.contains(&lease.tenant_id));
        let work_orders = self.work_orders.remove_where(|order| order.property_id == id);
        let facilities = self
            .facilities
            .remove_where(|facility| facility.property_id == id);
        let property = self
            .properties
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Property.to_string(), id))?;

        if !units.is_empty() {
            self.persist(&self.units);
        }
        if !tenants.is_empty() {
            self.persist(&self.tenants);
        }
        if !leases.is_empty() {
            self.persist(&self.leases);
        }
        if !work_orders.is_empty() {
            self.persist(&self.work_orders);
        }
        if !facilities.is_empty() {
            self.persist(&self.facilities);
        }
        self.persist(&self.properties);

        self.emit_all(&units, ChangeAction::Deleted);
        self.emit_all(&tenants, ChangeAction::Deleted);
        self.emit_all(&leases, ChangeAction::Deleted);
        self.emit_all(&work_orders, ChangeAction::Deleted);
        self.emit_all(&facilities, ChangeAction::Deleted);
        self.emit(EntityKind::Property, id, ChangeAction::Deleted);

        info!(
            "🗑️ removed property {id} with {} units, {} tenants, {} leases, {} work orders, {} facilities",
            units.len(),
            tenants.len(),
            leases.len(),
            work_orders.len(),
            facilities.len()
        );

        Ok(property)
    }
}
