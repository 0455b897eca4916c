use chrono::Utc;
use shared::utilities::{config::DeletePolicy, errors::AppError};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::tenants::{
        models::Tenant,
        schemas::{TenantIn, TenantPatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

impl DataContext {
    pub fn list_tenants(&self) -> &[Tenant] {
        self.tenants.list()
    }

    pub fn get_tenant(&self, id: Uuid) -> Option<&Tenant> {
        self.tenants.get_by_id(id)
    }

    pub fn create_tenant(&mut self, input: TenantIn) -> Result<Tenant, AppError> {
        input.validate()?;

        let tenant = input.into_tenant(Uuid::new_v4(), Utc::now());
        self.check_tenant_links(&tenant)?;
        tenant.verify()?;

        self.tenants.insert(tenant.clone());
        self.persist(&self.tenants);
        self.emit(EntityKind::Tenant, tenant.id, ChangeAction::Created);

        debug!("created tenant {} in property {}", tenant.id, tenant.property_id);
        Ok(tenant)
    }

    pub fn update_tenant(&mut self, id: Uuid, patch: TenantPatch) -> Result<Tenant, AppError> {
        let current = self
            .tenants
            .get_by_id(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Tenant.to_string(), id))?;
        let mut tenant = current.clone();

        patch.validate()?;
        patch.apply_to(&mut tenant);
        tenant.updated_at = Utc::now();
        self.check_tenant_links(&tenant)?;
        tenant.verify()?;

        if tenant.property_id != current.property_id
            && self.leases.iter().any(|lease| lease.tenant_id == id)
        {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Tenant {id} has leases and cannot move to another property"
            )));
        }

        self.tenants.replace(tenant.clone());
        self.persist(&self.tenants);
        self.emit(EntityKind::Tenant, id, ChangeAction::Updated);

        debug!("updated tenant {id}");
        Ok(tenant)
    }

    /// Deletes a tenant under `tenant_delete_policy`, which decides the fate
    /// of the tenant's leases.
    pub fn remove_tenant(&mut self, id: Uuid) -> Result<Tenant, AppError> {
        if !self.tenants.contains(id) {
            return Err(AppError::not_found(EntityKind::Tenant.to_string(), id));
        }

        let lease_count = self.leases.count_by(|lease| lease.tenant_id == id);
        if self.config.tenant_delete_policy == DeletePolicy::Restrict && lease_count > 0 {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Tenant {id} still has {lease_count} leases"
            )));
        }

        let leases = self.leases.remove_where(|lease| lease.tenant_id == id);
        let tenant = self
            .tenants
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Tenant.to_string(), id))?;

        if !leases.is_empty() {
            self.persist(&self.leases);
        }
        self.persist(&self.tenants);

        self.emit_all(&leases, ChangeAction::Deleted);
        self.emit(EntityKind::Tenant, id, ChangeAction::Deleted);

        info!("removed tenant {id} with {} leases", leases.len());
        Ok(tenant)
    }

    fn check_tenant_links(&self, tenant: &Tenant) -> Result<(), AppError> {
        self.ensure_property(tenant.property_id)?;

        if let Some(unit_id) = tenant.unit_id {
            let unit = self.units.get_by_id(unit_id).ok_or_else(|| {
                AppError::ReferentialIntegrityError(format!("Unit {unit_id} does not exist"))
            })?;
            if unit.property_id != tenant.property_id {
                return Err(AppError::ReferentialIntegrityError(format!(
                    "Unit {unit_id} belongs to property {}, not {}",
                    unit.property_id, tenant.property_id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        features::tenants::models::TenantStatus,
        utilities::test_support::{
            context, context_with, property_in, seed_property_graph, tenant_in, unit_in,
        },
    };
    use bigdecimal::BigDecimal;
    use shared::utilities::config::Config;

    #[test]
    fn create_with_unknown_property_adds_nothing() {
        let mut ctx = context();

        let err = ctx.create_tenant(tenant_in(Uuid::new_v4(), "Ghost")).unwrap_err();

        assert!(err.is_referential_integrity());
        assert!(ctx.list_tenants().is_empty());
    }

    #[test]
    fn create_fills_defaults() {
        let mut ctx = context();
        let property = ctx.create_property(property_in("Elm", 4, 0)).unwrap();

        let tenant = ctx.create_tenant(tenant_in(property.id, "Ana")).unwrap();

        assert_eq!(tenant.status, TenantStatus::Pending);
        assert!(tenant.custom_fields.is_empty());
        assert_eq!(ctx.get_tenant(tenant.id), Some(&tenant));
    }

    #[test]
    fn unit_must_belong_to_same_property() {
        let mut ctx = context();
        let a = ctx.create_property(property_in("A", 4, 0)).unwrap();
        let b = ctx.create_property(property_in("B", 4, 0)).unwrap();
        let unit = ctx.create_unit(unit_in(b.id, "2B")).unwrap();

        let err = ctx
            .create_tenant(TenantIn {
                unit_id: Some(unit.id),
                ..tenant_in(a.id, "Mismatch")
            })
            .unwrap_err();
        assert!(err.is_referential_integrity());

        let err = ctx
            .create_tenant(TenantIn {
                unit_id: Some(Uuid::new_v4()),
                ..tenant_in(a.id, "Nowhere")
            })
            .unwrap_err();
        assert!(err.is_referential_integrity());
        assert!(ctx.list_tenants().is_empty());
    }

    #[test]
    fn update_replaces_fields_and_rejects_missing_id() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);

        let updated = ctx
            .update_tenant(
                graph.tenant,
                TenantPatch {
                    balance: Some(BigDecimal::from(-25)),
                    status: Some(TenantStatus::Active),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.balance, BigDecimal::from(-25));
        assert_eq!(updated.status, TenantStatus::Active);

        assert!(
            ctx.update_tenant(Uuid::new_v4(), TenantPatch::default())
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn tenant_with_leases_cannot_change_property() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let other = ctx.create_property(property_in("Other", 2, 0)).unwrap();

        let err = ctx
            .update_tenant(
                graph.tenant,
                TenantPatch {
                    property_id: Some(other.id),
                    unit_id: Some(None),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(err.is_referential_integrity());
        assert_eq!(ctx.get_tenant(graph.tenant).unwrap().property_id, graph.property);
    }

    #[test]
    fn cascade_removes_leases() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);

        ctx.remove_tenant(graph.tenant).unwrap();

        assert!(ctx.get_tenant(graph.tenant).is_none());
        assert!(ctx.get_lease(graph.lease).is_none());
        assert!(ctx.remove_tenant(graph.tenant).unwrap_err().is_not_found());
    }

    #[test]
    fn restrict_rejects_tenant_with_leases() {
        let mut ctx = context_with(Config {
            tenant_delete_policy: DeletePolicy::Restrict,
            ..Config::default()
        });
        let graph = seed_property_graph(&mut ctx);

        let err = ctx.remove_tenant(graph.tenant).unwrap_err();

        assert!(err.is_referential_integrity());
        assert!(ctx.get_lease(graph.lease).is_some());
    }
}
