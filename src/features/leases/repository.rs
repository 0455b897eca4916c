use chrono::{NaiveDate, Utc};
use shared::utilities::errors::AppError;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::leases::{
        models::{Lease, LeaseStatus},
        schemas::{LeaseIn, LeasePatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

impl DataContext {
    pub fn list_leases(&self) -> &[Lease] {
        self.leases.list()
    }

    pub fn get_lease(&self, id: Uuid) -> Option<&Lease> {
        self.leases.get_by_id(id)
    }

    pub fn create_lease(&mut self, input: LeaseIn) -> Result<Lease, AppError> {
        input.validate()?;

        let lease = input.into_lease(
            Uuid::new_v4(),
            Utc::now(),
            self.config.lease_expiring_window_days,
        )?;
        self.check_lease_links(&lease)?;
        lease.verify()?;

        self.leases.insert(lease.clone());
        self.persist(&self.leases);
        self.emit(EntityKind::Lease, lease.id, ChangeAction::Created);

        debug!("created lease {} for tenant {}", lease.id, lease.tenant_id);
        Ok(lease)
    }

    pub fn update_lease(&mut self, id: Uuid, patch: LeasePatch) -> Result<Lease, AppError> {
        let mut lease = self
            .leases
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::Lease.to_string(), id))?;

        patch.validate()?;
        let now = Utc::now();
        patch.apply_to(
            &mut lease,
            now.date_naive(),
            self.config.lease_expiring_window_days,
        );
        lease.updated_at = now;
        self.check_lease_links(&lease)?;
        lease.verify()?;

        self.leases.replace(lease.clone());
        self.persist(&self.leases);
        self.emit(EntityKind::Lease, id, ChangeAction::Updated);

        debug!("updated lease {id}");
        Ok(lease)
    }

    pub fn remove_lease(&mut self, id: Uuid) -> Result<Lease, AppError> {
        let lease = self
            .leases
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::Lease.to_string(), id))?;

        self.persist(&self.leases);
        self.emit(EntityKind::Lease, id, ChangeAction::Deleted);

        debug!("removed lease {id}");
        Ok(lease)
    }

    pub fn terminate_lease(&mut self, id: Uuid) -> Result<Lease, AppError> {
        self.update_lease(
            id,
            LeasePatch {
                status: Some(LeaseStatus::Terminated),
                ..Default::default()
            },
        )
    }

    /// Reclassifies every non-terminated lease against `today` and returns
    /// how many changed status.
    pub fn refresh_lease_statuses(&mut self, today: NaiveDate) -> usize {
        let window = self.config.lease_expiring_window_days;
        let now = Utc::now();

        let mut changed = Vec::new();
        for lease in self.leases.iter_mut() {
            let status = lease.classify(today, window);
            if status != lease.status {
                lease.status = status;
                lease.updated_at = now;
                changed.push(lease.id);
            }
        }

        if !changed.is_empty() {
            self.persist(&self.leases);
            for id in &changed {
                self.emit(EntityKind::Lease, *id, ChangeAction::Updated);
            }
            info!("reclassified {} leases as of {today}", changed.len());
        }

        changed.len()
    }

    fn check_lease_links(&self, lease: &Lease) -> Result<(), AppError> {
        self.ensure_property(lease.property_id)?;

        let tenant = self.tenants.get_by_id(lease.tenant_id).ok_or_else(|| {
            AppError::ReferentialIntegrityError(format!(
                "Tenant {} does not exist",
                lease.tenant_id
            ))
        })?;
        if tenant.property_id != lease.property_id {
            return Err(AppError::ReferentialIntegrityError(format!(
                "Tenant {} belongs to property {}, not {}",
                tenant.id, tenant.property_id, lease.property_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::test_support::{
        context, context_with, lease_in, property_in, seed_property_graph, tenant_in,
    };
    use chrono::Duration;
    use shared::utilities::config::Config;

    #[test]
    fn create_classifies_from_today() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let today = DataContext::today();

        let soon = ctx
            .create_lease(lease_in(
                graph.tenant,
                graph.property,
                today - Duration::days(300),
                today + Duration::days(10),
            ))
            .unwrap();
        let later = ctx
            .create_lease(lease_in(
                graph.tenant,
                graph.property,
                today,
                today + Duration::days(365),
            ))
            .unwrap();

        assert_eq!(soon.status, LeaseStatus::Expiring);
        assert_eq!(later.status, LeaseStatus::Active);
    }

    #[test]
    fn create_requires_existing_tenant_on_same_property() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let other = ctx.create_property(property_in("Other", 2, 0)).unwrap();
        let outsider = ctx.create_tenant(tenant_in(other.id, "Outsider")).unwrap();
        let today = DataContext::today();
        let before = ctx.list_leases().len();

        let missing = ctx
            .create_lease(lease_in(
                Uuid::new_v4(),
                graph.property,
                today,
                today + Duration::days(30),
            ))
            .unwrap_err();
        let mismatched = ctx
            .create_lease(lease_in(
                outsider.id,
                graph.property,
                today,
                today + Duration::days(30),
            ))
            .unwrap_err();

        assert!(missing.is_referential_integrity());
        assert!(mismatched.is_referential_integrity());
        assert_eq!(ctx.list_leases().len(), before);
    }

    #[test]
    fn update_rejects_reversed_dates_without_writing() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let original = ctx.get_lease(graph.lease).cloned().unwrap();

        let err = ctx
            .update_lease(
                graph.lease,
                LeasePatch {
                    end_date: Some(original.start_date),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ctx.get_lease(graph.lease), Some(&original));
    }

    #[test]
    fn oversized_window_classifies_without_overflow() {
        let mut ctx = context_with(Config {
            lease_expiring_window_days: 200_000_000,
            ..Config::default()
        });
        let graph = seed_property_graph(&mut ctx);
        let today = DataContext::today();

        assert_eq!(
            ctx.get_lease(graph.lease).unwrap().status,
            LeaseStatus::Expiring
        );
        assert_eq!(ctx.refresh_lease_statuses(today), 0);
        assert!(
            ctx.update_lease(
                graph.lease,
                LeasePatch {
                    end_date: Some(today + Duration::days(30)),
                    ..Default::default()
                },
            )
            .is_ok()
        );
    }

    #[test]
    fn terminated_survives_refresh() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let today = DataContext::today();

        ctx.terminate_lease(graph.lease).unwrap();
        let changed = ctx.refresh_lease_statuses(today + Duration::days(3_650));

        assert_eq!(changed, 0);
        assert_eq!(ctx.get_lease(graph.lease).unwrap().status, LeaseStatus::Terminated);
    }

    #[test]
    fn refresh_reports_changed_leases() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);
        let end = ctx.get_lease(graph.lease).unwrap().end_date;

        assert_eq!(ctx.refresh_lease_statuses(end + Duration::days(1)), 1);
        assert_eq!(ctx.get_lease(graph.lease).unwrap().status, LeaseStatus::Expired);
        assert_eq!(ctx.refresh_lease_statuses(end + Duration::days(1)), 0);
    }

    #[test]
    fn remove_missing_lease_is_not_found() {
        let mut ctx = context();
        let graph = seed_property_graph(&mut ctx);

        assert!(ctx.remove_lease(graph.lease).is_ok());
        assert!(ctx.remove_lease(graph.lease).unwrap_err().is_not_found());
    }
}
