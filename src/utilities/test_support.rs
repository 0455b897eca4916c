use bigdecimal::BigDecimal;
use chrono::{Duration, NaiveDate};
use shared::utilities::config::Config;
use uuid::Uuid;

use crate::{
    features::{
        facilities::schemas::FacilityIn,
        leases::schemas::LeaseIn,
        properties::schemas::PropertyIn,
        tenants::schemas::TenantIn,
        units::schemas::UnitIn,
        work_orders::{
            models::{WorkOrderPriority, WorkOrderStatus},
            schemas::WorkOrderIn,
        },
    },
    utilities::app_state::DataContext,
};

/// Ids of one property and one record of every dependent kind.
#[derive(Clone, Copy, Debug)]
pub struct PropertyGraph {
    pub property: Uuid,
    pub unit: Uuid,
    pub tenant: Uuid,
    pub lease: Uuid,
    pub work_order: Uuid,
    pub facility: Uuid,
}

pub fn context() -> DataContext {
    context_with(Config::default())
}

pub fn context_with(config: Config) -> DataContext {
    DataContext::in_memory(config)
}

pub fn property_in(name: &str, total_units: u32, occupied_units: u32) -> PropertyIn {
    PropertyIn {
        name: name.to_string(),
        total_units,
        occupied_units,
        ..Default::default()
    }
}

pub fn unit_in(property_id: Uuid, unit_number: &str) -> UnitIn {
    UnitIn {
        property_id,
        unit_number: unit_number.to_string(),
        rent: BigDecimal::from(1_000),
        ..Default::default()
    }
}

pub fn tenant_in(property_id: Uuid, name: &str) -> TenantIn {
    TenantIn {
        property_id,
        name: name.to_string(),
        monthly_rent: BigDecimal::from(1_000),
        ..Default::default()
    }
}

pub fn lease_in(tenant_id: Uuid, property_id: Uuid, start: NaiveDate, end: NaiveDate) -> LeaseIn {
    LeaseIn {
        tenant_id,
        property_id,
        unit: "1A".to_string(),
        start_date: Some(start),
        end_date: Some(end),
        monthly_rent: BigDecimal::from(1_000),
        security_deposit: BigDecimal::from(2_000),
        ..Default::default()
    }
}

pub fn work_order_in(property_id: Uuid, priority: WorkOrderPriority) -> WorkOrderIn {
    WorkOrderIn {
        property_id,
        title: "Broken heater".to_string(),
        category: "hvac".to_string(),
        priority,
        status: WorkOrderStatus::Open,
        reported_by: "front desk".to_string(),
        ..Default::default()
    }
}

pub fn facility_in(property_id: Uuid, name: &str) -> FacilityIn {
    FacilityIn {
        property_id,
        name: name.to_string(),
        category: "amenity".to_string(),
        ..Default::default()
    }
}

/// Seeds a property with one unit, an assigned tenant, an active lease, an
/// open work order and a facility.
pub fn seed_property_graph(ctx: &mut DataContext) -> PropertyGraph {
    let today = DataContext::today();

    let property = ctx.create_property(property_in("Harbor View", 12, 1)).unwrap();
    let unit = ctx.create_unit(unit_in(property.id, "1A")).unwrap();
    let tenant = ctx
        .create_tenant(TenantIn {
            unit_id: Some(unit.id),
            ..tenant_in(property.id, "Riley Chen")
        })
        .unwrap();
    let lease = ctx
        .create_lease(lease_in(
            tenant.id,
            property.id,
            today - Duration::days(30),
            today + Duration::days(365),
        ))
        .unwrap();
    let work_order = ctx
        .create_work_order(work_order_in(property.id, WorkOrderPriority::Medium))
        .unwrap();
    let facility = ctx.create_facility(facility_in(property.id, "Laundry room")).unwrap();

    PropertyGraph {
        property: property.id,
        unit: unit.id,
        tenant: tenant.id,
        lease: lease.id,
        work_order: work_order.id,
        facility: facility.id,
    }
}
