#![allow(dead_code)]

use bigdecimal::BigDecimal;
use chrono::{Duration, NaiveDate};
use property_ledger::{
    DataContext,
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
};
use uuid::Uuid;

pub struct Seeded {
    pub property: Uuid,
    pub unit: Uuid,
    pub tenant: Uuid,
    pub lease: Uuid,
    pub work_order: Uuid,
    pub facility: Uuid,
}

pub fn property(name: &str, total_units: u32, occupied_units: u32) -> PropertyIn {
    PropertyIn {
        name: name.to_string(),
        total_units,
        occupied_units,
        monthly_revenue: BigDecimal::from(4_800),
        ..Default::default()
    }
}

pub fn tenant(property_id: Uuid, name: &str, balance: i64) -> TenantIn {
    TenantIn {
        property_id,
        name: name.to_string(),
        monthly_rent: BigDecimal::from(1_200),
        balance: BigDecimal::from(balance),
        ..Default::default()
    }
}

pub fn lease(tenant_id: Uuid, property_id: Uuid, start: NaiveDate, end: NaiveDate) -> LeaseIn {
    LeaseIn {
        tenant_id,
        property_id,
        unit: "2B".to_string(),
        start_date: Some(start),
        end_date: Some(end),
        monthly_rent: BigDecimal::from(1_200),
        security_deposit: BigDecimal::from(1_200),
        ..Default::default()
    }
}

pub fn work_order(
    property_id: Uuid,
    priority: WorkOrderPriority,
    status: WorkOrderStatus,
) -> WorkOrderIn {
    WorkOrderIn {
        property_id,
        title: "Replace hallway lights".to_string(),
        category: "electrical".to_string(),
        priority,
        status,
        reported_by: "Superintendent".to_string(),
        ..Default::default()
    }
}

/// A property with one record of every dependent kind.
pub fn seed(ctx: &mut DataContext, name: &str) -> Seeded {
    let today = DataContext::today();

    let property = ctx.create_property(property(name, 6, 1)).unwrap();
    let unit = ctx
        .create_unit(UnitIn {
            property_id: property.id,
            unit_number: "2B".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            rent: BigDecimal::from(1_200),
            ..Default::default()
        })
        .unwrap();
    let tenant = ctx
        .create_tenant(TenantIn {
            unit_id: Some(unit.id),
            ..tenant(property.id, "Morgan Lee", 0)
        })
        .unwrap();
    let lease = ctx
        .create_lease(lease(
            tenant.id,
            property.id,
            today - Duration::days(90),
            today + Duration::days(275),
        ))
        .unwrap();
    let work_order = ctx
        .create_work_order(work_order(
            property.id,
            WorkOrderPriority::Low,
            WorkOrderStatus::Scheduled,
        ))
        .unwrap();
    let facility = ctx
        .create_facility(FacilityIn {
            property_id: property.id,
            name: "Boiler room".to_string(),
            ..Default::default()
        })
        .unwrap();

    Seeded {
        property: property.id,
        unit: unit.id,
        tenant: tenant.id,
        lease: lease.id,
        work_order: work_order.id,
        facility: facility.id,
    }
}
