use bigdecimal::BigDecimal;
use serde::Serialize;
use uuid::Uuid;

use crate::features::{
    facilities::models::Facility, leases::models::Lease, properties::models::Property,
    tenants::models::Tenant, units::models::Unit, work_orders::models::WorkOrder,
};

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeaseStatusBreakdown {
    pub active: usize,
    pub expiring: usize,
    pub expired: usize,
    pub terminated: usize,
}

impl LeaseStatusBreakdown {
    pub fn total(&self) -> usize {
        self.active + self.expiring + self.expired + self.terminated
    }
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStats {
    pub property_id: Uuid,
    pub total_units: u32,
    pub occupied_units: u32,
    pub vacant_units: u32,
    /// Whole percent, 0 when the property has no units.
    pub occupancy_rate: u32,
    pub monthly_revenue: BigDecimal,
    /// Sum of positive tenant balances; credits are ignored.
    pub outstanding_balance: BigDecimal,
    pub open_work_orders: usize,
    pub urgent_work_orders: usize,
    pub leases: LeaseStatusBreakdown,
}

/// Everything the building view renders for one property.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCanvasData<'a> {
    pub property: &'a Property,
    pub stats: PropertyStats,
    pub units: Vec<&'a Unit>,
    pub tenants: Vec<&'a Tenant>,
    pub leases: Vec<&'a Lease>,
    pub facilities: Vec<&'a Facility>,
    pub work_orders: Vec<&'a WorkOrder>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCounts {
    pub tenants: usize,
    /// Work orders that are open or in progress.
    pub work_orders: usize,
    pub active_leases: usize,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub properties: usize,
    pub total_units: u64,
    pub occupied_units: u64,
    pub occupancy_rate: u32,
    pub monthly_revenue: BigDecimal,
    pub outstanding_balance: BigDecimal,
    pub open_work_orders: usize,
}
