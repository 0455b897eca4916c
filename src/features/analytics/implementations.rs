use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    features::{
        analytics::schemas::{
            BadgeCounts, BuildingCanvasData, LeaseStatusBreakdown, PortfolioSummary,
            PropertyStats,
        },
        leases::{
            implementations::window_end,
            models::{Lease, LeaseStatus},
        },
        properties::{implementations::occupancy_rate, models::Property},
        tenants::models::Tenant,
        work_orders::models::{WorkOrder, WorkOrderStatus},
    },
    utilities::app_state::DataContext,
};

impl DataContext {
    /// Derived figures for one property, or `None` when it does not exist.
    pub fn property_stats(&self, property_id: Uuid) -> Option<PropertyStats> {
        let property = self.properties.get_by_id(property_id)?;
        Some(self.stats_for(property))
    }

    /// The property with its stats and every record pointing at it, or
    /// `None` when it does not exist.
    pub fn building_canvas_data(&self, property_id: Uuid) -> Option<BuildingCanvasData<'_>> {
        let property = self.properties.get_by_id(property_id)?;

        Some(BuildingCanvasData {
            property,
            stats: self.stats_for(property),
            units: self.units.filter_by(|unit| unit.property_id == property_id),
            tenants: self.tenants.filter_by(|tenant| tenant.property_id == property_id),
            leases: self.leases.filter_by(|lease| lease.property_id == property_id),
            facilities: self
                .facilities
                .filter_by(|facility| facility.property_id == property_id),
            work_orders: self
                .work_orders
                .filter_by(|order| order.property_id == property_id),
        })
    }

    pub fn global_badge_counts(&self) -> BadgeCounts {
        BadgeCounts {
            tenants: self.tenants.len(),
            work_orders: self.work_orders.count_by(|order| order.status.is_active()),
            active_leases: self
                .leases
                .count_by(|lease| lease.status == LeaseStatus::Active),
        }
    }

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        let total_units: u64 = self
            .properties
            .iter()
            .map(|property| u64::from(property.total_units))
            .sum();
        let occupied_units: u64 = self
            .properties
            .iter()
            .map(|property| u64::from(property.occupied_units))
            .sum();

        PortfolioSummary {
            properties: self.properties.len(),
            total_units,
            occupied_units,
            occupancy_rate: occupancy_rate(occupied_units, total_units),
            monthly_revenue: self
                .properties
                .iter()
                .fold(BigDecimal::from(0), |sum, property| {
                    sum + &property.monthly_revenue
                }),
            outstanding_balance: outstanding_balance(self.tenants.iter()),
            open_work_orders: self.work_orders.count_by(|order| order.status.is_open()),
        }
    }

    pub fn work_orders_by_status(&self, status: WorkOrderStatus) -> Vec<&WorkOrder> {
        self.work_orders.filter_by(|order| order.status == status)
    }

    /// Non-terminated leases ending between `today` and `today + days`,
    /// soonest first. A negative `days` gives an empty report.
    pub fn leases_expiring_within(&self, today: NaiveDate, days: i64) -> Vec<&Lease> {
        let Some(horizon) = window_end(today, days) else {
            return Vec::new();
        };
        let mut leases = self.leases.filter_by(|lease| {
            lease.status != LeaseStatus::Terminated
                && lease.end_date >= today
                && lease.end_date <= horizon
        });
        leases.sort_by_key(|lease| lease.end_date);
        leases
    }

    /// Tenants owing money, largest balance first.
    pub fn tenants_with_balance_due(&self) -> Vec<&Tenant> {
        let mut tenants = self.tenants.filter_by(Tenant::owes);
        tenants.sort_by(|a, b| b.balance.cmp(&a.balance));
        tenants
    }

    fn stats_for(&self, property: &Property) -> PropertyStats {
        let id = property.id;

        let mut leases = LeaseStatusBreakdown::default();
        for lease in self.leases.iter().filter(|lease| lease.property_id == id) {
            match lease.status {
                LeaseStatus::Active => leases.active += 1,
                LeaseStatus::Expiring => leases.expiring += 1,
                LeaseStatus::Expired => leases.expired += 1,
                LeaseStatus::Terminated => leases.terminated += 1,
            }
        }

        PropertyStats {
            property_id: id,
            total_units: property.total_units,
            occupied_units: property.occupied_units,
            vacant_units: property.vacant_units(),
            occupancy_rate: property.occupancy_rate(),
            monthly_revenue: property.monthly_revenue.clone(),
            outstanding_balance: outstanding_balance(
                self.tenants.iter().filter(|tenant| tenant.property_id == id),
            ),
            open_work_orders: self
                .work_orders
                .count_by(|order| order.property_id == id && order.status.is_open()),
            urgent_work_orders: self
                .work_orders
                .count_by(|order| order.property_id == id && order.is_urgent_and_open()),
            leases,
        }
    }
}

fn outstanding_balance<'a>(tenants: impl Iterator<Item = &'a Tenant>) -> BigDecimal {
    tenants
        .filter(|tenant| tenant.owes())
        .fold(BigDecimal::from(0), |sum, tenant| sum + &tenant.balance)
}
