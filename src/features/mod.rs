pub mod analytics;
pub mod custom_fields;
pub mod facilities;
pub mod leases;
pub mod properties;
pub mod tenants;
pub mod units;
pub mod work_orders;
