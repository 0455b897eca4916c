mod common;

use std::{fs, sync::Arc};

use chrono::{Duration, NaiveDate};
use property_ledger::{DataContext, features::leases::models::LeaseStatus};
use shared::{
    services::storage::{KeyValueStore, MemoryStore},
    utilities::config::Config,
};

use common::{lease, seed};

fn file_config(dir: &std::path::Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn file_store_round_trips_every_collection() {
    let dir = tempfile::tempdir().unwrap();

    let seeded = {
        let mut ctx = DataContext::with_file_store(file_config(dir.path())).unwrap();
        seed(&mut ctx, "Persisted")
    };

    let reopened = DataContext::with_file_store(file_config(dir.path())).unwrap();

    assert_eq!(reopened.list_properties().len(), 1);
    assert_eq!(reopened.get_property(seeded.property).unwrap().name, "Persisted");
    assert_eq!(
        reopened.get_tenant(seeded.tenant).unwrap().unit_id,
        Some(seeded.unit)
    );
    assert!(reopened.get_lease(seeded.lease).is_some());
    assert!(reopened.get_work_order(seeded.work_order).is_some());
    assert!(reopened.get_facility(seeded.facility).is_some());
}

#[test]
fn dates_are_iso_strings_on_disk_and_dates_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let end = NaiveDate::from_ymd_opt(2030, 2, 28).unwrap();

    let lease_id = {
        let mut ctx = DataContext::with_file_store(file_config(dir.path())).unwrap();
        let seeded = seed(&mut ctx, "Dated");
        ctx.create_lease(lease(seeded.tenant, seeded.property, start, end))
            .unwrap()
            .id
    };

    let raw = fs::read_to_string(dir.path().join("propertyLedger.leases.json")).unwrap();
    assert!(raw.contains("\"startDate\":\"2024-02-29\""));
    assert!(raw.contains("\"endDate\":\"2030-02-28\""));

    let reopened = DataContext::with_file_store(file_config(dir.path())).unwrap();
    let lease = reopened.get_lease(lease_id).unwrap();
    assert_eq!(lease.start_date, start);
    assert_eq!(lease.end_date - lease.start_date, end - start);
}

#[test]
fn timestamp_dates_written_by_other_tools_are_revived() {
    let store = Arc::new(MemoryStore::new());
    let mut ctx = DataContext::open(Config::default(), store.clone());
    let seeded = seed(&mut ctx, "Legacy");

    let payload = store.read("propertyLedger.leases").unwrap().unwrap();
    let rewritten = payload.replacen(
        &format!("\"endDate\":\"{}\"", ctx.get_lease(seeded.lease).unwrap().end_date),
        "\"endDate\":\"2031-07-01T00:00:00.000Z\"",
        1,
    );
    store.write("propertyLedger.leases", &rewritten).unwrap();

    let reopened = DataContext::open(Config::default(), store);
    assert_eq!(
        reopened.get_lease(seeded.lease).unwrap().end_date,
        NaiveDate::from_ymd_opt(2031, 7, 1).unwrap()
    );
}

#[test]
fn corrupt_collection_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut ctx = DataContext::with_file_store(file_config(dir.path())).unwrap();
        seed(&mut ctx, "Fragile");
    }
    fs::write(dir.path().join("propertyLedger.tenants.json"), "{not json").unwrap();

    let reopened = DataContext::with_file_store(file_config(dir.path())).unwrap();

    assert!(reopened.list_tenants().is_empty());
    assert_eq!(reopened.list_properties().len(), 1);
    assert_eq!(reopened.list_units().len(), 1);
}

#[test]
fn corrupt_properties_drop_dependent_records() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut ctx = DataContext::with_file_store(file_config(dir.path())).unwrap();
        seed(&mut ctx, "Orphaned");
    }
    fs::write(dir.path().join("propertyLedger.properties.json"), "{not json").unwrap();

    let reopened = DataContext::with_file_store(file_config(dir.path())).unwrap();

    assert!(reopened.list_properties().is_empty());
    assert!(reopened.list_units().is_empty());
    assert!(reopened.list_tenants().is_empty());
    assert!(reopened.list_leases().is_empty());
    assert!(reopened.list_work_orders().is_empty());
    assert!(reopened.list_facilities().is_empty());
    let units = fs::read_to_string(dir.path().join("propertyLedger.units.json")).unwrap();
    assert_eq!(units, "[]");

    let again = DataContext::with_file_store(file_config(dir.path())).unwrap();
    assert!(again.list_tenants().is_empty());
}

#[test]
fn corrupt_units_unlink_tenants_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let seeded = {
        let mut ctx = DataContext::with_file_store(file_config(dir.path())).unwrap();
        seed(&mut ctx, "Unlinked")
    };
    fs::write(dir.path().join("propertyLedger.units.json"), "{not json").unwrap();

    let reopened = DataContext::with_file_store(file_config(dir.path())).unwrap();

    let tenant = reopened.get_tenant(seeded.tenant).unwrap();
    assert_eq!(tenant.unit_id, None);
    assert!(reopened.get_lease(seeded.lease).is_some());
    let tenants = fs::read_to_string(dir.path().join("propertyLedger.tenants.json")).unwrap();
    assert!(tenants.contains("\"unitId\":null"));
}

#[test]
fn reopening_reclassifies_stale_lease_statuses() {
    let store = Arc::new(MemoryStore::new());
    let today = DataContext::today();
    let (seeded, stale) = {
        let mut ctx = DataContext::open(Config::default(), store.clone());
        let seeded = seed(&mut ctx, "Stale");
        let mut input = lease(
            seeded.tenant,
            seeded.property,
            today - Duration::days(800),
            today - Duration::days(400),
        );
        input.status = Some(LeaseStatus::Active);
        let stale = ctx.create_lease(input).unwrap();
        assert_eq!(ctx.global_badge_counts().active_leases, 2);
        (seeded, stale.id)
    };

    let reopened = DataContext::open(Config::default(), store.clone());

    assert_eq!(reopened.get_lease(stale).unwrap().status, LeaseStatus::Expired);
    assert_eq!(
        reopened.get_lease(seeded.lease).unwrap().status,
        LeaseStatus::Active
    );
    assert_eq!(reopened.global_badge_counts().active_leases, 1);
    let stored = store.read("propertyLedger.leases").unwrap().unwrap();
    assert!(stored.contains("\"status\":\"expired\""));
}

#[test]
fn reads_observe_writes_without_reloading() {
    let store = Arc::new(MemoryStore::new());
    let mut ctx = DataContext::open(Config::default(), store.clone());
    let seeded = seed(&mut ctx, "Fresh");
    let today = DataContext::today();

    ctx.refresh_lease_statuses(today + Duration::days(400));

    assert_eq!(ctx.get_lease(seeded.lease).unwrap().status, LeaseStatus::Expired);
    let stored = store.read("propertyLedger.leases").unwrap().unwrap();
    assert!(stored.contains("\"status\":\"expired\""));
    assert_eq!(
        store.keys(),
        vec![
            "propertyLedger.facilities",
            "propertyLedger.leases",
            "propertyLedger.properties",
            "propertyLedger.tenants",
            "propertyLedger.units",
            "propertyLedger.workOrders",
        ]
    );
}

#[test]
fn namespace_separates_datasets() {
    let store = Arc::new(MemoryStore::new());
    let mut first = DataContext::open(Config::default(), store.clone());
    seed(&mut first, "Default namespace");

    let other = DataContext::open(
        Config {
            storage_namespace: "sandbox".to_string(),
            ..Config::default()
        },
        store.clone(),
    );

    assert!(other.list_properties().is_empty());
    assert_eq!(first.list_properties().len(), 1);
}
