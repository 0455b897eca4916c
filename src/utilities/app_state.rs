use std::{collections::HashSet, sync::Arc};

use chrono::{NaiveDate, Utc};
use shared::{
    services::storage::{FileStore, JsonStore, KeyValueStore, MemoryStore},
    utilities::{config::Config, errors::AppError},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    features::{
        facilities::models::Facility, leases::models::Lease, properties::models::Property,
        tenants::models::Tenant, units::models::Unit, work_orders::models::WorkOrder,
    },
    services::{
        collection::{Collection, Entity, EntityKind},
        events::{ChangeAction, ChangeEvent, EventBus, SubscriptionId},
    },
};

/// Owner of every entity collection for the running process.
///
/// Reads go straight to the in-memory collections; each committed mutation
/// is written through to the store and then announced on the event bus.
#[derive(Debug)]
pub struct DataContext {
    pub(crate) config: Config,
    pub(crate) store: JsonStore,
    pub(crate) events: EventBus,
    pub(crate) properties: Collection<Property>,
    pub(crate) units: Collection<Unit>,
    pub(crate) tenants: Collection<Tenant>,
    pub(crate) leases: Collection<Lease>,
    pub(crate) work_orders: Collection<WorkOrder>,
    pub(crate) facilities: Collection<Facility>,
}

impl DataContext {
    /// Loads every collection from `backend`, starting empty wherever the
    /// stored payload is missing or unreadable.
    pub fn open(config: Config, backend: Arc<dyn KeyValueStore>) -> Self {
        let store = JsonStore::new(backend, config.storage_namespace.clone());

        let mut context = Self {
            properties: load_collection(&store),
            units: load_collection(&store),
            tenants: load_collection(&store),
            leases: load_collection(&store),
            work_orders: load_collection(&store),
            facilities: load_collection(&store),
            events: EventBus::default(),
            store,
            config,
        };

        context.prune_orphans();
        context.refresh_lease_statuses(Self::today());

        info!(
            "✅ Data context ready: {} properties, {} units, {} tenants, {} leases, {} work orders, {} facilities",
            context.properties.len(),
            context.units.len(),
            context.tenants.len(),
            context.leases.len(),
            context.work_orders.len(),
            context.facilities.len(),
        );

        context
    }

    pub fn in_memory(config: Config) -> Self {
        Self::open(config, Arc::new(MemoryStore::new()))
    }

    pub fn with_file_store(config: Config) -> Result<Self, AppError> {
        let files = FileStore::new(config.data_dir.clone())?;
        Ok(Self::open(config, Arc::new(files)))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn properties(&self) -> &Collection<Property> {
        &self.properties
    }

    pub fn units(&self) -> &Collection<Unit> {
        &self.units
    }

    pub fn tenants(&self) -> &Collection<Tenant> {
        &self.tenants
    }

    pub fn leases(&self) -> &Collection<Lease> {
        &self.leases
    }

    pub fn work_orders(&self) -> &Collection<WorkOrder> {
        &self.work_orders
    }

    pub fn facilities(&self) -> &Collection<Facility> {
        &self.facilities
    }

    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub(crate) fn persist<T: Entity>(&self, collection: &Collection<T>) {
        self.store.save(T::KIND.collection_key(), collection.list());
    }

    pub(crate) fn emit(&self, kind: EntityKind, id: Uuid, action: ChangeAction) {
        self.events.publish(ChangeEvent { kind, id, action });
    }

    pub(crate) fn emit_all<T: Entity>(&self, records: &[T], action: ChangeAction) {
        for record in records {
            self.emit(T::KIND, record.id(), action);
        }
    }

    /// Drops records whose parent did not load and unlinks tenants from
    /// units that are gone, persisting every collection it touched.
    fn prune_orphans(&mut self) {
        let property_ids: HashSet<Uuid> = self.properties.iter().map(|p| p.id).collect();

        let units = self
            .units
            .remove_where(|unit| !property_ids.contains(&unit.property_id));
        let tenants = self
            .tenants
            .remove_where(|tenant| !property_ids.contains(&tenant.property_id));

        let mut unlinked = 0;
        for tenant in self.tenants.iter_mut() {
            let Some(unit_id) = tenant.unit_id else {
                continue;
            };
            let on_same_property = self
                .units
                .get_by_id(unit_id)
                .is_some_and(|unit| unit.property_id == tenant.property_id);
            if !on_same_property {
                tenant.unit_id = None;
                unlinked += 1;
            }
        }

        let leases = self.leases.remove_where(|lease| {
            self.tenants
                .get_by_id(lease.tenant_id)
                .is_none_or(|tenant| tenant.property_id != lease.property_id)
        });
        let work_orders = self
            .work_orders
            .remove_where(|order| !property_ids.contains(&order.property_id));
        let facilities = self
            .facilities
            .remove_where(|facility| !property_ids.contains(&facility.property_id));

        if !units.is_empty() {
            self.persist(&self.units);
        }
        if !tenants.is_empty() || unlinked > 0 {
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

        let dropped =
            units.len() + tenants.len() + leases.len() + work_orders.len() + facilities.len();
        if dropped > 0 || unlinked > 0 {
            warn!(
                "dropped {} units, {} tenants, {} leases, {} work orders, {} facilities with missing parents; unlinked {unlinked} tenants",
                units.len(),
                tenants.len(),
                leases.len(),
                work_orders.len(),
                facilities.len()
            );
        }
    }

    pub(crate) fn ensure_property(&self, id: Uuid) -> Result<&Property, AppError> {
        self.properties.get_by_id(id).ok_or_else(|| {
            AppError::ReferentialIntegrityError(format!("Property {id} does not exist"))
        })
    }
}

fn load_collection<T: Entity>(store: &JsonStore) -> Collection<T> {
    Collection::from_items(store.load(T::KIND.collection_key(), Vec::<T>::new()))
}
