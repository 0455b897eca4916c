use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use shared::{
    schemas::{ListResponse, Pagination},
    utilities::errors::AppError,
};
use tracing::warn;
use uuid::Uuid;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Property,
    Unit,
    Tenant,
    Lease,
    WorkOrder,
    Facility,
}

impl EntityKind {
    /// Storage key of the collection holding this kind.
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Property => "properties",
            Self::Unit => "units",
            Self::Tenant => "tenants",
            Self::Lease => "leases",
            Self::WorkOrder => "workOrders",
            Self::Facility => "facilities",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Property => "Property",
            Self::Unit => "Unit",
            Self::Tenant => "Tenant",
            Self::Lease => "Lease",
            Self::WorkOrder => "Work order",
            Self::Facility => "Facility",
        };
        f.write_str(name)
    }
}

pub trait Entity: Clone + Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

/// Records of one kind in insertion order.
#[derive(Clone, Debug)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from loaded records, keeping the first record for
    /// any repeated id.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut collection = Self::new();
        for item in items {
            if collection.contains(item.id()) {
                warn!("dropping duplicate {} {} from storage", T::KIND, item.id());
                continue;
            }
            collection.items.push(item);
        }
        collection
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get_by_id(id).is_some()
    }

    pub fn filter_by<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    pub fn count_by<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    pub fn page(&self, pagination: &Pagination) -> Result<ListResponse<&T>, AppError> {
        let (skip, take) = pagination.bounds()?;
        Ok(ListResponse {
            data: self.items.iter().skip(skip).take(take).collect(),
            total: self.items.len(),
        })
    }

    pub(crate) fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swaps in `item` at the position of the record with the same id.
    pub(crate) fn replace(&mut self, item: T) -> Option<T> {
        let slot = self.items.iter_mut().find(|existing| existing.id() == item.id())?;
        Some(std::mem::replace(slot, item))
    }

    pub(crate) fn remove(&mut self, id: Uuid) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn remove_where<P>(&mut self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| predicate(item));
        self.items = kept;
        removed
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}
