//! Normalized, insertion-ordered entity storage.
//!
//! One collection holds every locally known entity of a single kind, keyed by
//! its stable server identifier. List reads merge pages into the collection
//! instead of replacing it, so previously loaded pages stay visible.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A domain entity with a stable, unique identifier.
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// An entity kind served by the remote API under a fixed collection path.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Collection endpoint, e.g. `/api/members`.
    const PATH: &'static str;
}

/// One page of a list read: the items plus the server-reported total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching items on the server, independent of page size.
    pub total: u64,
}

/// Keyed entity store with insertion-ordered iteration and pagination
/// metadata.
///
/// `version` is bumped on every mutation and keys derived-view memoization;
/// two snapshots with equal versions hold identical content.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCollection<T: Entity> {
    entities: HashMap<String, T>,
    order: Vec<String>,
    total_items: u64,
    version: u64,
}

impl<T: Entity> Default for NormalizedCollection<T> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
            total_items: 0,
            version: 0,
        }
    }
}

impl<T: Entity> NormalizedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a single entity by id.
    ///
    /// Replacing keeps the entity's original position; inserting appends.
    pub fn upsert_one(&mut self, entity: T) {
        let id = entity.id().to_string();
        if self.entities.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
        self.version += 1;
    }

    /// Insert or replace each entity by id, preserving entries absent from
    /// `items`. Used for paged reads: merge, never replace.
    pub fn upsert_many(&mut self, items: Vec<T>) {
        for entity in items {
            let id = entity.id().to_string();
            if self.entities.insert(id.clone(), entity).is_none() {
                self.order.push(id);
            }
        }
        self.version += 1;
    }

    /// Drop an entity by id. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        if self.entities.remove(id).is_some() {
            self.order.retain(|known| known != id);
            self.version += 1;
        }
    }

    /// Record the server-reported total for pagination. Decoupled from the
    /// local entity count: a page view may hold fewer items than the total.
    pub fn set_total(&mut self, total: u64) {
        self.total_items = total;
        self.version += 1;
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &str) -> Item {
        Item {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn upsert_one_is_idempotent() {
        let mut a = NormalizedCollection::new();
        a.upsert_one(item("1", "one"));
        let mut b = a.clone();
        b.upsert_one(item("1", "one"));
        assert_eq!(a.len(), b.len());
        assert_eq!(a.get("1"), b.get("1"));
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            b.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn upsert_one_replaces_in_place() {
        let mut coll = NormalizedCollection::new();
        coll.upsert_one(item("1", "one"));
        coll.upsert_one(item("2", "two"));
        coll.upsert_one(item("1", "uno"));
        assert_eq!(coll.len(), 2);
        assert_eq!(coll.get("1").unwrap().label, "uno");
        // Replacement keeps position
        let ids: Vec<_> = coll.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn upsert_many_merges_disjoint_pages() {
        let mut coll = NormalizedCollection::new();
        coll.upsert_many(vec![item("1", "a"), item("2", "b")]);
        coll.upsert_many(vec![item("3", "c"), item("4", "d")]);
        assert_eq!(coll.len(), 4);
        assert!(coll.contains("1"));
        assert!(coll.contains("4"));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut coll = NormalizedCollection::new();
        coll.upsert_one(item("1", "a"));
        let version = coll.version();
        coll.remove("missing");
        assert_eq!(coll.len(), 1);
        assert_eq!(coll.version(), version);
    }

    #[test]
    fn total_independent_of_page_size() {
        let mut coll = NormalizedCollection::new();
        coll.upsert_many((0..25).map(|i| item(&i.to_string(), "x")).collect());
        coll.set_total(100);
        assert_eq!(coll.len(), 25);
        assert_eq!(coll.total_items(), 100);
    }

    #[test]
    fn mutation_bumps_version() {
        let mut coll = NormalizedCollection::new();
        let v0 = coll.version();
        coll.upsert_one(item("1", "a"));
        let v1 = coll.version();
        coll.remove("1");
        let v2 = coll.version();
        assert!(v0 < v1 && v1 < v2);
    }
}
