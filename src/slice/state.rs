//! Slice state shapes for the two resource cardinalities.
//!
//! The plural shape backs list views (a normalized collection plus one
//! request status per operation). The singular "detail" shape backs
//! single-entity views and holds staged edits separately from the canonical
//! entity. The two stay distinct types on purpose: they share the status
//! primitive and the reducer trait, and nothing else is common enough to
//! abstract over.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::mvi::SliceState;
use crate::slice::collection::{Entity, NormalizedCollection};
use crate::slice::status::RequestStatus;

/// State of one plural resource slice (list views).
///
/// `collection` is copy-on-write: every mutation produces a new `Arc`, so
/// consumers detect change by pointer identity without deep comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T: Entity> {
    pub collection: Arc<NormalizedCollection<T>>,
    pub read: RequestStatus,
    pub create: RequestStatus,
    pub update: RequestStatus,
    pub delete: RequestStatus,
}

impl<T: Entity> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            collection: Arc::new(NormalizedCollection::new()),
            read: RequestStatus::default(),
            create: RequestStatus::default(),
            update: RequestStatus::default(),
            delete: RequestStatus::default(),
        }
    }
}

impl<T: Entity> SliceState for ResourceState<T> {}

impl<T: Entity> ResourceState<T> {
    /// Server-reported total for the last list read.
    pub fn total_items(&self) -> u64 {
        self.collection.total_items()
    }
}

/// State of one singular resource slice (detail views).
///
/// `staged` holds in-progress edits as a partial JSON object and is never
/// merged into `entity` until an update resolves successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState<T: Entity> {
    pub entity: Option<T>,
    pub staged: Map<String, Value>,
    pub read: RequestStatus,
    pub update: RequestStatus,
    pub delete: RequestStatus,
}

impl<T: Entity> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            entity: None,
            staged: Map::new(),
            read: RequestStatus::default(),
            update: RequestStatus::default(),
            delete: RequestStatus::default(),
        }
    }
}

impl<T: Entity> SliceState for DetailState<T> {}

impl<T: Entity> DetailState<T> {
    pub fn has_staged_edits(&self) -> bool {
        !self.staged.is_empty()
    }
}
