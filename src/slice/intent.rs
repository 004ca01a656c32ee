//! Lifecycle intents for resource slices.

use serde_json::Value;

use crate::mvi::Intent;
use crate::slice::collection::{Entity, Page};

/// Lifecycle events for a plural resource slice.
///
/// Read events carry the sequence number of the call they belong to so the
/// reducer can discard responses that lost the latest-wins race.
#[derive(Debug, Clone)]
pub enum ResourceIntent<T: Entity> {
    ReadStarted { seq: u64 },
    ReadResolved { seq: u64, page: Page<T> },
    ReadFailed { seq: u64, error: String },
    CreateStarted,
    CreateResolved { entity: T },
    CreateFailed { error: String },
    UpdateStarted,
    UpdateResolved { entity: T },
    UpdateFailed { error: String },
    DeleteStarted,
    DeleteResolved { id: String },
    DeleteFailed { error: String },
    /// The consumer was torn down before the call settled; the operation
    /// returns to idle and its eventual result will be dropped.
    ReadCancelled { seq: u64 },
    CreateCancelled,
    UpdateCancelled,
    DeleteCancelled,
    /// Cached data is known stale; consumers should re-read.
    Invalidated,
}

impl<T: Entity> Intent for ResourceIntent<T> {}

/// Lifecycle events for a singular (detail) resource slice.
#[derive(Debug, Clone)]
pub enum DetailIntent<T: Entity> {
    ReadStarted { seq: u64 },
    ReadResolved { seq: u64, entity: T },
    ReadFailed { seq: u64, error: String },
    UpdateStarted,
    UpdateResolved { entity: T },
    UpdateFailed { error: String },
    DeleteStarted,
    DeleteResolved,
    DeleteFailed { error: String },
    ReadCancelled { seq: u64 },
    UpdateCancelled,
    DeleteCancelled,
    /// Stage one field edit; merged over any prior staged value for the field.
    FieldStaged { field: String, value: Value },
    /// Drop all staged edits without touching the canonical entity.
    StagedDiscarded,
}

impl<T: Entity> Intent for DetailIntent<T> {}
