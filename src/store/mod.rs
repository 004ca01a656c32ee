//! Shared slice containers with interior mutability.
//!
//! A handle is a clone-able `Arc<RwLock>` around one slice's state, in the
//! same shape as any other shared state container in the app: many concurrent
//! readers take cheap snapshots while lifecycle transitions are exclusive.
//! The gating rules live here because they must be atomic with the
//! `*Started` dispatch: reads allocate the next sequence number under the
//! write lock, writes are rejected while the same operation is in flight.
//!
//! Handles are passed to transactions by explicit injection; there is no
//! global registry.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::{
    EarnedMembership, Invoice, InvoiceOption, Member, PaymentTransaction, Rental, Report,
    Subscription,
};
use crate::mvi::Reducer;
use crate::slice::{
    DetailIntent, DetailReducer, DetailState, Entity, NormalizedCollection, ResourceIntent,
    ResourceReducer, ResourceState,
};

/// A write was rejected because the same operation is already in flight.
///
/// Duplicate submissions are suppressed until the first settles; this is not
/// a user-visible error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteInFlight;

/// Clone-able container for one plural resource slice.
#[derive(Clone)]
pub struct SliceHandle<T: Entity> {
    inner: Arc<RwLock<ResourceState<T>>>,
}

impl<T: Entity> Default for SliceHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> SliceHandle<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ResourceState::default())),
        }
    }

    /// Get a clone of the current slice state.
    ///
    /// Cheap: the collection inside is an `Arc` snapshot.
    pub fn snapshot(&self) -> ResourceState<T> {
        self.inner.read().clone()
    }

    /// Immutable snapshot of the entity collection.
    pub fn collection(&self) -> Arc<NormalizedCollection<T>> {
        Arc::clone(&self.inner.read().collection)
    }

    pub(crate) fn dispatch(&self, intent: ResourceIntent<T>) {
        let mut guard = self.inner.write();
        let state = std::mem::take(&mut *guard);
        *guard = ResourceReducer::reduce(state, intent);
    }

    /// Start a read. Reads are never rejected: the newest call wins and the
    /// returned sequence number decides which response is applied.
    pub fn begin_read(&self) -> u64 {
        let mut guard = self.inner.write();
        let seq = guard.read.seq + 1;
        let state = std::mem::take(&mut *guard);
        *guard = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq });
        seq
    }

    /// Start a create unless one is already in flight.
    pub fn begin_create(&self) -> Result<(), WriteInFlight> {
        let mut guard = self.inner.write();
        if guard.create.is_requesting() {
            return Err(WriteInFlight);
        }
        let state = std::mem::take(&mut *guard);
        *guard = ResourceReducer::reduce(state, ResourceIntent::CreateStarted);
        Ok(())
    }

    /// Start an update unless one is already in flight.
    pub fn begin_update(&self) -> Result<(), WriteInFlight> {
        let mut guard = self.inner.write();
        if guard.update.is_requesting() {
            return Err(WriteInFlight);
        }
        let state = std::mem::take(&mut *guard);
        *guard = ResourceReducer::reduce(state, ResourceIntent::UpdateStarted);
        Ok(())
    }

    /// Start a delete unless one is already in flight.
    pub fn begin_delete(&self) -> Result<(), WriteInFlight> {
        let mut guard = self.inner.write();
        if guard.delete.is_requesting() {
            return Err(WriteInFlight);
        }
        let state = std::mem::take(&mut *guard);
        *guard = ResourceReducer::reduce(state, ResourceIntent::DeleteStarted);
        Ok(())
    }

    /// Mark cached data stale so consumers re-read.
    pub fn invalidate(&self) {
        self.dispatch(ResourceIntent::Invalidated);
    }
}

/// Clone-able container for one singular (detail) resource slice.
#[derive(Clone)]
pub struct DetailHandle<T: Entity> {
    inner: Arc<RwLock<DetailState<T>>>,
}

impl<T: Entity> Default for DetailHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> DetailHandle<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(DetailState::default())),
        }
    }

    pub fn snapshot(&self) -> DetailState<T> {
        self.inner.read().clone()
    }

    pub(crate) fn dispatch(&self, intent: DetailIntent<T>) {
        let mut guard = self.inner.write();
        let state = std::mem::take(&mut *guard);
        *guard = DetailReducer::reduce(state, intent);
    }

    pub fn begin_read(&self) -> u64 {
        let mut guard = self.inner.write();
        let seq = guard.read.seq + 1;
        let state = std::mem::take(&mut *guard);
        *guard = DetailReducer::reduce(state, DetailIntent::ReadStarted { seq });
        seq
    }

    pub fn begin_update(&self) -> Result<(), WriteInFlight> {
        let mut guard = self.inner.write();
        if guard.update.is_requesting() {
            return Err(WriteInFlight);
        }
        let state = std::mem::take(&mut *guard);
        *guard = DetailReducer::reduce(state, DetailIntent::UpdateStarted);
        Ok(())
    }

    pub fn begin_delete(&self) -> Result<(), WriteInFlight> {
        let mut guard = self.inner.write();
        if guard.delete.is_requesting() {
            return Err(WriteInFlight);
        }
        let state = std::mem::take(&mut *guard);
        *guard = DetailReducer::reduce(state, DetailIntent::DeleteStarted);
        Ok(())
    }

    /// Stage one field edit, kept apart from the canonical entity until an
    /// update resolves.
    pub fn stage_field(&self, field: impl Into<String>, value: Value) {
        self.dispatch(DetailIntent::FieldStaged {
            field: field.into(),
            value,
        });
    }

    pub fn discard_staged(&self) {
        self.dispatch(DetailIntent::StagedDiscarded);
    }
}

/// All slices of the application, one per domain entity kind.
///
/// Constructed once per session and handed to consumers by injection.
#[derive(Clone, Default)]
pub struct DataStore {
    pub members: SliceHandle<Member>,
    pub member_detail: DetailHandle<Member>,
    pub rentals: SliceHandle<Rental>,
    pub invoices: SliceHandle<Invoice>,
    pub invoice_options: SliceHandle<InvoiceOption>,
    pub subscriptions: SliceHandle<Subscription>,
    pub payments: SliceHandle<PaymentTransaction>,
    pub reports: SliceHandle<Report>,
    pub earned_memberships: SliceHandle<EarnedMembership>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }
}
