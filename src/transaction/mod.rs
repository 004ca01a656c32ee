//! Drives one remote call per invocation against a bound slice.
//!
//! A transaction owns nothing but references: the handle of the slice it
//! governs and a [`Lifetime`] token tied to the consuming view. Each method
//! checks the gating rule, transitions the bound status to `Requesting`,
//! awaits the supplied remote-call future (the sole suspension point), then
//! applies the outcome — unless the consumer was torn down meanwhile, in
//! which case the result is dropped and the operation resets to idle.
//!
//! Remote failures never escape this boundary: they are converted to the
//! human-readable `error` string on the bound [`RequestStatus`] and the call
//! returns `Ok(())`. The `Err` variants here describe suppressed invocations
//! only. Retry is a user-initiated re-invocation, never automatic.
//!
//! Post-processing of read results (sorting, partitioning, defaults) is not
//! done in-line; derive it from the collection snapshot with
//! [`crate::slice::Derived`] so the result stays referentially stable.
//!
//! [`RequestStatus`]: crate::slice::RequestStatus

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::api::ApiError;
use crate::slice::{DetailIntent, Entity, Page, ResourceIntent};
use crate::store::{DetailHandle, SliceHandle, WriteInFlight};

/// Why an invocation was suppressed. Not user-visible errors: nothing is
/// rendered for these, the call simply did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The same write operation is already in flight on this slice.
    #[error("operation already in flight")]
    InFlight,
    /// The consuming view was torn down before or while the call ran.
    #[error("consumer no longer mounted")]
    Unmounted,
}

impl From<WriteInFlight> for TransactionError {
    fn from(_: WriteInFlight) -> Self {
        TransactionError::InFlight
    }
}

/// Liveness token tied to the consuming view's mounted lifetime.
///
/// The view holds the [`LifetimeGuard`]; dropping it flips the shared flag.
/// In-flight transactions check the flag before applying results — the
/// underlying network call is not aborted, its result is just refused.
#[derive(Clone)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Lifetime {
    /// A lifetime plus the guard that ends it on drop.
    pub fn new() -> (Self, LifetimeGuard) {
        let alive = Arc::new(AtomicBool::new(true));
        (
            Self {
                alive: Arc::clone(&alive),
            },
            LifetimeGuard { alive },
        )
    }

    /// A lifetime that never ends, for session-scoped transactions not tied
    /// to any view.
    pub fn session() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Ends the associated [`Lifetime`] when dropped.
pub struct LifetimeGuard {
    alive: Arc<AtomicBool>,
}

impl Drop for LifetimeGuard {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

/// Transaction runner for a plural resource slice.
pub struct Transaction<T: Entity> {
    slice: SliceHandle<T>,
    lifetime: Lifetime,
}

impl<T: Entity> Transaction<T> {
    pub fn new(slice: SliceHandle<T>, lifetime: Lifetime) -> Self {
        Self { slice, lifetime }
    }

    /// Run a list read. Never suppressed by an in-flight read: the newest
    /// call wins and older responses are discarded by sequence number.
    pub async fn read<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Page<T>, ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        let seq = self.slice.begin_read();
        tracing::debug!(seq, "list read started");
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!(seq, "dropping read result, consumer unmounted");
            self.slice.dispatch(ResourceIntent::ReadCancelled { seq });
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(page) => {
                tracing::debug!(seq, items = page.items.len(), total = page.total, "list read resolved");
                self.slice.dispatch(ResourceIntent::ReadResolved { seq, page });
            }
            Err(err) => {
                tracing::debug!(seq, error = %err, "list read failed");
                self.slice.dispatch(ResourceIntent::ReadFailed {
                    seq,
                    error: err.user_message(),
                });
            }
        }
        Ok(())
    }

    /// Run a create. Rejected while a create is already in flight.
    pub async fn create<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        self.slice.begin_create()?;
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!("dropping create result, consumer unmounted");
            self.slice.dispatch(ResourceIntent::CreateCancelled);
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(entity) => self.slice.dispatch(ResourceIntent::CreateResolved { entity }),
            Err(err) => self.slice.dispatch(ResourceIntent::CreateFailed {
                error: err.user_message(),
            }),
        }
        Ok(())
    }

    /// Run an update. Rejected while an update is already in flight.
    pub async fn update<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        self.slice.begin_update()?;
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!("dropping update result, consumer unmounted");
            self.slice.dispatch(ResourceIntent::UpdateCancelled);
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(entity) => self.slice.dispatch(ResourceIntent::UpdateResolved { entity }),
            Err(err) => self.slice.dispatch(ResourceIntent::UpdateFailed {
                error: err.user_message(),
            }),
        }
        Ok(())
    }

    /// Run a delete of `id`. Rejected while a delete is already in flight.
    pub async fn delete<F, Fut>(&self, id: &str, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        self.slice.begin_delete()?;
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!("dropping delete result, consumer unmounted");
            self.slice.dispatch(ResourceIntent::DeleteCancelled);
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(()) => self.slice.dispatch(ResourceIntent::DeleteResolved {
                id: id.to_string(),
            }),
            Err(err) => self.slice.dispatch(ResourceIntent::DeleteFailed {
                error: err.user_message(),
            }),
        }
        Ok(())
    }
}

/// Transaction runner for a singular (detail) resource slice.
pub struct DetailTransaction<T: Entity> {
    slice: DetailHandle<T>,
    lifetime: Lifetime,
}

impl<T: Entity> DetailTransaction<T> {
    pub fn new(slice: DetailHandle<T>, lifetime: Lifetime) -> Self {
        Self { slice, lifetime }
    }

    pub async fn read<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        let seq = self.slice.begin_read();
        tracing::debug!(seq, "detail read started");
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!(seq, "dropping detail read result, consumer unmounted");
            self.slice.dispatch(DetailIntent::ReadCancelled { seq });
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(entity) => self.slice.dispatch(DetailIntent::ReadResolved { seq, entity }),
            Err(err) => self.slice.dispatch(DetailIntent::ReadFailed {
                seq,
                error: err.user_message(),
            }),
        }
        Ok(())
    }

    /// Run an update, typically built from the slice's staged edits. On
    /// success the staged edit is cleared; on failure it is preserved for
    /// resubmission.
    pub async fn update<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        self.slice.begin_update()?;
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!("dropping detail update result, consumer unmounted");
            self.slice.dispatch(DetailIntent::UpdateCancelled);
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(entity) => self.slice.dispatch(DetailIntent::UpdateResolved { entity }),
            Err(err) => self.slice.dispatch(DetailIntent::UpdateFailed {
                error: err.user_message(),
            }),
        }
        Ok(())
    }

    pub async fn delete<F, Fut>(&self, call: F) -> Result<(), TransactionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ApiError>>,
    {
        if !self.lifetime.is_alive() {
            return Err(TransactionError::Unmounted);
        }
        self.slice.begin_delete()?;
        let result = call().await;
        if !self.lifetime.is_alive() {
            tracing::warn!("dropping detail delete result, consumer unmounted");
            self.slice.dispatch(DetailIntent::DeleteCancelled);
            return Err(TransactionError::Unmounted);
        }
        match result {
            Ok(()) => self.slice.dispatch(DetailIntent::DeleteResolved),
            Err(err) => self.slice.dispatch(DetailIntent::DeleteFailed {
                error: err.user_message(),
            }),
        }
        Ok(())
    }
}
