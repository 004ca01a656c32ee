//! Memoized derivations over collection snapshots.
//!
//! A [`Derived`] wraps a pure function of the collection (sorting,
//! partitioning, picking defaults) and caches its result keyed by the
//! collection's version counter. Unchanged snapshots yield the same `Arc`,
//! so consumers can detect "nothing to re-render" by pointer identity.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::slice::collection::{Entity, NormalizedCollection};

type ComputeFn<T, U> = Box<dyn Fn(&NormalizedCollection<T>) -> U + Send + Sync>;

pub struct Derived<T: Entity, U> {
    compute: ComputeFn<T, U>,
    cache: Mutex<Option<(u64, Arc<U>)>>,
}

impl<T: Entity, U> Derived<T, U> {
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&NormalizedCollection<T>) -> U + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cache: Mutex::new(None),
        }
    }

    /// Compute or reuse the derivation for this snapshot.
    ///
    /// Recomputes only when the snapshot's version differs from the cached
    /// one; otherwise returns the cached `Arc` unchanged.
    pub fn get(&self, collection: &NormalizedCollection<T>) -> Arc<U> {
        let mut cache = self.cache.lock();
        if let Some((version, value)) = cache.as_ref() {
            if *version == collection.version() {
                return Arc::clone(value);
            }
        }
        let value = Arc::new((self.compute)(collection));
        *cache = Some((collection.version(), Arc::clone(&value)));
        value
    }
}
