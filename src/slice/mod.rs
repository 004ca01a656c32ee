//! Resource slices: per-entity-kind state, lifecycle, and derivations.
//!
//! A slice is the complete client-side state for one domain entity kind. The
//! plural shape combines a normalized collection with one request status per
//! operation; the singular "detail" shape holds one entity plus staged edits.
//! All mutation flows through the pure reducers.

mod collection;
mod derive;
mod intent;
mod reducer;
mod state;
mod status;

pub use collection::{Entity, NormalizedCollection, Page, Resource};
pub use derive::Derived;
pub use intent::{DetailIntent, ResourceIntent};
pub use reducer::{DetailReducer, ResourceReducer};
pub use state::{DetailState, ResourceState};
pub use status::{RequestPhase, RequestStatus};
