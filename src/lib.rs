//! memberdesk — client-side data layer for the admin membership app.
//!
//! Manages all communication with the remote CRUD API and exposes
//! consistent, observable state to the presentation layer. The same generic
//! machinery backs every entity kind: a normalized entity cache, a
//! per-operation request lifecycle state machine, and a validated-form
//! engine that feeds transactions.
//!
//! # Architecture
//!
//! ```text
//! UI event ──→ Form ──→ Transaction ──→ remote call (ApiClient)
//!                           │
//!                           ▼
//!                 ResourceIntent ──→ Reducer ──→ Slice state ──→ UI
//! ```
//!
//! - [`slice`]: per-entity-kind state machines and the normalized cache
//! - [`store`]: shared slice containers, injected into consumers
//! - [`transaction`]: drives one remote call through a slice's lifecycle
//! - [`form`]: dynamic field registration, validation, submission
//! - [`api`]: the reqwest-backed remote boundary and query encoding
//! - [`domain`]: the entity kinds the app manages
//!
//! Concurrency model: single logical client, interleaved async calls. All
//! local transitions are synchronous; the only suspension point is awaiting
//! the remote call. Per (slice, operation) binding, reads are latest-wins
//! with stale responses discarded by sequence number, and writes are
//! suppressed while one is in flight.

pub mod api;
pub mod config;
pub mod domain;
pub mod form;
pub mod mvi;
pub mod slice;
pub mod store;
pub mod transaction;
