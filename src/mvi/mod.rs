//! Model-View-Intent (MVI) primitives for the data layer.
//!
//! Every resource slice in this crate is a small state machine expressed
//! through these traits: an immutable state, intents describing lifecycle
//! events, and a pure reducer producing the next state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Consumer (presentation layer)
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one slice
//! - **Intent**: lifecycle events (request started, resolved, failed)
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
