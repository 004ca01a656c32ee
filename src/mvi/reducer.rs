//! Reducer trait for slice state machines.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms slice state based on lifecycle intents.
///
/// Every slice mutation funnels through one reducer: request-started,
/// resolved, failed, cancelled, and staging intents all map to a new state
/// here and nowhere else. Keeping the transition a pure function of
/// (state, intent) is what makes properties like the stale-response discard
/// directly unit-testable.
pub trait Reducer {
    /// The slice state this reducer operates on.
    type State: SliceState;

    /// The lifecycle intents this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Must not touch anything outside its arguments; the store handle owns
    /// locking and sequencing around it.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
