//! Base trait for intents (lifecycle events) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Request lifecycle events (started, resolved, failed)
/// - Cache events (invalidation)
/// - Staged-edit events on detail slices
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
