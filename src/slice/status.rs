//! Request lifecycle tracking for one asynchronous operation.
//!
//! Every slice operation (read/create/update/delete) owns one
//! [`RequestStatus`]. The status is mutated only through the reducer bound to
//! that operation, and encodes the stale-response guard as a sequence number.

use std::time::SystemTime;

/// Lifecycle phase of one asynchronous operation.
///
/// Transitions: `Idle/Success/Failure --start--> Requesting`,
/// `Requesting --resolve--> Success`, `Requesting --reject--> Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Requesting,
    Success,
    Failure,
}

/// Status of one (slice, operation) binding.
///
/// Invariants:
/// - `phase == Requesting` implies `error` is `None`; resolving clears any
///   prior error and stamps `last_updated`.
/// - `seq` only grows. A resolution carrying an older sequence than the
///   recorded latest must be discarded by the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestStatus {
    pub phase: RequestPhase,
    /// Human-readable error from the last failed attempt, if any.
    pub error: Option<String>,
    /// When the operation last resolved successfully.
    pub last_updated: Option<SystemTime>,
    /// Set when cached data is known stale and should be re-read.
    pub invalidated: bool,
    /// Sequence number of the latest started call.
    pub seq: u64,
}

impl RequestStatus {
    pub fn is_requesting(&self) -> bool {
        self.phase == RequestPhase::Requesting
    }

    pub fn succeeded(&self) -> bool {
        self.phase == RequestPhase::Success
    }

    pub fn failed(&self) -> bool {
        self.phase == RequestPhase::Failure
    }

    /// Whether a resolution for `seq` is still current.
    pub fn accepts(&self, seq: u64) -> bool {
        self.seq == seq
    }

    /// Transition into `Requesting` for call number `seq`.
    pub(crate) fn started(self, seq: u64) -> Self {
        Self {
            phase: RequestPhase::Requesting,
            error: None,
            seq: seq.max(self.seq),
            ..self
        }
    }

    /// Transition into `Success`, clearing errors and invalidation.
    pub(crate) fn resolved(self) -> Self {
        Self {
            phase: RequestPhase::Success,
            error: None,
            last_updated: Some(SystemTime::now()),
            invalidated: false,
            ..self
        }
    }

    /// Transition into `Failure` with a human-readable message.
    pub(crate) fn rejected(self, error: String) -> Self {
        Self {
            phase: RequestPhase::Failure,
            error: Some(error),
            ..self
        }
    }

    /// Return to `Idle` after a cancelled call. The sequence number is kept
    /// so late responses from the cancelled call stay identifiable.
    pub(crate) fn cancelled(self) -> Self {
        Self {
            phase: RequestPhase::Idle,
            error: None,
            ..self
        }
    }

    /// Mark cached data stale without touching the phase.
    pub(crate) fn invalidate(self) -> Self {
        Self {
            invalidated: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let status = RequestStatus::default();
        assert_eq!(status.phase, RequestPhase::Idle);
        assert!(status.error.is_none());
        assert!(status.last_updated.is_none());
    }

    #[test]
    fn started_clears_error() {
        let status = RequestStatus::default().rejected("boom".to_string());
        assert!(status.failed());
        let status = status.started(1);
        assert!(status.is_requesting());
        assert!(status.error.is_none());
    }

    #[test]
    fn resolved_clears_error_and_stamps_time() {
        let status = RequestStatus::default()
            .started(1)
            .rejected("boom".to_string())
            .started(2)
            .resolved();
        assert!(status.succeeded());
        assert!(status.error.is_none());
        assert!(status.last_updated.is_some());
    }

    #[test]
    fn seq_never_decreases() {
        let status = RequestStatus::default().started(5).started(3);
        assert_eq!(status.seq, 5);
        assert!(status.accepts(5));
        assert!(!status.accepts(3));
    }

    #[test]
    fn resolve_after_invalidate_clears_flag() {
        let status = RequestStatus::default().invalidate();
        assert!(status.invalidated);
        let status = status.started(1).resolved();
        assert!(!status.invalidated);
    }
}
