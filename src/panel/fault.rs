//! Policy-resolved fault taxonomy for panel transitions.

use std::time::Duration;
use thiserror::Error;

/// Why a panel transition was cancelled.
///
/// Faults are never raised to the caller; each one is resolved locally by
/// cancelling the affected transition and logging. The fault stays queryable
/// on the transition handle afterwards.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionFault {
    /// The configuration has no target state entry for the requested
    /// transition. Expected and configurable, not exceptional.
    #[error("no target state mapped for transition '{transition}'")]
    NoTargetState { transition: String },

    /// The animator is missing or reported itself uninitialized.
    #[error("animator is not initialized")]
    AnimatorUnavailable,

    /// The animator sat idle outside the target state past the safety
    /// timeout - typically a missing or misconfigured state graph.
    #[error("animator stuck outside target state for {elapsed:?} (limit {limit:?})")]
    StuckTimeout { elapsed: Duration, limit: Duration },

    /// The owning panel was dropped while the transition was in flight.
    #[error("owning panel was dropped mid-transition")]
    OwnerGone,
}
