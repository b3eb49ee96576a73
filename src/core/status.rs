//! Lifecycle status for transitions.
//!
//! A transition moves through a small fixed set of statuses. The driver in
//! [`crate::core::lifecycle`] is the only thing that advances a status;
//! everything else just inspects it.

use serde::{Deserialize, Serialize};

/// Status of a transition's lifecycle.
///
/// The legal moves are `Created -> Running` on start, `Running -> Completed`
/// on (early-)completion and `Running -> Cancelled` on cancellation.
/// `Completed` and `Cancelled` are terminal: once reached, every further
/// lifecycle call is a no-op.
///
/// # Example
///
/// ```rust
/// use transom::core::TransitionStatus;
///
/// let status = TransitionStatus::Running;
/// assert!(status.is_running());
/// assert!(!status.is_terminal());
/// assert!(TransitionStatus::Cancelled.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransitionStatus {
    /// Constructed but not yet started.
    Created,
    /// Started and being driven by per-tick updates.
    Running,
    /// Reached its target state (or was forced there early). Terminal.
    Completed,
    /// Gave up before reaching the target state. Terminal.
    Cancelled,
}

impl TransitionStatus {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Check if this status is terminal (no further lifecycle moves).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Check if the transition is live and expecting per-tick updates.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl std::fmt::Display for TransitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
