//! Status change history tracking.
//!
//! Provides immutable tracking of a transition's lifecycle status changes
//! over time, following functional programming principles.

use super::status::TransitionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single status change.
///
/// Changes are immutable values representing a move from one lifecycle
/// status to another at a specific point in wall-clock time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusChange {
    /// The status being changed from
    pub from: TransitionStatus,
    /// The status being changed to
    pub to: TransitionStatus,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of lifecycle status changes.
///
/// History is immutable - the `record` method returns a new history with
/// the change added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use transom::core::{StatusChange, StatusHistory, TransitionStatus};
/// use chrono::Utc;
///
/// let history = StatusHistory::new();
/// let history = history.record(StatusChange {
///     from: TransitionStatus::Created,
///     to: TransitionStatus::Running,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StatusChange {
///     from: TransitionStatus::Running,
///     to: TransitionStatus::Completed,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Created -> Running -> Completed
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatusHistory {
    changes: Vec<StatusChange>,
}

impl StatusHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a status change, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the change added.
    pub fn record(&self, change: StatusChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Get the path of statuses traversed.
    ///
    /// Returns references to statuses in order: initial status, then the
    /// `to` status of each change.
    pub fn get_path(&self) -> Vec<&TransitionStatus> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Calculate total duration from first to last change.
    ///
    /// Returns `None` if there are no changes.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded changes in order.
    pub fn changes(&self) -> &[StatusChange] {
        &self.changes
    }
}
