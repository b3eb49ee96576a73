//! Host-owned per-frame ticker for live transitions.

use crate::panel::transition::PanelTransition;
use std::time::Duration;

/// Drives registered transitions once per logical frame.
///
/// The host owns the scheduler and calls [`tick`](Self::tick) with its own
/// monotonic non-decreasing time; no particular tick rate is assumed. Each
/// tick polls every registered transition exactly once and drops the ones
/// that have reached a terminal status.
///
/// # Example
///
/// ```rust
/// use transom::panel::TickScheduler;
/// use std::time::Duration;
///
/// let mut scheduler = TickScheduler::new();
/// assert!(scheduler.is_empty());
/// scheduler.tick(Duration::from_millis(16));
/// ```
#[derive(Default)]
pub struct TickScheduler {
    transitions: Vec<PanelTransition>,
    last_tick: Option<Duration>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition to be polled each tick.
    pub fn add(&mut self, transition: PanelTransition) {
        self.transitions.push(transition);
    }

    /// Number of registered (not yet terminal) transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Poll every registered transition once and drop terminal ones.
    ///
    /// The delta handed to transitions is the time advanced since the
    /// previous tick (zero on the first tick, saturating if the host's
    /// clock misbehaves).
    pub fn tick(&mut self, now: Duration) {
        let delta = self
            .last_tick
            .map(|last| now.saturating_sub(last))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);

        for transition in &self.transitions {
            transition.update(now, delta);
        }
        self.transitions.retain(|t| !t.status().is_terminal());
    }
}
