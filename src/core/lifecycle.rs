//! Generic transition lifecycle driver.
//!
//! A [`Transition`] wraps an implementation of [`TransitionHooks`] - the five
//! closed hook points of a cancellable, asynchronously-completing operation -
//! and drives them through the legal status moves. The driver owns the
//! termination guarantees: hooks fire at most once each, in a fixed order,
//! and terminal statuses absorb every further call.
//!
//! The driver never self-schedules. An external scheduler is expected to
//! call [`Transition::update`] once per tick, with monotonically
//! non-decreasing time, for as long as the transition stays `Running`.

use super::history::{StatusChange, StatusHistory};
use super::status::TransitionStatus;
use chrono::Utc;
use std::time::Duration;

/// Outcome of the start hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartDirective {
    /// Start succeeded; keep running.
    Started,
    /// Start failed (no valid target, owner gone); cancel immediately.
    Cancel,
}

/// Outcome of a single update poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateDirective {
    /// Still in flight; poll again next tick.
    Continue,
    /// External state reached the target; complete.
    Complete,
    /// External state is unusable or stuck; cancel.
    Cancel,
}

/// Timing context handed to the update hook on each tick.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    /// Scheduler time for this tick.
    pub time: Duration,
    /// Time advanced since the previous tick.
    pub delta: Duration,
    /// Time since the transition started (saturating).
    pub elapsed: Duration,
}

/// The five hook points of a transition.
///
/// Implementations signal completion or cancellation by returning directives
/// from `do_start`/`do_update`; the driver applies them and invokes the
/// matching terminal hook. The hook set is deliberately closed and small -
/// the driver's termination guarantees depend on exactly these five being
/// called in the documented order.
pub trait TransitionHooks {
    /// Called once when the transition starts.
    fn do_start(&mut self, time: Duration) -> StartDirective;

    /// Called once per scheduler tick while the transition is running.
    fn do_update(&mut self, ctx: &TickContext) -> UpdateDirective;

    /// Called exactly once when the transition completes.
    fn do_complete(&mut self);

    /// Called before `do_complete` when completion is forced early,
    /// bypassing the remaining asynchronous work.
    fn do_complete_early(&mut self);

    /// Called exactly once when the transition is cancelled.
    fn do_cancel(&mut self);
}

/// Lifecycle driver for a single transition.
///
/// Guarantees (see the unit tests for the full matrix):
///
/// - after `start`, status is `Running` or `Cancelled`
/// - `complete`, `complete_early` and `cancel` are idempotent and safe to
///   call in any order; only the first terminal move invokes hooks
/// - `update` before `start` or after a terminal status is a no-op
pub struct Transition<H: TransitionHooks> {
    status: TransitionStatus,
    start_time: Option<Duration>,
    history: StatusHistory,
    hooks: H,
}

impl<H: TransitionHooks> Transition<H> {
    /// Wrap hooks in a new, not-yet-started transition.
    pub fn new(hooks: H) -> Self {
        Self {
            status: TransitionStatus::Created,
            start_time: None,
            history: StatusHistory::new(),
            hooks,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> TransitionStatus {
        self.status
    }

    /// Scheduler time at which `start` was called, if it was.
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// Recorded status changes.
    pub fn history(&self) -> &StatusHistory {
        &self.history
    }

    /// Borrow the hook implementation.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutably borrow the hook implementation.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.status == TransitionStatus::Completed
    }

    /// Start the transition at the given scheduler time.
    ///
    /// Only a `Created` transition can start; anything else is a no-op.
    /// If `do_start` signals failure the transition is cancelled before
    /// this call returns.
    pub fn start(&mut self, time: Duration) {
        if self.status != TransitionStatus::Created {
            log::trace!("ignoring start on a {} transition", self.status);
            return;
        }
        self.start_time = Some(time);
        self.set_status(TransitionStatus::Running);
        match self.hooks.do_start(time) {
            StartDirective::Started => {}
            StartDirective::Cancel => self.cancel(),
        }
    }

    /// Poll the transition for one scheduler tick.
    ///
    /// A no-op unless the transition is `Running`, which covers both the
    /// "update before start" and "update after terminal" cases.
    pub fn update(&mut self, time: Duration, delta: Duration) {
        if self.status != TransitionStatus::Running {
            return;
        }
        let elapsed = self
            .start_time
            .map(|s| time.saturating_sub(s))
            .unwrap_or(Duration::ZERO);
        let ctx = TickContext {
            time,
            delta,
            elapsed,
        };
        match self.hooks.do_update(&ctx) {
            UpdateDirective::Continue => {}
            UpdateDirective::Complete => self.complete(),
            UpdateDirective::Cancel => self.cancel(),
        }
    }

    /// Complete the transition. Idempotent.
    pub fn complete(&mut self) {
        if self.status != TransitionStatus::Running {
            return;
        }
        self.set_status(TransitionStatus::Completed);
        self.hooks.do_complete();
    }

    /// Force the transition to its terminal visual state and complete it,
    /// skipping any remaining asynchronous work. Idempotent.
    pub fn complete_early(&mut self) {
        if self.status != TransitionStatus::Running {
            return;
        }
        self.hooks.do_complete_early();
        self.complete();
    }

    /// Cancel the transition. Idempotent; cancellation is synchronous -
    /// the cancel hook runs before this call returns.
    pub fn cancel(&mut self) {
        if self.status != TransitionStatus::Running {
            return;
        }
        self.set_status(TransitionStatus::Cancelled);
        self.hooks.do_cancel();
    }

    fn set_status(&mut self, to: TransitionStatus) {
        self.history = self.history.record(StatusChange {
            from: self.status,
            to,
            timestamp: Utc::now(),
        });
        self.status = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Hooks that record every call and play back scripted directives.
    struct ScriptedHooks {
        start: StartDirective,
        updates: VecDeque<UpdateDirective>,
        calls: Vec<&'static str>,
        elapsed_seen: Vec<Duration>,
    }

    impl ScriptedHooks {
        fn new(start: StartDirective, updates: Vec<UpdateDirective>) -> Self {
            Self {
                start,
                updates: updates.into(),
                calls: Vec::new(),
                elapsed_seen: Vec::new(),
            }
        }
    }

    impl TransitionHooks for ScriptedHooks {
        fn do_start(&mut self, _time: Duration) -> StartDirective {
            self.calls.push("start");
            self.start
        }

        fn do_update(&mut self, ctx: &TickContext) -> UpdateDirective {
            self.calls.push("update");
            self.elapsed_seen.push(ctx.elapsed);
            self.updates
                .pop_front()
                .unwrap_or(UpdateDirective::Continue)
        }

        fn do_complete(&mut self) {
            self.calls.push("complete");
        }

        fn do_complete_early(&mut self) {
            self.calls.push("complete_early");
        }

        fn do_cancel(&mut self) {
            self.calls.push("cancel");
        }
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn start_moves_created_to_running() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(1));

        assert_eq!(t.status(), TransitionStatus::Running);
        assert_eq!(t.start_time(), Some(secs(1)));
        assert_eq!(t.hooks().calls, vec!["start"]);
    }

    #[test]
    fn failed_start_cancels_immediately() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Cancel, vec![]));
        t.start(secs(0));

        assert_eq!(t.status(), TransitionStatus::Cancelled);
        assert_eq!(t.hooks().calls, vec!["start", "cancel"]);
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(1));
        t.start(secs(2));

        assert_eq!(t.start_time(), Some(secs(1)));
        assert_eq!(t.hooks().calls, vec!["start"]);
    }

    #[test]
    fn update_before_start_is_a_no_op() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.update(secs(1), secs(1));

        assert_eq!(t.status(), TransitionStatus::Created);
        assert!(t.hooks().calls.is_empty());
    }

    #[test]
    fn update_passes_elapsed_time() {
        let mut t = Transition::new(ScriptedHooks::new(
            StartDirective::Started,
            vec![UpdateDirective::Continue, UpdateDirective::Continue],
        ));
        t.start(secs(10));
        t.update(secs(12), secs(2));
        t.update(secs(15), secs(3));

        assert_eq!(t.hooks().elapsed_seen, vec![secs(2), secs(5)]);
    }

    #[test]
    fn update_directive_completes() {
        let mut t = Transition::new(ScriptedHooks::new(
            StartDirective::Started,
            vec![UpdateDirective::Complete],
        ));
        t.start(secs(0));
        t.update(secs(1), secs(1));

        assert_eq!(t.status(), TransitionStatus::Completed);
        assert_eq!(t.hooks().calls, vec!["start", "update", "complete"]);
    }

    #[test]
    fn update_directive_cancels() {
        let mut t = Transition::new(ScriptedHooks::new(
            StartDirective::Started,
            vec![UpdateDirective::Cancel],
        ));
        t.start(secs(0));
        t.update(secs(1), secs(1));

        assert_eq!(t.status(), TransitionStatus::Cancelled);
        assert_eq!(t.hooks().calls, vec!["start", "update", "cancel"]);
    }

    #[test]
    fn update_after_terminal_is_a_no_op() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(0));
        t.complete();
        t.update(secs(1), secs(1));
        t.update(secs(2), secs(1));

        assert_eq!(t.hooks().calls, vec!["start", "complete"]);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(0));
        t.complete();
        t.complete();
        t.cancel();
        t.complete_early();

        assert_eq!(t.status(), TransitionStatus::Completed);
        assert_eq!(t.hooks().calls, vec!["start", "complete"]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(0));
        t.cancel();
        t.cancel();
        t.complete();
        t.complete_early();

        assert_eq!(t.status(), TransitionStatus::Cancelled);
        assert_eq!(t.hooks().calls, vec!["start", "cancel"]);
    }

    #[test]
    fn complete_early_runs_early_hook_then_complete_hook() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(0));
        t.complete_early();
        t.complete_early();

        assert_eq!(t.status(), TransitionStatus::Completed);
        assert_eq!(t.hooks().calls, vec!["start", "complete_early", "complete"]);
    }

    #[test]
    fn complete_early_before_start_is_a_no_op() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.complete_early();

        assert_eq!(t.status(), TransitionStatus::Created);
        assert!(t.hooks().calls.is_empty());
    }

    #[test]
    fn history_records_every_status_change() {
        let mut t = Transition::new(ScriptedHooks::new(StartDirective::Started, vec![]));
        t.start(secs(0));
        t.complete();

        let path = t.history().get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TransitionStatus::Created);
        assert_eq!(path[1], &TransitionStatus::Running);
        assert_eq!(path[2], &TransitionStatus::Completed);
    }

    #[test]
    fn elapsed_saturates_on_time_going_backwards() {
        let mut t = Transition::new(ScriptedHooks::new(
            StartDirective::Started,
            vec![UpdateDirective::Continue],
        ));
        t.start(secs(10));
        t.update(secs(5), Duration::ZERO);

        assert_eq!(t.hooks().elapsed_seen, vec![Duration::ZERO]);
    }
}
