//! The panel-bound transition: hooks implementation and shared handle.

use crate::core::{
    StartDirective, StatusHistory, TickContext, Transition, TransitionHooks, TransitionStatus,
    UpdateDirective,
};
use crate::panel::controller::PanelInner;
use crate::panel::fault::TransitionFault;
use crate::panel::kind::TransitionKind;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use uuid::Uuid;

/// Per-tick callback invoked while a transition is running and has not yet
/// reached its target. Receives `(elapsed, now)`.
///
/// The callback runs while the transition's cell is borrowed; it must not
/// call back into the same [`PanelTransition`] handle.
pub type OnTransitionFrame = Rc<dyn Fn(Duration, Duration)>;

/// Safety timeout applied to new transitions: if the animator is neither in
/// a transition nor at the target state for this long, the transition is
/// cancelled.
pub const DEFAULT_MAX_TRANSITION_TIME: Duration = Duration::from_secs(1);

/// Hook implementation binding the generic lifecycle to a panel owner.
///
/// Holds non-owning references both to the owning panel and to its own
/// containing cell, so that starting can hand the owner a live handle to
/// register as the active transition. Every owner dereference is
/// liveness-checked; a gone owner resolves to cancellation.
pub(crate) struct PanelHooks {
    id: Uuid,
    kind: TransitionKind,
    layer: usize,
    target_state: Option<i32>,
    max_duration: Duration,
    on_frame: Option<OnTransitionFrame>,
    fault: Option<TransitionFault>,
    owner: Weak<RefCell<PanelInner>>,
    self_ref: Weak<RefCell<Transition<PanelHooks>>>,
}

impl TransitionHooks for PanelHooks {
    fn do_start(&mut self, _time: Duration) -> StartDirective {
        let Some(owner) = self.owner.upgrade() else {
            self.fault = Some(TransitionFault::OwnerGone);
            return StartDirective::Cancel;
        };
        let Some(cell) = self.self_ref.upgrade() else {
            // start is only reachable through a live handle
            self.fault = Some(TransitionFault::OwnerGone);
            return StartDirective::Cancel;
        };
        let handle = PanelTransition { cell, id: self.id };
        match PanelInner::begin(&owner, &self.kind, handle) {
            Some(target) => {
                self.target_state = Some(target);
                StartDirective::Started
            }
            None => {
                self.fault = Some(TransitionFault::NoTargetState {
                    transition: self.kind.name().to_string(),
                });
                StartDirective::Cancel
            }
        }
    }

    fn do_update(&mut self, ctx: &TickContext) -> UpdateDirective {
        let Some(owner) = self.owner.upgrade() else {
            self.fault = Some(TransitionFault::OwnerGone);
            return UpdateDirective::Cancel;
        };
        let Some(target) = self.target_state else {
            return UpdateDirective::Cancel;
        };

        let (initialized, current, in_transition) = {
            let inner = owner.borrow();
            let animator = inner.animator.as_ref();
            (
                animator.is_initialized(),
                animator.current_state_hash(self.layer),
                animator.is_in_transition(self.layer),
            )
        };

        if !initialized {
            self.fault = Some(TransitionFault::AnimatorUnavailable);
            return UpdateDirective::Cancel;
        }

        if current == target {
            return UpdateDirective::Complete;
        }

        if let Some(on_frame) = &self.on_frame {
            on_frame(ctx.elapsed, ctx.time);
        }

        // Stuck-state safety valve: the animator is idle somewhere other
        // than the target state, e.g. a missing or misconfigured graph.
        if !in_transition && ctx.elapsed > self.max_duration {
            self.fault = Some(TransitionFault::StuckTimeout {
                elapsed: ctx.elapsed,
                limit: self.max_duration,
            });
            return UpdateDirective::Cancel;
        }

        UpdateDirective::Continue
    }

    fn do_complete(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            PanelInner::clear_active(&owner, self.id);
        }
    }

    fn do_complete_early(&mut self) {
        let Some(owner) = self.owner.upgrade() else {
            return;
        };
        if let Some(target) = self.target_state {
            owner.borrow_mut().animator.play_immediate(target);
        }
        PanelInner::clear_active(&owner, self.id);
    }

    fn do_cancel(&mut self) {
        if let Some(fault) = &self.fault {
            log::warn!(
                "panel transition {} ('{}') cancelled: {}",
                self.id,
                self.kind,
                fault
            );
        }
        if let Some(owner) = self.owner.upgrade() {
            PanelInner::clear_active(&owner, self.id);
        }
    }
}

/// Cloneable handle to one panel transition.
///
/// Both the caller that prepared the transition and the owning controller's
/// active slot hold clones of the same handle, so either side can complete,
/// early-complete or cancel it; the lifecycle driver inside keeps those
/// calls idempotent.
#[derive(Clone)]
pub struct PanelTransition {
    cell: Rc<RefCell<Transition<PanelHooks>>>,
    id: Uuid,
}

impl PanelTransition {
    pub(crate) fn new(
        owner: Weak<RefCell<PanelInner>>,
        kind: TransitionKind,
        layer: usize,
        on_frame: Option<OnTransitionFrame>,
    ) -> Self {
        let id = Uuid::new_v4();
        let cell = Rc::new_cyclic(|self_ref| {
            RefCell::new(Transition::new(PanelHooks {
                id,
                kind,
                layer,
                target_state: None,
                max_duration: DEFAULT_MAX_TRANSITION_TIME,
                on_frame,
                fault: None,
                owner,
                self_ref: self_ref.clone(),
            }))
        });
        Self { cell, id }
    }

    /// Unique id of this transition.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The logical transition this handle was prepared for.
    pub fn kind(&self) -> TransitionKind {
        self.cell.borrow().hooks().kind.clone()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> TransitionStatus {
        self.cell.borrow().status()
    }

    pub fn is_running(&self) -> bool {
        self.cell.borrow().is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.cell.borrow().is_complete()
    }

    /// Why the transition was cancelled, if it was.
    pub fn fault(&self) -> Option<TransitionFault> {
        self.cell.borrow().hooks().fault.clone()
    }

    /// The target state id resolved at start, if any.
    pub fn target_state(&self) -> Option<i32> {
        self.cell.borrow().hooks().target_state
    }

    /// Snapshot of the recorded status changes.
    pub fn history(&self) -> StatusHistory {
        self.cell.borrow().history().clone()
    }

    /// The stuck-state safety timeout.
    pub fn max_duration(&self) -> Duration {
        self.cell.borrow().hooks().max_duration
    }

    /// Override the stuck-state safety timeout.
    pub fn set_max_duration(&self, limit: Duration) {
        self.cell.borrow_mut().hooks_mut().max_duration = limit;
    }

    /// Start the transition at the given scheduler time.
    pub fn start(&self, time: Duration) {
        self.cell.borrow_mut().start(time);
    }

    /// Poll the transition for one scheduler tick.
    pub fn update(&self, time: Duration, delta: Duration) {
        self.cell.borrow_mut().update(time, delta);
    }

    /// Complete the transition. Idempotent.
    pub fn complete(&self) {
        self.cell.borrow_mut().complete();
    }

    /// Force the terminal visual state immediately and complete. Idempotent.
    pub fn complete_early(&self) {
        self.cell.borrow_mut().complete_early();
    }

    /// Cancel the transition. Idempotent.
    pub fn cancel(&self) {
        self.cell.borrow_mut().cancel();
    }
}

impl std::fmt::Display for PanelTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = self.cell.borrow();
        write!(
            f,
            "[PanelTransition id={} kind={} status={}]",
            self.id,
            t.hooks().kind,
            t.status()
        )
    }
}

impl std::fmt::Debug for PanelTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
