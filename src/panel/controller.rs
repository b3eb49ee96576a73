//! The panel transition controller: owner of the active-transition slot.

use crate::panel::config::PanelConfig;
use crate::panel::env::{AnimationStatusProvider, TargetPropertyStore};
use crate::panel::kind::TransitionKind;
use crate::panel::transition::{OnTransitionFrame, PanelTransition};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

/// Shared owner state behind the controller.
///
/// Transitions hold `Weak` references to this; the controller holds the only
/// strong one. All access happens on the single logical thread that also
/// drives updates, via short non-overlapping borrows - hook cascades (for
/// example force-early-completing the old transition from inside the new
/// one's start) must never hold a borrow across a nested lifecycle call.
pub(crate) struct PanelInner {
    pub(crate) config: PanelConfig,
    pub(crate) animator: Box<dyn AnimationStatusProvider>,
    pub(crate) store: Box<dyn TargetPropertyStore>,
    pub(crate) active: Option<PanelTransition>,
    pub(crate) pending_state: Option<i32>,
}

impl PanelInner {
    /// Owner-side start protocol, invoked from a transition's start hook.
    ///
    /// Preempts any running active transition (forced early completion, so
    /// it snaps to its own target rather than being silently dropped),
    /// resolves the target state id, registers the new transition as active
    /// and writes or buffers the desired state. Returns the resolved target,
    /// or `None` when the mapping has no entry (the caller cancels).
    pub(crate) fn begin(
        owner: &RefCell<PanelInner>,
        kind: &TransitionKind,
        handle: PanelTransition,
    ) -> Option<i32> {
        let previous = owner.borrow_mut().active.take();
        if let Some(prev) = previous {
            if prev.is_running() {
                log::warn!(
                    "starting panel transition '{kind}' with {prev} still running; completing it early"
                );
                prev.complete_early();
            }
        }

        let target = owner.borrow().config.target_for(kind);
        let Some(target) = target else {
            log::warn!("no target state mapped for transition '{kind}'");
            return None;
        };

        let mut inner = owner.borrow_mut();
        inner.active = Some(handle);
        let property = inner.config.target_state_property.clone();
        if inner.store.is_ready() {
            inner.store.set_int_property(&property, target);
        } else {
            // one pending slot, last write wins
            inner.pending_state = Some(target);
        }
        Some(target)
    }

    /// Clear the active slot, but only if it still points at the given
    /// transition - a newer transition may already have replaced it.
    pub(crate) fn clear_active(owner: &RefCell<PanelInner>, id: Uuid) {
        let mut inner = owner.borrow_mut();
        if inner.active.as_ref().is_some_and(|t| t.id() == id) {
            inner.active = None;
        }
    }
}

/// Drives panel show/hide transitions against an external animator.
///
/// The controller owns at most one live transition at a time. Starting a new
/// transition while one is running force-completes the old one early before
/// the new one begins. All error conditions (missing mapping entries, an
/// uninitialized animator, stuck external state, a dropped owner) are
/// resolved locally by cancelling the affected transition - nothing here
/// returns errors or panics in normal operation.
///
/// Times are host-supplied monotonic `Duration`s; the controller never reads
/// a clock and never self-schedules.
pub struct PanelController {
    inner: Rc<RefCell<PanelInner>>,
}

impl PanelController {
    pub fn new(
        config: PanelConfig,
        animator: Box<dyn AnimationStatusProvider>,
        store: Box<dyn TargetPropertyStore>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PanelInner {
                config,
                animator,
                store,
                active: None,
                pending_state: None,
            })),
        }
    }

    /// Snapshot of the current configuration (the editor surface reads this).
    pub fn config(&self) -> PanelConfig {
        self.inner.borrow().config.clone()
    }

    /// Construct a transition bound to `kind` without starting it.
    ///
    /// Pure factory: no effect on the controller's live state. The optional
    /// `on_frame` callback is invoked on each update tick that neither
    /// completes nor cancels; it must not call back into its own transition
    /// handle.
    pub fn prepare_transition(
        &self,
        kind: TransitionKind,
        on_frame: Option<OnTransitionFrame>,
    ) -> PanelTransition {
        let layer = self.inner.borrow().config.transition_layer;
        PanelTransition::new(Rc::downgrade(&self.inner), kind, layer, on_frame)
    }

    /// Prepare and immediately start a transition.
    pub fn start_transition(&self, kind: TransitionKind, now: Duration) -> PanelTransition {
        let t = self.prepare_transition(kind, None);
        t.start(now);
        t
    }

    /// Show the panel, skipping the animation.
    pub fn bring_in_immediate(&self, now: Duration) -> PanelTransition {
        let t = self.prepare_transition(TransitionKind::In, None);
        t.start(now);
        t.complete_early();
        t
    }

    /// Hide the panel, skipping the animation.
    pub fn dismiss_immediate(&self, now: Duration) -> PanelTransition {
        let t = self.prepare_transition(TransitionKind::Out, None);
        t.start(now);
        t.complete_early();
        t
    }

    /// Per-tick readiness poll: flush the buffered desired-state write once
    /// the store reports ready.
    pub fn on_tick(&self) {
        let mut inner = self.inner.borrow_mut();
        let Some(state) = inner.pending_state else {
            return;
        };
        if inner.store.is_ready() {
            let property = inner.config.target_state_property.clone();
            inner.store.set_int_property(&property, state);
            inner.pending_state = None;
        }
    }

    /// The currently running transition, if any.
    pub fn active_transition(&self) -> Option<PanelTransition> {
        self.inner.borrow().active.clone()
    }

    /// Cancel any running transition. Called automatically on drop.
    pub fn teardown(&self) {
        let active = self.inner.borrow_mut().active.take();
        if let Some(t) = active {
            if t.is_running() {
                t.cancel();
            }
        }
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        self.teardown();
    }
}
