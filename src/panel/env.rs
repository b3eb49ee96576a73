//! Collaborator contracts the controller consumes.
//!
//! These traits abstract the host engine away from the core: something that
//! reports animation status per layer, and something that accepts integer
//! property writes once it becomes ready. Both are injected at controller
//! construction as boxed trait objects.

/// Reports the status of the external animation state machine.
pub trait AnimationStatusProvider {
    /// Whether the animator has finished initializing. An uninitialized
    /// animator cancels any running transition.
    fn is_initialized(&self) -> bool;

    /// Whether the given layer is currently blending between states.
    fn is_in_transition(&self, layer: usize) -> bool;

    /// Hash of the layer's current state.
    fn current_state_hash(&self, layer: usize) -> i32;

    /// Force the animator into a state immediately, without animating.
    fn play_immediate(&mut self, state_hash: i32);
}

/// Accepts desired-state property writes, possibly after a warm-up period.
///
/// Writes requested while `is_ready` is false are buffered by the controller
/// (one pending slot, last-write-wins) and flushed on a later readiness poll.
pub trait TargetPropertyStore {
    /// Whether the store will accept writes right now.
    fn is_ready(&self) -> bool;

    /// Write an integer property.
    fn set_int_property(&mut self, name: &str, value: i32);
}
