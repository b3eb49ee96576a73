//! Transom: a tick-driven transition lifecycle controller for UI panels
//!
//! Transom drives panel show/hide transitions against an external animation
//! state machine. The core is a small generic lifecycle driver - start,
//! update, complete, cancel, early-complete - with strict re-entrancy and
//! idempotence guarantees; around it, a panel controller resolves logical
//! transitions (in/out/named) to target state ids, buffers writes to a
//! not-yet-ready property store, and cancels transitions whose external
//! state goes missing or gets stuck.
//!
//! # Core Concepts
//!
//! - **Lifecycle driver**: the five-hook protocol via `Transition` and
//!   `TransitionHooks`
//! - **Controller**: the at-most-one-running invariant, target resolution
//!   and buffered property writes via `PanelController`
//! - **Ticking**: the host owns time; `TickScheduler` polls live
//!   transitions once per frame
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use transom::panel::{
//!     AnimationStatusProvider, PanelConfig, PanelController, TargetPropertyStore,
//!     TransitionKind,
//! };
//!
//! struct Animator {
//!     state: i32,
//! }
//!
//! impl AnimationStatusProvider for Animator {
//!     fn is_initialized(&self) -> bool {
//!         true
//!     }
//!     fn is_in_transition(&self, _layer: usize) -> bool {
//!         true
//!     }
//!     fn current_state_hash(&self, _layer: usize) -> i32 {
//!         self.state
//!     }
//!     fn play_immediate(&mut self, state_hash: i32) {
//!         self.state = state_hash;
//!     }
//! }
//!
//! struct Store;
//!
//! impl TargetPropertyStore for Store {
//!     fn is_ready(&self) -> bool {
//!         true
//!     }
//!     fn set_int_property(&mut self, _name: &str, _value: i32) {}
//! }
//!
//! let panel = PanelController::new(
//!     PanelConfig::default(),
//!     Box::new(Animator { state: 1 }),
//!     Box::new(Store),
//! );
//!
//! let t = panel.start_transition(TransitionKind::Out, Duration::ZERO);
//! assert!(t.is_running());
//!
//! // one scheduler tick: the animator has not reached the target yet
//! t.update(Duration::from_millis(16), Duration::from_millis(16));
//! assert!(t.is_running());
//!
//! // skip the rest of the animation
//! t.complete_early();
//! assert!(t.is_complete());
//! ```

pub mod core;
pub mod panel;

// Re-export commonly used types
pub use crate::core::{Transition, TransitionHooks, TransitionStatus};
pub use panel::{PanelConfig, PanelController, PanelTransition, TickScheduler, TransitionKind};
