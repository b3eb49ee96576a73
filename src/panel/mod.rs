//! Panel transition controller: the imperative shell around the core.
//!
//! This module binds the generic lifecycle in [`crate::core`] to a concrete
//! panel: a persisted configuration mapping transition names to target state
//! ids, an injected animation status provider polled each tick, and a target
//! property store that may need a warm-up period before accepting writes.

pub mod config;
pub mod controller;
pub mod env;
pub mod fault;
pub mod kind;
pub mod scheduler;
pub mod transition;

pub use config::{ConfigError, PanelConfig, TargetState};
pub use controller::PanelController;
pub use env::{AnimationStatusProvider, TargetPropertyStore};
pub use fault::TransitionFault;
pub use kind::TransitionKind;
pub use scheduler::TickScheduler;
pub use transition::{OnTransitionFrame, PanelTransition, DEFAULT_MAX_TRANSITION_TIME};
