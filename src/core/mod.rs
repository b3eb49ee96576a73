//! Core transition lifecycle types.
//!
//! This module contains the generic heart of the crate:
//! - Lifecycle statuses via [`TransitionStatus`]
//! - The closed five-hook protocol via [`TransitionHooks`]
//! - The [`Transition`] driver that owns the termination guarantees
//! - Immutable status history tracking
//!
//! Nothing in this module knows about panels or animators; those live in
//! [`crate::panel`].

mod history;
mod lifecycle;
mod status;

pub use history::{StatusChange, StatusHistory};
pub use lifecycle::{StartDirective, TickContext, Transition, TransitionHooks, UpdateDirective};
pub use status::TransitionStatus;
