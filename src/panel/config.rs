//! Persisted panel configuration.
//!
//! A [`PanelConfig`] is what an editor surface reads and writes: which
//! animation layer to monitor, which integer property carries the desired
//! state, and the ordered mapping from transition names to target state ids.

use super::kind::TransitionKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One (transition name, target state id) mapping entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetState {
    /// Name of the transition this entry applies to.
    pub transition: String,
    /// The discrete state id the animator must reach.
    pub state_id: i32,
}

impl TargetState {
    pub fn new(transition: impl Into<String>, state_id: i32) -> Self {
        Self {
            transition: transition.into(),
            state_id,
        }
    }
}

/// Errors found when validating a configuration at edit time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target state property name is empty")]
    EmptyStateProperty,

    #[error("duplicate target state entry for transition '{0}'")]
    DuplicateTransition(String),
}

/// Configuration for a panel transition controller.
///
/// The defaults match the common case: an `int` property named
/// `"panelState"` on layer 0, with `out` mapped to state 0 and `in` to
/// state 1.
///
/// # Example
///
/// ```rust
/// use transom::panel::{PanelConfig, TransitionKind};
///
/// let config = PanelConfig::default();
/// assert_eq!(config.target_for(&TransitionKind::Out), Some(0));
/// assert_eq!(config.target_for(&TransitionKind::In), Some(1));
/// assert_eq!(config.target_for(&TransitionKind::Named("flip".into())), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Index of the animation layer whose state is monitored.
    pub transition_layer: usize,
    /// Name of the integer property that carries the desired state id.
    pub target_state_property: String,
    /// Ordered mapping from transition name to target state id.
    /// Lookup is first-match.
    pub target_states: Vec<TargetState>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            transition_layer: 0,
            target_state_property: "panelState".to_string(),
            target_states: vec![
                TargetState::new(TransitionKind::Out.name(), 0),
                TargetState::new(TransitionKind::In.name(), 1),
            ],
        }
    }
}

impl PanelConfig {
    /// A configuration with no mapping entries.
    pub fn empty(property: impl Into<String>) -> Self {
        Self {
            transition_layer: 0,
            target_state_property: property.into(),
            target_states: Vec::new(),
        }
    }

    /// Set the monitored animation layer.
    pub fn with_layer(mut self, layer: usize) -> Self {
        self.transition_layer = layer;
        self
    }

    /// Set the target state property name.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.target_state_property = property.into();
        self
    }

    /// Append a mapping entry.
    pub fn with_target(mut self, transition: impl Into<String>, state_id: i32) -> Self {
        self.target_states.push(TargetState::new(transition, state_id));
        self
    }

    /// Look up the target state id for a transition.
    ///
    /// First match wins. Absence is a valid, reportable condition - there is
    /// no silent default.
    pub fn target_for(&self, kind: &TransitionKind) -> Option<i32> {
        self.target_states
            .iter()
            .find(|ts| ts.transition == kind.name())
            .map(|ts| ts.state_id)
    }

    /// Validate the configuration.
    ///
    /// Meant for edit-time feedback; the controller itself treats a missing
    /// mapping entry as a per-transition cancellation, not a hard error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_state_property.is_empty() {
            return Err(ConfigError::EmptyStateProperty);
        }
        for (i, ts) in self.target_states.iter().enumerate() {
            if self.target_states[..i]
                .iter()
                .any(|prev| prev.transition == ts.transition)
            {
                return Err(ConfigError::DuplicateTransition(ts.transition.clone()));
            }
        }
        Ok(())
    }
}
