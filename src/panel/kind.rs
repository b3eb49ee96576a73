//! Logical panel transition kinds.

use serde::{Deserialize, Serialize};

/// The logical transition a caller is asking for.
///
/// `In` brings a panel on screen, `Out` dismisses it. `Named` opens the set
/// up to custom transitions; the target state mapping is keyed by name, so a
/// named transition participates in configuration exactly like the built-in
/// pair.
///
/// # Example
///
/// ```rust
/// use transom::panel::TransitionKind;
///
/// assert_eq!(TransitionKind::In.name(), "in");
/// assert_eq!(TransitionKind::Out.name(), "out");
/// assert_eq!(TransitionKind::Named("minimize".into()).name(), "minimize");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Bring the panel in (show).
    In,
    /// Dismiss the panel (hide).
    Out,
    /// A custom transition, matched against the mapping by name.
    Named(String),
}

impl TransitionKind {
    /// The name used to look the transition up in the target state mapping.
    pub fn name(&self) -> &str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Named(name) => name,
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_kinds_have_stable_names() {
        assert_eq!(TransitionKind::In.name(), "in");
        assert_eq!(TransitionKind::Out.name(), "out");
    }

    #[test]
    fn named_kind_uses_its_own_name() {
        let kind = TransitionKind::Named("minimize".to_string());
        assert_eq!(kind.name(), "minimize");
        assert_eq!(kind.to_string(), "minimize");
    }

    #[test]
    fn kind_serializes_correctly() {
        let kind = TransitionKind::Named("flip".to_string());
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: TransitionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);
    }
}
