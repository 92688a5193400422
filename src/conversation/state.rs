//! Per-user dialogue state

use std::fmt;

/// Where a user currently is in the registration flow
///
/// The collected name lives inside `AwaitingPhoto`, so it cannot exist in any
/// other state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogueState {
    /// No registration in progress
    #[default]
    Idle,
    /// `/start` received, waiting for the participant's name
    AwaitingName,
    /// Name collected, waiting for the photo
    AwaitingPhoto {
        /// Normalized, filesystem-safe participant name
        name: String,
    },
}

impl DialogueState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DialogueState::Idle)
    }

    /// Name collected so far, if any
    pub fn collected_name(&self) -> Option<&str> {
        match self {
            DialogueState::AwaitingPhoto { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogueState::Idle => f.write_str("idle"),
            DialogueState::AwaitingName => f.write_str("awaiting_name"),
            DialogueState::AwaitingPhoto { .. } => f.write_str("awaiting_photo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(DialogueState::default(), DialogueState::Idle);
        assert!(DialogueState::default().is_idle());
    }

    #[test]
    fn test_collected_name_only_while_awaiting_photo() {
        assert_eq!(DialogueState::Idle.collected_name(), None);
        assert_eq!(DialogueState::AwaitingName.collected_name(), None);

        let state = DialogueState::AwaitingPhoto {
            name: "Anna_Maria".to_string(),
        };
        assert_eq!(state.collected_name(), Some("Anna_Maria"));
        assert_eq!(state.to_string(), "awaiting_photo");
    }
}
