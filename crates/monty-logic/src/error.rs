//! Error types for round transitions and configuration

use crate::config::{MAX_DOORS, MIN_DOORS};
use crate::game::Phase;

/// Operations a caller can invoke on a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PickInitialDoor,
    HostReveal,
    Decide,
    AlternativeOutcome,
    SimulateBulk,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Action::PickInitialDoor => "pick initial door",
            Action::HostReveal => "host reveal",
            Action::Decide => "decide",
            Action::AlternativeOutcome => "alternative outcome",
            Action::SimulateBulk => "simulate bulk",
        };
        f.write_str(name)
    }
}

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than MIN_DOORS or more than MAX_DOORS doors.
    DoorCount { doors: usize },
    /// A bulk run needs at least one round.
    NoRounds,
    /// Progress chunks must hold at least one round.
    ZeroChunk,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::DoorCount { doors } => write!(
                f,
                "door count must be between {} and {}, got {}",
                MIN_DOORS, MAX_DOORS, doors
            ),
            ConfigError::NoRounds => write!(f, "round count must be greater than zero"),
            ConfigError::ZeroChunk => write!(f, "chunk size must be greater than zero"),
        }
    }
}

/// Errors returned by the engine, the simulator and the session.
///
/// A returned error always means nothing was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The action is not valid in the current phase (`None` = no round yet).
    InvalidTransition { action: Action, phase: Option<Phase> },
    /// The door index is outside `[0, door_count)`.
    InvalidDoorIndex { door: usize, door_count: usize },
    /// A door count or round count was rejected.
    InvalidConfiguration(ConfigError),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidTransition { action, phase: Some(phase) } =>
                write!(f, "cannot {} while {}", action, phase),
            GameError::InvalidTransition { action, phase: None } =>
                write!(f, "cannot {} before a round has started", action),
            GameError::InvalidDoorIndex { door, door_count } =>
                write!(f, "door {} is out of range for {} doors", door, door_count),
            GameError::InvalidConfiguration(err) =>
                write!(f, "invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfiguration(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_messages() {
        let err = GameError::InvalidTransition {
            action: Action::HostReveal,
            phase: Some(Phase::AwaitingInitialPick),
        };
        assert_eq!(err.to_string(), "cannot host reveal while awaiting initial pick");

        let err = GameError::InvalidTransition { action: Action::Decide, phase: None };
        assert_eq!(err.to_string(), "cannot decide before a round has started");
    }

    #[test]
    fn test_config_messages() {
        let err: GameError = ConfigError::DoorCount { doors: 2 }.into();
        assert_eq!(
            err.to_string(),
            format!("invalid configuration: door count must be between 3 and {}, got 2", MAX_DOORS)
        );
        assert_eq!(
            GameError::from(ConfigError::NoRounds).to_string(),
            "invalid configuration: round count must be greater than zero"
        );
    }

    #[test]
    fn test_door_index_message() {
        let err = GameError::InvalidDoorIndex { door: 5, door_count: 3 };
        assert_eq!(err.to_string(), "door 5 is out of range for 3 doors");
    }
}
