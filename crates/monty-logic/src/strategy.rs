//! Final-decision strategies

use serde::{Deserialize, Serialize};

/// What the player does after the host opens a door
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to a remaining unopened door.
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn from_stay(stay: bool) -> Self {
        if stay {
            Strategy::Stay
        } else {
            Strategy::Switch
        }
    }

    pub fn is_stay(self) -> bool {
        self == Strategy::Stay
    }

    pub fn opposite(self) -> Self {
        match self {
            Strategy::Stay => Strategy::Switch,
            Strategy::Switch => Strategy::Stay,
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Strategy::Stay => f.write_str("stay"),
            Strategy::Switch => f.write_str("switch"),
        }
    }
}

/// Human-readable description of a strategy
pub fn describe_strategy(strategy: Strategy) -> String {
    match strategy {
        Strategy::Stay => "Always keep the door you picked first.".to_string(),
        Strategy::Switch => "Always move to another unopened door after the reveal.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stay() {
        assert_eq!(Strategy::from_stay(true), Strategy::Stay);
        assert_eq!(Strategy::from_stay(false), Strategy::Switch);
        assert!(Strategy::Stay.is_stay());
        assert!(!Strategy::Switch.is_stay());
    }

    #[test]
    fn test_opposite_is_involution() {
        for strategy in Strategy::ALL {
            assert_ne!(strategy.opposite(), strategy);
            assert_eq!(strategy.opposite().opposite(), strategy);
        }
    }

    #[test]
    fn test_display_and_description() {
        assert_eq!(Strategy::Stay.to_string(), "stay");
        assert_eq!(Strategy::Switch.to_string(), "switch");
        assert!(describe_strategy(Strategy::Switch).contains("another"));
    }
}
