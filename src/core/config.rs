//! Game configuration.
//!
//! A `GameConfig` is fixed when the `Game` is created and applies to every
//! game played on that instance.

use serde::{Deserialize, Serialize};

use crate::rules::Ruleset;

/// Cards dealt to each seat in a standard game.
pub const DEFAULT_HAND_SIZE: usize = 13;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player at start (default: 13).
    pub hand_size: usize,

    /// How a play is compared against the board.
    /// `Classic` only compares same-length sets; `Chops` adds bomb precedence.
    pub ruleset: Ruleset,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            ruleset: Ruleset::Classic,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom hand size.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Create a new config with a custom ruleset.
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }
}
