//! Rules configuration.
//!
//! The numeric knobs of a duel live in `RulesConfig`. Defaults reproduce the
//! standard game; callers may override any field, either with builder
//! methods or by loading JSON where missing fields fall back to defaults.
//!
//! ```
//! use knowledge_duel::core::RulesConfig;
//!
//! let config = RulesConfig::from_json_str(r#"{ "startingPower": 10 }"#).unwrap();
//! assert_eq!(config.starting_power, 10);
//! assert_eq!(config.actions_per_turn, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Largest roster a player may field (one field slot per creature).
pub const MAX_ROSTER: usize = 3;

/// Tunable rules parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesConfig {
    /// Power each player starts with.
    pub starting_power: i32,

    /// Actions a player may take per turn before the turn ends automatically.
    pub actions_per_turn: u32,

    /// Maximum knowledge cards in a hand.
    pub max_hand_size: usize,

    /// Size of the face-up market row.
    pub market_size: usize,

    /// Copies of each catalog knowledge card shuffled into the shared deck.
    pub copies_per_knowledge: usize,

    /// Fewest creatures a roster may contain.
    pub min_roster: usize,

    /// Most creatures a roster may contain.
    pub max_roster: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_power: 20,
            actions_per_turn: 2,
            max_hand_size: 5,
            market_size: 5,
            copies_per_knowledge: 2,
            min_roster: 2,
            max_roster: MAX_ROSTER,
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the starting power.
    #[must_use]
    pub fn with_starting_power(mut self, power: i32) -> Self {
        self.starting_power = power;
        self
    }

    /// Set the per-turn action budget.
    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    /// Set the market row size.
    #[must_use]
    pub fn with_market_size(mut self, size: usize) -> Self {
        self.market_size = size;
        self
    }

    /// Set the number of copies of each card in the deck.
    #[must_use]
    pub fn with_copies_per_knowledge(mut self, copies: usize) -> Self {
        self.copies_per_knowledge = copies;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fail = |msg: &str| Err(EngineError::InvalidConfig(msg.to_string()));

        if self.starting_power <= 0 {
            return fail("starting power must be positive");
        }
        if self.actions_per_turn == 0 {
            return fail("a turn must allow at least one action");
        }
        if self.max_hand_size == 0 {
            return fail("hand size limit must be at least 1");
        }
        if self.market_size == 0 {
            return fail("market must hold at least one card");
        }
        if self.min_roster == 0 || self.min_roster > self.max_roster {
            return fail("roster bounds are inconsistent");
        }
        if self.max_roster > MAX_ROSTER {
            return fail("rosters hold at most three creatures");
        }
        Ok(())
    }
}
