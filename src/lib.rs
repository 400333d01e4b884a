//! # knowledge-duel
//!
//! Rules engine for a two-player card duel. Each player brings two or three
//! creatures; knowledge cards drawn from a shared market are summoned onto
//! them and resolve their effects as they rotate, once per knowledge phase.
//! A player whose power drops to zero loses.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation maps a state (and an action) to
//!    a new state. No I/O, no clocks, no hidden globals.
//!
//! 2. **Deterministic**: the deck shuffle at initialization is the only
//!    randomness, and it is seeded from the init payload.
//!
//! 3. **Cards as data**: card stats, effect tables and creature passives are
//!    closed enums matched exhaustively, so a new card cannot be half wired.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, market, deck and log use `im-rs`
//!   vectors so cloning a state for lookahead is cheap.
//!
//! - **Sequential resolution**: effects and passives resolve one at a time
//!   against the live state. Later steps see what earlier steps changed.
//!
//! ## Modules
//!
//! - `core`: players, instance ids, state, actions, RNG, configuration, errors
//! - `cards`: knowledge and creature definitions, instances, the catalog
//! - `zones`: card locations, the census, and card movement
//! - `effects`: the effect table, targeting, combat tallies
//! - `triggers`: creature passives and their dispatch
//! - `rules`: validator, executor, knowledge phase, turn flow, `Engine`

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod triggers;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, EngineError, GameRng, GameState, InitializeGame, InstanceId, Phase, PlayerId,
    PlayerPair, PlayerState, Rejection, RulesConfig, ValidationResult,
};

pub use crate::cards::{Catalog, Creature, CreatureId, Element, Knowledge, KnowledgeId};

pub use crate::zones::{CensusReport, Location};

pub use crate::effects::{CombatTally, Effect};

pub use crate::triggers::{Passive, PassiveEffect, PassiveEvent, PassiveTrigger};

pub use crate::rules::{Engine, GameResult, RulesEngine};
