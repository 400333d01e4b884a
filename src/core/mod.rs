//! Core engine types: players, instance ids, state, actions, RNG,
//! configuration and errors.
//!
//! Everything here is plain data. The rules that move a state forward live in
//! `rules`, `effects` and `triggers`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use entity::{InstanceAllocator, InstanceId};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{RulesConfig, MAX_ROSTER};
pub use error::{EngineError, Rejection};
pub use action::{
    Action, DrawKnowledge, EndTurn, InitializeGame, RotateCreature, SetState, SummonKnowledge,
    ValidationResult,
};
pub use state::{FieldSlot, GameState, Phase, PlayerState, SlotBlock};
