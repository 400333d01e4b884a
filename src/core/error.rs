//! Engine errors.
//!
//! Two families:
//! - `Rejection`: why the validator refused an action. Never fatal; the
//!   caller shows the reason and leaves the state untouched.
//! - `EngineError`: malformed setup input or misuse of the engine API. These
//!   indicate a caller bug and abort the request.

use crate::cards::{CreatureId, KnowledgeId};
use crate::core::InstanceId;

/// Reason an action failed validation.
///
/// The `Display` text is the human-readable reason surfaced to players.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Turn can only be ended during the action phase")]
    EndTurnOutsideActionPhase,

    #[error("Action payload is missing a player id")]
    MissingPlayerId,

    #[error("Unknown player {0}")]
    UnknownPlayer(String),

    #[error("It is not {0}'s turn")]
    NotYourTurn(String),

    #[error("Actions are only allowed during the action phase")]
    NotActionPhase,

    #[error("No actions left this turn")]
    NoActionsLeft,

    #[error("Creature {0} is not on your field")]
    CreatureNotOnField(CreatureId),

    #[error("The market is empty")]
    MarketEmpty,

    #[error("Card {0} is not in the market")]
    NotInMarket(InstanceId),

    #[error("Market card {instance} is {actual}, not {claimed}")]
    MarketCardMismatch {
        instance: InstanceId,
        claimed: KnowledgeId,
        actual: KnowledgeId,
    },

    #[error("Hand is full")]
    HandFull,

    #[error("Card {0} is not in your hand")]
    NotInHand(InstanceId),

    #[error("Hand card {instance} is {actual}, not {claimed}")]
    HandCardMismatch {
        instance: InstanceId,
        claimed: KnowledgeId,
        actual: KnowledgeId,
    },

    #[error("The field slot of {0} is already occupied")]
    SlotOccupied(CreatureId),

    #[error("The field slot of {0} is blocked by an opponent effect")]
    SlotBlocked(CreatureId),

    #[error("{creature} has {available} wisdom but the card costs {cost}")]
    NotEnoughWisdom {
        creature: CreatureId,
        available: u32,
        cost: u32,
    },

    #[error("The game is over")]
    GameOver,
}

/// Fatal engine error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{player} selected {count} creatures; a roster needs {min} to {max}")]
    InvalidRosterSize {
        player: String,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("{player} selected {creature} more than once")]
    DuplicateCreature { player: String, creature: CreatureId },

    #[error("Unknown creature id `{0}`")]
    UnknownCreature(String),

    #[error("Unknown knowledge id `{0}`")]
    UnknownKnowledge(String),

    #[error("Both seats use player id `{0}`")]
    DuplicatePlayer(String),

    #[error("Invalid rules configuration: {0}")]
    InvalidConfig(String),

    #[error("No game state; initialize a game first")]
    MissingState,

    #[error("Action rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Snapshot encoding failed: {0}")]
    Snapshot(String),
}
