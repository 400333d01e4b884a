//! Action payloads submitted to the engine.
//!
//! ## Player actions
//!
//! `RotateCreature`, `DrawKnowledge`, `SummonKnowledge` and `EndTurn` each
//! name the submitting player by its string id. They go through the
//! validator before they are applied.
//!
//! ## System actions
//!
//! `InitializeGame` and `SetState` come from the hosting service rather than
//! a player. They bypass turn checks and are handled by
//! `Engine::reduce`.
//!
//! ## Wire format
//!
//! Actions are internally tagged with camelCase names, matching the payloads
//! a client sends:
//!
//! ```
//! use knowledge_duel::core::Action;
//! use knowledge_duel::cards::CreatureId;
//!
//! let action: Action = serde_json::from_str(
//!     r#"{ "type": "rotateCreature", "playerId": "alice", "creatureId": "pele" }"#,
//! ).unwrap();
//!
//! assert_eq!(action, Action::rotate("alice", CreatureId::Pele));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::error::Rejection;
use super::state::GameState;
use crate::cards::{CreatureId, KnowledgeId};

/// Rotate one of your creatures 90°.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateCreature {
    #[serde(default)]
    pub player_id: String,
    pub creature_id: CreatureId,
}

/// Take a card from the market into your hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawKnowledge {
    #[serde(default)]
    pub player_id: String,
    pub knowledge_id: KnowledgeId,
    pub instance_id: InstanceId,
}

/// Put a card from your hand onto a creature's field slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonKnowledge {
    #[serde(default)]
    pub player_id: String,
    pub knowledge_id: KnowledgeId,
    pub instance_id: InstanceId,
    pub creature_id: CreatureId,
}

/// End the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndTurn {
    #[serde(default)]
    pub player_id: String,
}

/// Set up a new game.
///
/// Creature ids stay as strings here: an unknown id is a setup error
/// reported by `initialize`, not a payload decoding failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeGame {
    pub game_id: String,
    pub player1_id: String,
    pub player2_id: String,
    pub player1_selected_creature_ids: Vec<String>,
    pub player2_selected_creature_ids: Vec<String>,
    /// Deck shuffle seed. Drawn from OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl InitializeGame {
    /// Create an init payload from typed creature ids.
    #[must_use]
    pub fn new(
        game_id: impl Into<String>,
        player1: (&str, &[CreatureId]),
        player2: (&str, &[CreatureId]),
    ) -> Self {
        let keys = |ids: &[CreatureId]| ids.iter().map(|id| id.as_str().to_string()).collect();
        Self {
            game_id: game_id.into(),
            player1_id: player1.0.to_string(),
            player2_id: player2.0.to_string(),
            player1_selected_creature_ids: keys(player1.1),
            player2_selected_creature_ids: keys(player2.1),
            seed: None,
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Replace (or clear) the hosted state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetState {
    pub state: Option<Box<GameState>>,
}

/// Any action the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    RotateCreature(RotateCreature),
    DrawKnowledge(DrawKnowledge),
    SummonKnowledge(SummonKnowledge),
    EndTurn(EndTurn),
    InitializeGame(InitializeGame),
    SetState(SetState),
}

impl Action {
    /// Rotate a creature.
    #[must_use]
    pub fn rotate(player_id: impl Into<String>, creature_id: CreatureId) -> Self {
        Action::RotateCreature(RotateCreature {
            player_id: player_id.into(),
            creature_id,
        })
    }

    /// Draw a market card.
    #[must_use]
    pub fn draw(
        player_id: impl Into<String>,
        knowledge_id: KnowledgeId,
        instance_id: InstanceId,
    ) -> Self {
        Action::DrawKnowledge(DrawKnowledge {
            player_id: player_id.into(),
            knowledge_id,
            instance_id,
        })
    }

    /// Summon a hand card onto a creature.
    #[must_use]
    pub fn summon(
        player_id: impl Into<String>,
        knowledge_id: KnowledgeId,
        instance_id: InstanceId,
        creature_id: CreatureId,
    ) -> Self {
        Action::SummonKnowledge(SummonKnowledge {
            player_id: player_id.into(),
            knowledge_id,
            instance_id,
            creature_id,
        })
    }

    /// End the turn.
    #[must_use]
    pub fn end_turn(player_id: impl Into<String>) -> Self {
        Action::EndTurn(EndTurn {
            player_id: player_id.into(),
        })
    }

    /// Whether this is a system action (no turn checks).
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Action::InitializeGame(_) | Action::SetState(_))
    }

    /// The submitting player's id, for player actions.
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        match self {
            Action::RotateCreature(a) => Some(&a.player_id),
            Action::DrawKnowledge(a) => Some(&a.player_id),
            Action::SummonKnowledge(a) => Some(&a.player_id),
            Action::EndTurn(a) => Some(&a.player_id),
            Action::InitializeGame(_) | Action::SetState(_) => None,
        }
    }

    /// Short name of the action kind (the wire tag).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::RotateCreature(_) => "rotateCreature",
            Action::DrawKnowledge(_) => "drawKnowledge",
            Action::SummonKnowledge(_) => "summonKnowledge",
            Action::EndTurn(_) => "endTurn",
            Action::InitializeGame(_) => "initializeGame",
            Action::SetState(_) => "setState",
        }
    }
}

/// Validator verdict, in the shape callers expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    /// An accepting verdict.
    #[must_use]
    pub fn accept() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A rejecting verdict.
    #[must_use]
    pub fn reject(rejection: &Rejection) -> Self {
        Self {
            valid: false,
            reason: Some(rejection.to_string()),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationResult {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::accept(),
            Err(rejection) => Self::reject(&rejection),
        }
    }
}
