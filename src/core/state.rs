//! Game state: everything one duel needs to continue from.
//!
//! ## GameState
//!
//! - The shared card rows: market, deck (top = front), discard pile
//! - Both players (`PlayerState`), in seat order
//! - Turn bookkeeping: turn number, current player, phase, action budget
//! - Cross-turn effects: blocked field slots, carried-over bonus actions,
//!   and the damage/defense tally pending for the next resolution step
//! - The append-only event log
//!
//! ## Copy-on-write
//!
//! Collections are `im` persistent structures (or small inline vectors), so
//! cloning a state is cheap and an update copies only the player, slot or
//! row it touches. Engine functions take a state by value and return the
//! next one.
//!
//! ## Snapshots
//!
//! `to_snapshot` / `from_snapshot` produce the compact binary form handed to
//! the persistence layer.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{RulesConfig, MAX_ROSTER};
use super::entity::InstanceId;
use super::error::EngineError;
use super::player::{PlayerId, PlayerPair};
use crate::cards::{Creature, CreatureId, Knowledge};
use crate::effects::CombatTally;

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Field cards rotate and resolve.
    #[default]
    Knowledge,
    /// The current player acts.
    Action,
    /// Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Knowledge => "knowledge",
            Phase::Action => "action",
            Phase::GameOver => "gameOver",
        };
        f.write_str(name)
    }
}

/// The attachment point of one creature.
///
/// Slot `i` of a player's field belongs to creature `i` of their roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSlot {
    pub creature_id: CreatureId,
    pub knowledge: Option<Knowledge>,
}

impl FieldSlot {
    #[must_use]
    pub fn empty(creature_id: CreatureId) -> Self {
        Self {
            creature_id,
            knowledge: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.knowledge.is_none()
    }
}

/// A field slot a player may not summon onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBlock {
    pub slot: usize,
    /// The card that imposed the block. The block lifts when it leaves play.
    pub source: InstanceId,
}

/// One duelist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub id: String,
    /// Reaching zero or below loses the game.
    pub power: i32,
    pub creatures: SmallVec<[Creature; MAX_ROSTER]>,
    pub hand: Vector<Knowledge>,
    pub field: SmallVec<[FieldSlot; MAX_ROSTER]>,
}

impl PlayerState {
    /// Create a player with a fresh roster and an empty field.
    #[must_use]
    pub fn new(id: impl Into<String>, roster: &[CreatureId], power: i32) -> Self {
        Self {
            id: id.into(),
            power,
            creatures: roster.iter().map(|c| Creature::new(*c)).collect(),
            hand: Vector::new(),
            field: roster.iter().map(|c| FieldSlot::empty(*c)).collect(),
        }
    }

    /// Roster position of a creature.
    #[must_use]
    pub fn creature_index(&self, id: CreatureId) -> Option<usize> {
        self.creatures.iter().position(|c| c.id == id)
    }

    #[must_use]
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    /// Hand position of a card instance.
    #[must_use]
    pub fn hand_position(&self, instance: InstanceId) -> Option<usize> {
        self.hand.iter().position(|k| k.instance_id == instance)
    }

    /// Field slot holding a card instance.
    #[must_use]
    pub fn field_position(&self, instance: InstanceId) -> Option<usize> {
        self.field.iter().position(|slot| {
            slot.knowledge
                .as_ref()
                .is_some_and(|k| k.instance_id == instance)
        })
    }

    /// Cards in play, with their slot index, in slot order.
    pub fn field_cards(&self) -> impl Iterator<Item = (usize, &Knowledge)> {
        self.field
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.knowledge.as_ref().map(|k| (i, k)))
    }

    /// Take the card out of a slot.
    pub fn clear_slot(&mut self, slot: usize) -> Option<Knowledge> {
        self.field.get_mut(slot).and_then(|s| s.knowledge.take())
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

/// Complete state of one duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    pub players: PlayerPair<PlayerState>,

    /// Face-up offer row.
    pub market: Vector<Knowledge>,
    /// Draw pile; the front is the top.
    pub deck: Vector<Knowledge>,
    pub discard: Vector<Knowledge>,

    /// Turn number, starting at 1. Increments when play returns to seat 0.
    pub turn: u32,
    pub current_player: PlayerId,
    pub phase: Phase,
    /// Set with `phase = GameOver`; `None` then means a draw.
    pub winner: Option<PlayerId>,

    pub actions_taken: u32,
    pub actions_per_turn: u32,

    /// Per player: slots that player may not summon onto.
    pub blocked_slots: PlayerPair<Vector<SlotBlock>>,
    /// Per player: bonus actions added to their next turn's budget.
    pub extra_actions_next_turn: PlayerPair<u32>,
    /// Per player: queued incoming damage and qualified defense.
    pub pending_combat: PlayerPair<CombatTally>,

    pub config: RulesConfig,
    pub log: Vector<String>,
}

impl GameState {
    /// Create a state with empty card rows, at turn 1 in the knowledge phase.
    #[must_use]
    pub fn new(game_id: impl Into<String>, players: PlayerPair<PlayerState>, config: RulesConfig) -> Self {
        let actions_per_turn = config.actions_per_turn;
        Self {
            game_id: game_id.into(),
            players,
            market: Vector::new(),
            deck: Vector::new(),
            discard: Vector::new(),
            turn: 1,
            current_player: PlayerId::FIRST,
            phase: Phase::Knowledge,
            winner: None,
            actions_taken: 0,
            actions_per_turn,
            blocked_slots: PlayerPair::default(),
            extra_actions_next_turn: PlayerPair::default(),
            pending_combat: PlayerPair::default(),
            config,
            log: Vector::new(),
        }
    }

    /// Set the market row.
    #[must_use]
    pub fn with_market(mut self, cards: impl IntoIterator<Item = Knowledge>) -> Self {
        self.market = cards.into_iter().collect();
        self
    }

    /// Set the deck (first card on top).
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Knowledge>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    /// Set the phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Append a line to the event log.
    ///
    /// Every log line is mirrored as a `tracing` debug event.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(game = %self.game_id, turn = self.turn, "{}", message);
        self.log.push_back(message);
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Seat of the player with the given string id.
    #[must_use]
    pub fn seat_of(&self, player_id: &str) -> Option<PlayerId> {
        PlayerId::both().find(|p| self.players[*p].id == player_id)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Actions left in the current turn.
    #[must_use]
    pub fn actions_remaining(&self) -> u32 {
        self.actions_per_turn.saturating_sub(self.actions_taken)
    }

    /// Whether `player` may not summon onto `slot`.
    #[must_use]
    pub fn is_slot_blocked(&self, player: PlayerId, slot: usize) -> bool {
        self.blocked_slots[player].iter().any(|b| b.slot == slot)
    }

    /// Forbid `player` from summoning onto `slot` while `source` is in play.
    pub fn block_slot(&mut self, player: PlayerId, slot: usize, source: InstanceId) {
        self.blocked_slots[player].push_back(SlotBlock { slot, source });
    }

    /// Remove every block imposed by `source`.
    pub fn lift_blocks_from(&mut self, source: InstanceId) {
        for player in PlayerId::both() {
            let blocks = &mut self.blocked_slots[player];
            if blocks.iter().any(|b| b.source == source) {
                blocks.retain(|b| b.source != source);
            }
        }
    }

    /// Encode a binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode a binary snapshot.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}
