//! Passive triggers and event payloads.
//!
//! Trigger tags are named from the current player's point of view.
//! `PassiveTrigger::as_seen_by` converts a tag to the point of view of a
//! creature's owner: the other player's creatures see Player/Opponent
//! swapped.

use serde::{Deserialize, Serialize};

use crate::cards::{CreatureId, Knowledge};
use crate::core::PlayerId;

/// Moments at which passives are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassiveTrigger {
    TurnStart,
    AfterPlayerSummon,
    AfterOpponentSummon,
    AfterPlayerDraw,
    AfterOpponentDraw,
    KnowledgeLeave,
}

impl PassiveTrigger {
    /// The trigger for a summon by `actor`.
    #[must_use]
    pub fn summon_by(actor: PlayerId, current: PlayerId) -> Self {
        if actor == current {
            PassiveTrigger::AfterPlayerSummon
        } else {
            PassiveTrigger::AfterOpponentSummon
        }
    }

    /// The trigger for a draw by `actor`.
    #[must_use]
    pub fn draw_by(actor: PlayerId, current: PlayerId) -> Self {
        if actor == current {
            PassiveTrigger::AfterPlayerDraw
        } else {
            PassiveTrigger::AfterOpponentDraw
        }
    }

    /// This trigger as seen by a creature owned by `owner`.
    ///
    /// ```
    /// use knowledge_duel::core::PlayerId;
    /// use knowledge_duel::triggers::PassiveTrigger;
    ///
    /// let t = PassiveTrigger::AfterPlayerDraw;
    /// assert_eq!(t.as_seen_by(PlayerId::FIRST, PlayerId::FIRST), t);
    /// assert_eq!(
    ///     t.as_seen_by(PlayerId::SECOND, PlayerId::FIRST),
    ///     PassiveTrigger::AfterOpponentDraw,
    /// );
    /// ```
    #[must_use]
    pub fn as_seen_by(self, owner: PlayerId, current: PlayerId) -> Self {
        if owner == current {
            return self;
        }
        match self {
            PassiveTrigger::AfterPlayerSummon => PassiveTrigger::AfterOpponentSummon,
            PassiveTrigger::AfterOpponentSummon => PassiveTrigger::AfterPlayerSummon,
            PassiveTrigger::AfterPlayerDraw => PassiveTrigger::AfterOpponentDraw,
            PassiveTrigger::AfterOpponentDraw => PassiveTrigger::AfterPlayerDraw,
            other => other,
        }
    }
}

impl std::fmt::Display for PassiveTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PassiveTrigger::TurnStart => "TURN_START",
            PassiveTrigger::AfterPlayerSummon => "AFTER_PLAYER_SUMMON",
            PassiveTrigger::AfterOpponentSummon => "AFTER_OPPONENT_SUMMON",
            PassiveTrigger::AfterPlayerDraw => "AFTER_PLAYER_DRAW",
            PassiveTrigger::AfterOpponentDraw => "AFTER_OPPONENT_DRAW",
            PassiveTrigger::KnowledgeLeave => "KNOWLEDGE_LEAVE",
        };
        f.write_str(name)
    }
}

/// What happened.
///
/// `actor` is the player who acted: the summoner, the drawer, the player
/// whose turn starts, or the owner of the card leaving play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveEvent {
    pub actor: PlayerId,
    pub knowledge: Option<Knowledge>,
    pub creature: Option<CreatureId>,
}

impl PassiveEvent {
    /// An event with only an actor.
    #[must_use]
    pub fn new(actor: PlayerId) -> Self {
        Self {
            actor,
            knowledge: None,
            creature: None,
        }
    }

    /// Attach the card involved.
    #[must_use]
    pub fn with_knowledge(mut self, knowledge: Knowledge) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Attach the creature involved.
    #[must_use]
    pub fn with_creature(mut self, creature: CreatureId) -> Self {
        self.creature = Some(creature);
        self
    }
}
