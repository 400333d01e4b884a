//! Card instances - runtime card state.
//!
//! `Knowledge` is one physical knowledge card: a static id, a unique
//! `InstanceId`, and its current rotation. `Creature` is a roster member with
//! its rotation and spendable wisdom.
//!
//! Both are small `Copy`-free value types. State updates replace them inside
//! the owning container rather than sharing references.

use serde::{Deserialize, Serialize};

use super::definition::{
    CreatureDefinition, CreatureId, Element, KnowledgeDefinition, KnowledgeId,
    MAX_CREATURE_ROTATION, QUARTER_TURN,
};
use crate::core::InstanceId;

/// One physical knowledge card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Knowledge {
    pub id: KnowledgeId,
    pub instance_id: InstanceId,
    /// Rotation in degrees (multiples of 90).
    pub rotation: u32,
}

impl Knowledge {
    /// Create an unrotated card.
    #[must_use]
    pub fn new(id: KnowledgeId, instance_id: InstanceId) -> Self {
        Self {
            id,
            instance_id,
            rotation: 0,
        }
    }

    /// Set the rotation (for tests and fixtures).
    #[must_use]
    pub fn with_rotation(mut self, rotation: u32) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn definition(&self) -> &'static KnowledgeDefinition {
        self.id.definition()
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.definition().element
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition().cost
    }

    /// Rotation at which this card leaves play.
    #[must_use]
    pub fn max_rotation(&self) -> u32 {
        self.definition().max_rotation()
    }

    /// Whether the card has reached its rotation limit.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.rotation >= self.max_rotation()
    }

    /// Advance one quarter turn, capped at the card's limit.
    ///
    /// Returns `true` if the new rotation reached the limit.
    pub fn advance(&mut self) -> bool {
        self.rotation = (self.rotation + QUARTER_TURN).min(self.max_rotation());
        self.is_spent()
    }
}

impl std::fmt::Display for Knowledge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.definition().name, self.instance_id)
    }
}

/// A creature in a player's roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: CreatureId,
    /// Rotation in degrees: 0, 90, 180 or 270.
    pub rotation: u32,
    /// Wisdom left to spend on summons.
    pub current_wisdom: u32,
}

impl Creature {
    /// Create a creature at the start of its wisdom cycle.
    #[must_use]
    pub fn new(id: CreatureId) -> Self {
        Self {
            id,
            rotation: 0,
            current_wisdom: id.definition().wisdom_at(0),
        }
    }

    #[must_use]
    pub fn definition(&self) -> &'static CreatureDefinition {
        self.id.definition()
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.definition().element
    }

    /// Whether the creature has reached 270°.
    #[must_use]
    pub fn is_fully_rotated(&self) -> bool {
        self.rotation >= MAX_CREATURE_ROTATION
    }

    /// Rotate 90° and refill wisdom from the cycle.
    ///
    /// No-op at 270°. Returns whether the creature moved.
    pub fn rotate(&mut self) -> bool {
        if self.is_fully_rotated() {
            return false;
        }
        self.rotation += QUARTER_TURN;
        self.current_wisdom = self.definition().wisdom_at(self.rotation);
        true
    }

    /// Rotate 90° keeping the current wisdom.
    ///
    /// Used when an ability turns the creature mid-turn. No-op at 270°.
    pub fn turn_without_refill(&mut self) -> bool {
        if self.is_fully_rotated() {
            return false;
        }
        self.rotation += QUARTER_TURN;
        true
    }

    /// Start a new wisdom cycle at 0°.
    pub fn reset_cycle(&mut self) {
        self.rotation = 0;
        self.current_wisdom = self.definition().wisdom_at(0);
    }

    /// Spend wisdom on a summon. Never goes below zero.
    pub fn spend(&mut self, cost: u32) {
        self.current_wisdom = self.current_wisdom.saturating_sub(cost);
    }
}
