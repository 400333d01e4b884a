//! Passive conditions.
//!
//! A condition is checked against the event and the accumulated state at
//! the moment the creature's turn in the passive loop comes up.

use serde::{Deserialize, Serialize};

use crate::cards::{CreatureId, Element};
use crate::core::{GameState, PlayerId};

use super::event::PassiveEvent;

/// When a triggered passive applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassiveCondition {
    /// The event's card has this element.
    CardElement(Element),

    /// The event's card has this element and belonged to the creature's owner.
    OwnCardElement(Element),

    /// The event's card was summoned onto this creature.
    SummonedOntoSelf,

    /// It is the owner's turn and their hand holds at most N cards.
    OwnerTurnWithHandAtMost(usize),

    /// It is the owner's turn and they have less power than the opponent.
    OwnerTurnWhileBehind,

    /// The opponent holds more cards than the owner.
    OpponentHandLarger,
}

/// The creature whose passive is being checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassiveHolder {
    pub owner: PlayerId,
    pub index: usize,
    pub creature: CreatureId,
}

impl PassiveCondition {
    /// Evaluate against the event and current state.
    #[must_use]
    pub fn holds(&self, holder: &PassiveHolder, event: &PassiveEvent, state: &GameState) -> bool {
        let owner = state.player(holder.owner);
        let opponent = state.player(holder.owner.opponent());
        let card_element = event.knowledge.as_ref().map(|k| k.element());

        match *self {
            PassiveCondition::CardElement(element) => card_element == Some(element),
            PassiveCondition::OwnCardElement(element) => {
                event.actor == holder.owner && card_element == Some(element)
            }
            PassiveCondition::SummonedOntoSelf => event.creature == Some(holder.creature),
            PassiveCondition::OwnerTurnWithHandAtMost(limit) => {
                event.actor == holder.owner && owner.hand_size() <= limit
            }
            PassiveCondition::OwnerTurnWhileBehind => {
                event.actor == holder.owner && owner.power < opponent.power
            }
            PassiveCondition::OpponentHandLarger => opponent.hand_size() > owner.hand_size(),
        }
    }
}
