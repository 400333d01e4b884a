//! Creature passives.
//!
//! Each creature definition carries one `Passive`. Triggered passives react
//! to a `PassiveTrigger` through the `OnTrigger` capability; cost
//! reductions and free summons are static and are read by the validator
//! and executor instead.

use serde::{Deserialize, Serialize};

use crate::cards::Element;
use crate::core::GameState;
use crate::effects::{combat, first_field_card, FieldFilter};
use crate::zones;

use super::condition::{PassiveCondition, PassiveHolder};
use super::dispatch::knowledge_left;
use super::event::{PassiveEvent, PassiveTrigger};

/// What a triggered passive does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassiveEffect {
    /// Discard the first opponent field card cheaper than the event's card.
    DiscardCheaperOpponentCard,
    OpponentLosesPower(u32),
    OwnerGainsPower(u32),
    /// Owner takes the first market card for free.
    OwnerDrawsFromMarket,
    OwnerGainsExtraAction(u32),
    /// The holder rotates 90° without refilling wisdom (no-op at 270°).
    RotateSelf,
    /// The holder gains current wisdom.
    GainWisdom(u32),
}

/// A creature's passive ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passive {
    /// Fires on a trigger when the condition holds.
    Triggered {
        trigger: PassiveTrigger,
        condition: PassiveCondition,
        effect: PassiveEffect,
    },
    /// The owner's cards of an element cost less (never below 1).
    CostReduction { element: Element, amount: u32 },
    /// Summoning a card of an element onto this creature costs no action.
    FreeSummon { element: Element },
}

impl Passive {
    /// Cost reduction this passive grants to a card of `element`.
    #[must_use]
    pub fn cost_reduction(&self, element: Element) -> u32 {
        match *self {
            Passive::CostReduction { element: e, amount } if e == element => amount,
            _ => 0,
        }
    }

    /// Whether summoning a card of `element` onto the holder is free.
    #[must_use]
    pub fn waives_action(&self, element: Element) -> bool {
        matches!(*self, Passive::FreeSummon { element: e } if e == element)
    }
}

/// Reaction to a passive trigger.
pub trait OnTrigger {
    /// Apply the reaction if `trigger` (already converted to the holder's
    /// point of view) and the event match. Returns whether it fired.
    fn on_trigger(
        &self,
        trigger: PassiveTrigger,
        holder: &PassiveHolder,
        event: &PassiveEvent,
        state: &mut GameState,
    ) -> bool;
}

impl OnTrigger for Passive {
    fn on_trigger(
        &self,
        trigger: PassiveTrigger,
        holder: &PassiveHolder,
        event: &PassiveEvent,
        state: &mut GameState,
    ) -> bool {
        let Passive::Triggered {
            trigger: wanted,
            condition,
            effect,
        } = *self
        else {
            return false;
        };
        if wanted != trigger || !condition.holds(holder, event, state) {
            return false;
        }

        let name = holder.creature.definition().name;
        tracing::debug!(creature = name, %trigger, ?effect, "passive fires");
        apply_passive_effect(effect, holder, event, state);
        true
    }
}

fn apply_passive_effect(
    effect: PassiveEffect,
    holder: &PassiveHolder,
    event: &PassiveEvent,
    state: &mut GameState,
) {
    let owner = holder.owner;
    let opponent = owner.opponent();
    let name = holder.creature.definition().name;

    match effect {
        PassiveEffect::DiscardCheaperOpponentCard => {
            let Some(cost) = event.knowledge.as_ref().map(|k| k.cost()) else {
                return;
            };
            match first_field_card(state, opponent, FieldFilter::CheaperThan(cost)) {
                Some(slot) => {
                    if let Some(gone) = zones::discard_from_field(state, opponent, slot) {
                        state.log(format!("{} burns away {} from {}'s field", name, gone, state.players[opponent].id));
                        knowledge_left(state, opponent, gone);
                    }
                }
                None => state.log(format!("{} finds nothing cheaper to burn", name)),
            }
        }

        PassiveEffect::OpponentLosesPower(amount) => {
            combat::lose_power(state, opponent, amount);
            let message = format!(
                "{} drains {} power from {}, power now {}",
                name, amount, state.players[opponent].id, state.players[opponent].power
            );
            state.log(message);
        }

        PassiveEffect::OwnerGainsPower(amount) => {
            combat::gain_power(state, owner, amount);
            let message = format!(
                "{} grants {} {} power, power now {}",
                name, state.players[owner].id, amount, state.players[owner].power
            );
            state.log(message);
        }

        PassiveEffect::OwnerDrawsFromMarket => {
            state.log(format!("{} calls a card from the market", name));
            zones::draw_first_from_market(state, owner);
        }

        PassiveEffect::OwnerGainsExtraAction(amount) => {
            state.extra_actions_next_turn[owner] += amount;
            state.log(format!("{} promises {} an extra action next turn", name, state.players[owner].id));
        }

        PassiveEffect::RotateSelf => {
            let Some(creature) = state.players[owner].creatures.get_mut(holder.index) else {
                return;
            };
            if creature.turn_without_refill() {
                let message = format!("{} turns to {}°", name, creature.rotation);
                state.log(message);
            }
        }

        PassiveEffect::GainWisdom(amount) => {
            let Some(creature) = state.players[owner].creatures.get_mut(holder.index) else {
                return;
            };
            creature.current_wisdom += amount;
            let message = format!("{} gains {} wisdom", name, amount);
            state.log(message);
        }
    }
}
