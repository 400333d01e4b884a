//! Effect resolution - executing card effects on game state.
//!
//! `invoke_card` looks a card up in the effect table and applies each
//! resulting effect in order against the live state. Effects that rotate
//! another card recurse into that card's own entry before returning.

use crate::cards::Knowledge;
use crate::core::{GameState, PlayerId};
use crate::triggers;
use crate::zones;

use super::combat;
use super::effect::Effect;
use super::table::card_effects;
use super::targeting::{first_field_card, first_hand_card, FieldFilter};

/// The card an effect comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectSource {
    pub owner: PlayerId,
    pub slot: usize,
    /// The card as it is after this step's rotation.
    pub card: Knowledge,
    pub is_final: bool,
}

impl EffectSource {
    #[must_use]
    pub fn new(owner: PlayerId, slot: usize, card: Knowledge, is_final: bool) -> Self {
        Self {
            owner,
            slot,
            card,
            is_final,
        }
    }
}

/// Resolve a card's table entry at its current rotation.
pub fn invoke_card(state: &mut GameState, source: &EffectSource) {
    let effects = card_effects(&source.card, source.card.rotation, source.is_final);
    tracing::trace!(
        card = %source.card,
        rotation = source.card.rotation,
        is_final = source.is_final,
        count = effects.len(),
        "invoking card"
    );

    for effect in effects {
        resolve_effect(state, source, effect);
    }
}

/// Apply one effect.
pub fn resolve_effect(state: &mut GameState, source: &EffectSource, effect: Effect) {
    let owner = source.owner;
    let opponent = owner.opponent();
    let owner_name = state.players[owner].id.clone();
    let card = &source.card;

    if effect.moves_cards() {
        tracing::trace!(?effect, card = %card, "card movement effect");
    }

    match effect {
        Effect::QueueDamage(amount) => {
            combat::queue_damage(state, opponent, amount);
            state.log(format!("{} readies {} damage against {}", card, amount, state.players[opponent].id));
        }

        Effect::ImmediateDamage(amount) => {
            combat::lose_power(state, opponent, amount);
            let message = format!(
                "{} strikes {} for {}, power now {}",
                card, state.players[opponent].id, amount, state.players[opponent].power
            );
            state.log(message);
        }

        Effect::Defense(amount) => {
            if combat::queue_defense(state, owner, source.slot, card, amount) {
                state.log(format!("{} raises {} defense for {}", card, amount, owner_name));
            }
        }

        Effect::DiscardOpponentHandCard => match first_hand_card(state, opponent) {
            Some(index) => {
                if let Some(gone) = zones::discard_from_hand(state, opponent, index) {
                    state.log(format!("{} discards {} from {}'s hand", card, gone, state.players[opponent].id));
                }
            }
            None => state.log(format!("{} finds no card in {}'s hand", card, state.players[opponent].id)),
        },

        Effect::DiscardOpponentFieldCard => {
            match first_field_card(state, opponent, FieldFilter::Any) {
                Some(slot) => {
                    if let Some(gone) = zones::discard_from_field(state, opponent, slot) {
                        state.log(format!("{} discards {} from {}'s field", card, gone, state.players[opponent].id));
                        triggers::knowledge_left(state, opponent, gone);
                    }
                }
                None => state.log(format!("{} finds no card on {}'s field", card, state.players[opponent].id)),
            }
        }

        Effect::DrawFromMarket => {
            zones::draw_first_from_market(state, owner);
        }

        Effect::RotateOtherOwnCard => rotate_other_card(state, source),

        Effect::BlockOpposingSlot => {
            state.block_slot(opponent, source.slot, card.instance_id);
            state.log(format!(
                "{} binds slot {} of {}'s field",
                card,
                source.slot + 1,
                state.players[opponent].id
            ));
        }

        Effect::HostWisdom(amount) => {
            if let Some(creature) = state.players[owner].creatures.get_mut(source.slot) {
                creature.current_wisdom += amount;
                let message = format!("{} gives {} +{} wisdom", card, creature.definition().name, amount);
                state.log(message);
            }
        }

        Effect::GainPower(amount) => {
            combat::gain_power(state, owner, amount);
            let message = format!(
                "{} gains {} power from {}, power now {}",
                owner_name, amount, card, state.players[owner].power
            );
            state.log(message);
        }

        Effect::ExtraActionNextTurn(amount) => {
            state.extra_actions_next_turn[owner] += amount;
            state.log(format!("{} will have {} extra action(s) next turn", owner_name, amount));
        }
    }
}

/// Advance the first other rotatable card on the owner's field and resolve it.
fn rotate_other_card(state: &mut GameState, source: &EffectSource) {
    let owner = source.owner;
    let Some(slot) = first_field_card(state, owner, FieldFilter::RotatableExcept(source.slot)) else {
        state.log(format!("{} finds nothing to turn", source.card));
        return;
    };
    let Some(target) = state.players[owner].field[slot].knowledge.as_mut() else {
        return;
    };

    let is_final = target.advance();
    let rotated = target.clone();
    state.log(format!("{} turns {} to {}°", source.card, rotated, rotated.rotation));

    // Rotations only grow, so the chain ends once every card is spent.
    invoke_card(state, &EffectSource::new(owner, slot, rotated, is_final));
}
