//! Card movement between containers.
//!
//! Every move takes the card out of its old container before inserting it
//! into the new one, so an instance is never in two places. These helpers
//! only move cards and log; firing leave-play passives is the caller's job.

use crate::cards::Knowledge;
use crate::core::{GameState, InstanceId, PlayerId};

/// Remove a card from the market and refill its index from the deck top.
///
/// With an empty deck the market simply shrinks.
pub fn take_from_market(state: &mut GameState, instance: InstanceId) -> Option<Knowledge> {
    let index = state.market.iter().position(|k| k.instance_id == instance)?;
    let card = state.market.remove(index);

    if let Some(refill) = state.deck.pop_front() {
        state.log(format!("{} is revealed in the market", refill));
        state.market.insert(index, refill);
    } else {
        tracing::trace!("deck exhausted, market shrinks to {}", state.market.len());
    }

    Some(card)
}

/// Move a named market card into a player's hand.
pub fn draw_from_market(
    state: &mut GameState,
    player: PlayerId,
    instance: InstanceId,
) -> Option<Knowledge> {
    let card = take_from_market(state, instance)?;
    state.players[player].hand.push_back(card.clone());
    Some(card)
}

/// Free draw of the first market card.
///
/// Skipped (with a log line) when the market is empty or the hand is full.
pub fn draw_first_from_market(state: &mut GameState, player: PlayerId) -> Option<Knowledge> {
    let Some(first) = state.market.front().map(|k| k.instance_id) else {
        state.log(format!("{} finds the market empty", state.players[player].id));
        return None;
    };
    if state.players[player].hand_size() >= state.config.max_hand_size {
        state.log(format!("{}'s hand is full; the free draw is lost", state.players[player].id));
        return None;
    }

    let card = draw_from_market(state, player, first)?;
    state.log(format!("{} draws {} for free", state.players[player].id, card));
    Some(card)
}

/// Put a card on the discard pile, rotation cleared.
pub fn discard(state: &mut GameState, mut card: Knowledge) {
    card.rotation = 0;
    state.discard.push_back(card);
}

/// Discard the card at a hand index.
pub fn discard_from_hand(state: &mut GameState, player: PlayerId, index: usize) -> Option<Knowledge> {
    if index >= state.players[player].hand.len() {
        return None;
    }
    let card = state.players[player].hand.remove(index);
    discard(state, card.clone());
    Some(card)
}

/// Discard the card in a field slot and lift any blocks it imposed.
///
/// Returns the card as it was on the field (rotation intact).
pub fn discard_from_field(state: &mut GameState, player: PlayerId, slot: usize) -> Option<Knowledge> {
    let card = state.players[player].clear_slot(slot)?;
    state.lift_blocks_from(card.instance_id);
    discard(state, card.clone());
    Some(card)
}
