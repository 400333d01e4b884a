//! Target selection for card and passive effects.
//!
//! Effects never choose: they take the first qualifying candidate, in hand
//! order for hands and in field-slot order for fields. All selectors here
//! are read-only and return an index for the caller to act on.

use crate::cards::Knowledge;
use crate::core::{GameState, PlayerId};

/// Field filter applied by `first_field_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFilter {
    /// Any card.
    Any,
    /// Cards costing strictly less than this.
    CheaperThan(u32),
    /// Cards that can still rotate, excluding one slot.
    RotatableExcept(usize),
}

impl FieldFilter {
    /// Check a card in `slot` against the filter.
    #[must_use]
    pub fn matches(&self, slot: usize, card: &Knowledge) -> bool {
        match *self {
            FieldFilter::Any => true,
            FieldFilter::CheaperThan(cost) => card.cost() < cost,
            FieldFilter::RotatableExcept(skip) => slot != skip && !card.is_spent(),
        }
    }
}

/// First card in a player's hand.
#[must_use]
pub fn first_hand_card(state: &GameState, player: PlayerId) -> Option<usize> {
    (!state.player(player).hand.is_empty()).then_some(0)
}

/// Slot of the first field card matching `filter`.
#[must_use]
pub fn first_field_card(state: &GameState, player: PlayerId, filter: FieldFilter) -> Option<usize> {
    state
        .player(player)
        .field_cards()
        .find(|(slot, card)| filter.matches(*slot, card))
        .map(|(slot, _)| slot)
}
