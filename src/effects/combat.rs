//! Damage and defense.
//!
//! Most damage is queued into the defender's `CombatTally` during the
//! knowledge phase and settled once at the end of it:
//! `net = max(0, damage - defense)`. Immediate damage skips the tally.
//!
//! Power never drops below zero from a single subtraction; zero is already
//! the losing value.

use serde::{Deserialize, Serialize};

use crate::cards::Knowledge;
use crate::core::{GameState, PlayerId};

/// Pending incoming damage and qualified defense for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatTally {
    pub damage: u32,
    pub defense: u32,
}

impl CombatTally {
    /// Damage that gets through.
    #[must_use]
    pub fn net(&self) -> u32 {
        self.damage.saturating_sub(self.defense)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.damage == 0 && self.defense == 0
    }
}

/// Reduce a player's power, flooring at zero.
pub fn lose_power(state: &mut GameState, player: PlayerId, amount: u32) {
    let ps = &mut state.players[player];
    let amount = i32::try_from(amount).unwrap_or(i32::MAX);
    ps.power = ps.power.saturating_sub(amount).max(0);
}

/// Increase a player's power.
pub fn gain_power(state: &mut GameState, player: PlayerId, amount: u32) {
    let ps = &mut state.players[player];
    let amount = i32::try_from(amount).unwrap_or(i32::MAX);
    ps.power = ps.power.saturating_add(amount);
}

/// Queue damage against `target` for the resolution step.
pub fn queue_damage(state: &mut GameState, target: PlayerId, amount: u32) {
    state.pending_combat[target].damage += amount;
}

/// Whether a defending card's value counts.
///
/// Defense qualifies when the opposing slot (same index, other player) is
/// empty or holds a card that does not cost more than the defender.
#[must_use]
pub fn defense_qualifies(state: &GameState, owner: PlayerId, slot: usize, card: &Knowledge) -> bool {
    let opponent = state.player(owner.opponent());
    match opponent.field.get(slot).and_then(|s| s.knowledge.as_ref()) {
        None => true,
        Some(opposing) => opposing.cost() <= card.cost(),
    }
}

/// Queue defense for `owner` if the card's position qualifies.
///
/// Returns whether the defense was counted.
pub fn queue_defense(
    state: &mut GameState,
    owner: PlayerId,
    slot: usize,
    card: &Knowledge,
    amount: u32,
) -> bool {
    if !defense_qualifies(state, owner, slot, card) {
        state.log(format!("{}'s defense is outmatched by the opposing card", card));
        return false;
    }
    state.pending_combat[owner].defense += amount;
    true
}

/// Settle both tallies and clear them.
pub fn resolve_combat(state: &mut GameState) {
    for player in PlayerId::both() {
        let tally = std::mem::take(&mut state.pending_combat[player]);
        if tally.is_empty() {
            continue;
        }

        let net = tally.net();
        lose_power(state, player, net);
        let message = format!(
            "{} takes {} damage ({} dealt, {} blocked), power now {}",
            state.players[player].id,
            net,
            tally.damage,
            tally.damage.min(tally.defense),
            state.players[player].power
        );
        state.log(message);
    }
}
