//! Action Validator.
//!
//! A read-only check of one action against the current state. Checks run in
//! a fixed order and the first failure is reported:
//!
//! 1. System actions are always valid.
//! 2. `EndTurn` only needs the action phase.
//! 3. Player actions need a player id,
//! 4. that player must be the current player,
//! 5. the phase must be the action phase,
//! 6. and the turn budget must not be spent.
//!
//! Then the per-action rules (creature on field, card in market or hand,
//! hand limit, slot free and unblocked, enough wisdom).

use crate::cards::CreatureId;
use crate::core::{
    Action, DrawKnowledge, GameState, Phase, PlayerId, Rejection, RotateCreature, SummonKnowledge,
    ValidationResult,
};
use crate::triggers::effective_cost;
use crate::zones::{self, Location};

/// Validate an action, in the caller-facing shape.
#[must_use]
pub fn validate(state: &GameState, action: &Action) -> ValidationResult {
    let result = check(state, action);
    if let Err(rejection) = &result {
        tracing::debug!(action = action.kind(), %rejection, "action rejected");
    }
    result.into()
}

/// Validate an action, reporting the first broken rule.
pub fn check(state: &GameState, action: &Action) -> Result<(), Rejection> {
    if action.is_system() {
        return Ok(());
    }
    if let Action::EndTurn(_) = action {
        return if state.phase == Phase::Action {
            Ok(())
        } else {
            Err(Rejection::EndTurnOutsideActionPhase)
        };
    }

    let player = acting_player(state, action)?;

    match action {
        Action::RotateCreature(rotate) => check_rotate(state, player, rotate),
        Action::DrawKnowledge(draw) => check_draw(state, player, draw),
        Action::SummonKnowledge(summon) => check_summon(state, player, summon),
        Action::EndTurn(_) | Action::InitializeGame(_) | Action::SetState(_) => Ok(()),
    }
}

/// Rules 3-6: resolve the submitting seat and check it may act now.
fn acting_player(state: &GameState, action: &Action) -> Result<PlayerId, Rejection> {
    let player_id = action
        .player_id()
        .filter(|id| !id.is_empty())
        .ok_or(Rejection::MissingPlayerId)?;

    let player = state
        .seat_of(player_id)
        .ok_or_else(|| Rejection::UnknownPlayer(player_id.to_string()))?;

    if player != state.current_player {
        return Err(Rejection::NotYourTurn(player_id.to_string()));
    }

    match state.phase {
        Phase::Action => {}
        Phase::GameOver => return Err(Rejection::GameOver),
        Phase::Knowledge => return Err(Rejection::NotActionPhase),
    }

    if state.actions_remaining() == 0 {
        return Err(Rejection::NoActionsLeft);
    }

    Ok(player)
}

fn creature_slot(state: &GameState, player: PlayerId, creature: CreatureId) -> Result<usize, Rejection> {
    state
        .player(player)
        .creature_index(creature)
        .filter(|slot| *slot < state.player(player).field.len())
        .ok_or(Rejection::CreatureNotOnField(creature))
}

fn check_rotate(state: &GameState, player: PlayerId, rotate: &RotateCreature) -> Result<(), Rejection> {
    creature_slot(state, player, rotate.creature_id).map(|_| ())
}

fn check_draw(state: &GameState, player: PlayerId, draw: &DrawKnowledge) -> Result<(), Rejection> {
    if state.market.is_empty() {
        return Err(Rejection::MarketEmpty);
    }

    let card = match zones::locate(state, draw.instance_id) {
        Some(Location::Market { index }) => state.market.get(index),
        _ => None,
    }
    .ok_or(Rejection::NotInMarket(draw.instance_id))?;

    if card.id != draw.knowledge_id {
        return Err(Rejection::MarketCardMismatch {
            instance: draw.instance_id,
            claimed: draw.knowledge_id,
            actual: card.id,
        });
    }

    if state.player(player).hand_size() >= state.config.max_hand_size {
        return Err(Rejection::HandFull);
    }

    Ok(())
}

fn check_summon(state: &GameState, player: PlayerId, summon: &SummonKnowledge) -> Result<(), Rejection> {
    let ps = state.player(player);

    let card = match zones::locate(state, summon.instance_id) {
        Some(Location::Hand { player: holder, index }) if holder == player => ps.hand.get(index),
        _ => None,
    }
    .ok_or(Rejection::NotInHand(summon.instance_id))?;

    if card.id != summon.knowledge_id {
        return Err(Rejection::HandCardMismatch {
            instance: summon.instance_id,
            claimed: summon.knowledge_id,
            actual: card.id,
        });
    }

    let slot = creature_slot(state, player, summon.creature_id)?;
    if !ps.field[slot].is_empty() {
        return Err(Rejection::SlotOccupied(summon.creature_id));
    }

    if state.is_slot_blocked(player, slot) {
        return Err(Rejection::SlotBlocked(summon.creature_id));
    }

    let cost = effective_cost(state, player, card);
    let available = ps.creatures[slot].current_wisdom;
    if available < cost {
        return Err(Rejection::NotEnoughWisdom {
            creature: summon.creature_id,
            available,
            cost,
        });
    }

    Ok(())
}
