//! Turn Controller and Win Condition Checker.
//!
//! `play_action` is the full pipeline for one validated player action:
//! execute, count it against the budget, fire passives, check for a winner,
//! and end the turn automatically once the budget is spent.
//!
//! `end_turn` switches players and runs the start of the next turn: carried
//! over actions, `TURN_START` passives, then the knowledge phase. A winner is
//! checked between every step so the game stops at the earliest point.

use crate::core::{Action, GameState, Phase, PlayerId};
use crate::triggers::{resolve_passives, PassiveEvent, PassiveTrigger};

use super::executor::{execute, fire_outcome_passives};
use super::knowledge_phase::run_knowledge_phase;

/// End the game if either player has run out of power.
///
/// Both at zero is a draw. A finished game is never changed again.
pub fn check_win_conditions(state: &mut GameState) {
    if state.is_over() {
        return;
    }

    let first_out = state.players[PlayerId::FIRST].power <= 0;
    let second_out = state.players[PlayerId::SECOND].power <= 0;

    let winner = match (first_out, second_out) {
        (false, false) => return,
        (true, true) => None,
        (true, false) => Some(PlayerId::SECOND),
        (false, true) => Some(PlayerId::FIRST),
    };

    state.phase = Phase::GameOver;
    state.winner = winner;
    let message = match winner {
        Some(p) => format!("Game over: {} wins", state.players[p].id),
        None => "Game over: draw".to_string(),
    };
    tracing::info!(game = %state.game_id, turn = state.turn, ?winner, "game over");
    state.log(message);
}

/// Apply a validated player action and everything that follows from it.
pub fn play_action(state: &mut GameState, actor: PlayerId, action: &Action) {
    if let Action::EndTurn(_) = action {
        end_turn(state);
        return;
    }

    let outcome = execute(state, actor, action);
    if !outcome.free {
        state.actions_taken += 1;
    }

    fire_outcome_passives(state, &outcome);
    check_win_conditions(state);

    if !state.is_over() && state.actions_taken >= state.actions_per_turn {
        state.log(format!("{} has no actions left", state.players[actor].id));
        end_turn(state);
    }
}

/// End the current turn and run the start of the next one.
pub fn end_turn(state: &mut GameState) {
    check_win_conditions(state);
    if state.is_over() {
        return;
    }

    let next = state.current_player.opponent();
    state.current_player = next;
    if next == PlayerId::FIRST {
        state.turn += 1;
    }

    let bonus = std::mem::take(&mut state.extra_actions_next_turn[next]);
    state.actions_per_turn = state.config.actions_per_turn + bonus;
    state.actions_taken = 0;

    tracing::info!(game = %state.game_id, turn = state.turn, player = %next, "turn starts");
    state.log(format!("Turn {}: {} to play", state.turn, state.players[next].id));
    if bonus > 0 {
        state.log(format!("{} has {} bonus action(s)", state.players[next].id, bonus));
    }

    resolve_passives(state, PassiveTrigger::TurnStart, &PassiveEvent::new(next));
    check_win_conditions(state);
    if state.is_over() {
        return;
    }

    run_knowledge_phase(state);
    check_win_conditions(state);
}
