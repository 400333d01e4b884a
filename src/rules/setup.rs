//! Game initialization.
//!
//! Builds the opening state from an `InitializeGame` payload: checks both
//! rosters, mints one instance per physical card, shuffles the shared deck,
//! deals the market, and runs the opening knowledge phase for seat 0.
//!
//! The shuffle is the only randomness in a game. Everything after this is
//! deterministic.

use rustc_hash::FxHashSet;

use crate::cards::{Catalog, CreatureId, Knowledge};
use crate::core::{
    EngineError, GameRng, GameState, InitializeGame, InstanceAllocator, PlayerPair, PlayerState,
    RulesConfig,
};

use super::knowledge_phase::run_knowledge_phase;

/// Create a new game.
pub fn initialize(
    payload: &InitializeGame,
    config: &RulesConfig,
    catalog: &Catalog,
    rng: &mut GameRng,
) -> Result<GameState, EngineError> {
    config.validate()?;

    if payload.player1_id == payload.player2_id {
        return Err(EngineError::DuplicatePlayer(payload.player1_id.clone()));
    }

    let first = parse_roster(&payload.player1_id, &payload.player1_selected_creature_ids, config, catalog)?;
    let second = parse_roster(&payload.player2_id, &payload.player2_selected_creature_ids, config, catalog)?;

    let players = PlayerPair::new(
        PlayerState::new(payload.player1_id.as_str(), &first, config.starting_power),
        PlayerState::new(payload.player2_id.as_str(), &second, config.starting_power),
    );

    let mut ids = InstanceAllocator::default();
    let mut deck: Vec<Knowledge> = catalog
        .deck_list(config.copies_per_knowledge)
        .into_iter()
        .map(|id| Knowledge::new(id, ids.mint()))
        .collect();
    rng.shuffle(&mut deck);

    let market_len = config.market_size.min(deck.len());
    let rest = deck.split_off(market_len);

    let mut state = GameState::new(payload.game_id.as_str(), players, config.clone())
        .with_market(deck)
        .with_deck(rest);

    tracing::info!(
        game = %state.game_id,
        seed = rng.seed(),
        deck = state.deck.len(),
        "game initialized"
    );
    state.log(format!(
        "Game {} begins: {} vs {}",
        state.game_id, payload.player1_id, payload.player2_id
    ));

    run_knowledge_phase(&mut state);
    Ok(state)
}

/// Resolve and check one player's creature selection.
fn parse_roster(
    player: &str,
    keys: &[String],
    config: &RulesConfig,
    catalog: &Catalog,
) -> Result<Vec<CreatureId>, EngineError> {
    if keys.len() < config.min_roster || keys.len() > config.max_roster {
        return Err(EngineError::InvalidRosterSize {
            player: player.to_string(),
            count: keys.len(),
            min: config.min_roster,
            max: config.max_roster,
        });
    }

    let mut seen = FxHashSet::default();
    let mut roster = Vec::with_capacity(keys.len());
    for key in keys {
        let creature = catalog.creature(key)?.id;
        if !seen.insert(creature) {
            return Err(EngineError::DuplicateCreature {
                player: player.to_string(),
                creature,
            });
        }
        roster.push(creature);
    }
    Ok(roster)
}
