//! Property tests over random legal play.
//!
//! Each case initializes a seeded game and plays a random sequence of legal
//! actions, checking the state invariants after every step.

use proptest::prelude::*;

use knowledge_duel::cards::{CreatureId, KnowledgeId, MAX_CREATURE_ROTATION};
use knowledge_duel::core::{Action, GameState, InitializeGame, PlayerId, Phase};
use knowledge_duel::rules::{Engine, RulesEngine};
use knowledge_duel::triggers::effective_cost;
use knowledge_duel::zones;

const DECK_SIZE: usize = KnowledgeId::ALL.len() * 2;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn roster(picks: &[usize]) -> Vec<CreatureId> {
    let mut roster = Vec::new();
    for &pick in picks {
        let id = CreatureId::ALL[pick % CreatureId::ALL.len()];
        if !roster.contains(&id) {
            roster.push(id);
        }
    }
    // Top up to the minimum with the first unused creatures
    for id in CreatureId::ALL {
        if roster.len() >= 2 {
            break;
        }
        if !roster.contains(&id) {
            roster.push(id);
        }
    }
    roster
}

fn opening(seed: u64, first: &[CreatureId], second: &[CreatureId]) -> GameState {
    let init = InitializeGame::new("prop", ("alice", first), ("bob", second)).with_seed(seed);
    Engine::new().initialize(&init).unwrap()
}

fn check_invariants(state: &GameState) {
    let report = zones::audit(state);
    assert!(report.is_consistent(), "duplicate instances: {:?}", report.duplicates);
    assert_eq!(report.total, DECK_SIZE);

    assert!(state.market.len() <= state.config.market_size);

    for (_, player) in state.players.iter() {
        assert!(player.hand.len() <= state.config.max_hand_size);
        for creature in &player.creatures {
            assert!(creature.rotation <= MAX_CREATURE_ROTATION);
            assert_eq!(creature.rotation % 90, 0);
        }
        for (_, card) in player.field_cards() {
            assert!(card.rotation <= card.max_rotation());
        }
    }

    if state.phase == Phase::Action {
        assert!(state.actions_taken < state.actions_per_turn);
    }
}

/// Play up to `choices.len()` random legal actions and return every state.
fn play(engine: &Engine, mut state: GameState, choices: &[usize]) -> Vec<GameState> {
    let mut history = vec![state.clone()];
    for &choice in choices {
        if engine.is_terminal(&state).is_some() {
            break;
        }
        let legal = engine.legal_actions(&state, state.current_player);
        assert!(!legal.is_empty(), "no legal action in an open game");

        let action = &legal[choice % legal.len()];
        state = engine.submit(state, action).unwrap();
        history.push(state.clone());
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test the state invariants hold along any legal play sequence.
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        first in prop::collection::vec(0usize..12, 2..=3),
        second in prop::collection::vec(0usize..12, 2..=3),
        choices in prop::collection::vec(any::<usize>(), 0..120),
    ) {
        init_tracing();
        let engine = Engine::new();
        let state = opening(seed, &roster(&first), &roster(&second));

        for state in play(&engine, state, &choices) {
            check_invariants(&state);
        }
    }

    /// Test summons spend exactly the effective cost while the turn goes on.
    #[test]
    fn prop_summon_spends_effective_cost(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let engine = Engine::new();
        let mut state = opening(
            seed,
            &[CreatureId::Dudugera, CreatureId::Kitsune, CreatureId::Kappa],
            &[CreatureId::Adaro, CreatureId::Lisovik, CreatureId::Pele],
        );

        for choice in choices {
            if engine.is_terminal(&state).is_some() {
                break;
            }
            let legal = engine.legal_actions(&state, state.current_player);
            let action = legal[choice % legal.len()].clone();
            let actor = state.current_player;

            let expected = match &action {
                Action::SummonKnowledge(summon) => {
                    let ps = state.player(actor);
                    let card = ps.hand.iter().find(|k| k.instance_id == summon.instance_id).unwrap();
                    let slot = ps.creature_index(summon.creature_id).unwrap();
                    let cost = effective_cost(&state, actor, card);
                    prop_assert!(cost >= 1);
                    Some((slot, ps.creatures[slot].current_wisdom - cost))
                }
                _ => None,
            };

            let turn = (state.turn, state.current_player);
            state = engine.submit(state, &action).unwrap();

            // A turn change runs a knowledge phase that may touch wisdom
            if let Some((slot, wisdom)) = expected {
                if (state.turn, state.current_player) == turn {
                    prop_assert_eq!(state.player(actor).creatures[slot].current_wisdom, wisdom);
                }
            }
        }
    }

    /// Test a finished game never changes its result.
    #[test]
    fn prop_game_over_is_final(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..400),
    ) {
        let engine = Engine::new();
        let state = opening(
            seed,
            &[CreatureId::Pele, CreatureId::Inkanyamba],
            &[CreatureId::Lisovik, CreatureId::Adaro, CreatureId::Tulpar],
        );
        let history = play(&engine, state, &choices);

        let mut finished: Option<(Option<PlayerId>, usize)> = None;
        for (step, state) in history.iter().enumerate() {
            match finished {
                Some((winner, _)) => prop_assert_eq!(state.winner, winner),
                None if state.is_over() => finished = Some((state.winner, step)),
                None => prop_assert_eq!(state.winner, None),
            }
        }

        if let Some(last) = history.last().filter(|s| s.is_over()) {
            let id = last.player(last.current_player).id.clone();
            let after = engine.apply(last.clone(), &Action::end_turn(id));
            prop_assert_eq!(after.winner, last.winner);
            prop_assert_eq!(after.phase, Phase::GameOver);
        }
    }

    /// Test play is a pure function of the seed and the choices.
    #[test]
    fn prop_replay_is_deterministic(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let engine = Engine::new();
        let rosters = (
            [CreatureId::Tsenehale, CreatureId::ZharPtitsa],
            [CreatureId::Caapora, CreatureId::Trempulcahue, CreatureId::Kitsune],
        );

        let a = play(&engine, opening(seed, &rosters.0, &rosters.1), &choices);
        let b = play(&engine, opening(seed, &rosters.0, &rosters.1), &choices);
        prop_assert_eq!(a.last(), b.last());
    }
}

/// Test a snapshot of a mid-game state decodes to the same state.
#[test]
fn test_snapshot_mid_game() {
    let engine = Engine::new();
    let state = opening(9, &[CreatureId::Pele, CreatureId::Kappa], &[CreatureId::Adaro, CreatureId::Tulpar]);
    let history = play(&engine, state, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    let state = history.last().unwrap();

    let bytes = state.to_snapshot().unwrap();
    assert_eq!(&GameState::from_snapshot(&bytes).unwrap(), state);
}
