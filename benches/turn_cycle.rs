//! Benchmarks for full turn cycles.
//!
//! Run with: cargo bench --bench turn_cycle
//!
//! This will generate HTML reports in target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knowledge_duel::cards::{CreatureId, Knowledge, KnowledgeId};
use knowledge_duel::core::{Action, GameState, InitializeGame, InstanceId, PlayerId};
use knowledge_duel::rules::{Engine, RulesEngine};

fn opening() -> GameState {
    let init = InitializeGame::new(
        "bench",
        ("alice", &[CreatureId::Pele, CreatureId::Kappa, CreatureId::Tulpar]),
        ("bob", &[CreatureId::Lisovik, CreatureId::Adaro, CreatureId::Tsenehale]),
    )
    .with_seed(1);
    Engine::new().initialize(&init).unwrap_or_else(|e| panic!("bench setup failed: {}", e))
}

/// A state with every field slot filled, so the knowledge phase has work.
fn crowded() -> GameState {
    let mut state = opening();
    let cards = [
        KnowledgeId::TidalSurge,
        KnowledgeId::WhisperingGale,
        KnowledgeId::StoneWard,
        KnowledgeId::Wildfire,
        KnowledgeId::PhoenixAsh,
        KnowledgeId::SkyLance,
    ];
    let mut next = 1000;
    for player in PlayerId::both() {
        for slot in 0..3 {
            let id = cards[player.index() * 3 + slot];
            state.players[player].field[slot].knowledge = Some(Knowledge::new(id, InstanceId(next)));
            next += 1;
        }
    }
    state
}

fn bench_end_turn(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("end_turn");

    for (name, state) in [("empty_field", opening()), ("full_field", crowded())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| {
                let id = state.current().id.clone();
                let next = engine.apply(state.clone(), &Action::end_turn(id));
                black_box(next)
            });
        });
    }

    group.finish();
}

fn bench_random_round(c: &mut Criterion) {
    let engine = Engine::new();
    let state = opening();

    c.bench_function("legal_round", |b| {
        b.iter(|| {
            let mut state = state.clone();
            // Two full turns of first-legal choices
            for _ in 0..6 {
                if engine.is_terminal(&state).is_some() {
                    break;
                }
                let legal = engine.legal_actions(&state, state.current_player);
                let Some(action) = legal.first() else {
                    break;
                };
                state = engine.apply(state, action);
            }
            black_box(state)
        });
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = crowded();
    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(benches, bench_end_turn, bench_random_round, bench_state_clone);
criterion_main!(benches);
