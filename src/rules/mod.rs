//! Game rules: validation, execution, the knowledge phase and turn flow.
//!
//! The host drives a game through `RulesEngine`:
//! - `validate` checks an action without touching the state
//! - `apply` runs a validated action and everything it sets off
//! - `initialize` builds the opening state from a seeded payload
//!
//! The free functions below are the pieces `Engine` is built from. They
//! mutate a `&mut GameState` in place; the trait methods take and return
//! states by value.

mod validator;
mod executor;
mod knowledge_phase;
mod turn;
mod setup;
pub mod engine;

pub use engine::{Engine, GameResult, RulesEngine};
pub use executor::{execute, fire_outcome_passives, ActionOutcome};
pub use knowledge_phase::run_knowledge_phase;
pub use setup::initialize;
pub use turn::{check_win_conditions, end_turn, play_action};
pub use validator::{check, validate};
