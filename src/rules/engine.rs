//! Rules engine trait and the standard engine.
//!
//! `RulesEngine` is the surface a host calls:
//! - `validate`: may this action be applied?
//! - `apply`: apply an action assumed valid
//! - `initialize`: build a new game
//! - `check_win_conditions`: settle a finished game
//!
//! plus checked and enumerating helpers with default implementations.
//! `Engine` implements it over a `RulesConfig` and the card `Catalog`.

use serde::{Deserialize, Serialize};

use crate::cards::Catalog;
use crate::core::{
    Action, EngineError, GameRng, GameState, InitializeGame, Phase, PlayerId, RulesConfig,
    ValidationResult,
};

use super::setup;
use super::turn;
use super::validator;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players ran out of power together.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` never mutates and never fails: a rejection is a reason
/// - `apply` assumes the action passed `validate`
/// - every method is deterministic given its inputs; randomness enters
///   only through the seed in the init payload
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Check an action against the state.
    fn validate(&self, state: &GameState, action: &Action) -> ValidationResult;

    /// Apply an action assumed valid and return the next state.
    fn apply(&self, state: GameState, action: &Action) -> GameState;

    /// Build a new game from an init payload.
    fn initialize(&self, payload: &InitializeGame) -> Result<GameState, EngineError>;

    /// End the game if a player is out of power.
    fn check_win_conditions(&self, state: GameState) -> GameState;

    /// Action shapes worth validating for a player. Empty off-turn.
    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.phase != Phase::GameOver {
            return None;
        }
        Some(match state.winner {
            Some(p) => GameResult::Winner(p),
            None => GameResult::Draw,
        })
    }

    /// Enumerate all legal actions for a player.
    ///
    /// Default implementation filters `candidate_actions` through `validate`.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.candidate_actions(state, player)
            .into_iter()
            .filter(|action| self.validate(state, action).valid)
            .collect()
    }

    /// Validate, then apply.
    fn submit(&self, state: GameState, action: &Action) -> Result<GameState, EngineError> {
        validator::check(&state, action).map_err(EngineError::Rejected)?;
        Ok(self.apply(state, action))
    }
}

/// The standard rules engine.
///
/// ## Usage
///
/// ```
/// use knowledge_duel::cards::CreatureId;
/// use knowledge_duel::core::{Action, InitializeGame};
/// use knowledge_duel::rules::{Engine, RulesEngine};
///
/// let engine = Engine::new();
/// let init = InitializeGame::new(
///     "demo",
///     ("alice", &[CreatureId::Pele, CreatureId::Kappa]),
///     ("bob", &[CreatureId::Adaro, CreatureId::Tulpar]),
/// )
/// .with_seed(42);
///
/// let state = engine.initialize(&init).unwrap();
/// let state = engine.submit(state, &Action::rotate("alice", CreatureId::Pele)).unwrap();
///
/// assert_eq!(state.actions_taken, 1);
/// assert!(engine.submit(state, &Action::rotate("bob", CreatureId::Adaro)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: RulesConfig,
    catalog: Catalog,
}

impl Engine {
    /// Create an engine with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom rules.
    pub fn with_config(config: RulesConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: Catalog::standard(),
        })
    }

    /// The card catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build a new game with an explicit shuffle source.
    pub fn initialize_with(
        &self,
        payload: &InitializeGame,
        rng: &mut GameRng,
    ) -> Result<GameState, EngineError> {
        setup::initialize(payload, &self.config, &self.catalog, rng)
    }

    /// Hosted-state reducer.
    ///
    /// System actions manage the hosted state: `InitializeGame` creates it,
    /// `SetState` replaces or clears it. Player actions need a state and go
    /// through `submit`.
    pub fn reduce(
        &self,
        state: Option<&GameState>,
        action: &Action,
    ) -> Result<Option<GameState>, EngineError> {
        match action {
            Action::InitializeGame(payload) => self.initialize(payload).map(Some),
            Action::SetState(set) => Ok(set.state.as_deref().cloned()),
            _ => {
                let state = state.ok_or(EngineError::MissingState)?;
                self.submit(state.clone(), action).map(Some)
            }
        }
    }
}

impl RulesEngine for Engine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, action: &Action) -> ValidationResult {
        validator::validate(state, action)
    }

    fn apply(&self, mut state: GameState, action: &Action) -> GameState {
        match action {
            Action::SetState(set) => match set.state.as_deref() {
                Some(replacement) => replacement.clone(),
                None => {
                    tracing::warn!("cannot clear state through apply; use reduce");
                    state
                }
            },
            Action::InitializeGame(_) => {
                tracing::warn!("cannot initialize through apply; use reduce or initialize");
                state
            }
            // Phase-checked only: ends whichever turn is running.
            Action::EndTurn(_) => {
                turn::end_turn(&mut state);
                state
            }
            _ => {
                let Some(actor) = action.player_id().and_then(|id| state.seat_of(id)) else {
                    return state;
                };
                turn::play_action(&mut state, actor, action);
                state
            }
        }
    }

    fn initialize(&self, payload: &InitializeGame) -> Result<GameState, EngineError> {
        let mut rng = match payload.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.initialize_with(payload, &mut rng)
    }

    fn check_win_conditions(&self, mut state: GameState) -> GameState {
        turn::check_win_conditions(&mut state);
        state
    }

    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if player != state.current_player || state.is_over() {
            return Vec::new();
        }

        let ps = state.player(player);
        let id = ps.id.as_str();
        let mut actions = Vec::new();

        for creature in &ps.creatures {
            actions.push(Action::rotate(id, creature.id));
        }
        for card in &state.market {
            actions.push(Action::draw(id, card.id, card.instance_id));
        }
        for card in &ps.hand {
            for creature in &ps.creatures {
                actions.push(Action::summon(id, card.id, card.instance_id, creature.id));
            }
        }
        actions.push(Action::end_turn(id));

        actions
    }
}
