//! Action Executor.
//!
//! Applies an already validated player action to the state and reports what
//! changed. The report drives the follow-up passives and tells the turn
//! controller whether the action used up budget.

use crate::cards::{CreatureId, Knowledge};
use crate::core::{Action, DrawKnowledge, GameState, PlayerId, RotateCreature, SummonKnowledge};
use crate::effects::{invoke_card, EffectSource};
use crate::triggers::{self, effective_cost, is_free_summon, PassiveEvent, PassiveTrigger};
use crate::zones::{self, Location};

/// What an executed action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub actor: PlayerId,
    /// The knowledge card that moved, as it is now.
    pub moved: Option<Knowledge>,
    pub from: Option<Location>,
    pub to: Option<Location>,
    /// The creature targeted (rotated or summoned onto).
    pub creature: Option<CreatureId>,
    /// The action does not count against the turn budget.
    pub free: bool,
}

impl ActionOutcome {
    fn new(actor: PlayerId) -> Self {
        Self {
            actor,
            moved: None,
            from: None,
            to: None,
            creature: None,
            free: false,
        }
    }

    /// The passive trigger this outcome fires, if any.
    #[must_use]
    pub fn trigger(&self, current: PlayerId) -> Option<PassiveTrigger> {
        match (self.from, self.to) {
            (Some(Location::Market { .. }), Some(Location::Hand { .. })) => {
                Some(PassiveTrigger::draw_by(self.actor, current))
            }
            (Some(Location::Hand { .. }), Some(Location::Field { .. })) => {
                Some(PassiveTrigger::summon_by(self.actor, current))
            }
            _ => None,
        }
    }

    /// The passive event describing this outcome.
    #[must_use]
    pub fn event(&self) -> PassiveEvent {
        PassiveEvent {
            actor: self.actor,
            knowledge: self.moved.clone(),
            creature: self.creature,
        }
    }
}

/// Apply a validated player action.
///
/// `EndTurn` and system actions are not handled here and yield an empty
/// outcome.
pub fn execute(state: &mut GameState, actor: PlayerId, action: &Action) -> ActionOutcome {
    match action {
        Action::RotateCreature(rotate) => execute_rotate(state, actor, rotate),
        Action::DrawKnowledge(draw) => execute_draw(state, actor, draw),
        Action::SummonKnowledge(summon) => execute_summon(state, actor, summon),
        Action::EndTurn(_) | Action::InitializeGame(_) | Action::SetState(_) => {
            ActionOutcome::new(actor)
        }
    }
}

/// Fire the passives an outcome calls for.
pub fn fire_outcome_passives(state: &mut GameState, outcome: &ActionOutcome) {
    if let Some(trigger) = outcome.trigger(state.current_player) {
        triggers::resolve_passives(state, trigger, &outcome.event());
    }
}

fn execute_rotate(state: &mut GameState, actor: PlayerId, rotate: &RotateCreature) -> ActionOutcome {
    let mut outcome = ActionOutcome::new(actor);
    outcome.creature = Some(rotate.creature_id);

    let player_name = state.players[actor].id.clone();
    let Some(creature) = state.players[actor].creature_mut(rotate.creature_id) else {
        return outcome;
    };

    let message = if creature.rotate() {
        format!(
            "{} rotates {} to {}° ({} wisdom)",
            player_name,
            creature.definition().name,
            creature.rotation,
            creature.current_wisdom
        )
    } else {
        format!("{} tries to rotate {}, but it is fully turned", player_name, creature.definition().name)
    };
    state.log(message);
    outcome
}

fn execute_draw(state: &mut GameState, actor: PlayerId, draw: &DrawKnowledge) -> ActionOutcome {
    let mut outcome = ActionOutcome::new(actor);
    let Some(index) = state.market.iter().position(|k| k.instance_id == draw.instance_id) else {
        return outcome;
    };

    if let Some(card) = zones::draw_from_market(state, actor, draw.instance_id) {
        state.log(format!("{} draws {}", state.players[actor].id, card));
        outcome.from = Some(Location::Market { index });
        outcome.to = Some(Location::Hand {
            player: actor,
            index: state.players[actor].hand.len() - 1,
        });
        outcome.moved = Some(card);
    }
    outcome
}

fn execute_summon(state: &mut GameState, actor: PlayerId, summon: &SummonKnowledge) -> ActionOutcome {
    let mut outcome = ActionOutcome::new(actor);
    outcome.creature = Some(summon.creature_id);

    let ps = &state.players[actor];
    let (Some(hand_index), Some(slot)) = (
        ps.hand_position(summon.instance_id),
        ps.creature_index(summon.creature_id),
    ) else {
        return outcome;
    };

    let mut card = state.players[actor].hand.remove(hand_index);
    card.rotation = 0;
    let cost = effective_cost(state, actor, &card);
    let free = is_free_summon(state, actor, slot, &card);

    let ps = &mut state.players[actor];
    ps.field[slot].knowledge = Some(card.clone());
    ps.creatures[slot].spend(cost);
    let message = format!(
        "{} summons {} onto {} for {} wisdom{}",
        ps.id,
        card,
        ps.creatures[slot].definition().name,
        cost,
        if free { " (free action)" } else { "" }
    );
    state.log(message);

    invoke_card(state, &EffectSource::new(actor, slot, card.clone(), false));

    outcome.from = Some(Location::Hand {
        player: actor,
        index: hand_index,
    });
    outcome.to = Some(Location::Field { player: actor, slot });
    outcome.moved = Some(card);
    outcome.free = free;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::KnowledgeId;
    use crate::core::{InstanceId, Phase, PlayerPair, PlayerState, RulesConfig};

    fn state() -> GameState {
        let mut players = PlayerPair::new(
            PlayerState::new("alice", &[CreatureId::Pele, CreatureId::Kappa], 20),
            PlayerState::new("bob", &[CreatureId::Adaro, CreatureId::Tulpar], 20),
        );
        players[PlayerId::FIRST].hand.push_back(Knowledge::new(KnowledgeId::TidalSurge, InstanceId(10)));
        players[PlayerId::FIRST].creatures[1].current_wisdom = 2;

        GameState::new("g", players, RulesConfig::default())
            .with_market(vec![
                Knowledge::new(KnowledgeId::SkyLance, InstanceId(1)),
                Knowledge::new(KnowledgeId::Emberfall, InstanceId(2)),
            ])
            .with_deck(vec![Knowledge::new(KnowledgeId::StoneWard, InstanceId(3))])
            .with_phase(Phase::Action)
    }

    #[test]
    fn test_rotate_creature() {
        let mut state = state();
        let outcome = execute(&mut state, PlayerId::FIRST, &Action::rotate("alice", CreatureId::Pele));

        let pele = state.players[PlayerId::FIRST].creature(CreatureId::Pele).unwrap();
        assert_eq!(pele.rotation, 90);
        assert_eq!(pele.current_wisdom, 2);
        assert_eq!(outcome.trigger(PlayerId::FIRST), None);
    }

    #[test]
    fn test_draw_reports_move() {
        let mut state = state();
        let outcome = execute(
            &mut state,
            PlayerId::FIRST,
            &Action::draw("alice", KnowledgeId::Emberfall, InstanceId(2)),
        );

        assert_eq!(outcome.from, Some(Location::Market { index: 1 }));
        assert_eq!(outcome.to, Some(Location::Hand { player: PlayerId::FIRST, index: 1 }));
        assert_eq!(outcome.trigger(PlayerId::FIRST), Some(PassiveTrigger::AfterPlayerDraw));
        assert_eq!(state.market[1].instance_id, InstanceId(3));
        assert!(state.deck.is_empty());
    }

    #[test]
    fn test_free_summon_onto_kappa() {
        let mut state = state();
        let outcome = execute(
            &mut state,
            PlayerId::FIRST,
            &Action::summon("alice", KnowledgeId::TidalSurge, InstanceId(10), CreatureId::Kappa),
        );

        assert!(outcome.free);
        assert_eq!(outcome.trigger(PlayerId::FIRST), Some(PassiveTrigger::AfterPlayerSummon));
        let alice = &state.players[PlayerId::FIRST];
        assert_eq!(alice.creatures[1].current_wisdom, 0);
        assert_eq!(alice.field[1].knowledge.as_ref().map(|k| k.rotation), Some(0));
        assert!(alice.hand.is_empty());
    }
}
