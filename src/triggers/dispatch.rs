//! Passive dispatch.
//!
//! `resolve_passives` walks every creature in a fixed order (seat 0 then
//! seat 1, each in roster order) and lets its passive react to the trigger.
//! Each reaction sees the state left by the ones before it; a creature whose
//! condition fails never stops the walk.
//!
//! Passives that discard a field card re-enter through `knowledge_left`,
//! which fires `KNOWLEDGE_LEAVE` as a nested walk. Each nested walk removes
//! a card from play, so the depth is bounded by the number of cards in play.

use crate::cards::{Creature, Knowledge};
use crate::core::{GameState, PlayerId};

use super::condition::PassiveHolder;
use super::event::{PassiveEvent, PassiveTrigger};
use super::passive::OnTrigger;

/// Let every creature react to a trigger.
///
/// `trigger` is named from the current player's point of view. Returns the
/// number of passives that fired.
pub fn resolve_passives(state: &mut GameState, trigger: PassiveTrigger, event: &PassiveEvent) -> usize {
    tracing::trace!(%trigger, actor = %event.actor, "resolving passives");
    let current = state.current_player;
    let mut fired = 0;

    for owner in PlayerId::both() {
        let seen = trigger.as_seen_by(owner, current);
        let roster: Vec<_> = state.players[owner].creatures.iter().map(|c: &Creature| c.id).collect();

        for (index, creature) in roster.into_iter().enumerate() {
            let holder = PassiveHolder {
                owner,
                index,
                creature,
            };
            if creature.definition().passive.on_trigger(seen, &holder, event, state) {
                fired += 1;
            }
        }
    }

    fired
}

/// Fire `KNOWLEDGE_LEAVE` for a card that `owner` just lost from the field.
///
/// The card must already be out of play.
pub fn knowledge_left(state: &mut GameState, owner: PlayerId, card: Knowledge) {
    let event = PassiveEvent::new(owner).with_knowledge(card);
    resolve_passives(state, PassiveTrigger::KnowledgeLeave, &event);
}

/// Cost of `card` for `player` after cost-reduction passives, never below 1.
#[must_use]
pub fn effective_cost(state: &GameState, player: PlayerId, card: &Knowledge) -> u32 {
    let element = card.element();
    let reduction: u32 = state
        .player(player)
        .creatures
        .iter()
        .map(|c| c.definition().passive.cost_reduction(element))
        .sum();
    card.cost().saturating_sub(reduction).max(1)
}

/// Whether summoning `card` onto roster creature `index` costs no action.
#[must_use]
pub fn is_free_summon(state: &GameState, player: PlayerId, index: usize, card: &Knowledge) -> bool {
    state
        .player(player)
        .creatures
        .get(index)
        .is_some_and(|c| c.definition().passive.waives_action(card.element()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CreatureId, KnowledgeId};
    use crate::core::{InstanceId, PlayerPair, PlayerState, RulesConfig};

    fn state(first: &[CreatureId], second: &[CreatureId]) -> GameState {
        let players = PlayerPair::new(
            PlayerState::new("a", first, 20),
            PlayerState::new("b", second, 20),
        );
        GameState::new("g", players, RulesConfig::default())
    }

    fn card(id: KnowledgeId, n: u32) -> Knowledge {
        Knowledge::new(id, InstanceId(n))
    }

    #[test]
    fn test_effective_cost_floors_at_one() {
        let state = state(&[CreatureId::Dudugera, CreatureId::Kappa], &[CreatureId::Pele, CreatureId::Adaro]);

        assert_eq!(effective_cost(&state, PlayerId::FIRST, &card(KnowledgeId::BindingRoots, 1)), 2);
        assert_eq!(effective_cost(&state, PlayerId::FIRST, &card(KnowledgeId::TerrestrialTremor, 2)), 1);
        assert_eq!(effective_cost(&state, PlayerId::FIRST, &card(KnowledgeId::TidalSurge, 3)), 2);
        // Reduction belongs to its owner only
        assert_eq!(effective_cost(&state, PlayerId::SECOND, &card(KnowledgeId::BindingRoots, 4)), 3);
    }

    #[test]
    fn test_free_summon_only_onto_kappa() {
        let state = state(&[CreatureId::Dudugera, CreatureId::Kappa], &[CreatureId::Pele, CreatureId::Adaro]);
        let surge = card(KnowledgeId::TidalSurge, 1);

        assert!(is_free_summon(&state, PlayerId::FIRST, 1, &surge));
        assert!(!is_free_summon(&state, PlayerId::FIRST, 0, &surge));
        assert!(!is_free_summon(&state, PlayerId::FIRST, 1, &card(KnowledgeId::Emberfall, 2)));
    }

    #[test]
    fn test_leave_trigger_fires_for_owner_only() {
        let mut state = state(&[CreatureId::Lisovik, CreatureId::Kappa], &[CreatureId::Lisovik, CreatureId::Adaro]);

        knowledge_left(&mut state, PlayerId::FIRST, card(KnowledgeId::StoneWard, 1));

        assert_eq!(state.players[PlayerId::SECOND].power, 19);
        assert_eq!(state.players[PlayerId::FIRST].power, 20);
    }

    #[test]
    fn test_turn_start_fires_for_owner() {
        let mut state = state(&[CreatureId::Inkanyamba, CreatureId::Kappa], &[CreatureId::Pele, CreatureId::Adaro]);
        state.players[PlayerId::FIRST].power = 19;

        let fired = resolve_passives(&mut state, PassiveTrigger::TurnStart, &PassiveEvent::new(PlayerId::FIRST));

        assert_eq!(fired, 1);
        assert_eq!(state.players[PlayerId::FIRST].power, 20);
    }

    #[test]
    fn test_opponent_summon_seen_by_other_side() {
        let mut state = state(&[CreatureId::Pele, CreatureId::Kappa], &[CreatureId::Adaro, CreatureId::Tulpar]);
        let event = PassiveEvent::new(PlayerId::FIRST)
            .with_knowledge(card(KnowledgeId::Emberfall, 1))
            .with_creature(CreatureId::Pele);

        resolve_passives(&mut state, PassiveTrigger::AfterPlayerSummon, &event);

        // Adaro punishes the Fire summoner
        assert_eq!(state.players[PlayerId::FIRST].power, 19);
    }
}
