//! Knowledge Phase Engine.
//!
//! Runs once per turn for the player whose turn is starting (and once at
//! game start):
//!
//! 1. The current player's fully turned creatures start a new wisdom cycle.
//! 2. Rotate pass: every field card (seat 0 then seat 1, slot order)
//!    advances 90° and resolves its table entry against the live state.
//!    Cards reaching their limit, or already at it, are queued for discard,
//!    including cards a chain rotation finished after their own slot.
//! 3. Discard pass: queued cards still on the field go to the discard pile
//!    and fire `KNOWLEDGE_LEAVE`. Cards an earlier effect already removed
//!    are skipped.
//! 4. Queued damage and defense are settled.
//! 5. The action counter resets and the action phase begins.

use smallvec::SmallVec;

use crate::core::{GameState, InstanceId, Phase, PlayerId};
use crate::effects::{combat, invoke_card, EffectSource};
use crate::triggers;
use crate::zones;

/// A field card scheduled for the rotate pass or the discard pass.
type FieldRef = (PlayerId, usize, InstanceId);

/// Run the whole knowledge phase.
pub fn run_knowledge_phase(state: &mut GameState) {
    state.phase = Phase::Knowledge;
    let current = state.current_player;
    state.log(format!("Knowledge phase for {}", state.current().id));

    renew_creatures(state, current);
    let spent = rotate_pass(state);
    discard_pass(state, &spent);
    combat::resolve_combat(state);

    state.actions_taken = 0;
    state.phase = Phase::Action;
    state.log(format!(
        "Action phase: {} has {} action(s)",
        state.current().id, state.actions_remaining()
    ));
}

/// Reset the player's creatures that reached 270°.
fn renew_creatures(state: &mut GameState, player: PlayerId) {
    let mut renewed: SmallVec<[&'static str; 3]> = SmallVec::new();
    for creature in state.players[player].creatures.iter_mut() {
        if creature.is_fully_rotated() {
            creature.reset_cycle();
            renewed.push(creature.definition().name);
        }
    }
    for name in renewed {
        state.log(format!("{} begins a new cycle", name));
    }
}

/// Advance every field card once and resolve it. Returns the cards to discard.
fn rotate_pass(state: &mut GameState) -> Vec<FieldRef> {
    let order: Vec<FieldRef> = PlayerId::both()
        .flat_map(|p| {
            state.players[p]
                .field_cards()
                .map(move |(slot, card)| (p, slot, card.instance_id))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut spent = Vec::new();
    for (player, slot, instance) in order {
        let Some(card) = state.players[player].field[slot]
            .knowledge
            .as_mut()
            .filter(|k| k.instance_id == instance)
        else {
            tracing::trace!(%instance, "card left the field before its rotation");
            continue;
        };

        if card.is_spent() {
            // Pushed to its limit by an earlier chain effect
            spent.push((player, slot, instance));
            continue;
        }

        let is_final = card.advance();
        let rotated = card.clone();
        tracing::trace!(card = %rotated, rotation = rotated.rotation, is_final, "rotated");
        state.log(format!("{} rotates to {}°", rotated, rotated.rotation));

        invoke_card(state, &EffectSource::new(player, slot, rotated, is_final));
        if is_final {
            spent.push((player, slot, instance));
        }
    }

    // A chain rotation can finish a card whose own slot came earlier
    for player in PlayerId::both() {
        for (slot, card) in state.players[player].field_cards() {
            let entry = (player, slot, card.instance_id);
            if card.is_spent() && !spent.contains(&entry) {
                tracing::trace!(card = %card, "finished by a chain rotation");
                spent.push(entry);
            }
        }
    }
    spent
}

/// Discard the spent cards that are still in play.
fn discard_pass(state: &mut GameState, spent: &[FieldRef]) {
    for &(player, _, instance) in spent {
        let Some(slot) = state.players[player].field_position(instance) else {
            tracing::warn!(%instance, "spent card already left play, skipping discard");
            state.log(format!("Card {} already left play", instance));
            continue;
        };

        if let Some(card) = zones::discard_from_field(state, player, slot) {
            state.log(format!("{} is exhausted and discarded", card));
            triggers::knowledge_left(state, player, card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CreatureId, Knowledge, KnowledgeId};
    use crate::core::{PlayerPair, PlayerState, RulesConfig};

    fn state() -> GameState {
        let players = PlayerPair::new(
            PlayerState::new("alice", &[CreatureId::Pele, CreatureId::Kappa], 20),
            PlayerState::new("bob", &[CreatureId::Adaro, CreatureId::Tulpar], 20),
        );
        GameState::new("g", players, RulesConfig::default())
    }

    fn place(state: &mut GameState, player: PlayerId, slot: usize, card: Knowledge) {
        state.players[player].field[slot].knowledge = Some(card);
    }

    #[test]
    fn test_phase_ends_in_action() {
        let mut state = state();
        state.actions_taken = 2;

        run_knowledge_phase(&mut state);

        assert_eq!(state.phase, Phase::Action);
        assert_eq!(state.actions_taken, 0);
    }

    #[test]
    fn test_rotation_and_queued_damage() {
        let mut state = state();
        place(&mut state, PlayerId::FIRST, 0, Knowledge::new(KnowledgeId::TidalSurge, InstanceId(1)).with_rotation(90));

        run_knowledge_phase(&mut state);

        let surge = state.players[PlayerId::FIRST].field[0].knowledge.clone().unwrap();
        assert_eq!(surge.rotation, 180);
        assert_eq!(state.players[PlayerId::SECOND].power, 18);
    }

    #[test]
    fn test_defense_offsets_damage() {
        let mut state = state();
        place(&mut state, PlayerId::FIRST, 0, Knowledge::new(KnowledgeId::TidalSurge, InstanceId(1)).with_rotation(90));
        place(&mut state, PlayerId::SECOND, 1, Knowledge::new(KnowledgeId::StoneWard, InstanceId(2)).with_rotation(90));

        run_knowledge_phase(&mut state);

        // 2 damage, 2 defense
        assert_eq!(state.players[PlayerId::SECOND].power, 20);
    }

    #[test]
    fn test_final_rotation_discards() {
        let mut state = state();
        place(&mut state, PlayerId::SECOND, 0, Knowledge::new(KnowledgeId::Emberfall, InstanceId(5)).with_rotation(90));

        run_knowledge_phase(&mut state);

        assert!(state.players[PlayerId::SECOND].field[0].is_empty());
        assert_eq!(state.discard.len(), 1);
        assert_eq!(state.players[PlayerId::FIRST].power, 19);
    }

    #[test]
    fn test_card_removed_mid_pass_is_not_discarded_twice() {
        let mut state = state();
        // Alice's Deep Current reaches 270 and discards Bob's first field card,
        // which was itself about to be discarded.
        place(&mut state, PlayerId::FIRST, 0, Knowledge::new(KnowledgeId::DeepCurrent, InstanceId(1)).with_rotation(180));
        place(&mut state, PlayerId::SECOND, 0, Knowledge::new(KnowledgeId::VeilOfMist, InstanceId(2)).with_rotation(180));

        run_knowledge_phase(&mut state);

        let ids: Vec<_> = state.discard.iter().map(|k| k.instance_id).collect();
        assert_eq!(ids, vec![InstanceId(2), InstanceId(1)]);
        assert!(zones::audit(&state).is_consistent());
    }

    #[test]
    fn test_spent_card_taken_by_later_effect_is_skipped() {
        let mut state = state();
        // Alice's Emberfall is spent in the rotate pass; Bob's Deep Current,
        // processed after it, discards it before the discard pass.
        place(&mut state, PlayerId::FIRST, 0, Knowledge::new(KnowledgeId::Emberfall, InstanceId(1)).with_rotation(90));
        place(&mut state, PlayerId::SECOND, 0, Knowledge::new(KnowledgeId::DeepCurrent, InstanceId(2)).with_rotation(180));

        run_knowledge_phase(&mut state);

        let ids: Vec<_> = state.discard.iter().map(|k| k.instance_id).collect();
        assert_eq!(ids, vec![InstanceId(1), InstanceId(2)]);
        assert!(state.log.iter().any(|line| line.contains("already left play")));
        assert_eq!(state.players[PlayerId::SECOND].power, 19);
    }

    #[test]
    fn test_card_finished_by_later_gale_is_discarded() {
        let mut state = state();
        // Surge turns to 180 on its own, then the gale in slot 1 pushes it to 270
        place(&mut state, PlayerId::FIRST, 0, Knowledge::new(KnowledgeId::TidalSurge, InstanceId(1)).with_rotation(90));
        place(&mut state, PlayerId::FIRST, 1, Knowledge::new(KnowledgeId::WhisperingGale, InstanceId(2)));

        run_knowledge_phase(&mut state);

        let alice = &state.players[PlayerId::FIRST];
        assert!(alice.field[0].is_empty());
        assert_eq!(alice.field[1].knowledge.as_ref().unwrap().rotation, 90);
        assert_eq!(state.discard.len(), 1);
        assert_eq!(state.discard[0].instance_id, InstanceId(1));
        assert_eq!(state.discard[0].rotation, 0);
        // 2 at 180 and 2 more at 270
        assert_eq!(state.players[PlayerId::SECOND].power, 16);
        assert!(zones::audit(&state).is_consistent());
    }

    #[test]
    fn test_creature_cycle_renews_for_current_player() {
        let mut state = state();
        for _ in 0..3 {
            state.players[PlayerId::FIRST].creatures[0].rotate();
            state.players[PlayerId::SECOND].creatures[0].rotate();
        }

        run_knowledge_phase(&mut state);

        assert_eq!(state.players[PlayerId::FIRST].creatures[0].rotation, 0);
        assert_eq!(state.players[PlayerId::SECOND].creatures[0].rotation, 270);
    }
}
