//! Where a knowledge instance currently is.
//!
//! Every instance lives in exactly one container. `census` walks all of
//! them and reports each instance with its `Location`; `audit` turns the
//! census into the uniqueness check used by tests and debug assertions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, InstanceId, PlayerId};

/// A card container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "zone", rename_all = "camelCase")]
pub enum Location {
    Market { index: usize },
    Deck { index: usize },
    Discard { index: usize },
    Hand { player: PlayerId, index: usize },
    Field { player: PlayerId, slot: usize },
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Market { index } => write!(f, "market[{}]", index),
            Location::Deck { index } => write!(f, "deck[{}]", index),
            Location::Discard { index } => write!(f, "discard[{}]", index),
            Location::Hand { player, index } => write!(f, "{} hand[{}]", player, index),
            Location::Field { player, slot } => write!(f, "{} field[{}]", player, slot),
        }
    }
}

/// Every knowledge instance in the game with its location.
///
/// Order: market, deck, discard, then per player hand and field.
#[must_use]
pub fn census(state: &GameState) -> Vec<(InstanceId, Location)> {
    let mut out = Vec::new();

    for (index, card) in state.market.iter().enumerate() {
        out.push((card.instance_id, Location::Market { index }));
    }
    for (index, card) in state.deck.iter().enumerate() {
        out.push((card.instance_id, Location::Deck { index }));
    }
    for (index, card) in state.discard.iter().enumerate() {
        out.push((card.instance_id, Location::Discard { index }));
    }
    for (player, ps) in state.players.iter() {
        for (index, card) in ps.hand.iter().enumerate() {
            out.push((card.instance_id, Location::Hand { player, index }));
        }
        for (slot, card) in ps.field_cards() {
            out.push((card.instance_id, Location::Field { player, slot }));
        }
    }

    out
}

/// Find one instance.
#[must_use]
pub fn locate(state: &GameState, instance: InstanceId) -> Option<Location> {
    census(state)
        .into_iter()
        .find_map(|(id, loc)| (id == instance).then_some(loc))
}

/// Result of checking instance uniqueness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CensusReport {
    /// Total instances counted.
    pub total: usize,
    /// Instances found in more than one place, with all their locations.
    pub duplicates: Vec<(InstanceId, Vec<Location>)>,
}

impl CensusReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Count instances and report any that appear more than once.
#[must_use]
pub fn audit(state: &GameState) -> CensusReport {
    let entries = census(state);
    let total = entries.len();

    let mut seen: FxHashMap<InstanceId, Vec<Location>> = FxHashMap::default();
    for (id, loc) in entries {
        seen.entry(id).or_default().push(loc);
    }

    let mut duplicates: Vec<_> = seen
        .into_iter()
        .filter(|(_, locs)| locs.len() > 1)
        .collect();
    duplicates.sort_by_key(|(id, _)| *id);

    CensusReport { total, duplicates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CreatureId, Knowledge, KnowledgeId};
    use crate::core::{PlayerPair, PlayerState, RulesConfig};

    fn state() -> GameState {
        let mut players = PlayerPair::new(
            PlayerState::new("a", &[CreatureId::Pele, CreatureId::Kappa], 20),
            PlayerState::new("b", &[CreatureId::Adaro, CreatureId::Tulpar], 20),
        );
        players[PlayerId::SECOND]
            .hand
            .push_back(Knowledge::new(KnowledgeId::Emberfall, InstanceId(3)));
        players[PlayerId::FIRST].field[1].knowledge =
            Some(Knowledge::new(KnowledgeId::TidalSurge, InstanceId(4)));

        GameState::new("g", players, RulesConfig::default())
            .with_market(vec![Knowledge::new(KnowledgeId::SkyLance, InstanceId(1))])
            .with_deck(vec![Knowledge::new(KnowledgeId::Wildfire, InstanceId(2))])
    }

    #[test]
    fn test_locate_each_container() {
        let state = state();

        assert_eq!(locate(&state, InstanceId(1)), Some(Location::Market { index: 0 }));
        assert_eq!(locate(&state, InstanceId(2)), Some(Location::Deck { index: 0 }));
        assert_eq!(
            locate(&state, InstanceId(3)),
            Some(Location::Hand { player: PlayerId::SECOND, index: 0 })
        );
        assert_eq!(
            locate(&state, InstanceId(4)),
            Some(Location::Field { player: PlayerId::FIRST, slot: 1 })
        );
        assert_eq!(locate(&state, InstanceId(99)), None);
    }

    #[test]
    fn test_audit_consistent() {
        let report = audit(&state());
        assert_eq!(report.total, 4);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_audit_finds_duplicates() {
        let mut state = state();
        state.discard.push_back(Knowledge::new(KnowledgeId::SkyLance, InstanceId(1)));

        let report = audit(&state);
        assert!(!report.is_consistent());
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].0, InstanceId(1));
        assert_eq!(report.duplicates[0].1.len(), 2);
    }
}
