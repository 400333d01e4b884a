//! Card catalog for definition lookup.
//!
//! The `Catalog` is the static card/creature collaborator the engine
//! consumes: string id → static attributes, plus the composition of the
//! shared deck. Payloads name cards by their string ids, so this is where
//! external input is turned into typed ids.

use rustc_hash::FxHashMap;
use std::str::FromStr;

use super::definition::{
    CreatureDefinition, CreatureId, Element, KnowledgeDefinition, KnowledgeId,
};
use crate::core::EngineError;

/// Lookup table over every card and creature.
///
/// ## Example
///
/// ```
/// use knowledge_duel::cards::{Catalog, CreatureId};
///
/// let catalog = Catalog::standard();
///
/// let pele = catalog.creature("pele").unwrap();
/// assert_eq!(pele.id, CreatureId::Pele);
/// assert!(catalog.creature("dragon").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    knowledge: FxHashMap<&'static str, KnowledgeId>,
    creatures: FxHashMap<&'static str, CreatureId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The full standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        let knowledge = KnowledgeId::ALL.iter().map(|id| (id.as_str(), *id)).collect();
        let creatures = CreatureId::ALL.iter().map(|id| (id.as_str(), *id)).collect();
        Self {
            knowledge,
            creatures,
        }
    }

    /// Look up a knowledge card by string id.
    pub fn knowledge(&self, key: &str) -> Result<&'static KnowledgeDefinition, EngineError> {
        self.knowledge
            .get(key)
            .map(|id| id.definition())
            .ok_or_else(|| EngineError::UnknownKnowledge(key.to_string()))
    }

    /// Look up a creature by string id.
    pub fn creature(&self, key: &str) -> Result<&'static CreatureDefinition, EngineError> {
        self.creatures
            .get(key)
            .map(|id| id.definition())
            .ok_or_else(|| EngineError::UnknownCreature(key.to_string()))
    }

    /// Number of knowledge card types.
    #[must_use]
    pub fn knowledge_count(&self) -> usize {
        self.knowledge.len()
    }

    /// Number of creature types.
    #[must_use]
    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    /// Knowledge card types of one element, in catalog order.
    pub fn knowledge_of(&self, element: Element) -> impl Iterator<Item = KnowledgeId> {
        KnowledgeId::ALL
            .into_iter()
            .filter(move |id| id.definition().element == element)
    }

    /// Unshuffled deck list: `copies` of every knowledge type, in catalog order.
    #[must_use]
    pub fn deck_list(&self, copies: usize) -> Vec<KnowledgeId> {
        KnowledgeId::ALL
            .iter()
            .flat_map(|id| std::iter::repeat(*id).take(copies))
            .collect()
    }
}

impl FromStr for KnowledgeId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnowledgeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownKnowledge(s.to_string()))
    }
}

impl FromStr for CreatureId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownCreature(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_complete() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.knowledge_count(), KnowledgeId::ALL.len());
        assert_eq!(catalog.creature_count(), CreatureId::ALL.len());
    }

    #[test]
    fn test_lookup_by_key() {
        let catalog = Catalog::standard();

        let lance = catalog.knowledge("sky_lance").unwrap();
        assert_eq!(lance.id, KnowledgeId::SkyLance);
        assert_eq!(lance.element, Element::Air);

        assert_eq!(
            catalog.knowledge("fireball"),
            Err(EngineError::UnknownKnowledge("fireball".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("zhar_ptitsa".parse::<CreatureId>(), Ok(CreatureId::ZharPtitsa));
        assert_eq!("phoenix_ash".parse::<KnowledgeId>(), Ok(KnowledgeId::PhoenixAsh));
        assert!("Pele".parse::<CreatureId>().is_err());
    }

    #[test]
    fn test_deck_list() {
        let catalog = Catalog::standard();
        let deck = catalog.deck_list(2);

        assert_eq!(deck.len(), 26);
        assert_eq!(deck[0], KnowledgeId::TerrestrialTremor);
        assert_eq!(deck[1], KnowledgeId::TerrestrialTremor);
    }

    #[test]
    fn test_knowledge_of_element() {
        let catalog = Catalog::standard();
        let fire: Vec<_> = catalog.knowledge_of(Element::Fire).collect();
        assert_eq!(
            fire,
            vec![KnowledgeId::Emberfall, KnowledgeId::Wildfire, KnowledgeId::PhoenixAsh]
        );
    }
}
