//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `Element`: elemental affinity of cards and creatures
//! - `KnowledgeId` / `CreatureId`: closed sets of card and creature types
//! - `KnowledgeDefinition` / `CreatureDefinition`: static data
//! - `Knowledge` / `Creature`: runtime state (rotation, wisdom, instance id)
//! - `Catalog`: string id lookup and deck composition

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{
    CreatureDefinition, CreatureId, Element, KnowledgeDefinition, KnowledgeId,
    MAX_CREATURE_ROTATION, QUARTER_TURN,
};
pub use instance::{Creature, Knowledge};
pub use registry::Catalog;
