//! Passive Ability Engine.
//!
//! Creatures react automatically to game events. Each creature definition
//! carries one `Passive`; triggered passives implement `OnTrigger`, and
//! `resolve_passives` dispatches a trigger over every creature in a fixed
//! order.
//!
//! ## Key Components
//!
//! - [`PassiveTrigger`]: turn start, summon, draw, card-leaves-play
//! - [`PassiveEvent`]: actor plus the card and creature involved
//! - [`PassiveCondition`]: predicate over the event and state
//! - [`Passive`] / [`PassiveEffect`]: what each creature does
//! - [`resolve_passives`]: the ordered, sequential dispatch loop
//!
//! ## Example
//!
//! ```
//! use knowledge_duel::cards::{CreatureId, Knowledge, KnowledgeId};
//! use knowledge_duel::core::{GameState, InstanceId, PlayerId, PlayerPair, PlayerState, RulesConfig};
//! use knowledge_duel::triggers::knowledge_left;
//!
//! let players = PlayerPair::new(
//!     PlayerState::new("alice", &[CreatureId::Lisovik, CreatureId::Kappa], 20),
//!     PlayerState::new("bob", &[CreatureId::Pele, CreatureId::Adaro], 20),
//! );
//! let mut state = GameState::new("demo", players, RulesConfig::default());
//!
//! // Alice's Earth card leaves play: Lisovik drains Bob
//! let ward = Knowledge::new(KnowledgeId::StoneWard, InstanceId(1));
//! knowledge_left(&mut state, PlayerId::FIRST, ward);
//!
//! assert_eq!(state.player(PlayerId::SECOND).power, 19);
//! ```

mod condition;
mod dispatch;
mod event;
mod passive;

pub use condition::{PassiveCondition, PassiveHolder};
pub use dispatch::{effective_cost, is_free_summon, knowledge_left, resolve_passives};
pub use event::{PassiveEvent, PassiveTrigger};
pub use passive::{OnTrigger, Passive, PassiveEffect};
