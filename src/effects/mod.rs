//! Effect system for knowledge cards.
//!
//! - `Effect`: atomic consequences (damage, defense, discards, draws, buffs)
//! - `card_effects`: the effect table, one exhaustive match over card ids
//! - `invoke_card` / `resolve_effect`: apply effects to the live state
//! - targeting: first-candidate selection in field-slot order
//! - combat: the damage/defense tally and its resolution
//!
//! ## Design Philosophy
//!
//! Card text is data: the table maps (card, rotation) to a short list of
//! `Effect`s, and one resolver knows how to carry each out. Adding a card
//! touches the table only.

mod effect;
mod table;
mod targeting;
mod resolver;
pub mod combat;

pub use combat::CombatTally;
pub use effect::Effect;
pub use table::{card_effects, EffectList};
pub use targeting::{first_field_card, first_hand_card, FieldFilter};
pub use resolver::{invoke_card, resolve_effect, EffectSource};
