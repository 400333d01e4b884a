//! Card containers and movement.
//!
//! Knowledge instances live in exactly one of: the market, the deck, the
//! discard pile, a hand, or a field slot. This module answers "where is this
//! instance" and moves cards between containers without ever duplicating one.
//!
//! ## Key Items
//!
//! - `Location`: a container (with index or slot)
//! - `census` / `locate` / `audit`: instance lookup and uniqueness checks
//! - `take_from_market`, `draw_first_from_market`, `discard_from_field`, ...:
//!   moves used by the executor, effects and passives

pub mod location;
pub mod transfer;

pub use location::{audit, census, locate, CensusReport, Location};
pub use transfer::{
    discard, discard_from_field, discard_from_hand, draw_first_from_market, draw_from_market,
    take_from_market,
};
