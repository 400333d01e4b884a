//! Effect definitions.
//!
//! Effects are the atomic consequences a knowledge card can produce when it
//! is summoned or rotates. They carry no targets: the resolver picks targets
//! from the card's owner and slot, always taking the first qualifying
//! candidate.

use serde::{Deserialize, Serialize};

/// An atomic card effect.
///
/// "Opponent" and "owner" are relative to the player who owns the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    // === Damage and defense ===

    /// Queue damage against the opponent for the resolution step.
    QueueDamage(u32),

    /// Damage the opponent right away. Not reduced by defense.
    ImmediateDamage(u32),

    /// Defend the owner in the resolution step, if the slot qualifies.
    Defense(u32),

    // === Card movement ===

    /// Discard the first card in the opponent's hand.
    DiscardOpponentHandCard,

    /// Discard the first card on the opponent's field.
    DiscardOpponentFieldCard,

    /// Owner takes the first market card for free.
    DrawFromMarket,

    /// Rotate the first other card on the owner's field that can still rotate,
    /// then resolve that card's own effects.
    RotateOtherOwnCard,

    /// Forbid the opponent from summoning onto the slot facing this card.
    BlockOpposingSlot,

    // === Resources ===

    /// Give the creature hosting this card extra wisdom.
    HostWisdom(u32),

    /// Owner gains power.
    GainPower(u32),

    /// Owner gets extra actions next turn.
    ExtraActionNextTurn(u32),
}

impl Effect {
    /// Whether this effect moves cards between containers.
    #[must_use]
    pub fn moves_cards(&self) -> bool {
        matches!(
            self,
            Effect::DiscardOpponentHandCard
                | Effect::DiscardOpponentFieldCard
                | Effect::DrawFromMarket
        )
    }
}
