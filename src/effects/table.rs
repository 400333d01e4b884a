//! The effect table: what each knowledge card does at each rotation.
//!
//! `card_effects` is one exhaustive match over `KnowledgeId`, so a new card
//! cannot be added without deciding its behavior here.
//!
//! ## Rotation convention
//!
//! Effects are looked up with the rotation the card has *after* this step's
//! advance. Rotation 0 only occurs at summon time. `is_final` is true on the
//! step that brings the card to its rotation limit.

use smallvec::{smallvec, SmallVec};

use super::effect::Effect;
use crate::cards::{Knowledge, KnowledgeId};

/// Effects of one card invocation, in resolution order.
pub type EffectList = SmallVec<[Effect; 2]>;

/// Compute a card's effects for one invocation.
///
/// ```
/// use knowledge_duel::cards::{Knowledge, KnowledgeId};
/// use knowledge_duel::core::InstanceId;
/// use knowledge_duel::effects::{card_effects, Effect};
///
/// let surge = Knowledge::new(KnowledgeId::TidalSurge, InstanceId(1));
///
/// assert!(card_effects(&surge, 0, false).is_empty());
/// assert_eq!(card_effects(&surge, 180, false).as_slice(), &[Effect::QueueDamage(2)]);
/// ```
#[must_use]
pub fn card_effects(card: &Knowledge, rotation: u32, is_final: bool) -> EffectList {
    let value = card.definition().value_at(rotation);
    let on_summon = rotation == 0;

    let mut effects: EffectList = match card.id {
        KnowledgeId::TerrestrialTremor
        | KnowledgeId::TidalSurge
        | KnowledgeId::Emberfall
        | KnowledgeId::Wildfire => smallvec![Effect::QueueDamage(value)],

        KnowledgeId::StoneWard | KnowledgeId::VeilOfMist | KnowledgeId::PhoenixAsh => {
            smallvec![Effect::Defense(value)]
        }

        KnowledgeId::BindingRoots if on_summon => smallvec![Effect::BlockOpposingSlot],
        KnowledgeId::BindingRoots => smallvec![Effect::QueueDamage(value)],

        KnowledgeId::DeepCurrent => match rotation {
            90 => smallvec![Effect::DiscardOpponentHandCard],
            180 => smallvec![Effect::QueueDamage(value)],
            270 => smallvec![Effect::DiscardOpponentFieldCard],
            _ => SmallVec::new(),
        },

        KnowledgeId::RiverMemory if value > 0 => smallvec![Effect::DrawFromMarket],
        KnowledgeId::RiverMemory => SmallVec::new(),

        KnowledgeId::WhisperingGale if on_summon => SmallVec::new(),
        KnowledgeId::WhisperingGale => {
            smallvec![Effect::RotateOtherOwnCard, Effect::QueueDamage(value)]
        }

        KnowledgeId::SkyLance => smallvec![Effect::ImmediateDamage(value)],

        KnowledgeId::ZephyrsGift => match rotation {
            90 => smallvec![Effect::HostWisdom(value)],
            180 => smallvec![Effect::GainPower(value)],
            270 => smallvec![Effect::ExtraActionNextTurn(value)],
            _ => SmallVec::new(),
        },
    };

    if is_final {
        match card.id {
            KnowledgeId::Wildfire => effects.push(Effect::DiscardOpponentHandCard),
            KnowledgeId::PhoenixAsh => effects.push(Effect::GainPower(2)),
            _ => {}
        }
    }

    // A zero value means "nothing this step".
    effects.retain(|e| {
        !matches!(
            e,
            Effect::QueueDamage(0)
                | Effect::ImmediateDamage(0)
                | Effect::Defense(0)
                | Effect::HostWisdom(0)
                | Effect::GainPower(0)
                | Effect::ExtraActionNextTurn(0)
        )
    });
    effects
}
