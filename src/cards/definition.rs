//! Card definitions - static card and creature data.
//!
//! `KnowledgeDefinition` and `CreatureDefinition` hold the immutable
//! properties of a card type. Both id enums are closed: adding a card means
//! adding a variant, and the compiler then points at every table and match
//! that needs an entry for it.
//!
//! Instance-specific data (rotation, remaining wisdom, instance id) lives in
//! `Knowledge` and `Creature` in the `instance` module.

use serde::{Deserialize, Serialize};

use crate::triggers::{Passive, PassiveCondition, PassiveEffect, PassiveTrigger};

/// Degrees in one rotation step.
pub const QUARTER_TURN: u32 = 90;

/// Highest rotation a creature can reach before its cycle is reset.
pub const MAX_CREATURE_ROTATION: u32 = 270;

/// Elemental affinity shared by creatures and knowledge cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Earth,
    Water,
    Air,
    Fire,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Earth => "earth",
            Element::Water => "water",
            Element::Air => "air",
            Element::Fire => "fire",
        };
        f.write_str(name)
    }
}

/// Identity of a knowledge card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeId {
    TerrestrialTremor,
    StoneWard,
    BindingRoots,
    TidalSurge,
    VeilOfMist,
    DeepCurrent,
    RiverMemory,
    WhisperingGale,
    SkyLance,
    ZephyrsGift,
    Emberfall,
    Wildfire,
    PhoenixAsh,
}

impl KnowledgeId {
    /// Every knowledge card type, in catalog order.
    pub const ALL: [KnowledgeId; 13] = [
        KnowledgeId::TerrestrialTremor,
        KnowledgeId::StoneWard,
        KnowledgeId::BindingRoots,
        KnowledgeId::TidalSurge,
        KnowledgeId::VeilOfMist,
        KnowledgeId::DeepCurrent,
        KnowledgeId::RiverMemory,
        KnowledgeId::WhisperingGale,
        KnowledgeId::SkyLance,
        KnowledgeId::ZephyrsGift,
        KnowledgeId::Emberfall,
        KnowledgeId::Wildfire,
        KnowledgeId::PhoenixAsh,
    ];

    /// Static definition of this card type.
    #[must_use]
    pub fn definition(self) -> &'static KnowledgeDefinition {
        &KNOWLEDGE_DEFINITIONS[self as usize]
    }

    /// Stable string id (as used in payloads).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.definition().key
    }
}

impl std::fmt::Display for KnowledgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a creature type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureId {
    Pele,
    Lisovik,
    Tsenehale,
    Dudugera,
    Kappa,
    ZharPtitsa,
    Caapora,
    Adaro,
    Inkanyamba,
    Tulpar,
    Kitsune,
    Trempulcahue,
}

impl CreatureId {
    /// Every creature type, in catalog order.
    pub const ALL: [CreatureId; 12] = [
        CreatureId::Pele,
        CreatureId::Lisovik,
        CreatureId::Tsenehale,
        CreatureId::Dudugera,
        CreatureId::Kappa,
        CreatureId::ZharPtitsa,
        CreatureId::Caapora,
        CreatureId::Adaro,
        CreatureId::Inkanyamba,
        CreatureId::Tulpar,
        CreatureId::Kitsune,
        CreatureId::Trempulcahue,
    ];

    /// Static definition of this creature type.
    #[must_use]
    pub fn definition(self) -> &'static CreatureDefinition {
        &CREATURE_DEFINITIONS[self as usize]
    }

    /// Stable string id (as used in payloads).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.definition().key
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static knowledge card definition.
///
/// `values` is the card's rotation table: one entry per step (0°, 90°,
/// 180°, 270°). What the number means (damage, defense, a flag) is decided by
/// the card's entry in the effect table. A step past the end of the table
/// has value 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeDefinition {
    pub id: KnowledgeId,
    pub key: &'static str,
    pub name: &'static str,
    pub element: Element,
    pub cost: u32,
    /// Quarter turns the card survives on the field.
    pub rotation_limit: u32,
    pub values: [u32; 4],
}

impl KnowledgeDefinition {
    /// Rotation (degrees) at which the card leaves play.
    #[must_use]
    pub const fn max_rotation(&self) -> u32 {
        self.rotation_limit * QUARTER_TURN
    }

    /// Table value at a rotation in degrees.
    ///
    /// ```
    /// use knowledge_duel::cards::KnowledgeId;
    ///
    /// let tremor = KnowledgeId::TerrestrialTremor.definition();
    /// assert_eq!(tremor.value_at(0), 0);
    /// assert_eq!(tremor.value_at(90), 1);
    /// assert_eq!(tremor.value_at(450), 0);
    /// ```
    #[must_use]
    pub fn value_at(&self, rotation: u32) -> u32 {
        let step = (rotation / QUARTER_TURN) as usize;
        self.values.get(step).copied().unwrap_or(0)
    }
}

/// Static creature definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureDefinition {
    pub id: CreatureId,
    pub key: &'static str,
    pub name: &'static str,
    pub element: Element,
    /// Wisdom capacity at 0°, 90°, 180° and 270°.
    pub wisdom_cycle: [u32; 4],
    pub passive: Passive,
}

impl CreatureDefinition {
    /// Wisdom capacity at a rotation in degrees.
    #[must_use]
    pub fn wisdom_at(&self, rotation: u32) -> u32 {
        let step = (rotation.min(MAX_CREATURE_ROTATION) / QUARTER_TURN) as usize;
        self.wisdom_cycle[step]
    }
}

const fn knowledge(
    id: KnowledgeId,
    key: &'static str,
    name: &'static str,
    element: Element,
    cost: u32,
    rotation_limit: u32,
    values: [u32; 4],
) -> KnowledgeDefinition {
    KnowledgeDefinition {
        id,
        key,
        name,
        element,
        cost,
        rotation_limit,
        values,
    }
}

// Indexed by `KnowledgeId as usize`; order must match the enum.
static KNOWLEDGE_DEFINITIONS: [KnowledgeDefinition; 13] = [
    knowledge(KnowledgeId::TerrestrialTremor, "terrestrial_tremor", "Terrestrial Tremor", Element::Earth, 1, 3, [0, 1, 1, 1]),
    knowledge(KnowledgeId::StoneWard, "stone_ward", "Stone Ward", Element::Earth, 2, 3, [0, 1, 2, 2]),
    knowledge(KnowledgeId::BindingRoots, "binding_roots", "Binding Roots", Element::Earth, 3, 2, [0, 1, 1, 0]),
    knowledge(KnowledgeId::TidalSurge, "tidal_surge", "Tidal Surge", Element::Water, 2, 3, [0, 1, 2, 2]),
    knowledge(KnowledgeId::VeilOfMist, "veil_of_mist", "Veil of Mist", Element::Water, 1, 2, [0, 1, 1, 0]),
    knowledge(KnowledgeId::DeepCurrent, "deep_current", "Deep Current", Element::Water, 3, 3, [0, 1, 2, 1]),
    knowledge(KnowledgeId::RiverMemory, "river_memory", "River Memory", Element::Water, 1, 3, [0, 1, 0, 1]),
    knowledge(KnowledgeId::WhisperingGale, "whispering_gale", "Whispering Gale", Element::Air, 1, 3, [0, 0, 0, 1]),
    knowledge(KnowledgeId::SkyLance, "sky_lance", "Sky Lance", Element::Air, 2, 2, [0, 2, 3, 0]),
    knowledge(KnowledgeId::ZephyrsGift, "zephyrs_gift", "Zephyr's Gift", Element::Air, 2, 3, [0, 1, 1, 1]),
    knowledge(KnowledgeId::Emberfall, "emberfall", "Emberfall", Element::Fire, 1, 2, [0, 1, 1, 0]),
    knowledge(KnowledgeId::Wildfire, "wildfire", "Wildfire", Element::Fire, 3, 3, [0, 2, 2, 3]),
    knowledge(KnowledgeId::PhoenixAsh, "phoenix_ash", "Phoenix Ash", Element::Fire, 2, 4, [0, 1, 1, 1]),
];

const fn triggered(
    trigger: PassiveTrigger,
    condition: PassiveCondition,
    effect: PassiveEffect,
) -> Passive {
    Passive::Triggered {
        trigger,
        condition,
        effect,
    }
}

const fn creature(
    id: CreatureId,
    key: &'static str,
    name: &'static str,
    element: Element,
    wisdom_cycle: [u32; 4],
    passive: Passive,
) -> CreatureDefinition {
    CreatureDefinition {
        id,
        key,
        name,
        element,
        wisdom_cycle,
        passive,
    }
}

// Indexed by `CreatureId as usize`; order must match the enum.
static CREATURE_DEFINITIONS: [CreatureDefinition; 12] = [
    creature(
        CreatureId::Pele,
        "pele",
        "Pele",
        Element::Fire,
        [1, 2, 3, 4],
        triggered(
            PassiveTrigger::AfterPlayerSummon,
            PassiveCondition::CardElement(Element::Fire),
            PassiveEffect::DiscardCheaperOpponentCard,
        ),
    ),
    creature(
        CreatureId::Lisovik,
        "lisovik",
        "Lisovik",
        Element::Earth,
        [1, 3, 2, 3],
        triggered(
            PassiveTrigger::KnowledgeLeave,
            PassiveCondition::OwnCardElement(Element::Earth),
            PassiveEffect::OpponentLosesPower(1),
        ),
    ),
    creature(
        CreatureId::Tsenehale,
        "tsenehale",
        "Tsenehale",
        Element::Air,
        [2, 2, 3, 1],
        triggered(
            PassiveTrigger::KnowledgeLeave,
            PassiveCondition::OwnCardElement(Element::Air),
            PassiveEffect::OwnerDrawsFromMarket,
        ),
    ),
    creature(
        CreatureId::Dudugera,
        "dudugera",
        "Dudugera",
        Element::Earth,
        [2, 3, 3, 2],
        Passive::CostReduction {
            element: Element::Earth,
            amount: 1,
        },
    ),
    creature(
        CreatureId::Kappa,
        "kappa",
        "Kappa",
        Element::Water,
        [1, 2, 2, 3],
        Passive::FreeSummon {
            element: Element::Water,
        },
    ),
    creature(
        CreatureId::ZharPtitsa,
        "zhar_ptitsa",
        "Zhar-Ptitsa",
        Element::Fire,
        [1, 2, 3, 3],
        triggered(
            PassiveTrigger::TurnStart,
            PassiveCondition::OwnerTurnWithHandAtMost(2),
            PassiveEffect::OwnerDrawsFromMarket,
        ),
    ),
    creature(
        CreatureId::Caapora,
        "caapora",
        "Caapora",
        Element::Earth,
        [2, 2, 2, 3],
        triggered(
            PassiveTrigger::AfterOpponentDraw,
            PassiveCondition::OpponentHandLarger,
            PassiveEffect::OpponentLosesPower(1),
        ),
    ),
    creature(
        CreatureId::Adaro,
        "adaro",
        "Adaro",
        Element::Water,
        [1, 3, 3, 2],
        triggered(
            PassiveTrigger::AfterOpponentSummon,
            PassiveCondition::CardElement(Element::Fire),
            PassiveEffect::OpponentLosesPower(1),
        ),
    ),
    creature(
        CreatureId::Inkanyamba,
        "inkanyamba",
        "Inkanyamba",
        Element::Water,
        [2, 2, 3, 3],
        triggered(
            PassiveTrigger::TurnStart,
            PassiveCondition::OwnerTurnWhileBehind,
            PassiveEffect::OwnerGainsPower(1),
        ),
    ),
    creature(
        CreatureId::Tulpar,
        "tulpar",
        "Tulpar",
        Element::Air,
        [1, 2, 3, 2],
        triggered(
            PassiveTrigger::AfterPlayerDraw,
            PassiveCondition::CardElement(Element::Air),
            PassiveEffect::OwnerGainsExtraAction(1),
        ),
    ),
    creature(
        CreatureId::Kitsune,
        "kitsune",
        "Kitsune",
        Element::Fire,
        [2, 1, 3, 2],
        triggered(
            PassiveTrigger::AfterPlayerSummon,
            PassiveCondition::SummonedOntoSelf,
            PassiveEffect::RotateSelf,
        ),
    ),
    creature(
        CreatureId::Trempulcahue,
        "trempulcahue",
        "Trempulcahue",
        Element::Water,
        [1, 1, 2, 4],
        triggered(
            PassiveTrigger::AfterOpponentDraw,
            PassiveCondition::CardElement(Element::Water),
            PassiveEffect::GainWisdom(1),
        ),
    ),
];
