//! Effective attack and defense.
//!
//! Boost resolution runs first: a zero stage, or a stage a critical hit
//! ignores, uses the raw stat. Unaware on the other side also forces the raw
//! stat, Simple doubles the stage. The ability, field and item slots follow.

use tracing::trace;

use super::formula::{apply_boost, apply_simple_boost};
use super::modifier::Modifier;
use super::rules::{apply_slots, Note, Rule, Slot, Step};
use crate::abilities::Ability;
use crate::desc::RawDesc;
use crate::field::{Field, SideConditions, Weather};
use crate::items::Item;
use crate::moves::Move;
use crate::pokemon::Combatant;
use crate::stats::{stat_description, StatId};
use crate::types::Type;

fn sunny(s: &Step<'_>) -> bool {
    s.field.has_weather(Weather::Sun)
}

fn named(mon: &Combatant, names: &[&str]) -> bool {
    names.contains(&mon.name.as_str())
}

// ============================================================================
// Attack
// ============================================================================

const ATTACKER_ABILITY: Slot = &[
    Rule {
        name: "Huge Power / Pure Power",
        applies: |s| s.mv.is_physical() && matches!(s.attacker.ability, Some(Ability::HugePower | Ability::PurePower)),
        modifier: Modifier::DOUBLE,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "Flower Gift",
        applies: |s| sunny(s) && s.mv.is_physical() && s.attacker.has_ability(Ability::FlowerGift),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility, Note::Weather],
    },
    Rule {
        name: "Solar Power",
        applies: |s| sunny(s) && !s.mv.is_physical() && s.attacker.has_ability(Ability::SolarPower),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility, Note::Weather],
    },
    Rule {
        name: "Hustle",
        applies: |s| s.mv.is_physical() && s.attacker.has_ability(Ability::Hustle),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "Guts",
        applies: |s| s.mv.is_physical() && s.attacker.has_ability(Ability::Guts) && s.attacker.has_status(),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "Plus / Minus",
        applies: |s| {
            !s.mv.is_physical()
                && s.attacker.ability_on
                && matches!(s.attacker.ability, Some(Ability::Plus | Ability::Minus))
        },
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "Slow Start",
        applies: |s| s.mv.is_physical() && s.attacker.has_ability(Ability::SlowStart) && s.attacker.ability_on,
        modifier: Modifier::HALF,
        notes: &[Note::AttackerAbility],
    },
];

const ALLY_FLOWER_GIFT: Slot = &[Rule {
    name: "ally Flower Gift",
    applies: |s| {
        s.field.attacker_side.has(SideConditions::FLOWER_GIFT)
            && !s.attacker.has_ability(Ability::FlowerGift)
            && sunny(s)
            && s.mv.is_physical()
    },
    modifier: Modifier::ONE_POINT_FIVE,
    notes: &[Note::Weather, Note::FlowerGiftAttacker],
}];

const ATTACKER_ITEM: Slot = &[
    Rule {
        name: "Choice Band",
        applies: |s| s.mv.is_physical() && s.attacker.has_item(Item::ChoiceBand),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Choice Specs",
        applies: |s| !s.mv.is_physical() && s.attacker.has_item(Item::ChoiceSpecs),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Soul Dew",
        applies: |s| {
            !s.mv.is_physical() && s.attacker.has_item(Item::SoulDew) && named(s.attacker, &["Latios", "Latias"])
        },
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Light Ball",
        applies: |s| s.attacker.has_item(Item::LightBall) && named(s.attacker, &["Pikachu"]),
        modifier: Modifier::DOUBLE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Thick Club",
        applies: |s| {
            s.mv.is_physical() && s.attacker.has_item(Item::ThickClub) && named(s.attacker, &["Cubone", "Marowak"])
        },
        modifier: Modifier::DOUBLE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Deep Sea Tooth",
        applies: |s| {
            !s.mv.is_physical() && s.attacker.has_item(Item::DeepSeaTooth) && named(s.attacker, &["Clamperl"])
        },
        modifier: Modifier::DOUBLE,
        notes: &[Note::AttackerItem],
    },
];

pub const ATTACK_SLOTS: &[Slot] = &[ATTACKER_ABILITY, ALLY_FLOWER_GIFT, ATTACKER_ITEM];

/// Effective attacking stat for `mv`: Attack for physical moves, Special
/// Attack otherwise.
pub fn calculate_attack(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
    desc: &mut RawDesc,
    is_critical: bool,
) -> u32 {
    let stat = if mv.is_physical() { StatId::Atk } else { StatId::Spa };
    desc.attack_evs = Some(stat_description(
        stat,
        attacker.evs.get(stat),
        attacker.ivs.get(stat),
        attacker.nature,
    ));

    let boost = attacker.boosts.get(stat);
    let raw = attacker.stats.get(stat);
    let attack = if boost == 0 || (is_critical && boost < 0) {
        raw as u32
    } else if defender.has_ability(Ability::Unaware) {
        desc.defender_ability = defender.ability;
        raw as u32
    } else if attacker.has_ability(Ability::Simple) {
        desc.attacker_ability = attacker.ability;
        desc.attack_boost = Some(boost);
        apply_simple_boost(raw, boost)
    } else {
        desc.attack_boost = Some(boost);
        apply_boost(raw, boost)
    };

    let step = Step {
        attacker,
        defender,
        mv,
        field,
        is_critical,
        value: attack,
    };
    let attack = apply_slots(ATTACK_SLOTS, step, desc).max(1);
    trace!(?stat, boost, attack, "attack resolved");
    attack
}

// ============================================================================
// Defense
// ============================================================================

const DEFENDER_ABILITY: Slot = &[
    Rule {
        name: "Marvel Scale",
        applies: |s| s.mv.is_physical() && s.defender.has_ability(Ability::MarvelScale) && s.defender.has_status(),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::DefenderAbility],
    },
    Rule {
        name: "Flower Gift",
        applies: |s| !s.mv.is_physical() && sunny(s) && s.defender.has_ability(Ability::FlowerGift),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::DefenderAbility, Note::Weather],
    },
    Rule {
        name: "ally Flower Gift",
        applies: |s| !s.mv.is_physical() && sunny(s) && s.field.defender_side.has(SideConditions::FLOWER_GIFT),
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::Weather, Note::FlowerGiftDefender],
    },
];

const DEFENDER_ITEM: Slot = &[
    Rule {
        name: "Soul Dew",
        applies: |s| {
            !s.mv.is_physical() && s.defender.has_item(Item::SoulDew) && named(s.defender, &["Latios", "Latias"])
        },
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::DefenderItem],
    },
    Rule {
        name: "Deep Sea Scale",
        applies: |s| {
            !s.mv.is_physical() && s.defender.has_item(Item::DeepSeaScale) && named(s.defender, &["Clamperl"])
        },
        modifier: Modifier::DOUBLE,
        notes: &[Note::DefenderItem],
    },
    Rule {
        name: "Metal Powder",
        applies: |s| s.mv.is_physical() && s.defender.has_item(Item::MetalPowder) && named(s.defender, &["Ditto"]),
        modifier: Modifier::DOUBLE,
        notes: &[Note::DefenderItem],
    },
];

const SANDSTORM: Slot = &[Rule {
    name: "sandstorm Rock boost",
    applies: |s| !s.mv.is_physical() && s.field.has_weather(Weather::Sand) && s.defender.has_type(Type::Rock),
    modifier: Modifier::ONE_POINT_FIVE,
    notes: &[Note::Weather],
}];

const SELF_DESTRUCT: Slot = &[Rule {
    name: "Explosion / Self-Destruct",
    applies: |s| s.mv.named(&["Explosion", "Self-Destruct"]),
    modifier: Modifier::HALF,
    notes: &[],
}];

pub const DEFENSE_SLOTS: &[Slot] = &[DEFENDER_ABILITY, DEFENDER_ITEM, SANDSTORM, SELF_DESTRUCT];

/// Effective defending stat for `mv`: Defense against physical moves,
/// Special Defense otherwise. Never below 1.
pub fn calculate_defense(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
    desc: &mut RawDesc,
    is_critical: bool,
) -> u32 {
    let stat = if mv.is_physical() { StatId::Def } else { StatId::Spd };
    desc.defense_evs = Some(stat_description(
        stat,
        defender.evs.get(stat),
        defender.ivs.get(stat),
        defender.nature,
    ));

    let boost = defender.boosts.get(stat);
    let raw = defender.stats.get(stat);
    let defense = if boost == 0 || (is_critical && boost > 0) {
        raw as u32
    } else if attacker.has_ability(Ability::Unaware) {
        desc.attacker_ability = attacker.ability;
        raw as u32
    } else if defender.has_ability(Ability::Simple) {
        desc.defender_ability = defender.ability;
        desc.defense_boost = Some(boost);
        apply_simple_boost(raw, boost)
    } else {
        desc.defense_boost = Some(boost);
        apply_boost(raw, boost)
    };

    let step = Step {
        attacker,
        defender,
        mv,
        field,
        is_critical,
        value: defense,
    };
    let defense = apply_slots(DEFENSE_SLOTS, step, desc).max(1);
    trace!(?stat, boost, defense, "defense resolved");
    defense
}
