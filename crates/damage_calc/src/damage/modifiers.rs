//! Base power and final damage modifier chains.
//!
//! Each chain is a list of rule slots (see [`super::rules`]). Within a slot the
//! first matching rule wins; slots apply in order with truncation after each.

use tracing::trace;

use super::effectiveness::Effectiveness;
use super::generations::GenMechanics;
use super::modifier::Modifier;
use super::pipeline::RollModifiers;
use super::rules::{apply_slots, Note, Rule, Slot, Step};
use crate::abilities::Ability;
use crate::desc::RawDesc;
use crate::field::{Field, SideConditions, Weather};
use crate::items::Item;
use crate::moves::{Move, MoveFlags};
use crate::pokemon::{Combatant, Gender};
use crate::types::Type;

fn pinched(mon: &Combatant) -> bool {
    mon.cur_hp() as u32 * 3 <= mon.max_hp() as u32
}

fn rivalry_applies(step: &Step<'_>) -> bool {
    step.attacker.has_ability(Ability::Rivalry)
        && step.attacker.gender != Gender::Genderless
        && step.defender.gender != Gender::Genderless
}

fn named(mon: &Combatant, names: &[&str]) -> bool {
    names.contains(&mon.name.as_str())
}

// ============================================================================
// Base Power
// ============================================================================

const HELPING_HAND: Slot = &[Rule {
    name: "Helping Hand",
    applies: |s| s.field.attacker_side.has(SideConditions::HELPING_HAND),
    modifier: Modifier::ONE_POINT_FIVE,
    notes: &[Note::HelpingHand],
}];

const TECHNICIAN: Slot = &[Rule {
    name: "Technician",
    applies: |s| s.attacker.has_ability(Ability::Technician) && s.value <= 60,
    modifier: Modifier::ONE_POINT_FIVE,
    notes: &[Note::AttackerAbility],
}];

const POWER_ITEMS: Slot = &[
    Rule {
        name: "Muscle Band",
        applies: |s| s.attacker.has_item(Item::MuscleBand) && s.mv.is_physical(),
        modifier: Modifier::ONE_POINT_ONE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Wise Glasses",
        applies: |s| s.attacker.has_item(Item::WiseGlasses) && !s.mv.is_physical(),
        modifier: Modifier::ONE_POINT_ONE,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "type-boosting item",
        applies: |s| s.attacker.item.and_then(Item::boost_type) == Some(s.mv.move_type),
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Adamant Orb",
        applies: |s| {
            s.attacker.has_item(Item::AdamantOrb)
                && named(s.attacker, &["Dialga"])
                && matches!(s.mv.move_type, Type::Steel | Type::Dragon)
        },
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Lustrous Orb",
        applies: |s| {
            s.attacker.has_item(Item::LustrousOrb)
                && named(s.attacker, &["Palkia"])
                && matches!(s.mv.move_type, Type::Water | Type::Dragon)
        },
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerItem],
    },
    Rule {
        name: "Griseous Orb",
        applies: |s| {
            s.attacker.has_item(Item::GriseousOrb)
                && named(s.attacker, &["Giratina-Origin"])
                && matches!(s.mv.move_type, Type::Ghost | Type::Dragon)
        },
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerItem],
    },
];

const ATTACKER_ABILITY_POWER: Slot = &[
    Rule {
        name: "Reckless",
        applies: |s| s.attacker.has_ability(Ability::Reckless) && (s.mv.recoil || s.mv.has_crash_damage),
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "Iron Fist",
        applies: |s| s.attacker.has_ability(Ability::IronFist) && s.mv.flags.contains(MoveFlags::PUNCH),
        modifier: Modifier::ONE_POINT_TWO,
        notes: &[Note::AttackerAbility],
    },
    Rule {
        name: "pinch ability",
        applies: |s| {
            let boosted = match s.attacker.ability {
                Some(Ability::Overgrow) => Type::Grass,
                Some(Ability::Blaze) => Type::Fire,
                Some(Ability::Torrent) => Type::Water,
                Some(Ability::Swarm) => Type::Bug,
                _ => return false,
            };
            s.mv.move_type == boosted && pinched(s.attacker)
        },
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::AttackerAbility],
    },
];

const DEFENDER_ABILITY_POWER: Slot = &[
    Rule {
        name: "Heatproof",
        applies: |s| s.defender.has_ability(Ability::Heatproof) && s.mv.move_type == Type::Fire,
        modifier: Modifier::HALF,
        notes: &[Note::DefenderAbility],
    },
    Rule {
        name: "Thick Fat",
        applies: |s| s.defender.has_ability(Ability::ThickFat) && matches!(s.mv.move_type, Type::Fire | Type::Ice),
        modifier: Modifier::HALF,
        notes: &[Note::DefenderAbility],
    },
    Rule {
        name: "Dry Skin",
        applies: |s| s.defender.has_ability(Ability::DrySkin) && s.mv.move_type == Type::Fire,
        modifier: Modifier::ONE_POINT_TWO_FIVE,
        notes: &[Note::DefenderAbility],
    },
];

const RIVALRY: Slot = &[
    Rule {
        name: "Rivalry (same gender)",
        applies: |s| rivalry_applies(s) && s.attacker.gender == s.defender.gender,
        modifier: Modifier::ONE_POINT_TWO_FIVE,
        notes: &[Note::RivalryBuffed, Note::AttackerAbility],
    },
    Rule {
        name: "Rivalry (opposite gender)",
        applies: rivalry_applies,
        modifier: Modifier::THREE_QUARTERS,
        notes: &[Note::RivalryNerfed, Note::AttackerAbility],
    },
];

/// Base power modifiers in cartridge order.
pub const BASE_POWER_SLOTS: &[Slot] = &[
    HELPING_HAND,
    TECHNICIAN,
    POWER_ITEMS,
    ATTACKER_ABILITY_POWER,
    DEFENDER_ABILITY_POWER,
    RIVALRY,
];

/// Apply the base power modifier chain to `base_power`.
pub fn apply_base_power_mods(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
    desc: &mut RawDesc,
    base_power: u16,
) -> u16 {
    let step = Step {
        attacker,
        defender,
        mv,
        field,
        is_critical: false,
        value: base_power as u32,
    };
    let bp = apply_slots(BASE_POWER_SLOTS, step, desc);
    trace!(base_power, modified = bp, "base power modifiers");
    bp.min(u16::MAX as u32) as u16
}

// ============================================================================
// Final Modifiers
// ============================================================================

fn reflect(s: &Step<'_>) -> bool {
    !s.is_critical && s.mv.is_physical() && s.field.defender_side.has(SideConditions::REFLECT)
}

fn light_screen(s: &Step<'_>) -> bool {
    !s.is_critical && !s.mv.is_physical() && s.field.defender_side.has(SideConditions::LIGHT_SCREEN)
}

const SCREENS: Slot = &[
    Rule {
        name: "Reflect",
        applies: |s| reflect(s) && s.field.is_singles(),
        modifier: Modifier::HALF,
        notes: &[Note::Reflect],
    },
    Rule {
        name: "Reflect (doubles)",
        applies: reflect,
        modifier: Modifier::TWO_THIRDS,
        notes: &[Note::Reflect],
    },
    Rule {
        name: "Light Screen",
        applies: |s| light_screen(s) && s.field.is_singles(),
        modifier: Modifier::HALF,
        notes: &[Note::LightScreen],
    },
    Rule {
        name: "Light Screen (doubles)",
        applies: light_screen,
        modifier: Modifier::TWO_THIRDS,
        notes: &[Note::LightScreen],
    },
];

const SPREAD: Slot = &[Rule {
    name: "spread move",
    applies: |s| !s.field.is_singles() && s.mv.target.is_spread(),
    modifier: Modifier::THREE_QUARTERS,
    notes: &[],
}];

const WEATHER: Slot = &[
    Rule {
        name: "weather boost",
        applies: |s| {
            (s.field.has_weather(Weather::Sun) && s.mv.move_type == Type::Fire)
                || (s.field.has_weather(Weather::Rain) && s.mv.move_type == Type::Water)
        },
        modifier: Modifier::ONE_POINT_FIVE,
        notes: &[Note::Weather],
    },
    Rule {
        name: "weather penalty",
        applies: |s| {
            (s.field.has_weather(Weather::Sun) && s.mv.move_type == Type::Water)
                || (s.field.has_weather(Weather::Rain) && s.mv.move_type == Type::Fire)
                || (s.mv.name == "Solar Beam"
                    && matches!(s.field.weather, Some(Weather::Rain | Weather::Sand | Weather::Hail)))
        },
        modifier: Modifier::HALF,
        notes: &[Note::Weather],
    },
];

const FLASH_FIRE: Slot = &[Rule {
    name: "Flash Fire",
    applies: |s| s.attacker.has_ability(Ability::FlashFire) && s.attacker.ability_on && s.mv.move_type == Type::Fire,
    modifier: Modifier::ONE_POINT_FIVE,
    notes: &[Note::AttackerAbility],
}];

const LIFE_ORB: Slot = &[Rule {
    name: "Life Orb",
    applies: |s| s.attacker.has_item(Item::LifeOrb),
    modifier: Modifier::ONE_POINT_THREE,
    notes: &[Note::AttackerItem],
}];

/// Modifiers applied to the base damage before the +2.
pub const PRE_CONSTANT_SLOTS: &[Slot] = &[SCREENS, SPREAD, WEATHER, FLASH_FIRE];

/// Modifiers applied after the critical multiplier.
pub const POST_CRIT_SLOTS: &[Slot] = &[LIFE_ORB];

/// Screens, spread, weather and Flash Fire, then +2, the critical multiplier
/// and Life Orb.
#[allow(clippy::too_many_arguments)]
pub fn apply_final_mods<G: GenMechanics>(
    gen: &G,
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
    desc: &mut RawDesc,
    is_critical: bool,
    base_damage: u32,
) -> u32 {
    let mut step = Step {
        attacker,
        defender,
        mv,
        field,
        is_critical,
        value: base_damage,
    };
    step.value = apply_slots(PRE_CONSTANT_SLOTS, step, desc).saturating_add(2);

    if is_critical {
        let sniper = attacker.has_ability(Ability::Sniper);
        step.value = gen.crit_modifier(sniper).apply(step.value);
        if sniper {
            desc.attacker_ability = attacker.ability;
        }
        desc.is_critical = true;
    }

    apply_slots(POST_CRIT_SLOTS, step, desc)
}

// ============================================================================
// Per-roll Modifiers
// ============================================================================

/// Resolve the per-roll multipliers, recording the abilities and items that
/// contribute.
pub fn roll_modifiers<G: GenMechanics>(
    gen: &G,
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    effectiveness: Effectiveness,
    desc: &mut RawDesc,
) -> RollModifiers {
    let mut mods = RollModifiers {
        first_type: effectiveness.first,
        second_type: effectiveness.second,
        ..RollModifiers::default()
    };

    let (first, second) = attacker.types;
    if mv.move_type == first || Some(mv.move_type) == second {
        let adaptability = attacker.has_ability(Ability::Adaptability);
        mods.stab = gen.stab_modifier(adaptability);
        if adaptability {
            desc.attacker_ability = attacker.ability;
        }
    }

    let super_effective = effectiveness.is_super_effective();
    if super_effective && matches!(defender.ability, Some(Ability::Filter | Ability::SolidRock)) {
        mods.filter = Modifier::THREE_QUARTERS;
        desc.defender_ability = defender.ability;
    }
    if super_effective && attacker.has_item(Item::ExpertBelt) {
        mods.expert_belt = Modifier::ONE_POINT_TWO;
        desc.attacker_item = attacker.item;
    }
    if effectiveness.is_resisted() && attacker.has_ability(Ability::TintedLens) {
        mods.tinted_lens = Modifier::DOUBLE;
        desc.attacker_ability = attacker.ability;
    }

    let resisted = defender.item.and_then(Item::resisted_type);
    if resisted == Some(mv.move_type) && (super_effective || mv.move_type == Type::Normal) {
        mods.berry = Modifier::HALF;
        desc.defender_item = defender.item;
    }

    mods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::generations::Gen4;
    use crate::field::{GameType, Side};
    use crate::moves::{MoveCategory, MoveTarget};
    use crate::stats::StatsTable;
    use crate::types::TypeEffectiveness;

    fn physical(move_type: Type, bp: u16) -> Move {
        Move::new("Test Move", move_type, MoveCategory::Physical, bp)
    }

    fn mods(attacker: &Combatant, defender: &Combatant, mv: &Move, field: &Field, bp: u16) -> (u16, RawDesc) {
        let mut desc = RawDesc::default();
        let power = apply_base_power_mods(attacker, defender, mv, field, &mut desc, bp);
        (power, desc)
    }

    #[test]
    fn test_technician_reads_running_power() {
        let attacker = Combatant::new("Scizor").ability(Ability::Technician);
        let target = Combatant::new("Target");
        let (power, desc) = mods(&attacker, &target, &physical(Type::Bug, 40), &Field::default(), 40);
        assert_eq!(power, 60);
        assert_eq!(desc.attacker_ability, Some(Ability::Technician));

        // Helping Hand pushes 45 to 67, past the Technician threshold
        let helped = Field::new().attacker_side(Side::with(SideConditions::HELPING_HAND));
        let (power, desc) = mods(&attacker, &target, &physical(Type::Bug, 45), &helped, 45);
        assert_eq!(power, 67);
        assert!(desc.is_helping_hand);
        assert_eq!(desc.attacker_ability, None);
    }

    #[test]
    fn test_item_slot_is_exclusive() {
        let target = Combatant::new("Target");
        let band = Combatant::new("Lucario").item(Item::MuscleBand);
        assert_eq!(mods(&band, &target, &physical(Type::Fighting, 120), &Field::default(), 120).0, 132);

        let belt = Combatant::new("Lucario").item(Item::BlackBelt);
        let (power, desc) = mods(&belt, &target, &physical(Type::Fighting, 120), &Field::default(), 120);
        assert_eq!(power, 144);
        assert_eq!(desc.attacker_item, Some(Item::BlackBelt));

        let plate = Combatant::new("Arceus").item(Item::FistPlate);
        assert_eq!(mods(&plate, &target, &physical(Type::Fighting, 100), &Field::default(), 100).0, 120);

        let wrong_type = Combatant::new("Lucario").item(Item::Charcoal);
        assert_eq!(mods(&wrong_type, &target, &physical(Type::Fighting, 120), &Field::default(), 120).0, 120);
    }

    #[test]
    fn test_orbs_need_their_species() {
        let target = Combatant::new("Target");
        let dialga = Combatant::new("Dialga").item(Item::AdamantOrb);
        let draco = Move::new("Draco Meteor", Type::Dragon, MoveCategory::Special, 140);
        assert_eq!(mods(&dialga, &target, &draco, &Field::default(), 140).0, 168);

        let impostor = Combatant::new("Palkia").item(Item::AdamantOrb);
        assert_eq!(mods(&impostor, &target, &draco, &Field::default(), 140).0, 140);
    }

    #[test]
    fn test_pinch_abilities() {
        let target = Combatant::new("Target");
        let low = Combatant::new("Infernape").ability(Ability::Blaze).stats(StatsTable::splat(300)).current_hp(100);
        assert_eq!(mods(&low, &target, &physical(Type::Fire, 120), &Field::default(), 120).0, 180);

        let healthy = Combatant::new("Infernape").ability(Ability::Blaze).stats(StatsTable::splat(300)).current_hp(101);
        assert_eq!(mods(&healthy, &target, &physical(Type::Fire, 120), &Field::default(), 120).0, 120);
    }

    #[test]
    fn test_defender_abilities() {
        let attacker = Combatant::new("Heatran");
        let fire = Move::new("Flamethrower", Type::Fire, MoveCategory::Special, 95);
        let thick_fat = Combatant::new("Snorlax").ability(Ability::ThickFat);
        assert_eq!(mods(&attacker, &thick_fat, &fire, &Field::default(), 95).0, 47);

        let dry_skin = Combatant::new("Toxicroak").ability(Ability::DrySkin);
        let (power, desc) = mods(&attacker, &dry_skin, &fire, &Field::default(), 95);
        assert_eq!(power, 118);
        assert_eq!(desc.defender_ability, Some(Ability::DrySkin));
    }

    #[test]
    fn test_rivalry() {
        let male = |name: &str| Combatant::new(name).gender(Gender::Male);
        let attacker = male("Nidoking").ability(Ability::Rivalry);
        let mv = physical(Type::Ground, 100);

        let (power, desc) = mods(&attacker, &male("Target"), &mv, &Field::default(), 100);
        assert_eq!(power, 125);
        assert_eq!(desc.rivalry, Some(crate::desc::Rivalry::Buffed));

        let female = Combatant::new("Target").gender(Gender::Female);
        assert_eq!(mods(&attacker, &female, &mv, &Field::default(), 100).0, 75);

        let genderless = Combatant::new("Target");
        let (power, desc) = mods(&attacker, &genderless, &mv, &Field::default(), 100);
        assert_eq!(power, 100);
        assert_eq!(desc.rivalry, None);
    }

    fn final_mods(attacker: &Combatant, mv: &Move, field: &Field, crit: bool, base: u32) -> (u32, RawDesc) {
        let mut desc = RawDesc::default();
        let defender = Combatant::new("Target");
        let damage = apply_final_mods(&Gen4, attacker, &defender, mv, field, &mut desc, crit, base);
        (damage, desc)
    }

    #[test]
    fn test_screens() {
        let attacker = Combatant::new("Attacker");
        let reflect = Field::new().defender_side(Side::with(SideConditions::REFLECT));
        let (damage, desc) = final_mods(&attacker, &physical(Type::Normal, 80), &reflect, false, 100);
        assert_eq!(damage, 52);
        assert!(desc.is_reflect);

        let doubles = Field { game_type: GameType::Doubles, ..reflect };
        assert_eq!(final_mods(&attacker, &physical(Type::Normal, 80), &doubles, false, 100).0, 68);

        // crits ignore screens: (100 + 2) * 2
        let (damage, desc) = final_mods(&attacker, &physical(Type::Normal, 80), &reflect, true, 100);
        assert_eq!(damage, 204);
        assert!(!desc.is_reflect);
        assert!(desc.is_critical);

        // Reflect does nothing to special moves
        let special = Move::new("Swift", Type::Normal, MoveCategory::Special, 60);
        assert_eq!(final_mods(&attacker, &special, &reflect, false, 100).0, 102);
    }

    #[test]
    fn test_spread_in_doubles() {
        let attacker = Combatant::new("Attacker");
        let quake = physical(Type::Ground, 100).target(MoveTarget::AllAdjacent);
        assert_eq!(final_mods(&attacker, &quake, &Field::default(), false, 100).0, 102);
        assert_eq!(final_mods(&attacker, &quake, &Field::new().doubles(), false, 100).0, 77);
    }

    #[test]
    fn test_weather_modifiers() {
        let attacker = Combatant::new("Attacker");
        let sun = Field::new().weather(Weather::Sun);
        let (damage, desc) = final_mods(&attacker, &physical(Type::Fire, 90), &sun, false, 100);
        assert_eq!(damage, 152);
        assert_eq!(desc.weather, Some(Weather::Sun));
        assert_eq!(final_mods(&attacker, &physical(Type::Water, 90), &sun, false, 100).0, 52);

        let solar_beam = Move::new("Solar Beam", Type::Grass, MoveCategory::Special, 120);
        assert_eq!(final_mods(&attacker, &solar_beam, &Field::new().weather(Weather::Sand), false, 100).0, 52);
        assert_eq!(final_mods(&attacker, &solar_beam, &sun, false, 100).0, 102);
    }

    #[test]
    fn test_crit_and_life_orb_order() {
        let attacker = Combatant::new("Attacker").item(Item::LifeOrb).ability(Ability::Sniper);
        // ((33 + 2) * 3) * 1.3 = 136.5 -> 136
        let (damage, desc) = final_mods(&attacker, &physical(Type::Normal, 80), &Field::default(), true, 33);
        assert_eq!(damage, 136);
        assert_eq!(desc.attacker_ability, Some(Ability::Sniper));
        assert_eq!(desc.attacker_item, Some(Item::LifeOrb));
    }

    #[test]
    fn test_flash_fire_needs_activation() {
        let mv = physical(Type::Fire, 90);
        let idle = Combatant::new("Heatran").ability(Ability::FlashFire);
        assert_eq!(final_mods(&idle, &mv, &Field::default(), false, 100).0, 102);
        let active = Combatant::new("Heatran").ability(Ability::FlashFire).ability_on(true);
        assert_eq!(final_mods(&active, &mv, &Field::default(), false, 100).0, 152);
    }

    #[test]
    fn test_roll_modifiers() {
        let eff = Effectiveness {
            first: TypeEffectiveness::SuperEffective,
            second: TypeEffectiveness::Neutral,
            dual: true,
        };
        let attacker = Combatant::new("Garchomp")
            .types(Type::Dragon, Some(Type::Ground))
            .item(Item::ExpertBelt);
        let defender = Combatant::new("Rhyperior").ability(Ability::SolidRock).item(Item::ShucaBerry);
        let quake = physical(Type::Ground, 100);
        let mut desc = RawDesc::default();
        let mods = roll_modifiers(&Gen4, &attacker, &defender, &quake, eff, &mut desc);
        assert_eq!(mods.stab, Modifier::ONE_POINT_FIVE);
        assert_eq!(mods.filter, Modifier::THREE_QUARTERS);
        assert_eq!(mods.expert_belt, Modifier::ONE_POINT_TWO);
        assert_eq!(mods.berry, Modifier::HALF);
        assert_eq!(desc.defender_item, Some(Item::ShucaBerry));
    }

    #[test]
    fn test_chilan_berry_halves_neutral_normal() {
        let neutral = Effectiveness {
            first: TypeEffectiveness::Neutral,
            second: TypeEffectiveness::Neutral,
            dual: false,
        };
        let defender = Combatant::new("Target").item(Item::ChilanBerry);
        let mut desc = RawDesc::default();
        let mods = roll_modifiers(&Gen4, &Combatant::new("A"), &defender, &physical(Type::Normal, 80), neutral, &mut desc);
        assert_eq!(mods.berry, Modifier::HALF);
    }
}
