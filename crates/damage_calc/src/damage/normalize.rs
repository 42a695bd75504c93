//! State normalization run before any damage math.
//!
//! Order: weather suppression, Forecast, item suppression, Intimidate,
//! Download, then final speed for both combatants.

use tracing::{debug, trace};

use super::context::DamageContext;
use super::formula::{apply_boost, chain_mods, of32, pokeround};
use super::generations::GenMechanics;
use crate::abilities::Ability;
use crate::field::{Field, Side, SideConditions, Weather};
use crate::items::Item;
use crate::pokemon::{Combatant, Status};
use crate::stats::StatId;
use crate::types::Type;

/// Air Lock / Cloud Nine clear the field weather.
pub fn check_air_lock(combatant: &Combatant, field: &mut Field) {
    if combatant.ability.is_some_and(Ability::negates_weather) && field.weather.is_some() {
        debug!(name = %combatant.name, "weather suppressed");
        field.weather = None;
    }
}

/// Castform takes the type of the current weather.
pub fn check_forecast(combatant: &mut Combatant, weather: Option<Weather>) {
    if combatant.has_ability(Ability::Forecast) && combatant.name == "Castform" {
        let t = match weather {
            Some(Weather::Sun) => Type::Fire,
            Some(Weather::Rain) => Type::Water,
            Some(Weather::Hail) => Type::Ice,
            Some(Weather::Sand) | None => Type::Normal,
        };
        combatant.types = (t, None);
    }
}

/// Klutz suppresses everything but EV items. An Iron Ball is never removed.
pub fn check_item(combatant: &mut Combatant) {
    let Some(item) = combatant.item else {
        return;
    };
    if item == Item::IronBall {
        return;
    }
    if combatant.has_ability(Ability::Klutz) && !item.is_ev_item() {
        debug!(name = %combatant.name, item = %item, "item suppressed by Klutz");
        combatant.item = None;
    }
}

/// `source`'s Intimidate lowers `target`'s attack by one stage.
pub fn check_intimidate(source: &Combatant, target: &mut Combatant) {
    let blocked = target.ability.is_some_and(Ability::blocks_intimidate);
    if source.has_ability(Ability::Intimidate) && source.ability_on && !blocked {
        target.boosts.shift(StatId::Atk, -1);
    }
}

/// Download raises attack or special attack depending on the foe's weaker defense.
pub fn check_download(source: &mut Combatant, foe: &Combatant) {
    if source.has_ability(Ability::Download) {
        let stat = if foe.stats.spd <= foe.stats.def {
            StatId::Spa
        } else {
            StatId::Atk
        };
        source.boosts.shift(stat, 1);
    }
}

// ============================================================================
// Speed
// ============================================================================

/// A 4096-scale speed modifier. The first matching rule in each slot applies.
pub struct SpeedRule {
    pub name: &'static str,
    pub applies: fn(&Combatant, &Field, &Side) -> bool,
    pub modifier: u16,
}

const SPEED_SLOTS: &[&[SpeedRule]] = &[
    &[SpeedRule {
        name: "Tailwind",
        applies: |_, _, side| side.has(SideConditions::TAILWIND),
        modifier: 8192,
    }],
    &[
        SpeedRule {
            name: "Unburden",
            applies: |mon, _, _| mon.has_ability(Ability::Unburden) && mon.ability_on,
            modifier: 8192,
        },
        SpeedRule {
            name: "Chlorophyll",
            applies: |mon, field, _| mon.has_ability(Ability::Chlorophyll) && field.has_weather(Weather::Sun),
            modifier: 8192,
        },
        SpeedRule {
            name: "Swift Swim",
            applies: |mon, field, _| mon.has_ability(Ability::SwiftSwim) && field.has_weather(Weather::Rain),
            modifier: 8192,
        },
        SpeedRule {
            name: "Quick Feet",
            applies: |mon, _, _| mon.has_ability(Ability::QuickFeet) && mon.has_status(),
            modifier: 6144,
        },
        SpeedRule {
            name: "Slow Start",
            applies: |mon, _, _| mon.has_ability(Ability::SlowStart) && mon.ability_on,
            modifier: 2048,
        },
    ],
    &[
        SpeedRule {
            name: "Choice Scarf",
            applies: |mon, _, _| mon.has_item(Item::ChoiceScarf),
            modifier: 6144,
        },
        SpeedRule {
            name: "Iron Ball / EV item",
            applies: |mon, _, _| mon.item.is_some_and(|i| i == Item::IronBall || i.is_ev_item()),
            modifier: 2048,
        },
        SpeedRule {
            name: "Quick Powder",
            applies: |mon, _, _| mon.has_item(Item::QuickPowder) && mon.name == "Ditto",
            modifier: 8192,
        },
    ],
];

/// Speed after stage, ability, item, side and paralysis modifiers.
pub fn final_speed<G: GenMechanics>(gen: &G, combatant: &Combatant, field: &Field, side: &Side) -> u16 {
    let speed = apply_boost(combatant.stats.spe, combatant.boosts.spe);

    let mods: Vec<u16> = SPEED_SLOTS
        .iter()
        .filter_map(|slot| slot.iter().find(|rule| (rule.applies)(combatant, field, side)))
        .inspect(|rule| trace!(rule = rule.name, "speed modifier"))
        .map(|rule| rule.modifier)
        .collect();
    let chain = chain_mods(&mods, 410, 131_172);
    let mut speed = pokeround(of32(speed as u64 * chain as u64), 4096);

    if combatant.status == Some(Status::Paralysis) && !combatant.has_ability(Ability::QuickFeet) {
        speed = of32(speed as u64 * gen.paralysis_speed_percent() as u64) / 100;
    }
    speed.min(gen.max_speed()) as u16
}

/// Settle every pre-damage interaction on the context's working copies.
pub fn normalize<G: GenMechanics>(ctx: &mut DamageContext<G>) {
    check_air_lock(&ctx.attacker, &mut ctx.field);
    check_air_lock(&ctx.defender, &mut ctx.field);
    check_forecast(&mut ctx.attacker, ctx.field.weather);
    check_forecast(&mut ctx.defender, ctx.field.weather);
    check_item(&mut ctx.attacker);
    check_item(&mut ctx.defender);
    check_intimidate(&ctx.attacker, &mut ctx.defender);
    check_intimidate(&ctx.defender, &mut ctx.attacker);
    check_download(&mut ctx.attacker, &ctx.defender);
    check_download(&mut ctx.defender, &ctx.attacker);

    let attacker_speed = final_speed(&ctx.gen, &ctx.attacker, &ctx.field, &ctx.field.attacker_side);
    let defender_speed = final_speed(&ctx.gen, &ctx.defender, &ctx.field, &ctx.field.defender_side);
    ctx.attacker.stats.spe = attacker_speed;
    ctx.defender.stats.spe = defender_speed;
    debug!(attacker_speed, defender_speed, "speeds finalized");
}
