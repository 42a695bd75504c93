//! Damage calculation pipeline.
//!
//! This module implements the fourth-generation (Diamond/Pearl/Platinum)
//! damage formula as a staged pipeline over working copies of the inputs.
//!
//! # Architecture
//!
//! 1. **Normalize**: weather suppression, Forecast, Klutz, Intimidate,
//!    Download, final speed
//! 2. **Gate**: status moves, protection, Pain Split, Mold Breaker, crits
//! 3. **Move resolution**: Weather Ball, Judgment, Natural Gift, Brick Break,
//!    Nature Power, Normalize
//! 4. **Effectiveness and immunities**, then fixed-damage moves
//! 5. **Base power** and its modifier chain
//! 6. **Attack / Defense**
//! 7. **Base damage**: `floor(floor(floor(2 * L / 5 + 2) * BP * Atk / 50) / Def)`,
//!    burn, final modifiers, `+ 2`, crit, Life Orb
//! 8. **Spread**: 16 rolls with STAB, type, Filter, Expert Belt, Tinted Lens
//!    and resist berry, repeated per hit for multi-hit moves
//!
//! # Usage
//!
//! ```
//! use damage_calc::damage::{calculate, Generation};
//! use damage_calc::{Combatant, Field, Move, MoveCategory, Type};
//!
//! let attacker = Combatant::new("Garchomp").types(Type::Dragon, Some(Type::Ground));
//! let defender = Combatant::new("Heatran").types(Type::Fire, Some(Type::Steel));
//! let quake = Move::new("Earthquake", Type::Ground, MoveCategory::Physical, 100);
//!
//! let result = calculate(Generation::default(), &attacker, &defender, &quake, &Field::default());
//! assert_eq!(result.rolls().map(|r| r.len()), Some(16));
//! ```

mod context;
mod effective_stats;
mod effectiveness;
mod formula;
mod gate;
mod modifier;
mod modifiers;
mod multihit;
mod normalize;
mod pipeline;
mod rules;
pub mod generations;
pub mod special_moves;

pub use context::DamageContext;
pub use effective_stats::{calculate_attack, calculate_defense};
pub use effectiveness::{ordered_types, resolve as resolve_effectiveness, Effectiveness, Overrides};
pub use formula::{apply_boost, apply_simple_boost, chain_mods, get_base_damage, of32, pokeround, sat32};
pub use generations::{Gen4, GenMechanics, Generation};
pub use modifier::Modifier;
pub use modifiers::apply_base_power_mods;
pub use multihit::check_multihit_boost;
pub use normalize::{check_air_lock, check_download, check_forecast, check_intimidate, check_item, final_speed};
pub use pipeline::{DamagePipeline, RollModifiers};
pub use special_moves::base_power;

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::abilities::Ability;
use crate::field::{Field, SideConditions, Weather};
use crate::items::Item;
use crate::moves::{Move, MoveCategory};
use crate::pokemon::{Combatant, Status};
use crate::stats::Boosts;
use crate::types::Type;
use crate::desc::RawDesc;

/// Damage payload of a calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Damage {
    /// Pain Split and fixed-damage moves
    Fixed(u32),
    /// All 16 rolls (85..=100%) of a single hit
    Rolls([u32; 16]),
    /// One spread per hit or per turn
    Hits(Vec<[u32; 16]>),
}

impl Damage {
    /// Lowest total damage.
    pub fn min(&self) -> u32 {
        match self {
            Damage::Fixed(d) => *d,
            Damage::Rolls(rolls) => rolls[0],
            Damage::Hits(hits) => hits.iter().fold(0, |total, h| total.saturating_add(h[0])),
        }
    }

    /// Highest total damage.
    pub fn max(&self) -> u32 {
        match self {
            Damage::Fixed(d) => *d,
            Damage::Rolls(rolls) => rolls[15],
            Damage::Hits(hits) => hits.iter().fold(0, |total, h| total.saturating_add(h[15])),
        }
    }
}

/// What the engine changed relative to the caller's inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedState {
    pub attacker_speed: u16,
    pub defender_speed: u16,
    pub move_type: Type,
    pub move_category: MoveCategory,
    /// First-hit base power after modifiers, if the pipeline got that far
    pub base_power: Option<u16>,
    /// Quarter-scale effectiveness (4 = 1x), if resolved
    pub effectiveness: Option<u8>,
    pub is_critical: bool,
    pub attacker_ability_suppressed: Option<Ability>,
    pub defender_ability_suppressed: Option<Ability>,
    pub attacker_item_suppressed: Option<Item>,
    pub defender_item_suppressed: Option<Item>,
    pub weather_suppressed: Option<Weather>,
    pub screens_removed: SideConditions,
    /// Boosts after entry effects and multi-turn drops, when they changed
    pub attacker_boosts: Option<Boosts>,
    pub defender_boosts: Option<Boosts>,
}

fn lost<T: Copy>(before: Option<T>, after: Option<T>) -> Option<T> {
    match (before, after) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}

fn changed(before: Boosts, after: Boosts) -> Option<Boosts> {
    (before != after).then_some(after)
}

impl ResolvedState {
    fn diff<G: GenMechanics>(
        ctx: &DamageContext<G>,
        attacker: &Combatant,
        defender: &Combatant,
        field: &Field,
    ) -> Self {
        Self {
            attacker_speed: ctx.attacker.stats.spe,
            defender_speed: ctx.defender.stats.spe,
            move_type: ctx.mv.move_type,
            move_category: ctx.mv.category,
            base_power: ctx.base_power,
            effectiveness: ctx.effectiveness,
            is_critical: ctx.is_critical,
            attacker_ability_suppressed: lost(attacker.ability, ctx.attacker.ability),
            defender_ability_suppressed: lost(defender.ability, ctx.defender.ability),
            attacker_item_suppressed: lost(attacker.item, ctx.attacker.item),
            defender_item_suppressed: lost(defender.item, ctx.defender.item),
            weather_suppressed: lost(field.weather, ctx.field.weather),
            screens_removed: field
                .defender_side
                .conditions
                .difference(ctx.field.defender_side.conditions),
            attacker_boosts: changed(attacker.boosts, ctx.attacker.boosts),
            defender_boosts: changed(defender.boosts, ctx.defender.boosts),
        }
    }
}

/// Result of a damage calculation.
#[derive(Clone, Debug)]
pub struct DamageResult {
    /// `None` when the move does no damage
    pub damage: Option<Damage>,
    pub desc: RawDesc,
    /// Working copies after the pipeline ran
    pub attacker: Combatant,
    pub defender: Combatant,
    pub move_: Move,
    pub field: Field,
    pub resolved: ResolvedState,
}

impl DamageResult {
    /// First hit's 16 rolls, if the move rolls damage.
    pub fn rolls(&self) -> Option<&[u32; 16]> {
        match &self.damage {
            Some(Damage::Rolls(rolls)) => Some(rolls),
            Some(Damage::Hits(hits)) => hits.first(),
            _ => None,
        }
    }

    pub fn min(&self) -> u32 {
        self.damage.as_ref().map_or(0, Damage::min)
    }

    pub fn max(&self) -> u32 {
        self.damage.as_ref().map_or(0, Damage::max)
    }

    pub fn is_zero(&self) -> bool {
        self.max() == 0
    }
}

/// Calculate damage for one use of `mv`.
///
/// The arguments are never modified; everything the engine derived is in
/// the returned [`DamageResult`].
pub fn calculate(
    gen: Generation,
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
) -> DamageResult {
    gen.calculate(attacker, defender, mv, field)
}

#[tracing::instrument(level = "debug", skip_all, fields(move_name = %mv.name, gen = G::GEN))]
pub(crate) fn run<G: GenMechanics>(
    gen: G,
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
) -> DamageResult {
    let mut ctx = DamageContext::new(gen, attacker, defender, mv, field);
    let damage = compute(&mut ctx);
    let resolved = ResolvedState::diff(&ctx, attacker, defender, field);
    DamageResult {
        damage,
        desc: ctx.desc,
        attacker: ctx.attacker,
        defender: ctx.defender,
        move_: ctx.mv,
        field: ctx.field,
        resolved,
    }
}

fn compute<G: GenMechanics>(ctx: &mut DamageContext<G>) -> Option<Damage> {
    normalize::normalize(ctx);

    if let ControlFlow::Break(damage) = gate::before_typing(ctx) {
        return damage;
    }
    gate::apply_mold_breaker(ctx);
    gate::resolve_crit(ctx);
    special_moves::resolve_move(ctx);

    let overrides = Overrides {
        ghost_revealed: ctx.attacker.has_ability(Ability::Scrappy)
            || ctx.field.defender_side.has(SideConditions::FORESIGHT),
        gravity: ctx.field.is_gravity,
    };
    let eff = effectiveness::resolve(&ctx.gen, ctx.mv.move_type, &ctx.defender, overrides);
    ctx.effectiveness = Some(eff.quarters());

    if let ControlFlow::Break(damage) = gate::after_typing(ctx, &eff) {
        return damage;
    }

    if ctx.mv.hits > 1 {
        ctx.desc.hits = Some(ctx.mv.hits);
    }

    let bp = base_power(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, 1);
    if bp == 0 {
        debug!("zero base power");
        return None;
    }
    let bp = apply_base_power_mods(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, bp);
    ctx.base_power = Some(bp);

    let attack = calculate_attack(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, ctx.is_critical);
    let defense = calculate_defense(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, ctx.is_critical);
    let base_damage = finish_base_damage(ctx, bp, attack, defense);

    let mods = modifiers::roll_modifiers(&ctx.gen, &ctx.attacker, &ctx.defender, &ctx.mv, eff, &mut ctx.desc);
    let first = ctx.gen.pipeline().spread(base_damage, &mods);
    Some(multihit::run_sequence(ctx, first, defense, &mods))
}

/// Base damage of a later hit, with power and attack recomputed.
pub(crate) fn hit_base_damage<G: GenMechanics>(ctx: &mut DamageContext<G>, hit: u8, defense: u32) -> u32 {
    let bp = base_power(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, hit);
    let bp = apply_base_power_mods(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, bp);
    let attack = calculate_attack(&ctx.attacker, &ctx.defender, &ctx.mv, &ctx.field, &mut ctx.desc, ctx.is_critical);
    finish_base_damage(ctx, bp, attack, defense)
}

/// Core formula, burn, then the final modifier chain.
fn finish_base_damage<G: GenMechanics>(ctx: &mut DamageContext<G>, bp: u16, attack: u32, defense: u32) -> u32 {
    let mut base_damage = get_base_damage(ctx.attacker.level, bp as u32, attack, defense);
    trace!(bp, attack, defense, base_damage, "base damage");

    let burned = ctx.attacker.status == Some(Status::Burn) && !ctx.attacker.has_ability(Ability::Guts);
    if burned && ctx.mv.is_physical() {
        base_damage /= 2;
        ctx.desc.is_burned = true;
    }

    modifiers::apply_final_mods(
        &ctx.gen,
        &ctx.attacker,
        &ctx.defender,
        &ctx.mv,
        &ctx.field,
        &mut ctx.desc,
        ctx.is_critical,
        base_damage,
    )
}
