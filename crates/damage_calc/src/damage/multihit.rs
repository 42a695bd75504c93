//! Multi-hit and multi-turn sequencing.
//!
//! Power and attack are recomputed for every hit after the first. Defense and
//! the per-roll multipliers stay fixed, except the resist berry, which only
//! the first hit consumes.

use tracing::debug;

use super::context::DamageContext;
use super::generations::GenMechanics;
use super::pipeline::RollModifiers;
use super::Damage;
use crate::desc::RawDesc;
use crate::items::Item;
use crate::moves::Move;
use crate::pokemon::Combatant;
use crate::stats::StatId;

/// Apply a self-lowering move's drop before the next use.
///
/// A White Herb restores the stage once per sequence. Returns whether the
/// herb has been used.
pub fn check_multihit_boost(attacker: &mut Combatant, mv: &Move, desc: &mut RawDesc, white_herb_used: bool) -> bool {
    if mv.drops_stats == 0 {
        return white_herb_used;
    }
    let stat = if mv.is_special() { StatId::Spa } else { StatId::Atk };
    attacker.boosts.shift(stat, -(mv.drops_stats.min(12) as i8));

    if attacker.boosts.get(stat) < 0 && attacker.has_item(Item::WhiteHerb) && !white_herb_used {
        debug!(?stat, "white herb restores the drop");
        attacker.boosts.set(stat, 0);
        desc.attacker_item = attacker.item;
        return true;
    }
    white_herb_used
}

/// Number of damage spreads: turns for a self-lowering move used repeatedly,
/// otherwise the hit count.
pub fn attack_count(mv: &Move, desc: &mut RawDesc) -> u8 {
    if mv.drops_stats > 0 && mv.times_used > 1 {
        desc.move_turns = Some(format!("over {} turns", mv.times_used));
        mv.times_used
    } else {
        mv.hits.max(1)
    }
}

/// Extend the first hit's spread into the full sequence.
///
/// Description boosts written by later hits are rolled back so the
/// description reflects the first hit.
pub fn run_sequence<G: GenMechanics>(
    ctx: &mut DamageContext<G>,
    first: [u32; 16],
    defense: u32,
    mods: &RollModifiers,
) -> Damage {
    if !ctx.mv.is_multi() {
        return Damage::Rolls(first);
    }

    let saved_attack_boost = ctx.desc.attack_boost;
    let saved_defense_boost = ctx.desc.defense_boost;
    let count = attack_count(&ctx.mv, &mut ctx.desc);
    let later = mods.without_berry();

    let mut hits = Vec::with_capacity(count as usize);
    hits.push(first);
    let mut white_herb_used = false;
    for hit in 2..=count {
        white_herb_used = check_multihit_boost(&mut ctx.attacker, &ctx.mv, &mut ctx.desc, white_herb_used);
        let base_damage = super::hit_base_damage(ctx, hit, defense);
        hits.push(ctx.gen.pipeline().spread(base_damage, &later));
    }
    debug!(hits = hits.len(), "multi-hit sequence");

    ctx.desc.attack_boost = saved_attack_boost;
    ctx.desc.defense_boost = saved_defense_boost;
    Damage::Hits(hits)
}
