//! Early exits: status moves, protection, Pain Split, immunities and
//! fixed-damage moves.

use std::ops::ControlFlow;

use tracing::debug;

use super::context::DamageContext;
use super::effectiveness::Effectiveness;
use super::generations::GenMechanics;
use super::special_moves::{get_fixed_damage, pain_split};
use super::Damage;
use crate::abilities::Ability;
use crate::field::{Field, SideConditions};
use crate::items::Item;
use crate::moves::{Move, MoveFlags};
use crate::pokemon::Combatant;
use crate::stats::{stat_description, StatId};
use crate::types::Type;

/// `Break` carries the terminal damage (`None` for no damage).
pub type Gate = ControlFlow<Option<Damage>>;

/// Checks that run before the move's type is known.
pub fn before_typing<G: GenMechanics>(ctx: &mut DamageContext<G>) -> Gate {
    if ctx.mv.is_status() && !ctx.mv.named(&["Nature Power", "Pain Split"]) {
        debug!("status move");
        return ControlFlow::Break(None);
    }

    if ctx.field.defender_side.has(SideConditions::PROTECTED) && !ctx.mv.breaks_protect {
        debug!("target is protected");
        ctx.desc.is_protected = true;
        return ControlFlow::Break(None);
    }

    if ctx.mv.name == "Pain Split" {
        let damage = pain_split(&ctx.attacker, &ctx.defender);
        debug!(damage, "pain split");
        return ControlFlow::Break(Some(Damage::Fixed(damage)));
    }

    ControlFlow::Continue(())
}

/// Mold Breaker clears a breakable defender ability.
pub fn apply_mold_breaker<G: GenMechanics>(ctx: &mut DamageContext<G>) {
    let breakable = ctx.defender.ability.is_some_and(Ability::is_breakable);
    if ctx.attacker.has_ability(Ability::MoldBreaker) && breakable {
        debug!(ability = ?ctx.defender.ability, "ability ignored by Mold Breaker");
        ctx.defender.ability = None;
        ctx.desc.attacker_ability = ctx.attacker.ability;
    }
}

/// Battle Armor and Shell Armor cancel a critical hit.
pub fn resolve_crit<G: GenMechanics>(ctx: &mut DamageContext<G>) {
    let blocked = ctx.defender.ability.is_some_and(Ability::blocks_crits);
    ctx.is_critical = ctx.mv.is_crit && !blocked;
}

/// Whether the defender's ability absorbs or ignores the move.
pub fn ability_immunity(defender: &Combatant, mv: &Move, field: &Field, effectiveness: &Effectiveness) -> bool {
    let Some(ability) = defender.ability else {
        return false;
    };
    match ability {
        Ability::WonderGuard => {
            let ignores = mv.move_type == Type::Typeless || mv.name == "Fire Fang";
            !ignores && !effectiveness.is_super_effective()
        }
        Ability::FlashFire => mv.move_type == Type::Fire,
        Ability::DrySkin | Ability::WaterAbsorb => mv.move_type == Type::Water,
        Ability::MotorDrive | Ability::VoltAbsorb => mv.move_type == Type::Electric,
        Ability::Levitate => mv.move_type == Type::Ground && !field.is_gravity && !defender.has_item(Item::IronBall),
        Ability::Soundproof => mv.flags.contains(MoveFlags::SOUND),
        _ => false,
    }
}

/// Checks that run once type effectiveness is resolved.
pub fn after_typing<G: GenMechanics>(ctx: &mut DamageContext<G>, effectiveness: &Effectiveness) -> Gate {
    if effectiveness.is_immune() {
        debug!(move_type = %ctx.mv.move_type, "type immunity");
        return ControlFlow::Break(None);
    }

    if ability_immunity(&ctx.defender, &ctx.mv, &ctx.field, effectiveness) {
        debug!(ability = ?ctx.defender.ability, "ability immunity");
        ctx.desc.defender_ability = ctx.defender.ability;
        return ControlFlow::Break(None);
    }

    ctx.desc.hp_evs = Some(stat_description(
        StatId::Hp,
        ctx.defender.evs.hp,
        ctx.defender.ivs.hp,
        ctx.defender.nature,
    ));

    if let Some(damage) = get_fixed_damage(&ctx.attacker, &ctx.mv) {
        debug!(damage, "fixed damage");
        return ControlFlow::Break(Some(Damage::Fixed(damage)));
    }

    ControlFlow::Continue(())
}
