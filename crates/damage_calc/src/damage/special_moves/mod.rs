pub mod fixed;
pub mod power;
#[cfg(test)]
mod tests;

use tracing::debug;

use crate::abilities::Ability;
use crate::damage::context::DamageContext;
use crate::damage::generations::GenMechanics;
use crate::field::{SideConditions, Weather};
use crate::moves::MoveCategory;
use crate::types::Type;

pub use fixed::{get_fixed_damage, pain_split};
pub use power::{base_power, is_variable_power, power_formula, PowerFormula};

/// Rewrite the working move before type effectiveness is resolved.
///
/// Handles moves that change their own type, power or category (Weather Ball,
/// Judgment, Natural Gift, Nature Power), Brick Break's screen removal and
/// Normalize.
///
/// This mutates the `DamageContext` directly.
pub fn resolve_move<G: GenMechanics>(ctx: &mut DamageContext<G>) {
    match ctx.mv.name.as_str() {
        "Weather Ball" => {
            ctx.mv.move_type = Weather::weather_ball_type(ctx.field.weather);
            ctx.desc.weather = ctx.field.weather;
            ctx.desc.move_type = Some(ctx.mv.move_type);
        }
        "Judgment" => {
            if let Some(plate) = ctx.attacker.item.and_then(|item| item.plate_type()) {
                ctx.mv.move_type = plate;
            }
        }
        "Natural Gift" => {
            if let Some(gift) = ctx.attacker.item.and_then(|item| item.natural_gift()) {
                ctx.mv.move_type = gift.move_type;
                ctx.mv.base_power = gift.base_power as u16;
                ctx.desc.attacker_item = ctx.attacker.item;
                ctx.desc.move_bp = Some(ctx.mv.base_power);
                ctx.desc.move_type = Some(ctx.mv.move_type);
            }
        }
        "Brick Break" => {
            let screens = SideConditions::REFLECT | SideConditions::LIGHT_SCREEN;
            if ctx.field.defender_side.conditions.intersects(screens) {
                debug!("brick break removes screens");
            }
            ctx.field.defender_side.conditions.remove(screens);
        }
        "Nature Power" => {
            ctx.mv.category = MoveCategory::Special;
        }
        _ => {}
    }

    if ctx.attacker.has_ability(Ability::Normalize) && ctx.mv.name != "Struggle" {
        ctx.mv.move_type = Type::Normal;
        ctx.desc.attacker_ability = ctx.attacker.ability;
    }
}
