use phf::phf_map;

use crate::desc::RawDesc;
use crate::field::{Field, SwitchDirection};
use crate::moves::Move;
use crate::pokemon::{Combatant, Status};

/// Formula class of a move whose power is not its tabulated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerFormula {
    /// Brine: doubled at or below half the target's HP
    DoubleAtHalfTargetHp,
    /// Eruption, Water Spout: scaled by the user's HP ratio, minimum 1
    UserHpRatio,
    /// Facade: doubled while burned, paralyzed or poisoned
    DoubleWhenStatused,
    /// Flail, Reversal: fixed tiers on 64ths of the user's HP
    LowHpTiers,
    /// Fling: the held item's fling power
    Fling,
    /// Grass Knot, Low Kick: tiers on the target's weight
    WeightTiers,
    /// Gyro Ball: 25 * target speed / user speed, at most 150
    SpeedRatio,
    /// Payback: doubled unless the user is faster
    DoubleWhenSlower,
    /// Punishment: 60 + 20 per positive stage on the target, at most 200
    TargetBoosts,
    /// Pursuit: doubled against a switching target
    DoubleOnSwitchOut,
    /// Wake-Up Slap: doubled against a sleeping target
    DoubleWhenTargetAsleep,
    /// Nature Power: becomes another move with fixed power
    Becomes { name: &'static str, power: u16 },
    /// Crush Grip, Wring Out: scaled by the target's HP ratio
    TargetHpRatio,
    /// Triple Kick: grows with each hit
    PerHit { step: u16 },
    /// Weather Ball: doubled under any weather
    DoubleInWeather,
}

static POWER_FORMULAS: phf::Map<&'static str, PowerFormula> = phf_map! {
    "Brine" => PowerFormula::DoubleAtHalfTargetHp,
    "Eruption" => PowerFormula::UserHpRatio,
    "Water Spout" => PowerFormula::UserHpRatio,
    "Facade" => PowerFormula::DoubleWhenStatused,
    "Flail" => PowerFormula::LowHpTiers,
    "Reversal" => PowerFormula::LowHpTiers,
    "Fling" => PowerFormula::Fling,
    "Grass Knot" => PowerFormula::WeightTiers,
    "Low Kick" => PowerFormula::WeightTiers,
    "Gyro Ball" => PowerFormula::SpeedRatio,
    "Payback" => PowerFormula::DoubleWhenSlower,
    "Punishment" => PowerFormula::TargetBoosts,
    "Pursuit" => PowerFormula::DoubleOnSwitchOut,
    "Wake-Up Slap" => PowerFormula::DoubleWhenTargetAsleep,
    "Nature Power" => PowerFormula::Becomes { name: "Tri Attack", power: 80 },
    "Crush Grip" => PowerFormula::TargetHpRatio,
    "Wring Out" => PowerFormula::TargetHpRatio,
    "Triple Kick" => PowerFormula::PerHit { step: 10 },
    "Weather Ball" => PowerFormula::DoubleInWeather,
};

/// The formula a move's power follows, if it is not fixed.
pub fn power_formula(mv: &Move) -> Option<PowerFormula> {
    POWER_FORMULAS.get(mv.name.as_str()).copied()
}

/// Check if a move has variable base power.
pub fn is_variable_power(mv: &Move) -> bool {
    POWER_FORMULAS.contains_key(mv.name.as_str())
}

/// Weight tiers in hectograms, heaviest first.
const WEIGHT_TIERS: [(u32, u16); 5] = [(2000, 120), (1000, 100), (500, 80), (250, 60), (100, 40)];

fn weight_power(weight: u32) -> u16 {
    WEIGHT_TIERS
        .iter()
        .find(|(min, _)| weight >= *min)
        .map_or(20, |(_, power)| *power)
}

fn low_hp_power(cur: u16, max: u16) -> u16 {
    let p = 64 * cur as u32 / max.max(1) as u32;
    match p {
        0..=1 => 200,
        2..=5 => 150,
        6..=12 => 100,
        13..=21 => 80,
        22..=42 => 40,
        _ => 20,
    }
}

/// Base power for `hit` (1-based) of a move, before any modifiers.
///
/// Records the deviation from the move's tabulated power in `desc`.
/// Zero means the move cannot do damage.
pub fn base_power(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    field: &Field,
    desc: &mut RawDesc,
    hit: u8,
) -> u16 {
    let bp = mv.base_power;
    let Some(formula) = power_formula(mv) else {
        return bp;
    };

    match formula {
        PowerFormula::DoubleAtHalfTargetHp => {
            if defender.cur_hp() as u32 * 2 <= defender.max_hp() as u32 {
                desc.move_bp = Some(bp.saturating_mul(2));
                bp.saturating_mul(2)
            } else {
                bp
            }
        }
        PowerFormula::UserHpRatio => {
            let power = (bp as u32 * attacker.cur_hp() as u32 / attacker.max_hp().max(1) as u32).max(1) as u16;
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::DoubleWhenStatused => {
            let statused = matches!(
                attacker.status,
                Some(Status::Paralysis | Status::Poison | Status::Toxic | Status::Burn)
            );
            if statused {
                desc.move_bp = Some(bp.saturating_mul(2));
                bp.saturating_mul(2)
            } else {
                bp
            }
        }
        PowerFormula::LowHpTiers => {
            let power = low_hp_power(attacker.cur_hp(), attacker.max_hp());
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::Fling => {
            let power = attacker.item.map_or(0, |item| item.fling_power());
            desc.move_bp = Some(power);
            desc.attacker_item = attacker.item;
            power
        }
        PowerFormula::WeightTiers => {
            let power = weight_power(defender.weight);
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::SpeedRatio => {
            let power = match attacker.stats.spe {
                0 => 150,
                spe => (25 * defender.stats.spe as u32 / spe as u32).min(150) as u16,
            };
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::DoubleWhenSlower => {
            if attacker.stats.spe > defender.stats.spe {
                bp
            } else {
                desc.move_bp = Some(bp.saturating_mul(2));
                bp.saturating_mul(2)
            }
        }
        PowerFormula::TargetBoosts => {
            let power = (60 + 20 * defender.boosts.count_positive()).min(200) as u16;
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::DoubleOnSwitchOut => {
            let switching = field.defender_side.switching == Some(SwitchDirection::Out);
            let power = if switching { bp.saturating_mul(2) } else { bp };
            if switching {
                desc.is_switching = Some(SwitchDirection::Out);
            }
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::DoubleWhenTargetAsleep => {
            if defender.status == Some(Status::Sleep) {
                desc.move_bp = Some(bp.saturating_mul(2));
                bp.saturating_mul(2)
            } else {
                bp
            }
        }
        PowerFormula::Becomes { name, power } => {
            desc.move_name = name.to_string();
            power
        }
        PowerFormula::TargetHpRatio => {
            let power = (defender.cur_hp() as u32 * 120 / defender.max_hp().max(1) as u32 + 1) as u16;
            desc.move_bp = Some(power);
            power
        }
        PowerFormula::PerHit { step } => {
            desc.move_bp = Some(match mv.hits {
                2 => step * 3,
                3 => step * 6,
                _ => step,
            });
            step * hit.max(1) as u16
        }
        PowerFormula::DoubleInWeather => {
            let power = if field.weather.is_some() { bp.saturating_mul(2) } else { bp };
            desc.move_bp = Some(power);
            power
        }
    }
}
