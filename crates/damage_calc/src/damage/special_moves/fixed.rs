use phf::phf_map;

use crate::moves::Move;
use crate::pokemon::Combatant;

/// How a fixed-damage move computes its damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedDamage {
    /// Damage equals the user's level
    Level,
    /// Constant damage
    Flat(u32),
    /// Maximum Psywave roll: floor(level * 3 / 2)
    LevelAndHalf,
}

static FIXED_DAMAGE: phf::Map<&'static str, FixedDamage> = phf_map! {
    "Seismic Toss" => FixedDamage::Level,
    "Night Shade" => FixedDamage::Level,
    "Dragon Rage" => FixedDamage::Flat(40),
    "Sonic Boom" => FixedDamage::Flat(20),
    "Psywave" => FixedDamage::LevelAndHalf,
};

/// Damage of a move that ignores stats, or `None` for formula moves.
///
/// Type immunities are resolved before this is consulted.
pub fn get_fixed_damage(attacker: &Combatant, mv: &Move) -> Option<u32> {
    let level = attacker.level as u32;
    FIXED_DAMAGE.get(mv.name.as_str()).map(|kind| match kind {
        FixedDamage::Level => level,
        FixedDamage::Flat(damage) => *damage,
        FixedDamage::LevelAndHalf => level * 3 / 2,
    })
}

/// Pain Split: the defender loses the gap between its HP and the average.
pub fn pain_split(attacker: &Combatant, defender: &Combatant) -> u32 {
    let average = (attacker.cur_hp() as u32 + defender.cur_hp() as u32) / 2;
    (defender.cur_hp() as u32).saturating_sub(average)
}
