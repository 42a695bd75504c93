//! Core damage formula and math utilities.
//!
//! Every intermediate value is truncated exactly where the cartridge
//! truncates it.

/// 32-bit overflow wrapping (simulates hardware behavior).
#[inline]
pub const fn of32(value: u64) -> u32 {
    (value & 0xFFFF_FFFF) as u32
}

/// Clamp a widened intermediate back into u32.
#[inline]
pub const fn sat32(value: u64) -> u32 {
    if value > u32::MAX as u64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Game Freak's rounding function ("pokeRound").
///
/// Rounds 0.5 down instead of up.
#[inline]
pub fn pokeround(value: u32, divisor: u32) -> u32 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    // 0.5 exactly rounds DOWN
    if remainder > divisor / 2 {
        quotient + 1
    } else {
        quotient
    }
}

/// Chain 4096-scale modifiers, rounding each step half-up, then clamp.
pub fn chain_mods(modifiers: &[u16], lower: u32, upper: u32) -> u32 {
    let mut result: u32 = 4096;
    for &modifier in modifiers {
        if modifier != 4096 {
            result = ((result as u64 * modifier as u64 + 2048) >> 12) as u32;
        }
    }
    result.clamp(lower, upper)
}

/// Level/power/attack/defense core of the DPP formula.
///
/// `floor(floor(floor(2 * L / 5 + 2) * BP * Atk / 50) / Def)`
///
/// The +2 is added later, after the screen/weather/Flash Fire modifiers.
pub fn get_base_damage(level: u8, base_power: u32, attack: u32, defense: u32) -> u32 {
    let level_factor = 2 * level as u64 / 5 + 2;
    let numerator = level_factor.saturating_mul(base_power as u64).saturating_mul(attack as u64) / 50;
    sat32(numerator / defense.max(1) as u64)
}

/// Damage at random roll `index` (0 = 85%, 15 = 100%).
#[inline]
pub fn apply_random_roll(base_damage: u32, index: usize) -> u32 {
    sat32(base_damage as u64 * (85 + index.min(15)) as u64 / 100)
}

/// Stage multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
/// Each entry is (numerator, denominator).
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4), // -2: 0.5x
    (2, 3),
    (2, 2), //  0
    (3, 2),
    (4, 2), // +2: 2.0x
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2), // +6: 4.0x
];

/// Apply a stat stage to a raw stat.
pub fn apply_boost(stat: u16, stage: i8) -> u32 {
    let index = (stage.clamp(-6, 6) + 6) as usize;
    let (num, den) = BOOST_TABLE[index];
    stat as u32 * num / den
}

/// Simple: the stage counts double, still capped at +/-6.
pub fn apply_simple_boost(stat: u16, stage: i8) -> u32 {
    apply_boost(stat, stage.saturating_mul(2).clamp(-6, 6))
}
