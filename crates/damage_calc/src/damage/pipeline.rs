//! Damage spread: the 16 random rolls and the per-roll modifiers.
//!
//! Everything up to and including the critical-hit and Life Orb multipliers
//! is folded into a single base damage before this stage. What remains is
//! applied once per roll, truncating after each factor.

use super::modifier::Modifier;
use crate::types::TypeEffectiveness;

/// Per-roll multipliers, resolved once per calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollModifiers {
    pub stab: Modifier,
    pub first_type: TypeEffectiveness,
    pub second_type: TypeEffectiveness,
    /// Filter / Solid Rock
    pub filter: Modifier,
    pub expert_belt: Modifier,
    pub tinted_lens: Modifier,
    /// Resist berry, first hit only
    pub berry: Modifier,
}

impl Default for RollModifiers {
    fn default() -> Self {
        Self {
            stab: Modifier::ONE,
            first_type: TypeEffectiveness::Neutral,
            second_type: TypeEffectiveness::Neutral,
            filter: Modifier::ONE,
            expert_belt: Modifier::ONE,
            tinted_lens: Modifier::ONE,
            berry: Modifier::ONE,
        }
    }
}

impl RollModifiers {
    /// The berry is consumed by the first hit.
    pub fn without_berry(self) -> Self {
        Self {
            berry: Modifier::ONE,
            ..self
        }
    }
}

// ============================================================================
// Pipeline Trait
// ============================================================================

/// Defines the order of operations for computing final damage rolls.
pub trait DamagePipeline: Send + Sync {
    /// Compute all 16 damage values (rolls 85..=100) from base damage.
    fn spread(&self, base_damage: u32, mods: &RollModifiers) -> [u32; 16];
}

/// DPP order: random → STAB → type 1 → type 2 → Filter → Expert Belt →
/// Tinted Lens → resist berry, minimum 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen4Pipeline;

impl DamagePipeline for Gen4Pipeline {
    fn spread(&self, base_damage: u32, mods: &RollModifiers) -> [u32; 16] {
        let mut rolls = [0u32; 16];
        for (i, roll) in rolls.iter_mut().enumerate() {
            let mut damage = super::formula::apply_random_roll(base_damage, i);
            damage = mods.stab.apply(damage);
            damage = mods.first_type.apply(damage);
            damage = mods.second_type.apply(damage);
            damage = mods.filter.apply(damage);
            damage = mods.expert_belt.apply(damage);
            damage = mods.tinted_lens.apply(damage);
            damage = mods.berry.apply(damage);
            *roll = clamp_damage(damage);
        }
        rolls
    }
}

/// Every roll deals at least 1.
#[inline]
pub fn clamp_damage(damage: u32) -> u32 {
    damage.max(1)
}

/// Static instance for the Gen 4 pipeline.
pub static GEN4_PIPELINE: Gen4Pipeline = Gen4Pipeline;
