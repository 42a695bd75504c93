//! damage_calc - Generation 4 (Diamond/Pearl/Platinum) damage calculator
//!
//! Given an attacker, a defender, a move and the field, computes the 16
//! possible damage rolls of every hit with cartridge-exact integer rounding,
//! plus a description of which inputs mattered.
//!
//! Inputs are never mutated: the engine works on copies and reports what it
//! derived (final speeds, rewritten move type, suppressed abilities) in
//! [`damage::ResolvedState`].

mod catalog;

/// Input-boundary errors
pub mod error;

/// Type definitions and the DPP type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Stat tables, stages and the stat formula
pub mod stats;

/// Ability identifiers
pub mod abilities;

/// Item identifiers and item data lookups
pub mod items;

/// Combatants
pub mod pokemon;

/// Moves
pub mod moves;

/// Field and side conditions
pub mod field;

/// Description accumulator
pub mod desc;

/// Serialized calculation input
pub mod scenario;

/// The damage engine
pub mod damage;

// Re-export commonly used types
pub use abilities::Ability;
pub use catalog::to_id;
pub use damage::{calculate, Damage, DamageResult, Generation, ResolvedState};
pub use desc::RawDesc;
pub use error::{CalcError, Result};
pub use field::{Field, GameType, Side, SideConditions, SwitchDirection, Weather};
pub use items::Item;
pub use moves::{Move, MoveCategory, MoveFlags, MoveTarget};
pub use natures::Nature;
pub use pokemon::{Combatant, Gender, Status};
pub use scenario::Scenario;
pub use stats::{calc_stat, Boosts, StatId, StatsTable};
pub use types::{Type, TypeEffectiveness};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!("fire".parse::<Type>().unwrap(), Type::Fire);
        assert_eq!("Fire".parse::<Type>().unwrap(), Type::Fire);
        assert!("invalid".parse::<Type>().is_err());
    }

    #[test]
    fn test_type_effectiveness() {
        use types::{type_chart, type_effectiveness};

        // Fire vs Grass = 2x
        assert_eq!(type_chart(Type::Fire, Type::Grass), TypeEffectiveness::SuperEffective);

        // Water vs Fire = 2x
        assert_eq!(type_effectiveness(Type::Water, Type::Fire, None), 8);

        // Ground vs Flying = 0x
        assert_eq!(type_effectiveness(Type::Ground, Type::Flying, None), 0);

        // Fire vs Grass/Steel = 4x
        assert_eq!(type_effectiveness(Type::Fire, Type::Grass, Some(Type::Steel)), 16);
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!("Choice Band".parse::<Item>().unwrap(), Item::ChoiceBand);
        assert_eq!("moldbreaker".parse::<Ability>().unwrap(), Ability::MoldBreaker);
        assert!(matches!("Magic Guard 2".parse::<Ability>(), Err(CalcError::UnknownAbility(_))));
    }
}
