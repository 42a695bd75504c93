//! Type effectiveness with DPP's precedence order and immunity overrides.

use tracing::debug;

use super::generations::GenMechanics;
use crate::abilities::Ability;
use crate::items::Item;
use crate::pokemon::Combatant;
use crate::types::{Type, TypeEffectiveness};

/// Per-type effectiveness against a (possibly dual-typed) defender.
///
/// `first` is the defender type that comes earlier in the cartridge's
/// precedence order, not necessarily the first stored type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effectiveness {
    pub first: TypeEffectiveness,
    pub second: TypeEffectiveness,
    /// Whether the defender actually has a second type
    pub dual: bool,
}

impl Effectiveness {
    /// Product on the quarter scale (0, 1, 2, 4, 8, 16; 4 = 1x).
    pub fn quarters(&self) -> u8 {
        self.first.halves() * self.second.halves()
    }

    pub fn is_immune(&self) -> bool {
        self.quarters() == 0
    }

    pub fn is_super_effective(&self) -> bool {
        self.quarters() > 4
    }

    pub fn is_resisted(&self) -> bool {
        self.quarters() < 4
    }
}

/// Overrides that make a type-chart immunity neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Scrappy or Foresight: Normal and Fighting hit Ghost
    pub ghost_revealed: bool,
    /// Gravity: Ground hits Flying
    pub gravity: bool,
}

/// Defender types ordered by precedence. A repeated type counts once.
pub fn ordered_types(types: (Type, Option<Type>)) -> (Type, Option<Type>) {
    match types {
        (first, Some(second)) if second != first => {
            if first.precedence() > second.precedence() {
                (second, Some(first))
            } else {
                (first, Some(second))
            }
        }
        (first, _) => (first, None),
    }
}

/// Effectiveness of `move_type` against one defending type.
pub fn single_effectiveness<G: GenMechanics>(
    gen: &G,
    move_type: Type,
    defending: Type,
    overrides: Overrides,
) -> TypeEffectiveness {
    let revealed = overrides.ghost_revealed
        && defending == Type::Ghost
        && matches!(move_type, Type::Normal | Type::Fighting);
    let grounded = overrides.gravity && defending == Type::Flying && move_type == Type::Ground;
    if revealed || grounded {
        TypeEffectiveness::Neutral
    } else {
        gen.type_chart(move_type, defending)
    }
}

/// Full resolver for a move of `move_type` hitting `defender`.
///
/// An Iron Ball on a defender without Klutz turns a Ground immunity neutral.
/// The override rewrites the immune per-type entry and the product is derived
/// again from both entries.
pub fn resolve<G: GenMechanics>(
    gen: &G,
    move_type: Type,
    defender: &Combatant,
    overrides: Overrides,
) -> Effectiveness {
    let (first_type, second_type) = ordered_types(defender.types);
    let mut eff = Effectiveness {
        first: single_effectiveness(gen, move_type, first_type, overrides),
        second: second_type
            .map(|t| single_effectiveness(gen, move_type, t, overrides))
            .unwrap_or(TypeEffectiveness::Neutral),
        dual: second_type.is_some(),
    };

    let grounded_by_iron_ball = defender.has_item(Item::IronBall) && !defender.has_ability(Ability::Klutz);
    if eff.is_immune() && move_type == Type::Ground && grounded_by_iron_ball {
        if eff.first == TypeEffectiveness::Immune {
            eff.first = TypeEffectiveness::Neutral;
        } else if eff.dual && eff.second == TypeEffectiveness::Immune {
            eff.second = TypeEffectiveness::Neutral;
        }
        debug!(effectiveness = eff.quarters(), "iron ball grounds defender");
    }
    eff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::generations::Gen4;

    fn mon(first: Type, second: Option<Type>) -> Combatant {
        Combatant::new("Target").types(first, second)
    }

    #[test]
    fn test_precedence_ordering() {
        // Flying sorts after Water regardless of storage order
        assert_eq!(ordered_types((Type::Flying, Some(Type::Water))), (Type::Water, Some(Type::Flying)));
        assert_eq!(ordered_types((Type::Water, Some(Type::Flying))), (Type::Water, Some(Type::Flying)));
        assert_eq!(ordered_types((Type::Fire, Some(Type::Fire))), (Type::Fire, None));
        assert_eq!(ordered_types((Type::Steel, Some(Type::Typeless))), (Type::Typeless, Some(Type::Steel)));
    }

    #[test]
    fn test_description_is_order_independent() {
        let a = resolve(&Gen4, Type::Electric, &mon(Type::Flying, Some(Type::Water)), Overrides::default());
        let b = resolve(&Gen4, Type::Electric, &mon(Type::Water, Some(Type::Flying)), Overrides::default());
        assert_eq!(a, b);
        assert_eq!(a.quarters(), 16);
    }

    #[test]
    fn test_ghost_revealed() {
        let gengar = mon(Type::Ghost, Some(Type::Poison));
        assert!(resolve(&Gen4, Type::Normal, &gengar, Overrides::default()).is_immune());
        let revealed = Overrides { ghost_revealed: true, ..Overrides::default() };
        let eff = resolve(&Gen4, Type::Fighting, &gengar, revealed);
        // Poison resists Fighting
        assert_eq!(eff.quarters(), 2);
    }

    #[test]
    fn test_gravity_grounds_flying() {
        let skarmory = mon(Type::Steel, Some(Type::Flying));
        assert!(resolve(&Gen4, Type::Ground, &skarmory, Overrides::default()).is_immune());
        let gravity = Overrides { gravity: true, ..Overrides::default() };
        assert_eq!(resolve(&Gen4, Type::Ground, &skarmory, gravity).quarters(), 8);
    }

    #[test]
    fn test_iron_ball_override_rederives_product() {
        let skarmory = mon(Type::Steel, Some(Type::Flying)).item(Item::IronBall);
        let eff = resolve(&Gen4, Type::Ground, &skarmory, Overrides::default());
        // Flying sorts first; its immunity becomes neutral, Steel stays weak
        assert_eq!(eff.first, TypeEffectiveness::Neutral);
        assert_eq!(eff.second, TypeEffectiveness::SuperEffective);
        assert_eq!(eff.quarters(), 8);

        let klutz = mon(Type::Flying, None).item(Item::IronBall).ability(Ability::Klutz);
        assert!(resolve(&Gen4, Type::Ground, &klutz, Overrides::default()).is_immune());
    }
}
