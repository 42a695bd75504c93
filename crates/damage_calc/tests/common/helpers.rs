//! Test helper functions for damage calculation tests.
//!
//! Builders for combatants and moves, plus result checks.

use damage_calc::{Combatant, Damage, Move, MoveCategory, StatsTable, Type};
use serde_json::{json, Value};

use super::fixtures::DamageTestCase;

/// Combatant with explicit final stats.
pub fn mon(name: &str, first: Type, second: Option<Type>, stats: [u16; 6]) -> Combatant {
    let [hp, atk, def, spa, spd, spe] = stats;
    Combatant::new(name)
        .types(first, second)
        .stats(StatsTable { hp, atk, def, spa, spd, spe })
}

pub fn physical(name: &str, move_type: Type, bp: u16) -> Move {
    Move::new(name, move_type, MoveCategory::Physical, bp)
}

pub fn special(name: &str, move_type: Type, bp: u16) -> Move {
    Move::new(name, move_type, MoveCategory::Special, bp)
}

/// Damage in the fixture file's JSON shape.
pub fn damage_json(damage: Option<&Damage>) -> Value {
    match damage {
        None => Value::Null,
        Some(Damage::Fixed(d)) => json!(d),
        Some(Damage::Rolls(rolls)) => json!(rolls),
        Some(Damage::Hits(hits)) => json!(hits),
    }
}

/// 16 positive, non-decreasing rolls.
pub fn assert_valid_spread(rolls: &[u32; 16]) {
    assert!(rolls.iter().all(|&r| r >= 1), "roll below 1: {:?}", rolls);
    assert!(
        rolls.windows(2).all(|w| w[0] <= w[1]),
        "rolls not sorted: {:?}",
        rolls
    );
}

/// Run one fixture case and compare against its expected damage.
pub fn run_damage_test(case: &DamageTestCase) -> Result<(), String> {
    case.scenario
        .validate()
        .map_err(|e| format!("[{}] invalid scenario: {}", case.id, e))?;
    let result = case
        .scenario
        .calculate()
        .map_err(|e| format!("[{}] {}", case.id, e))?;

    let actual = damage_json(result.damage.as_ref());
    if actual != case.expected.damage {
        return Err(format!(
            "[{}] {}\n  expected: {}\n  actual:   {}",
            case.id, case.test_name, case.expected.damage, actual
        ));
    }

    let spreads: &[[u32; 16]] = match &result.damage {
        Some(Damage::Rolls(rolls)) => std::slice::from_ref(rolls),
        Some(Damage::Hits(hits)) => hits,
        _ => &[],
    };
    for rolls in spreads {
        if rolls.iter().any(|&r| r == 0) || rolls.windows(2).any(|w| w[0] > w[1]) {
            return Err(format!("[{}] malformed spread {:?}", case.id, rolls));
        }
    }
    Ok(())
}
