//! Damage calculation context.
//!
//! `DamageContext` owns working copies of the caller's inputs. Every stage of
//! the pipeline reads and rewrites these copies (cleared abilities, finalized
//! speed, rewritten move type, removed screens); the caller's values are never
//! touched.

use super::generations::GenMechanics;
use crate::desc::RawDesc;
use crate::field::Field;
use crate::moves::Move;
use crate::pokemon::Combatant;

pub struct DamageContext<G: GenMechanics> {
    /// Generation mechanics
    pub gen: G,

    // ========================================================================
    // Working copies
    // ========================================================================
    pub attacker: Combatant,
    pub defender: Combatant,
    pub mv: Move,
    pub field: Field,

    // ========================================================================
    // Accumulated state
    // ========================================================================
    pub desc: RawDesc,

    /// Set once Battle Armor / Shell Armor have been checked
    pub is_critical: bool,

    /// Combined type effectiveness (4 = 1x), once resolved
    pub effectiveness: Option<u8>,

    /// First-hit base power after modifiers, once computed
    pub base_power: Option<u16>,
}

impl<G: GenMechanics> DamageContext<G> {
    pub fn new(gen: G, attacker: &Combatant, defender: &Combatant, mv: &Move, field: &Field) -> Self {
        Self {
            gen,
            desc: RawDesc::new(&attacker.name, &defender.name, &mv.name),
            attacker: attacker.clone(),
            defender: defender.clone(),
            mv: mv.clone(),
            field: *field,
            is_critical: false,
            effectiveness: None,
            base_power: None,
        }
    }
}
