//! A complete calculation input, loadable from JSON.
//!
//! ```json
//! {
//!   "gen": 4,
//!   "attacker": { "name": "Garchomp", "types": ["Dragon", "Ground"], "item": "Choice Band" },
//!   "defender": { "name": "Heatran", "types": ["Fire", "Steel"] },
//!   "move": { "name": "Earthquake", "type": "Ground", "category": "Physical", "bp": 100 },
//!   "field": { "weather": "Sand" }
//! }
//! ```
//!
//! Every field of the combatants, the move and the field is optional and
//! falls back to the builder defaults.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::damage::{calculate, DamageResult, Generation};
use crate::error::Result;
use crate::field::Field;
use crate::moves::Move;
use crate::pokemon::Combatant;

const fn default_gen() -> u8 {
    4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_gen")]
    pub gen: u8,
    pub attacker: Combatant,
    pub defender: Combatant,
    #[serde(rename = "move")]
    pub mv: Move,
    #[serde(default)]
    pub field: Field,
}

impl Scenario {
    pub fn new(attacker: Combatant, defender: Combatant, mv: Move, field: Field) -> Self {
        Self {
            gen: default_gen(),
            attacker,
            defender,
            mv,
            field,
        }
    }

    /// Parse and validate a scenario.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let scenario: Scenario = serde_json::from_reader(reader)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn generation(&self) -> Result<Generation> {
        Generation::from_num(self.gen)
    }

    pub fn validate(&self) -> Result<()> {
        self.generation()?;
        self.attacker.validate()?;
        self.defender.validate()?;
        self.mv.validate()
    }

    pub fn calculate(&self) -> Result<DamageResult> {
        let gen = self.generation()?;
        Ok(calculate(gen, &self.attacker, &self.defender, &self.mv, &self.field))
    }
}
