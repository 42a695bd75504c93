//! Combatants: one side of a damage calculation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::abilities::Ability;
use crate::error::{CalcError, Result};
use crate::items::Item;
use crate::natures::Nature;
use crate::stats::{calc_stat, Boosts, StatId, StatsTable};
use crate::types::Type;

/// Default IVs (perfect)
pub const DEFAULT_IV: u8 = 31;

/// Default level
pub const DEFAULT_LEVEL: u8 = 100;

/// Major status conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "brn")]
    Burn,
    #[serde(rename = "par")]
    Paralysis,
    #[serde(rename = "psn")]
    Poison,
    #[serde(rename = "tox")]
    Toxic,
    #[serde(rename = "slp")]
    Sleep,
    #[serde(rename = "frz")]
    Freeze,
}

impl FromStr for Status {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brn" | "burn" | "burned" => Ok(Status::Burn),
            "par" | "paralysis" | "paralyzed" => Ok(Status::Paralysis),
            "psn" | "poison" | "poisoned" => Ok(Status::Poison),
            "tox" | "toxic" | "badly poisoned" => Ok(Status::Toxic),
            "slp" | "sleep" | "asleep" => Ok(Status::Sleep),
            "frz" | "freeze" | "frozen" => Ok(Status::Freeze),
            _ => Err(CalcError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "N")]
    Genderless,
}

/// A battler as the engine sees it.
///
/// `stats` holds the unboosted stats; `stats.hp` is max HP. The engine's
/// working copy has `stats.spe` replaced by the finalized speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Combatant {
    /// Species name (also the name shown in descriptions)
    pub name: String,
    pub level: u8,
    pub types: (Type, Option<Type>),
    pub stats: StatsTable<u16>,
    /// Current HP; `None` means full
    pub cur_hp: Option<u16>,
    pub boosts: Boosts,
    pub evs: StatsTable<u8>,
    pub ivs: StatsTable<u8>,
    pub nature: Nature,
    pub item: Option<Item>,
    pub ability: Option<Ability>,
    /// Whether a conditional ability (Flash Fire, Plus/Minus, Slow Start,
    /// Unburden, Intimidate) is currently active
    pub ability_on: bool,
    pub status: Option<Status>,
    /// Weight in hectograms (0.1 kg)
    pub weight: u32,
    pub gender: Gender,
}

impl Default for Combatant {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: DEFAULT_LEVEL,
            types: (Type::Normal, None),
            stats: StatsTable::splat(100),
            cur_hp: None,
            boosts: Boosts::default(),
            evs: StatsTable::splat(0),
            ivs: StatsTable::splat(DEFAULT_IV),
            nature: Nature::default(),
            item: None,
            ability: None,
            ability_on: false,
            status: None,
            weight: 1000,
            gender: Gender::default(),
        }
    }
}

impl Combatant {
    /// Create a combatant with neutral defaults (level 100, 100 in every stat).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn types(mut self, first: Type, second: Option<Type>) -> Self {
        self.types = (first, second);
        self
    }

    /// Set final stats directly.
    pub fn stats(mut self, stats: StatsTable<u16>) -> Self {
        self.stats = stats;
        self
    }

    /// Compute stats from base stats with the current level, IVs, EVs and nature.
    pub fn base_stats(mut self, base: StatsTable<u16>) -> Self {
        for stat in StatId::ALL {
            let value = calc_stat(
                stat,
                base.get(stat),
                self.ivs.get(stat),
                self.evs.get(stat),
                self.level,
                self.nature,
            );
            self.stats.set(stat, value);
        }
        self
    }

    pub fn evs(mut self, evs: StatsTable<u8>) -> Self {
        self.evs = evs;
        self
    }

    pub fn ivs(mut self, ivs: StatsTable<u8>) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn ability_on(mut self, on: bool) -> Self {
        self.ability_on = on;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set current HP (for partially damaged combatants)
    pub fn current_hp(mut self, hp: u16) -> Self {
        self.cur_hp = Some(hp);
        self
    }

    pub fn boost(mut self, stat: StatId, stage: i8) -> Self {
        self.boosts.set(stat, stage);
        self
    }

    /// Weight in hectograms.
    pub fn weight(mut self, hectograms: u32) -> Self {
        self.weight = hectograms;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn cur_hp(&self) -> u16 {
        self.cur_hp.unwrap_or(self.stats.hp)
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.0 == t || self.types.1 == Some(t)
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability == Some(ability)
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.item == Some(item)
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Reject values the engine must never see.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.level) {
            return Err(CalcError::InvalidLevel {
                name: self.name.clone(),
                level: self.level,
            });
        }
        if self.stats.hp == 0 {
            return Err(CalcError::ZeroMaxHp { name: self.name.clone() });
        }
        if self.cur_hp() > self.max_hp() {
            return Err(CalcError::InvalidHp {
                name: self.name.clone(),
                cur: self.cur_hp(),
                max: self.max_hp(),
            });
        }
        if let Some((stat, value)) = self.boosts.out_of_range() {
            return Err(CalcError::BoostOutOfRange {
                name: self.name.clone(),
                stat,
                value,
            });
        }
        Ok(())
    }
}
