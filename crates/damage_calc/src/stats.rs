//! Stat identifiers, stat tables, stage boosts and the stat formula.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::natures::Nature;

/// The six permanent stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatId {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatId {
    pub const ALL: [StatId; 6] = [
        StatId::Hp,
        StatId::Atk,
        StatId::Def,
        StatId::Spa,
        StatId::Spd,
        StatId::Spe,
    ];

    /// Short display name used in descriptions ("SpA", "Spe", ...).
    pub const fn display(self) -> &'static str {
        match self {
            StatId::Hp => "HP",
            StatId::Atk => "Atk",
            StatId::Def => "Def",
            StatId::Spa => "SpA",
            StatId::Spd => "SpD",
            StatId::Spe => "Spe",
        }
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// One value per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsTable<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

impl<T: Copy> StatsTable<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: StatId) -> T {
        match stat {
            StatId::Hp => self.hp,
            StatId::Atk => self.atk,
            StatId::Def => self.def,
            StatId::Spa => self.spa,
            StatId::Spd => self.spd,
            StatId::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: StatId, value: T) {
        match stat {
            StatId::Hp => self.hp = value,
            StatId::Atk => self.atk = value,
            StatId::Def => self.def = value,
            StatId::Spa => self.spa = value,
            StatId::Spd => self.spd = value,
            StatId::Spe => self.spe = value,
        }
    }
}

/// Temporary stat stages, each in [-6, 6]. HP has no stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Boosts {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
}

impl Boosts {
    pub const BOOSTABLE: [StatId; 5] = [
        StatId::Atk,
        StatId::Def,
        StatId::Spa,
        StatId::Spd,
        StatId::Spe,
    ];

    pub fn get(&self, stat: StatId) -> i8 {
        match stat {
            StatId::Hp => 0,
            StatId::Atk => self.atk,
            StatId::Def => self.def,
            StatId::Spa => self.spa,
            StatId::Spd => self.spd,
            StatId::Spe => self.spe,
        }
    }

    /// Sets a stage, clamping into [-6, 6]. Writes to HP are ignored.
    pub fn set(&mut self, stat: StatId, value: i8) {
        let value = value.clamp(-6, 6);
        match stat {
            StatId::Hp => {}
            StatId::Atk => self.atk = value,
            StatId::Def => self.def = value,
            StatId::Spa => self.spa = value,
            StatId::Spd => self.spd = value,
            StatId::Spe => self.spe = value,
        }
    }

    /// Shifts a stage by `delta`, saturating at the bounds.
    pub fn shift(&mut self, stat: StatId, delta: i8) {
        self.set(stat, self.get(stat).saturating_add(delta));
    }

    /// Sum of all positive stages (Punishment's counter).
    pub fn count_positive(&self) -> u32 {
        Self::BOOSTABLE
            .iter()
            .map(|&s| self.get(s).max(0) as u32)
            .sum()
    }

    /// First stage outside [-6, 6], if any.
    pub fn out_of_range(&self) -> Option<(StatId, i8)> {
        Self::BOOSTABLE
            .iter()
            .map(|&s| (s, self.get(s)))
            .find(|(_, v)| !(-6..=6).contains(v))
    }
}

/// Computes a stat from base stat, IV, EV, level and nature.
///
/// HP: `floor((2B + I + floor(E/4)) * L / 100) + L + 10`.
/// Others: `floor((floor((2B + I + floor(E/4)) * L / 100) + 5) * nature)`.
pub fn calc_stat(stat: StatId, base: u16, iv: u8, ev: u8, level: u8, nature: Nature) -> u16 {
    let core = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100;
    let value = match stat {
        StatId::Hp if base == 1 => 1, // Shedinja
        StatId::Hp => core + level as u32 + 10,
        _ => (core + 5) * nature.stat_modifier(stat) as u32 / 10,
    };
    value.min(u16::MAX as u32) as u16
}

/// Renders "252+ Atk", "0 HP" or "4- SpD 0 IVs".
pub fn stat_description(stat: StatId, ev: u8, iv: u8, nature: Nature) -> String {
    let marker = match nature.stat_modifier(stat) {
        11 => "+",
        9 => "-",
        _ => "",
    };
    if iv == 31 {
        format!("{ev}{marker} {stat}")
    } else {
        format!("{ev}{marker} {stat} {iv} IVs")
    }
}
