//! Moves as supplied by the caller's move data.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::types::Type;

/// Move power is a single byte in the DPP move table.
pub const MAX_BASE_POWER: u16 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
    Status,
}

/// Targeting shape. Only the spread shapes matter to damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveTarget {
    #[default]
    Normal,
    AllAdjacent,
    AllAdjacentFoes,
}

impl MoveTarget {
    pub const fn is_spread(self) -> bool {
        matches!(self, MoveTarget::AllAdjacent | MoveTarget::AllAdjacentFoes)
    }
}

bitflags! {
    /// Move flags (contact, sound, punch, etc.)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoveFlags: u8 {
        const CONTACT = 0x01;
        const SOUND   = 0x02;
        const PUNCH   = 0x04;
        const PROTECT = 0x08;
    }
}

/// A single use of a move.
///
/// `base_power` and `move_type` are the tabulated values; the engine's working
/// copy may rewrite both for Weather Ball, Judgment, Natural Gift and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(rename = "bp")]
    pub base_power: u16,
    /// Number of hits in this use (1 for single-hit moves)
    pub hits: u8,
    /// Consecutive uses being evaluated (Overheat used twice, etc.)
    pub times_used: u8,
    pub flags: MoveFlags,
    pub target: MoveTarget,
    pub is_crit: bool,
    pub breaks_protect: bool,
    pub recoil: bool,
    pub has_crash_damage: bool,
    /// Stages of the user's attacking stat dropped after each use
    pub drops_stats: u8,
}

impl Default for Move {
    fn default() -> Self {
        Self {
            name: String::new(),
            move_type: Type::Normal,
            category: MoveCategory::Physical,
            base_power: 0,
            hits: 1,
            times_used: 1,
            flags: MoveFlags::empty(),
            target: MoveTarget::Normal,
            is_crit: false,
            breaks_protect: false,
            recoil: false,
            has_crash_damage: false,
            drops_stats: 0,
        }
    }
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: Type, category: MoveCategory, base_power: u16) -> Self {
        Self {
            name: name.into(),
            move_type,
            category,
            base_power,
            ..Self::default()
        }
    }

    pub fn hits(mut self, hits: u8) -> Self {
        self.hits = hits.max(1);
        self
    }

    pub fn times_used(mut self, times: u8) -> Self {
        self.times_used = times.max(1);
        self
    }

    /// Reject a tabulated power no DPP move can have.
    pub fn validate(&self) -> Result<()> {
        if self.base_power > MAX_BASE_POWER {
            return Err(CalcError::InvalidBasePower {
                name: self.name.clone(),
                bp: self.base_power,
                max: MAX_BASE_POWER,
            });
        }
        Ok(())
    }

    pub fn flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn target(mut self, target: MoveTarget) -> Self {
        self.target = target;
        self
    }

    pub fn crit(mut self, is_crit: bool) -> Self {
        self.is_crit = is_crit;
        self
    }

    pub fn breaks_protect(mut self) -> Self {
        self.breaks_protect = true;
        self
    }

    pub fn recoil(mut self) -> Self {
        self.recoil = true;
        self
    }

    pub fn crash_damage(mut self) -> Self {
        self.has_crash_damage = true;
        self
    }

    pub fn drops_stats(mut self, stages: u8) -> Self {
        self.drops_stats = stages;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn named(&self, names: &[&str]) -> bool {
        names.iter().any(|n| self.name == *n)
    }

    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    pub fn is_special(&self) -> bool {
        self.category == MoveCategory::Special
    }

    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    /// Number of damage spreads this use produces.
    pub fn is_multi(&self) -> bool {
        self.hits > 1 || self.times_used > 1
    }
}
