//! The 25 natures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::stats::StatId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    const ORDER: [StatId; 5] = [StatId::Atk, StatId::Def, StatId::Spe, StatId::Spa, StatId::Spd];

    /// (raised, lowered). Neutral natures raise and lower the same stat.
    ///
    /// Natures are laid out in a 5x5 grid: row = raised stat, column = lowered.
    pub fn stats(self) -> (StatId, StatId) {
        let index = self as usize;
        (Self::ORDER[index / 5], Self::ORDER[index % 5])
    }

    pub fn is_neutral(self) -> bool {
        let (plus, minus) = self.stats();
        plus == minus
    }

    /// Multiplier in tenths: 11 raised, 9 lowered, 10 otherwise.
    pub fn stat_modifier(self, stat: StatId) -> u8 {
        let (plus, minus) = self.stats();
        if plus == minus || stat == StatId::Hp {
            10
        } else if stat == plus {
            11
        } else if stat == minus {
            9
        } else {
            10
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }
}

impl FromStr for Nature {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nature::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::UnknownNature(s.to_string()))
    }
}
