//! Elemental types and the Generation 4 type chart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// The seventeen DPP types plus the typeless `???` used by Curse and Struggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    #[default]
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    #[serde(rename = "???")]
    Typeless = 17,
}

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Typeless,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Typeless => "???",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Type> {
        Type::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Position in the order the cartridge evaluates a dual-typed defender.
    ///
    /// The typeless marker sorts ahead of everything.
    pub const fn precedence(self) -> i8 {
        match self {
            Type::Typeless => -1,
            Type::Normal => 0,
            Type::Fire => 1,
            Type::Water => 2,
            Type::Electric => 3,
            Type::Grass => 4,
            Type::Ice => 5,
            Type::Fighting => 6,
            Type::Poison => 7,
            Type::Ground => 8,
            Type::Flying => 9,
            Type::Psychic => 10,
            Type::Bug => 11,
            Type::Rock => 12,
            Type::Ghost => 13,
            Type::Dragon => 14,
            Type::Dark => 15,
            Type::Steel => 16,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s).ok_or_else(|| CalcError::UnknownType(s.to_string()))
    }
}

/// Effectiveness of one attacking type against one defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum TypeEffectiveness {
    Immune = 0,
    NotVeryEffective = 1,
    Neutral = 2,
    SuperEffective = 4,
}

impl TypeEffectiveness {
    /// Multiplier in half steps (2 = 1x).
    #[inline]
    pub const fn halves(self) -> u8 {
        self as u8
    }

    /// `floor(damage * multiplier)`
    #[inline]
    pub const fn apply(self, damage: u32) -> u32 {
        crate::damage::sat32(damage as u64 * self.halves() as u64 / 2)
    }
}

/// DPP single-type matchup (Steel still resists Ghost and Dark).
pub const fn type_chart(attacking: Type, defending: Type) -> TypeEffectiveness {
    use Type::*;
    use TypeEffectiveness::*;

    match (attacking, defending) {
        (Typeless, _) | (_, Typeless) => Neutral,

        (Normal, Rock | Steel) => NotVeryEffective,
        (Normal, Ghost) => Immune,

        (Fighting, Normal | Rock | Steel | Ice | Dark) => SuperEffective,
        (Fighting, Flying | Poison | Bug | Psychic) => NotVeryEffective,
        (Fighting, Ghost) => Immune,

        (Flying, Fighting | Bug | Grass) => SuperEffective,
        (Flying, Rock | Steel | Electric) => NotVeryEffective,

        (Poison, Grass) => SuperEffective,
        (Poison, Poison | Ground | Rock | Ghost) => NotVeryEffective,
        (Poison, Steel) => Immune,

        (Ground, Poison | Rock | Steel | Fire | Electric) => SuperEffective,
        (Ground, Bug | Grass) => NotVeryEffective,
        (Ground, Flying) => Immune,

        (Rock, Flying | Bug | Fire | Ice) => SuperEffective,
        (Rock, Fighting | Ground | Steel) => NotVeryEffective,

        (Bug, Grass | Psychic | Dark) => SuperEffective,
        (Bug, Fighting | Flying | Poison | Ghost | Steel | Fire) => NotVeryEffective,

        (Ghost, Ghost | Psychic) => SuperEffective,
        (Ghost, Steel | Dark) => NotVeryEffective,
        (Ghost, Normal) => Immune,

        (Steel, Rock | Ice) => SuperEffective,
        (Steel, Steel | Fire | Water | Electric) => NotVeryEffective,

        (Fire, Bug | Steel | Grass | Ice) => SuperEffective,
        (Fire, Rock | Fire | Water | Dragon) => NotVeryEffective,

        (Water, Ground | Rock | Fire) => SuperEffective,
        (Water, Water | Grass | Dragon) => NotVeryEffective,

        (Grass, Ground | Rock | Water) => SuperEffective,
        (Grass, Flying | Poison | Bug | Steel | Fire | Grass | Dragon) => NotVeryEffective,

        (Electric, Flying | Water) => SuperEffective,
        (Electric, Grass | Electric | Dragon) => NotVeryEffective,
        (Electric, Ground) => Immune,

        (Psychic, Fighting | Poison) => SuperEffective,
        (Psychic, Steel | Psychic) => NotVeryEffective,
        (Psychic, Dark) => Immune,

        (Ice, Flying | Ground | Grass | Dragon) => SuperEffective,
        (Ice, Steel | Fire | Water | Ice) => NotVeryEffective,

        (Dragon, Dragon) => SuperEffective,
        (Dragon, Steel) => NotVeryEffective,

        (Dark, Ghost | Psychic) => SuperEffective,
        (Dark, Fighting | Steel | Dark) => NotVeryEffective,

        _ => Neutral,
    }
}

/// Combined chart lookup on the quarter scale (0=immune, 1=0.25x, 2=0.5x,
/// 4=1x, 8=2x, 16=4x).
pub fn type_effectiveness(attacking: Type, first: Type, second: Option<Type>) -> u8 {
    let first = type_chart(attacking, first).halves();
    let second = match second {
        Some(t) => type_chart(attacking, t).halves(),
        None => 2,
    };
    first * second
}
