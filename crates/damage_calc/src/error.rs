//! Input-boundary errors.
//!
//! The damage computation itself never fails. Everything here is raised while
//! turning names and scenario files into typed inputs, or while validating a
//! `Combatant` or `Move` before it reaches the engine.

use thiserror::Error;

use crate::stats::StatId;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("unknown nature: {0}")]
    UnknownNature(String),

    #[error("unknown status condition: {0}")]
    UnknownStatus(String),

    #[error("unknown weather: {0}")]
    UnknownWeather(String),

    #[error("generation {0} is not supported")]
    UnsupportedGeneration(u8),

    #[error("{name}: {stat:?} boost {value} is outside [-6, 6]")]
    BoostOutOfRange { name: String, stat: StatId, value: i8 },

    #[error("{name}: level {level} is outside 1..=100")]
    InvalidLevel { name: String, level: u8 },

    #[error("{name}: current HP {cur} exceeds max HP {max}")]
    InvalidHp { name: String, cur: u16, max: u16 },

    #[error("{name}: base power {bp} is above {max}")]
    InvalidBasePower { name: String, bp: u16, max: u16 },

    #[error("{name}: max HP must be positive")]
    ZeroMaxHp { name: String },

    #[error("scenario error: {0}")]
    Scenario(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
