//! Field state: weather, gravity and the two sides.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::types::Type;

/// Weather conditions present in DPP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
}

impl Weather {
    /// Type Weather Ball (and Castform's Forecast) takes under this weather.
    pub const fn weather_ball_type(weather: Option<Weather>) -> Type {
        match weather {
            Some(Weather::Sun) => Type::Fire,
            Some(Weather::Rain) => Type::Water,
            Some(Weather::Sand) => Type::Rock,
            Some(Weather::Hail) => Type::Ice,
            None => Type::Normal,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sand",
            Weather::Hail => "Hail",
        }
    }
}

impl FromStr for Weather {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" | "sunny" | "harsh sunshine" => Ok(Weather::Sun),
            "rain" | "rainy" => Ok(Weather::Rain),
            "sand" | "sandstorm" => Ok(Weather::Sand),
            "hail" => Ok(Weather::Hail),
            _ => Err(CalcError::UnknownWeather(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameType {
    #[default]
    Singles,
    Doubles,
}

/// Which way a Pursuit target is switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchDirection {
    In,
    Out,
}

bitflags::bitflags! {
    /// Side conditions that matter to a single damage calculation
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SideConditions: u16 {
        const REFLECT      = 1 << 0;
        const LIGHT_SCREEN = 1 << 1;
        const PROTECTED    = 1 << 2;
        const HELPING_HAND = 1 << 3;
        /// Foresight / Odor Sleuth on this side's active battler
        const FORESIGHT    = 1 << 4;
        const TAILWIND     = 1 << 5;
        /// An ally's Flower Gift is active
        const FLOWER_GIFT  = 1 << 6;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Side {
    pub conditions: SideConditions,
    pub switching: Option<SwitchDirection>,
}

impl Side {
    pub fn with(conditions: SideConditions) -> Self {
        Self {
            conditions,
            switching: None,
        }
    }

    #[inline]
    pub fn has(&self, condition: SideConditions) -> bool {
        self.conditions.contains(condition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Field {
    pub game_type: GameType,
    pub weather: Option<Weather>,
    pub is_gravity: bool,
    pub attacker_side: Side,
    pub defender_side: Side,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn doubles(mut self) -> Self {
        self.game_type = GameType::Doubles;
        self
    }

    pub fn gravity(mut self) -> Self {
        self.is_gravity = true;
        self
    }

    pub fn attacker_side(mut self, side: Side) -> Self {
        self.attacker_side = side;
        self
    }

    pub fn defender_side(mut self, side: Side) -> Self {
        self.defender_side = side;
        self
    }

    pub fn is_singles(&self) -> bool {
        self.game_type == GameType::Singles
    }

    pub fn has_weather(&self, weather: Weather) -> bool {
        self.weather == Some(weather)
    }

    /// Field as seen from the defender.
    pub fn swapped(&self) -> Self {
        Self {
            attacker_side: self.defender_side,
            defender_side: self.attacker_side,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_ball_types() {
        assert_eq!(Weather::weather_ball_type(Some(Weather::Sun)), Type::Fire);
        assert_eq!(Weather::weather_ball_type(Some(Weather::Hail)), Type::Ice);
        assert_eq!(Weather::weather_ball_type(None), Type::Normal);
    }

    #[test]
    fn test_weather_parse() {
        assert_eq!("Sandstorm".parse::<Weather>().unwrap(), Weather::Sand);
        assert!("Snow".parse::<Weather>().is_err());
    }

    #[test]
    fn test_swapped() {
        let field = Field::new()
            .weather(Weather::Rain)
            .defender_side(Side::with(SideConditions::REFLECT));
        let swapped = field.swapped();
        assert!(swapped.attacker_side.has(SideConditions::REFLECT));
        assert!(!swapped.defender_side.has(SideConditions::REFLECT));
        assert_eq!(swapped.weather, Some(Weather::Rain));
    }

    #[test]
    fn test_deserialize_side() {
        let field: Field = serde_json::from_str(
            r#"{"gameType": "Doubles", "weather": "Sun", "defenderSide": {"conditions": "REFLECT | LIGHT_SCREEN"}}"#,
        )
        .unwrap();
        assert!(!field.is_singles());
        assert!(field.defender_side.has(SideConditions::REFLECT | SideConditions::LIGHT_SCREEN));
    }
}
