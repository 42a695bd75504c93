//! Description accumulator.
//!
//! The engine records which inputs mattered so that an external renderer can
//! produce "252+ Atk Choice Band Garchomp Earthquake vs. ..." style text. The
//! engine only writes here; no damage decision reads it back.

use serde::Serialize;

use crate::abilities::Ability;
use crate::field::{SwitchDirection, Weather};
use crate::items::Item;
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rivalry {
    Buffed,
    Nerfed,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDesc {
    pub attacker_name: String,
    pub defender_name: String,
    pub move_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacker_ability: Option<Ability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attacker_item: Option<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_ability: Option<Ability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defender_item: Option<Item>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_boost: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense_boost: Option<i8>,
    #[serde(rename = "attackEVs", skip_serializing_if = "Option::is_none")]
    pub attack_evs: Option<String>,
    #[serde(rename = "defenseEVs", skip_serializing_if = "Option::is_none")]
    pub defense_evs: Option<String>,
    #[serde(rename = "HPEVs", skip_serializing_if = "Option::is_none")]
    pub hp_evs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_bp: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_type: Option<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_turns: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_switching: Option<SwitchDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rivalry: Option<Rivalry>,

    #[serde(skip_serializing_if = "is_false")]
    pub is_burned: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_critical: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_helping_hand: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_flower_gift_attacker: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_flower_gift_defender: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_reflect: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_light_screen: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_protected: bool,
}

impl RawDesc {
    pub fn new(attacker: &str, defender: &str, move_name: &str) -> Self {
        Self {
            attacker_name: attacker.to_string(),
            defender_name: defender.to_string(),
            move_name: move_name.to_string(),
            ..Self::default()
        }
    }
}
