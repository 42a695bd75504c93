//! Priority-ordered modifier rules and their interpreter.
//!
//! A modifier chain is a list of slots. Each slot is an ordered list of rules;
//! the first rule in a slot whose predicate holds is applied (truncating) and
//! the rest of the slot is skipped. Slots are applied in order, each reading
//! the value produced by the previous one.

use tracing::trace;

use super::modifier::Modifier;
use crate::desc::{RawDesc, Rivalry};
use crate::field::Field;
use crate::moves::Move;
use crate::pokemon::Combatant;

/// Everything a rule predicate may look at.
#[derive(Clone, Copy)]
pub struct Step<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub mv: &'a Move,
    pub field: &'a Field,
    pub is_critical: bool,
    /// Value entering the slot (Technician reads the running base power)
    pub value: u32,
}

/// Description fact a rule records when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    AttackerAbility,
    AttackerItem,
    DefenderAbility,
    DefenderItem,
    HelpingHand,
    Weather,
    FlowerGiftAttacker,
    FlowerGiftDefender,
    RivalryBuffed,
    RivalryNerfed,
    Reflect,
    LightScreen,
}

impl Note {
    pub fn record(self, step: &Step<'_>, desc: &mut RawDesc) {
        match self {
            Note::AttackerAbility => desc.attacker_ability = step.attacker.ability,
            Note::AttackerItem => desc.attacker_item = step.attacker.item,
            Note::DefenderAbility => desc.defender_ability = step.defender.ability,
            Note::DefenderItem => desc.defender_item = step.defender.item,
            Note::HelpingHand => desc.is_helping_hand = true,
            Note::Weather => desc.weather = step.field.weather,
            Note::FlowerGiftAttacker => desc.is_flower_gift_attacker = true,
            Note::FlowerGiftDefender => desc.is_flower_gift_defender = true,
            Note::RivalryBuffed => desc.rivalry = Some(Rivalry::Buffed),
            Note::RivalryNerfed => desc.rivalry = Some(Rivalry::Nerfed),
            Note::Reflect => desc.is_reflect = true,
            Note::LightScreen => desc.is_light_screen = true,
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Step<'_>) -> bool,
    pub modifier: Modifier,
    pub notes: &'static [Note],
}

/// Mutually exclusive rules; first match wins.
pub type Slot = &'static [Rule];

/// First rule in `slot` that applies to `step`.
pub fn first_match<'r>(slot: &'r [Rule], step: &Step<'_>) -> Option<&'r Rule> {
    slot.iter().find(|rule| (rule.applies)(step))
}

/// Run `value` through `slots` in order, truncating after every multiplication.
pub fn apply_slots(slots: &[Slot], mut step: Step<'_>, desc: &mut RawDesc) -> u32 {
    for slot in slots {
        if let Some(rule) = first_match(slot, &step) {
            step.value = rule.modifier.apply(step.value);
            for note in rule.notes {
                note.record(&step, desc);
            }
            trace!(rule = rule.name, value = step.value, "modifier applied");
        }
    }
    step.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveCategory;
    use crate::types::Type;

    const BOOST_SLOT: Slot = &[
        Rule {
            name: "never",
            applies: |_| false,
            modifier: Modifier::TRIPLE,
            notes: &[],
        },
        Rule {
            name: "small",
            applies: |s| s.value <= 60,
            modifier: Modifier::ONE_POINT_FIVE,
            notes: &[Note::HelpingHand],
        },
        Rule {
            name: "shadowed",
            applies: |_| true,
            modifier: Modifier::DOUBLE,
            notes: &[],
        },
    ];

    const HALVE_SLOT: Slot = &[Rule {
        name: "halve",
        applies: |_| true,
        modifier: Modifier::HALF,
        notes: &[Note::Reflect],
    }];

    fn run(value: u32, slots: &[Slot]) -> (u32, RawDesc) {
        let attacker = Combatant::new("A");
        let defender = Combatant::new("B");
        let mv = Move::new("Tackle", Type::Normal, MoveCategory::Physical, 35);
        let field = Field::default();
        let mut desc = RawDesc::default();
        let step = Step {
            attacker: &attacker,
            defender: &defender,
            mv: &mv,
            field: &field,
            is_critical: false,
            value,
        };
        (apply_slots(slots, step, &mut desc), desc)
    }

    #[test]
    fn test_first_match_wins() {
        let (value, desc) = run(35, &[BOOST_SLOT]);
        assert_eq!(value, 52);
        assert!(desc.is_helping_hand);

        let (value, desc) = run(80, &[BOOST_SLOT]);
        assert_eq!(value, 160);
        assert!(!desc.is_helping_hand);
    }

    #[test]
    fn test_slots_chain_in_order() {
        let (value, desc) = run(35, &[BOOST_SLOT, HALVE_SLOT]);
        assert_eq!(value, 26);
        assert!(desc.is_reflect);

        // Halving first leaves 17, which then gets the 1.5x rule: 25
        let (value, _) = run(35, &[HALVE_SLOT, BOOST_SLOT]);
        assert_eq!(value, 25);
    }
}
