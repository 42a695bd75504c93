use super::*;
use crate::damage::{DamageContext, Gen4};
use crate::desc::RawDesc;
use crate::field::{Field, Side, SwitchDirection};
use crate::items::Item;
use crate::moves::Move;
use crate::pokemon::{Combatant, Status};
use crate::stats::{StatId, StatsTable};

fn bp(attacker: &Combatant, defender: &Combatant, mv: &Move) -> (u16, RawDesc) {
    let mut desc = RawDesc::default();
    let power = base_power(attacker, defender, mv, &Field::default(), &mut desc, 1);
    (power, desc)
}

#[test]
fn test_fixed_damage_moves() {
    let attacker = Combatant::new("Blissey").level(50);

    let toss = Move::new("Seismic Toss", Type::Fighting, MoveCategory::Physical, 0);
    assert_eq!(get_fixed_damage(&attacker, &toss), Some(50));

    let rage = Move::new("Dragon Rage", Type::Dragon, MoveCategory::Special, 0);
    assert_eq!(get_fixed_damage(&attacker, &rage), Some(40));

    let boom = Move::new("Sonic Boom", Type::Normal, MoveCategory::Special, 0);
    assert_eq!(get_fixed_damage(&attacker, &boom), Some(20));

    let psywave = Move::new("Psywave", Type::Psychic, MoveCategory::Special, 0);
    assert_eq!(get_fixed_damage(&attacker, &psywave), Some(75));

    let tackle = Move::new("Tackle", Type::Normal, MoveCategory::Physical, 35);
    assert_eq!(get_fixed_damage(&attacker, &tackle), None);
}

#[test]
fn test_pain_split() {
    let attacker = Combatant::new("Gengar").stats(StatsTable::splat(100));
    let defender = Combatant::new("Blissey").stats(StatsTable::splat(100)).current_hp(50);
    assert_eq!(pain_split(&attacker, &defender), 0);

    let low = Combatant::new("Gengar").stats(StatsTable::splat(100)).current_hp(20);
    let full = Combatant::new("Blissey").stats(StatsTable::splat(100));
    assert_eq!(pain_split(&low, &full), 40);
}

#[test]
fn test_hp_scaled_power() {
    let eruption = Move::new("Eruption", Type::Fire, MoveCategory::Special, 150);
    let quarter = Combatant::new("Heatran").stats(StatsTable::splat(100)).current_hp(25);
    let (power, desc) = bp(&quarter, &Combatant::new("Target"), &eruption);
    assert_eq!(power, 37);
    assert_eq!(desc.move_bp, Some(37));

    let fainting = Combatant::new("Heatran").stats(StatsTable::splat(300)).current_hp(1);
    assert_eq!(bp(&fainting, &Combatant::new("Target"), &eruption).0, 1);
}

#[test]
fn test_flail_tiers() {
    let flail = Move::new("Flail", Type::Normal, MoveCategory::Physical, 0);
    let target = Combatant::new("Target");
    let at = |hp: u16| Combatant::new("Magikarp").stats(StatsTable::splat(64)).current_hp(hp);
    assert_eq!(bp(&at(1), &target, &flail).0, 200);
    assert_eq!(bp(&at(5), &target, &flail).0, 150);
    assert_eq!(bp(&at(12), &target, &flail).0, 100);
    assert_eq!(bp(&at(21), &target, &flail).0, 80);
    assert_eq!(bp(&at(42), &target, &flail).0, 40);
    assert_eq!(bp(&at(64), &target, &flail).0, 20);
}

#[test]
fn test_weight_tiers() {
    let grass_knot = Move::new("Grass Knot", Type::Grass, MoveCategory::Special, 0);
    let attacker = Combatant::new("Celebi");
    let at = |hg: u32| Combatant::new("Target").weight(hg);
    // boundary weights select the heavier tier
    assert_eq!(bp(&attacker, &at(1000), &grass_knot).0, 100);
    assert_eq!(bp(&attacker, &at(999), &grass_knot).0, 80);
    assert_eq!(bp(&attacker, &at(2000), &grass_knot).0, 120);
    assert_eq!(bp(&attacker, &at(99), &grass_knot).0, 20);
}

#[test]
fn test_speed_dependent_power() {
    let fast = Combatant::new("Fast").stats(StatsTable { spe: 300, ..StatsTable::splat(100) });
    let slow = Combatant::new("Slow").stats(StatsTable { spe: 50, ..StatsTable::splat(100) });

    let gyro = Move::new("Gyro Ball", Type::Steel, MoveCategory::Physical, 0);
    assert_eq!(bp(&slow, &fast, &gyro).0, 150);
    assert_eq!(bp(&fast, &slow, &gyro).0, 4);

    let payback = Move::new("Payback", Type::Dark, MoveCategory::Physical, 50);
    assert_eq!(bp(&slow, &fast, &payback).0, 100);
    assert_eq!(bp(&fast, &slow, &payback).0, 50);
    // a speed tie moves last
    assert_eq!(bp(&fast, &fast, &payback).0, 100);
}

#[test]
fn test_status_dependent_power() {
    let facade = Move::new("Facade", Type::Normal, MoveCategory::Physical, 70);
    let target = Combatant::new("Target");
    assert_eq!(bp(&Combatant::new("Ursaring").status(Status::Burn), &target, &facade).0, 140);
    assert_eq!(bp(&Combatant::new("Ursaring").status(Status::Sleep), &target, &facade).0, 70);

    let slap = Move::new("Wake-Up Slap", Type::Fighting, MoveCategory::Physical, 60);
    let sleeping = Combatant::new("Target").status(Status::Sleep);
    assert_eq!(bp(&Combatant::new("Hariyama"), &sleeping, &slap).0, 120);
}

#[test]
fn test_doubling_out_of_range_power_saturates() {
    let facade = Move::new("Facade", Type::Normal, MoveCategory::Physical, 40000);
    let burned = Combatant::new("Ursaring").status(Status::Burn);
    assert_eq!(bp(&burned, &Combatant::new("Target"), &facade).0, u16::MAX);
    assert!(facade.validate().is_err());
}

#[test]
fn test_punishment() {
    let punishment = Move::new("Punishment", Type::Dark, MoveCategory::Physical, 0);
    let boosted = Combatant::new("Target").boost(StatId::Atk, 2).boost(StatId::Spe, 1).boost(StatId::Def, -1);
    assert_eq!(bp(&Combatant::new("Weavile"), &boosted, &punishment).0, 120);

    let maxed = Combatant::new("Target").boost(StatId::Atk, 6).boost(StatId::Spa, 6);
    assert_eq!(bp(&Combatant::new("Weavile"), &maxed, &punishment).0, 200);
}

#[test]
fn test_pursuit_switching() {
    let pursuit = Move::new("Pursuit", Type::Dark, MoveCategory::Physical, 40);
    let field = Field::new().defender_side(Side { switching: Some(SwitchDirection::Out), ..Side::default() });
    let mut desc = RawDesc::default();
    let power = base_power(&Combatant::new("Tyranitar"), &Combatant::new("Latias"), &pursuit, &field, &mut desc, 1);
    assert_eq!(power, 80);
    assert_eq!(desc.is_switching, Some(SwitchDirection::Out));
}

#[test]
fn test_target_hp_ratio() {
    let grip = Move::new("Crush Grip", Type::Normal, MoveCategory::Physical, 0);
    let full = Combatant::new("Target").stats(StatsTable::splat(200));
    assert_eq!(bp(&Combatant::new("Regigigas"), &full, &grip).0, 121);
    let half = Combatant::new("Target").stats(StatsTable::splat(200)).current_hp(100);
    assert_eq!(bp(&Combatant::new("Regigigas"), &half, &grip).0, 61);
}

#[test]
fn test_triple_kick_per_hit() {
    let kick = Move::new("Triple Kick", Type::Fighting, MoveCategory::Physical, 10).hits(3);
    let attacker = Combatant::new("Hitmontop");
    let defender = Combatant::new("Target");
    let mut desc = RawDesc::default();
    let field = Field::default();
    assert_eq!(base_power(&attacker, &defender, &kick, &field, &mut desc, 1), 10);
    assert_eq!(base_power(&attacker, &defender, &kick, &field, &mut desc, 2), 20);
    assert_eq!(base_power(&attacker, &defender, &kick, &field, &mut desc, 3), 30);
    assert_eq!(desc.move_bp, Some(60));
}

#[test]
fn test_fling() {
    let fling = Move::new("Fling", Type::Dark, MoveCategory::Physical, 0);
    let (power, desc) = bp(&Combatant::new("Ambipom").item(Item::IronBall), &Combatant::new("Target"), &fling);
    assert_eq!(power, 130);
    assert_eq!(desc.attacker_item, Some(Item::IronBall));
    assert_eq!(bp(&Combatant::new("Ambipom"), &Combatant::new("Target"), &fling).0, 0);
}

#[test]
fn test_nature_power_becomes_tri_attack() {
    let nature_power = Move::new("Nature Power", Type::Normal, MoveCategory::Status, 0);
    let (power, desc) = bp(&Combatant::new("Shaymin"), &Combatant::new("Target"), &nature_power);
    assert_eq!(power, 80);
    assert_eq!(desc.move_name, "Tri Attack");
}

#[test]
fn test_unlisted_move_keeps_power() {
    let tackle = Move::new("Tackle", Type::Normal, MoveCategory::Physical, 35);
    let (power, desc) = bp(&Combatant::new("A"), &Combatant::new("B"), &tackle);
    assert_eq!(power, 35);
    assert_eq!(desc.move_bp, None);
    assert!(!is_variable_power(&tackle));
}

fn resolved(attacker: Combatant, mv: Move, field: Field) -> DamageContext<Gen4> {
    let mut ctx = DamageContext::new(Gen4, &attacker, &Combatant::new("Target"), &mv, &field);
    resolve_move(&mut ctx);
    ctx
}

#[test]
fn test_weather_ball_type() {
    let ball = Move::new("Weather Ball", Type::Normal, MoveCategory::Special, 50);
    let ctx = resolved(Combatant::new("Castform"), ball.clone(), Field::new().weather(Weather::Hail));
    assert_eq!(ctx.mv.move_type, Type::Ice);
    assert_eq!(ctx.desc.move_type, Some(Type::Ice));

    let ctx = resolved(Combatant::new("Castform"), ball, Field::default());
    assert_eq!(ctx.mv.move_type, Type::Normal);
}

#[test]
fn test_judgment_and_natural_gift() {
    let judgment = Move::new("Judgment", Type::Normal, MoveCategory::Special, 100);
    let ctx = resolved(Combatant::new("Arceus").item(Item::SplashPlate), judgment, Field::default());
    assert_eq!(ctx.mv.move_type, Type::Water);

    let gift = Move::new("Natural Gift", Type::Normal, MoveCategory::Physical, 1);
    let ctx = resolved(Combatant::new("Snorlax").item(Item::LiechiBerry), gift, Field::default());
    assert_eq!(ctx.mv.move_type, Type::Grass);
    assert_eq!(ctx.mv.base_power, 80);
    assert_eq!(ctx.desc.move_bp, Some(80));
}

#[test]
fn test_brick_break_removes_screens() {
    let brick_break = Move::new("Brick Break", Type::Fighting, MoveCategory::Physical, 75);
    let screens = Side::with(SideConditions::REFLECT | SideConditions::LIGHT_SCREEN);
    let ctx = resolved(Combatant::new("Machamp"), brick_break, Field::new().defender_side(screens));
    assert!(!ctx.field.defender_side.has(SideConditions::REFLECT));
    assert!(!ctx.field.defender_side.has(SideConditions::LIGHT_SCREEN));
}

#[test]
fn test_normalize() {
    let thunderbolt = Move::new("Thunderbolt", Type::Electric, MoveCategory::Special, 95);
    let ctx = resolved(Combatant::new("Delcatty").ability(Ability::Normalize), thunderbolt, Field::default());
    assert_eq!(ctx.mv.move_type, Type::Normal);
    assert_eq!(ctx.desc.attacker_ability, Some(Ability::Normalize));

    let struggle = Move::new("Struggle", Type::Typeless, MoveCategory::Physical, 50);
    let ctx = resolved(Combatant::new("Delcatty").ability(Ability::Normalize), struggle, Field::default());
    assert_eq!(ctx.mv.move_type, Type::Typeless);
}
