//! Every ability that exists in Diamond/Pearl/Platinum.

use crate::catalog::catalog;

catalog! {
    pub enum Ability via ABILITIES_BY_NAME, UnknownAbility {
        Adaptability => "Adaptability",
        Aftermath => "Aftermath",
        AirLock => "Air Lock",
        AngerPoint => "Anger Point",
        Anticipation => "Anticipation",
        ArenaTrap => "Arena Trap",
        BadDreams => "Bad Dreams",
        BattleArmor => "Battle Armor",
        Blaze => "Blaze",
        Chlorophyll => "Chlorophyll",
        ClearBody => "Clear Body",
        CloudNine => "Cloud Nine",
        ColorChange => "Color Change",
        CompoundEyes => "Compound Eyes",
        CuteCharm => "Cute Charm",
        Damp => "Damp",
        Download => "Download",
        Drizzle => "Drizzle",
        Drought => "Drought",
        DrySkin => "Dry Skin",
        EarlyBird => "Early Bird",
        EffectSpore => "Effect Spore",
        Filter => "Filter",
        FlameBody => "Flame Body",
        FlashFire => "Flash Fire",
        FlowerGift => "Flower Gift",
        Forecast => "Forecast",
        Forewarn => "Forewarn",
        Frisk => "Frisk",
        Gluttony => "Gluttony",
        Guts => "Guts",
        Heatproof => "Heatproof",
        HoneyGather => "Honey Gather",
        HugePower => "Huge Power",
        Hustle => "Hustle",
        Hydration => "Hydration",
        HyperCutter => "Hyper Cutter",
        IceBody => "Ice Body",
        Illuminate => "Illuminate",
        Immunity => "Immunity",
        InnerFocus => "Inner Focus",
        Insomnia => "Insomnia",
        Intimidate => "Intimidate",
        IronFist => "Iron Fist",
        KeenEye => "Keen Eye",
        Klutz => "Klutz",
        LeafGuard => "Leaf Guard",
        Levitate => "Levitate",
        LightningRod => "Lightning Rod",
        Limber => "Limber",
        LiquidOoze => "Liquid Ooze",
        MagicGuard => "Magic Guard",
        MagmaArmor => "Magma Armor",
        MagnetPull => "Magnet Pull",
        MarvelScale => "Marvel Scale",
        Minus => "Minus",
        MoldBreaker => "Mold Breaker",
        MotorDrive => "Motor Drive",
        Multitype => "Multitype",
        NaturalCure => "Natural Cure",
        NoGuard => "No Guard",
        Normalize => "Normalize",
        Oblivious => "Oblivious",
        Overgrow => "Overgrow",
        OwnTempo => "Own Tempo",
        Pickup => "Pickup",
        Plus => "Plus",
        PoisonHeal => "Poison Heal",
        PoisonPoint => "Poison Point",
        Pressure => "Pressure",
        PurePower => "Pure Power",
        QuickFeet => "Quick Feet",
        RainDish => "Rain Dish",
        Reckless => "Reckless",
        Rivalry => "Rivalry",
        RockHead => "Rock Head",
        RoughSkin => "Rough Skin",
        RunAway => "Run Away",
        SandStream => "Sand Stream",
        SandVeil => "Sand Veil",
        Scrappy => "Scrappy",
        SereneGrace => "Serene Grace",
        ShadowTag => "Shadow Tag",
        ShedSkin => "Shed Skin",
        ShellArmor => "Shell Armor",
        ShieldDust => "Shield Dust",
        Simple => "Simple",
        SkillLink => "Skill Link",
        SlowStart => "Slow Start",
        Sniper => "Sniper",
        SnowCloak => "Snow Cloak",
        SnowWarning => "Snow Warning",
        SolarPower => "Solar Power",
        SolidRock => "Solid Rock",
        Soundproof => "Soundproof",
        SpeedBoost => "Speed Boost",
        Stall => "Stall",
        Static => "Static",
        Steadfast => "Steadfast",
        Stench => "Stench",
        StickyHold => "Sticky Hold",
        StormDrain => "Storm Drain",
        Sturdy => "Sturdy",
        SuctionCups => "Suction Cups",
        SuperLuck => "Super Luck",
        Swarm => "Swarm",
        SwiftSwim => "Swift Swim",
        Synchronize => "Synchronize",
        TangledFeet => "Tangled Feet",
        Technician => "Technician",
        ThickFat => "Thick Fat",
        TintedLens => "Tinted Lens",
        Torrent => "Torrent",
        Trace => "Trace",
        Truant => "Truant",
        Unaware => "Unaware",
        Unburden => "Unburden",
        VitalSpirit => "Vital Spirit",
        VoltAbsorb => "Volt Absorb",
        WaterAbsorb => "Water Absorb",
        WaterVeil => "Water Veil",
        WhiteSmoke => "White Smoke",
        WonderGuard => "Wonder Guard",
    }
}

impl Ability {
    /// Abilities Mold Breaker ignores on the target.
    pub const fn is_breakable(self) -> bool {
        use Ability::*;
        matches!(
            self,
            BattleArmor
                | ClearBody
                | Damp
                | DrySkin
                | Filter
                | FlashFire
                | FlowerGift
                | Heatproof
                | HyperCutter
                | Immunity
                | InnerFocus
                | Insomnia
                | KeenEye
                | LeafGuard
                | Levitate
                | LightningRod
                | Limber
                | MagmaArmor
                | MarvelScale
                | MotorDrive
                | Oblivious
                | OwnTempo
                | SandVeil
                | ShellArmor
                | ShieldDust
                | Simple
                | SnowCloak
                | SolidRock
                | Soundproof
                | StickyHold
                | StormDrain
                | Sturdy
                | SuctionCups
                | TangledFeet
                | ThickFat
                | Unaware
                | VitalSpirit
                | VoltAbsorb
                | WaterAbsorb
                | WaterVeil
                | WhiteSmoke
                | WonderGuard
        )
    }

    /// Suppresses weather while on the field.
    pub const fn negates_weather(self) -> bool {
        matches!(self, Ability::AirLock | Ability::CloudNine)
    }

    /// Blocks Intimidate's attack drop.
    pub const fn blocks_intimidate(self) -> bool {
        matches!(self, Ability::ClearBody | Ability::WhiteSmoke | Ability::HyperCutter)
    }

    /// Prevents critical hits.
    pub const fn blocks_crits(self) -> bool {
        matches!(self, Ability::BattleArmor | Ability::ShellArmor)
    }
}
