//! Held items relevant to Generation 4 battles, and their data lookups.

use crate::catalog::catalog;
use crate::types::Type;

catalog! {
    pub enum Item via ITEMS_BY_NAME, UnknownItem {
        // Type boosters
        SilkScarf => "Silk Scarf",
        BlackBelt => "Black Belt",
        SharpBeak => "Sharp Beak",
        PoisonBarb => "Poison Barb",
        SoftSand => "Soft Sand",
        HardStone => "Hard Stone",
        SilverPowder => "Silver Powder",
        SpellTag => "Spell Tag",
        MetalCoat => "Metal Coat",
        Charcoal => "Charcoal",
        MysticWater => "Mystic Water",
        MiracleSeed => "Miracle Seed",
        Magnet => "Magnet",
        TwistedSpoon => "Twisted Spoon",
        NeverMeltIce => "Never-Melt Ice",
        DragonFang => "Dragon Fang",
        BlackGlasses => "Black Glasses",
        SeaIncense => "Sea Incense",
        WaveIncense => "Wave Incense",
        OddIncense => "Odd Incense",
        RockIncense => "Rock Incense",
        RoseIncense => "Rose Incense",

        // Plates
        FlamePlate => "Flame Plate",
        SplashPlate => "Splash Plate",
        ZapPlate => "Zap Plate",
        MeadowPlate => "Meadow Plate",
        IciclePlate => "Icicle Plate",
        FistPlate => "Fist Plate",
        ToxicPlate => "Toxic Plate",
        EarthPlate => "Earth Plate",
        SkyPlate => "Sky Plate",
        MindPlate => "Mind Plate",
        InsectPlate => "Insect Plate",
        StonePlate => "Stone Plate",
        SpookyPlate => "Spooky Plate",
        DracoPlate => "Draco Plate",
        DreadPlate => "Dread Plate",
        IronPlate => "Iron Plate",

        // Legendary orbs and species items
        AdamantOrb => "Adamant Orb",
        LustrousOrb => "Lustrous Orb",
        GriseousOrb => "Griseous Orb",
        SoulDew => "Soul Dew",
        LightBall => "Light Ball",
        ThickClub => "Thick Club",
        DeepSeaTooth => "Deep Sea Tooth",
        DeepSeaScale => "Deep Sea Scale",
        MetalPowder => "Metal Powder",
        QuickPowder => "Quick Powder",

        // Damage and stat items
        ChoiceBand => "Choice Band",
        ChoiceSpecs => "Choice Specs",
        ChoiceScarf => "Choice Scarf",
        MuscleBand => "Muscle Band",
        WiseGlasses => "Wise Glasses",
        ExpertBelt => "Expert Belt",
        LifeOrb => "Life Orb",
        Metronome => "Metronome",
        IronBall => "Iron Ball",
        LaggingTail => "Lagging Tail",

        // EV training items
        MachoBrace => "Macho Brace",
        PowerAnklet => "Power Anklet",
        PowerBand => "Power Band",
        PowerBelt => "Power Belt",
        PowerBracer => "Power Bracer",
        PowerLens => "Power Lens",
        PowerWeight => "Power Weight",

        // Other held items
        BigRoot => "Big Root",
        BlackSludge => "Black Sludge",
        BrightPowder => "Bright Powder",
        DampRock => "Damp Rock",
        DestinyKnot => "Destiny Knot",
        FlameOrb => "Flame Orb",
        FocusBand => "Focus Band",
        FocusSash => "Focus Sash",
        FullIncense => "Full Incense",
        GripClaw => "Grip Claw",
        HeatRock => "Heat Rock",
        IcyRock => "Icy Rock",
        KingsRock => "King's Rock",
        LaxIncense => "Lax Incense",
        Leftovers => "Leftovers",
        LightClay => "Light Clay",
        LuckIncense => "Luck Incense",
        MentalHerb => "Mental Herb",
        PowerHerb => "Power Herb",
        PureIncense => "Pure Incense",
        QuickClaw => "Quick Claw",
        RazorClaw => "Razor Claw",
        RazorFang => "Razor Fang",
        ScopeLens => "Scope Lens",
        ShedShell => "Shed Shell",
        ShellBell => "Shell Bell",
        SmoothRock => "Smooth Rock",
        StickyBarb => "Sticky Barb",
        ToxicOrb => "Toxic Orb",
        WhiteHerb => "White Herb",
        WideLens => "Wide Lens",
        ZoomLens => "Zoom Lens",

        // Berries
        CheriBerry => "Cheri Berry",
        ChestoBerry => "Chesto Berry",
        PechaBerry => "Pecha Berry",
        RawstBerry => "Rawst Berry",
        AspearBerry => "Aspear Berry",
        LeppaBerry => "Leppa Berry",
        OranBerry => "Oran Berry",
        PersimBerry => "Persim Berry",
        LumBerry => "Lum Berry",
        SitrusBerry => "Sitrus Berry",
        FigyBerry => "Figy Berry",
        WikiBerry => "Wiki Berry",
        MagoBerry => "Mago Berry",
        AguavBerry => "Aguav Berry",
        IapapaBerry => "Iapapa Berry",
        RazzBerry => "Razz Berry",
        BlukBerry => "Bluk Berry",
        NanabBerry => "Nanab Berry",
        WepearBerry => "Wepear Berry",
        PinapBerry => "Pinap Berry",
        PomegBerry => "Pomeg Berry",
        KelpsyBerry => "Kelpsy Berry",
        QualotBerry => "Qualot Berry",
        HondewBerry => "Hondew Berry",
        GrepaBerry => "Grepa Berry",
        TamatoBerry => "Tamato Berry",
        CornnBerry => "Cornn Berry",
        MagostBerry => "Magost Berry",
        RabutaBerry => "Rabuta Berry",
        NomelBerry => "Nomel Berry",
        SpelonBerry => "Spelon Berry",
        PamtreBerry => "Pamtre Berry",
        WatmelBerry => "Watmel Berry",
        DurinBerry => "Durin Berry",
        BelueBerry => "Belue Berry",
        OccaBerry => "Occa Berry",
        PasshoBerry => "Passho Berry",
        WacanBerry => "Wacan Berry",
        RindoBerry => "Rindo Berry",
        YacheBerry => "Yache Berry",
        ChopleBerry => "Chople Berry",
        KebiaBerry => "Kebia Berry",
        ShucaBerry => "Shuca Berry",
        CobaBerry => "Coba Berry",
        PayapaBerry => "Payapa Berry",
        TangaBerry => "Tanga Berry",
        ChartiBerry => "Charti Berry",
        KasibBerry => "Kasib Berry",
        HabanBerry => "Haban Berry",
        ColburBerry => "Colbur Berry",
        BabiriBerry => "Babiri Berry",
        ChilanBerry => "Chilan Berry",
        LiechiBerry => "Liechi Berry",
        GanlonBerry => "Ganlon Berry",
        SalacBerry => "Salac Berry",
        PetayaBerry => "Petaya Berry",
        ApicotBerry => "Apicot Berry",
        LansatBerry => "Lansat Berry",
        StarfBerry => "Starf Berry",
        EnigmaBerry => "Enigma Berry",
        MicleBerry => "Micle Berry",
        CustapBerry => "Custap Berry",
        JabocaBerry => "Jaboca Berry",
        RowapBerry => "Rowap Berry",
    }
}

/// Type and power Natural Gift takes from a berry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalGift {
    pub move_type: Type,
    pub base_power: u8,
}

const fn gift(move_type: Type, base_power: u8) -> Option<NaturalGift> {
    Some(NaturalGift { move_type, base_power })
}

impl Item {
    pub fn is_berry(self) -> bool {
        self.name().ends_with(" Berry")
    }

    /// Macho Brace and the Power items. Klutz cannot suppress these.
    pub const fn is_ev_item(self) -> bool {
        use Item::*;
        matches!(
            self,
            MachoBrace | PowerAnklet | PowerBand | PowerBelt | PowerBracer | PowerLens | PowerWeight
        )
    }

    /// Type whose moves this item boosts by 20% (type items, incenses, plates).
    pub const fn boost_type(self) -> Option<Type> {
        use Item::*;
        let t = match self {
            SilkScarf => Type::Normal,
            BlackBelt => Type::Fighting,
            SharpBeak => Type::Flying,
            PoisonBarb => Type::Poison,
            SoftSand => Type::Ground,
            HardStone | RockIncense => Type::Rock,
            SilverPowder => Type::Bug,
            SpellTag => Type::Ghost,
            MetalCoat => Type::Steel,
            Charcoal => Type::Fire,
            MysticWater | SeaIncense | WaveIncense => Type::Water,
            MiracleSeed | RoseIncense => Type::Grass,
            Magnet => Type::Electric,
            TwistedSpoon | OddIncense => Type::Psychic,
            NeverMeltIce => Type::Ice,
            DragonFang => Type::Dragon,
            BlackGlasses => Type::Dark,
            _ => return self.plate_type(),
        };
        Some(t)
    }

    /// Type a plate gives Judgment.
    pub const fn plate_type(self) -> Option<Type> {
        use Item::*;
        let t = match self {
            FlamePlate => Type::Fire,
            SplashPlate => Type::Water,
            ZapPlate => Type::Electric,
            MeadowPlate => Type::Grass,
            IciclePlate => Type::Ice,
            FistPlate => Type::Fighting,
            ToxicPlate => Type::Poison,
            EarthPlate => Type::Ground,
            SkyPlate => Type::Flying,
            MindPlate => Type::Psychic,
            InsectPlate => Type::Bug,
            StonePlate => Type::Rock,
            SpookyPlate => Type::Ghost,
            DracoPlate => Type::Dragon,
            DreadPlate => Type::Dark,
            IronPlate => Type::Steel,
            _ => return None,
        };
        Some(t)
    }

    /// Natural Gift's type and power for a berry.
    pub const fn natural_gift(self) -> Option<NaturalGift> {
        use Item::*;
        use Type::*;
        match self {
            CheriBerry | OccaBerry => gift(Fire, 60),
            ChestoBerry | PasshoBerry => gift(Water, 60),
            PechaBerry | WacanBerry => gift(Electric, 60),
            RawstBerry | RindoBerry => gift(Grass, 60),
            AspearBerry | YacheBerry => gift(Ice, 60),
            LeppaBerry | ChopleBerry => gift(Fighting, 60),
            OranBerry | KebiaBerry => gift(Poison, 60),
            PersimBerry | ShucaBerry => gift(Ground, 60),
            LumBerry | CobaBerry => gift(Flying, 60),
            SitrusBerry | PayapaBerry => gift(Psychic, 60),
            FigyBerry | TangaBerry => gift(Bug, 60),
            WikiBerry | ChartiBerry => gift(Rock, 60),
            MagoBerry | KasibBerry => gift(Ghost, 60),
            AguavBerry | HabanBerry => gift(Dragon, 60),
            IapapaBerry | ColburBerry => gift(Dark, 60),
            RazzBerry | BabiriBerry => gift(Steel, 60),
            ChilanBerry => gift(Normal, 60),

            BlukBerry => gift(Fire, 70),
            NanabBerry => gift(Water, 70),
            WepearBerry => gift(Electric, 70),
            PinapBerry => gift(Grass, 70),
            PomegBerry => gift(Ice, 70),
            KelpsyBerry => gift(Fighting, 70),
            QualotBerry => gift(Poison, 70),
            HondewBerry => gift(Ground, 70),
            GrepaBerry => gift(Flying, 70),
            TamatoBerry => gift(Psychic, 70),
            CornnBerry => gift(Bug, 70),
            MagostBerry => gift(Rock, 70),
            RabutaBerry => gift(Ghost, 70),
            NomelBerry => gift(Dragon, 70),
            SpelonBerry => gift(Dark, 70),
            PamtreBerry => gift(Steel, 70),

            WatmelBerry => gift(Fire, 80),
            DurinBerry => gift(Water, 80),
            BelueBerry => gift(Electric, 80),
            LiechiBerry => gift(Grass, 80),
            GanlonBerry => gift(Ice, 80),
            SalacBerry => gift(Fighting, 80),
            PetayaBerry => gift(Poison, 80),
            ApicotBerry => gift(Ground, 80),
            LansatBerry => gift(Flying, 80),
            StarfBerry => gift(Psychic, 80),
            EnigmaBerry => gift(Bug, 80),
            MicleBerry => gift(Rock, 80),
            CustapBerry => gift(Ghost, 80),
            JabocaBerry => gift(Dragon, 80),
            RowapBerry => gift(Dark, 80),

            _ => None,
        }
    }

    /// Type a resist berry halves.
    pub const fn resisted_type(self) -> Option<Type> {
        use Item::*;
        let t = match self {
            ChilanBerry => Type::Normal,
            OccaBerry => Type::Fire,
            PasshoBerry => Type::Water,
            WacanBerry => Type::Electric,
            RindoBerry => Type::Grass,
            YacheBerry => Type::Ice,
            ChopleBerry => Type::Fighting,
            KebiaBerry => Type::Poison,
            ShucaBerry => Type::Ground,
            CobaBerry => Type::Flying,
            PayapaBerry => Type::Psychic,
            TangaBerry => Type::Bug,
            ChartiBerry => Type::Rock,
            KasibBerry => Type::Ghost,
            HabanBerry => Type::Dragon,
            ColburBerry => Type::Dark,
            BabiriBerry => Type::Steel,
            _ => return None,
        };
        Some(t)
    }

    /// Fling's base power with this item.
    pub fn fling_power(self) -> u16 {
        use Item::*;
        if self.plate_type().is_some() {
            return 90;
        }
        match self {
            IronBall => 130,
            HardStone => 100,
            DeepSeaTooth | GripClaw | ThickClub => 90,
            QuickClaw | RazorClaw | StickyBarb => 80,
            PoisonBarb | DragonFang | PowerAnklet | PowerBand | PowerBelt | PowerBracer
            | PowerLens | PowerWeight => 70,
            AdamantOrb | LustrousOrb | GriseousOrb | DampRock | HeatRock | MachoBrace => 60,
            SharpBeak => 50,
            IcyRock => 40,
            BlackBelt | BlackSludge | BlackGlasses | Charcoal | DeepSeaScale | FlameOrb
            | KingsRock | LifeOrb | LightBall | LightClay | Magnet | MetalCoat | Metronome
            | MiracleSeed | MysticWater | NeverMeltIce | RazorFang | ScopeLens | ShellBell
            | SoulDew | SpellTag | ToxicOrb | TwistedSpoon => 30,
            _ => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lookup() {
        assert_eq!(Item::from_name("Choice Band"), Some(Item::ChoiceBand));
        assert_eq!(Item::from_name("choiceband"), Some(Item::ChoiceBand));
        assert_eq!(Item::from_name("King's Rock"), Some(Item::KingsRock));
        assert_eq!(Item::from_name("nevermeltice"), Some(Item::NeverMeltIce));
        assert_eq!(Item::from_name("Assault Vest"), None);
    }

    #[test]
    fn test_boost_types() {
        assert_eq!(Item::Charcoal.boost_type(), Some(Type::Fire));
        assert_eq!(Item::WaveIncense.boost_type(), Some(Type::Water));
        assert_eq!(Item::DracoPlate.boost_type(), Some(Type::Dragon));
        assert_eq!(Item::LifeOrb.boost_type(), None);
        assert_eq!(Item::Charcoal.plate_type(), None);
    }

    #[test]
    fn test_natural_gift() {
        let gift = Item::SitrusBerry.natural_gift().unwrap();
        assert_eq!(gift.move_type, Type::Psychic);
        assert_eq!(gift.base_power, 60);
        assert_eq!(Item::PetayaBerry.natural_gift().unwrap().base_power, 80);
        assert_eq!(Item::Leftovers.natural_gift(), None);
        for item in Item::ALL.iter().filter(|i| i.is_berry()) {
            assert!(item.natural_gift().is_some(), "{item} has no Natural Gift data");
        }
    }

    #[test]
    fn test_resist_berries() {
        assert_eq!(Item::OccaBerry.resisted_type(), Some(Type::Fire));
        assert_eq!(Item::ChilanBerry.resisted_type(), Some(Type::Normal));
        assert_eq!(Item::ALL.iter().filter(|i| i.resisted_type().is_some()).count(), 17);
    }

    #[test]
    fn test_fling_power() {
        assert_eq!(Item::IronBall.fling_power(), 130);
        assert_eq!(Item::FlamePlate.fling_power(), 90);
        assert_eq!(Item::PowerBracer.fling_power(), 70);
        assert_eq!(Item::LumBerry.fling_power(), 10);
    }

    #[test]
    fn test_ev_items() {
        assert!(Item::MachoBrace.is_ev_item());
        assert!(Item::PowerWeight.is_ev_item());
        assert!(!Item::IronBall.is_ev_item());
    }
}
