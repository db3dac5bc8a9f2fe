use std::fmt;

use serde::{Deserialize, Serialize};

pub const CITY_SIZE_LIMITS: (u32, u32) = (5, 200_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SettlementType {
    Thorp,
    Hamlet,
    Village,
    SmallTown,
    LargeTown,
    SmallCity,
    LargeCity,
    Metropolis,
}

string_enum!(SettlementType {
    Thorp => "Thorp",
    Hamlet => "Hamlet",
    Village => "Village",
    SmallTown => "Small Town",
    LargeTown => "Large Town",
    SmallCity => "Small City",
    LargeCity => "Large City",
    Metropolis => "Metropolis",
});

/// Per-settlement-type base statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementStats {
    pub modifiers: i32,
    pub qualities: usize,
    pub danger: i32,
    pub base_value: u32,
    pub purchase_limit: u32,
    pub spellcasting: i32,
}

impl SettlementType {
    /// Settlement tier for a population.
    pub fn from_population(population: u32) -> Self {
        match population {
            0..=20 => SettlementType::Thorp,
            21..=60 => SettlementType::Hamlet,
            61..=200 => SettlementType::Village,
            201..=2000 => SettlementType::SmallTown,
            2001..=5000 => SettlementType::LargeTown,
            5001..=10_000 => SettlementType::SmallCity,
            10_001..=25_000 => SettlementType::LargeCity,
            _ => SettlementType::Metropolis,
        }
    }

    pub fn stats(&self) -> SettlementStats {
        let (modifiers, qualities, danger, base_value, purchase_limit, spellcasting) = match self {
            SettlementType::Thorp => (-4, 1, -10, 50, 500, 1),
            SettlementType::Hamlet => (-2, 1, -5, 200, 1000, 2),
            SettlementType::Village => (-1, 2, 0, 500, 2500, 3),
            SettlementType::SmallTown => (0, 2, 0, 1000, 5000, 4),
            SettlementType::LargeTown => (0, 3, 5, 2000, 10_000, 5),
            SettlementType::SmallCity => (1, 4, 5, 4000, 25_000, 6),
            SettlementType::LargeCity => (2, 5, 10, 8000, 50_000, 7),
            SettlementType::Metropolis => (4, 6, 10, 16_000, 100_000, 8),
        };
        SettlementStats {
            modifiers,
            qualities,
            danger,
            base_value,
            purchase_limit,
            spellcasting,
        }
    }

    /// Number of times each class's top NPC is rolled.
    pub fn npc_multiplier(&self) -> u32 {
        match self {
            SettlementType::Metropolis => 4,
            SettlementType::LargeCity => 3,
            SettlementType::SmallCity => 2,
            _ => 1,
        }
    }

    /// How many ancestries the demographics line names before "other".
    pub fn ancestry_breakdown_len(&self) -> usize {
        match self {
            SettlementType::Thorp | SettlementType::Hamlet => 2,
            SettlementType::Village | SettlementType::SmallTown => 3,
            SettlementType::LargeTown | SettlementType::SmallCity => 4,
            SettlementType::LargeCity | SettlementType::Metropolis => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Government {
    Autocracy,
    Council,
    Magical,
    Overlord,
    SecretSyndicate,
}

string_enum!(Government {
    Autocracy => "Autocracy",
    Council => "Council",
    Magical => "Magical",
    Overlord => "Overlord",
    SecretSyndicate => "Secret Syndicate",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Disadvantage {
    Anarchy,
    Cursed,
    Hunted,
    Impoverished,
    Plagued,
}

string_enum!(Disadvantage {
    Anarchy => "Anarchy",
    Cursed => "Cursed",
    Hunted => "Hunted",
    Impoverished => "Impoverished",
    Plagued => "Plagued",
});

/// A settlement quality. Racial intolerance may name its target, e.g.
/// `Racially Intolerant (Elves)`, which is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quality {
    Academic,
    HolySite,
    Insular,
    MagicallyAttuned,
    Notorious,
    Pious,
    Prosperous,
    RaciallyIntolerant(Option<String>),
    RumormongeringCitizens,
    StrategicLocation,
    Superstitious,
    TouristAttraction,
}

const RACIALLY_INTOLERANT: &str = "Racially Intolerant";

impl Quality {
    /// Qualities a city can be randomly assigned.
    pub const SUPPORTED: &'static [Quality] = &[
        Quality::Academic,
        Quality::HolySite,
        Quality::Insular,
        Quality::MagicallyAttuned,
        Quality::Notorious,
        Quality::Pious,
        Quality::Prosperous,
        Quality::RaciallyIntolerant(None),
        Quality::RumormongeringCitizens,
        Quality::StrategicLocation,
        Quality::Superstitious,
        Quality::TouristAttraction,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        let quality = match s {
            "Academic" => Quality::Academic,
            "Holy Site" => Quality::HolySite,
            "Insular" => Quality::Insular,
            "Magically Attuned" => Quality::MagicallyAttuned,
            "Notorious" => Quality::Notorious,
            "Pious" => Quality::Pious,
            "Prosperous" => Quality::Prosperous,
            "Rumormongering Citizens" => Quality::RumormongeringCitizens,
            "Strategic Location" => Quality::StrategicLocation,
            "Superstitious" => Quality::Superstitious,
            "Tourist Attraction" => Quality::TouristAttraction,
            other => {
                let rest = other.strip_prefix(RACIALLY_INTOLERANT)?;
                let target = rest.trim();
                if target.is_empty() {
                    Quality::RaciallyIntolerant(None)
                } else {
                    Quality::RaciallyIntolerant(Some(target.to_string()))
                }
            }
        };
        Some(quality)
    }

    /// Whether this is the same kind of quality, ignoring any intolerance target.
    pub fn same_kind(&self, other: &Quality) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Quality::Academic => "Academic",
            Quality::HolySite => "Holy Site",
            Quality::Insular => "Insular",
            Quality::MagicallyAttuned => "Magically Attuned",
            Quality::Notorious => "Notorious",
            Quality::Pious => "Pious",
            Quality::Prosperous => "Prosperous",
            Quality::RaciallyIntolerant(None) => RACIALLY_INTOLERANT,
            Quality::RaciallyIntolerant(Some(target)) => {
                return write!(f, "{RACIALLY_INTOLERANT} {target}");
            }
            Quality::RumormongeringCitizens => "Rumormongering Citizens",
            Quality::StrategicLocation => "Strategic Location",
            Quality::Superstitious => "Superstitious",
            Quality::TouristAttraction => "Tourist Attraction",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ethic {
    Lawful,
    Neutral,
    Chaotic,
}

string_enum!(Ethic {
    Lawful => "Lawful",
    Neutral => "Neutral",
    Chaotic => "Chaotic",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Morality {
    Good,
    Neutral,
    Evil,
}

string_enum!(Morality {
    Good => "Good",
    Neutral => "Neutral",
    Evil => "Evil",
});

/// Nine-point alignment. True neutral is written as a single "Neutral".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub ethic: Ethic,
    pub morality: Morality,
}

impl Alignment {
    pub fn new(ethic: Ethic, morality: Morality) -> Self {
        Self { ethic, morality }
    }

    pub fn is_true_neutral(&self) -> bool {
        self.ethic == Ethic::Neutral && self.morality == Morality::Neutral
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == "Neutral" {
            return Some(Self::new(Ethic::Neutral, Morality::Neutral));
        }
        let (ethic, morality) = s.split_once(' ')?;
        let alignment = Self::new(Ethic::parse(ethic)?, Morality::parse(morality)?);
        // "Neutral Neutral" is spelled "Neutral"
        if alignment.is_true_neutral() {
            return None;
        }
        Some(alignment)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_true_neutral() {
            f.write_str("Neutral")
        } else {
            write!(f, "{} {}", self.ethic, self.morality)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_type_boundaries() {
        assert_eq!(SettlementType::from_population(20), SettlementType::Thorp);
        assert_eq!(SettlementType::from_population(21), SettlementType::Hamlet);
        assert_eq!(SettlementType::from_population(60), SettlementType::Hamlet);
        assert_eq!(SettlementType::from_population(61), SettlementType::Village);
        assert_eq!(SettlementType::from_population(200), SettlementType::Village);
        assert_eq!(SettlementType::from_population(2000), SettlementType::SmallTown);
        assert_eq!(SettlementType::from_population(5000), SettlementType::LargeTown);
        assert_eq!(SettlementType::from_population(10_000), SettlementType::SmallCity);
        assert_eq!(SettlementType::from_population(25_000), SettlementType::LargeCity);
        assert_eq!(SettlementType::from_population(25_001), SettlementType::Metropolis);
        assert_eq!(SettlementType::from_population(200_000), SettlementType::Metropolis);
    }

    #[test]
    fn larger_settlements_never_have_fewer_qualities() {
        let counts: Vec<usize> = SettlementType::ALL.iter().map(|t| t.stats().qualities).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(counts.iter().all(|&c| c <= Quality::SUPPORTED.len()));
    }

    #[test]
    fn alignment_parsing() {
        assert_eq!(
            Alignment::parse("Lawful Good"),
            Some(Alignment::new(Ethic::Lawful, Morality::Good))
        );
        assert!(Alignment::parse("Neutral").unwrap().is_true_neutral());
        assert!(Alignment::parse("Neutral Neutral").is_none());
        assert!(Alignment::parse("Lawful").is_none());
        assert!(Alignment::parse("Chaotic Stupid").is_none());
        assert_eq!(Alignment::parse("Chaotic Evil").unwrap().to_string(), "Chaotic Evil");
    }

    #[test]
    fn racially_intolerant_keeps_target() {
        let q = Quality::parse("Racially Intolerant (Elves)").unwrap();
        assert_eq!(q, Quality::RaciallyIntolerant(Some("(Elves)".to_string())));
        assert_eq!(q.to_string(), "Racially Intolerant (Elves)");
        assert!(q.same_kind(&Quality::RaciallyIntolerant(None)));
        assert!(Quality::parse("Haunted").is_none());
    }
}
