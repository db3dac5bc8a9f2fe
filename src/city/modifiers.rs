//! Settlement statistics derived from type, alignment, government,
//! qualities and disadvantages.

use std::fmt;

use crate::model::{
    Alignment, Disadvantage, Ethic, Government, Morality, Quality, SettlementType,
};

/// Highest spell level a settlement can offer.
pub const MAX_SPELLCASTING: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub corruption: i32,
    pub crime: i32,
    pub economy: i32,
    pub law: i32,
    pub lore: i32,
    pub society: i32,
}

impl Modifiers {
    pub fn labelled(&self) -> [(&'static str, i32); 6] {
        [
            ("Corruption", self.corruption),
            ("Crime", self.crime),
            ("Economy", self.economy),
            ("Law", self.law),
            ("Lore", self.lore),
            ("Society", self.society),
        ]
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .labelled()
            .iter()
            .map(|(label, value)| format!("{label} {value:+}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Everything the derived statistics depend on.
#[derive(Debug, Clone, Copy)]
pub struct Profile<'a> {
    pub settlement_type: SettlementType,
    pub alignment: Alignment,
    pub government: Government,
    pub qualities: &'a [Quality],
    pub disadvantages: &'a [Disadvantage],
}

impl Profile<'_> {
    fn has(&self, quality: Quality) -> bool {
        self.qualities.contains(&quality)
    }

    fn suffers(&self, disadvantage: Disadvantage) -> bool {
        self.disadvantages.contains(&disadvantage)
    }

    /// Table base value scaled by quality and disadvantage adjustments.
    pub fn base_value(&self) -> u32 {
        let mut adjust: i64 = 100;
        if self.has(Quality::MagicallyAttuned) {
            adjust += 20;
        }
        if self.has(Quality::Notorious) {
            adjust += 30;
        }
        if self.has(Quality::Prosperous) {
            adjust += 30;
        }
        if self.has(Quality::StrategicLocation) {
            adjust += 10;
        }
        if self.has(Quality::TouristAttraction) {
            adjust += 20;
        }
        if self.suffers(Disadvantage::Hunted) {
            adjust -= 20;
        }
        if self.suffers(Disadvantage::Impoverished) {
            adjust -= 50;
        }
        if self.suffers(Disadvantage::Plagued) {
            adjust -= 20;
        }
        scale(self.settlement_type.stats().base_value, adjust)
    }

    pub fn purchase_limit(&self) -> u32 {
        let mut adjust: i64 = 100;
        if self.has(Quality::MagicallyAttuned) {
            adjust += 20;
        }
        if self.has(Quality::Notorious) {
            adjust += 50;
        }
        if self.has(Quality::Prosperous) {
            adjust += 50;
        }
        if self.suffers(Disadvantage::Impoverished) {
            adjust -= 50;
        }
        scale(self.settlement_type.stats().purchase_limit, adjust)
    }

    /// Highest spell level available, 0..=10.
    pub fn spellcasting(&self) -> i32 {
        let mut level = self.settlement_type.stats().spellcasting;
        if self.government == Government::Magical {
            level += 1;
        }
        if self.has(Quality::Academic) {
            level += 1;
        }
        if self.has(Quality::HolySite) {
            level += 2;
        }
        if self.has(Quality::MagicallyAttuned) {
            level += 2;
        }
        if self.has(Quality::Pious) {
            level += 1;
        }
        if self.has(Quality::Superstitious) {
            level -= 2;
        }
        level.clamp(0, MAX_SPELLCASTING)
    }

    pub fn modifiers(&self) -> Modifiers {
        let base = self.settlement_type.stats().modifiers;
        Modifiers {
            corruption: base + self.corruption(),
            crime: base + self.crime(),
            economy: base + self.economy(),
            law: base + self.law(),
            lore: base + self.lore(),
            society: base + self.society(),
        }
    }

    fn corruption(&self) -> i32 {
        let mut m = 0;
        if self.alignment.morality == Morality::Evil {
            m += 1;
        }
        m += match self.government {
            Government::Magical => -2,
            Government::Overlord | Government::SecretSyndicate => 2,
            _ => 0,
        };
        if self.has(Quality::HolySite) {
            m -= 2;
        }
        if self.suffers(Disadvantage::Anarchy) {
            m += 4;
        }
        if self.suffers(Disadvantage::Impoverished) {
            m += 1;
        }
        m
    }

    fn crime(&self) -> i32 {
        let mut m = 0;
        if self.alignment.ethic == Ethic::Chaotic {
            m += 1;
        }
        m += match self.government {
            Government::Overlord => -2,
            Government::SecretSyndicate => 2,
            _ => 0,
        };
        if self.has(Quality::Insular) {
            m -= 1;
        }
        if self.has(Quality::Notorious) {
            m += 1;
        }
        if self.has(Quality::Superstitious) {
            m -= 4;
        }
        if self.suffers(Disadvantage::Anarchy) {
            m += 4;
        }
        if self.suffers(Disadvantage::Impoverished) {
            m += 1;
        }
        m
    }

    fn economy(&self) -> i32 {
        let mut m = 0;
        if self.government == Government::SecretSyndicate {
            m += 2;
        }
        if self.has(Quality::Prosperous) {
            m += 1;
        }
        if self.has(Quality::StrategicLocation) {
            m += 1;
        }
        if self.has(Quality::TouristAttraction) {
            m += 1;
        }
        if self.suffers(Disadvantage::Anarchy) {
            m -= 4;
        }
        if self.suffers(Disadvantage::Hunted) {
            m -= 4;
        }
        m
    }

    fn law(&self) -> i32 {
        let mut m = 0;
        if self.alignment.ethic == Ethic::Lawful {
            m += 1;
        }
        m += match self.government {
            Government::Council => -2,
            Government::Overlord => 2,
            Government::SecretSyndicate => -6,
            _ => 0,
        };
        if self.has(Quality::Insular) {
            m += 1;
        }
        if self.has(Quality::Notorious) {
            m -= 1;
        }
        if self.has(Quality::Superstitious) {
            m += 2;
        }
        if self.suffers(Disadvantage::Anarchy) {
            m -= 6;
        }
        if self.suffers(Disadvantage::Hunted) {
            m -= 4;
        }
        m
    }

    fn lore(&self) -> i32 {
        let mut m = 0;
        if self.alignment.is_true_neutral() {
            m += 2;
        } else if self.alignment.morality == Morality::Neutral {
            m += 1;
        }
        m += match self.government {
            Government::Council => -2,
            Government::Magical => 2,
            _ => 0,
        };
        if self.has(Quality::Academic) {
            m += 1;
        }
        if self.has(Quality::RumormongeringCitizens) {
            m += 1;
        }
        m
    }

    fn society(&self) -> i32 {
        let mut m = 0;
        if self.alignment.morality == Morality::Good {
            m += 1;
        }
        m += match self.government {
            Government::Council => 4,
            Government::Magical | Government::Overlord => -2,
            _ => 0,
        };
        if self.has(Quality::RumormongeringCitizens) {
            m -= 1;
        }
        if self.has(Quality::Superstitious) {
            m += 2;
        }
        if self.suffers(Disadvantage::Anarchy) {
            m -= 4;
        }
        if self.suffers(Disadvantage::Hunted) {
            m -= 4;
        }
        m
    }
}

/// `value × percent / 100`, truncated, never below zero.
fn scale(value: u32, percent: i64) -> u32 {
    (i64::from(value) * percent.max(0) / 100) as u32
}
