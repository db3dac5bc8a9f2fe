//! NPC class/level pyramid. Each class gets a rolled "highest level" NPC,
//! and every tier below doubles the headcount down to level 1. Whoever is
//! left over is filled in with level-1 NPC classes.

use std::collections::BTreeMap;

use rand::{Rng, RngCore};
use tracing::warn;

use crate::error::GenerationError;
use crate::model::{CharacterClass, HumanEthnicity, SettlementType};
use crate::rando;
use crate::text::{capitalize, number_to_words, ordinal};

use super::demographics::Demographics;

/// Highest level an NPC can reach.
pub const MAX_NPC_LEVEL: u32 = 20;

/// Share of the leftover population per level-1 NPC class. Commoners take
/// whatever is left after these.
const REMAINDER_SHARES: [(CharacterClass, f64); 4] = [
    (CharacterClass::Aristocrat, 0.005),
    (CharacterClass::Adept, 0.005),
    (CharacterClass::Expert, 0.03),
    (CharacterClass::Warrior, 0.05),
];

/// Dice rolled for each class's highest-level NPC. Barbarians and monks are
/// rolled on a d8 where their home ethnicities are common.
pub fn class_dice(demographics: &Demographics) -> [(CharacterClass, u32, u32); 12] {
    let mean = demographics.mean_ethnicity_percent();
    let northern = (demographics.ethnicity_percent(HumanEthnicity::Kellid)
        + demographics.ethnicity_percent(HumanEthnicity::Ulfen))
        / 2.0;
    let barbarian = if northern >= mean { 8 } else { 4 };
    let monk = if demographics.ethnicity_percent(HumanEthnicity::Tian) >= mean {
        8
    } else {
        4
    };
    [
        (CharacterClass::Alchemist, 1, 4),
        (CharacterClass::Barbarian, 1, barbarian),
        (CharacterClass::Bard, 1, 6),
        (CharacterClass::Champion, 1, 3),
        (CharacterClass::Cleric, 1, 6),
        (CharacterClass::Druid, 1, 6),
        (CharacterClass::Fighter, 1, 8),
        (CharacterClass::Monk, 1, monk),
        (CharacterClass::Ranger, 1, 3),
        (CharacterClass::Rogue, 1, 8),
        (CharacterClass::Sorcerer, 1, 4),
        (CharacterClass::Wizard, 1, 4),
    ]
}

/// `(level, count)` tiers under one NPC of level `top`, highest first.
pub fn level_pyramid(top: u32) -> Vec<(u32, u64)> {
    let mut tiers = Vec::new();
    if top == 0 {
        return tiers;
    }
    let mut level = top.min(MAX_NPC_LEVEL);
    let mut count = 1;
    loop {
        tiers.push((level, count));
        if level == 1 {
            return tiers;
        }
        level = level.div_ceil(2);
        count *= 2;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NpcRoster {
    classes: Vec<(CharacterClass, BTreeMap<u32, u64>)>,
}

impl NpcRoster {
    pub fn roll(
        rng: &mut dyn RngCore,
        settlement_type: SettlementType,
        demographics: &Demographics,
        population: u32,
    ) -> Self {
        let mut roster = Self::default();
        let modifier = settlement_type.stats().modifiers;
        for _ in 0..settlement_type.npc_multiplier() {
            for (class, count, sides) in class_dice(demographics) {
                let top = rando::roll_dice(rng, count, sides) as i32 + modifier;
                if top < 1 {
                    continue;
                }
                for (level, n) in level_pyramid(top as u32) {
                    roster.add(class, level, n);
                }
            }
        }
        roster.fill_remainder(population);
        roster
    }

    fn fill_remainder(&mut self, population: u32) {
        let classed = self.total();
        let remaining = i64::from(population) - classed as i64;
        if remaining <= 0 {
            if remaining < 0 {
                warn!(population, classed, "class NPCs outnumber the population");
            }
            return;
        }
        let remaining = remaining as u64;
        let mut assigned = 0;
        for (class, share) in REMAINDER_SHARES {
            let n = (remaining as f64 * share) as u64;
            self.add(class, 1, n);
            assigned += n;
        }
        self.add(CharacterClass::Commoner, 1, remaining - assigned);
    }

    pub fn add(&mut self, class: CharacterClass, level: u32, count: u64) {
        if count == 0 {
            return;
        }
        let index = match self.classes.iter().position(|(c, _)| *c == class) {
            Some(index) => index,
            None => {
                self.classes.push((class, BTreeMap::new()));
                self.classes.len() - 1
            }
        };
        *self.classes[index].1.entry(level).or_insert(0) += count;
    }

    pub fn count(&self, class: CharacterClass, level: u32) -> u64 {
        self.levels(class)
            .and_then(|levels| levels.get(&level).copied())
            .unwrap_or(0)
    }

    pub fn class_total(&self, class: CharacterClass) -> u64 {
        self.levels(class).map(|l| l.values().sum()).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.classes.iter().flat_map(|(_, l)| l.values()).sum()
    }

    /// Classes in the order they were first added.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.classes.iter().map(|(c, _)| *c)
    }

    fn levels(&self, class: CharacterClass) -> Option<&BTreeMap<u32, u64>> {
        self.classes
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, levels)| levels)
    }

    /// `"Eight 1st level fighters"`, per class, highest level first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (class, levels) in &self.classes {
            for (&level, &count) in levels.iter().rev() {
                let plural = if count > 1 { "s" } else { "" };
                lines.push(format!(
                    "{} {} level {}{plural}",
                    capitalize(&number_to_words(count)),
                    ordinal(i64::from(level)),
                    class.as_str().to_lowercase(),
                ));
            }
        }
        lines
    }

    /// A uniformly random resident of at least `min_level`.
    pub fn random_class_level(
        &self,
        rng: &mut dyn RngCore,
        min_level: u32,
    ) -> Result<(CharacterClass, u32), GenerationError> {
        let total: u64 = self
            .classes
            .iter()
            .flat_map(|(_, levels)| levels.range(min_level..).map(|(_, n)| *n))
            .sum();
        if total == 0 {
            return Err(GenerationError::NoCitizen { min_level });
        }

        let mut citizen = rng.random_range(1..=total);
        for (class, levels) in &self.classes {
            for (&level, &count) in levels.range(min_level..) {
                if citizen <= count {
                    return Ok((*class, level));
                }
                citizen -= count;
            }
        }
        Err(GenerationError::NoCitizen { min_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::config::{AncestryShare, NumberOrText};

    fn demographics(kellid: f64, ulfen: f64, tian: f64) -> Demographics {
        let mut human: BTreeMap<String, NumberOrText> = HumanEthnicity::ALL
            .iter()
            .map(|e| (e.to_string(), NumberOrText::Number(5.0)))
            .collect();
        human.insert("Kellid".to_string(), NumberOrText::Number(kellid));
        human.insert("Ulfen".to_string(), NumberOrText::Number(ulfen));
        human.insert("Tian".to_string(), NumberOrText::Number(tian));
        let shares = BTreeMap::from([("Human".to_string(), AncestryShare::Ethnicities(human))]);
        Demographics::from_config(&shares).unwrap()
    }

    #[test]
    fn pyramid_halves_levels_and_doubles_counts() {
        assert_eq!(level_pyramid(8), vec![(8, 1), (4, 2), (2, 4), (1, 8)]);
        assert_eq!(level_pyramid(5), vec![(5, 1), (3, 2), (2, 4), (1, 8)]);
        assert_eq!(level_pyramid(1), vec![(1, 1)]);
        assert!(level_pyramid(0).is_empty());
        assert_eq!(level_pyramid(30)[0], (20, 1));
    }

    #[test]
    fn common_ethnicities_use_bigger_dice() {
        let dice = class_dice(&demographics(30.0, 30.0, 0.0));
        assert!(dice.contains(&(CharacterClass::Barbarian, 1, 8)));
        assert!(dice.contains(&(CharacterClass::Monk, 1, 4)));

        let dice = class_dice(&demographics(0.0, 0.0, 40.0));
        assert!(dice.contains(&(CharacterClass::Barbarian, 1, 4)));
        assert!(dice.contains(&(CharacterClass::Monk, 1, 8)));
    }

    #[test]
    fn remainder_fills_the_population() {
        let mut rng = rando::make_rng(Some(3));
        let d = demographics(5.0, 5.0, 5.0);
        let roster = NpcRoster::roll(&mut rng, SettlementType::SmallTown, &d, 1000);
        assert_eq!(roster.total(), 1000);
        assert_eq!(roster.classes().last(), Some(CharacterClass::Commoner));
        assert!(roster.class_total(CharacterClass::Warrior) > 0);
        assert_eq!(
            roster.count(CharacterClass::Commoner, 1),
            roster.class_total(CharacterClass::Commoner)
        );
    }

    #[test]
    fn tiny_population_gets_no_remainder() {
        let mut rng = rando::make_rng(Some(3));
        let d = demographics(5.0, 5.0, 5.0);
        let roster = NpcRoster::roll(&mut rng, SettlementType::Metropolis, &d, 5);
        assert!(roster.total() > 5);
        assert_eq!(roster.class_total(CharacterClass::Commoner), 0);
    }

    #[test]
    fn roster_lines_are_worded() {
        let mut roster = NpcRoster::default();
        for (level, n) in level_pyramid(4) {
            roster.add(CharacterClass::Fighter, level, n);
        }
        roster.add(CharacterClass::Commoner, 1, 123);
        assert_eq!(
            roster.lines(),
            vec![
                "One 4th level fighter",
                "Two 2nd level fighters",
                "Four 1st level fighters",
                "One hundred and twenty-three 1st level commoners",
            ]
        );
    }

    #[test]
    fn sampler_respects_minimum_level() {
        let mut roster = NpcRoster::default();
        for (level, n) in level_pyramid(6) {
            roster.add(CharacterClass::Wizard, level, n);
        }
        roster.add(CharacterClass::Commoner, 1, 500);
        let mut rng = rando::make_rng(Some(9));
        for _ in 0..100 {
            let (class, level) = roster.random_class_level(&mut rng, 3).unwrap();
            assert_eq!(class, CharacterClass::Wizard);
            assert!(level >= 3);
        }
        assert_eq!(
            roster.random_class_level(&mut rng, 7),
            Err(GenerationError::NoCitizen { min_level: 7 })
        );
    }
}
