//! Wanted posters: a character plus crimes, reward and the GM-only details.

pub mod tables;

use std::fmt;

use tracing::debug;

use crate::ancestry::AncestryRequest;
use crate::character::{Character, notes_lines, titled_list};
use crate::city::City;
use crate::error::{GenerationError, Result};
use crate::generator::Generator;
use crate::model::{CharacterClass, CrimeSeverity, WantedStatus};
use crate::rando;
use crate::text::{banner, entry};
use crate::wordlist::WordList;

use self::tables::{
    BOUNTY_SOURCES, LOW_DEAD_REWARD_NOTE, MATCHING_DEAD_REWARD_NOTES, MAX_LEVEL,
    MID_DEAD_REWARD_NOTE, crime_percents, dead_or_alive_chance,
};

/// Crimes listed per bounty.
pub const CRIMES_PER_BOUNTY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BountyRequest {
    pub ancestry: AncestryRequest,
    pub min_level: i64,
}

impl Default for BountyRequest {
    fn default() -> Self {
        Self {
            ancestry: AncestryRequest::default(),
            min_level: 1,
        }
    }
}

/// Reward in gold. A dead-or-alive bounty may pay less for a corpse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub alive: u32,
    pub dead: Option<u32>,
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dead {
            Some(dead) => write!(f, "{dead}/{}", self.alive),
            None => write!(f, "{}", self.alive),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounty {
    character: Character,
    class: CharacterClass,
    level: u32,
    crimes: Vec<String>,
    severity: CrimeSeverity,
    wanted: WantedStatus,
    reward: Reward,
    complications: Vec<String>,
    source: &'static str,
    notes: Vec<String>,
}

impl Bounty {
    pub fn generate(
        generator: &mut Generator,
        request: &BountyRequest,
        city: Option<&City>,
    ) -> Result<Self> {
        if !(1..=i64::from(MAX_LEVEL)).contains(&request.min_level) {
            return Err(GenerationError::InvalidLevel(request.min_level).into());
        }
        let min_level = request.min_level as u32;

        let character = Character::generate(generator, &request.ancestry, city)?;

        let (class, level) = match city {
            Some(city) => city.random_npc_class_level(generator.rng(), min_level)?,
            None => {
                let class = *generator.choose(CharacterClass::ALL)?;
                let level = generator.integer(i64::from(min_level), i64::from(MAX_LEVEL));
                (class, level as u32)
            }
        };
        let level = level.clamp(1, MAX_LEVEL);

        let severity_index = rando::weighted_index_int(generator.rng(), crime_percents(level))?;
        let severity = CrimeSeverity::ALL[severity_index];
        let crimes = generator.pick_many(WordList::Crimes(severity), CRIMES_PER_BOUNTY)?;

        let wanted = if f64::from(generator.percent()) <= dead_or_alive_chance(level) {
            WantedStatus::DeadOrAlive
        } else {
            WantedStatus::Alive
        };

        let num_complications = generator.config().num_complications;
        let complications = generator.pick_many(WordList::Complications, num_complications)?;

        let mut notes = Vec::new();
        let reward = roll_reward(generator, level, severity, wanted, &mut notes);

        let source_weights: Vec<u32> = BOUNTY_SOURCES.iter().map(|s| s.weight).collect();
        let source = &BOUNTY_SOURCES[rando::weighted_index_int(generator.rng(), &source_weights)?];
        notes.push(format!("Consider... {}", source.notes));

        debug!(%class, level, %severity, %wanted, %reward, source = source.name, "generated bounty");

        Ok(Self {
            character,
            class,
            level,
            crimes,
            severity,
            wanted,
            reward,
            complications,
            source: source.name,
            notes,
        })
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn crimes(&self) -> &[String] {
        &self.crimes
    }

    pub fn severity(&self) -> CrimeSeverity {
        self.severity
    }

    pub fn wanted(&self) -> WantedStatus {
        self.wanted
    }

    pub fn reward(&self) -> Reward {
        self.reward
    }

    pub fn complications(&self) -> &[String] {
        &self.complications
    }

    pub fn source(&self) -> &str {
        self.source
    }

    /// Ancestry notes followed by the bounty's own notes.
    pub fn notes(&self) -> Vec<String> {
        let mut notes = self.character.ancestry().notes().to_vec();
        notes.extend(self.notes.iter().cloned());
        notes
    }

    pub fn public_lines(&self) -> Vec<String> {
        let mut lines = vec![banner("Public Details")];
        lines.extend(self.character.name_lines());
        lines.extend(self.character.race_lines());
        lines.extend(self.character.gender_lines());
        lines.push(entry("Reward:", &format!("{} gp", self.reward)));
        lines.push(entry("Wanted:", self.wanted.as_str()));
        lines
    }

    pub fn private_lines(&self) -> Vec<String> {
        let mut lines = vec![banner("Private Details")];
        lines.push(entry("Wanted By:", self.source));
        match self.crimes.as_slice() {
            [] => {}
            [only] => lines.push(entry("Crime:", &format!("{only} {}", self.severity))),
            crimes => {
                lines.push(entry("Crimes:", self.severity.as_str()));
                lines.extend(crimes.iter().map(|crime| entry("", crime)));
            }
        }
        lines.push(entry("Class:", self.class.as_str()));
        lines
    }

    pub fn gm_lines(&self) -> Vec<String> {
        let mut lines = vec![banner("GM Details")];
        lines.push(entry("Level:", &self.level.to_string()));
        lines.extend(notes_lines(&self.notes()));
        lines.extend(self.character.trait_lines());
        lines.extend(titled_list(
            "Complication:",
            "Complications:",
            &self.complications,
        ));
        lines
    }

    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![banner("BOUNTY DETAILS")];
        lines.extend(self.public_lines());
        lines.extend(self.private_lines());
        lines.extend(self.gm_lines());
        lines
    }
}

impl fmt::Display for Bounty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

/// `level × 10`, plus 10% per step of crime severity. Dead-or-alive bounties
/// may pay a quarter or half for a corpse; the rarer the split, the higher
/// the level.
fn roll_reward(
    generator: &mut Generator,
    level: u32,
    severity: CrimeSeverity,
    wanted: WantedStatus,
    notes: &mut Vec<String>,
) -> Reward {
    let alive = level * (10 + severity.rank());
    if wanted == WantedStatus::Alive {
        return Reward { alive, dead: None };
    }

    let split_chance = 100.0 - dead_or_alive_chance(level);
    let roll = f64::from(generator.percent());
    let dead = if roll <= split_chance / 2.0 {
        notes.push(LOW_DEAD_REWARD_NOTE.to_string());
        alive / 4
    } else if roll <= split_chance {
        notes.push(MID_DEAD_REWARD_NOTE.to_string());
        alive / 2
    } else {
        notes.extend(MATCHING_DEAD_REWARD_NOTES.iter().map(|n| n.to_string()));
        alive
    };
    Reward {
        alive,
        dead: Some(dead),
    }
}
