//! Job descriptions: pick a category by weight, then fill one of its
//! sentence templates from the job word banks.

use std::collections::HashMap;
use std::fmt;

use rand::RngCore;
use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::generator::Generator;
use crate::model::{GuildJob, Specialty};
use crate::rando;
use crate::text::capitalize_first;
use crate::wordlist::{JobBank, WordList};

use super::tables::{GUILD_JOB_WEIGHT, guild_job_templates, sub_specialties};

/// Draws for `{mark}` that may repeat `{person}` before giving up.
const MAX_MARK_REROLLS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCategory {
    Score(Specialty),
    Guild(GuildJob),
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobCategory::Score(specialty) => write!(f, "{specialty}"),
            JobCategory::Guild(job) => write!(f, "{job}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Person,
    Mark,
    Thing,
    Setting,
    Business,
    Verb,
}

impl Placeholder {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "person" => Placeholder::Person,
            "mark" => Placeholder::Mark,
            "thing" => Placeholder::Thing,
            "setting" => Placeholder::Setting,
            "business" => Placeholder::Business,
            "verb" => Placeholder::Verb,
            _ => return None,
        })
    }

    pub fn bank(&self) -> JobBank {
        match self {
            Placeholder::Person | Placeholder::Mark => JobBank::People,
            Placeholder::Thing => JobBank::Things,
            Placeholder::Setting => JobBank::Settings,
            Placeholder::Business => JobBank::Businesses,
            Placeholder::Verb => JobBank::Verbs,
        }
    }
}

/// Replace every `{placeholder}` in `template` with `word(placeholder)`.
/// Unknown names and stray braces are copied through.
pub fn fill_template<F>(template: &str, mut word: F) -> Result<String>
where
    F: FnMut(Placeholder) -> Result<String>,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match Placeholder::parse(name) {
                    Some(placeholder) => out.push_str(&word(placeholder)?),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Category weights for one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct JobBoard {
    weights: Vec<(JobCategory, f64)>,
}

impl JobBoard {
    /// Specialties weigh their percentage. Expansion and patrol scale with
    /// the guild's goals and territory; every other guild job weighs 10.
    pub fn new(specialties: &[(Specialty, f64)], goals: f64, territory: f64) -> Self {
        let mut weights: Vec<(JobCategory, f64)> = specialties
            .iter()
            .map(|&(s, pct)| (JobCategory::Score(s), pct))
            .collect();
        for &job in GuildJob::ALL {
            let weight = match job {
                GuildJob::Expansion => (10.0 * goals).round(),
                GuildJob::Patrol => (10.0 * territory).round(),
                _ => GUILD_JOB_WEIGHT,
            };
            weights.push((JobCategory::Guild(job), weight));
        }
        Self { weights }
    }

    pub fn weights(&self) -> &[(JobCategory, f64)] {
        &self.weights
    }

    pub fn weight_of(&self, category: JobCategory) -> f64 {
        self.weights
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    pub fn random_category(
        &self,
        rng: &mut dyn RngCore,
    ) -> std::result::Result<JobCategory, GenerationError> {
        let weights: Vec<f64> = self.weights.iter().map(|(_, w)| *w).collect();
        let index = rando::weighted_index_float(rng, &weights)?;
        Ok(self.weights[index].0)
    }

    /// `"Burglary: Break into a tannery near the docks and steal a ledger."`
    pub fn random_job(&self, generator: &mut Generator) -> Result<String> {
        let category = self.random_category(generator.rng())?;
        let (label, templates) = match category {
            JobCategory::Score(specialty) => {
                let subs = sub_specialties(specialty);
                let table: Vec<u32> = subs.iter().map(|s| s.weight).collect();
                let sub = &subs[rando::weighted_index_int(generator.rng(), &table)?];
                (sub.name, sub.templates)
            }
            JobCategory::Guild(job) => (job.as_str(), guild_job_templates(job)),
        };
        let template = *generator.choose(templates)?;
        let sentence = fill_words(generator, template)?;
        debug!(%category, label, "rolled job");
        Ok(format!(
            "{}: {}",
            capitalize_first(label),
            capitalize_first(&sentence)
        ))
    }

    pub fn random_jobs(&self, generator: &mut Generator, count: usize) -> Result<Vec<String>> {
        let mut jobs = Vec::with_capacity(count);
        for _ in 0..count {
            jobs.push(self.random_job(generator)?);
        }
        Ok(jobs)
    }
}

/// One draw per placeholder, reused when it repeats. `{mark}` is kept
/// distinct from `{person}` where the bank allows it.
fn fill_words(generator: &mut Generator, template: &str) -> Result<String> {
    let mut drawn: HashMap<Placeholder, String> = HashMap::new();
    fill_template(template, |placeholder| {
        if let Some(word) = drawn.get(&placeholder) {
            return Ok(word.clone());
        }
        let list = WordList::Job(placeholder.bank());
        let mut word = generator.pick(list)?;
        if placeholder == Placeholder::Mark {
            for _ in 0..MAX_MARK_REROLLS {
                if drawn.get(&Placeholder::Person) != Some(&word) {
                    break;
                }
                word = generator.pick(list)?;
            }
        }
        drawn.insert(placeholder, word.clone());
        Ok(word)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guild::tables::SubSpecialty;

    fn fixed(placeholder: Placeholder) -> Result<String> {
        Ok(match placeholder {
            Placeholder::Person => "a fence",
            Placeholder::Mark => "a magistrate",
            Placeholder::Thing => "a ledger",
            Placeholder::Setting => "near the docks",
            Placeholder::Business => "a tannery",
            Placeholder::Verb => "threaten",
        }
        .to_string())
    }

    #[test]
    fn placeholders_are_replaced() {
        let filled =
            fill_template("break into {business} {setting} and steal {thing}.", fixed).unwrap();
        assert_eq!(
            filled,
            "break into a tannery near the docks and steal a ledger."
        );
    }

    #[test]
    fn unknown_and_unclosed_braces_pass_through() {
        assert_eq!(fill_template("{who} {person}", fixed).unwrap(), "{who} a fence");
        assert_eq!(fill_template("{person} {oops", fixed).unwrap(), "a fence {oops");
    }

    #[test]
    fn all_templates_use_known_placeholders() {
        let check = |template: &str| {
            let filled = fill_template(template, fixed).unwrap();
            assert!(!filled.contains('{'), "{template}");
        };
        for &specialty in Specialty::ALL {
            for SubSpecialty { templates, .. } in sub_specialties(specialty) {
                for &template in templates.iter() {
                    check(template);
                }
            }
        }
        for &job in GuildJob::ALL {
            for &template in guild_job_templates(job) {
                check(template);
            }
        }
    }

    #[test]
    fn board_weights() {
        let specialties: Vec<(Specialty, f64)> =
            Specialty::ALL.iter().map(|&s| (s, 10.0)).collect();
        let board = JobBoard::new(&specialties, 2.5, 7.0);
        assert_eq!(board.weight_of(JobCategory::Guild(GuildJob::Expansion)), 25.0);
        assert_eq!(board.weight_of(JobCategory::Guild(GuildJob::Patrol)), 70.0);
        assert_eq!(board.weight_of(JobCategory::Guild(GuildJob::Escort)), 10.0);
        assert_eq!(board.weight_of(JobCategory::Score(Specialty::Vice)), 10.0);
        assert_eq!(board.weights().len(), 16);
    }

    #[test]
    fn zero_weight_specialties_never_come_up() {
        let specialties = vec![(Specialty::Property, 100.0), (Specialty::Drugs, 0.0)];
        let board = JobBoard::new(&specialties, 1.0, 1.0);
        let mut rng = rando::make_rng(Some(17));
        for _ in 0..300 {
            let category = board.random_category(&mut rng).unwrap();
            assert_ne!(category, JobCategory::Score(Specialty::Drugs));
        }
    }
}
