//! Newline-delimited word lists addressed by a structured key.
//!
//! Files are read lazily on first use and cached for the lifetime of the
//! owning [`WordLists`].

use std::collections::HashMap;
use std::path::PathBuf;

use rand::RngCore;
use tracing::debug;

use crate::error::{FileError, Result};
use crate::model::{Ancestry, CrimeSeverity, Gender, HumanEthnicity, Subgroup};
use crate::rando;

/// Word banks used to fill job templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobBank {
    People,
    Things,
    Settings,
    Businesses,
    Verbs,
}

string_enum!(JobBank {
    People => "People",
    Things => "Things",
    Settings => "Settings",
    Businesses => "Businesses",
    Verbs => "Verbs",
});

/// Key for every word list the generators read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordList {
    /// Non-human given names. `gender` is ignored for ancestries whose names
    /// are not split by gender.
    GivenName { ancestry: Ancestry, gender: Gender },
    HumanGivenName {
        ethnicity: HumanEthnicity,
        subgroup: Option<Subgroup>,
        gender: Gender,
    },
    Surname(Ancestry),
    HumanSurname {
        ethnicity: HumanEthnicity,
        subgroup: Option<Subgroup>,
    },
    Traits,
    Complications,
    Crimes(CrimeSeverity),
    Job(JobBank),
}

impl WordList {
    pub fn file_name(&self) -> String {
        match self {
            WordList::GivenName { ancestry, gender } => {
                if ancestry.has_ungendered_given_names() {
                    format!("Names-{ancestry}-Given_Name.txt")
                } else {
                    format!("Names-{ancestry}-Given_Name-{gender}.txt")
                }
            }
            WordList::HumanGivenName {
                ethnicity,
                subgroup,
                gender,
            } => match subgroup {
                Some(sub) => {
                    format!("Names-Human-{ethnicity}-{}-Given_Name-{gender}.txt", sub.name_source())
                }
                None => format!("Names-Human-{ethnicity}-Given_Name-{gender}.txt"),
            },
            WordList::Surname(ancestry) => format!("Names-{ancestry}-Surname.txt"),
            WordList::HumanSurname {
                ethnicity,
                subgroup,
            } => match subgroup {
                Some(sub) => format!("Names-Human-{ethnicity}-{}-Surname.txt", sub.name_source()),
                None => format!("Names-Human-{ethnicity}-Surname.txt"),
            },
            WordList::Traits => "Traits.txt".to_string(),
            WordList::Complications => "Complications.txt".to_string(),
            WordList::Crimes(severity) => {
                format!("Crimes-{:02}-{severity}.txt", severity.rank())
            }
            WordList::Job(bank) => format!("Job-{bank}.txt"),
        }
    }
}

/// Entries of a word list file: blank lines and `#` comments dropped,
/// trailing carriage returns stripped.
pub fn parse_entries(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Lazily loaded, cached word lists rooted at one directory.
#[derive(Debug)]
pub struct WordLists {
    dir: PathBuf,
    cache: HashMap<WordList, Vec<String>>,
}

impl WordLists {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn path_of(&self, list: WordList) -> PathBuf {
        self.dir.join(list.file_name())
    }

    pub fn entries(&mut self, list: WordList) -> Result<&[String]> {
        if !self.cache.contains_key(&list) {
            let path = self.path_of(list);
            let text = std::fs::read_to_string(&path).map_err(|e| FileError::read(&path, e))?;
            let entries = parse_entries(&text);
            if entries.is_empty() {
                return Err(FileError::EmptyWordList { path }.into());
            }
            debug!(file = %path.display(), count = entries.len(), "loaded word list");
            self.cache.insert(list, entries);
        }
        Ok(self.cache.get(&list).map(Vec::as_slice).unwrap_or_default())
    }

    pub fn pick(&mut self, rng: &mut dyn RngCore, list: WordList) -> Result<String> {
        let entries = self.entries(list)?;
        Ok(rando::choose(rng, entries)?.clone())
    }

    /// `count` entries drawn independently, so repeats are possible.
    pub fn pick_many(
        &mut self,
        rng: &mut dyn RngCore,
        list: WordList,
        count: usize,
    ) -> Result<Vec<String>> {
        let entries = self.entries(list)?;
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            picked.push(rando::choose(rng, entries)?.clone());
        }
        Ok(picked)
    }
}
