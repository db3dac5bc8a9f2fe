use std::fmt;

use crate::ancestry::{self, AncestryRequest, AncestrySelection};
use crate::city::City;
use crate::error::Result;
use crate::generator::Generator;
use crate::text::entry;
use crate::wordlist::WordList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    ancestry: AncestrySelection,
    traits: Vec<String>,
}

impl Character {
    pub fn generate(
        generator: &mut Generator,
        request: &AncestryRequest,
        city: Option<&City>,
    ) -> Result<Self> {
        let ancestry = ancestry::generate(generator, request, city)?;
        let num_traits = generator.config().num_traits;
        let traits = generator.pick_many(WordList::Traits, num_traits)?;
        Ok(Self { ancestry, traits })
    }

    pub fn ancestry(&self) -> &AncestrySelection {
        &self.ancestry
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn name_lines(&self) -> Vec<String> {
        vec![entry("Name:", self.ancestry.full_name())]
    }

    pub fn race_lines(&self) -> Vec<String> {
        let mut lines = vec![entry("Race:", self.ancestry.ancestry().as_str())];
        if let Some(ethnicity) = self.ancestry.ethnicity() {
            lines.push(entry("Ethnicity:", ethnicity.as_str()));
        }
        if let Some(subgroup) = self.ancestry.subgroup() {
            lines.push(entry("Subgroup:", subgroup.as_str()));
        }
        lines
    }

    pub fn gender_lines(&self) -> Vec<String> {
        vec![entry("Gender:", self.ancestry.gender().as_str())]
    }

    pub fn trait_lines(&self) -> Vec<String> {
        titled_list("Traits:", "Traits:", &self.traits)
    }

    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = self.name_lines();
        lines.extend(self.race_lines());
        lines.extend(self.gender_lines());
        lines.extend(notes_lines(self.ancestry.notes()));
        lines.extend(self.trait_lines());
        lines
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

/// `Note:` for a single note, `Notes:` followed by one note per line
/// otherwise. Nothing when there are no notes.
pub fn notes_lines(notes: &[String]) -> Vec<String> {
    titled_list("Note:", "Notes:", notes)
}

/// One entry inline under `single`, or `plural` followed by an indented
/// line per item.
pub(crate) fn titled_list(single: &str, plural: &str, items: &[String]) -> Vec<String> {
    match items {
        [] => Vec::new(),
        [only] if single != plural => vec![entry(single, only)],
        _ => {
            let mut lines = vec![entry(plural, "")];
            lines.extend(items.iter().map(|item| entry("", item)));
            lines
        }
    }
}
