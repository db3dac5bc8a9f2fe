//! A criminal guild loaded from a `guild:` document, its report, and the
//! jobs it hands out.

pub mod job;
pub mod tables;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::load_yaml_file;
use crate::error::{ConfigError, Result};
use crate::generator::Generator;
use crate::model::Specialty;
use crate::text::{banner, capitalize, format_number, numbered_list, rjust_lines};

use self::job::JobBoard;

/// Inclusive bounds of the guild's 1-to-10 scales.
pub const SCALE_LIMITS: (f64, f64) = (1.0, 10.0);

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildDocument {
    pub guild: GuildConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildConfig {
    pub details: Option<GuildDetails>,
    pub alignment: Option<GuildAlignment>,
    pub design: Option<GuildDesign>,
    pub specialties: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildDetails {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildAlignment {
    pub morals: Option<f64>,
    pub ethics: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuildDesign {
    pub goals: Option<f64>,
    pub territory: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    name: String,
    location: String,
    morals: f64,
    ethics: f64,
    goals: f64,
    territory: f64,
    specialties: Vec<(Specialty, f64)>,
    jobs: JobBoard,
}

impl Guild {
    pub fn load(path: &Path) -> Result<Self> {
        let document: GuildDocument = load_yaml_file(path)?;
        let guild = Self::from_config(document.guild)?;
        info!(path = %path.display(), name = %guild.name, "loaded guild");
        Ok(guild)
    }

    /// Specialties left out entirely share the work evenly; once any is
    /// listed, the unlisted ones count as zero.
    pub fn from_config(config: GuildConfig) -> std::result::Result<Self, ConfigError> {
        let details = config
            .details
            .ok_or_else(|| ConfigError::missing("guild", "details"))?;
        let alignment = config
            .alignment
            .ok_or_else(|| ConfigError::missing("guild", "alignment"))?;
        let design = config
            .design
            .ok_or_else(|| ConfigError::missing("guild", "design"))?;

        let name = non_empty("details.name", details.name)?;
        let location = non_empty("details.location", details.location)?;
        let morals = scale("alignment.morals", alignment.morals)?;
        let ethics = scale("alignment.ethics", alignment.ethics)?;
        let goals = scale("design.goals", design.goals)?;
        let territory = scale("design.territory", design.territory)?;
        let specialties = specialties(config.specialties.unwrap_or_default())?;

        let jobs = JobBoard::new(&specialties, goals, territory);
        Ok(Self {
            name,
            location,
            morals,
            ethics,
            goals,
            territory,
            specialties,
            jobs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn morals(&self) -> f64 {
        self.morals
    }

    pub fn ethics(&self) -> f64 {
        self.ethics
    }

    pub fn goals(&self) -> f64 {
        self.goals
    }

    pub fn territory(&self) -> f64 {
        self.territory
    }

    /// Every specialty with its percentage, in canonical order.
    pub fn specialties(&self) -> &[(Specialty, f64)] {
        &self.specialties
    }

    pub fn jobs(&self) -> &JobBoard {
        &self.jobs
    }

    pub fn random_jobs(&self, generator: &mut Generator) -> Result<Vec<String>> {
        let count = generator.config().num_jobs;
        self.jobs.random_jobs(generator, count)
    }

    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![banner(&self.name.to_uppercase())];
        lines.push(format!("Location: {}", self.location));
        lines.push(String::new());

        lines.push(banner("ALIGNMENT"));
        lines.extend(rjust_lines(&[
            format!("Morals {}", format_number(self.morals)),
            format!("Ethics {}", format_number(self.ethics)),
        ]));
        lines.push(String::new());

        lines.push(banner("DESIGN"));
        lines.extend(rjust_lines(&[
            format!("Goals {}", format_number(self.goals)),
            format!("Territory {}", format_number(self.territory)),
        ]));
        lines.push(String::new());

        lines.push(banner("SPECIALTIES"));
        let specialties: Vec<String> = self
            .specialties
            .iter()
            .filter(|(_, pct)| *pct > 0.0)
            .map(|(s, pct)| format!("{}: {:>3}%", capitalize(s.as_str()), format_number(*pct)))
            .collect();
        lines.extend(rjust_lines(&specialties));
        lines.push(String::new());
        lines
    }
}

impl fmt::Display for Guild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report_lines().join("\n"))
    }
}

/// `Job List` banner over a numbered list.
pub fn job_list_lines(jobs: &[String]) -> Vec<String> {
    let mut lines = vec![banner("Job List")];
    lines.extend(numbered_list(jobs));
    lines
}

fn non_empty(key: &'static str, value: Option<String>) -> std::result::Result<String, ConfigError> {
    match value {
        None => Err(ConfigError::missing("guild", key)),
        Some(v) if v.trim().is_empty() => Err(ConfigError::invalid(key, "may not be empty")),
        Some(v) => Ok(v),
    }
}

fn scale(key: &'static str, value: Option<f64>) -> std::result::Result<f64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::missing("guild", key))?;
    let (min, max) = SCALE_LIMITS;
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::out_of_range(key, min, max, value));
    }
    Ok(value)
}

fn specialties(
    listed: BTreeMap<String, f64>,
) -> std::result::Result<Vec<(Specialty, f64)>, ConfigError> {
    if listed.is_empty() {
        let even = (100 / Specialty::ALL.len()) as f64;
        return Ok(Specialty::ALL.iter().map(|&s| (s, even)).collect());
    }

    let mut percents: BTreeMap<Specialty, f64> = BTreeMap::new();
    for (name, pct) in listed {
        let specialty =
            Specialty::parse(&name).ok_or_else(|| ConfigError::unsupported("specialty", name))?;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ConfigError::out_of_range(
                format!("specialties.{specialty}"),
                0.0,
                100.0,
                pct,
            ));
        }
        percents.insert(specialty, pct);
    }
    Ok(Specialty::ALL
        .iter()
        .map(|&s| (s, percents.get(&s).copied().unwrap_or(0.0)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "guild:
  details:
    name: The Black Collar Union
    location: Magnimar
  alignment:
    morals: 3
    ethics: 7.5
  design:
    goals: 6
    territory: 10
  specialties:
    property: 40
    smuggling: 35
    violence: 5
";

    fn config(yaml: &str) -> GuildConfig {
        serde_yaml_ng::from_str::<GuildDocument>(yaml).unwrap().guild
    }

    #[test]
    fn report_layout() {
        let guild = Guild::from_config(config(YAML)).unwrap();
        assert_eq!(
            guild.report_lines(),
            vec![
                "----------------------\nTHE BLACK COLLAR UNION\n----------------------",
                "Location: Magnimar",
                "",
                "---------\nALIGNMENT\n---------",
                "  Morals 3",
                "Ethics 7.5",
                "",
                "------\nDESIGN\n------",
                "     Goals 6",
                "Territory 10",
                "",
                "-----------\nSPECIALTIES\n-----------",
                " Property:  40%",
                "Smuggling:  35%",
                " Violence:   5%",
                "",
            ]
        );
    }

    #[test]
    fn unlisted_specialties_are_zero() {
        let guild = Guild::from_config(config(YAML)).unwrap();
        let drugs = guild
            .specialties()
            .iter()
            .find(|(s, _)| *s == Specialty::Drugs)
            .unwrap();
        assert_eq!(drugs.1, 0.0);
        assert_eq!(guild.specialties().len(), 10);
    }

    #[test]
    fn missing_specialties_share_evenly() {
        let yaml = YAML.split("  specialties:").next().unwrap().to_string();
        let guild = Guild::from_config(config(&yaml)).unwrap();
        assert!(guild.specialties().iter().all(|(_, pct)| *pct == 10.0));
    }

    #[test]
    fn scales_are_bounded() {
        let yaml = YAML.replace("territory: 10", "territory: 11");
        let err = Guild::from_config(config(&yaml)).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { ref key, .. } if key == "design.territory"));

        let yaml = YAML.replace("morals: 3", "morals: 0");
        assert!(Guild::from_config(config(&yaml)).is_err());
    }

    #[test]
    fn bad_specialties_are_rejected() {
        let yaml = YAML.replace("violence: 5", "piracy: 5");
        assert_eq!(
            Guild::from_config(config(&yaml)).unwrap_err(),
            ConfigError::unsupported("specialty", "piracy")
        );
        let yaml = YAML.replace("violence: 5", "violence: 101");
        assert!(matches!(
            Guild::from_config(config(&yaml)).unwrap_err(),
            ConfigError::OutOfRange { .. }
        ));
    }

    #[test]
    fn missing_sections_and_names() {
        let err = Guild::from_config(config("guild:\n  details:\n    name: A\n")).unwrap_err();
        assert_eq!(err, ConfigError::missing("guild", "alignment"));

        let yaml = YAML.replace("location: Magnimar", "location: ''");
        assert!(matches!(
            Guild::from_config(config(&yaml)).unwrap_err(),
            ConfigError::Invalid { .. }
        ));
    }

    #[test]
    fn unknown_keys_do_not_parse() {
        let yaml = YAML.replace("design:", "designs:");
        assert!(serde_yaml_ng::from_str::<GuildDocument>(&yaml).is_err());
    }

    #[test]
    fn job_list_is_numbered() {
        let jobs: Vec<String> = (1..=10).map(|i| format!("Job {i}")).collect();
        let lines = job_list_lines(&jobs);
        assert_eq!(lines[0], "--------\nJob List\n--------");
        assert_eq!(lines[1], " 1. Job 1");
        assert_eq!(lines[10], "10. Job 10");
    }
}
