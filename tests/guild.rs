mod common;

use std::collections::HashSet;

use gamemaster_guidance::guild::job::JobCategory;
use gamemaster_guidance::guild::job_list_lines;
use gamemaster_guidance::guild::tables::sub_specialties;
use gamemaster_guidance::model::{GuildJob, Specialty};
use gamemaster_guidance::text::capitalize_first;
use gamemaster_guidance::{ConfigError, Error, Guild};

fn labels() -> HashSet<String> {
    let mut labels: HashSet<String> = Specialty::ALL
        .iter()
        .flat_map(|&s| sub_specialties(s).iter().map(|sub| capitalize_first(sub.name)))
        .collect();
    labels.extend(GuildJob::ALL.iter().map(|j| capitalize_first(j.as_str())));
    labels
}

#[test]
fn demo_guild_report() {
    let guild = common::demo_guild();
    assert_eq!(guild.name(), "The Sczarni of Ravenmoor");
    assert_eq!(guild.goals(), 7.0);
    assert_eq!(
        guild.jobs().weight_of(JobCategory::Guild(GuildJob::Expansion)),
        70.0
    );
    let report = guild.report_lines();
    assert_eq!(report[1], "Location: Ravenmoor");
    assert!(report.contains(&"    Property:  35%".to_string()));
    assert!(!report.iter().any(|l| l.contains("Drugs")));
}

#[test]
fn jobs_are_filled_sentences() {
    let guild = common::demo_guild();
    let mut generator = common::generator(13);
    let labels = labels();
    for _ in 0..20 {
        let jobs = guild.random_jobs(&mut generator).unwrap();
        assert_eq!(jobs.len(), 10);
        for job in &jobs {
            let (label, sentence) = job.split_once(": ").unwrap();
            assert!(labels.contains(label), "{job}");
            assert!(!sentence.contains('{') && !sentence.contains('}'), "{job}");
            assert!(sentence.ends_with('.'), "{job}");
            assert!(sentence.chars().next().unwrap().is_uppercase(), "{job}");
        }
    }
}

#[test]
fn zero_percent_specialties_never_come_up() {
    let guild = common::demo_guild();
    let mut generator = common::generator(14);
    let excluded: HashSet<String> = [Specialty::Drugs, Specialty::Corruption]
        .iter()
        .flat_map(|&s| sub_specialties(s).iter().map(|sub| capitalize_first(sub.name)))
        .collect();
    for _ in 0..30 {
        for job in guild.random_jobs(&mut generator).unwrap() {
            let (label, _) = job.split_once(": ").unwrap();
            assert!(!excluded.contains(label), "{job}");
        }
    }
}

#[test]
fn same_seed_same_jobs() {
    let guild = common::demo_guild();
    let jobs = |seed| guild.random_jobs(&mut common::generator(seed)).unwrap();
    assert_eq!(jobs(40), jobs(40));
    let lines = job_list_lines(&jobs(40));
    assert_eq!(lines.len(), 11);
    assert!(lines[10].starts_with("10. "));
}

#[test]
fn broken_guild_files() {
    let file = common::write_yaml(
        "guild:
  details:
    name: Ash Hands
    location: Kaer Maga
  alignment:
    morals: 5
    ethics: 5
  design:
    goals: 5
    territory: 12
",
    );
    let err = Guild::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::OutOfRange { ref key, .. }) if key == "design.territory"
    ));

    let file = common::write_yaml("guild:\n  detials:\n    name: Typo\n");
    assert!(matches!(Guild::load(file.path()).unwrap_err(), Error::File(_)));
}
