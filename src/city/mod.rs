//! A settlement built from a sparse `city:` document. Missing details are
//! rolled, statistics derived, and the result answers "who lives here"
//! questions for the other generators.

pub mod config;
pub mod demographics;
pub mod modifiers;
pub mod npcs;
mod report;

use std::path::Path;

use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::error::{ConfigError, GenerationError, Result};
use crate::model::{
    Alignment, Ancestry, CITY_SIZE_LIMITS, CharacterClass, Disadvantage, Ethic, Government,
    HumanEthnicity, Morality, Quality, SettlementType,
};
use crate::rando;

use self::config::{CityConfig, CityDocument, NumberOrText, OneOrMany};
use self::demographics::Demographics;
use self::modifiers::{Modifiers, Profile};
use self::npcs::NpcRoster;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    region: String,
    alignment: Alignment,
    settlement_type: SettlementType,
    population: u32,
    government: Government,
    qualities: Vec<Quality>,
    disadvantages: Vec<Disadvantage>,
    base_value: u32,
    purchase_limit: u32,
    spellcasting: i32,
    modifiers: Modifiers,
    demographics: Demographics,
    roster: NpcRoster,
    npcs: Vec<String>,
}

/// What the `disadvantages` key asked for.
enum DisadvantageRequest {
    Listed(Vec<Disadvantage>),
    Random,
}

impl City {
    pub fn load(path: &Path, rng: &mut dyn RngCore) -> Result<Self> {
        let document = CityDocument::load(path)?;
        let city = Self::from_config(document.city, rng)?;
        info!(path = %path.display(), name = %city.name, "loaded city");
        Ok(city)
    }

    /// Validate, fill the gaps, then derive. Gaps are rolled in a fixed order
    /// so a seeded RNG always builds the same city.
    pub fn from_config(config: CityConfig, rng: &mut dyn RngCore) -> Result<Self> {
        let name = config.name.ok_or_else(|| ConfigError::missing("city", "name"))?;
        let region = config
            .region
            .ok_or_else(|| ConfigError::missing("city", "region"))?;
        let shares = config
            .ancestry
            .ok_or_else(|| ConfigError::missing("city", "ancestry"))?;
        let demographics = Demographics::from_config(&shares)?;

        let disadvantages = match config.disadvantages {
            None => DisadvantageRequest::Listed(Vec::new()),
            Some(None) => DisadvantageRequest::Random,
            Some(Some(listed)) => DisadvantageRequest::Listed(parse_all(
                listed,
                "disadvantage",
                Disadvantage::parse,
            )?),
        };
        let alignment = config
            .alignment
            .map(|a| Alignment::parse(&a).ok_or_else(|| ConfigError::unsupported("alignment", a)))
            .transpose()?;
        let government = config
            .government
            .map(|g| Government::parse(&g).ok_or_else(|| ConfigError::unsupported("government", g)))
            .transpose()?;
        let population = config.population.as_ref().map(parse_population).transpose()?;
        let qualities = match config.qualities {
            Some(listed) => parse_all(listed, "quality", Quality::parse)?,
            None => Vec::new(),
        };

        let base_value = config
            .base_value
            .map(|b| b.to_u32("base_value"))
            .transpose()?;
        let npcs = config.npcs.unwrap_or_default();
        let settlement_type = config
            .settlement_type
            .map(|t| {
                SettlementType::parse(&t).ok_or_else(|| ConfigError::unsupported("city type", t))
            })
            .transpose()?;

        let population = match population {
            Some(p) => p,
            None => {
                let (low, high) = CITY_SIZE_LIMITS;
                rando::rand_integer(rng, i64::from(low), i64::from(high)) as u32
            }
        };
        let disadvantages = match disadvantages {
            DisadvantageRequest::Listed(listed) => listed,
            DisadvantageRequest::Random => vec![*rando::choose(rng, Disadvantage::ALL)?],
        };
        let alignment = match alignment {
            Some(a) => a,
            None => random_alignment(rng)?,
        };
        let government = match government {
            Some(g) => g,
            None => *rando::choose(rng, Government::ALL)?,
        };

        let settlement_type =
            settlement_type.unwrap_or_else(|| SettlementType::from_population(population));
        let qualities = if qualities.is_empty() {
            let n = settlement_type.stats().qualities;
            Quality::SUPPORTED.choose_multiple(&mut *rng, n).cloned().collect()
        } else {
            qualities
        };

        let profile = Profile {
            settlement_type,
            alignment,
            government,
            qualities: &qualities,
            disadvantages: &disadvantages,
        };
        let base_value = base_value.unwrap_or_else(|| profile.base_value());
        let purchase_limit = profile.purchase_limit();
        let spellcasting = profile.spellcasting();
        let modifiers = profile.modifiers();

        let roster = NpcRoster::roll(rng, settlement_type, &demographics, population);
        let npcs = if npcs.is_empty() { roster.lines() } else { npcs };

        debug!(
            %name,
            population,
            settlement_type = %settlement_type,
            %alignment,
            %government,
            base_value,
            purchase_limit,
            spellcasting,
            %modifiers,
            "derived city"
        );

        Ok(Self {
            name,
            region,
            alignment,
            settlement_type,
            population,
            government,
            qualities,
            disadvantages,
            base_value,
            purchase_limit,
            spellcasting,
            modifiers,
            demographics,
            roster,
            npcs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn settlement_type(&self) -> SettlementType {
        self.settlement_type
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn government(&self) -> Government {
        self.government
    }

    pub fn qualities(&self) -> &[Quality] {
        &self.qualities
    }

    pub fn disadvantages(&self) -> &[Disadvantage] {
        &self.disadvantages
    }

    pub fn base_value(&self) -> u32 {
        self.base_value
    }

    pub fn purchase_limit(&self) -> u32 {
        self.purchase_limit
    }

    pub fn spellcasting(&self) -> i32 {
        self.spellcasting
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn roster(&self) -> &NpcRoster {
        &self.roster
    }

    /// Printable NPC lines: the configured list, or the rolled roster.
    pub fn npcs(&self) -> &[String] {
        &self.npcs
    }

    pub fn random_ancestry(
        &self,
        rng: &mut dyn RngCore,
    ) -> std::result::Result<Ancestry, GenerationError> {
        self.demographics.random_ancestry(rng)
    }

    pub fn random_human_ethnicity(
        &self,
        rng: &mut dyn RngCore,
    ) -> std::result::Result<HumanEthnicity, GenerationError> {
        self.demographics.random_human_ethnicity(rng)
    }

    pub fn random_npc_class_level(
        &self,
        rng: &mut dyn RngCore,
        min_level: u32,
    ) -> std::result::Result<(CharacterClass, u32), GenerationError> {
        self.roster.random_class_level(rng, min_level)
    }
}

fn parse_all<T>(
    listed: OneOrMany,
    kind: &'static str,
    parse: fn(&str) -> Option<T>,
) -> std::result::Result<Vec<T>, ConfigError> {
    listed
        .into_vec()
        .into_iter()
        .map(|s| parse(&s).ok_or_else(|| ConfigError::unsupported(kind, s)))
        .collect()
}

fn parse_population(value: &NumberOrText) -> std::result::Result<u32, ConfigError> {
    let population = value.to_u32("population")?;
    if population == 0 {
        return Err(ConfigError::out_of_range(
            "population",
            1.0,
            f64::from(u32::MAX),
            0.0,
        ));
    }
    Ok(population)
}

fn random_alignment(rng: &mut dyn RngCore) -> std::result::Result<Alignment, GenerationError> {
    let ethic = *rando::choose(rng, Ethic::ALL)?;
    let morality = *rando::choose(rng, Morality::ALL)?;
    Ok(Alignment::new(ethic, morality))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const HUMANS: &str = "    Human:
      Garundi: 5
      Keleshite: 5
      Kellid: 5
      Mwangi: 5
      Nidalese: 5
      Shoanti: 5
      Taldan: 30
      Tian: 5
      Ulfen: 5
      Varisian: 5
      Vudrani: 5
";

    fn config(extra: &str) -> CityConfig {
        let yaml = format!(
            "city:\n  name: Ravenmoor\n  region: Varisia\n  ancestry:\n    Dwarf: 10\n    Elf: 10\n{HUMANS}{extra}"
        );
        serde_yaml_ng::from_str::<CityDocument>(&yaml).unwrap().city
    }

    fn build(extra: &str, seed: u64) -> Result<City> {
        City::from_config(config(extra), &mut rando::make_rng(Some(seed)))
    }

    #[test]
    fn sparse_config_is_completed() {
        let city = build("", 4).unwrap();
        assert!((5..=200_000).contains(&city.population()));
        assert_eq!(
            city.settlement_type(),
            SettlementType::from_population(city.population())
        );
        assert_eq!(
            city.qualities().len(),
            city.settlement_type().stats().qualities
        );
        assert!(city.disadvantages().is_empty());
        assert!(!city.npcs().is_empty());
    }

    #[test]
    fn random_qualities_are_distinct() {
        for seed in 0..20 {
            let city = build("  population: 30000\n", seed).unwrap();
            let qualities = city.qualities();
            assert_eq!(qualities.len(), 6);
            for (i, q) in qualities.iter().enumerate() {
                assert!(!qualities[i + 1..].contains(q), "{q} repeated");
            }
        }
    }

    #[test]
    fn given_values_are_kept() {
        let city = build(
            "  population: '1,500'
  alignment: Lawful Good
  government: Council
  qualities: [Academic, Racially Intolerant (Elves)]
  disadvantages: Plagued
  base_value: 1234
  npcs: [Mayor Hollis]
",
            1,
        )
        .unwrap();
        assert_eq!(city.population(), 1500);
        assert_eq!(city.settlement_type(), SettlementType::SmallTown);
        assert_eq!(city.alignment().to_string(), "Lawful Good");
        assert_eq!(city.government(), Government::Council);
        assert_eq!(
            city.qualities(),
            &[
                Quality::Academic,
                Quality::RaciallyIntolerant(Some("(Elves)".to_string()))
            ]
        );
        assert_eq!(city.disadvantages(), &[Disadvantage::Plagued]);
        assert_eq!(city.base_value(), 1234);
        assert_eq!(city.npcs(), &["Mayor Hollis".to_string()]);
        assert_eq!(city.spellcasting(), 5);
    }

    #[test]
    fn null_disadvantage_is_rolled() {
        let city = build("  disadvantages:\n", 2).unwrap();
        assert_eq!(city.disadvantages().len(), 1);
    }

    #[test]
    fn explicit_type_overrides_population() {
        let city = build("  population: 100\n  type: Metropolis\n", 2).unwrap();
        assert_eq!(city.settlement_type(), SettlementType::Metropolis);
    }

    #[test]
    fn roster_sums_to_population() {
        let city = build("  population: 4000\n", 8).unwrap();
        assert_eq!(city.roster().total(), 4000);
    }

    #[test]
    fn same_seed_same_city() {
        assert_eq!(build("", 21).unwrap(), build("", 21).unwrap());
    }

    #[test]
    fn invalid_values_are_fatal() {
        for (extra, kind) in [
            ("  government: Theocracy\n", "government"),
            ("  alignment: Neutral Neutral\n", "alignment"),
            ("  qualities: Haunted\n", "quality"),
            ("  disadvantages: [Cursed, Doomed]\n", "disadvantage"),
            ("  type: Megalopolis\n", "city type"),
        ] {
            match build(extra, 0) {
                Err(Error::Config(ConfigError::Unsupported { kind: k, .. })) => {
                    assert_eq!(k, kind)
                }
                other => panic!("{extra:?} gave {other:?}"),
            }
        }
        assert!(matches!(
            build("  population: lots\n", 0),
            Err(Error::Config(ConfigError::InvalidNumber { .. }))
        ));
    }

    #[test]
    fn mandatory_keys() {
        let missing = serde_yaml_ng::from_str::<CityDocument>("city:\n  region: Varisia\n")
            .unwrap()
            .city;
        let err = City::from_config(missing, &mut rando::make_rng(Some(0))).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingKey { ref key, .. }) if key == "name"
        ));
    }

    #[test]
    fn samplers_draw_from_residents() {
        let city = build("  population: 20000\n", 5).unwrap();
        let mut rng = rando::make_rng(Some(5));
        for _ in 0..50 {
            let ancestry = city.random_ancestry(&mut rng).unwrap();
            assert!(matches!(
                ancestry,
                Ancestry::Dwarf | Ancestry::Elf | Ancestry::Human
            ));
            let (_, level) = city.random_npc_class_level(&mut rng, 2).unwrap();
            assert!(level >= 2);
        }
        assert!(matches!(
            city.random_npc_class_level(&mut rng, 21),
            Err(GenerationError::NoCitizen { min_level: 21 })
        ));
    }
}
