//! Ancestry percentages of a city and the samplers built on them.

use std::collections::BTreeMap;

use rand::RngCore;

use crate::error::{ConfigError, GenerationError};
use crate::model::{Ancestry, HumanEthnicity};
use crate::rando;

use super::config::AncestryShare;

/// Percentage of the population per non-human ancestry and per human
/// ethnicity. Missing non-human ancestries count as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    ancestries: BTreeMap<Ancestry, f64>,
    ethnicities: BTreeMap<HumanEthnicity, f64>,
}

impl Demographics {
    /// Every human ethnicity must be listed under `Human`.
    pub fn from_config(shares: &BTreeMap<String, AncestryShare>) -> Result<Self, ConfigError> {
        let mut ancestries = BTreeMap::new();
        let mut ethnicities = BTreeMap::new();

        for (key, share) in shares {
            let ancestry =
                Ancestry::parse(key).ok_or_else(|| ConfigError::unsupported("ancestry", key))?;
            match (ancestry, share) {
                (Ancestry::Human, AncestryShare::Ethnicities(map)) => {
                    for (name, value) in map {
                        let ethnicity = HumanEthnicity::parse(name)
                            .ok_or_else(|| ConfigError::unsupported("human ethnicity", name))?;
                        let key = format!("ancestry.Human.{name}");
                        let value = value.to_f64(&key)?;
                        ethnicities.insert(ethnicity, percent(&key, value)?);
                    }
                }
                (Ancestry::Human, AncestryShare::Percent(_)) => {
                    return Err(ConfigError::invalid(
                        "ancestry.Human",
                        "expected a percentage per human ethnicity",
                    ));
                }
                (other, AncestryShare::Percent(value)) => {
                    let key = format!("ancestry.{other}");
                    let value = value.to_f64(&key)?;
                    ancestries.insert(other, percent(&key, value)?);
                }
                (other, AncestryShare::Ethnicities(_)) => {
                    return Err(ConfigError::invalid(
                        format!("ancestry.{other}"),
                        "expected a single percentage",
                    ));
                }
            }
        }

        if let Some(missing) = HumanEthnicity::ALL
            .iter()
            .find(|e| !ethnicities.contains_key(*e))
        {
            return Err(ConfigError::missing("city", format!("ancestry.Human.{missing}")));
        }

        Ok(Self {
            ancestries,
            ethnicities,
        })
    }

    pub fn ethnicity_percent(&self, ethnicity: HumanEthnicity) -> f64 {
        self.ethnicities.get(&ethnicity).copied().unwrap_or(0.0)
    }

    /// Humans are the sum of their ethnicities.
    pub fn percent(&self, ancestry: Ancestry) -> f64 {
        match ancestry {
            Ancestry::Human => self.ethnicities.values().sum(),
            other => self.ancestries.get(&other).copied().unwrap_or(0.0),
        }
    }

    pub fn mean_ethnicity_percent(&self) -> f64 {
        let total: f64 = HumanEthnicity::ALL
            .iter()
            .map(|&e| self.ethnicity_percent(e))
            .sum();
        total / HumanEthnicity::ALL.len() as f64
    }

    /// Weighted by percentage, with Human expanded into its ethnicities.
    pub fn random_ancestry(&self, rng: &mut dyn RngCore) -> Result<Ancestry, GenerationError> {
        let mut table = Vec::new();
        for &ancestry in Ancestry::ALL {
            if ancestry == Ancestry::Human {
                table.extend(
                    HumanEthnicity::ALL
                        .iter()
                        .map(|&e| (Ancestry::Human, self.ethnicity_percent(e))),
                );
            } else {
                table.push((ancestry, self.percent(ancestry)));
            }
        }
        let weights: Vec<f64> = table.iter().map(|(_, w)| *w).collect();
        let index = rando::weighted_index_float(rng, &weights)?;
        Ok(table[index].0)
    }

    pub fn random_human_ethnicity(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<HumanEthnicity, GenerationError> {
        let weights: Vec<f64> = HumanEthnicity::ALL
            .iter()
            .map(|&e| self.ethnicity_percent(e))
            .collect();
        let index = rando::weighted_index_float(rng, &weights)?;
        Ok(HumanEthnicity::ALL[index])
    }

    /// Residents per ancestry, largest first. Ties keep ancestry order.
    pub fn headcounts(&self, population: u32) -> Vec<(Ancestry, i64)> {
        let mut counts: Vec<(Ancestry, i64)> = Ancestry::ALL
            .iter()
            .map(|&a| (a, (self.percent(a) * f64::from(population) / 100.0) as i64))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// `"1200 Humans; 300 Elves; 50 other"`: the `len` largest ancestries,
    /// then everyone else.
    pub fn breakdown(&self, population: u32, len: usize) -> String {
        let top: Vec<(Ancestry, i64)> = self.headcounts(population).into_iter().take(len).collect();
        let listed: i64 = top.iter().map(|(_, n)| n).sum();
        let mut parts: Vec<String> = top
            .iter()
            .map(|(ancestry, n)| {
                let label = if *n == 1 {
                    ancestry.as_str()
                } else {
                    ancestry.plural()
                };
                format!("{n} {label}")
            })
            .collect();
        parts.push(format!("{} other", i64::from(population) - listed));
        parts.join("; ")
    }
}

fn percent(key: &str, value: f64) -> Result<f64, ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::out_of_range(key, 0.0, 100.0, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::config::NumberOrText;

    fn human(values: &[(HumanEthnicity, f64)]) -> AncestryShare {
        let mut map: BTreeMap<String, NumberOrText> = HumanEthnicity::ALL
            .iter()
            .map(|e| (e.to_string(), NumberOrText::Number(0.0)))
            .collect();
        for (e, v) in values {
            map.insert(e.to_string(), NumberOrText::Number(*v));
        }
        AncestryShare::Ethnicities(map)
    }

    fn shares(
        others: &[(&str, f64)],
        humans: &[(HumanEthnicity, f64)],
    ) -> BTreeMap<String, AncestryShare> {
        let mut map: BTreeMap<String, AncestryShare> = others
            .iter()
            .map(|(k, v)| (k.to_string(), AncestryShare::Percent(NumberOrText::Number(*v))))
            .collect();
        map.insert("Human".to_string(), human(humans));
        map
    }

    #[test]
    fn humans_sum_their_ethnicities() {
        let d = Demographics::from_config(&shares(
            &[("Elf", 10.0)],
            &[(HumanEthnicity::Taldan, 60.0), (HumanEthnicity::Tian, 20.0)],
        ))
        .unwrap();
        assert_eq!(d.percent(Ancestry::Human), 80.0);
        assert_eq!(d.percent(Ancestry::Elf), 10.0);
        assert_eq!(d.percent(Ancestry::Dwarf), 0.0);
    }

    #[test]
    fn missing_ethnicity_is_rejected() {
        let mut map = shares(&[], &[(HumanEthnicity::Taldan, 100.0)]);
        if let Some(AncestryShare::Ethnicities(h)) = map.get_mut("Human") {
            h.remove("Ulfen");
        }
        let err = Demographics::from_config(&map).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { ref key, .. } if key.ends_with("Ulfen")));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = Demographics::from_config(&shares(&[("Orc", 5.0)], &[])).unwrap_err();
        assert_eq!(err, ConfigError::unsupported("ancestry", "Orc"));

        let mut map = shares(&[], &[]);
        if let Some(AncestryShare::Ethnicities(h)) = map.get_mut("Human") {
            h.insert("Azlanti".to_string(), NumberOrText::Number(1.0));
        }
        let err = Demographics::from_config(&map).unwrap_err();
        assert_eq!(err, ConfigError::unsupported("human ethnicity", "Azlanti"));
    }

    #[test]
    fn only_weighted_ancestries_are_drawn() {
        let d = Demographics::from_config(&shares(
            &[("Dwarf", 30.0)],
            &[(HumanEthnicity::Ulfen, 70.0)],
        ))
        .unwrap();
        let mut rng = rando::make_rng(Some(11));
        for _ in 0..200 {
            let a = d.random_ancestry(&mut rng).unwrap();
            assert!(matches!(a, Ancestry::Dwarf | Ancestry::Human), "{a}");
            assert_eq!(d.random_human_ethnicity(&mut rng).unwrap(), HumanEthnicity::Ulfen);
        }
    }

    #[test]
    fn empty_demographics_cannot_be_sampled() {
        let d = Demographics::from_config(&shares(&[], &[])).unwrap();
        let mut rng = rando::make_rng(Some(1));
        assert_eq!(d.random_ancestry(&mut rng), Err(GenerationError::ZeroWeight));
    }

    #[test]
    fn breakdown_lists_largest_then_other() {
        let d = Demographics::from_config(&shares(
            &[("Elf", 20.0), ("Dwarf", 10.0), ("Gnome", 5.0)],
            &[(HumanEthnicity::Taldan, 60.0)],
        ))
        .unwrap();
        assert_eq!(
            d.breakdown(1000, 3),
            "600 Humans; 200 Elves; 100 Dwarves; 100 other"
        );
    }

    #[test]
    fn breakdown_singular_for_one() {
        let d = Demographics::from_config(&shares(
            &[("Halfling", 10.0)],
            &[(HumanEthnicity::Kellid, 90.0)],
        ))
        .unwrap();
        assert_eq!(d.breakdown(10, 2), "9 Humans; 1 Halfling; 0 other");
    }
}
