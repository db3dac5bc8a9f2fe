//! The `city:` YAML document as written by hand. Everything but the
//! mandatory keys is optional; [`super::City::from_config`] validates and
//! fills the gaps.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::config::load_yaml_file;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct CityDocument {
    pub city: CityConfig,
}

impl CityDocument {
    pub fn load(path: &Path) -> Result<Self> {
        load_yaml_file(path)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityConfig {
    pub name: Option<String>,
    pub region: Option<String>,
    pub ancestry: Option<BTreeMap<String, AncestryShare>>,
    pub alignment: Option<String>,
    pub government: Option<String>,
    pub population: Option<NumberOrText>,
    pub qualities: Option<OneOrMany>,
    /// Absent: no disadvantages. Present but null: roll one.
    #[serde(default, deserialize_with = "present_or_null")]
    pub disadvantages: Option<Option<OneOrMany>>,
    #[serde(rename = "type")]
    pub settlement_type: Option<String>,
    pub base_value: Option<NumberOrText>,
    pub npcs: Option<Vec<String>>,
}

/// A non-human ancestry's percentage, or the per-ethnicity map under `Human`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AncestryShare {
    Percent(NumberOrText),
    Ethnicities(BTreeMap<String, NumberOrText>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Parse as a float. Text may carry thousands separators.
    pub fn to_f64(&self, key: &str) -> std::result::Result<f64, ConfigError> {
        match self {
            NumberOrText::Number(n) if n.is_finite() => Ok(*n),
            NumberOrText::Number(n) => Err(ConfigError::invalid_number(key, n.to_string())),
            NumberOrText::Text(s) => s
                .trim()
                .replace(',', "")
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| ConfigError::invalid_number(key, s.as_str())),
        }
    }

    /// Parse as a whole, non-negative number.
    pub fn to_u32(&self, key: &str) -> std::result::Result<u32, ConfigError> {
        let raw = match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s.clone(),
        };
        let value = self.to_f64(key)?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(ConfigError::invalid_number(key, raw));
        }
        Ok(value as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

fn present_or_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
