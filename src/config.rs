use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{FileError, Result};

pub const DATABASES_DIR_ENV: &str = "GG_DATABASES_DIR";
pub const SEED_ENV: &str = "GG_SEED";

/// Configuration for a generator session.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory holding the word-list files.
    pub databases_dir: PathBuf,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Traits drawn per character.
    pub num_traits: usize,
    /// Jobs listed per guild job request.
    pub num_jobs: usize,
    /// Complications drawn per bounty.
    pub num_complications: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            databases_dir: PathBuf::from("databases"),
            seed: None,
            num_traits: 3,
            num_jobs: 10,
            num_complications: 3,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by `GG_DATABASES_DIR` and `GG_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATABASES_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.databases_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(SEED_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring unparsable {SEED_ENV}"),
            }
        }
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_databases_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.databases_dir = dir.into();
        self
    }
}

/// Read and deserialize a YAML document.
pub fn load_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| FileError::read(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read yaml document");
    let doc = serde_yaml_ng::from_str(&text).map_err(|e| FileError::yaml(path, e))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.databases_dir, PathBuf::from("databases"));
        assert_eq!(config.seed, None);
        assert_eq!(config.num_traits, 3);
        assert_eq!(config.num_jobs, 10);
        assert_eq!(config.num_complications, 3);
    }

    #[test]
    fn env_overrides() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (DATABASES_DIR_ENV, "/tmp/words"),
            (SEED_ENV, "77"),
        ]));
        assert_eq!(config.databases_dir, PathBuf::from("/tmp/words"));
        assert_eq!(config.seed, Some(77));
    }

    #[test]
    fn bad_seed_is_ignored() {
        let config = GeneratorConfig::from_lookup(lookup(&[(SEED_ENV, "soon")]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn missing_yaml_is_not_found() {
        let err = load_yaml_file::<serde_yaml_ng::Value>(Path::new("no/such/file.yml"))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::File(FileError::NotFound { .. })
        ));
    }
}
