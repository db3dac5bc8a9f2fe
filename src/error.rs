//! Error types for the generators.
//!
//! Configuration and file errors are fatal at load time. Generation errors
//! are reported by the menu, which keeps running.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid or incomplete city / guild configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing mandatory key `{key}` in {section} config")]
    MissingKey { section: &'static str, key: String },

    #[error("unsupported {kind}: {value}")]
    Unsupported { kind: &'static str, value: String },

    #[error("invalid number for `{key}`: {value}")]
    InvalidNumber { key: String, value: String },

    #[error("`{key}` must be within {min}..={max}, got {value}")]
    OutOfRange {
        key: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    pub fn missing(section: &'static str, key: impl Into<String>) -> Self {
        Self::MissingKey {
            section,
            key: key.into(),
        }
    }

    pub fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unsupported {
            kind,
            value: value.into(),
        }
    }

    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn out_of_range(key: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        Self::OutOfRange {
            key: key.into(),
            min,
            max,
            value,
        }
    }

    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Problems reading word lists or YAML documents.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("word list {} has no entries", path.display())]
    EmptyWordList { path: PathBuf },
}

impl FileError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn yaml(path: &Path, source: serde_yaml_ng::Error) -> Self {
        Self::Yaml {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A request the current tables cannot satisfy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("weighted table has zero total weight")]
    ZeroWeight,

    #[error("weighted table contains an invalid weight: {0}")]
    InvalidWeight(f64),

    #[error("cannot choose from an empty list")]
    EmptyChoice,

    #[error("no citizen of level {min_level} or higher lives here")]
    NoCitizen { min_level: u32 },

    #[error("bounty level must be within 1..=20, got {0}")]
    InvalidLevel(i64),

    #[error("no city config provided")]
    NoCity,

    #[error("no guild config provided")]
    NoGuild,
}
