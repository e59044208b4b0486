//! Threshold configuration loaded from `config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::{Category, NameKind};

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{short_key} ({short}) must not exceed {long_key} ({long})")]
    InvertedThresholds {
        short_key: &'static str,
        short: usize,
        long_key: &'static str,
        long: usize,
    },
    #[error("invalid excluded-paths pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Allowed length range for one kind of name. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    pub short: usize,
    pub long: usize,
}

impl LengthLimits {
    pub fn new(short: usize, long: usize) -> Self {
        Self { short, long }
    }

    /// `Some(true)` when too short, `Some(false)` when too long.
    ///
    /// The short check wins when both would apply.
    pub fn check(&self, len: usize) -> Option<bool> {
        if len < self.short {
            Some(true)
        } else if len > self.long {
            Some(false)
        } else {
            None
        }
    }
}

/// Length limits for every kind of name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub variable: LengthLimits,
    pub function: LengthLimits,
}

impl Thresholds {
    pub fn limits(&self, kind: NameKind) -> LengthLimits {
        match kind {
            NameKind::Variable => self.variable,
            NameKind::Function => self.function,
        }
    }

    /// Classify a name of the given kind and length.
    pub fn classify(&self, kind: NameKind, len: usize) -> Option<Category> {
        self.limits(kind)
            .check(len)
            .map(|short| Category::for_name(kind, short))
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub short_variable_length: usize,
    pub long_variable_length: usize,
    pub short_function_length: usize,
    pub long_function_length: usize,
    /// Glob patterns for paths to skip, relative to the scanned root.
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Build a config with the four thresholds and no exclusions.
    pub fn new(
        short_variable_length: usize,
        long_variable_length: usize,
        short_function_length: usize,
        long_function_length: usize,
    ) -> Self {
        Self {
            short_variable_length,
            long_variable_length,
            short_function_length,
            long_function_length,
            excluded_paths: Vec::new(),
        }
    }

    /// Read, parse and validate a JSON config file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that each short threshold does not exceed its long threshold
    /// and that every exclusion pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_variable_length > self.long_variable_length {
            return Err(ConfigError::InvertedThresholds {
                short_key: "short-variable-length",
                short: self.short_variable_length,
                long_key: "long-variable-length",
                long: self.long_variable_length,
            });
        }
        if self.short_function_length > self.long_function_length {
            return Err(ConfigError::InvertedThresholds {
                short_key: "short-function-length",
                short: self.short_function_length,
                long_key: "long-function-length",
                long: self.long_function_length,
            });
        }
        self.exclusions()?;
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            variable: LengthLimits::new(self.short_variable_length, self.long_variable_length),
            function: LengthLimits::new(self.short_function_length, self.long_function_length),
        }
    }

    /// Compile `excluded-paths` into a single matcher.
    pub fn exclusions(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_paths {
            let glob = Glob::new(pattern).map_err(|source| ConfigError::Glob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ConfigError::Glob {
            pattern: self.excluded_paths.join(", "),
            source,
        })
    }
}
