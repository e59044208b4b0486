//! Run-scoped naming policy: thresholds, allowlist, and path exclusions.
//!
//! A `Policy` is loaded once at startup and passed by reference to
//! everything that needs it. Loading fails fast: a missing or malformed
//! config or allowlist aborts the run before any file is scanned.

mod allowlist;
mod config;

use std::path::{Path, PathBuf};

use globset::GlobSet;
use thiserror::Error;

pub use allowlist::{Allowlist, AllowlistError};
pub use config::{Config, ConfigError, LengthLimits, Thresholds};

use crate::detect::Violation;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default allowlist file name.
pub const ALLOWLIST_FILE_NAME: &str = "allowlist.txt";

/// Startup errors.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Allowlist(#[from] AllowlistError),
    #[error("cannot locate the splinter installation: {0}")]
    Location(String),
}

/// Where the policy files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyPaths {
    pub config: PathBuf,
    pub allowlist: PathBuf,
}

impl PolicyPaths {
    /// Both files inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            config: dir.join(CONFIG_FILE_NAME),
            allowlist: dir.join(ALLOWLIST_FILE_NAME),
        }
    }

    /// Policy files for the running executable. See `for_executable`.
    pub fn beside_executable() -> Result<Self, PolicyError> {
        let exe = std::env::current_exe().map_err(|e| PolicyError::Location(e.to_string()))?;
        Self::for_executable(&exe)
    }

    /// The installation root is the parent of the directory holding the
    /// executable (`<root>/bin/splinter` → `<root>`). A cargo build lives
    /// one level deeper (`<root>/target/debug/splinter`), so the
    /// grandparent is used when only it holds a `config.json`.
    pub fn for_executable(exe: &Path) -> Result<Self, PolicyError> {
        let bin_dir = exe
            .parent()
            .ok_or_else(|| PolicyError::Location(format!("{} has no parent", exe.display())))?;
        let root = bin_dir.parent().unwrap_or(bin_dir);

        let installed = Self::in_dir(root);
        if installed.config.is_file() {
            return Ok(installed);
        }
        match root.parent() {
            Some(workspace) if workspace.join(CONFIG_FILE_NAME).is_file() => {
                Ok(Self::in_dir(workspace))
            }
            _ => Ok(installed),
        }
    }
}

/// Violations split by the allowlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    pub retained: Vec<Violation>,
    pub suppressed: Vec<Violation>,
}

/// Active naming policy for one run.
#[derive(Debug, Clone)]
pub struct Policy {
    config: Config,
    allowlist: Allowlist,
    exclusions: GlobSet,
}

impl Policy {
    /// Build a policy from an already loaded config and allowlist.
    pub fn new(config: Config, allowlist: Allowlist) -> Result<Self, PolicyError> {
        config.validate()?;
        let exclusions = config.exclusions()?;
        Ok(Self {
            config,
            allowlist,
            exclusions,
        })
    }

    /// Load config and allowlist from disk.
    pub fn load(paths: &PolicyPaths) -> Result<Self, PolicyError> {
        let config = Config::parse_file(&paths.config)?;
        tracing::debug!(
            path = %paths.config.display(),
            short_variable = config.short_variable_length,
            long_variable = config.long_variable_length,
            short_function = config.short_function_length,
            long_function = config.long_function_length,
            "loaded config"
        );

        let allowlist = Allowlist::parse_file(&paths.allowlist)?;
        tracing::debug!(
            path = %paths.allowlist.display(),
            entries = allowlist.len(),
            "loaded allowlist"
        );

        Self::new(config, allowlist)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn thresholds(&self) -> Thresholds {
        self.config.thresholds()
    }

    pub fn is_allowed(&self, identifier: &str) -> bool {
        self.allowlist.contains(identifier)
    }

    /// Check a path (relative to the scan root) against `excluded-paths`.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        !self.exclusions.is_empty() && self.exclusions.is_match(path)
    }

    /// Split raw violations into reported and allowlisted, keeping order.
    pub fn resolve(&self, violations: Vec<Violation>) -> Resolved {
        let (suppressed, retained): (Vec<Violation>, Vec<Violation>) = violations
            .into_iter()
            .partition(|v| self.is_allowed(&v.identifier));
        Resolved {
            retained,
            suppressed,
        }
    }
}
