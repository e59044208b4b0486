//! Identifiers exempt from naming checks.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("cannot read allowlist {path}: {source}")]
pub struct AllowlistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Set of identifiers that are never reported.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    names: HashSet<String>,
}

impl Allowlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an allowlist file, one identifier per line.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, AllowlistError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AllowlistError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse allowlist text. Line terminators are stripped; blank lines and
    /// `#` comment lines are skipped since neither can be an identifier.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.names.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Allowlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
