//! Core types for detection results.

use thiserror::Error;

use crate::parser::SyntaxError;

/// What kind of name a violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Variable,
    Function,
}

impl NameKind {
    fn label(&self) -> &'static str {
        match self {
            NameKind::Variable => "Variable",
            NameKind::Function => "Function",
        }
    }
}

/// Category of a naming violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ShortVariable,
    LongVariable,
    ShortFunction,
    LongFunction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ShortVariable => "short-variable",
            Category::LongVariable => "long-variable",
            Category::ShortFunction => "short-function",
            Category::LongFunction => "long-function",
        }
    }

    pub fn name_kind(&self) -> NameKind {
        match self {
            Category::ShortVariable | Category::LongVariable => NameKind::Variable,
            Category::ShortFunction | Category::LongFunction => NameKind::Function,
        }
    }

    pub fn is_short(&self) -> bool {
        matches!(self, Category::ShortVariable | Category::ShortFunction)
    }

    /// Build the category for a name kind and the side of the range it fell off.
    pub fn for_name(kind: NameKind, short: bool) -> Self {
        match (kind, short) {
            (NameKind::Variable, true) => Category::ShortVariable,
            (NameKind::Variable, false) => Category::LongVariable,
            (NameKind::Function, true) => Category::ShortFunction,
            (NameKind::Function, false) => Category::LongFunction,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single naming violation found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line: usize,
    pub identifier: String,
    pub category: Category,
}

impl Violation {
    pub fn new(line: usize, identifier: impl Into<String>, category: Category) -> Self {
        Self {
            line,
            identifier: identifier.into(),
            category,
        }
    }

    /// Human readable description, e.g. `Variable name 'x' is too short`.
    pub fn message(&self) -> String {
        let size = if self.category.is_short() {
            "short"
        } else {
            "long"
        };
        format!(
            "{} name '{}' is too {}",
            self.category.name_kind().label(),
            self.identifier,
            size
        )
    }
}

/// A file that could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("SyntaxError: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("UnicodeDecodeError: {0}")]
    Decode(String),
    #[error("OSError: {0}")]
    Io(String),
    #[error("ParserError: {0}")]
    Parser(String),
}

/// Outcome of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// Path as it is shown in diagnostics.
    pub file: String,
    /// Violations that survived the allowlist, in source order.
    pub violations: Vec<Violation>,
    /// Violations dropped because the identifier is allowlisted.
    pub suppressed: Vec<Violation>,
    /// Set when the file could not be read or parsed.
    pub error: Option<FileError>,
}

impl LintResult {
    pub fn checked(
        file: impl Into<String>,
        violations: Vec<Violation>,
        suppressed: Vec<Violation>,
    ) -> Self {
        Self {
            file: file.into(),
            violations,
            suppressed,
            error: None,
        }
    }

    pub fn failed(file: impl Into<String>, error: FileError) -> Self {
        Self {
            file: file.into(),
            violations: Vec::new(),
            suppressed: Vec::new(),
            error: Some(error),
        }
    }

    /// Number of issues this file contributes to the run total.
    ///
    /// A file that failed to parse counts as exactly one issue.
    pub fn issue_count(&self) -> usize {
        if self.error.is_some() {
            1
        } else {
            self.violations.len()
        }
    }
}

/// Results of scanning a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Per-file results in scan order.
    pub files: Vec<LintResult>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: LintResult) {
        self.files.push(result);
    }

    /// Number of files scanned.
    pub fn scanned(&self) -> usize {
        self.files.len()
    }

    /// Total issues across all files.
    pub fn issue_count(&self) -> usize {
        self.files.iter().map(LintResult::issue_count).sum()
    }

    /// Number of allowlisted violations across all files.
    pub fn suppressed_count(&self) -> usize {
        self.files.iter().map(|f| f.suppressed.len()).sum()
    }

    /// Number of files that could not be checked.
    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|f| f.error.is_some()).count()
    }

    pub fn passed(&self) -> bool {
        self.issue_count() == 0
    }
}
