//! Detection runner that lints files one at a time.

use std::path::{Path, PathBuf};

use crate::parser::{ParseError, PythonParser};
use crate::policy::Policy;

use super::{FileError, LintResult, NamingVisitor, ScanResult};

/// Parses, visits and resolves files against a `Policy`.
///
/// A file that cannot be read or parsed becomes a failed `LintResult`; it
/// never stops the run.
pub struct Runner<'a> {
    policy: &'a Policy,
    parser: PythonParser,
}

impl<'a> Runner<'a> {
    /// Create a new runner. Fails only if the Python grammar cannot be loaded.
    pub fn new(policy: &'a Policy) -> Result<Self, ParseError> {
        Ok(Self {
            policy,
            parser: PythonParser::new()?,
        })
    }

    /// Lint every file in order.
    pub fn run(&mut self, files: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::new();
        for file in files {
            result.push(self.lint_file(file));
        }
        tracing::info!(
            files = result.scanned(),
            issues = result.issue_count(),
            suppressed = result.suppressed_count(),
            "scan complete"
        );
        result
    }

    /// Read and lint one file.
    pub fn lint_file(&mut self, path: &Path) -> LintResult {
        let shown = path.display().to_string();
        tracing::debug!(file = %shown, "linting");

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return LintResult::failed(shown, FileError::Io(e.to_string())),
        };
        let source = match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(e) => return LintResult::failed(shown, FileError::Decode(e.to_string())),
        };

        self.lint_source(path, &source)
    }

    /// Lint source text that claims to come from `path`.
    pub fn lint_source(&mut self, path: &Path, source: &str) -> LintResult {
        let shown = path.display().to_string();

        let tree = match self.parser.parse(path, source) {
            Ok(tree) => tree,
            Err(ParseError::Syntax(e)) => {
                tracing::debug!(file = %shown, error = %e, "syntax error");
                return LintResult::failed(shown, FileError::Syntax(e));
            }
            Err(e) => return LintResult::failed(shown, FileError::Parser(e.to_string())),
        };

        let thresholds = self.policy.thresholds();
        let raw = NamingVisitor::new(&thresholds).visit(&tree);
        let resolved = self.policy.resolve(raw);

        LintResult::checked(shown, resolved.retained, resolved.suppressed)
    }
}
