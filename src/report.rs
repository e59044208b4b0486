//! Output formatting for scan results.
//!
//! Supports two output formats:
//! - Text: one `<file>:<line>: <message> [<category>]` line per violation
//! - JSON: structured output for programmatic consumption

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::detect::{LintResult, ScanResult, Violation};

/// Format a reported violation.
pub fn format_violation(file: &str, v: &Violation) -> String {
    format!("{}:{}: {} [{}]", file, v.line, v.message(), v.category)
}

/// Write results as plain diagnostic lines.
///
/// Files are written in scan order. A failed file produces a single
/// `<file>: <error>` line. With `show_suppressed`, allowlisted violations
/// are listed after the file's reported ones, marked `(allowed)`.
pub fn write_text<W: Write>(
    out: &mut W,
    result: &ScanResult,
    show_suppressed: bool,
) -> std::io::Result<()> {
    for file in &result.files {
        write_file_text(out, file, show_suppressed)?;
    }
    Ok(())
}

fn write_file_text<W: Write>(
    out: &mut W,
    file: &LintResult,
    show_suppressed: bool,
) -> std::io::Result<()> {
    if let Some(error) = &file.error {
        return writeln!(out, "{}: {}", file.file, error);
    }

    for v in &file.violations {
        writeln!(out, "{}", format_violation(&file.file, v))?;
    }

    if show_suppressed {
        for v in &file.suppressed {
            writeln!(out, "{} (allowed)", format_violation(&file.file, v))?;
        }
    }

    Ok(())
}

/// JSON report structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub issue_count: usize,
    pub passed: bool,
    pub violations: Vec<JsonViolation>,
    #[serde(default)]
    pub suppressed: Vec<JsonViolation>,
    #[serde(default)]
    pub errors: Vec<JsonFileError>,
}

/// A single violation in a JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonViolation {
    pub file: String,
    pub line: usize,
    pub identifier: String,
    pub category: String,
    pub message: String,
}

/// A file that could not be checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFileError {
    pub file: String,
    pub message: String,
}

impl JsonReport {
    pub fn build(path: &str, result: &ScanResult) -> Self {
        let mut violations = Vec::new();
        let mut suppressed = Vec::new();
        let mut errors = Vec::new();

        for file in &result.files {
            violations.extend(file.violations.iter().map(|v| violation_to_json(&file.file, v)));
            suppressed.extend(file.suppressed.iter().map(|v| violation_to_json(&file.file, v)));
            if let Some(error) = &file.error {
                errors.push(JsonFileError {
                    file: file.file.clone(),
                    message: error.to_string(),
                });
            }
        }

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: path.to_string(),
            files_scanned: result.scanned(),
            issue_count: result.issue_count(),
            passed: result.passed(),
            violations,
            suppressed,
            errors,
        }
    }
}

/// Write results in JSON format.
pub fn write_json<W: Write>(out: &mut W, path: &str, result: &ScanResult) -> anyhow::Result<()> {
    let report = JsonReport::build(path, result);
    let json = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn violation_to_json(file: &str, v: &Violation) -> JsonViolation {
    JsonViolation {
        file: file.to_string(),
        line: v.line,
        identifier: v.identifier.clone(),
        category: v.category.as_str().to_string(),
        message: v.message(),
    }
}
