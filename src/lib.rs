//! Splinter - identifier length linter for Python.
//!
//! Splinter flags variable and function names that are shorter or longer
//! than configured limits, with an allowlist of names that are never
//! reported.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────┐
//! │ Python files │────▶│ PythonParser │────▶│ SourceTree     │
//! └──────────────┘     │ (tree-sitter)│     │ (Binding,      │
//!                      └──────────────┘     │  Function, ..) │
//!                                           └────────────────┘
//!                                                   │
//!                                                   ▼
//!  ┌──────────────┐    ┌──────────────┐     ┌────────────────┐
//!  │ report       │◀───│ Policy       │◀────│ NamingVisitor  │
//!  │ (text, JSON) │    │ (allowlist)  │     │ (thresholds)   │
//!  └──────────────┘    └──────────────┘     └────────────────┘
//! ```
//!
//! - `parser`: tree-sitter parsing and lowering into `SourceTree`
//! - `detect`: the naming visitor, file discovery and the per-file runner
//! - `policy`: thresholds (`config.json`) and allowlist (`allowlist.txt`)
//! - `report`: output formatting
//! - `cli`: argument parsing and exit codes

pub mod cli;
pub mod detect;
pub mod parser;
pub mod policy;
pub mod report;

pub use detect::{Category, LintResult, NamingVisitor, Runner, ScanResult, Violation};
pub use parser::{PythonParser, SourceTree, SyntaxError, SyntaxNode};
pub use policy::{Allowlist, Config, Policy, PolicyPaths};
