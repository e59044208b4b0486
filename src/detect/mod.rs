//! Detection of identifier length violations.

mod files;
mod runner;
mod types;
mod visitor;

pub use files::collect_files;
pub use runner::Runner;
pub use types::{Category, FileError, LintResult, NameKind, ScanResult, Violation};
pub use visitor::NamingVisitor;
