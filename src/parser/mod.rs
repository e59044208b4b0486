//! Python source parsing.
//!
//! This module provides:
//! - `PythonParser`: tree-sitter backed parser producing a `SourceTree`
//! - `SourceTree` / `SyntaxNode`: the lowered tree walked by the naming visitor
//! - `SyntaxError`: located description of the first syntax error in a file

use std::path::Path;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser as TsParser};

mod legacy;
mod python;
mod tree;

pub use tree::{Ident, SourceTree, SyntaxNode};

/// File extensions handled by the parser (without dot).
pub const PYTHON_EXTENSIONS: &[&str] = &["py"];

/// A syntax error located in a source file.
///
/// Rendered the way Python renders `SyntaxError`:
/// `invalid syntax (module.py, line 3)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({file_name}, line {line})")]
pub struct SyntaxError {
    pub message: String,
    /// Base name of the offending file.
    pub file_name: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl SyntaxError {
    fn new(path: &Path, message: impl Into<String>, line: usize) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            message: message.into(),
            file_name,
            line,
        }
    }

    fn from_node(path: &Path, node: Option<Node>) -> Self {
        match node {
            Some(node) if node.is_missing() => Self::new(
                path,
                format!("expected '{}'", node.kind()),
                node.start_position().row + 1,
            ),
            Some(node) => Self::new(path, "invalid syntax", node.start_position().row + 1),
            None => Self::new(path, "invalid syntax", 1),
        }
    }
}

/// Errors produced while parsing a source file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("parser gave up before producing a tree")]
    Aborted,
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Tree-sitter based Python parser.
pub struct PythonParser {
    inner: TsParser,
}

impl PythonParser {
    /// Create a parser with the Python grammar loaded.
    pub fn new() -> Result<Self, ParseError> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut inner = TsParser::new();
        inner.set_language(&language)?;
        Ok(Self { inner })
    }

    /// Check whether a path has a Python extension.
    pub fn handles(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| PYTHON_EXTENSIONS.contains(&ext))
            .unwrap_or(false)
    }

    /// Parse source text into a lowered tree.
    ///
    /// `path` is only used to label syntax errors. A tree containing any
    /// error or missing node is rejected with the first such node in
    /// document order, as is a tree holding Python 2 only syntax.
    pub fn parse(&mut self, path: &Path, source: &str) -> Result<SourceTree, ParseError> {
        let tree = self.inner.parse(source, None).ok_or(ParseError::Aborted)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(SyntaxError::from_node(path, first_error(root)).into());
        }
        if let Some((node, message)) = legacy::first_rejected(root, source.as_bytes()) {
            return Err(SyntaxError::new(path, message, node.start_position().row + 1).into());
        }

        Ok(SourceTree::new(python::lower_module(root, source.as_bytes())))
    }
}

/// Find the first error or missing node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
