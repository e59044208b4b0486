//! Syntax tree shape consumed by the naming visitor.
//!
//! The tree-sitter concrete syntax tree is lowered into this much smaller
//! tree that only keeps what the naming rules care about: names bound in a
//! store position, function declarations, and the structure connecting them.

use std::fmt;

/// An identifier occurrence with its 1-indexed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub line: usize,
}

impl Ident {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }

    /// Length in Unicode scalar values, which is how Python measures `len(name)`.
    pub fn len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A lowered syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A name bound by assignment, loop target, `with ... as`, or walrus.
    Binding(Ident),
    /// A `def` / `async def`, with everything nested under it.
    Function {
        name: Ident,
        children: Vec<SyntaxNode>,
    },
    /// Any other construct that contains bindings or functions somewhere below.
    Other {
        kind: &'static str,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Child nodes in source order.
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Binding(_) => &[],
            SyntaxNode::Function { children, .. } | SyntaxNode::Other { children, .. } => {
                children
            }
        }
    }
}

/// The lowered tree for one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTree {
    pub nodes: Vec<SyntaxNode>,
}

impl SourceTree {
    pub fn new(nodes: Vec<SyntaxNode>) -> Self {
        Self { nodes }
    }

    /// All bound names, in traversal order.
    pub fn bindings(&self) -> Vec<&Ident> {
        let mut out = Vec::new();
        self.for_each(|node| {
            if let SyntaxNode::Binding(ident) = node {
                out.push(ident);
            }
        });
        out
    }

    /// All declared function names, in traversal order.
    pub fn functions(&self) -> Vec<&Ident> {
        let mut out = Vec::new();
        self.for_each(|node| {
            if let SyntaxNode::Function { name, .. } = node {
                out.push(name);
            }
        });
        out
    }

    /// Pre-order walk over every node using an explicit stack.
    pub fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a SyntaxNode),
    {
        let mut stack: Vec<&'a SyntaxNode> = self.nodes.iter().rev().collect();
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children().iter().rev());
        }
    }
}
