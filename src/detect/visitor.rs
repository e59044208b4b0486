//! Naming visitor: walks a lowered syntax tree and records every binding
//! or function name whose length falls outside the configured limits.

use crate::parser::{Ident, SourceTree, SyntaxNode};
use crate::policy::Thresholds;

use super::{NameKind, Violation};

/// Walks one file's tree and classifies names against `Thresholds`.
///
/// The visitor knows nothing about the allowlist; every occurrence outside
/// the limits is returned, including repeats of the same name.
pub struct NamingVisitor<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> NamingVisitor<'a> {
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    /// Visit every node and return violations ordered by line, then by
    /// discovery order within a line.
    pub fn visit(&self, tree: &SourceTree) -> Vec<Violation> {
        let mut violations = Vec::new();

        tree.for_each(|node| {
            let found = match node {
                SyntaxNode::Binding(ident) => self.check(NameKind::Variable, ident),
                SyntaxNode::Function { name, .. } => self.check(NameKind::Function, name),
                SyntaxNode::Other { .. } => None,
            };
            violations.extend(found);
        });

        violations.sort_by_key(|v| v.line);
        violations
    }

    /// Classify a single name.
    pub fn check(&self, kind: NameKind, ident: &Ident) -> Option<Violation> {
        self.thresholds
            .classify(kind, ident.len())
            .map(|category| Violation::new(ident.line, ident.name.clone(), category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Category;
    use crate::policy::Config;

    fn binding(name: &str, line: usize) -> SyntaxNode {
        SyntaxNode::Binding(Ident::new(name, line))
    }

    fn thresholds() -> Thresholds {
        Config::new(4, 20, 3, 30).thresholds()
    }

    #[test]
    fn test_variable_boundaries() {
        let thresholds = thresholds();
        let visitor = NamingVisitor::new(&thresholds);
        let tree = SourceTree::new(vec![
            binding("abc", 1),
            binding("abcd", 2),
            binding(&"a".repeat(20), 3),
            binding(&"a".repeat(21), 4),
        ]);

        let violations = visitor.visit(&tree);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[0].category, Category::ShortVariable);
        assert_eq!(violations[1].line, 4);
        assert_eq!(violations[1].category, Category::LongVariable);
    }

    #[test]
    fn test_function_boundaries() {
        let thresholds = thresholds();
        let visitor = NamingVisitor::new(&thresholds);
        let func = |name: &str, line| SyntaxNode::Function {
            name: Ident::new(name, line),
            children: vec![],
        };
        let tree = SourceTree::new(vec![
            func("go", 1),
            func("run", 2),
            func(&"f".repeat(30), 3),
            func(&"f".repeat(31), 4),
        ]);

        let categories: Vec<_> = visitor.visit(&tree).iter().map(|v| v.category).collect();
        assert_eq!(
            categories,
            vec![Category::ShortFunction, Category::LongFunction]
        );
    }

    #[test]
    fn test_short_wins_when_limits_cross() {
        // Not reachable through a validated Config, but the visitor itself
        // must still report at most one category.
        let thresholds = Thresholds {
            variable: crate::policy::LengthLimits::new(10, 2),
            function: crate::policy::LengthLimits::new(10, 2),
        };
        let visitor = NamingVisitor::new(&thresholds);
        let tree = SourceTree::new(vec![binding("abcde", 1)]);

        let violations = visitor.visit(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].category, Category::ShortVariable);
    }

    #[test]
    fn test_nested_nodes_visited_and_sorted() {
        let thresholds = thresholds();
        let visitor = NamingVisitor::new(&thresholds);
        let tree = SourceTree::new(vec![SyntaxNode::Other {
            kind: "class_definition",
            children: vec![SyntaxNode::Function {
                name: Ident::new("fn", 2),
                children: vec![SyntaxNode::Other {
                    kind: "block",
                    children: vec![binding("x", 3), binding("y", 3), binding("z", 5)],
                }],
            }],
        }]);

        let found: Vec<_> = visitor
            .visit(&tree)
            .into_iter()
            .map(|v| (v.line, v.identifier))
            .collect();
        assert_eq!(
            found,
            vec![
                (2, "fn".to_string()),
                (3, "x".to_string()),
                (3, "y".to_string()),
                (5, "z".to_string()),
            ]
        );
    }

    #[test]
    fn test_repeated_names_not_deduplicated() {
        let thresholds = thresholds();
        let visitor = NamingVisitor::new(&thresholds);
        let tree = SourceTree::new(vec![binding("x", 1), binding("x", 1), binding("x", 2)]);
        assert_eq!(visitor.visit(&tree).len(), 3);
    }
}
