//! Lowering of the tree-sitter Python grammar into a `SourceTree`.
//!
//! Only names in a store position become `Binding` nodes. Everything a
//! store position can be nested in is still descended into, so a walrus
//! inside a subscript target or a default argument is found too.

use tree_sitter::Node;

use super::tree::{Ident, SyntaxNode};

/// Node kinds whose named children are themselves targets.
const TARGET_CONTAINERS: &[&str] = &[
    "pattern_list",
    "tuple_pattern",
    "list_pattern",
    "list_splat_pattern",
    "parenthesized_expression",
    "tuple",
    "list",
    "expression_list",
    "list_splat",
    "as_pattern_target",
];

pub(super) fn lower_module(root: Node, source: &[u8]) -> Vec<SyntaxNode> {
    lower_children(root, source)
}

fn lower_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    lower_fields(node, source, &[])
}

/// Lower all named children of `node`, treating children attached to one
/// of `target_fields` as assignment targets.
fn lower_fields(node: Node, source: &[u8], target_fields: &[&str]) -> Vec<SyntaxNode> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return out;
    }

    loop {
        let child = cursor.node();
        if child.is_named() {
            let is_target = cursor
                .field_name()
                .map(|f| target_fields.contains(&f))
                .unwrap_or(false);
            if is_target {
                lower_target(child, source, &mut out);
            } else {
                lower_node(child, source, &mut out);
            }
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }

    out
}

fn lower_node(node: Node, source: &[u8], out: &mut Vec<SyntaxNode>) {
    match node.kind() {
        "function_definition" => lower_function(node, source, out),
        "assignment"
        | "augmented_assignment"
        | "for_statement"
        | "for_in_clause"
        | "type_alias_statement" => {
            let children = lower_fields(node, source, &["left"]);
            push_other(node.kind(), children, out);
        }
        "named_expression" => {
            let children = lower_fields(node, source, &["name"]);
            push_other(node.kind(), children, out);
        }
        "with_item" => lower_with_item(node, source, out),
        "comment" | "identifier" | "keyword_identifier" | "integer" | "float" => {}
        _ => {
            let children = lower_children(node, source);
            push_other(node.kind(), children, out);
        }
    }
}

fn lower_function(node: Node, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let children = lower_fields(node, source, &[]);
    match node.child_by_field_name("name").and_then(|n| ident(n, source)) {
        Some(name) => out.push(SyntaxNode::Function { name, children }),
        None => push_other(node.kind(), children, out),
    }
}

/// `with open(p) as handle:` binds `handle`; the `as` lives on an
/// `as_pattern` under the item's value.
fn lower_with_item(node: Node, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let mut children = Vec::new();
    let mut cursor = node.walk();
    let items: Vec<(Node, Option<&'static str>)> = if cursor.goto_first_child() {
        let mut items = Vec::new();
        loop {
            items.push((cursor.node(), cursor.field_name()));
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        items
    } else {
        Vec::new()
    };

    for (child, field) in items {
        if !child.is_named() {
            continue;
        }
        if field == Some("alias") {
            lower_target(child, source, &mut children);
        } else if child.kind() == "as_pattern" {
            let inner = lower_fields(child, source, &["alias"]);
            push_other(child.kind(), inner, &mut children);
        } else {
            lower_node(child, source, &mut children);
        }
    }

    push_other(node.kind(), children, out);
}

fn lower_target(node: Node, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let kind = node.kind();
    if kind == "identifier" || kind == "keyword_identifier" {
        if let Some(name) = ident(node, source) {
            out.push(SyntaxNode::Binding(name));
        }
        return;
    }

    // `type Alias = ...` and `type Alias[T] = ...`: only the alias name binds.
    if kind == "type" || kind == "generic_type" {
        if let Some(name) = node.named_child(0) {
            lower_target(name, source, out);
        }
        return;
    }

    if TARGET_CONTAINERS.contains(&kind) {
        if node.named_child_count() == 0 && kind == "as_pattern_target" {
            if let Some(name) = ident(node, source) {
                out.push(SyntaxNode::Binding(name));
            }
            return;
        }
        let mut cursor = node.walk();
        let members: Vec<Node> = node.named_children(&mut cursor).collect();
        for member in members {
            lower_target(member, source, out);
        }
        return;
    }

    // attribute, subscript: not a name binding, but may hold expressions
    // that bind (`table[(idx := 0)] = 1`).
    lower_node(node, source, out);
}

fn push_other(kind: &'static str, children: Vec<SyntaxNode>, out: &mut Vec<SyntaxNode>) {
    if !children.is_empty() {
        out.push(SyntaxNode::Other { kind, children });
    }
}

fn ident(node: Node, source: &[u8]) -> Option<Ident> {
    let text = node.utf8_text(source).unwrap_or("");
    if text.is_empty() {
        return None;
    }
    Some(Ident::new(text, node.start_position().row + 1))
}
