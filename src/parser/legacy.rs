//! Constructs the grammar accepts but Python 3 rejects.
//!
//! tree-sitter-python still parses a number of Python 2 forms without
//! producing an ERROR node. These are found after the parse and reported
//! with the message CPython gives for them.

use tree_sitter::Node;

/// Find the first rejected construct in document order.
pub(super) fn first_rejected<'t>(
    node: Node<'t>,
    source: &[u8],
) -> Option<(Node<'t>, &'static str)> {
    if let Some(message) = check_node(node, source) {
        return Some((node, message));
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_rejected(child, source))
}

fn check_node(node: Node, source: &[u8]) -> Option<&'static str> {
    match node.kind() {
        "print_statement" => {
            Some("Missing parentheses in call to 'print'. Did you mean print(...)?")
        }
        "exec_statement" => Some("Missing parentheses in call to 'exec'. Did you mean exec(...)?"),
        "except_clause" if has_token(node, ",") => {
            Some("multiple exception types must be parenthesized")
        }
        "integer" | "float" => check_number(node.utf8_text(source).unwrap_or("")),
        "string" if is_backtick(node, source) => Some("invalid syntax"),
        "delete_statement" => {
            let mut cursor = node.walk();
            let targets: Vec<Node> = node.named_children(&mut cursor).collect();
            targets.into_iter().find_map(check_delete_target)
        }
        "augmented_assignment" => node
            .child_by_field_name("left")
            .and_then(check_augmented_target),
        _ => None,
    }
}

fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| !c.is_named() && c.kind() == token);
    found
}

/// `10L` long suffix and `0777` octal are Python 2 only.
fn check_number(text: &str) -> Option<&'static str> {
    if text.ends_with(['l', 'L']) {
        return Some("invalid decimal literal");
    }
    let lower = text.to_ascii_lowercase();
    if lower.starts_with("0x") || lower.starts_with("0o") || lower.starts_with("0b") {
        return None;
    }
    // Leading zeros are only allowed on an all-zero integer or with a
    // fraction, exponent or imaginary suffix.
    if lower.contains(['.', 'e', 'j']) {
        return None;
    }
    let digits: Vec<char> = text.chars().filter(|c| *c != '_').collect();
    if digits.len() > 1 && digits[0] == '0' && digits.iter().any(|c| *c != '0') {
        return Some(
            "leading zeros in decimal integer literals are not permitted; \
             use an 0o prefix for octal integers",
        );
    }
    None
}

/// The scanner lexes `` `expr` `` repr as a string delimited by backticks.
fn is_backtick(node: Node, source: &[u8]) -> bool {
    node.child(0)
        .filter(|start| start.kind() == "string_start")
        .and_then(|start| start.utf8_text(source).ok())
        .map(|text| text.ends_with('`'))
        .unwrap_or(false)
}

fn check_augmented_target(node: Node) -> Option<&'static str> {
    match node.kind() {
        "identifier" | "keyword_identifier" | "attribute" | "subscript" => None,
        // `(name) += 1` is a parenthesized name, not a tuple.
        "tuple_pattern" if node.named_child_count() == 1 && !has_token(node, ",") => {
            node.named_child(0).and_then(check_augmented_target)
        }
        "tuple_pattern" | "pattern_list" => {
            Some("'tuple' is an illegal expression for augmented assignment")
        }
        "list_pattern" => Some("'list' is an illegal expression for augmented assignment"),
        _ => Some("illegal expression for augmented assignment"),
    }
}

fn check_delete_target(node: Node) -> Option<&'static str> {
    match node.kind() {
        "identifier" | "keyword_identifier" | "attribute" | "subscript" | "comment" => None,
        "tuple" | "list" | "expression_list" | "parenthesized_expression" => {
            let mut cursor = node.walk();
            let members: Vec<Node> = node.named_children(&mut cursor).collect();
            members.into_iter().find_map(check_delete_target)
        }
        "call" => Some("cannot delete function call"),
        _ => Some("cannot delete expression"),
    }
}
