//! Python Parsing
//!
//! Thin wrapper around tree-sitter with the Python grammar. The extractor
//! works on the produced tree; nothing here interprets node semantics.

use crate::types::{LoomError, Result};

/// Create a tree-sitter parser configured for Python.
pub fn create_ts_parser() -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| LoomError::Config(format!("Failed to load Python grammar: {}", e)))?;
    Ok(parser)
}

/// Parse Python source into a syntax tree.
///
/// tree-sitter is error-tolerant and will happily return a tree containing
/// ERROR nodes for broken input. The extractor has no partial-file recovery,
/// so a tree with any error node is rejected here as a whole-file parse
/// failure.
pub fn parse_python(path: &str, content: &str) -> Result<tree_sitter::Tree> {
    let mut parser = create_ts_parser()?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| LoomError::parse(path, "Failed to parse Python file"))?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error_position(root) {
            Some((row, column)) => {
                format!("Syntax error at line {}, column {}", row + 1, column)
            }
            None => "Syntax error".to_string(),
        };
        return Err(LoomError::parse(path, message));
    }

    Ok(tree)
}

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn node_text<'a>(node: tree_sitter::Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}: {}",
            node.start_position().row + 1,
            node.start_position().column,
            e
        );
        ""
    })
}

/// Locate the first ERROR or MISSING node for diagnostics.
fn first_error_position(node: tree_sitter::Node) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some((pos.row, pos.column));
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.has_error() && !child.is_missing() {
            continue;
        }
        if let Some(pos) = first_error_position(child) {
            return Some(pos);
        }
    }
    None
}
