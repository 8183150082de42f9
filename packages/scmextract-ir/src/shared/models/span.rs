//! Source location types
//!
//! Positions in the analyzed source, used to point parse errors at the
//! offending text. Lines are 1-based, columns 0-based (tree-sitter columns).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Span in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero span (0:0-0:0)
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Span covering a tree-sitter node
    pub fn from_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self::new(
            start.row as u32 + 1,
            start.column as u32,
            end.row as u32 + 1,
            end.column as u32,
        )
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display_uses_start_position() {
        let span = Span::new(3, 4, 5, 0);
        assert_eq!(span.to_string(), "3:4");
    }

    #[test]
    fn test_span_from_node_is_one_based() {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        let tree = parser.parse("x = 1\ny = 2\n", None).unwrap();
        let second = tree.root_node().named_child(1).unwrap();

        let span = Span::from_node(&second);
        assert_eq!(span.start_line, 2);
        assert_eq!(span.start_col, 0);
    }
}
