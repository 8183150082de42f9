//! Parsed module representation
//!
//! Keeps the tree-sitter tree together with the text it was parsed from;
//! node text is sliced out of `source` by byte range.

use tree_sitter::{Node, Tree};

/// Syntactically valid module
pub struct ParsedModule<'s> {
    tree: Tree,
    source: &'s str,
}

impl<'s> ParsedModule<'s> {
    pub fn new(tree: Tree, source: &'s str) -> Self {
        Self { tree, source }
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Text covered by `node`
    pub fn text(&self, node: &Node) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or("")
    }

    /// Number of top-level statements
    pub fn statement_count(&self) -> usize {
        self.root().named_child_count()
    }
}

impl std::fmt::Debug for ParsedModule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedModule")
            .field("root", &self.root().kind())
            .field("statements", &self.statement_count())
            .finish()
    }
}
