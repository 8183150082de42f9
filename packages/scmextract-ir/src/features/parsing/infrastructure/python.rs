//! Tree-sitter Python parser
//!
//! This is where the tree-sitter dependency lives. tree-sitter recovers from
//! syntax errors by inserting ERROR/MISSING nodes; any such node makes the
//! whole input invalid for extraction. The grammar also still accepts the
//! Python 2 `print`/`exec` statements, which are rejected here as well.

use tree_sitter::{Node, Parser as TSParser};

use crate::errors::{Result, ScmError};
use crate::features::parsing::domain::ParsedModule;
use crate::features::parsing::ports::SourceParser;
use crate::shared::models::Span;

const SNIPPET_LEN: usize = 24;

/// Statement kinds the grammar parses but Python 3 does not
const PYTHON2_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

/// Python parser backed by tree-sitter-python
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }

    /// First ERROR or MISSING node in document order
    fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if let Some(found) = Self::first_error(child) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// First Python 2 only statement in document order
    fn first_python2_statement<'t>(node: Node<'t>) -> Option<Node<'t>> {
        if PYTHON2_STATEMENTS.contains(&node.kind()) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.named_children(&mut cursor).collect();
        children.into_iter().find_map(Self::first_python2_statement)
    }

    fn describe(node: &Node, source: &str) -> String {
        if node.is_missing() {
            return format!("missing '{}'", node.kind());
        }
        let text = source.get(node.byte_range()).unwrap_or("");
        let snippet: String = text.chars().take(SNIPPET_LEN).collect();
        let snippet = snippet.lines().next().unwrap_or("").trim();
        if snippet.is_empty() {
            "invalid syntax".to_string()
        } else {
            format!("invalid syntax near '{}'", snippet)
        }
    }
}

impl SourceParser for PythonParser {
    fn parse<'s>(&self, source: &'s str) -> Result<ParsedModule<'s>> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| ScmError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ScmError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if let Some(error_node) =
            Self::first_error(root).or_else(|| Self::first_python2_statement(root))
        {
            return Err(ScmError::SourceParse {
                message: Self::describe(&error_node, source),
                path: None,
                span: Some(Span::from_node(&error_node)),
            });
        }

        Ok(ParsedModule::new(tree, source))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext, "py" | "pyi")
    }

    fn language_name(&self) -> &'static str {
        "python"
    }
}
