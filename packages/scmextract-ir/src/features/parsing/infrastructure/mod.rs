//! Parsing infrastructure (tree-sitter)

mod python;

pub use python::PythonParser;
