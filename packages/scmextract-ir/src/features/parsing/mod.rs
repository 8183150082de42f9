//! Parsing Feature
//!
//! Responsible for turning source text into a tree-sitter syntax tree and
//! rejecting text that is not syntactically valid.
//!
//! ## Structure
//! - `domain/` - ParsedModule
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - PythonParser (tree-sitter)

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::ParsedModule;
pub use infrastructure::PythonParser;
pub use ports::SourceParser;
