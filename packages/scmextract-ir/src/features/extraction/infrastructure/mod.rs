//! Extraction infrastructure (tree-sitter visitors and resolution)

mod ast_extractor;
mod collector;
mod reads;
mod resolver;

pub use ast_extractor::AstExtractor;
pub use collector::{collect_raw_dependencies, DependencyCollector};
pub use reads::{ExpressionReads, ReadExtractor};
pub use resolver::resolve;
