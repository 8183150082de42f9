//! Feature modules
//!
//! - `parsing/`     : Python source → tree-sitter syntax tree
//! - `extraction/`  : syntax tree → raw dependencies → projected causal graph
//! - `causal_graph/`: graph value object and its exported forms
//! - `evaluation/`  : predicted vs. ground-truth comparison

pub mod causal_graph;
pub mod evaluation;
pub mod extraction;
pub mod parsing;
