//! Extraction ports

mod extractor;

pub use extractor::{CausalExtractor, VariableSet};
