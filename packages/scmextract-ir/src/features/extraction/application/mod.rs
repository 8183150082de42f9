//! Extraction application layer

mod registry;

pub use registry::{ExtractorFactory, ExtractorRegistry};
