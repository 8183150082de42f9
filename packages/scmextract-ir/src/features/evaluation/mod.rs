//! Evaluation Feature
//!
//! Compares a predicted causal graph with a ground-truth graph over the same
//! node set.
//!
//! ## Structure
//! - `domain/` - MetricsRecord
//! - `infrastructure/` - edge classification, P/R/F1, SHD

pub mod domain;
pub mod infrastructure;

pub use domain::MetricsRecord;
pub use infrastructure::{
    evaluate_graph, f1_score, precision, recall, structural_hamming_distance,
};
