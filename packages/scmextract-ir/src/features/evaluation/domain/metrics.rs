//! Comparison metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge-level comparison of a predicted graph against ground truth
///
/// Counts are over ordered pairs `(u, v)` with `u != v`, so for `n` nodes
/// `tp + fp + fn + tn == n * (n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub true_positive: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub true_negative: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Structural Hamming Distance
    pub shd: usize,
}

impl MetricsRecord {
    /// Number of ordered pairs classified
    pub fn total_pairs(&self) -> usize {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }

    pub fn is_exact(&self) -> bool {
        self.false_positive == 0 && self.false_negative == 0
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P={:.3} R={:.3} F1={:.3} SHD={} (TP={} FP={} FN={} TN={})",
            self.precision,
            self.recall,
            self.f1,
            self.shd,
            self.true_positive,
            self.false_positive,
            self.false_negative,
            self.true_negative
        )
    }
}
