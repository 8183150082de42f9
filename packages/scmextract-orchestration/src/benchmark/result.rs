//! Benchmark result types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::experiment::ExperimentOutcome;

/// Outcome of one (simulator, extractor) pair
#[derive(Debug, Clone)]
pub struct PairResult {
    pub simulator: String,
    pub extractor: String,
    /// Error rendered as text so results stay `Clone` and `Send`
    pub outcome: Result<ExperimentOutcome, String>,
}

/// Scores of a successful pair (one CSV row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub simulator: String,
    pub extractor: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub shd: usize,
    pub num_predicted_edges: usize,
    pub num_true_edges: usize,
}

impl BenchmarkRecord {
    pub fn from_outcome(outcome: &ExperimentOutcome) -> Self {
        Self {
            simulator: outcome.simulator.clone(),
            extractor: outcome.extractor.clone(),
            precision: outcome.metrics.precision,
            recall: outcome.metrics.recall,
            f1: outcome.metrics.f1,
            shd: outcome.metrics.shd,
            num_predicted_edges: outcome.predicted.num_edges(),
            num_true_edges: outcome.ground_truth.num_edges(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkFailure {
    pub simulator: String,
    pub extractor: String,
    pub error: String,
}

/// Whole-run summary (`summary.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub timestamp: DateTime<Local>,
    pub extractors: Vec<String>,
    pub simulators: Vec<String>,
    pub results: Vec<BenchmarkRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<BenchmarkFailure>,
}

impl BenchmarkSummary {
    pub fn from_pairs(extractors: &[String], simulators: &[String], pairs: &[PairResult]) -> Self {
        let mut results = Vec::new();
        let mut failures = Vec::new();

        for pair in pairs {
            match &pair.outcome {
                Ok(outcome) => results.push(BenchmarkRecord::from_outcome(outcome)),
                Err(error) => failures.push(BenchmarkFailure {
                    simulator: pair.simulator.clone(),
                    extractor: pair.extractor.clone(),
                    error: error.clone(),
                }),
            }
        }

        Self {
            timestamp: Local::now(),
            extractors: extractors.to_vec(),
            simulators: simulators.to_vec(),
            results,
            failures,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
