//! Benchmark: every (simulator, extractor) pair
//!
//! Pairs run in parallel; a failing pair becomes a failure entry in the
//! summary instead of aborting the run.

pub mod report;
mod result;
mod runner;

pub use report::{CsvReporter, JsonReporter, TerminalReporter};
pub use result::{BenchmarkFailure, BenchmarkRecord, BenchmarkSummary, PairResult};
pub use runner::BenchmarkRunner;
