/*
 * scmextract Orchestration - Experiments and benchmarks over the IR core
 *
 * Architecture:
 * - Simulator registry (programs with expert ground truth)
 * - Experiment configuration (YAML)
 * - Single experiments (extract → evaluate → artifacts)
 * - Benchmark runner (parallel over simulator/extractor pairs)
 * - Reports (JSON, CSV, terminal)
 */

pub mod benchmark;
pub mod config;
pub mod error;
pub mod experiment;
pub mod simulators;

// Re-exports
pub use benchmark::{BenchmarkRunner, BenchmarkSummary, PairResult};
pub use config::{load_config, parse_config, save_config, ConfigError, ExperimentConfig};
pub use error::{OrchestrationError, Result};
pub use experiment::{run_experiment, run_pair, save_outcome, ExperimentOutcome, Registries};
pub use simulators::{Simulator, SimulatorRegistry, SirSimulator};
