//! Experiment configuration
//!
//! One YAML file describes one experiment: which simulator to analyze, which
//! extractor to run, and where results go.
//!
//! ```yaml
//! name: sir_basic
//! simulator: sir
//! extractor: ast
//! variables: [Susceptible, Infected, Resistant]
//! output_dir: results
//! options:
//!   control_dependencies: true
//! ```

mod error;
mod experiment;

pub use error::{ConfigError, ConfigResult};
pub use experiment::{load_config, parse_config, save_config, ExperimentConfig, DEFAULT_OUTPUT_DIR};
