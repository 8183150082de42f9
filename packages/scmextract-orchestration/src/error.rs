use thiserror::Error;

use crate::config::ConfigError;
use scmextract_ir::ScmError;

pub type Result<T> = std::result::Result<T, OrchestrationError>;

#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error(transparent)]
    Extraction(#[from] ScmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown simulator: '{name}'. Available: {available:?}")]
    UnknownSimulator { name: String, available: Vec<String> },

    #[error("Simulator '{0}' is already registered")]
    DuplicateSimulator(String),

    #[error("Nothing to benchmark: {0}")]
    EmptyBenchmark(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
