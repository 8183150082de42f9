//! ExperimentConfig schema and YAML I/O

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use scmextract_ir::{ExtractorOptions, VariableSet};

pub const DEFAULT_OUTPUT_DIR: &str = "results";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn is_default_output_dir(dir: &Path) -> bool {
    dir == Path::new(DEFAULT_OUTPUT_DIR)
}

fn is_default_options(options: &ExtractorOptions) -> bool {
    *options == ExtractorOptions::default()
}

/// A single extraction experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Experiment name; results go under `output_dir/name`
    pub name: String,

    /// Registered simulator name
    pub simulator: String,

    /// Registered extractor name
    pub extractor: String,

    /// Variables of interest (default: the simulator's full variable list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default, skip_serializing_if = "is_default_options")]
    pub options: ExtractorOptions,
}

impl ExperimentConfig {
    pub fn new(
        name: impl Into<String>,
        simulator: impl Into<String>,
        extractor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            simulator: simulator.into(),
            extractor: extractor.into(),
            variables: None,
            output_dir: default_output_dir(),
            options: ExtractorOptions::default(),
        }
    }

    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_options(mut self, options: ExtractorOptions) -> Self {
        self.options = options;
        self
    }

    /// Requested variables as a set, if any were given
    pub fn variable_set(&self) -> Option<VariableSet> {
        self.variables
            .as_ref()
            .map(|v| v.iter().cloned().collect())
    }

    /// Directory that receives this experiment's artifacts
    pub fn result_dir(&self) -> PathBuf {
        self.output_dir.join(&self.name)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("simulator", &self.simulator),
            ("extractor", &self.extractor),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }
        if let Some(variables) = &self.variables {
            if variables.iter().any(|v| v.trim().is_empty()) {
                return Err(ConfigError::invalid("variables", "contains an empty name"));
            }
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Load and validate an experiment config file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<ExperimentConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate YAML text
pub fn parse_config(yaml: &str) -> ConfigResult<ExperimentConfig> {
    let config: ExperimentConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Write `config` as YAML, creating parent directories
pub fn save_config(config: &ExperimentConfig, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_yaml()?)?;
    Ok(())
}
