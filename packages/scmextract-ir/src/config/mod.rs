//! Extractor configuration
//!
//! Options are plain serde structs so that experiment files can embed them
//! verbatim (see the orchestration crate's `ExperimentConfig`).

use serde::{Deserialize, Serialize};

/// Methods that mutate their receiver in place (`values.append(x)`)
pub const DEFAULT_MUTATING_METHODS: &[&str] =
    &["append", "appendleft", "extend", "insert", "add", "update"];

/// Options controlling the AST extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorOptions {
    /// Add variables read by enclosing `if`/`while`/`for` headers as causes
    pub control_dependencies: bool,

    /// Method names treated as in-place updates of their receiver
    pub mutating_methods: Vec<String>,

    /// Name `self.rate` as `rate` (true) or as `self.rate` (false)
    pub attribute_leaf_names: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            control_dependencies: true,
            mutating_methods: DEFAULT_MUTATING_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            attribute_leaf_names: true,
        }
    }
}

impl ExtractorOptions {
    pub fn control_dependencies(mut self, enabled: bool) -> Self {
        self.control_dependencies = enabled;
        self
    }

    pub fn mutating_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutating_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn attribute_leaf_names(mut self, enabled: bool) -> Self {
        self.attribute_leaf_names = enabled;
        self
    }

    pub fn is_mutating_method(&self, name: &str) -> bool {
        self.mutating_methods.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractorOptions::default();
        assert!(options.control_dependencies);
        assert!(options.attribute_leaf_names);
        assert!(options.is_mutating_method("append"));
        assert!(!options.is_mutating_method("copy"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options: ExtractorOptions =
            serde_json::from_str(r#"{"control_dependencies": false}"#).unwrap();
        assert!(!options.control_dependencies);
        assert!(options.is_mutating_method("extend"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ExtractorOptions, _> = serde_json::from_str(r#"{"inline": true}"#);
        assert!(result.is_err());
    }
}
