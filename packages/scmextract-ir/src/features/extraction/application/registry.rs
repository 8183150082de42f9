//! Extractor registry
//!
//! Append-only name → factory table. Registration order is preserved so
//! listings and benchmark runs are deterministic.

use std::sync::Arc;
use tracing::debug;

use crate::config::ExtractorOptions;
use crate::errors::{Result, ScmError};
use crate::features::extraction::infrastructure::AstExtractor;
use crate::features::extraction::ports::CausalExtractor;

/// Builds a configured extractor instance
pub type ExtractorFactory =
    Arc<dyn Fn(&ExtractorOptions) -> Box<dyn CausalExtractor> + Send + Sync>;

fn ast_factory() -> ExtractorFactory {
    Arc::new(|options: &ExtractorOptions| -> Box<dyn CausalExtractor> {
        Box::new(AstExtractor::with_options(options.clone()))
    })
}

struct Entry {
    name: String,
    description: String,
    factory: ExtractorFactory,
}

/// Registry for extraction methods
#[derive(Default)]
pub struct ExtractorRegistry {
    entries: Vec<Entry>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in extractor (`ast`)
    pub fn with_builtin_extractors() -> Self {
        let mut registry = Self::new();
        registry.push_entry(
            AstExtractor::NAME.to_string(),
            "Static dataflow and control-flow analysis of the Python syntax tree".to_string(),
            ast_factory(),
        );
        registry
    }

    /// Register a factory under `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: ExtractorFactory,
    ) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ScmError::DuplicateExtractor(name));
        }
        self.push_entry(name, description.into(), factory);
        Ok(())
    }

    fn push_entry(&mut self, name: String, description: String, factory: ExtractorFactory) {
        debug!("Registered extractor '{}'", name);
        self.entries.push(Entry {
            name,
            description,
            factory,
        });
    }

    /// Instantiate the extractor registered as `name`
    pub fn create(&self, name: &str, options: &ExtractorOptions) -> Result<Box<dyn CausalExtractor>> {
        let factory = self.get(name).ok_or_else(|| ScmError::UnknownExtractor {
            name: name.to_string(),
            available: self.names(),
        })?;
        Ok(factory(options))
    }

    pub fn get(&self, name: &str) -> Option<&ExtractorFactory> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.factory)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Names in registration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// (name, description) pairs in registration order
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.description.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = ExtractorRegistry::with_builtin_extractors();
        assert_eq!(registry.names(), vec!["ast"]);
        assert_eq!(registry.len(), 1);

        let extractor = registry.create("ast", &ExtractorOptions::default()).unwrap();
        assert_eq!(extractor.name(), "ast");
    }

    #[test]
    fn test_unknown_extractor() {
        let registry = ExtractorRegistry::with_builtin_extractors();
        match registry.create("llm", &ExtractorOptions::default()) {
            Err(ScmError::UnknownExtractor { name, available }) => {
                assert_eq!(name, "llm");
                assert_eq!(available, vec!["ast"]);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("lookup of an unregistered name succeeded"),
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ExtractorRegistry::with_builtin_extractors();
        let result = registry.register("ast", "again", ast_factory());
        assert!(matches!(result, Err(ScmError::DuplicateExtractor(name)) if name == "ast"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_entries_extend_like_registered_ones() {
        let mut registry = ExtractorRegistry::with_builtin_extractors();
        registry.register("ast_no_control", "no control context", ast_factory()).unwrap();

        assert_eq!(registry.names(), vec!["ast", "ast_no_control"]);
        assert_eq!(
            registry.describe()[0],
            (
                "ast",
                "Static dataflow and control-flow analysis of the Python syntax tree"
            )
        );
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = ExtractorRegistry::new();
        assert!(registry.is_empty());
        registry.register("zeta", "last alphabetically", ast_factory()).unwrap();
        registry.register("alpha", "first alphabetically", ast_factory()).unwrap();

        assert_eq!(registry.names(), vec!["zeta", "alpha"]);
        assert_eq!(registry.describe()[1], ("alpha", "first alphabetically"));
    }

    #[test]
    fn test_factory_receives_options() {
        let registry = ExtractorRegistry::with_builtin_extractors();
        let options = ExtractorOptions::default().control_dependencies(false);
        let extractor = registry.create("ast", &options).unwrap();

        let graph = extractor
            .extract_from_string("if c:\n    y = a\n", None)
            .unwrap();
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["y"]);
    }
}
