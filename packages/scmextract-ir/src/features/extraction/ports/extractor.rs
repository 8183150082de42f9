//! Extractor port (interface)
//!
//! Shared contract of every extraction method. Variants are looked up by
//! name through `ExtractorRegistry`; nothing here depends on a particular
//! implementation.

use std::collections::BTreeSet;
use std::path::Path;

use crate::errors::Result;
use crate::features::causal_graph::CausalGraph;

/// Variables of interest
pub type VariableSet = BTreeSet<String>;

pub trait CausalExtractor: Send + Sync {
    /// Registry name (`"ast"`)
    fn name(&self) -> &str;

    /// One-line description for listings
    fn description(&self) -> &str;

    /// Extract from source text
    ///
    /// With `variables`, the returned graph's node set is exactly that set.
    /// Without, it is every assignment target discovered.
    fn extract_from_string(
        &self,
        source: &str,
        variables: Option<&VariableSet>,
    ) -> Result<CausalGraph>;

    /// Extract from a source file
    fn extract(&self, source_path: &Path, variables: Option<&VariableSet>) -> Result<CausalGraph> {
        let source = std::fs::read_to_string(source_path)?;
        self.extract_from_string(&source, variables)
            .map_err(|e| e.with_path(source_path.display().to_string()))
    }
}
