use std::path::PathBuf;

use scmextract_ir::{CausalGraph, Result};

/// Program with a known causal structure
pub trait Simulator: Send + Sync {
    /// Registry name (`"sir"`)
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Location of the analyzed source file
    fn source_path(&self) -> PathBuf;

    /// Source text handed to extractors
    fn source_text(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.source_path())?)
    }

    /// Main state variables
    fn state_variables(&self) -> Vec<String>;

    /// Variables used for extraction and evaluation
    ///
    /// Defaults to the state variables; models override this to add
    /// parameters and flows.
    fn all_variables(&self) -> Vec<String> {
        self.state_variables()
    }

    /// Expert-authored graph over `all_variables()`
    fn ground_truth_graph(&self) -> Result<CausalGraph>;
}
