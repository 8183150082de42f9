//! Static syntax-tree extractor
//!
//! parse → collect raw dependencies → resolve through intermediates →
//! project onto the variable set. Calls are never inlined and the program
//! is never executed.

use tracing::debug;

use super::collector::collect_raw_dependencies;
use super::resolver::resolve;
use crate::config::ExtractorOptions;
use crate::errors::Result;
use crate::features::causal_graph::CausalGraph;
use crate::features::extraction::ports::{CausalExtractor, VariableSet};
use crate::features::parsing::{PythonParser, SourceParser};

#[derive(Debug, Clone, Default)]
pub struct AstExtractor {
    options: ExtractorOptions,
    parser: PythonParser,
}

impl AstExtractor {
    pub const NAME: &'static str = "ast";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractorOptions) -> Self {
        Self {
            options,
            parser: PythonParser::new(),
        }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }
}

impl CausalExtractor for AstExtractor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Static dataflow and control-flow analysis of the Python syntax tree"
    }

    fn extract_from_string(
        &self,
        source: &str,
        variables: Option<&VariableSet>,
    ) -> Result<CausalGraph> {
        let module = self.parser.parse(source)?;
        let raw = collect_raw_dependencies(&module, &self.options);
        debug!(
            "Collected {} raw targets from {} statements",
            raw.len(),
            module.statement_count()
        );

        let variables = match variables {
            Some(v) => v.clone(),
            None => raw.targets(),
        };

        if variables.is_empty() || !raw.targets().iter().any(|t| variables.contains(t)) {
            debug!("No target intersects the {} requested variables", variables.len());
            return Ok(CausalGraph::empty(variables));
        }

        let resolved = resolve(&raw, &variables);
        debug!(
            "Resolved {} edges through {} intermediates ({} recurrent)",
            resolved.edge_count(),
            resolved.intermediates.len(),
            resolved.recurrent.len()
        );

        let ordered: Vec<String> = variables.into_iter().collect();
        CausalGraph::from_dependencies(&resolved.dependencies, Some(&ordered))
    }
}
