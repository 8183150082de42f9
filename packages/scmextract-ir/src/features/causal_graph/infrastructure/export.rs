//! JSON export of causal graphs
//!
//! The exported shape carries the node list, the edge list and the
//! dependency mapping side by side so that downstream tools can pick
//! whichever form they need. Only `variables` and `edges` are read back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::Result;
use crate::features::causal_graph::domain::{CausalGraph, DependencyMap};

/// Serializable graph form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub variables: Vec<String>,
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub dependencies: DependencyMap,
}

impl GraphExport {
    pub fn from_graph(graph: &CausalGraph) -> Self {
        Self {
            variables: graph.nodes().map(String::from).collect(),
            edges: graph
                .edges()
                .map(|e| (e.cause.clone(), e.effect.clone()))
                .collect(),
            dependencies: graph.to_dependencies(),
        }
    }

    /// Rebuild the graph, validating every edge endpoint
    pub fn into_graph(self) -> Result<CausalGraph> {
        CausalGraph::from_edges(&self.variables, self.edges)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&CausalGraph> for GraphExport {
    fn from(graph: &CausalGraph) -> Self {
        Self::from_graph(graph)
    }
}

impl CausalGraph {
    pub fn to_json(&self) -> Result<String> {
        GraphExport::from_graph(self).to_json()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        GraphExport::from_json(json)?.into_graph()
    }

    /// Write the JSON export, creating parent directories as needed
    pub fn save_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScmError;
    use crate::features::causal_graph::domain::dependency_map;

    fn sample() -> CausalGraph {
        let deps = dependency_map(&[("x", &["a", "b"]), ("y", &["x"])]);
        let nodes: Vec<String> = ["a", "b", "c", "x", "y"].iter().map(|s| s.to_string()).collect();
        CausalGraph::from_dependencies(&deps, Some(&nodes)).unwrap()
    }

    #[test]
    fn test_export_shape() {
        let export = GraphExport::from_graph(&sample());

        assert_eq!(export.variables, vec!["a", "b", "c", "x", "y"]);
        assert_eq!(export.edges[0], ("a".to_string(), "x".to_string()));
        assert_eq!(export.dependencies["y"], vec!["x".to_string()]);
        assert!(!export.dependencies.contains_key("c"));
    }

    #[test]
    fn test_json_restores_isolated_nodes() {
        let graph = sample();
        let restored = CausalGraph::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(graph, restored);
        assert!(restored.contains_node("c"));
    }

    #[test]
    fn test_json_with_unknown_endpoint_rejected() {
        let json = r#"{"variables": ["a"], "edges": [["a", "b"]]}"#;
        let err = CausalGraph::from_json(json).unwrap_err();
        assert!(matches!(err, ScmError::MalformedGraph { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("predicted.json");

        let graph = sample();
        graph.save_json(&path).unwrap();
        assert_eq!(CausalGraph::load_json(&path).unwrap(), graph);
    }
}
