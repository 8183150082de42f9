//! Causal graph value object
//!
//! Directed graph over a fixed node set. An edge `(cause, effect)` states that
//! `effect` is directly computed, in part, from `cause`.
//!
//! The graph is immutable once built: projection and restriction return new
//! instances. Two graphs are equal iff their node sets and edge sets are
//! equal.
//!
//! Cycles are allowed (feedback systems), self-loops are not. Temporal
//! recurrence such as `S_t = f(S_{t-1})` is silently dropped on construction.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::errors::{GraphRole, Result, ScmError};

/// Effect variable → its direct causes, sorted lexicographically
pub type DependencyMap = BTreeMap<String, Vec<String>>;

/// Directed edge `cause → effect`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub cause: String,
    pub effect: String,
}

impl Edge {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.cause == self.effect
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.effect.clone(), self.cause.clone())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.cause, self.effect)
    }
}

/// Build a dependency mapping from string literals
///
/// ```
/// use scmextract_ir::features::causal_graph::domain::dependency_map;
///
/// let deps = dependency_map(&[("y", &["x"]), ("x", &["a", "b"])]);
/// assert_eq!(deps["x"], vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn dependency_map(entries: &[(&str, &[&str])]) -> DependencyMap {
    entries
        .iter()
        .map(|(effect, causes)| {
            (
                effect.to_string(),
                causes.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

/// Directed causal graph over an explicit node set
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CausalGraph {
    nodes: BTreeSet<String>,
    edges: BTreeSet<Edge>,
}

impl CausalGraph {
    /// Graph with the given nodes and no edges
    pub fn empty<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
            edges: BTreeSet::new(),
        }
    }

    /// Build a graph from an effect → causes mapping
    ///
    /// Without `variables` the node set is the union of every key and cause.
    /// With `variables`, every key and cause must be a member; filtering is
    /// the caller's job, not this constructor's.
    pub fn from_dependencies<'a, M, C>(mapping: M, variables: Option<&[String]>) -> Result<Self>
    where
        M: IntoIterator<Item = (&'a String, &'a C)>,
        C: 'a + ?Sized,
        &'a C: IntoIterator<Item = &'a String>,
    {
        let declared: Option<BTreeSet<String>> = variables.map(|v| v.iter().cloned().collect());
        let mut nodes = declared.clone().unwrap_or_default();
        let mut edges = BTreeSet::new();

        for (effect, causes) in mapping {
            Self::check_member(&declared, effect, GraphRole::Effect)?;
            nodes.insert(effect.clone());

            for cause in causes {
                Self::check_member(&declared, cause, GraphRole::Cause)?;
                nodes.insert(cause.clone());

                if cause != effect {
                    edges.insert(Edge::new(cause.clone(), effect.clone()));
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Build a graph from an explicit edge list
    ///
    /// Endpoints must be members of `nodes`; self-loops are dropped.
    pub fn from_edges<I, E>(nodes: &[String], edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let declared: BTreeSet<String> = nodes.iter().cloned().collect();
        let mut edge_set = BTreeSet::new();

        for edge in edges {
            let edge = edge.into();
            if !declared.contains(&edge.cause) {
                return Err(ScmError::MalformedGraph {
                    variable: edge.cause,
                    role: GraphRole::Cause,
                });
            }
            if !declared.contains(&edge.effect) {
                return Err(ScmError::MalformedGraph {
                    variable: edge.effect,
                    role: GraphRole::Effect,
                });
            }
            if !edge.is_self_loop() {
                edge_set.insert(edge);
            }
        }

        Ok(Self {
            nodes: declared,
            edges: edge_set,
        })
    }

    fn check_member(
        declared: &Option<BTreeSet<String>>,
        variable: &str,
        role: GraphRole,
    ) -> Result<()> {
        match declared {
            Some(set) if !set.contains(variable) => Err(ScmError::MalformedGraph {
                variable: variable.to_string(),
                role,
            }),
            _ => Ok(()),
        }
    }

    /// Effect → sorted direct causes; nodes without causes are omitted
    pub fn to_dependencies(&self) -> DependencyMap {
        let mut deps: DependencyMap = BTreeMap::new();
        // Edges iterate in (cause, effect) order, so each cause list is already sorted.
        for edge in &self.edges {
            deps.entry(edge.effect.clone())
                .or_default()
                .push(edge.cause.clone());
        }
        deps
    }

    /// Sorted node names
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn node_set(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    /// Edges in (cause, effect) order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_set(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn contains_edge(&self, cause: &str, effect: &str) -> bool {
        self.edges.contains(&Edge::new(cause, effect))
    }

    /// Direct causes of `node`
    pub fn parents(&self, node: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.effect == node)
            .map(|e| e.cause.as_str())
            .collect()
    }

    /// Direct effects of `node`
    pub fn children(&self, node: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.cause == node)
            .map(|e| e.effect.as_str())
            .collect()
    }

    /// Induced subgraph on `keep ∩ nodes`
    pub fn restrict(&self, keep: &BTreeSet<String>) -> Self {
        let nodes: BTreeSet<String> = self.nodes.intersection(keep).cloned().collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| nodes.contains(&e.cause) && nodes.contains(&e.effect))
            .cloned()
            .collect();
        Self { nodes, edges }
    }

    /// Projection onto `keep ∩ nodes`, resolving causes through dropped nodes
    ///
    /// `u → v` holds when `v` depends on `u` directly or through a chain of
    /// nodes outside `keep`, the same resolution the extractor applies to
    /// intermediates. Self-loops are dropped.
    pub fn project(&self, keep: &BTreeSet<String>) -> Self {
        let nodes: BTreeSet<String> = self.nodes.intersection(keep).cloned().collect();
        let deps = self.to_dependencies();
        let mut edges = BTreeSet::new();

        for effect in &nodes {
            let mut visited: BTreeSet<&String> = BTreeSet::new();
            let mut stack: Vec<&String> = deps
                .get(effect)
                .map(|causes| causes.iter().collect())
                .unwrap_or_default();

            while let Some(cause) = stack.pop() {
                if !visited.insert(cause) {
                    continue;
                }
                if nodes.contains(cause) {
                    if cause != effect {
                        edges.insert(Edge::new(cause.clone(), effect.clone()));
                    }
                } else if let Some(next) = deps.get(cause) {
                    stack.extend(next);
                }
            }
        }

        Self { nodes, edges }
    }

    /// petgraph view (node weight = variable name)
    pub fn to_petgraph(&self) -> (DiGraph<String, ()>, BTreeMap<String, NodeIndex>) {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut index = BTreeMap::new();

        for name in &self.nodes {
            let idx = graph.add_node(name.clone());
            index.insert(name.clone(), idx);
        }
        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (index.get(&edge.cause), index.get(&edge.effect)) {
                graph.add_edge(from, to, ());
            }
        }

        (graph, index)
    }

    /// Feedback loops: strongly connected components with more than one node
    ///
    /// Each loop is sorted, and loops are ordered by their first member.
    pub fn feedback_loops(&self) -> Vec<Vec<String>> {
        let (graph, _) = self.to_petgraph();
        let mut loops: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut names: Vec<String> = scc.into_iter().map(|idx| graph[idx].clone()).collect();
                names.sort();
                names
            })
            .collect();
        loops.sort();
        loops
    }

    pub fn is_acyclic(&self) -> bool {
        self.feedback_loops().is_empty()
    }
}

impl From<(String, String)> for Edge {
    fn from((cause, effect): (String, String)) -> Self {
        Edge::new(cause, effect)
    }
}

impl From<(&str, &str)> for Edge {
    fn from((cause, effect): (&str, &str)) -> Self {
        Edge::new(cause, effect)
    }
}

impl fmt::Display for CausalGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CausalGraph(variables={:?}, edges={})",
            self.nodes,
            self.edges.len()
        )
    }
}
