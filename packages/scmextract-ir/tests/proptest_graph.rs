//! Property-based tests for graph construction, extraction and evaluation

use std::collections::BTreeSet;

use proptest::prelude::*;
use scmextract_ir::features::extraction::{collect_raw_dependencies, resolve};
use scmextract_ir::features::parsing::{PythonParser, SourceParser};
use scmextract_ir::{
    evaluate_graph, AstExtractor, CausalExtractor, CausalGraph, ExtractorOptions, VariableSet,
};

const POOL: &[&str] = &["a", "b", "c", "d", "e", "f"];

// Strategy for graphs over v0..vN with arbitrary (possibly self-loop) edges
fn causal_graph() -> impl Strategy<Value = CausalGraph> {
    (1..8usize)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
        .prop_map(|(n, pairs)| {
            let nodes: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
            let edges: Vec<(String, String)> = pairs
                .into_iter()
                .map(|(c, e)| (nodes[c].clone(), nodes[e].clone()))
                .collect();
            CausalGraph::from_edges(&nodes, edges).expect("endpoints are declared nodes")
        })
}

// Two edge sets over one node set
fn graph_pair() -> impl Strategy<Value = (CausalGraph, CausalGraph)> {
    (2..7usize)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..16),
                prop::collection::vec((0..n, 0..n), 0..16),
            )
        })
        .prop_map(|(n, left, right)| {
            let nodes: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
            let build = |pairs: Vec<(usize, usize)>| {
                let edges: Vec<(String, String)> = pairs
                    .into_iter()
                    .map(|(c, e)| (nodes[c].clone(), nodes[e].clone()))
                    .collect();
                CausalGraph::from_edges(&nodes, edges).expect("endpoints are declared nodes")
            };
            (build(left), build(right))
        })
}

// One statement over the identifier pool
fn statement() -> impl Strategy<Value = String> {
    (
        0..POOL.len(),
        prop::collection::vec(0..POOL.len(), 0..3),
        0..4usize,
        0..POOL.len(),
    )
        .prop_map(|(target, reads, kind, cond)| {
            let target = POOL[target];
            let rhs = if reads.is_empty() {
                "0".to_string()
            } else {
                reads
                    .iter()
                    .map(|&i| POOL[i])
                    .collect::<Vec<_>>()
                    .join(" + ")
            };
            match kind {
                0 => format!("{target} = {rhs}"),
                1 => format!("{target} += {rhs}"),
                2 => format!("if {}:\n    {target} = {rhs}", POOL[cond]),
                _ => format!("for {} in {rhs}:\n    {target} = {target} * 2", POOL[cond]),
            }
        })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 1..12).prop_map(|lines| lines.join("\n") + "\n")
}

fn variable_subset() -> impl Strategy<Value = VariableSet> {
    prop::collection::btree_set(0..POOL.len(), 1..POOL.len())
        .prop_map(|idx| idx.into_iter().map(|i| POOL[i].to_string()).collect())
}

proptest! {
    /// Property: from_dependencies(to_dependencies(g), nodes(g)) == g
    #[test]
    fn prop_dependency_round_trip(g in causal_graph()) {
        let nodes: Vec<String> = g.nodes().map(String::from).collect();
        let rebuilt = CausalGraph::from_dependencies(&g.to_dependencies(), Some(&nodes)).unwrap();
        prop_assert_eq!(rebuilt, g);
    }

    /// Property: constructed graphs never contain self-loops
    #[test]
    fn prop_no_self_loops(g in causal_graph()) {
        prop_assert!(g.edges().all(|e| !e.is_self_loop()));
    }

    /// Property: JSON export round trip preserves the graph
    #[test]
    fn prop_json_round_trip(g in causal_graph()) {
        let json = g.to_json().unwrap();
        prop_assert_eq!(CausalGraph::from_json(&json).unwrap(), g);
    }

    /// Property: comparing a graph with itself is exact
    #[test]
    fn prop_self_evaluation(g in causal_graph()) {
        let m = evaluate_graph(&g, &g).unwrap();
        let expected = if g.num_edges() > 0 { 1.0 } else { 0.0 };
        prop_assert_eq!(m.shd, 0);
        prop_assert_eq!(m.precision, expected);
        prop_assert_eq!(m.recall, expected);
        prop_assert_eq!(m.f1, expected);
    }

    /// Property: every ordered pair is classified exactly once
    #[test]
    fn prop_confusion_counts_cover_all_pairs((predicted, truth) in graph_pair()) {
        let m = evaluate_graph(&predicted, &truth).unwrap();
        let n = predicted.num_nodes();
        prop_assert_eq!(m.total_pairs(), n * (n - 1));
        prop_assert!(m.shd <= m.false_positive + m.false_negative);
        prop_assert!((0.0..=1.0).contains(&m.f1));
    }

    /// Property: extraction returns exactly the requested node set
    #[test]
    fn prop_extraction_node_set_fidelity(source in program(), variables in variable_subset()) {
        let graph = AstExtractor::new().extract_from_string(&source, Some(&variables)).unwrap();
        prop_assert_eq!(graph.node_set(), &variables);
        prop_assert!(graph.edges().all(|e| !e.is_self_loop()));
    }

    /// Property: resolution never introduces a cause unreachable in the raw mapping
    #[test]
    fn prop_projection_monotonicity(source in program(), variables in variable_subset()) {
        let module = PythonParser::new().parse(&source).unwrap();
        let raw = collect_raw_dependencies(&module, &ExtractorOptions::default());
        let resolved = resolve(&raw, &variables);

        for (target, causes) in &resolved.dependencies {
            let mut reachable = BTreeSet::new();
            let mut stack: Vec<String> = raw.causes(target).into_iter().flatten().cloned().collect();
            while let Some(name) = stack.pop() {
                if reachable.insert(name.clone()) {
                    stack.extend(raw.causes(&name).into_iter().flatten().cloned());
                }
            }
            prop_assert!(causes.is_subset(&reachable), "{} has unreachable causes", target);
        }
    }
}
