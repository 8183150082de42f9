//! Graphviz DOT rendering
//!
//! Causes are drawn below their effects (`rankdir=BT`). Isolated variables
//! are emitted as bare nodes so the picture shows the whole node set.

use std::fmt::Write;

use crate::features::causal_graph::domain::CausalGraph;

pub fn to_dot(graph: &CausalGraph, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{}\" {{", escape(title));
    let _ = writeln!(out, "    rankdir=BT;");
    let _ = writeln!(out, "    node [shape=box];");

    for node in graph.nodes() {
        if graph.parents(node).is_empty() && graph.children(node).is_empty() {
            let _ = writeln!(out, "    \"{}\";", escape(node));
        }
    }
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\";",
            escape(&edge.cause),
            escape(&edge.effect)
        );
    }

    out.push('}');
    out
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
