//! Causal graph domain model

mod graph;

pub use graph::{dependency_map, CausalGraph, DependencyMap, Edge};
