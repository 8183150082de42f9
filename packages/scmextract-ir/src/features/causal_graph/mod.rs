//! Causal Graph Feature
//!
//! ## Structure
//! - `domain/` - CausalGraph value object, Edge, dependency mapping
//! - `infrastructure/` - JSON and DOT export

pub mod domain;
pub mod infrastructure;

pub use domain::{dependency_map, CausalGraph, DependencyMap, Edge};
pub use infrastructure::{to_dot, GraphExport};
