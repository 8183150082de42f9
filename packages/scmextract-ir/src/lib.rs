/*
 * scmextract IR - Causal structure extraction from simulator source
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span)
 * - features/    : Vertical slices (parsing → extraction → causal_graph → evaluation)
 * - config/      : Extractor options
 *
 * Every entry point is synchronous and pure: graphs are immutable values
 * that can be shared across threads without synchronization.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Extractor options
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::ExtractorOptions;
pub use errors::{Result, ScmError};
pub use features::causal_graph::{CausalGraph, DependencyMap, Edge, GraphExport};
pub use features::evaluation::{evaluate_graph, MetricsRecord};
pub use features::extraction::{
    AstExtractor, CausalExtractor, ExtractorFactory, ExtractorRegistry, RawDependencies,
    VariableSet,
};
