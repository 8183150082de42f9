//! Extraction Feature
//!
//! Turns a Python syntax tree into a causal graph restricted to a set of
//! variables of interest.
//!
//! ## Structure
//! - `domain/` - RawDependencies, ControlContext, ResolvedDependencies
//! - `ports/` - CausalExtractor trait
//! - `infrastructure/` - expression reads, statement collector, resolver, AstExtractor
//! - `application/` - ExtractorRegistry
//!
//! ## Pipeline
//! 1. collect: walk statements in program order, recording
//!    `raw[target] += reads(expr) ∪ control_context` per assignment
//! 2. resolve: replace causes outside the variable set by their own causes
//! 3. project: build the CausalGraph over the variable set

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{ExtractorFactory, ExtractorRegistry};
pub use domain::{ControlContext, RawDependencies, ResolvedDependencies};
pub use infrastructure::{collect_raw_dependencies, resolve, AstExtractor};
pub use ports::{CausalExtractor, VariableSet};
