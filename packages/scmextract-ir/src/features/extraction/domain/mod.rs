//! Extraction domain models

mod control_context;
mod raw_dependencies;
mod resolved;

pub use control_context::ControlContext;
pub use raw_dependencies::RawDependencies;
pub use resolved::ResolvedDependencies;
