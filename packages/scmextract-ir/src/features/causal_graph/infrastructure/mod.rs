//! Exported graph forms

mod dot;
mod export;

pub use dot::to_dot;
pub use export::GraphExport;
