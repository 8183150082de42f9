//! Parsing domain models

mod parsed_module;

pub use parsed_module::ParsedModule;
