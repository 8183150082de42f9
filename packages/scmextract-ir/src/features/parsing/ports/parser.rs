//! Parser port (interface)
//!
//! Defines the contract for parsing analyzed source code.

use crate::errors::Result;
use crate::features::parsing::domain::ParsedModule;

/// Parser trait - abstraction over the parsing implementation
pub trait SourceParser: Send + Sync {
    /// Parse source text, failing with `ScmError::SourceParse` on invalid syntax
    fn parse<'s>(&self, source: &'s str) -> Result<ParsedModule<'s>>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
