//! Report generation
//!
//! Benchmark summaries as JSON, CSV and a terminal table.

pub mod csv;
pub mod json;
pub mod terminal;

pub use self::csv::CsvReporter;
pub use json::JsonReporter;
pub use terminal::TerminalReporter;
