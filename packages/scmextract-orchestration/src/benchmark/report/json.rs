//! JSON report generation

use std::path::{Path, PathBuf};

use crate::benchmark::BenchmarkSummary;
use crate::error::Result;

pub struct JsonReporter;

impl JsonReporter {
    pub fn save(summary: &BenchmarkSummary, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join("summary.json");
        let json = serde_json::to_string_pretty(summary)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
