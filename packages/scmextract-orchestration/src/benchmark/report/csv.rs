//! CSV report generation (one row per successful pair)

use std::path::{Path, PathBuf};

use crate::benchmark::BenchmarkSummary;
use crate::error::Result;

pub struct CsvReporter;

impl CsvReporter {
    pub fn save(summary: &BenchmarkSummary, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join("summary.csv");
        let mut writer = ::csv::Writer::from_path(&path)?;
        for record in &summary.results {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(path)
    }
}
