//! Terminal (pretty-print) report generation

use std::fmt::Write;

use crate::benchmark::BenchmarkSummary;

const RULE_WIDTH: usize = 64;

pub struct TerminalReporter;

impl TerminalReporter {
    pub fn render(summary: &BenchmarkSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(
            out,
            "{:<15} {:<12} {:>10} {:>10} {:>10} {:>6}",
            "Simulator", "Extractor", "Precision", "Recall", "F1", "SHD"
        );
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for r in &summary.results {
            let _ = writeln!(
                out,
                "{:<15} {:<12} {:>10.3} {:>10.3} {:>10.3} {:>6}",
                r.simulator, r.extractor, r.precision, r.recall, r.f1, r.shd
            );
        }
        for failure in &summary.failures {
            let _ = writeln!(
                out,
                "{:<15} {:<12} FAILED: {}",
                failure.simulator, failure.extractor, failure.error
            );
        }
        let _ = write!(out, "{}", "=".repeat(RULE_WIDTH));
        out
    }

    pub fn print(summary: &BenchmarkSummary) {
        println!("\n{}", Self::render(summary));
    }
}
