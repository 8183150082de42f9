//! Benchmark runner

use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};

use super::report::{CsvReporter, JsonReporter};
use super::result::{BenchmarkSummary, PairResult};
use crate::error::{OrchestrationError, Result};
use crate::experiment::{run_pair, save_outcome, Registries};
use scmextract_ir::ExtractorOptions;

pub struct BenchmarkRunner<'r> {
    registries: &'r Registries,
    extractors: Vec<String>,
    simulators: Vec<String>,
    options: ExtractorOptions,
}

impl<'r> BenchmarkRunner<'r> {
    /// Runner over every registered simulator and extractor
    pub fn new(registries: &'r Registries) -> Self {
        Self {
            registries,
            extractors: registries.extractors.names(),
            simulators: registries.simulators.names(),
            options: ExtractorOptions::default(),
        }
    }

    /// Restrict to these extractors (empty keeps all)
    pub fn extractors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !names.is_empty() {
            self.extractors = names;
        }
        self
    }

    /// Restrict to these simulators (empty keeps all)
    pub fn simulators<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !names.is_empty() {
            self.simulators = names;
        }
        self
    }

    pub fn options(mut self, options: ExtractorOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate every pair, in simulator-major order
    pub fn run(&self) -> Result<Vec<PairResult>> {
        if self.extractors.is_empty() {
            return Err(OrchestrationError::EmptyBenchmark("no extractors".to_string()));
        }
        if self.simulators.is_empty() {
            return Err(OrchestrationError::EmptyBenchmark("no simulators".to_string()));
        }

        let pairs: Vec<(&String, &String)> = self
            .simulators
            .iter()
            .flat_map(|sim| self.extractors.iter().map(move |ext| (sim, ext)))
            .collect();
        info!(
            "Benchmarking {} extractor(s) on {} simulator(s)",
            self.extractors.len(),
            self.simulators.len()
        );

        let results = pairs
            .par_iter()
            .map(|&(sim, ext)| {
                let outcome = run_pair(sim, ext, &self.options, self.registries).map_err(|e| {
                    warn!("{} + {} failed: {}", sim, ext, e);
                    e.to_string()
                });
                if let Ok(outcome) = &outcome {
                    info!(
                        "{} + {}: F1={:.3}, SHD={}",
                        sim, ext, outcome.metrics.f1, outcome.metrics.shd
                    );
                }
                PairResult {
                    simulator: sim.clone(),
                    extractor: ext.clone(),
                    outcome,
                }
            })
            .collect();

        Ok(results)
    }

    /// Run and write `summary.json`, `summary.csv` and per-pair artifacts
    /// under `output_dir/<simulator>/<extractor>/`
    pub fn run_and_save(&self, output_dir: &Path) -> Result<BenchmarkSummary> {
        let pairs = self.run()?;
        std::fs::create_dir_all(output_dir)?;

        for pair in &pairs {
            if let Ok(outcome) = &pair.outcome {
                save_outcome(outcome, &output_dir.join(&pair.simulator).join(&pair.extractor))?;
            }
        }

        let summary = BenchmarkSummary::from_pairs(&self.extractors, &self.simulators, &pairs);
        JsonReporter::save(&summary, output_dir)?;
        CsvReporter::save(&summary, output_dir)?;
        info!(
            "Benchmark complete: {} succeeded, {} failed, results in {}",
            summary.results.len(),
            summary.failures.len(),
            output_dir.display()
        );
        Ok(summary)
    }
}
