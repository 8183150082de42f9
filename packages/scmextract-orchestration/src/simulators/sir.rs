//! SIR epidemic model
//!
//! Compartments: Susceptible, Infected, Resistant. Per step:
//!
//! ```text
//! S_to_I = rateSI * S * I / numIndividuals
//! I_to_R = I * rateIR
//! S -= S_to_I;  I += S_to_I - I_to_R;  R += I_to_R
//! ```

use std::path::PathBuf;

use super::simulator::Simulator;
use scmextract_ir::{CausalGraph, Result};

const SOURCE: &str = include_str!("../../fixtures/simulators/sir.py");

const SOURCE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/simulators/sir.py");

const STATE_VARIABLES: &[&str] = &["Susceptible", "Infected", "Resistant"];

const ALL_VARIABLES: &[&str] = &[
    "Susceptible",
    "Infected",
    "Resistant",
    "S_to_I",
    "I_to_R",
    "rateSI",
    "rateIR",
    "numIndividuals",
];

/// Effect → causes, including the recurrences of the three compartments
const GROUND_TRUTH: &[(&str, &[&str])] = &[
    ("S_to_I", &["rateSI", "Susceptible", "Infected", "numIndividuals"]),
    ("I_to_R", &["Infected", "rateIR"]),
    ("Susceptible", &["Susceptible", "S_to_I"]),
    ("Infected", &["Infected", "S_to_I", "I_to_R"]),
    ("Resistant", &["Resistant", "I_to_R"]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct SirSimulator;

impl SirSimulator {
    pub const NAME: &'static str = "sir";

    pub fn new() -> Self {
        Self
    }
}

impl Simulator for SirSimulator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "SIR (Susceptible-Infected-Resistant) epidemic model"
    }

    fn source_path(&self) -> PathBuf {
        PathBuf::from(SOURCE_PATH)
    }

    fn source_text(&self) -> Result<String> {
        Ok(SOURCE.to_string())
    }

    fn state_variables(&self) -> Vec<String> {
        STATE_VARIABLES.iter().map(|v| v.to_string()).collect()
    }

    fn all_variables(&self) -> Vec<String> {
        ALL_VARIABLES.iter().map(|v| v.to_string()).collect()
    }

    fn ground_truth_graph(&self) -> Result<CausalGraph> {
        let dependencies = scmextract_ir::features::causal_graph::dependency_map(GROUND_TRUTH);
        CausalGraph::from_dependencies(&dependencies, Some(&self.all_variables()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scmextract_ir::{evaluate_graph, AstExtractor, CausalExtractor, VariableSet};

    #[test]
    fn test_variables() {
        let sim = SirSimulator::new();
        assert_eq!(sim.state_variables(), vec!["Susceptible", "Infected", "Resistant"]);
        assert_eq!(sim.all_variables().len(), 8);
    }

    #[test]
    fn test_ground_truth_drops_recurrences() {
        let truth = SirSimulator::new().ground_truth_graph().unwrap();

        assert_eq!(truth.num_nodes(), 8);
        assert_eq!(truth.num_edges(), 10);
        assert!(!truth.contains_edge("Susceptible", "Susceptible"));
        assert!(truth.contains_edge("S_to_I", "Infected"));
        assert_eq!(truth.parents("Resistant"), vec!["I_to_R"]);
    }

    #[test]
    fn test_source_is_readable() {
        let sim = SirSimulator::new();
        assert!(sim.source_path().exists());
        assert_eq!(
            std::fs::read_to_string(sim.source_path()).unwrap(),
            sim.source_text().unwrap()
        );
    }

    #[test]
    fn test_ast_extractor_recovers_ground_truth() {
        let sim = SirSimulator::new();
        let variables: VariableSet = sim.all_variables().into_iter().collect();

        let predicted = AstExtractor::new()
            .extract_from_string(&sim.source_text().unwrap(), Some(&variables))
            .unwrap();
        let truth = sim.ground_truth_graph().unwrap();

        assert_eq!(predicted, truth);
        let metrics = evaluate_graph(&predicted, &truth).unwrap();
        assert_eq!(metrics.f1, 1.0);
        assert_eq!(metrics.shd, 0);
    }
}
