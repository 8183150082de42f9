//! Simulators with hand-authored ground truth
//!
//! A simulator provides the source text to analyze, the variables of
//! interest, and the causal graph an expert wrote down for it.

mod registry;
mod simulator;
mod sir;

pub use registry::{SimulatorFactory, SimulatorRegistry};
pub use simulator::Simulator;
pub use sir::SirSimulator;
