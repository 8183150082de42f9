//! Simulator registry
//!
//! Same shape as the extractor registry: append-only, ordered, passed
//! around explicitly.

use std::sync::Arc;
use tracing::debug;

use super::simulator::Simulator;
use super::sir::SirSimulator;
use crate::error::{OrchestrationError, Result};

pub type SimulatorFactory = Arc<dyn Fn() -> Box<dyn Simulator> + Send + Sync>;

fn sir_factory() -> SimulatorFactory {
    Arc::new(|| -> Box<dyn Simulator> { Box::new(SirSimulator::new()) })
}

struct Entry {
    name: String,
    description: String,
    factory: SimulatorFactory,
}

#[derive(Default)]
pub struct SimulatorRegistry {
    entries: Vec<Entry>,
}

impl SimulatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every bundled simulator (`sir`)
    pub fn with_builtin_simulators() -> Self {
        let mut registry = Self::new();
        registry.push_entry(
            SirSimulator::NAME.to_string(),
            "SIR (Susceptible-Infected-Resistant) epidemic model".to_string(),
            sir_factory(),
        );
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: SimulatorFactory,
    ) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(OrchestrationError::DuplicateSimulator(name));
        }
        self.push_entry(name, description.into(), factory);
        Ok(())
    }

    fn push_entry(&mut self, name: String, description: String, factory: SimulatorFactory) {
        debug!("Registered simulator '{}'", name);
        self.entries.push(Entry {
            name,
            description,
            factory,
        });
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Simulator>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| OrchestrationError::UnknownSimulator {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.description.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SimulatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatorRegistry")
            .field("names", &self.names())
            .finish()
    }
}
