//! Resolved dependencies
//!
//! Result of projecting the raw mapping onto the variables of interest.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDependencies {
    /// Target → causes, all within the variable set, no self-references
    pub dependencies: BTreeMap<String, BTreeSet<String>>,

    /// Targets that reach themselves through the raw mapping (temporal
    /// recurrence); the self-loop is not part of `dependencies`
    pub recurrent: BTreeSet<String>,

    /// Intermediate names expanded during resolution
    pub intermediates: BTreeSet<String>,
}

impl ResolvedDependencies {
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(BTreeSet::len).sum()
    }
}
