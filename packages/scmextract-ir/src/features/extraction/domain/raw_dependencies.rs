//! Raw dependency mapping
//!
//! Unrestricted effect → causes mapping over every name seen while walking
//! the syntax tree. It may contain intermediate names (locals, loop
//! counters) and self-references from in-place updates; both are resolved
//! away later.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDependencies {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl RawDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an assignment to `target`
    ///
    /// The target becomes known even when `causes` is empty (`s = 0`).
    pub fn record<I, S>(&mut self, target: &str, causes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(target.to_string()).or_default();
        entry.extend(causes.into_iter().map(Into::into));
    }

    /// Recorded causes of `name`; `None` for names never assigned
    pub fn causes(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(name)
    }

    pub fn is_target(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Every assignment target discovered
    pub fn targets(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Targets whose own name appears among their causes
    pub fn self_referencing(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(target, causes)| causes.contains(*target))
            .map(|(target, _)| target.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
