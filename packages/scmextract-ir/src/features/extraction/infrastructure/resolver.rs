//! Transitive resolution through intermediate variables
//!
//! For every target inside the variable set, walk the raw mapping depth-first
//! from its recorded causes. Causes inside the set are kept; causes outside
//! it are replaced by their own recorded causes; names without a record are
//! external inputs and vanish. Each target has its own visited set, so raw
//! cycles (augmented assignment, loop feedback) terminate.

use std::collections::BTreeSet;

use crate::features::extraction::domain::{RawDependencies, ResolvedDependencies};
use crate::features::extraction::ports::VariableSet;

/// Project `raw` onto `variables`
pub fn resolve(raw: &RawDependencies, variables: &VariableSet) -> ResolvedDependencies {
    let mut resolved = ResolvedDependencies::default();

    for (target, direct) in raw.iter() {
        if !variables.contains(target) {
            continue;
        }

        let mut causes = BTreeSet::new();
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut stack: Vec<&str> = direct.iter().map(String::as_str).collect();

        while let Some(name) = stack.pop() {
            if !visited.insert(name) {
                continue;
            }

            if variables.contains(name) {
                if name == target {
                    resolved.recurrent.insert(target.clone());
                } else {
                    causes.insert(name.to_string());
                }
                continue;
            }

            resolved.intermediates.insert(name.to_string());
            if let Some(upstream) = raw.causes(name) {
                stack.extend(upstream.iter().map(String::as_str));
            }
        }

        resolved.dependencies.insert(target.clone(), causes);
    }

    resolved
}
