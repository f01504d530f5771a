//! Immutable named parameter sets.

use serde::{Deserialize, Serialize};

use crate::numeric::Real;

/// Immutable mapping from parameter name to a real-valued scalar.
///
/// Built once at model construction with the `with` builder and never
/// mutated during a run. Insertion order is preserved so reports list
/// parameters the way the model declared them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, Real)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any earlier value under the same name.
    pub fn with(mut self, name: &str, value: Real) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Real> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}
