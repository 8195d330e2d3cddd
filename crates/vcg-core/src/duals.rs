//! Dual prices from the restricted master problem.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dual prices keyed by stop name.
///
/// The master's flow-conservation structure gives every stop except Source a
/// dual; Source's dual is implicitly zero. The pricing sub-problem treats a
/// missing entry for any other stop as a contract violation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DualValues {
    values: HashMap<String, f64>,
}

impl DualValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, stop: impl Into<String>, value: f64) {
        self.values.insert(stop.into(), value);
    }

    pub fn get(&self, stop: &str) -> Option<f64> {
        self.values.get(stop).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for DualValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(s, v)| (s.into(), v)).collect(),
        }
    }
}
