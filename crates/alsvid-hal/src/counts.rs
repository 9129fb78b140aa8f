//! Measurement counts and execution results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Observed bitstring counts from a shot-based execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    map: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty count table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` observations of `bitstring`.
    pub fn record(&mut self, bitstring: impl Into<String>, n: u64) {
        *self.map.entry(bitstring.into()).or_insert(0) += n;
    }

    /// Observations of one bitstring (0 if never seen).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.map.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.map.values().sum()
    }

    /// The most frequently observed bitstring, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.map
            .iter()
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
            .max_by_key(|&(bitstring, count)| (count, std::cmp::Reverse(bitstring)))
    }

    /// Empirical frequency of one bitstring in `[0, 1]`.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }

    /// Iterate observed `(bitstring, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// The outcome of one shot-based execution on an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Observed bitstring counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self { counts, shots }
    }
}
