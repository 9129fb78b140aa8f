//! Measurement probability distributions and single-shot draws.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use alsvid_graph::convention::bitstring_of;

use crate::error::{QaoaError, QaoaResult};
use crate::statevector::NORM_TOLERANCE;

/// One illustrative measurement draw.
///
/// Demonstrates what a single hardware execution might observe; never
/// used for correctness decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Sampled state index.
    pub index: usize,
    /// The sampled assignment rendered as a bitstring.
    pub bitstring: String,
    /// The exact probability this outcome was drawn under.
    pub probability: f64,
}

/// The exact theoretical measurement distribution of one simulation run.
///
/// Read-only: probabilities per state index, summing to 1 within
/// tolerance (checked at construction from the final state vector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    probabilities: Vec<f64>,
    n_qubits: usize,
}

impl Distribution {
    /// Wrap raw probabilities, enforcing the normalization invariant.
    pub(crate) fn from_probabilities(
        probabilities: Vec<f64>,
        n_qubits: usize,
    ) -> QaoaResult<Self> {
        let total: f64 = probabilities.iter().sum();
        let drift = (total - 1.0).abs();
        if drift > NORM_TOLERANCE {
            return Err(QaoaError::InvariantViolation {
                drift,
                tolerance: NORM_TOLERANCE,
            });
        }
        Ok(Self {
            probabilities,
            n_qubits,
        })
    }

    /// Number of qubits.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Probability of one state index.
    pub fn prob(&self, index: usize) -> f64 {
        self.probabilities[index]
    }

    /// All probabilities, indexed by state index.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(bitstring, probability)` pairs in state-index order.
    pub fn bitstring_probabilities(&self) -> Vec<(String, f64)> {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(index, &p)| (bitstring_of(index, self.n_qubits), p))
            .collect()
    }

    /// The `k` most probable outcomes, descending; ties break by index.
    pub fn top(&self, k: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> =
            self.probabilities.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(k);
        ranked
    }

    /// Draw one outcome with a seeded generator.
    ///
    /// Reproducible: a fixed seed yields the same shot. The outcome is
    /// always in the distribution's support.
    pub fn sample_seeded(&self, seed: u64) -> Shot {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample_with(&mut rng)
    }

    /// Draw one outcome from an arbitrary generator.
    pub fn sample_with(&self, rng: &mut impl rand::Rng) -> Shot {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        let mut index = self.probabilities.len() - 1;
        for (i, &p) in self.probabilities.iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                index = i;
                break;
            }
        }
        // Zero-probability tail indices can only be hit through the
        // rounding fallback; walk back to the nearest supported outcome.
        while self.probabilities[index] == 0.0 && index > 0 {
            index -= 1;
        }
        Shot {
            index,
            bitstring: bitstring_of(index, self.n_qubits),
            probability: self.probabilities[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(probs: Vec<f64>, n: usize) -> Distribution {
        Distribution::from_probabilities(probs, n).unwrap()
    }

    #[test]
    fn rejects_unnormalized_probabilities() {
        let err = Distribution::from_probabilities(vec![0.5, 0.1], 1).unwrap_err();
        assert!(matches!(err, QaoaError::InvariantViolation { .. }));
    }

    #[test]
    fn top_ranks_descending() {
        let d = dist(vec![0.1, 0.4, 0.3, 0.2], 2);
        let top = d.top(2);
        assert_eq!(top[0].0, 1);
        assert_eq!(top[1].0, 2);
    }

    #[test]
    fn bitstrings_follow_convention() {
        let d = dist(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0], 3);
        let pairs = d.bitstring_probabilities();
        assert_eq!(pairs[6].0, "011");
        assert_eq!(pairs[6].1, 1.0);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let d = dist(vec![0.25, 0.25, 0.25, 0.25], 2);
        let a = d.sample_seeded(42);
        let b = d.sample_seeded(42);
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_stays_in_support() {
        let d = dist(vec![0.0, 1.0], 1);
        for seed in 0..100 {
            let shot = d.sample_seeded(seed);
            assert_eq!(shot.index, 1);
            assert_eq!(shot.bitstring, "1");
            assert!(shot.probability > 0.0);
        }
    }

    #[test]
    fn zero_qubit_distribution() {
        let d = dist(vec![1.0], 0);
        let shot = d.sample_seeded(3);
        assert_eq!(shot.index, 0);
        assert_eq!(shot.bitstring, "");
    }
}
