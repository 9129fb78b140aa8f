//! Statistical comparison of empirical counts against the theoretical
//! distribution.
//!
//! Shot-based results carry sampling noise (and on real devices, gate and
//! readout noise), so the comparison is statistical: the total variation
//! distance between the empirical frequencies and the exact simulator
//! distribution. Exhaustive exact checks belong to the verifier, never
//! here.

use tracing::debug;

use alsvid_graph::convention::bitstring_of;
use alsvid_qaoa::Distribution;

use crate::counts::ExecutionResult;

/// Total variation distance between empirical frequencies and the exact
/// distribution: `0.5 · Σ_x |freq(x) − p(x)|`, in `[0, 1]`.
///
/// Counts keyed by bitstrings the distribution does not index (wrong
/// width, stray characters) contribute their full frequency — a device
/// returning malformed outcomes is maximally distant, not silently
/// ignored.
pub fn total_variation_distance(result: &ExecutionResult, dist: &Distribution) -> f64 {
    let n = dist.n_qubits();
    let total = result.counts.total();
    if total == 0 {
        return 1.0;
    }

    let mut tvd = 0.0;
    for (index, &p) in dist.probabilities().iter().enumerate() {
        let freq = result.counts.frequency(&bitstring_of(index, n));
        tvd += (freq - p).abs();
    }
    // Mass on bitstrings outside the index space.
    let indexed: u64 = (0..dist.probabilities().len())
        .map(|index| result.counts.get(&bitstring_of(index, n)))
        .sum();
    tvd += (total - indexed) as f64 / total as f64;

    let tvd = tvd / 2.0;
    debug!(tvd, shots = result.shots, "compared counts against distribution");
    tvd
}

/// True if the empirical counts are within `threshold` total variation
/// distance of the theoretical distribution.
pub fn agrees_within(result: &ExecutionResult, dist: &Distribution, threshold: f64) -> bool {
    total_variation_distance(result, dist) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::Counts;

    use alsvid_graph::Graph;
    use alsvid_ising::IsingModel;
    use alsvid_qaoa::QaoaSimulator;

    fn uniform2() -> Distribution {
        let g = Graph::new(2, []).unwrap();
        QaoaSimulator::new(IsingModel::from_graph(&g))
            .run(0.0, 0.0)
            .unwrap()
    }

    #[test]
    fn exact_frequencies_have_zero_distance() {
        let mut counts = Counts::new();
        for bitstring in ["00", "10", "01", "11"] {
            counts.record(bitstring, 25);
        }
        let result = ExecutionResult::new(counts, 100);
        assert!(total_variation_distance(&result, &uniform2()) < 1e-12);
        assert!(agrees_within(&result, &uniform2(), 0.01));
    }

    #[test]
    fn concentrated_counts_are_distant_from_uniform() {
        let mut counts = Counts::new();
        counts.record("00", 100);
        let result = ExecutionResult::new(counts, 100);
        let tvd = total_variation_distance(&result, &uniform2());
        assert!((tvd - 0.75).abs() < 1e-12);
        assert!(!agrees_within(&result, &uniform2(), 0.5));
    }

    #[test]
    fn malformed_bitstrings_count_as_distance() {
        let mut counts = Counts::new();
        counts.record("000", 100); // wrong width for a 2-qubit space
        let result = ExecutionResult::new(counts, 100);
        assert!((total_variation_distance(&result, &uniform2()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_counts_are_maximally_distant() {
        let result = ExecutionResult::new(Counts::new(), 0);
        assert_eq!(total_variation_distance(&result, &uniform2()), 1.0);
    }
}
