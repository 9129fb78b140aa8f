//! State-vector storage and the gate kernels QAOA needs.
//!
//! Amplitudes are Cartesian `Complex64` pairs so the normalization
//! invariant is a plain sum of `norm_sqr` — no separate phase scalar to
//! reconcile. Each vector is owned by exactly one simulation run.

use num_complex::Complex64;
use rand::Rng;

use crate::error::{QaoaError, QaoaResult};

/// Normalization tolerance: `|Σ|a|² − 1|` beyond this is a defect.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A `2^n`-amplitude quantum state.
#[derive(Debug, Clone)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    n_qubits: usize,
}

impl StateVector {
    /// The uniform superposition: every amplitude `1/sqrt(2^n) + 0i`.
    ///
    /// This is the QAOA initial state (H on every qubit of |0…0⟩), built
    /// directly rather than gate by gate. Exactly normalized up to
    /// rounding, including the `n = 0` case (single amplitude 1).
    pub fn uniform(n_qubits: usize) -> Self {
        let size = 1usize << n_qubits;
        let amp = Complex64::new(1.0 / (size as f64).sqrt(), 0.0);
        Self {
            amplitudes: vec![amp; size],
            n_qubits,
        }
    }

    /// Number of qubits.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of amplitudes, `2^n`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// True for the zero-qubit state (which still holds one amplitude).
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Multiply each amplitude by `exp(-i·θ(x))` for its state index `x`.
    ///
    /// Purely diagonal: magnitudes are untouched, only phases move, so
    /// this can never introduce normalization drift beyond rounding.
    pub fn apply_phase(&mut self, theta: impl Fn(usize) -> f64) {
        for (index, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= Complex64::from_polar(1.0, -theta(index));
        }
    }

    /// Rotate one qubit by `theta` around the X axis.
    ///
    /// Mixes every amplitude pair `(x, x ^ (1 << qubit))` through the
    /// standard Rx block: `a' = cos(θ/2)·a − i·sin(θ/2)·b` and
    /// `b' = −i·sin(θ/2)·a + cos(θ/2)·b`.
    pub fn apply_rx(&mut self, qubit: usize, theta: f64) -> QaoaResult<()> {
        if qubit >= self.n_qubits {
            return Err(QaoaError::QubitOutOfRange {
                qubit,
                n_qubits: self.n_qubits,
            });
        }
        let mask = 1usize << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());

        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
        Ok(())
    }

    /// Total probability `Σ|amplitude|²`.
    pub fn norm_sqr_sum(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Fail if normalization has drifted beyond `tolerance`.
    pub fn check_normalized(&self, tolerance: f64) -> QaoaResult<()> {
        let drift = (self.norm_sqr_sum() - 1.0).abs();
        if drift > tolerance {
            return Err(QaoaError::InvariantViolation { drift, tolerance });
        }
        Ok(())
    }

    /// Measurement probabilities `|amplitude|²` per state index.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Draw one state index from the measurement distribution.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return index;
            }
        }
        // Rounding can leave the CDF a hair under 1.0.
        self.amplitudes.len() - 1
    }
}
