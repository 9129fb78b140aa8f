//! Error types for the QAOA crate.

use thiserror::Error;

/// Errors produced by state-vector simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QaoaError {
    /// Accumulated normalization drift exceeded tolerance.
    ///
    /// The state vector's total probability wandered away from 1, which
    /// signals a defect in circuit application — the run's distribution
    /// must not be trusted or silently renormalized.
    #[error("state normalization drifted by {drift:e} (tolerance {tolerance:e})")]
    InvariantViolation {
        /// Observed `|Σ|amplitude|² − 1|`.
        drift: f64,
        /// The tolerance that was exceeded.
        tolerance: f64,
    },

    /// A qubit index is outside the state's `0..n_qubits` range.
    #[error("qubit {qubit} out of range for {n_qubits}-qubit state")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Width of the state vector.
        n_qubits: usize,
    },
}

/// Result type for simulation operations.
pub type QaoaResult<T> = Result<T, QaoaError>;
