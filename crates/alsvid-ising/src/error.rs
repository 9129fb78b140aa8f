//! Error types for the Ising crate.

use thiserror::Error;

/// Errors produced by the Ising mapping and its verifier.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IsingError {
    /// A spin assignment's length does not match the model's spin count.
    #[error("spin assignment has {got} spins but model has {expected}")]
    InvalidAssignment {
        /// Number of spins in the model.
        expected: usize,
        /// Length of the offending assignment.
        got: usize,
    },

    /// A spin value is neither +1 nor −1.
    #[error("spin {spin} at position {position} is not ±1")]
    InvalidSpin {
        /// Index of the offending spin.
        position: usize,
        /// The offending value.
        spin: i8,
    },

    /// The Ising energy fails to reproduce the cut value for some assignment.
    ///
    /// Fatal to the verifier: the mapping and the oracle disagree, and the
    /// offending assignment is part of the report.
    #[error(
        "mapping mismatch at assignment {bitstring} (index {index}): \
         cut value {cut_value} but Ising energy {energy}"
    )]
    MappingMismatch {
        /// State index of the disagreeing assignment.
        index: usize,
        /// The assignment rendered under the workspace bit convention.
        bitstring: String,
        /// Cut value from the classical oracle.
        cut_value: f64,
        /// Energy from the Ising model.
        energy: f64,
    },

    /// Graph and model disagree on the number of nodes/spins.
    #[error("graph has {graph_nodes} nodes but model has {model_spins} spins")]
    SizeMismatch {
        /// Node count of the graph.
        graph_nodes: usize,
        /// Spin count of the model.
        model_spins: usize,
    },
}

/// Result type for Ising operations.
pub type IsingResult<T> = Result<T, IsingError>;
