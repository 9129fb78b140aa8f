//! Error types for the graph crate.

use thiserror::Error;

/// Errors produced when constructing or querying a problem graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// An assignment's length does not match the graph's node count.
    ///
    /// This indicates a caller defect, not a recoverable condition.
    #[error("assignment has {got} bits but graph has {expected} nodes")]
    InvalidAssignment {
        /// Number of nodes in the graph.
        expected: usize,
        /// Length of the offending assignment.
        got: usize,
    },

    /// An edge references a node index outside `0..n_nodes`.
    #[error("edge ({u}, {v}) references a node out of range for {n_nodes} nodes")]
    NodeOutOfRange {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// An edge connects a node to itself.
    #[error("self-loop on node {0} is not a valid cut edge")]
    SelfLoop(usize),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
