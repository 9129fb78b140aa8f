//! Problem graph and cut-value oracle.

use serde::{Deserialize, Serialize};

use crate::convention::bit_of;
use crate::error::{GraphError, GraphResult};

/// A weighted undirected edge `(u, v, weight)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Edge weight; 1.0 for unweighted instances.
    pub weight: f64,
}

impl Edge {
    /// Create a new weighted edge.
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Create a unit-weight edge.
    pub fn unit(u: usize, v: usize) -> Self {
        Self::new(u, v, 1.0)
    }
}

/// An immutable Max-Cut problem instance.
///
/// Construction validates every edge; after that the graph is read-only
/// for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    n_nodes: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph over `n_nodes` nodes from a list of weighted edges.
    ///
    /// Fails on self-loops and on endpoints outside `0..n_nodes`.
    pub fn new(n_nodes: usize, edges: impl IntoIterator<Item = Edge>) -> GraphResult<Self> {
        let edges: Vec<Edge> = edges.into_iter().collect();
        for e in &edges {
            if e.u == e.v {
                return Err(GraphError::SelfLoop(e.u));
            }
            if e.u >= n_nodes || e.v >= n_nodes {
                return Err(GraphError::NodeOutOfRange {
                    u: e.u,
                    v: e.v,
                    n_nodes,
                });
            }
        }
        Ok(Self { n_nodes, edges })
    }

    /// Create a graph from unit-weight `(u, v)` pairs.
    pub fn with_unit_edges(
        n_nodes: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> GraphResult<Self> {
        Self::new(n_nodes, pairs.into_iter().map(|(u, v)| Edge::unit(u, v)))
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// All edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of all edge weights — an upper bound on any cut value.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of assignments in the search space, `2^n`.
    pub fn n_assignments(&self) -> usize {
        1 << self.n_nodes
    }

    /// Cut value of an explicit bit assignment.
    ///
    /// Sums the weight of every edge whose endpoints carry different bits.
    /// Fails fast if the assignment length does not match the node count.
    pub fn cut_value(&self, bits: &[u8]) -> GraphResult<f64> {
        if bits.len() != self.n_nodes {
            return Err(GraphError::InvalidAssignment {
                expected: self.n_nodes,
                got: bits.len(),
            });
        }
        Ok(self
            .edges
            .iter()
            .filter(|e| bits[e.u] != bits[e.v])
            .map(|e| e.weight)
            .sum())
    }

    /// Cut value of the assignment encoded by a state index.
    ///
    /// Indexed form of [`cut_value`](Self::cut_value); infallible because
    /// the index convention cannot produce a wrong-length assignment.
    pub fn cut_value_of_index(&self, index: usize) -> f64 {
        self.edges
            .iter()
            .filter(|e| bit_of(index, e.u) != bit_of(index, e.v))
            .map(|e| e.weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring4() -> Graph {
        Graph::with_unit_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap()
    }

    #[test]
    fn rejects_self_loop() {
        let err = Graph::with_unit_edges(3, [(1, 1)]).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop(1)));
    }

    #[test]
    fn rejects_out_of_range_node() {
        let err = Graph::with_unit_edges(3, [(0, 3)]).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange { v: 3, .. }));
    }

    #[test]
    fn cut_value_counts_crossing_edges() {
        let g = ring4();
        // Alternating partition {0, 3} vs {1, 2} crosses every edge.
        assert_eq!(g.cut_value(&[0, 1, 1, 0]).unwrap(), 4.0);
        assert_eq!(g.cut_value(&[0, 0, 0, 0]).unwrap(), 0.0);
        assert_eq!(g.cut_value(&[1, 0, 0, 0]).unwrap(), 2.0);
    }

    #[test]
    fn cut_value_rejects_wrong_length() {
        let err = ring4().cut_value(&[0, 1]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidAssignment {
                expected: 4,
                got: 2
            }
        ));
    }

    #[test]
    fn indexed_cut_matches_explicit_bits() {
        let g = ring4();
        for index in 0..g.n_assignments() {
            let bits = crate::convention::bits_of(index, 4);
            assert_eq!(g.cut_value(&bits).unwrap(), g.cut_value_of_index(index));
        }
    }

    #[test]
    fn weighted_edges_sum_weights() {
        let g = Graph::new(2, [Edge::new(0, 1, 2.5)]).unwrap();
        assert_eq!(g.cut_value_of_index(1), 2.5);
        assert_eq!(g.total_weight(), 2.5);
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = Graph::new(0, []).unwrap();
        assert_eq!(g.n_assignments(), 1);
        assert_eq!(g.cut_value_of_index(0), 0.0);
        assert_eq!(g.cut_value(&[]).unwrap(), 0.0);
    }
}
