//! Exhaustive classical Max-Cut solver.
//!
//! Enumerates all `2^n` assignments through the cut-value oracle and
//! reports the optimum together with **every** assignment achieving it.
//! Ties are expected (any cut and its global bit-flip score the same) and
//! all of them are part of the ground truth the simulator is validated
//! against.

use tracing::debug;

use crate::convention::bitstring_of;
use crate::graph::Graph;

/// Outcome of the exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxCutSolution {
    /// The maximum cut value over all assignments.
    pub best_value: f64,
    /// State indices of all assignments achieving `best_value`, ascending.
    pub optimal: Vec<usize>,
    /// Node count of the graph that was solved.
    pub n_nodes: usize,
}

impl MaxCutSolution {
    /// The optimal assignments rendered as bitstrings (node 0 leftmost).
    pub fn bitstrings(&self) -> Vec<String> {
        self.optimal
            .iter()
            .map(|&index| bitstring_of(index, self.n_nodes))
            .collect()
    }

    /// True if the given state index attains the optimum.
    pub fn is_optimal(&self, index: usize) -> bool {
        self.optimal.binary_search(&index).is_ok()
    }
}

/// Enumerate all `2^n` assignments and return the optimum with all ties.
///
/// Floating-point cut values are compared exactly; for integer or rational
/// weights the sums are exact, so ties group correctly.
pub fn solve_max_cut(graph: &Graph) -> MaxCutSolution {
    let n_nodes = graph.n_nodes();
    let mut best_value = 0.0_f64;
    let mut optimal: Vec<usize> = Vec::new();

    for index in 0..graph.n_assignments() {
        let value = graph.cut_value_of_index(index);
        if value > best_value {
            best_value = value;
            optimal.clear();
            optimal.push(index);
        } else if value == best_value {
            optimal.push(index);
        }
    }

    debug!(
        n_nodes,
        best_value,
        n_optimal = optimal.len(),
        "brute-force Max-Cut search complete"
    );

    MaxCutSolution {
        best_value,
        optimal,
        n_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring4_has_two_optima() {
        let g = Graph::with_unit_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 4.0);
        assert_eq!(sol.optimal, vec![6, 9]);
        assert_eq!(sol.bitstrings(), vec!["0110", "1001"]);
        assert!(sol.is_optimal(6));
        assert!(!sol.is_optimal(5));
    }

    #[test]
    fn triangle_is_frustrated() {
        // An odd cycle cannot cut all edges: optimum is 2, six ways.
        let g = Graph::with_unit_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 2.0);
        assert_eq!(sol.optimal.len(), 6);
    }

    #[test]
    fn single_edge() {
        let g = Graph::with_unit_edges(2, [(0, 1)]).unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 1.0);
        assert_eq!(sol.optimal, vec![1, 2]);
    }

    #[test]
    fn edgeless_graph_every_assignment_ties_at_zero() {
        let g = Graph::new(2, []).unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 0.0);
        assert_eq!(sol.optimal, vec![0, 1, 2, 3]);
    }

    #[test]
    fn zero_nodes() {
        let g = Graph::new(0, []).unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 0.0);
        assert_eq!(sol.optimal, vec![0]);
        assert_eq!(sol.bitstrings(), vec![""]);
    }

    #[test]
    fn weighted_optimum_prefers_heavy_edge() {
        // Cutting the 3.0 edge alone beats cutting both unit edges.
        let g = Graph::new(
            3,
            [
                crate::Edge::new(0, 1, 3.0),
                crate::Edge::new(1, 2, 1.0),
                crate::Edge::new(0, 2, 1.0),
            ],
        )
        .unwrap();
        let sol = solve_max_cut(&g);
        assert_eq!(sol.best_value, 4.0);
    }
}
