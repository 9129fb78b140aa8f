//! End-to-end verification of the Max-Cut ↔ Ising mapping.

use alsvid_graph::{Edge, Graph, solve_max_cut};
use alsvid_ising::{IsingModel, verify};

fn check(graph: &Graph) {
    let model = IsingModel::from_graph(graph);
    let report = verify(graph, &model).expect("mapping must verify");
    assert_eq!(report.assignments_checked, graph.n_assignments());

    // The verifier's optimum set must match the independent brute force.
    let sol = solve_max_cut(graph);
    assert_eq!(report.max_cut, sol.best_value);
    assert_eq!(report.optimal, sol.optimal);
}

#[test]
fn ring4_verifies() {
    let g = Graph::with_unit_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    check(&g);
}

#[test]
fn triangle_verifies() {
    let g = Graph::with_unit_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
    check(&g);
}

#[test]
fn complete_graph_k5_verifies() {
    let mut pairs = Vec::new();
    for u in 0..5 {
        for v in (u + 1)..5 {
            pairs.push((u, v));
        }
    }
    let g = Graph::with_unit_edges(5, pairs).unwrap();
    check(&g);
}

#[test]
fn weighted_graph_verifies() {
    let g = Graph::new(
        4,
        [
            Edge::new(0, 1, 0.5),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 1.25),
            Edge::new(0, 3, 0.75),
        ],
    )
    .unwrap();
    check(&g);
}

#[test]
fn edgeless_and_empty_graphs_verify() {
    check(&Graph::new(3, []).unwrap());
    check(&Graph::new(0, []).unwrap());
}

#[test]
fn star_graph_verifies() {
    let g = Graph::with_unit_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    check(&g);
}
