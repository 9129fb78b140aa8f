//! `alsvid-graph` — Max-Cut problem instances and their classical oracle.
//!
//! A [`Graph`] is an immutable weighted edge list over `n` nodes. Its
//! [`cut_value`](Graph::cut_value) oracle scores any 0/1 node assignment,
//! and [`solve_max_cut`] enumerates the full assignment space to certify
//! the optimum (including all ties).
//!
//! The crate also owns the workspace-wide index conventions (see
//! [`convention`]): how a state index maps to bits, how bits map to ±1
//! spins, and how assignments are rendered as bitstrings. Every other
//! crate goes through these functions rather than re-deriving masks.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_graph::{Graph, solve_max_cut};
//!
//! // 4-node ring: 0-1, 0-2, 1-3, 2-3
//! let g = Graph::with_unit_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let solution = solve_max_cut(&g);
//! assert_eq!(solution.best_value, 4.0);
//! assert_eq!(solution.bitstrings(), vec!["0110", "1001"]);
//! ```

pub mod bruteforce;
pub mod convention;
pub mod error;
pub mod graph;

pub use bruteforce::{MaxCutSolution, solve_max_cut};
pub use convention::{bit_of, bits_of, bitstring_of, spin_of, spins_of};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph};
