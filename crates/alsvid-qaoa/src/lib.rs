//! `alsvid-qaoa` — exact state-vector simulation of depth-1 QAOA.
//!
//! Simulates the Quantum Approximate Optimization Algorithm circuit for a
//! Max-Cut [`IsingModel`](alsvid_ising::IsingModel):
//!
//! 1. uniform superposition over all `2^n` basis states;
//! 2. diagonal cost phase `exp(-i·γ·E(x))` per state index, with `E`
//!    evaluated from the Ising coefficients;
//! 3. mixer `Rx(2β)` on every qubit;
//! 4. exact measurement probabilities `|amplitude|²`.
//!
//! The output is the full theoretical [`Distribution`] — no shot noise.
//! A seeded single-shot draw exists for illustration only; correctness
//! claims always come from the exact distribution.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_graph::Graph;
//! use alsvid_ising::IsingModel;
//! use alsvid_qaoa::QaoaSimulator;
//!
//! let g = Graph::with_unit_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let sim = QaoaSimulator::new(IsingModel::from_graph(&g));
//! let dist = sim.run(1.0, 0.5).unwrap();
//!
//! // The two optimal cuts dominate the distribution.
//! let top: Vec<usize> = dist.top(2).iter().map(|(i, _)| *i).collect();
//! assert_eq!(top, vec![6, 9]);
//! ```

pub mod distribution;
pub mod error;
pub mod simulator;
pub mod statevector;

pub use distribution::{Distribution, Shot};
pub use error::{QaoaError, QaoaResult};
pub use simulator::{QaoaSimulator, SweepPoint};
pub use statevector::StateVector;
