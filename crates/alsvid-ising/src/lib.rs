//! `alsvid-ising` — Max-Cut as an Ising energy function.
//!
//! Reformulates a [`Graph`](alsvid_graph::Graph)'s cut objective as an
//! Ising model over ±1 spins:
//!
//!   E(s) = Σ_i h_i·s_i + Σ_(i,j) J_ij·s_i·s_j + offset
//!
//! # Sign convention (public contract)
//!
//! Each edge `(i, j, w)` contributes a coupling `J_ij = -w/2` and `+w/2`
//! to the constant offset; local fields are zero. Under this convention
//! the energy **equals the cut value exactly** for every assignment
//! (spins via `bit 0 → +1, bit 1 → −1`), so maximizing the cut is
//! maximizing the energy and no affine rescaling is needed anywhere
//! downstream. The QAOA cost phase `exp(-i·γ·E)` is then the phase under
//! which the standard (γ, β) working points concentrate on optimal cuts.
//!
//! [`verify`] proves the identity by full enumeration rather than trusting
//! the algebra: every one of the `2^n` assignments is checked, and the
//! first disagreement is reported with its offending assignment.

pub mod error;
pub mod model;
pub mod verify;

pub use error::{IsingError, IsingResult};
pub use model::{Coupling, IsingModel};
pub use verify::{MappingReport, verify};
