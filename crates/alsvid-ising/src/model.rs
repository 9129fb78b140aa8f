//! Ising model data structures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use alsvid_graph::convention::{bit_of, spin_of};
use alsvid_graph::Graph;

use crate::error::{IsingError, IsingResult};

/// A single pairwise coupling `J_ij · s_i · s_j`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coupling {
    /// First spin index.
    pub i: usize,
    /// Second spin index.
    pub j: usize,
    /// Coupling coefficient `J_ij`.
    pub coeff: f64,
}

/// An Ising energy function over ±1 spins.
///
/// `E(s) = Σ_i fields[i]·s_i + Σ_k couplings[k].coeff·s_i·s_j + offset`
///
/// Derived once from a [`Graph`] and immutable afterwards; threaded as an
/// explicit value into the verifier and the simulator rather than held in
/// any shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    /// Local field coefficients, one per spin. All zero for plain Max-Cut;
    /// kept explicit so biased problem variants stay representable.
    fields: Vec<f64>,
    /// Pairwise couplings, one per graph edge, canonical order `i < j`.
    couplings: Vec<Coupling>,
    /// Constant energy offset.
    offset: f64,
}

impl IsingModel {
    /// Derive the Max-Cut Ising model from a problem graph.
    ///
    /// Each edge `(i, j, w)` contributes `J_ij = -w/2` and `+w/2` of
    /// constant offset, so that `energy(spins(x)) == cut_value(x)` exactly
    /// (see the crate docs for the convention).
    pub fn from_graph(graph: &Graph) -> Self {
        let fields = vec![0.0; graph.n_nodes()];
        let mut couplings = Vec::with_capacity(graph.edges().len());
        let mut offset = 0.0;

        for e in graph.edges() {
            let (i, j) = if e.u < e.v { (e.u, e.v) } else { (e.v, e.u) };
            couplings.push(Coupling {
                i,
                j,
                coeff: -e.weight / 2.0,
            });
            offset += e.weight / 2.0;
        }

        debug!(
            n_spins = fields.len(),
            n_couplings = couplings.len(),
            offset,
            "derived Ising model from graph"
        );

        Self {
            fields,
            couplings,
            offset,
        }
    }

    /// Number of spins.
    pub fn n_spins(&self) -> usize {
        self.fields.len()
    }

    /// Number of assignments in the configuration space, `2^n`.
    pub fn n_assignments(&self) -> usize {
        1 << self.n_spins()
    }

    /// Local field coefficients.
    pub fn fields(&self) -> &[f64] {
        &self.fields
    }

    /// Pairwise couplings.
    pub fn couplings(&self) -> &[Coupling] {
        &self.couplings
    }

    /// Constant energy offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Energy of an explicit ±1 spin assignment.
    ///
    /// Fails fast on a wrong-length assignment or a non-±1 spin value.
    pub fn energy(&self, spins: &[i8]) -> IsingResult<f64> {
        if spins.len() != self.n_spins() {
            return Err(IsingError::InvalidAssignment {
                expected: self.n_spins(),
                got: spins.len(),
            });
        }
        if let Some(position) = spins.iter().position(|s| s.abs() != 1) {
            return Err(IsingError::InvalidSpin {
                position,
                spin: spins[position],
            });
        }

        let mut energy = self.offset;
        for (i, &h) in self.fields.iter().enumerate() {
            energy += h * f64::from(spins[i]);
        }
        for c in &self.couplings {
            energy += c.coeff * f64::from(spins[c.i]) * f64::from(spins[c.j]);
        }
        Ok(energy)
    }

    /// Energy of the spin assignment encoded by a state index.
    ///
    /// Indexed form of [`energy`](Self::energy) using the workspace bit
    /// convention; infallible, and the form the simulator's cost stage
    /// evaluates per amplitude.
    pub fn energy_of_index(&self, index: usize) -> f64 {
        let spin = |node: usize| f64::from(spin_of(bit_of(index, node)));

        let mut energy = self.offset;
        for (i, &h) in self.fields.iter().enumerate() {
            energy += h * spin(i);
        }
        for c in &self.couplings {
            energy += c.coeff * spin(c.i) * spin(c.j);
        }
        energy
    }
}
