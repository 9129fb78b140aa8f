//! `alsvid-hal` — the hardware execution boundary.
//!
//! The simulator core is exact and synchronous; real quantum devices are
//! neither. This crate defines the narrow contract between the two: a
//! [`QaoaJobRequest`] (Ising coefficients, angles, shot count) goes out,
//! and an [`ExecutionResult`] (bitstring counts) eventually comes back —
//! or a [`HalError`] that is deliberately distinct from the core's error
//! types, so a caller can always tell "the device was unavailable" from
//! "the simulation math is wrong".
//!
//! No concrete hardware client lives here. Latency, queueing, retries,
//! noise, and credentials are entirely the implementing adapter's
//! concern; the core never assumes a synchronous or deterministic
//! response, and adapter failures never invalidate the core's own
//! correctness guarantees.
//!
//! [`compare`] offers an optional statistical comparison (total variation
//! distance) between empirical counts and the theoretical distribution —
//! statistical by design, never an exactness check.

pub mod backend;
pub mod compare;
pub mod counts;
pub mod error;
pub mod job;

pub use backend::{QaoaJobRequest, QuantumBackend};
pub use compare::{agrees_within, total_variation_distance};
pub use counts::{Counts, ExecutionResult};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
