//! Backend trait for hardware execution adapters.
//!
//! The lifecycle mirrors a remote device:
//!
//! ```text
//!   submit() ──→ status() … status() ──→ result()
//!    (async)        (async, polled)       (async)
//! ```
//!
//! All methods are async because a real adapter queues, polls, and may
//! be slow or fail independently of the caller. Timeouts and retries are
//! the adapter's responsibility; the provided [`wait`](QuantumBackend::wait)
//! only polls and gives up.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use alsvid_ising::IsingModel;

use crate::counts::ExecutionResult;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};

/// Everything an adapter needs to run one QAOA execution.
///
/// Carries the Ising coefficients rather than a gate list: the circuit
/// shape is fixed (uniform superposition, cost phase, mixer), so the
/// coefficients plus the angles determine it completely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaoaJobRequest {
    /// The problem's Ising coefficients.
    pub model: IsingModel,
    /// Cost angle.
    pub gamma: f64,
    /// Mixer angle.
    pub beta: f64,
    /// Requested number of measurement shots.
    pub shots: u32,
}

impl QaoaJobRequest {
    /// Create a request, rejecting a zero shot count up front.
    pub fn new(model: IsingModel, gamma: f64, beta: f64, shots: u32) -> HalResult<Self> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shot count must be at least 1".into()));
        }
        Ok(Self {
            model,
            gamma,
            beta,
            shots,
        })
    }
}

/// Trait implemented by hardware execution adapters.
///
/// The core treats implementations as black boxes that may be slow,
/// unavailable, or unauthorized; any such failure surfaces as a
/// [`HalError`] and never as a core simulation error.
#[async_trait]
pub trait QuantumBackend: Send + Sync {
    /// Human-readable adapter name.
    fn name(&self) -> &str;

    /// Submit a QAOA job for execution. Returns a queued job's ID.
    async fn submit(&self, request: &QaoaJobRequest) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    ///
    /// Only valid once `status()` reports `Completed`.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a queued or running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Poll a job until it completes and return its result.
    ///
    /// Default implementation polls every 500ms for up to 5 minutes,
    /// then fails with [`HalError::Timeout`].
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let poll_interval = Duration::from_millis(500);
        let max_polls = 600;

        for _ in 0..max_polls {
            match self.status(job_id).await? {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => sleep(poll_interval).await,
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}
