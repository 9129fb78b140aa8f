//! Error types for the hardware boundary.
//!
//! Kept disjoint from the core's `GraphError`/`IsingError`/`QaoaError`:
//! everything here means "the external device or its transport failed",
//! never "the simulation is wrong".

use thiserror::Error;

/// Errors reported by hardware execution adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Backend is not accepting jobs.
    #[error("backend not available: {0}")]
    BackendUnavailable(String),

    /// The caller is not authorized to use the device.
    #[error("authorization denied: {0}")]
    AuthorizationDenied(String),

    /// Job submission failed.
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),

    /// Job execution failed on the device.
    #[error("job failed: {0}")]
    JobFailed(String),

    /// Job was cancelled.
    #[error("job cancelled")]
    JobCancelled,

    /// Job not found.
    #[error("job not found: {0}")]
    JobNotFound(String),

    /// Timed out waiting for a job to complete.
    #[error("timeout waiting for job {0}")]
    Timeout(String),

    /// Invalid number of shots.
    #[error("invalid shots: {0}")]
    InvalidShots(String),

    /// Serialization of a request or result failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for hardware boundary operations.
pub type HalResult<T> = Result<T, HalError>;
