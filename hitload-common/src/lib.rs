use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Outcome code recorded when a request never produced an HTTP response
/// (connect failure, timeout, reset).
pub const TRANSPORT_ERROR_CODE: i32 = -1;

/// One observed operation: how long it took and how it concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub duration: Duration,
    pub code: i32,
}

impl Sample {
    pub fn new(duration: Duration, code: i32) -> Self {
        Self { duration, code }
    }

    /// `true` for server errors (5xx) and transport failures.
    pub fn is_error(&self) -> bool {
        is_error_code(self.code)
    }
}

/// `true` if `code` counts against the run's error rate.
pub fn is_error_code(code: i32) -> bool {
    code == TRANSPORT_ERROR_CODE || code >= 500
}

/// Failure of the nearest-rank percentile routine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PercentileError {
    #[error("input is empty")]
    EmptyInput,

    #[error("percentile {0} is outside [0, 100]")]
    OutOfBounds(f64),
}

/// Error types for statistics finalization
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("finalize called on an empty accumulator")]
    EmptyAccumulator,

    #[error("percentiles: {0}")]
    Percentile(#[from] PercentileError),
}

/// Error types for a single probe request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Result type for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
