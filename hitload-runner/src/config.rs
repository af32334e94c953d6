use std::time::{Duration, Instant};

/// Worker tasks issuing requests in parallel.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Run length used when neither a duration nor a request budget is given (seconds).
pub const DEFAULT_DURATION_SECS: u64 = 10;

/// Per-request timeout (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Samples buffered between the workers and the accumulator task.
pub const SAMPLE_CHANNEL_CAPACITY: usize = 1_024;

/// Validated parameters of one load-test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub concurrency: usize,
    /// Stop issuing requests once this much time has passed.
    pub duration: Option<Duration>,
    /// Stop issuing requests once this many have been started.
    pub requests: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            duration: Some(Duration::from_secs(DEFAULT_DURATION_SECS)),
            requests: None,
        }
    }
}

impl RunConfig {
    /// Reject configurations that would never start or never stop.
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency == 0 {
            return Err("concurrency must be at least 1".to_string());
        }
        match (self.duration, self.requests) {
            (None, None) => Err("either a duration or a request budget is required".to_string()),
            (Some(d), _) if d.is_zero() => Err("duration must be greater than zero".to_string()),
            (Some(d), _) if Instant::now().checked_add(d).is_none() => {
                Err(format!("duration of {}s is too large", d.as_secs()))
            }
            (_, Some(0)) => Err("request budget must be greater than zero".to_string()),
            _ => Ok(()),
        }
    }
}
