use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::percentile::RANK_COUNT;

/// One entry of the percentile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentile {
    pub rank: u8,
    pub value: Duration,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub requests: u64,
    pub slowest: Duration,
    pub fastest: Duration,
    /// Truncated to whole nanoseconds.
    pub average: Duration,
    /// Measured from accumulator construction to the `finalize` call.
    pub requests_per_sec: f64,
    pub codes: BTreeMap<i32, u64>,
    pub percentiles: [Percentile; RANK_COUNT],
}

impl Report {
    /// Value reported for `rank`, if it is one of the reported ranks.
    pub fn percentile(&self, rank: u8) -> Option<Duration> {
        self.percentiles.iter().find(|p| p.rank == rank).map(|p| p.value)
    }
}
