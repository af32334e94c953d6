use hitload_common::{PercentileError, Result, Sample, StatsError};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::percentile::{percentile_nearest_rank, PERCENTILE_RANKS, RANK_COUNT};
use crate::report::{Percentile, Report};

/// Running aggregates over every sample added during one run.
///
/// Not synchronized: concurrent producers must funnel their samples through a
/// single owner (the runner uses an mpsc channel for this).
#[derive(Debug, Clone)]
pub struct Accumulator {
    count: u64,
    /// Sum of all sample durations in nanoseconds. Exact until it saturates
    /// at `u128::MAX`, which takes about 10^10 samples of `Duration::MAX`.
    total_ns: u128,
    min: Duration,
    max: Duration,
    start: Instant,
    codes: BTreeMap<i32, u64>,
    /// Every duration in insertion order (unsorted).
    samples: Vec<Duration>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Create an empty accumulator; throughput is measured from this instant.
    pub fn new() -> Self {
        Self::with_start(Instant::now())
    }

    /// Create an empty accumulator whose throughput clock started at `start`.
    pub fn with_start(start: Instant) -> Self {
        Self {
            count: 0,
            total_ns: 0,
            min: Duration::MAX,
            max: Duration::ZERO,
            start,
            codes: BTreeMap::new(),
            samples: Vec::new(),
        }
    }

    /// Record one sample.
    pub fn add(&mut self, sample: Sample) {
        self.count += 1;
        self.total_ns = self.total_ns.saturating_add(sample.duration.as_nanos());
        self.max = self.max.max(sample.duration);
        self.min = self.min.min(sample.duration);
        *self.codes.entry(sample.code).or_insert(0) += 1;
        self.samples.push(sample.duration);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Summarize everything added so far.
    ///
    /// Fails with [`StatsError::EmptyAccumulator`] when nothing was added, and
    /// also when every sample had zero duration. Leaves the accumulator
    /// untouched, so calling it twice yields the same report apart from
    /// `requests_per_sec`, which is 0 if no measurable time has passed since
    /// the start instant.
    pub fn finalize(&self) -> Result<Report> {
        if self.count == 0 || self.total_ns == 0 {
            return Err(StatsError::EmptyAccumulator);
        }

        let percentiles = self.percentiles()?;
        let elapsed_secs = self.start.elapsed().as_secs_f64();
        let requests_per_sec = if elapsed_secs > 0.0 {
            self.count as f64 / elapsed_secs
        } else {
            0.0
        };

        Ok(Report {
            requests: self.count,
            slowest: self.max,
            fastest: self.min,
            average: nanos_to_duration(self.total_ns / u128::from(self.count)),
            requests_per_sec,
            codes: self.codes.clone(),
            percentiles,
        })
    }

    fn percentiles(&self) -> std::result::Result<[Percentile; RANK_COUNT], PercentileError> {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let mut out = [Percentile { rank: 0, value: Duration::ZERO }; RANK_COUNT];
        for (slot, &rank) in out.iter_mut().zip(PERCENTILE_RANKS.iter()) {
            *slot = Percentile {
                rank,
                value: percentile_nearest_rank(&sorted, f64::from(rank))?,
            };
        }
        Ok(out)
    }
}


/// The mean never exceeds the slowest sample, so it always fits in a `Duration`.
fn nanos_to_duration(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
