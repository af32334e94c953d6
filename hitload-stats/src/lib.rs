//! Streaming latency statistics for a single load-test run.
//!
//! An [`Accumulator`] ingests [`Sample`]s one at a time and produces a
//! [`Report`] on [`Accumulator::finalize`]. It has no internal locking; feed it
//! from one task.

pub mod accumulator;
pub mod percentile;
pub mod report;

pub use accumulator::Accumulator;
pub use hitload_common::{PercentileError, Sample, StatsError};
pub use percentile::{percentile_nearest_rank, PERCENTILE_RANKS, RANK_COUNT};
pub use report::{Percentile, Report};
