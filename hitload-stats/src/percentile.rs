use hitload_common::PercentileError;
use std::time::Duration;

/// Number of entries in every report's percentile table.
pub const RANK_COUNT: usize = 6;

/// Ranks reported by every finalized run, in report order.
pub const PERCENTILE_RANKS: [u8; RANK_COUNT] = [10, 25, 50, 75, 90, 95];

/// Nearest-rank percentile of an ascending-sorted slice.
///
/// The 1-based rank is `ceil(p * n / 100)`, clamped to `[1, n]`; the result is
/// always an observed sample, never an interpolation between two.
pub fn percentile_nearest_rank(sorted: &[Duration], p: f64) -> Result<Duration, PercentileError> {
    if sorted.is_empty() {
        return Err(PercentileError::EmptyInput);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(PercentileError::OutOfBounds(p));
    }

    let n = sorted.len();
    let rank = ((n as f64 * p) / 100.0).ceil() as usize;
    Ok(sorted[rank.clamp(1, n) - 1])
}
