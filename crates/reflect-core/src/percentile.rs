//! 95th-percentile estimator for test durations.
//!
//! Two interpolation rules apply depending on sample size:
//!
//! - **20 or more samples**: the exclusive 20-quantile method. The sorted
//!   data is cut at 19 interior boundaries and boundary 19 (index 18) is
//!   returned. For `n` samples boundary `i` sits at rank `i·(n+1)/20`
//!   (1-based) and is linearly interpolated between its neighbours.
//! - **2 to 19 samples**: linear interpolation at 0-based rank
//!   `0.95·(n−1)` between the two nearest order statistics.
//!
//! Both paths are evaluated as exact rationals and truncated toward zero, so
//! the result never depends on floating-point rounding. Empty input yields
//! `0`, a single sample yields itself.

/// Number of quantile bins used for the large-sample path.
pub const QUANTILE_BINS: i128 = 20;

/// Sample count at which the 20-quantile method takes over.
pub const QUANTILE_MIN_SAMPLES: usize = 20;

/// Zero-based index of the 95th-percentile boundary among the 19 interior
/// boundaries.
const P95_BOUNDARY: i128 = 18;

/// 95th-percentile of `durations`, truncated toward zero.
pub fn p95(durations: &[i64]) -> i64 {
    match durations {
        [] => 0,
        [only] => *only,
        _ => {
            let mut sorted = durations.to_vec();
            sorted.sort_unstable();
            if sorted.len() >= QUANTILE_MIN_SAMPLES {
                exclusive_quantile_boundary(&sorted, P95_BOUNDARY + 1)
            } else {
                interpolate_rank(&sorted)
            }
        }
    }
}

/// Boundary `i` (1-based, `1..QUANTILE_BINS`) of the exclusive quantile
/// method over `sorted`, which must hold at least two values.
fn exclusive_quantile_boundary(sorted: &[i64], i: i128) -> i64 {
    let len = sorted.len() as i128;
    let m = len + 1;
    let j = (i * m / QUANTILE_BINS).clamp(1, len - 1);
    let delta = i * m - j * QUANTILE_BINS;
    let below = i128::from(sorted[(j - 1) as usize]);
    let above = i128::from(sorted[j as usize]);
    let numerator = below * (QUANTILE_BINS - delta) + above * delta;
    (numerator / QUANTILE_BINS) as i64
}

/// `sorted[lo] + (sorted[hi] − sorted[lo])·frac` at rank `19·(n−1)/20`.
fn interpolate_rank(sorted: &[i64]) -> i64 {
    let last = sorted.len() - 1;
    let scaled = 19 * last;
    let lo = scaled / 20;
    let hi = (lo + 1).min(last);
    let remainder = (scaled % 20) as i128;

    let low = i128::from(sorted[lo]);
    let high = i128::from(sorted[hi]);
    (low + (high - low) * remainder / QUANTILE_BINS) as i64
}
