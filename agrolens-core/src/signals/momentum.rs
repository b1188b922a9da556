//! Short-window price momentum.
//!
//! Compares the earliest and latest points of the trend series:
//! magnitude = (latest - earliest) / earliest * 100.

use crate::domain::{Momentum, MomentumResult, TrendPoint};

/// Classification band: magnitudes strictly above +2% are rising, strictly
/// below -2% falling. Exactly ±2% stays neutral.
pub const MOMENTUM_THRESHOLD_PCT: f64 = 2.0;

/// Compute momentum over a trend series.
///
/// Degrades gracefully: series of length 0 or 1, or an earliest price of
/// zero, yield a neutral result with zero magnitude — never an error.
pub fn compute_momentum(series: &[TrendPoint]) -> MomentumResult {
    let window_size = series.len();
    if window_size < 2 {
        return MomentumResult::neutral(window_size);
    }

    let earliest = series[0].price;
    let latest = series[window_size - 1].price;
    if earliest == 0.0 {
        return MomentumResult::neutral(window_size);
    }

    let magnitude_pct = (latest - earliest) / earliest * 100.0;
    let momentum = if magnitude_pct > MOMENTUM_THRESHOLD_PCT {
        Momentum::Rising
    } else if magnitude_pct < -MOMENTUM_THRESHOLD_PCT {
        Momentum::Falling
    } else {
        Momentum::Neutral
    };

    MomentumResult {
        momentum,
        magnitude_pct,
        window_size,
    }
}
