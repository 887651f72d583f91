//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Exponential moving average with smoothing factor `2 / (window + 1)`,
/// seeded by the SMA of the first `window` values. Defined from index
/// `window - 1`.
pub fn calculate_ema(closes: &[f64], window: usize) -> Vec<f64> {
    math::ema(closes, window)
}
