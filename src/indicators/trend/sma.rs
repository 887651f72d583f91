//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Arithmetic mean of the last `window` closes, aligned with the source;
/// the first `window - 1` positions are NaN.
pub fn calculate_sma(closes: &[f64], window: usize) -> Vec<f64> {
    math::rolling_mean(closes, window)
}
