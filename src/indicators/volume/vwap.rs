//! VWAP (Volume-Weighted Average Price) indicator

use crate::common::math;

/// Cumulative sum(typical price * volume) / cumulative volume. NaN while
/// the cumulative volume is still zero.
pub fn calculate_vwap(highs: &[f64], lows: &[f64], closes: &[f64], volumes: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    let mut cum_flow = 0.0;
    let mut cum_volume = 0.0;
    for i in 0..closes.len() {
        cum_flow += math::typical_price(highs[i], lows[i], closes[i]) * volumes[i];
        cum_volume += volumes[i];
        if cum_volume > 0.0 {
            out[i] = cum_flow / cum_volume;
        }
    }
    out
}
