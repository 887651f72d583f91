//! ATR (Average True Range) indicator

use crate::common::math;

/// Wilder-smoothed average of the true range. The true range needs a
/// previous close, so it starts at index 1 and the ATR is defined from
/// index `window`.
pub fn calculate_atr(highs: &[f64], lows: &[f64], closes: &[f64], window: usize) -> Vec<f64> {
    let n = closes.len();
    let mut tr = vec![f64::NAN; n];
    for i in 1..n {
        tr[i] = math::true_range(highs[i], lows[i], closes[i - 1]);
    }
    math::wilder_smooth(&tr, window)
}
