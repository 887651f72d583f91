//! Williams %R indicator

use crate::common::math;

/// %R = (highest high - close) / (highest high - lowest low) * -100 over
/// the window. Ranges from 0 (at the high) to -100 (at the low); a flat
/// window yields NaN.
pub fn calculate_williams_r(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    window: usize,
) -> Vec<f64> {
    let highest = math::rolling_max(highs, window);
    let lowest = math::rolling_min(lows, window);

    closes
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(close, (hh, ll))| {
            let range = hh - ll;
            if range == 0.0 {
                f64::NAN
            } else {
                (hh - close) / range * -100.0
            }
        })
        .collect()
}
