//! Stochastic oscillator (%K / %D)

use crate::common::math;

#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

/// %K = (close - lowest low) / (highest high - lowest low) * 100 over the
/// lookback window; %D = SMA of %K over `smooth`. A flat window (highest
/// high equals lowest low) yields NaN.
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    window: usize,
    smooth: usize,
) -> StochasticSeries {
    let highest = math::rolling_max(highs, window);
    let lowest = math::rolling_min(lows, window);

    let k: Vec<f64> = closes
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(close, (hh, ll))| {
            let range = hh - ll;
            if range == 0.0 {
                f64::NAN
            } else {
                (close - ll) / range * 100.0
            }
        })
        .collect();
    let d = math::rolling_mean(&k, smooth);

    StochasticSeries { k, d }
}
