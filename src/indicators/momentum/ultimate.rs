//! Ultimate Oscillator
//!
//! Weighted blend of buying pressure over three lookback windows, bounded
//! to [0, 100].

use crate::common::math;

/// UO = 100 · (4·avg_s + 2·avg_m + avg_l) / 7, where each avg is the ratio
/// of rolling buying-pressure and true-range sums over its window. The
/// first bar has no previous close, so its own range stands in. Defined
/// from index `long - 1`; a zero range sum yields NaN.
pub fn calculate_ultimate_oscillator(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    short: usize,
    medium: usize,
    long: usize,
) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if n == 0 {
        return out;
    }

    let mut bp = vec![0.0; n];
    let mut tr = vec![0.0; n];
    bp[0] = closes[0] - lows[0];
    tr[0] = highs[0] - lows[0];
    for i in 1..n {
        let floor = lows[i].min(closes[i - 1]);
        bp[i] = closes[i] - floor;
        tr[i] = highs[i].max(closes[i - 1]) - floor;
    }

    let avg_short = pressure_ratio(&bp, &tr, short);
    let avg_medium = pressure_ratio(&bp, &tr, medium);
    let avg_long = pressure_ratio(&bp, &tr, long);

    for i in 0..n {
        let (s, m, l) = (avg_short[i], avg_medium[i], avg_long[i]);
        if s.is_finite() && m.is_finite() && l.is_finite() {
            out[i] = 100.0 * (4.0 * s + 2.0 * m + l) / 7.0;
        }
    }
    out
}

fn pressure_ratio(bp: &[f64], tr: &[f64], window: usize) -> Vec<f64> {
    let bp_sum = rolling_sum(bp, window);
    bp_sum
        .iter()
        .zip(&rolling_sum(tr, window))
        .map(|(b, t)| if *t > 0.0 { b / t } else { f64::NAN })
        .collect()
}

fn rolling_sum(values: &[f64], window: usize) -> Vec<f64> {
    math::rolling_mean(values, window)
        .iter()
        .map(|m| m * window as f64)
        .collect()
}
