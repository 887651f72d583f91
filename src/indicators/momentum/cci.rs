//! CCI (Commodity Channel Index) indicator

use crate::common::math;

/// CCI = (tp - SMA(tp)) / (0.015 * MAD), where tp is the typical price and
/// MAD is the mean absolute deviation of tp from that SMA inside the
/// window. Zero deviation yields NaN.
pub fn calculate_cci(highs: &[f64], lows: &[f64], closes: &[f64], window: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if window == 0 || n < window {
        return out;
    }

    let tp: Vec<f64> = (0..n)
        .map(|i| math::typical_price(highs[i], lows[i], closes[i]))
        .collect();
    let tp_sma = math::rolling_mean(&tp, window);

    for i in (window - 1)..n {
        let mean = tp_sma[i];
        let mad = tp[i + 1 - window..=i]
            .iter()
            .map(|v| (v - mean).abs())
            .sum::<f64>()
            / window as f64;
        if mad > 0.0 {
            out[i] = (tp[i] - mean) / (0.015 * mad);
        }
    }

    out
}
