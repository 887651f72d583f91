//! MFI (Money Flow Index) indicator
//!
//! A volume-weighted RSI analogue over typical-price money flow.

use crate::common::math;

/// MFI = 100 - 100 / (1 + positive flow / negative flow) over the window.
/// Defined from index `window`; zero negative flow saturates at 100.
pub fn calculate_mfi(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    volumes: &[f64],
    window: usize,
) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if window == 0 || n < window + 1 {
        return out;
    }

    let tp: Vec<f64> = (0..n)
        .map(|i| math::typical_price(highs[i], lows[i], closes[i]))
        .collect();

    // Signed money flow, defined from index 1.
    let mut positive = vec![0.0; n];
    let mut negative = vec![0.0; n];
    for i in 1..n {
        let flow = tp[i] * volumes[i];
        if tp[i] > tp[i - 1] {
            positive[i] = flow;
        } else if tp[i] < tp[i - 1] {
            negative[i] = flow;
        }
    }

    for i in window..n {
        let pos: f64 = positive[i + 1 - window..=i].iter().sum();
        let neg: f64 = negative[i + 1 - window..=i].iter().sum();
        out[i] = if neg == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + pos / neg)
        };
    }

    out
}
