//! Ichimoku cloud spans
//!
//! Span A = midpoint of the conversion (9) and base (26) midlines; span B =
//! the 52-bar midline. Unshifted: each value is aligned with the bar it was
//! computed from.

use crate::common::math;

#[derive(Debug, Clone)]
pub struct IchimokuSeries {
    pub span_a: Vec<f64>,
    pub span_b: Vec<f64>,
}

pub fn calculate_ichimoku(
    highs: &[f64],
    lows: &[f64],
    conversion_window: usize,
    base_window: usize,
    span_b_window: usize,
) -> IchimokuSeries {
    let conversion = midline(highs, lows, conversion_window);
    let base = midline(highs, lows, base_window);

    let span_a = conversion
        .iter()
        .zip(&base)
        .map(|(c, b)| (c + b) / 2.0)
        .collect();
    let span_b = midline(highs, lows, span_b_window);

    IchimokuSeries { span_a, span_b }
}

/// Midpoint of the rolling high/low range.
fn midline(highs: &[f64], lows: &[f64], window: usize) -> Vec<f64> {
    math::rolling_max(highs, window)
        .iter()
        .zip(&math::rolling_min(lows, window))
        .map(|(hh, ll)| (hh + ll) / 2.0)
        .collect()
}
