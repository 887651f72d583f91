//! Donchian and Keltner channel bands

use crate::common::math;
use crate::indicators::volatility::atr::calculate_atr;

#[derive(Debug, Clone)]
pub struct ChannelSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Donchian channel: rolling max high / min low, middle is their mean.
pub fn calculate_donchian(highs: &[f64], lows: &[f64], window: usize) -> ChannelSeries {
    let upper = math::rolling_max(highs, window);
    let lower = math::rolling_min(lows, window);
    let middle = upper
        .iter()
        .zip(&lower)
        .map(|(u, l)| (u + l) / 2.0)
        .collect();
    ChannelSeries {
        upper,
        middle,
        lower,
    }
}

/// Keltner channel: EMA of the close, banded by an ATR multiple.
pub fn calculate_keltner(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    ema_window: usize,
    atr_window: usize,
    multiplier: f64,
) -> ChannelSeries {
    let middle = math::ema(closes, ema_window);
    let atr = calculate_atr(highs, lows, closes, atr_window);

    let upper = middle
        .iter()
        .zip(&atr)
        .map(|(m, a)| m + multiplier * a)
        .collect();
    let lower = middle
        .iter()
        .zip(&atr)
        .map(|(m, a)| m - multiplier * a)
        .collect();

    ChannelSeries {
        upper,
        middle,
        lower,
    }
}
