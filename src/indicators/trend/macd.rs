//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;

/// MACD line, signal line and histogram, index-aligned with the closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// MACD = EMA12 - EMA26; signal = EMA9 of MACD; histogram = MACD - signal.
pub fn calculate_macd(closes: &[f64]) -> MacdSeries {
    let ema_12 = math::ema(closes, 12);
    let ema_26 = math::ema(closes, 26);

    let macd: Vec<f64> = ema_12
        .iter()
        .zip(&ema_26)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal = math::ema(&macd, 9);
    let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
