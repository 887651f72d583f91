//! Strongly typed indicator schema.
//!
//! Every field is a `Vec<f64>` index-aligned one-to-one with the source
//! series; positions inside an indicator's warm-up window hold `f64::NAN`.
//! The fixed schema makes a missing indicator a compile-time error instead
//! of a silent map lookup miss.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendIndicators {
    pub sma_5: Vec<f64>,
    pub sma_10: Vec<f64>,
    pub sma_20: Vec<f64>,
    pub sma_50: Vec<f64>,
    pub sma_100: Vec<f64>,
    pub sma_200: Vec<f64>,
    pub ema_12: Vec<f64>,
    pub ema_26: Vec<f64>,
    pub ema_50: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub macd_histogram: Vec<f64>,
    pub bb_upper: Vec<f64>,
    pub bb_middle: Vec<f64>,
    pub bb_lower: Vec<f64>,
    pub bb_percent: Vec<f64>,
    pub bb_width: Vec<f64>,
    pub psar: Vec<f64>,
    pub ichimoku_a: Vec<f64>,
    pub ichimoku_b: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MomentumIndicators {
    pub rsi_14: Vec<f64>,
    pub rsi_21: Vec<f64>,
    pub stoch_k: Vec<f64>,
    pub stoch_d: Vec<f64>,
    pub williams_r: Vec<f64>,
    pub cci: Vec<f64>,
    pub roc: Vec<f64>,
    pub ultimate_oscillator: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VolatilityIndicators {
    pub atr: Vec<f64>,
    pub donchian_upper: Vec<f64>,
    pub donchian_middle: Vec<f64>,
    pub donchian_lower: Vec<f64>,
    pub keltner_upper: Vec<f64>,
    pub keltner_middle: Vec<f64>,
    pub keltner_lower: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VolumeIndicators {
    pub obv: Vec<f64>,
    pub mfi: Vec<f64>,
    pub vwap: Vec<f64>,
    pub ad_line: Vec<f64>,
    pub emv: Vec<f64>,
    pub volume_sma: Vec<f64>,
}

/// Full indicator battery for one series.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub trend: TrendIndicators,
    pub momentum: MomentumIndicators,
    pub volatility: VolatilityIndicators,
    pub volume: VolumeIndicators,
}
