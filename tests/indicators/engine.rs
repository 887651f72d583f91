//! Unit tests for the indicator engine

use chrono::DateTime;
use marketpulse::common::math::series_eq;
use marketpulse::indicators::IndicatorEngine;
use marketpulse::models::candle::{Candle, Series};
use marketpulse::models::granularity::Granularity;
use marketpulse::models::indicators::IndicatorSet;

fn test_series(count: usize) -> Series {
    let bars = (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1;
            Candle::new(
                DateTime::from_timestamp(i as i64 * 86_400, 0).unwrap(),
                base,
                base + 0.6,
                base - 0.4,
                base + 0.2,
                1000.0 + (i as f64 * 37.0) % 500.0,
            )
        })
        .collect();
    Series::new("BTCUSDT", Granularity::Day1, bars)
}

fn all_series(set: &IndicatorSet) -> Vec<(&'static str, &[f64])> {
    vec![
        ("sma_5", &set.trend.sma_5),
        ("sma_10", &set.trend.sma_10),
        ("sma_20", &set.trend.sma_20),
        ("sma_50", &set.trend.sma_50),
        ("sma_100", &set.trend.sma_100),
        ("sma_200", &set.trend.sma_200),
        ("ema_12", &set.trend.ema_12),
        ("ema_26", &set.trend.ema_26),
        ("ema_50", &set.trend.ema_50),
        ("macd", &set.trend.macd),
        ("macd_signal", &set.trend.macd_signal),
        ("macd_histogram", &set.trend.macd_histogram),
        ("bb_upper", &set.trend.bb_upper),
        ("bb_middle", &set.trend.bb_middle),
        ("bb_lower", &set.trend.bb_lower),
        ("bb_percent", &set.trend.bb_percent),
        ("bb_width", &set.trend.bb_width),
        ("psar", &set.trend.psar),
        ("ichimoku_a", &set.trend.ichimoku_a),
        ("ichimoku_b", &set.trend.ichimoku_b),
        ("rsi_14", &set.momentum.rsi_14),
        ("rsi_21", &set.momentum.rsi_21),
        ("stoch_k", &set.momentum.stoch_k),
        ("stoch_d", &set.momentum.stoch_d),
        ("williams_r", &set.momentum.williams_r),
        ("cci", &set.momentum.cci),
        ("roc", &set.momentum.roc),
        ("ultimate_oscillator", &set.momentum.ultimate_oscillator),
        ("atr", &set.volatility.atr),
        ("donchian_upper", &set.volatility.donchian_upper),
        ("donchian_middle", &set.volatility.donchian_middle),
        ("donchian_lower", &set.volatility.donchian_lower),
        ("keltner_upper", &set.volatility.keltner_upper),
        ("keltner_middle", &set.volatility.keltner_middle),
        ("keltner_lower", &set.volatility.keltner_lower),
        ("obv", &set.volume.obv),
        ("mfi", &set.volume.mfi),
        ("vwap", &set.volume.vwap),
        ("ad_line", &set.volume.ad_line),
        ("emv", &set.volume.emv),
        ("volume_sma", &set.volume.volume_sma),
    ]
    .into_iter()
    .map(|(name, v)| (name, v.as_slice()))
    .collect()
}

#[test]
fn every_indicator_is_aligned_with_the_source_series() {
    let series = test_series(120);
    let set = IndicatorEngine::compute(&series);
    for (name, values) in all_series(&set) {
        assert_eq!(values.len(), series.len(), "{name} length mismatch");
    }
}

#[test]
fn compute_is_referentially_transparent() {
    let series = test_series(250);
    let a = IndicatorEngine::compute(&series);
    let b = IndicatorEngine::compute(&series);
    for ((name, left), (_, right)) in all_series(&a).into_iter().zip(all_series(&b)) {
        assert!(series_eq(left, right), "{name} differs between runs");
    }
}

#[test]
fn warm_up_positions_are_nan_not_zero() {
    let series = test_series(60);
    let set = IndicatorEngine::compute(&series);
    assert!(set.trend.sma_20[18].is_nan());
    assert!(set.trend.sma_20[19].is_finite());
    assert!(set.momentum.rsi_14[13].is_nan());
    assert!(set.momentum.rsi_14[14].is_finite());
    assert!(set.trend.macd_signal[32].is_nan());
    assert!(set.trend.macd_signal[33].is_finite());
    assert!(set.trend.ichimoku_a[24].is_nan());
    assert!(set.trend.ichimoku_a[25].is_finite());
    assert!(set.trend.ichimoku_b[50].is_nan());
    assert!(set.trend.ichimoku_b[51].is_finite());
    assert!(set.momentum.roc[9].is_nan());
    assert!(set.momentum.roc[10].is_finite());
    assert!(set.momentum.ultimate_oscillator[26].is_nan());
    assert!(set.momentum.ultimate_oscillator[27].is_finite());
    assert!(set.volume.volume_sma[18].is_nan());
    assert!(set.volume.volume_sma[19].is_finite());
    // Windows longer than the series stay undefined throughout.
    assert!(set.trend.sma_100.iter().all(|v| v.is_nan()));
    assert!(set.trend.sma_200.iter().all(|v| v.is_nan()));
}

#[test]
fn short_series_yields_a_fully_undefined_battery() {
    let series = test_series(3);
    let set = IndicatorEngine::compute(&series);
    assert!(set.momentum.rsi_14.iter().all(|v| v.is_nan()));
    assert!(set.trend.macd.iter().all(|v| v.is_nan()));
    assert!(set.trend.bb_percent.iter().all(|v| v.is_nan()));
}
