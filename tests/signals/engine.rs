//! Unit tests for the signal engine over computed indicators

use chrono::DateTime;
use marketpulse::indicators::IndicatorEngine;
use marketpulse::models::candle::{Candle, Series};
use marketpulse::models::granularity::Granularity;
use marketpulse::signals::SignalEngine;

fn series_from_closes(closes: &[f64]) -> Series {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            Candle::new(
                DateTime::from_timestamp(i as i64 * 3_600, 0).unwrap(),
                close - 0.1,
                close + 0.5,
                close - 0.5,
                *close,
                1000.0,
            )
        })
        .collect();
    Series::new("BTCUSDT", Granularity::Hour1, bars)
}

#[test]
fn too_short_a_history_triggers_no_rules() {
    let series = series_from_closes(&(0..10).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
    let indicators = IndicatorEngine::compute(&series);
    let report = SignalEngine::evaluate(&series, &indicators);
    assert!(report.is_empty());
    assert_eq!(report.score, 0);
}

#[test]
fn sustained_uptrend_reads_bullish_on_trend_and_bearish_on_oscillators() {
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    let indicators = IndicatorEngine::compute(&series);
    let report = SignalEngine::evaluate(&series, &indicators);

    assert!(report.buy_labels().contains(&"价格高于主要均线"));
    // RSI pins at 100 on a monotonic rise.
    assert!(report.sell_labels().contains(&"RSI超买 (100.0)"));
    assert!(!report.is_empty());
}

#[test]
fn single_bar_series_evaluates_without_panicking() {
    let series = series_from_closes(&[100.0]);
    let indicators = IndicatorEngine::compute(&series);
    let report = SignalEngine::evaluate(&series, &indicators);
    assert!(report.is_empty());
    assert_eq!(report.score, 0);
}

#[test]
fn score_is_the_sum_of_triggered_weights() {
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    let indicators = IndicatorEngine::compute(&series);
    let report = SignalEngine::evaluate(&series, &indicators);

    let expected: i32 = report
        .buy
        .iter()
        .chain(&report.sell)
        .chain(&report.neutral)
        .map(|s| s.weight)
        .sum();
    assert_eq!(report.score, expected);
}
