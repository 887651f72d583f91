//! Unit tests for volatility indicators

use marketpulse::indicators::volatility::{
    calculate_atr, calculate_bollinger_bands, calculate_donchian, calculate_keltner,
};

#[test]
fn atr_on_constant_range_bars_equals_the_range() {
    let closes = vec![100.0; 30];
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let atr = calculate_atr(&highs, &lows, &closes, 14);
    assert!(atr[13].is_nan());
    for v in atr.iter().skip(14) {
        assert!((v - 1.0).abs() < 1e-12);
    }
}

#[test]
fn atr_short_series_is_all_nan() {
    let closes = vec![100.0; 14];
    let atr = calculate_atr(&closes, &closes, &closes, 14);
    assert!(atr.iter().all(|v| v.is_nan()));
}

#[test]
fn bollinger_collapses_on_constant_series() {
    let closes = vec![50.0; 30];
    let bb = calculate_bollinger_bands(&closes, 20, 2.0);
    assert!(bb.middle[18].is_nan());
    assert_eq!(bb.middle[19], 50.0);
    assert_eq!(bb.upper[19], 50.0);
    assert_eq!(bb.lower[19], 50.0);
    // Zero band width leaves percent-b undefined, not zero.
    assert!(bb.percent_b[19].is_nan());
    assert_eq!(bb.width[19], 0.0);
}

#[test]
fn bollinger_brackets_the_close() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.8).sin() * 3.0).collect();
    let bb = calculate_bollinger_bands(&closes, 20, 2.0);
    for i in 19..closes.len() {
        assert!(bb.upper[i] >= bb.middle[i]);
        assert!(bb.middle[i] >= bb.lower[i]);
        assert!(bb.percent_b[i].is_finite());
    }
}

#[test]
fn donchian_tracks_rolling_extremes() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let channel = calculate_donchian(&highs, &lows, 20);
    assert!(channel.upper[18].is_nan());
    // On a steady rise, the channel top is the current bar's high.
    assert_eq!(channel.upper[25], highs[25]);
    assert_eq!(channel.lower[25], lows[6]);
    assert_eq!(channel.middle[25], (highs[25] + lows[6]) / 2.0);
}

#[test]
fn keltner_bands_straddle_the_middle() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.5).cos() * 2.0).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let channel = calculate_keltner(&highs, &lows, &closes, 20, 10, 2.0);
    assert!(channel.middle[18].is_nan());
    for i in 19..closes.len() {
        assert!(channel.upper[i] > channel.middle[i]);
        assert!(channel.lower[i] < channel.middle[i]);
    }
}
