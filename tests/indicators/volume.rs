//! Unit tests for volume indicators

use marketpulse::indicators::volume::{
    calculate_ad_line, calculate_emv, calculate_mfi, calculate_obv, calculate_vwap,
};

#[test]
fn obv_accumulates_signed_volume() {
    let closes = [1.0, 2.0, 2.0, 1.0, 3.0];
    let volumes = [10.0, 10.0, 10.0, 10.0, 10.0];
    let obv = calculate_obv(&closes, &volumes);
    assert_eq!(obv, vec![0.0, 10.0, 10.0, 0.0, 10.0]);
}

#[test]
fn mfi_saturates_at_100_when_all_flow_is_positive() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let volumes = vec![1000.0; closes.len()];
    let mfi = calculate_mfi(&highs, &lows, &closes, &volumes, 14);
    assert!(mfi[13].is_nan());
    for v in mfi.iter().skip(14) {
        assert_eq!(*v, 100.0);
    }
}

#[test]
fn mfi_stays_within_bounds_on_mixed_series() {
    let closes: Vec<f64> = (0..40)
        .map(|i| 100.0 + (i as f64 * 1.3).sin() * 4.0)
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let volumes: Vec<f64> = (0..40).map(|i| 500.0 + i as f64).collect();
    for v in calculate_mfi(&highs, &lows, &closes, &volumes, 14)
        .iter()
        .filter(|v| v.is_finite())
    {
        assert!((0.0..=100.0).contains(v));
    }
}

#[test]
fn vwap_on_constant_price_equals_typical_price() {
    let closes = vec![100.0; 10];
    let highs: Vec<f64> = closes.iter().map(|c| c + 3.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 3.0).collect();
    let volumes = vec![250.0; 10];
    let vwap = calculate_vwap(&highs, &lows, &closes, &volumes);
    for v in &vwap {
        assert!((v - 100.0).abs() < 1e-12);
    }
}

#[test]
fn vwap_undefined_while_volume_is_zero() {
    let closes = [10.0, 10.0, 10.0];
    let volumes = [0.0, 0.0, 5.0];
    let vwap = calculate_vwap(&closes, &closes, &closes, &volumes);
    assert!(vwap[0].is_nan());
    assert!(vwap[1].is_nan());
    assert_eq!(vwap[2], 10.0);
}

#[test]
fn ad_line_accumulates_full_volume_when_closing_on_the_high() {
    let closes = [10.0, 11.0, 12.0];
    let highs = closes;
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let volumes = [100.0, 200.0, 300.0];
    let ad = calculate_ad_line(&highs, &lows, &closes, &volumes);
    assert_eq!(ad, vec![100.0, 300.0, 600.0]);
}

#[test]
fn ad_line_carries_through_flat_bars() {
    // A bar with no range contributes nothing but keeps the running total.
    let closes = [10.0, 10.0, 11.0];
    let highs = [10.0, 10.0, 11.0];
    let lows = [9.0, 10.0, 10.0];
    let volumes = [50.0, 999.0, 50.0];
    let ad = calculate_ad_line(&highs, &lows, &closes, &volumes);
    assert_eq!(ad[0], 50.0);
    assert_eq!(ad[1], 50.0);
    assert_eq!(ad[2], 100.0);
}

#[test]
fn emv_is_zero_when_the_range_does_not_move() {
    let highs = vec![11.0; 10];
    let lows = vec![9.0; 10];
    let volumes = vec![500.0; 10];
    let emv = calculate_emv(&highs, &lows, &volumes);
    assert!(emv[0].is_nan());
    for v in emv.iter().skip(1) {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn emv_signs_follow_the_midpoint_displacement() {
    let highs = [11.0, 12.0, 10.5];
    let lows = [9.0, 10.0, 8.5];
    let volumes = [500.0, 500.0, 0.0];
    let emv = calculate_emv(&highs, &lows, &volumes);
    // Midpoint up by 1, range 2: (1 + 1) * 2 / (2 * 500) * 1e8.
    assert!((emv[1] - 400_000.0).abs() < 1e-6);
    // Zero volume leaves the reading undefined.
    assert!(emv[2].is_nan());
}
