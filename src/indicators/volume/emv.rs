//! EMV (Ease of Movement) indicator

/// Scale factor keeping typical crypto/equity readings in a workable range.
const EMV_SCALE: f64 = 100_000_000.0;

/// Raw (unsmoothed) ease of movement: midpoint displacement times bar range
/// over volume. Needs the previous bar, so index 0 is NaN; zero volume
/// yields NaN.
pub fn calculate_emv(highs: &[f64], lows: &[f64], volumes: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; highs.len()];
    for i in 1..highs.len() {
        if volumes[i] <= 0.0 {
            continue;
        }
        let displacement = (highs[i] - highs[i - 1]) + (lows[i] - lows[i - 1]);
        out[i] = displacement * (highs[i] - lows[i]) / (2.0 * volumes[i]) * EMV_SCALE;
    }
    out
}
