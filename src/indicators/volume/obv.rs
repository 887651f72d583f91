//! OBV (On-Balance Volume) indicator

/// Cumulative signed volume: add on an up close, subtract on a down close,
/// carry unchanged otherwise. Seeded at zero on the first bar.
pub fn calculate_obv(closes: &[f64], volumes: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; closes.len()];
    let mut running = 0.0;
    for i in 1..closes.len() {
        if closes[i] > closes[i - 1] {
            running += volumes[i];
        } else if closes[i] < closes[i - 1] {
            running -= volumes[i];
        }
        out[i] = running;
    }
    out
}
