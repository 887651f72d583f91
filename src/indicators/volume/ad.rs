//! A/D (Accumulation/Distribution) line

/// Cumulative close-location-weighted volume: clv = ((close − low) −
/// (high − close)) / (high − low), times volume, summed. A flat bar
/// contributes zero.
pub fn calculate_ad_line(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    volumes: &[f64],
) -> Vec<f64> {
    let mut out = vec![0.0; closes.len()];
    let mut running = 0.0;
    for i in 0..closes.len() {
        let range = highs[i] - lows[i];
        if range > 0.0 {
            let clv = ((closes[i] - lows[i]) - (highs[i] - closes[i])) / range;
            running += clv * volumes[i];
        }
        out[i] = running;
    }
    out
}
