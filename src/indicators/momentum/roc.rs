//! ROC (Rate of Change) indicator

/// Percent change against the close `window` bars back. Defined from index
/// `window`; a zero reference close yields NaN.
pub fn calculate_roc(closes: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; closes.len()];
    if window == 0 {
        return out;
    }
    for i in window..closes.len() {
        let reference = closes[i - window];
        if reference != 0.0 {
            out[i] = (closes[i] - reference) / reference * 100.0;
        }
    }
    out
}
