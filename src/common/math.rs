//! NaN-aware rolling primitives.
//!
//! Indicator series are index-aligned with their source series; positions
//! inside an indicator's warm-up window hold `f64::NAN`. Every helper here
//! treats a NaN inside a rolling window as "no information" and yields NaN
//! for that position, so warm-up gaps propagate instead of turning into
//! zeros.

/// Rolling arithmetic mean over `window` values.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| w.iter().sum::<f64>() / w.len() as f64)
}

/// Rolling population standard deviation over `window` values.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| {
        let mean = w.iter().sum::<f64>() / w.len() as f64;
        let var = w.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / w.len() as f64;
        var.sqrt()
    })
}

/// Rolling maximum over `window` values.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| w.iter().cloned().fold(f64::MIN, f64::max))
}

/// Rolling minimum over `window` values.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |w| w.iter().cloned().fold(f64::MAX, f64::min))
}

fn rolling<F>(values: &[f64], window: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        if slice.iter().all(|v| v.is_finite()) {
            out[i] = f(slice);
        }
    }
    out
}

/// Exponential moving average with smoothing factor `2 / (window + 1)`,
/// seeded by the simple mean of the first `window` defined values.
///
/// A leading NaN prefix (e.g. a MACD line built from two EMAs) is skipped;
/// the seed window starts at the first defined index.
pub fn ema(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 {
        return out;
    }
    let start = match values.iter().position(|v| v.is_finite()) {
        Some(s) => s,
        None => return out,
    };
    if values.len() - start < window {
        return out;
    }
    let seed_end = start + window;
    let seed = values[start..seed_end].iter().sum::<f64>() / window as f64;
    let alpha = 2.0 / (window as f64 + 1.0);
    out[seed_end - 1] = seed;
    let mut prev = seed;
    for i in seed_end..values.len() {
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        out[i] = prev;
    }
    out
}

/// Wilder's smoothing: a seed mean over the first `window` values, then
/// `avg = (avg * (window - 1) + x) / window` for each following value.
///
/// `values` may carry a leading NaN prefix (true range starts at index 1).
pub fn wilder_smooth(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 {
        return out;
    }
    let start = match values.iter().position(|v| v.is_finite()) {
        Some(s) => s,
        None => return out,
    };
    if values.len() - start < window {
        return out;
    }
    let seed_end = start + window;
    let mut avg = values[start..seed_end].iter().sum::<f64>() / window as f64;
    out[seed_end - 1] = avg;
    for i in seed_end..values.len() {
        avg = (avg * (window as f64 - 1.0) + values[i]) / window as f64;
        out[i] = avg;
    }
    out
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Typical price of a bar.
pub fn typical_price(high: f64, low: f64, close: f64) -> f64 {
    (high + low + close) / 3.0
}

/// Value at `idx`, or NaN when the index is out of bounds.
pub fn at(values: &[f64], idx: usize) -> f64 {
    values.get(idx).copied().unwrap_or(f64::NAN)
}

/// Element-wise equality where two NaNs compare equal. Used by tests to
/// assert referential transparency of the indicator engine.
pub fn series_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
}
