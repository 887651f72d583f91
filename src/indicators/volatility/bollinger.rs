//! Bollinger Bands indicator
//!
//! Middle = SMA(window); upper/lower = middle +/- k * rolling stddev;
//! percent-b locates the close within the band, width is the normalized
//! band spread.

use crate::common::math;

#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
    pub percent_b: Vec<f64>,
    pub width: Vec<f64>,
}

pub fn calculate_bollinger_bands(closes: &[f64], window: usize, k: f64) -> BollingerSeries {
    let middle = math::rolling_mean(closes, window);
    let std = math::rolling_std(closes, window);

    let n = closes.len();
    let mut upper = vec![f64::NAN; n];
    let mut lower = vec![f64::NAN; n];
    let mut percent_b = vec![f64::NAN; n];
    let mut width = vec![f64::NAN; n];

    for i in 0..n {
        if !middle[i].is_finite() || !std[i].is_finite() {
            continue;
        }
        upper[i] = middle[i] + k * std[i];
        lower[i] = middle[i] - k * std[i];
        let band = upper[i] - lower[i];
        if band > 0.0 {
            percent_b[i] = (closes[i] - lower[i]) / band;
        }
        if middle[i] != 0.0 {
            width[i] = band / middle[i];
        }
    }

    BollingerSeries {
        upper,
        middle,
        lower,
        percent_b,
        width,
    }
}
