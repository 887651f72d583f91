//! Parabolic SAR indicator
//!
//! Trailing stop that accelerates toward price while a trend holds and
//! flips to the opposite extreme on reversal. The up and down series carry
//! the stop only while the respective trend is active, NaN otherwise.

/// Trend-split parabolic SAR values.
#[derive(Debug, Clone)]
pub struct PsarSeries {
    pub up: Vec<f64>,
    pub down: Vec<f64>,
}

/// Parabolic SAR with acceleration `step` (capped at `max_step`).
///
/// Needs the two previous bars, so both series start at index 2. The
/// initial trend is assumed up, seeded from the first bar's extremes.
pub fn calculate_psar(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    step: f64,
    max_step: f64,
) -> PsarSeries {
    let n = closes.len();
    let mut up = vec![f64::NAN; n];
    let mut down = vec![f64::NAN; n];
    if n < 3 {
        return PsarSeries { up, down };
    }

    let mut up_trend = true;
    let mut af = step;
    let mut up_trend_high = highs[0];
    let mut down_trend_low = lows[0];
    let mut prev = closes[1];

    for i in 2..n {
        let reversal;
        let mut psar;
        if up_trend {
            psar = prev + af * (up_trend_high - prev);
            if lows[i] < psar {
                reversal = true;
                psar = up_trend_high;
                down_trend_low = lows[i];
                af = step;
            } else {
                reversal = false;
                if highs[i] > up_trend_high {
                    up_trend_high = highs[i];
                    af = (af + step).min(max_step);
                }
                // The stop may never sit inside the last two bars' range.
                if lows[i - 2] < psar {
                    psar = lows[i - 2];
                } else if lows[i - 1] < psar {
                    psar = lows[i - 1];
                }
            }
        } else {
            psar = prev - af * (prev - down_trend_low);
            if highs[i] > psar {
                reversal = true;
                psar = down_trend_low;
                up_trend_high = highs[i];
                af = step;
            } else {
                reversal = false;
                if lows[i] < down_trend_low {
                    down_trend_low = lows[i];
                    af = (af + step).min(max_step);
                }
                if highs[i - 2] > psar {
                    psar = highs[i - 2];
                } else if highs[i - 1] > psar {
                    psar = highs[i - 1];
                }
            }
        }
        up_trend = up_trend != reversal;
        if up_trend {
            up[i] = psar;
        } else {
            down[i] = psar;
        }
        prev = psar;
    }

    PsarSeries { up, down }
}
