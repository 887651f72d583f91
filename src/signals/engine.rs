//! Scores the latest indicator snapshot into a categorized signal report.

use crate::common::math::at;
use crate::models::candle::Series;
use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalReport;

use super::rules::{apply_all, RuleInputs};

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate the rule table at the series' last index.
    ///
    /// Crossover rules compare against the second-to-last index; a
    /// single-bar series uses the last index for both. Never fails: rules
    /// whose inputs are undefined are skipped, and an empty series yields
    /// an empty report with score 0.
    pub fn evaluate(series: &Series, indicators: &IndicatorSet) -> SignalReport {
        let mut report = SignalReport::new();
        if series.is_empty() {
            return report;
        }
        let last = series.len() - 1;
        let prev = last.saturating_sub(1);

        let inputs = RuleInputs {
            close: series.bars()[last].close,
            rsi_14: at(&indicators.momentum.rsi_14, last),
            macd: at(&indicators.trend.macd, last),
            macd_signal: at(&indicators.trend.macd_signal, last),
            macd_prev: at(&indicators.trend.macd, prev),
            macd_signal_prev: at(&indicators.trend.macd_signal, prev),
            bb_percent: at(&indicators.trend.bb_percent, last),
            sma_20: at(&indicators.trend.sma_20, last),
            sma_50: at(&indicators.trend.sma_50, last),
            williams_r: at(&indicators.momentum.williams_r, last),
            mfi: at(&indicators.volume.mfi, last),
        };

        for signal in apply_all(&inputs) {
            report.push(signal);
        }
        report
    }
}
