//! Assembles the full indicator battery for one series.

use crate::models::candle::Series;
use crate::models::indicators::{
    IndicatorSet, MomentumIndicators, TrendIndicators, VolatilityIndicators, VolumeIndicators,
};

use crate::common::math;

use super::momentum::{
    calculate_cci, calculate_roc, calculate_rsi, calculate_stochastic,
    calculate_ultimate_oscillator, calculate_williams_r,
};
use super::trend::{calculate_ema, calculate_ichimoku, calculate_macd, calculate_psar, calculate_sma};
use super::volatility::{calculate_atr, calculate_bollinger_bands, calculate_donchian, calculate_keltner};
use super::volume::{calculate_ad_line, calculate_emv, calculate_mfi, calculate_obv, calculate_vwap};

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute every indicator over the series.
    ///
    /// Pure and deterministic: the same series always yields the same
    /// values and the same NaN warm-up positions. Never fails; a series
    /// shorter than an indicator's window just leaves that indicator
    /// undefined throughout.
    pub fn compute(series: &Series) -> IndicatorSet {
        let highs = series.highs();
        let lows = series.lows();
        let closes = series.closes();
        let volumes = series.volumes();

        let macd = calculate_macd(&closes);
        let bollinger = calculate_bollinger_bands(&closes, 20, 2.0);
        let psar = calculate_psar(&highs, &lows, &closes, 0.02, 0.2);
        let ichimoku = calculate_ichimoku(&highs, &lows, 9, 26, 52);
        let stochastic = calculate_stochastic(&highs, &lows, &closes, 14, 3);
        let donchian = calculate_donchian(&highs, &lows, 20);
        let keltner = calculate_keltner(&highs, &lows, &closes, 20, 10, 2.0);

        IndicatorSet {
            symbol: series.symbol().to_string(),
            trend: TrendIndicators {
                sma_5: calculate_sma(&closes, 5),
                sma_10: calculate_sma(&closes, 10),
                sma_20: calculate_sma(&closes, 20),
                sma_50: calculate_sma(&closes, 50),
                sma_100: calculate_sma(&closes, 100),
                sma_200: calculate_sma(&closes, 200),
                ema_12: calculate_ema(&closes, 12),
                ema_26: calculate_ema(&closes, 26),
                ema_50: calculate_ema(&closes, 50),
                macd: macd.macd,
                macd_signal: macd.signal,
                macd_histogram: macd.histogram,
                bb_upper: bollinger.upper,
                bb_middle: bollinger.middle,
                bb_lower: bollinger.lower,
                bb_percent: bollinger.percent_b,
                bb_width: bollinger.width,
                psar: psar.up,
                ichimoku_a: ichimoku.span_a,
                ichimoku_b: ichimoku.span_b,
            },
            momentum: MomentumIndicators {
                rsi_14: calculate_rsi(&closes, 14),
                rsi_21: calculate_rsi(&closes, 21),
                stoch_k: stochastic.k,
                stoch_d: stochastic.d,
                williams_r: calculate_williams_r(&highs, &lows, &closes, 14),
                cci: calculate_cci(&highs, &lows, &closes, 20),
                roc: calculate_roc(&closes, 10),
                ultimate_oscillator: calculate_ultimate_oscillator(
                    &highs, &lows, &closes, 7, 14, 28,
                ),
            },
            volatility: VolatilityIndicators {
                atr: calculate_atr(&highs, &lows, &closes, 14),
                donchian_upper: donchian.upper,
                donchian_middle: donchian.middle,
                donchian_lower: donchian.lower,
                keltner_upper: keltner.upper,
                keltner_middle: keltner.middle,
                keltner_lower: keltner.lower,
            },
            volume: VolumeIndicators {
                obv: calculate_obv(&closes, &volumes),
                mfi: calculate_mfi(&highs, &lows, &closes, &volumes, 14),
                vwap: calculate_vwap(&highs, &lows, &closes, &volumes),
                ad_line: calculate_ad_line(&highs, &lows, &closes, &volumes),
                emv: calculate_emv(&highs, &lows, &volumes),
                volume_sma: math::rolling_mean(&volumes, 20),
            },
        }
    }
}
