//! Deterministic rule table over the latest indicator snapshot.
//!
//! Each rule independently checks that every value it needs is defined;
//! a NaN anywhere skips the rule entirely, contributing no signal and no
//! weight. Crossover rules compare the current against the previous index.

use crate::models::signal::Signal;

/// Latest (and previous, for crossovers) indicator readings.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs {
    pub close: f64,
    pub rsi_14: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_prev: f64,
    pub macd_signal_prev: f64,
    pub bb_percent: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub williams_r: f64,
    pub mfi: f64,
}

/// RSI: oversold below 30 (+20), overbought above 70 (-20), neutral between.
pub fn rsi_rule(inputs: &RuleInputs) -> Option<Signal> {
    let rsi = inputs.rsi_14;
    if rsi.is_nan() {
        return None;
    }
    Some(if rsi < 30.0 {
        Signal::buy(format!("RSI超卖 ({rsi:.1})"), 20)
    } else if rsi > 70.0 {
        Signal::sell(format!("RSI超买 ({rsi:.1})"), -20)
    } else {
        Signal::neutral(format!("RSI正常 ({rsi:.1})"))
    })
}

/// MACD line crossing its signal line between the previous and current bar.
pub fn macd_cross_rule(inputs: &RuleInputs) -> Option<Signal> {
    let values = [
        inputs.macd,
        inputs.macd_signal,
        inputs.macd_prev,
        inputs.macd_signal_prev,
    ];
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }
    if inputs.macd > inputs.macd_signal && inputs.macd_prev <= inputs.macd_signal_prev {
        Some(Signal::buy("MACD金叉", 25))
    } else if inputs.macd < inputs.macd_signal && inputs.macd_prev >= inputs.macd_signal_prev {
        Some(Signal::sell("MACD死叉", -25))
    } else {
        None
    }
}

/// Percent-b near the band edges: above 0.8 (-15), below 0.2 (+15).
pub fn bollinger_rule(inputs: &RuleInputs) -> Option<Signal> {
    let pb = inputs.bb_percent;
    if pb.is_nan() {
        return None;
    }
    if pb > 0.8 {
        Some(Signal::sell(format!("布林带高位 ({pb:.2})"), -15))
    } else if pb < 0.2 {
        Some(Signal::buy(format!("布林带低位 ({pb:.2})"), 15))
    } else {
        None
    }
}

/// Close relative to both major moving averages.
pub fn sma_rule(inputs: &RuleInputs) -> Option<Signal> {
    if inputs.close.is_nan() || inputs.sma_20.is_nan() || inputs.sma_50.is_nan() {
        return None;
    }
    let above_20 = inputs.close > inputs.sma_20;
    let above_50 = inputs.close > inputs.sma_50;
    if above_20 && above_50 {
        Some(Signal::buy("价格高于主要均线", 15))
    } else if !above_20 && !above_50 {
        Some(Signal::sell("价格低于主要均线", -15))
    } else {
        None
    }
}

/// Williams %R: overbought above -20 (-10), oversold below -80 (+10).
pub fn williams_rule(inputs: &RuleInputs) -> Option<Signal> {
    let wr = inputs.williams_r;
    if wr.is_nan() {
        return None;
    }
    if wr > -20.0 {
        Some(Signal::sell(format!("Williams %R超买 ({wr:.1})"), -10))
    } else if wr < -80.0 {
        Some(Signal::buy(format!("Williams %R超卖 ({wr:.1})"), 10))
    } else {
        None
    }
}

/// MFI: overbought above 80 (-10), oversold below 20 (+10).
pub fn mfi_rule(inputs: &RuleInputs) -> Option<Signal> {
    let mfi = inputs.mfi;
    if mfi.is_nan() {
        return None;
    }
    if mfi > 80.0 {
        Some(Signal::sell(format!("MFI超买 ({mfi:.1})"), -10))
    } else if mfi < 20.0 {
        Some(Signal::buy(format!("MFI超卖 ({mfi:.1})"), 10))
    } else {
        None
    }
}

/// The full rule table in evaluation order.
pub fn apply_all(inputs: &RuleInputs) -> Vec<Signal> {
    [
        rsi_rule(inputs),
        macd_cross_rule(inputs),
        bollinger_rule(inputs),
        sma_rule(inputs),
        williams_rule(inputs),
        mfi_rule(inputs),
    ]
    .into_iter()
    .flatten()
    .collect()
}
