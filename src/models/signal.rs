use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Buy,
    Sell,
    Neutral,
}

/// One triggered rule: category, human-readable cause, signed score weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub category: SignalCategory,
    pub label: String,
    pub weight: i32,
}

impl Signal {
    pub fn buy(label: impl Into<String>, weight: i32) -> Self {
        Self {
            category: SignalCategory::Buy,
            label: label.into(),
            weight,
        }
    }

    pub fn sell(label: impl Into<String>, weight: i32) -> Self {
        Self {
            category: SignalCategory::Sell,
            label: label.into(),
            weight,
        }
    }

    pub fn neutral(label: impl Into<String>) -> Self {
        Self {
            category: SignalCategory::Neutral,
            label: label.into(),
            weight: 0,
        }
    }
}

/// Categorized signal lists plus the unclamped aggregate score.
///
/// Built once per evaluation and never mutated afterwards. The score is the
/// plain signed sum of triggered weights; any banding into a recommendation
/// is a presentation concern.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalReport {
    pub buy: Vec<Signal>,
    pub sell: Vec<Signal>,
    pub neutral: Vec<Signal>,
    pub score: i32,
}

impl SignalReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a signal under its category and accumulate its weight.
    pub fn push(&mut self, signal: Signal) {
        self.score += signal.weight;
        match signal.category {
            SignalCategory::Buy => self.buy.push(signal),
            SignalCategory::Sell => self.sell.push(signal),
            SignalCategory::Neutral => self.neutral.push(signal),
        }
    }

    pub fn buy_labels(&self) -> Vec<&str> {
        self.buy.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn sell_labels(&self) -> Vec<&str> {
        self.sell.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn neutral_labels(&self) -> Vec<&str> {
        self.neutral.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty() && self.neutral.is_empty()
    }
}
