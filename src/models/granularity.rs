use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical candle granularity vocabulary exposed to callers.
///
/// Each provider maps these to its own interval tokens; a granularity the
/// provider does not support falls back to the nearest coarser one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[serde(rename = "1min")]
    Min1,
    #[serde(rename = "5min")]
    Min5,
    #[serde(rename = "15min")]
    Min15,
    #[serde(rename = "30min")]
    Min30,
    #[serde(rename = "1hour")]
    Hour1,
    #[serde(rename = "4hour")]
    Hour4,
    #[serde(rename = "6hour")]
    Hour6,
    #[serde(rename = "12hour")]
    Hour12,
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "1week")]
    Week1,
    #[serde(rename = "1month")]
    Month1,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 11] = [
        Granularity::Min1,
        Granularity::Min5,
        Granularity::Min15,
        Granularity::Min30,
        Granularity::Hour1,
        Granularity::Hour4,
        Granularity::Hour6,
        Granularity::Hour12,
        Granularity::Day1,
        Granularity::Week1,
        Granularity::Month1,
    ];

    /// The next coarser granularity, if any.
    pub fn coarser(self) -> Option<Granularity> {
        let idx = Self::ALL.iter().position(|g| *g == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// Canonical token, e.g. `1hour`.
    pub fn token(self) -> &'static str {
        match self {
            Granularity::Min1 => "1min",
            Granularity::Min5 => "5min",
            Granularity::Min15 => "15min",
            Granularity::Min30 => "30min",
            Granularity::Hour1 => "1hour",
            Granularity::Hour4 => "4hour",
            Granularity::Hour6 => "6hour",
            Granularity::Hour12 => "12hour",
            Granularity::Day1 => "1day",
            Granularity::Week1 => "1week",
            Granularity::Month1 => "1month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|g| g.token() == s)
            .copied()
            .ok_or_else(|| format!("unknown granularity token: {s}"))
    }
}
