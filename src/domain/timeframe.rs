//! Candle timeframes supported by the analytics service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Candle bucket duration used to parameterize analytics queries.
///
/// The wire form matches the backend's `tf` query parameter ("3m", "15m", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "3m")]
    M3,
    #[serde(rename = "5m")]
    M5,
    #[default]
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
}

impl Timeframe {
    /// Query-string form used by the analytics endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M3 => "3m",
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
        }
    }

    /// Expected adverse price move for one candle of this timeframe, in percent.
    ///
    /// Fixed volatility profile used by the risk planner as a divisor; not
    /// user-editable.
    pub fn expected_move_percent(&self) -> Decimal {
        match self {
            Timeframe::M3 => Decimal::new(15, 2),  // 0.15
            Timeframe::M5 => Decimal::new(25, 2),  // 0.25
            Timeframe::M15 => Decimal::new(5, 1),  // 0.5
            Timeframe::H1 => Decimal::new(8, 1),   // 0.8
            Timeframe::H4 => Decimal::new(15, 1),  // 1.5
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
