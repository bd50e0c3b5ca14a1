//! Market data structures returned by the analytics service.

use serde::{Deserialize, Serialize};

/// Market direction reported by the analytics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
}

/// Aggregated market state from `/market-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub price: f64,
    pub trend: Trend,
    /// Average true range; absent while the feed is warming up.
    pub atr: Option<f64>,
    /// Monte Carlo win probability, in percent.
    pub winrate: f64,
    pub volume_power: f64,
    /// Suggested take-profit price.
    pub tp: f64,
    /// Suggested stop-loss price.
    pub sl: f64,
}

/// Side of an executed paper trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Long,
    Short,
}

/// One execution-log row from `/trade-logs`.
///
/// The backend emits CSV-derived records with capitalized keys; the timestamp
/// is an opaque "YYYY-MM-DD HH:MM:SS" string the core does not interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeLogEntry {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Action")]
    pub action: TradeAction,
    #[serde(rename = "Price")]
    pub price: f64,
    /// Confidence score assigned at execution time.
    #[serde(rename = "Score")]
    pub score: i64,
}

/// Volatility for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyVolatility {
    pub hour: u32,
    pub volatility: f64,
}

/// Intraday volatility statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityStats {
    pub avg_intraday: f64,
    pub peak_intraday: f64,
    pub best_hour: u32,
}

/// Response of `/volatility-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    pub chart: Vec<HourlyVolatility>,
    /// Absent until the backend has a full day of data.
    pub stats: Option<VolatilityStats>,
}

/// One candle with indicator values from `/technical-indicators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSample {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
}
