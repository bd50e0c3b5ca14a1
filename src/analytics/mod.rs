//! Interface to the external analytics backend.

mod client;

pub use client::{AnalyticsClient, ClientConfig};

use crate::domain::{
    IndicatorSample, MarketSummary, PathMatrix, Timeframe, TradeLogEntry, VolatilityReport,
};
use async_trait::async_trait;
use thiserror::Error;

/// Analytics fetch errors.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Endpoint unreachable, timed out, or the transport failed.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Read-only view of the analytics backend.
///
/// All endpoints are plain GETs returning JSON; `tf` selects the candle
/// bucket where the endpoint supports it. Implemented by the HTTP client in
/// production and by mocks in tests.
#[async_trait]
pub trait AnalyticsFeed: Send + Sync {
    /// Fetches the current market summary (`/market-data`).
    async fn market_summary(&self, tf: Timeframe) -> Result<MarketSummary>;

    /// Fetches the simulated price-path matrix (`/simulation-paths`).
    async fn simulation_paths(&self, tf: Timeframe) -> Result<PathMatrix>;

    /// Fetches recent execution logs (`/trade-logs`).
    async fn trade_logs(&self) -> Result<Vec<TradeLogEntry>>;

    /// Fetches the intraday volatility breakdown (`/volatility-analysis`).
    async fn volatility_analysis(&self) -> Result<VolatilityReport>;

    /// Fetches candles with indicator values (`/technical-indicators`).
    async fn technical_indicators(&self, tf: Timeframe) -> Result<Vec<IndicatorSample>>;
}
