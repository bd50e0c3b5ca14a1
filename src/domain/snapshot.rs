//! Aggregate dashboard snapshot.

use super::{ChartPointSeries, IndicatorSample, MarketSummary, Timeframe, TradeLogEntry, VolatilityReport};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable aggregate of all externally-sourced dashboard state as of the
/// last successful poll cycle.
///
/// Replaced wholesale once per successful cycle; when a cycle fails, every
/// field keeps its previous value. The rendering layer never observes a
/// snapshot mixing fields from two different cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub market: Option<MarketSummary>,
    /// Reshaped simulation paths, one chart point per step.
    pub chart: ChartPointSeries,
    pub logs: Vec<TradeLogEntry>,
    pub volatility: Option<VolatilityReport>,
    pub indicators: Vec<IndicatorSample>,
    /// Timeframe the cycle that produced this snapshot was issued for.
    pub timeframe: Option<Timeframe>,
    pub fetched_at: Option<DateTime<Utc>>,
}
