//! Domain models for the dashboard core.

mod market;
mod risk;
mod simulation;
mod snapshot;
mod strategy;
mod timeframe;

pub use market::{
    HourlyVolatility, IndicatorSample, MarketSummary, TradeAction, TradeLogEntry, Trend,
    VolatilityReport, VolatilityStats,
};
pub use risk::{DangerLevel, RiskAssessment};
pub use simulation::{ChartPoint, ChartPointSeries, PathMatrix};
pub use snapshot::Snapshot;
pub use strategy::StrategyConfig;
pub use timeframe::Timeframe;
