//! Snapshot aggregation over the five analytics endpoints.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use super::SharedState;
use crate::analytics::{AnalyticsError, AnalyticsFeed};
use crate::chart::{self, ShapeError};
use crate::domain::{
    IndicatorSample, MarketSummary, PathMatrix, Snapshot, Timeframe, TradeLogEntry,
    VolatilityReport,
};

/// Why a poll cycle was discarded.
#[derive(Debug, Error)]
enum CycleError {
    #[error("{endpoint}: {source}")]
    Fetch {
        endpoint: &'static str,
        source: AnalyticsError,
    },
    #[error("simulation paths: {0}")]
    Shape(#[from] ShapeError),
}

fn fetch_err(endpoint: &'static str) -> impl FnOnce(AnalyticsError) -> CycleError {
    move |source| CycleError::Fetch { endpoint, source }
}

/// Fans out to the five analytics endpoints and merges the results into a
/// single snapshot.
///
/// Failure policy is all-or-nothing per cycle: if any request fails, or the
/// path matrix is malformed, the whole cycle is discarded and the previous
/// snapshot is retained unchanged. Failures are logged, never raised.
#[derive(Clone)]
pub(crate) struct SnapshotAggregator {
    feed: Arc<dyn AnalyticsFeed>,
    state: Arc<SharedState>,
}

impl SnapshotAggregator {
    pub(crate) fn new(feed: Arc<dyn AnalyticsFeed>, state: Arc<SharedState>) -> Self {
        Self { feed, state }
    }

    /// Runs one poll cycle.
    ///
    /// The cycle is tagged with the generation current at launch; a result
    /// whose tag no longer matches (timeframe changed or teardown happened
    /// mid-flight) is discarded without touching the snapshot.
    pub(crate) async fn refresh(&self) {
        let generation = self.state.generation();
        let tf = self.state.timeframe().await;

        let (market, paths, logs, volatility, indicators) = tokio::join!(
            self.feed.market_summary(tf),
            self.feed.simulation_paths(tf),
            self.feed.trade_logs(),
            self.feed.volatility_analysis(),
            self.feed.technical_indicators(tf),
        );

        let snapshot = match build_snapshot(tf, market, paths, logs, volatility, indicators) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.state.set_last_cycle_ok(false);
                warn!(timeframe = %tf, error = %e, "poll cycle failed, keeping previous snapshot");
                return;
            }
        };

        // The generation is checked under the write lock so a concurrent
        // timeframe change cannot slip in between check and apply.
        let mut current = self.state.snapshot.write().await;
        if self.state.generation() != generation {
            debug!(timeframe = %tf, generation, "stale cycle discarded");
            return;
        }

        *current = snapshot;
        self.state.set_last_cycle_ok(true);
        debug!(timeframe = %tf, generation, "snapshot updated");
    }
}

fn build_snapshot(
    tf: Timeframe,
    market: crate::analytics::Result<MarketSummary>,
    paths: crate::analytics::Result<PathMatrix>,
    logs: crate::analytics::Result<Vec<TradeLogEntry>>,
    volatility: crate::analytics::Result<VolatilityReport>,
    indicators: crate::analytics::Result<Vec<IndicatorSample>>,
) -> Result<Snapshot, CycleError> {
    let market = market.map_err(fetch_err("market-data"))?;
    let paths = paths.map_err(fetch_err("simulation-paths"))?;
    let logs = logs.map_err(fetch_err("trade-logs"))?;
    let volatility = volatility.map_err(fetch_err("volatility-analysis"))?;
    let indicators = indicators.map_err(fetch_err("technical-indicators"))?;

    let chart = chart::reshape(&paths)?;

    Ok(Snapshot {
        market: Some(market),
        chart,
        logs,
        volatility: Some(volatility),
        indicators,
        timeframe: Some(tf),
        fetched_at: Some(Utc::now()),
    })
}
