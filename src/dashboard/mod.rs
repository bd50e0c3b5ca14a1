//! Dashboard core: shared state, risk recomputation, and poll lifecycle.
//!
//! The facade owns the state the rendering layer reads (snapshot, risk
//! assessment) and the imperative setters that mutate the strategy inputs.
//! Polling runs as a single spawned task; all cross-task coordination is a
//! generation counter compared before a cycle's result is applied.

mod aggregator;
mod error;
mod scheduler;

pub use error::DashboardError;
pub use scheduler::SchedulerState;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::{Mutex, RwLock, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use crate::analytics::{AnalyticsClient, AnalyticsFeed};
use crate::config::Config;
use crate::domain::{RiskAssessment, Snapshot, StrategyConfig, Timeframe};
use crate::risk;
use aggregator::SnapshotAggregator;
use scheduler::{Command, PollScheduler};

/// State shared between the facade and the poll task.
pub(crate) struct SharedState {
    strategy: RwLock<StrategyConfig>,
    assessment: RwLock<RiskAssessment>,
    snapshot: RwLock<Snapshot>,
    /// Poll-cycle generation; bumped on every timeframe change and on stop.
    generation: AtomicU64,
    last_cycle_ok: AtomicBool,
}

impl SharedState {
    fn new(strategy: StrategyConfig) -> Self {
        let assessment = risk::assess(&strategy);
        Self {
            strategy: RwLock::new(strategy),
            assessment: RwLock::new(assessment),
            snapshot: RwLock::new(Snapshot::default()),
            generation: AtomicU64::new(0),
            last_cycle_ok: AtomicBool::new(true),
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn set_last_cycle_ok(&self, ok: bool) {
        self.last_cycle_ok.store(ok, Ordering::SeqCst);
    }

    pub(crate) async fn timeframe(&self) -> Timeframe {
        self.strategy.read().await.timeframe
    }
}

struct PollHandle {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

/// Dashboard core exposed to the rendering layer.
pub struct Dashboard {
    state: Arc<SharedState>,
    feed: Arc<dyn AnalyticsFeed>,
    poll_interval: Duration,
    runtime: Mutex<Option<PollHandle>>,
}

impl Dashboard {
    /// Creates a dashboard backed by the HTTP analytics client.
    pub fn new(cfg: &Config) -> Result<Self, DashboardError> {
        let client = AnalyticsClient::from_config(&cfg.analytics)
            .map_err(|e| DashboardError::Client(e.to_string()))?;

        Ok(Self::with_feed(Arc::new(client), cfg.polling.interval))
    }

    /// Creates a dashboard over an arbitrary feed. Used by tests.
    pub fn with_feed(feed: Arc<dyn AnalyticsFeed>, poll_interval: Duration) -> Self {
        Self {
            state: Arc::new(SharedState::new(StrategyConfig::default())),
            feed,
            poll_interval,
            runtime: Mutex::new(None),
        }
    }

    /// Starts the poll loop. Errors if already running.
    pub async fn start(&self) -> Result<(), DashboardError> {
        let mut runtime = self.runtime.lock().await;
        if runtime.is_some() {
            return Err(DashboardError::AlreadyRunning);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let aggregator = SnapshotAggregator::new(Arc::clone(&self.feed), Arc::clone(&self.state));
        let scheduler = PollScheduler::new(aggregator, self.poll_interval, rx);
        let task = tokio::spawn(scheduler.run());

        *runtime = Some(PollHandle { commands: tx, task });

        info!(interval = ?self.poll_interval, "dashboard polling started");
        Ok(())
    }

    /// Stops the poll loop; safe to call when not running.
    ///
    /// The generation is bumped first so an in-flight cycle can no longer
    /// mutate the snapshot.
    pub async fn stop(&self) {
        let handle = self.runtime.lock().await.take();
        if let Some(handle) = handle {
            self.state.bump_generation();
            let _ = handle.commands.send(Command::Stop);
            let _ = handle.task.await;
            info!("dashboard polling stopped");
        }
    }

    /// Read-only view of the latest known-good snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.snapshot.read().await.clone()
    }

    /// Read-only view of the current risk assessment.
    pub async fn risk_assessment(&self) -> RiskAssessment {
        self.state.assessment.read().await.clone()
    }

    /// Read-only view of the current strategy inputs.
    pub async fn strategy(&self) -> StrategyConfig {
        self.state.strategy.read().await.clone()
    }

    /// Whether the most recent poll cycle succeeded. Drives the rendering
    /// layer's connectivity indicator.
    pub fn last_cycle_ok(&self) -> bool {
        self.state.last_cycle_ok.load(Ordering::SeqCst)
    }

    /// Sets the session capital. Non-positive capital is rejected since the
    /// planner's arithmetic is undefined for it.
    pub async fn set_capital(&self, capital: Decimal) -> Result<(), DashboardError> {
        if capital <= Decimal::ZERO {
            return Err(DashboardError::InvalidCapital(capital));
        }
        self.update_strategy(|s| s.capital = capital).await;
        Ok(())
    }

    /// Sets the desired session profit.
    pub async fn set_target(&self, target: Decimal) {
        self.update_strategy(|s| s.target = target).await;
    }

    /// Sets the number of planned trades, clamped to at least 1.
    pub async fn set_trade_count(&self, count: u32) {
        self.update_strategy(|s| s.trade_count = count.max(1)).await;
    }

    pub async fn set_trailing_stop(&self, on: bool) {
        self.update_strategy(|s| s.trailing_stop = on).await;
    }

    pub async fn set_hedge_mode(&self, on: bool) {
        self.update_strategy(|s| s.hedge_mode = on).await;
    }

    pub async fn set_compound(&self, on: bool) {
        self.update_strategy(|s| s.compound = on).await;
    }

    /// Switches the active timeframe.
    ///
    /// Recomputes the risk assessment, invalidates any in-flight poll cycle
    /// via a generation bump, and restarts polling immediately for the new
    /// timeframe. A no-op when the timeframe is unchanged.
    pub async fn set_timeframe(&self, tf: Timeframe) {
        {
            let strategy = self.state.strategy.read().await;
            if strategy.timeframe == tf {
                return;
            }
        }

        self.update_strategy(|s| s.timeframe = tf).await;
        self.state.bump_generation();

        let runtime = self.runtime.lock().await;
        if let Some(handle) = runtime.as_ref() {
            let _ = handle.commands.send(Command::Repoll);
        }

        info!(timeframe = %tf, "timeframe changed");
    }

    /// Applies a strategy mutation and synchronously recomputes the
    /// assessment from the full, updated config.
    async fn update_strategy(&self, mutate: impl FnOnce(&mut StrategyConfig)) {
        let mut strategy = self.state.strategy.write().await;
        mutate(&mut strategy);
        let assessment = risk::assess(&strategy);
        *self.state.assessment.write().await = assessment;
    }
}
