//! Poll lifecycle state machine.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::debug;

use super::aggregator::SnapshotAggregator;

/// Lifecycle of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Created, not yet polling.
    Idle,
    /// Refreshing on the configured cadence.
    Polling,
    /// Terminal; no further snapshot mutation happens.
    Stopped,
}

/// Control messages from the dashboard facade.
#[derive(Debug)]
pub(crate) enum Command {
    /// Timeframe changed: reset the timer and refresh immediately.
    Repoll,
    /// Terminal shutdown.
    Stop,
}

/// Drives the aggregator on a fixed interval and on re-poll commands.
///
/// Each refresh is awaited inline, so a cycle slower than the interval delays
/// the next tick instead of stacking overlapping cycles.
pub(crate) struct PollScheduler {
    aggregator: SnapshotAggregator,
    interval: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    state: SchedulerState,
}

impl PollScheduler {
    pub(crate) fn new(
        aggregator: SnapshotAggregator,
        interval: Duration,
        commands: mpsc::UnboundedReceiver<Command>,
    ) -> Self {
        Self {
            aggregator,
            interval,
            commands,
            state: SchedulerState::Idle,
        }
    }

    /// Runs until a `Stop` command arrives or the facade drops its sender.
    pub(crate) async fn run(mut self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.state != SchedulerState::Stopped {
            self.state = match self.state {
                SchedulerState::Idle => {
                    // The first tick fires immediately.
                    ticker.tick().await;
                    self.aggregator.refresh().await;
                    SchedulerState::Polling
                }
                SchedulerState::Polling => self.poll_step(&mut ticker).await,
                SchedulerState::Stopped => SchedulerState::Stopped,
            };
        }

        debug!("poll scheduler stopped");
    }

    async fn poll_step(&mut self, ticker: &mut Interval) -> SchedulerState {
        tokio::select! {
            _ = ticker.tick() => {
                self.aggregator.refresh().await;
                SchedulerState::Polling
            }
            cmd = self.commands.recv() => match cmd {
                Some(Command::Repoll) => {
                    debug!("re-poll requested");
                    ticker.reset();
                    self.aggregator.refresh().await;
                    SchedulerState::Polling
                }
                Some(Command::Stop) | None => SchedulerState::Stopped,
            },
        }
    }
}
