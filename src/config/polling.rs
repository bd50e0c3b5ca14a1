//! Poll cadence settings.

use super::duration;
use serde::Deserialize;
use std::time::Duration;

fn default_interval() -> Duration {
    Duration::from_secs(3)
}

/// Snapshot refresh cadence.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Fixed interval between refresh cycles.
    #[serde(deserialize_with = "duration::deserialize", default = "default_interval")]
    pub interval: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}
