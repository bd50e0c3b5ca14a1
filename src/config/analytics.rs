//! Analytics backend connection settings.

use super::duration;
use serde::Deserialize;
use std::time::Duration;

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Connection settings for the external analytics service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Base URL of the analytics backend. A trailing slash is stripped on load.
    pub base_url: String,
    /// Per-request HTTP timeout.
    #[serde(
        deserialize_with = "duration::deserialize",
        default = "default_request_timeout"
    )]
    pub request_timeout: Duration,
}
