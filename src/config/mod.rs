//! Configuration loading and validation for the dashboard.
//!
//! Uses serde_yaml to load YAML configuration files. Optional sections fall
//! back to sensible defaults so a minimal config only needs the app block and
//! the analytics base URL.

mod analytics;
mod app;
mod duration;
mod error;
mod polling;

pub use analytics::AnalyticsConfig;
pub use app::AppConfig;
pub use error::ConfigError;
pub use polling::PollingConfig;

use serde::Deserialize;
use std::fs;

/// Root configuration structure for the dashboard.
///
/// Required sections: app, analytics. Optional: polling.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Analytics backend connection settings.
    pub analytics: AnalyticsConfig,
    /// Snapshot refresh cadence (optional).
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` (if present), then
    /// parses and validates the YAML config.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Normalizes loaded values before validation.
    fn normalize(&mut self) {
        while self.analytics.base_url.ends_with('/') {
            self.analytics.base_url.pop();
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.analytics.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "analytics.base_url is required".into(),
            ));
        }

        if self.analytics.request_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "analytics.request_timeout must be positive".into(),
            ));
        }

        if self.polling.interval.is_zero() {
            return Err(ConfigError::Validation(
                "polling.interval must be positive".into(),
            ));
        }

        Ok(())
    }
}
