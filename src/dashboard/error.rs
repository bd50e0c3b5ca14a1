//! Dashboard error types.

use rust_decimal::Decimal;

/// Dashboard error type.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("dashboard is already polling")]
    AlreadyRunning,
    #[error("capital must be positive, got {0}")]
    InvalidCapital(Decimal),
    #[error("analytics client error: {0}")]
    Client(String),
}
