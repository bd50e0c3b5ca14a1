//! Risk assessment output types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Tiered danger classification for a planned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DangerLevel {
    Safe,
    Warning,
    Critical,
}

/// Derived position-sizing recommendation.
///
/// Immutable; recomputed whenever the strategy inputs change. The danger
/// level is a pure function of the recommended leverage and the safe buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Recommended leverage, clamped to [1, 125].
    pub recommended_leverage: u32,
    /// Capital committed per trade (capital / trade count).
    pub entry_size: Decimal,
    /// Adverse price move, in percent, that consumes 2% of total capital
    /// at the recommended leverage.
    pub safe_buffer_percent: Decimal,
    pub danger_level: DangerLevel,
}
