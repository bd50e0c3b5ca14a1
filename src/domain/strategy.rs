//! Trader strategy inputs.

use super::Timeframe;
use rust_decimal::Decimal;

/// Trader inputs driving the risk planner.
///
/// Mutated only through the dashboard setters; the risk assessment is fully
/// recomputed on every change, never patched field-by-field.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    /// Total session capital in currency units. Must be positive.
    pub capital: Decimal,
    /// Desired session profit in currency units.
    pub target: Decimal,
    /// Number of planned trades for the session. At least 1.
    pub trade_count: u32,
    /// Active candle timeframe.
    pub timeframe: Timeframe,
    /// Carried through for the rendering layer; not consumed by the planner.
    pub trailing_stop: bool,
    pub hedge_mode: bool,
    pub compound: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            capital: Decimal::from(1000),
            target: Decimal::from(50),
            trade_count: 5,
            timeframe: Timeframe::default(),
            trailing_stop: true,
            hedge_mode: false,
            compound: false,
        }
    }
}
