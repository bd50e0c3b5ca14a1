//! Risk and position-sizing engine.
//!
//! Pure arithmetic over the trader's strategy inputs; no I/O. The dashboard
//! re-invokes [`assess`] synchronously on every change to capital, target,
//! trade count, or timeframe.

use crate::domain::{DangerLevel, RiskAssessment, StrategyConfig};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Leverage bounds offered by the exchange.
const MIN_LEVERAGE: i64 = 1;
const MAX_LEVERAGE: i64 = 125;

/// Converts strategy inputs into a leverage recommendation and danger tier.
///
/// Deterministic and total for valid input: `trade_count` is clamped to at
/// least 1 before any division, while a non-positive `capital` is undefined
/// here and must be rejected by the caller (the dashboard setters do).
pub fn assess(config: &StrategyConfig) -> RiskAssessment {
    let trades = Decimal::from(config.trade_count.max(1));
    let size_per_trade = config.capital / trades;
    let required_profit_per_trade = config.target / trades;
    let required_roi_percent = required_profit_per_trade / size_per_trade * Decimal::ONE_HUNDRED;

    let expected_move_percent = config.timeframe.expected_move_percent();
    let raw_leverage = (required_roi_percent / expected_move_percent).ceil();
    let recommended_leverage = raw_leverage
        .to_i64()
        .unwrap_or(i64::MAX)
        .clamp(MIN_LEVERAGE, MAX_LEVERAGE) as u32;

    let position_size = size_per_trade * Decimal::from(recommended_leverage);
    // Risk budget: a position may consume at most 2% of total capital.
    let risk_amount = config.capital * Decimal::new(2, 2);
    let safe_buffer_percent = risk_amount / position_size * Decimal::ONE_HUNDRED;

    RiskAssessment {
        recommended_leverage,
        entry_size: size_per_trade,
        safe_buffer_percent,
        danger_level: classify(recommended_leverage, safe_buffer_percent),
    }
}

/// Tiered danger classification. CRITICAL takes precedence over WARNING.
fn classify(leverage: u32, safe_buffer_percent: Decimal) -> DangerLevel {
    if leverage >= 50 || safe_buffer_percent < Decimal::new(3, 1) {
        DangerLevel::Critical
    } else if leverage >= 20 || safe_buffer_percent < Decimal::new(8, 1) {
        DangerLevel::Warning
    } else {
        DangerLevel::Safe
    }
}

#[cfg(test)]
mod tests;
