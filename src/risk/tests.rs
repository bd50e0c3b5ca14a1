//! Tests for the risk planner.

use super::*;
use crate::domain::Timeframe;

fn config(capital: i64, target: i64, trades: u32, timeframe: Timeframe) -> StrategyConfig {
    StrategyConfig {
        capital: Decimal::from(capital),
        target: Decimal::from(target),
        trade_count: trades,
        timeframe,
        ..StrategyConfig::default()
    }
}

// ==================== Boundary vectors ====================

#[test]
fn test_baseline_day_trade_is_safe() {
    // size=200, roi=5%, move=0.5% -> 10x; buffer = 20/2000*100 = 1%
    let a = assess(&config(1000, 50, 5, Timeframe::M15));
    assert_eq!(a.recommended_leverage, 10);
    assert_eq!(a.entry_size, Decimal::from(200));
    assert_eq!(a.safe_buffer_percent, Decimal::ONE);
    assert_eq!(a.danger_level, DangerLevel::Safe);
}

#[test]
fn test_aggressive_scalp_clamps_to_max_leverage() {
    // roi=50%, move=0.15% -> ceil(333.33)=334, clamped to 125
    let a = assess(&config(1000, 500, 5, Timeframe::M3));
    assert_eq!(a.recommended_leverage, 125);
    assert_eq!(a.danger_level, DangerLevel::Critical);
}

#[test]
fn test_zero_target_floors_at_min_leverage() {
    let a = assess(&config(1000, 0, 5, Timeframe::M15));
    assert_eq!(a.recommended_leverage, 1);
    assert_eq!(a.danger_level, DangerLevel::Safe);
}

// ==================== Classification tiers ====================

#[test]
fn test_leverage_20_is_warning() {
    // roi=10%, move=0.5% -> exactly 20x
    let a = assess(&config(1000, 100, 5, Timeframe::M15));
    assert_eq!(a.recommended_leverage, 20);
    assert_eq!(a.danger_level, DangerLevel::Warning);
}

#[test]
fn test_thin_buffer_is_warning_even_at_low_leverage() {
    // roi=6.5%, move=0.5% -> 13x; buffer = 10/13 ~ 0.77% < 0.8%
    let a = assess(&config(1000, 65, 5, Timeframe::M15));
    assert_eq!(a.recommended_leverage, 13);
    assert_eq!(a.danger_level, DangerLevel::Warning);
}

#[test]
fn test_leverage_50_is_critical_not_warning() {
    // roi=25%, move=0.5% -> exactly 50x; CRITICAL takes precedence
    let a = assess(&config(1000, 250, 5, Timeframe::M15));
    assert_eq!(a.recommended_leverage, 50);
    assert_eq!(a.danger_level, DangerLevel::Critical);
}

#[test]
fn test_slower_timeframe_lowers_leverage() {
    let m15 = assess(&config(1000, 50, 5, Timeframe::M15));
    let h4 = assess(&config(1000, 50, 5, Timeframe::H4));
    assert!(h4.recommended_leverage < m15.recommended_leverage);
}

// ==================== Properties ====================

#[test]
fn test_leverage_always_within_exchange_bounds() {
    let timeframes = [
        Timeframe::M3,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
    ];
    for tf in timeframes {
        for target in [0, 1, 50, 500, 100_000] {
            for trades in [1, 5, 20] {
                let a = assess(&config(1000, target, trades, tf));
                assert!(
                    (1..=125).contains(&a.recommended_leverage),
                    "leverage {} out of bounds for target={} trades={} tf={}",
                    a.recommended_leverage,
                    target,
                    trades,
                    tf
                );
            }
        }
    }
}

#[test]
fn test_assess_is_idempotent() {
    let cfg = config(2500, 120, 8, Timeframe::H1);
    assert_eq!(assess(&cfg), assess(&cfg));
}

#[test]
fn test_zero_trades_clamped_to_one() {
    let a = assess(&config(1000, 50, 0, Timeframe::M15));
    let b = assess(&config(1000, 50, 1, Timeframe::M15));
    assert_eq!(a, b);
}
