//! Risk derivation engine.
//!
//! This module provides:
//! - `derivation`: The pure transformation from [`RiskInput`](crate::types::RiskInput)
//!   to [`RiskPlan`](crate::types::RiskPlan)
//! - `schedule`: The restartable per-trade schedule generator
//!
//! Nothing in here performs I/O, logs, or keeps state between calls.

pub mod derivation;
pub mod schedule;

pub use derivation::{derive, round_price, suggested_max_trades, PRICE_DECIMALS, SUGGESTED_TRADES_CAP};
pub use schedule::{schedule, TradeSchedule};
