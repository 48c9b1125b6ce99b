//! Per-trade schedule generator.
//!
//! The schedule is uniform: every row carries the same [`PerTradeMetrics`] and
//! only the 1-based trade number differs. [`TradeSchedule`] is a cloneable
//! iterator, so a consumer can restart it and get the same rows again.
//!
//! # Examples
//!
//! ```
//! use sizing_core::engine::TradeSchedule;
//! use sizing_core::types::PerTradeMetrics;
//!
//! let metrics = PerTradeMetrics { risk_amount: 4.0, sl_pips: 40.0, tp_pips: 80.0, reward_amount: 8.0 };
//! let schedule = TradeSchedule::new(3, metrics);
//!
//! let numbers: Vec<u32> = schedule.clone().map(|line| line.trade).collect();
//! assert_eq!(numbers, vec![1, 2, 3]);
//! assert_eq!(schedule.len(), 3);
//! ```

use std::iter::FusedIterator;

use crate::types::{PerTradeMetrics, TradeLine};

/// Iterator over the rows of a uniform per-trade plan.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeSchedule {
    metrics: PerTradeMetrics,
    next_trade: u32,
    remaining: u32,
}

impl TradeSchedule {
    /// Create a schedule of `num_trades` rows sharing `metrics`.
    pub fn new(num_trades: u32, metrics: PerTradeMetrics) -> Self {
        Self {
            metrics,
            next_trade: 1,
            remaining: num_trades,
        }
    }

    /// The figures every row carries.
    pub fn metrics(&self) -> PerTradeMetrics {
        self.metrics
    }
}

impl Iterator for TradeSchedule {
    type Item = TradeLine;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let line = TradeLine::new(self.next_trade, self.metrics);
        self.remaining -= 1;
        self.next_trade = self.next_trade.saturating_add(1);
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TradeSchedule {}

impl FusedIterator for TradeSchedule {}

/// Collect the full schedule of `num_trades` rows.
pub fn schedule(num_trades: u32, metrics: PerTradeMetrics) -> Vec<TradeLine> {
    TradeSchedule::new(num_trades, metrics).collect()
}
