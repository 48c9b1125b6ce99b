//! Derived output record.
//!
//! Every value here is recomputed from a [`RiskInput`](super::RiskInput) by
//! [`derive`](crate::engine::derive); none of it is independent state.

use serde::{Deserialize, Serialize};

/// Per-trade figures shared by every row of the schedule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerTradeMetrics {
    /// Capital at risk on one trade.
    pub risk_amount: f64,
    /// Stop-loss distance in pips.
    pub sl_pips: f64,
    /// Take-profit distance in pips.
    pub tp_pips: f64,
    /// Capital gained when one trade hits take-profit.
    pub reward_amount: f64,
}

/// One row of the per-trade plan.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeLine {
    /// 1-based trade number.
    pub trade: u32,
    /// Capital at risk on this trade.
    pub risk_amount: f64,
    /// Stop-loss distance in pips.
    pub sl_pips: f64,
    /// Take-profit distance in pips.
    pub tp_pips: f64,
    /// Capital gained if this trade hits take-profit.
    pub reward_amount: f64,
}

impl TradeLine {
    /// Build the row for trade number `trade`.
    pub fn new(trade: u32, metrics: PerTradeMetrics) -> Self {
        Self {
            trade,
            risk_amount: metrics.risk_amount,
            sl_pips: metrics.sl_pips,
            tp_pips: metrics.tp_pips,
            reward_amount: metrics.reward_amount,
        }
    }

    /// The per-trade figures carried by this row.
    pub fn metrics(&self) -> PerTradeMetrics {
        PerTradeMetrics {
            risk_amount: self.risk_amount,
            sl_pips: self.sl_pips,
            tp_pips: self.tp_pips,
            reward_amount: self.reward_amount,
        }
    }
}

/// The derived risk plan for one input record.
///
/// Amounts are kept at full precision; only `sl_price` and `tp_price` are
/// rounded (to 5 decimal places).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPlan {
    /// Heuristic cap on the number of trades for the day.
    pub suggested_max_trades: u32,
    /// Capital at risk across the whole day.
    pub daily_risk_amount: f64,
    /// Capital at risk on one trade.
    pub per_trade_risk: f64,
    /// Stop-loss distance in pips.
    pub sl_pips: f64,
    /// Take-profit distance in pips.
    pub tp_pips: f64,
    /// Stop-loss price, `0.0` when no entry price is set.
    pub sl_price: f64,
    /// Take-profit price, `0.0` when no entry price is set.
    pub tp_price: f64,
    /// Total loss if every trade hits stop-loss.
    pub loss_if_lose_all: f64,
    /// Balance left if every trade hits stop-loss.
    pub balance_if_lose_all: f64,
    /// Gain when one trade hits take-profit.
    pub gain_per_trade: f64,
    /// Total gain if every trade hits take-profit.
    pub total_gain_if_win_all: f64,
    /// Balance if every trade hits take-profit.
    pub balance_if_win_all: f64,
    /// The uniform per-trade schedule.
    pub trade_lines: Vec<TradeLine>,
}

impl RiskPlan {
    /// The per-trade figures shared by every schedule row.
    pub fn per_trade(&self) -> PerTradeMetrics {
        PerTradeMetrics {
            risk_amount: self.per_trade_risk,
            sl_pips: self.sl_pips,
            tp_pips: self.tp_pips,
            reward_amount: self.gain_per_trade,
        }
    }

    /// Whether SL/TP prices were derived from an entry price.
    pub fn has_price_levels(&self) -> bool {
        self.sl_price != 0.0 || self.tp_price != 0.0
    }
}
