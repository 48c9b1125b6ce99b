//! Display formatting for presentation layers.
//!
//! Currency amounts render with 2 decimal places, pip counts with 1, and
//! prices with 5. The engine keeps full precision; rounding happens only here.
//!
//! # Examples
//!
//! ```
//! use sizing_core::display::{format_currency, format_pips, format_price, FormattedPlan};
//! use sizing_core::engine::derive;
//! use sizing_core::types::RiskInput;
//!
//! assert_eq!(format_currency(20.0), "20.00");
//! assert_eq!(format_pips(40.0), "40.0");
//! assert_eq!(format_price(1.096), "1.09600");
//!
//! let formatted = FormattedPlan::from_plan(&derive(&RiskInput::default()));
//! assert_eq!(formatted.summary[0].value, "20.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::round_price;
use crate::types::{RiskPlan, TradeLine};

pub use crate::engine::PRICE_DECIMALS;

/// Decimal places for currency amounts.
pub const CURRENCY_DECIMALS: usize = 2;
/// Decimal places for pip counts.
pub const PIP_DECIMALS: usize = 1;

/// Format a currency amount to 2 decimal places.
pub fn format_currency(amount: f64) -> String {
    fixed(amount, CURRENCY_DECIMALS)
}

/// Format a pip count to 1 decimal place.
pub fn format_pips(pips: f64) -> String {
    fixed(pips, PIP_DECIMALS)
}

/// Format a price to 5 decimal places.
///
/// Uses the engine's [`round_price`], so a raw price and the plan's rounded
/// price always render the same.
pub fn format_price(price: f64) -> String {
    fixed(round_price(price), PRICE_DECIMALS)
}

/// Format an amount gained, prefixed with `+` unless it is negative.
pub fn format_gain(amount: f64) -> String {
    if amount < 0.0 {
        format_currency(amount)
    } else {
        format!("+{}", format_currency(amount))
    }
}

/// Format an amount lost, prefixed with `-`.
///
/// A negative loss is a gain and renders without a sign.
pub fn format_loss(amount: f64) -> String {
    if amount < 0.0 {
        format_currency(-amount)
    } else {
        format!("-{}", format_currency(amount))
    }
}

// Values that round to zero never keep a leading minus sign.
fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// One labelled line of the plan summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Row label.
    pub label: String,
    /// Formatted value, including any sign prefix.
    pub value: String,
}

impl SummaryRow {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// One formatted row of the per-trade plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTradeLine {
    /// Trade label, `#n`.
    pub trade: String,
    /// Risk amount.
    pub risk_amount: String,
    /// Stop-loss distance in pips.
    pub sl_pips: String,
    /// Take-profit distance in pips.
    pub tp_pips: String,
    /// Reward amount, prefixed with `+`.
    pub reward_amount: String,
}

impl From<&TradeLine> for FormattedTradeLine {
    fn from(line: &TradeLine) -> Self {
        Self {
            trade: format!("#{}", line.trade),
            risk_amount: format_currency(line.risk_amount),
            sl_pips: format_pips(line.sl_pips),
            tp_pips: format_pips(line.tp_pips),
            reward_amount: format_gain(line.reward_amount),
        }
    }
}

/// A plan rendered to display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPlan {
    /// Hint shown under the trade count field.
    pub suggestion: String,
    /// Summary rows in display order.
    pub summary: Vec<SummaryRow>,
    /// Per-trade plan rows.
    pub trades: Vec<FormattedTradeLine>,
}

impl FormattedPlan {
    /// Render every display string of a plan.
    pub fn from_plan(plan: &RiskPlan) -> Self {
        Self {
            suggestion: suggestion(plan),
            summary: summary_rows(plan),
            trades: plan.trade_lines.iter().map(FormattedTradeLine::from).collect(),
        }
    }
}

/// The suggested trade count hint.
pub fn suggestion(plan: &RiskPlan) -> String {
    format!(
        "Suggested max trades based on risk: {}",
        plan.suggested_max_trades
    )
}

/// The summary rows in display order.
pub fn summary_rows(plan: &RiskPlan) -> Vec<SummaryRow> {
    vec![
        SummaryRow::new("Daily risk amount", format_currency(plan.daily_risk_amount)),
        SummaryRow::new("Per-trade risk", format_currency(plan.per_trade_risk)),
        SummaryRow::new("SL (pips)", format_pips(plan.sl_pips)),
        SummaryRow::new("TP (pips)", format_pips(plan.tp_pips)),
        SummaryRow::new("SL Price", format_price(plan.sl_price)),
        SummaryRow::new("TP Price", format_price(plan.tp_price)),
        SummaryRow::new("Loss if all lose", format_loss(plan.loss_if_lose_all)),
        SummaryRow::new("Balance if all lose", format_currency(plan.balance_if_lose_all)),
        SummaryRow::new("Gain if all win", format_gain(plan.total_gain_if_win_all)),
        SummaryRow::new("Balance if all win", format_currency(plan.balance_if_win_all)),
    ]
}
