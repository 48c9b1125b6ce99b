//! Pure derivation of the risk plan.
//!
//! # Formulae
//!
//! ```text
//! dailyRiskAmount    = funds * dailyRiskPct / 100
//! perTradeRisk       = dailyRiskAmount / numTrades
//! slPips             = perTradeRisk / (pipSize * funds)
//! tpPips             = slPips * riskReward
//! slPrice            = round5(entryPrice - slPips * pipSize)
//! tpPrice            = round5(entryPrice + tpPips * pipSize)
//! balanceIfLoseAll   = funds - dailyRiskAmount
//! gainPerTrade       = perTradeRisk * riskReward
//! totalGainIfWinAll  = gainPerTrade * numTrades
//! balanceIfWinAll    = funds + totalGainIfWinAll
//! suggestedMaxTrades = min(floor(100 / dailyRiskPct), 10)
//! ```
//!
//! Any zero denominator or non-finite intermediate yields `0.0`.

use crate::types::{PerTradeMetrics, RiskInput, RiskPlan};

use super::schedule::schedule;

/// Upper bound of the suggested trade count.
pub const SUGGESTED_TRADES_CAP: u32 = 10;

/// Decimal places kept on SL/TP prices.
pub const PRICE_DECIMALS: usize = 5;

/// Derive the full risk plan from an input record.
///
/// Pure and total: identical inputs give bit-identical outputs, and no input
/// (negative, zero, or non-finite) makes it panic or return a non-finite value.
///
/// # Examples
///
/// ```
/// use sizing_core::engine::derive;
/// use sizing_core::types::RiskInput;
///
/// let plan = derive(&RiskInput { funds: 0.0, ..RiskInput::default() });
/// assert_eq!(plan.sl_pips, 0.0);
/// assert_eq!(plan.daily_risk_amount, 0.0);
/// ```
pub fn derive(input: &RiskInput) -> RiskPlan {
    let trades = f64::from(input.num_trades);

    let daily_risk_amount = finite_or_zero(input.funds * input.daily_risk_pct / 100.0);
    let per_trade_risk = if input.num_trades > 0 {
        finite_or_zero(daily_risk_amount / trades)
    } else {
        0.0
    };

    let sl_pips = ratio(per_trade_risk, input.pip_size * input.funds);
    let tp_pips = finite_or_zero(sl_pips * input.risk_reward);

    let sl_price = if input.entry_price == 0.0 || sl_pips == 0.0 {
        0.0
    } else {
        round_price(input.entry_price - sl_pips * input.pip_size)
    };
    let tp_price = if input.entry_price == 0.0 || sl_pips == 0.0 || tp_pips == 0.0 {
        0.0
    } else {
        round_price(input.entry_price + tp_pips * input.pip_size)
    };

    let gain_per_trade = finite_or_zero(per_trade_risk * input.risk_reward);
    let total_gain_if_win_all = finite_or_zero(gain_per_trade * trades);

    let metrics = PerTradeMetrics {
        risk_amount: per_trade_risk,
        sl_pips,
        tp_pips,
        reward_amount: gain_per_trade,
    };

    RiskPlan {
        suggested_max_trades: suggested_max_trades(input.daily_risk_pct),
        daily_risk_amount,
        per_trade_risk,
        sl_pips,
        tp_pips,
        sl_price,
        tp_price,
        loss_if_lose_all: daily_risk_amount,
        balance_if_lose_all: finite_or_zero(input.funds - daily_risk_amount),
        gain_per_trade,
        total_gain_if_win_all,
        balance_if_win_all: finite_or_zero(input.funds + total_gain_if_win_all),
        trade_lines: schedule(input.num_trades, metrics),
    }
}

/// Safety heuristic capping the number of trades for the day.
///
/// Returns `min(floor(100 / daily_risk_pct), 10)`. A zero, negative, or
/// non-finite percentage means there is no risk budget and yields `0`.
///
/// # Examples
///
/// ```
/// use sizing_core::engine::suggested_max_trades;
///
/// assert_eq!(suggested_max_trades(2.0), 10);
/// assert_eq!(suggested_max_trades(30.0), 3);
/// assert_eq!(suggested_max_trades(0.0), 0);
/// ```
pub fn suggested_max_trades(daily_risk_pct: f64) -> u32 {
    if !daily_risk_pct.is_finite() || daily_risk_pct <= 0.0 {
        return 0;
    }
    let raw = (100.0 / daily_risk_pct).floor();
    raw.min(f64::from(SUGGESTED_TRADES_CAP)) as u32
}

/// Round a price to [`PRICE_DECIMALS`] places.
///
/// Rounds the exact binary value, so `1.077175` (stored as
/// `1.07717499999...`) becomes `1.07717`. A value lying exactly halfway
/// between two candidates rounds away from zero. Non-finite prices become
/// `0.0`.
///
/// # Examples
///
/// ```
/// use sizing_core::engine::round_price;
///
/// assert_eq!(round_price(1.077175), 1.07717);
/// assert_eq!(round_price(1.015625), 1.01563);
/// ```
pub fn round_price(price: f64) -> f64 {
    if !price.is_finite() {
        return 0.0;
    }

    // Exact halves at 5 decimals are the odd multiples of 1/64.
    let sixty_fourths = price * 64.0;
    if sixty_fourths.fract() == 0.0 && sixty_fourths % 2.0 != 0.0 {
        let scale = 10f64.powi(PRICE_DECIMALS as i32);
        return finite_or_zero((price * scale).round() / scale);
    }

    // `{:.N}` rounds the exact decimal expansion of the value.
    format!("{:.*}", PRICE_DECIMALS, price)
        .parse()
        .map_or(0.0, finite_or_zero)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        finite_or_zero(numerator / denominator)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_input() -> RiskInput {
        RiskInput {
            funds: 1000.0,
            num_trades: 5,
            daily_risk_pct: 2.0,
            risk_reward: 2.0,
            pip_size: 0.0001,
            entry_price: 0.0,
            notes: String::new(),
        }
    }

    fn assert_all_finite(plan: &RiskPlan) {
        for value in [
            plan.daily_risk_amount,
            plan.per_trade_risk,
            plan.sl_pips,
            plan.tp_pips,
            plan.sl_price,
            plan.tp_price,
            plan.loss_if_lose_all,
            plan.balance_if_lose_all,
            plan.gain_per_trade,
            plan.total_gain_if_win_all,
            plan.balance_if_win_all,
        ] {
            assert!(value.is_finite(), "non-finite value in {:?}", plan);
        }
    }

    #[test]
    fn test_reference_plan_without_entry() {
        let plan = derive(&base_input());

        assert_relative_eq!(plan.daily_risk_amount, 20.0, epsilon = 1e-10);
        assert_relative_eq!(plan.per_trade_risk, 4.0, epsilon = 1e-10);
        assert_relative_eq!(plan.sl_pips, 40.0, epsilon = 1e-9);
        assert_relative_eq!(plan.tp_pips, 80.0, epsilon = 1e-9);
        assert_eq!(plan.sl_price, 0.0);
        assert_eq!(plan.tp_price, 0.0);
        assert_relative_eq!(plan.loss_if_lose_all, 20.0, epsilon = 1e-10);
        assert_relative_eq!(plan.balance_if_lose_all, 980.0, epsilon = 1e-10);
        assert_relative_eq!(plan.gain_per_trade, 8.0, epsilon = 1e-10);
        assert_relative_eq!(plan.total_gain_if_win_all, 80.0, epsilon = 1e-10);
        assert_relative_eq!(plan.balance_if_win_all, 1080.0, epsilon = 1e-10);
        assert_eq!(plan.suggested_max_trades, 10);
        assert_eq!(plan.trade_lines.len(), 5);
        assert!(!plan.has_price_levels());
    }

    #[test]
    fn test_reference_plan_with_entry() {
        let plan = derive(&RiskInput {
            entry_price: 1.1,
            ..base_input()
        });

        assert_relative_eq!(plan.sl_price, 1.096, epsilon = 1e-12);
        assert_relative_eq!(plan.tp_price, 1.108, epsilon = 1e-12);
        assert!(plan.has_price_levels());
    }

    #[test]
    fn test_zero_funds() {
        let plan = derive(&RiskInput {
            funds: 0.0,
            entry_price: 1.1,
            ..base_input()
        });

        assert_eq!(plan.daily_risk_amount, 0.0);
        assert_eq!(plan.per_trade_risk, 0.0);
        assert_eq!(plan.sl_pips, 0.0);
        assert_eq!(plan.tp_pips, 0.0);
        assert_eq!(plan.sl_price, 0.0);
        assert_eq!(plan.tp_price, 0.0);
        assert_eq!(plan.loss_if_lose_all, 0.0);
        assert_eq!(plan.balance_if_lose_all, 0.0);
        assert_eq!(plan.gain_per_trade, 0.0);
        assert_eq!(plan.total_gain_if_win_all, 0.0);
        assert_eq!(plan.balance_if_win_all, 0.0);
    }

    #[test]
    fn test_zero_pip_size() {
        let plan = derive(&RiskInput {
            pip_size: 0.0,
            entry_price: 1.1,
            ..base_input()
        });

        assert_eq!(plan.sl_pips, 0.0);
        assert_eq!(plan.tp_pips, 0.0);
        assert_eq!(plan.sl_price, 0.0);
        assert_eq!(plan.tp_price, 0.0);
        assert_relative_eq!(plan.per_trade_risk, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_daily_risk() {
        let plan = derive(&RiskInput {
            daily_risk_pct: 0.0,
            ..base_input()
        });

        assert_eq!(plan.daily_risk_amount, 0.0);
        assert_eq!(plan.per_trade_risk, 0.0);
        assert_eq!(plan.sl_pips, 0.0);
        assert_eq!(plan.suggested_max_trades, 0);
        assert_eq!(plan.balance_if_lose_all, 1000.0);
        assert_eq!(plan.balance_if_win_all, 1000.0);
    }

    #[test]
    fn test_single_trade_matches_daily_totals() {
        let plan = derive(&RiskInput {
            num_trades: 1,
            ..base_input()
        });

        assert_eq!(plan.trade_lines.len(), 1);
        let line = plan.trade_lines[0];
        assert_eq!(line.trade, 1);
        assert_relative_eq!(line.risk_amount, plan.daily_risk_amount, epsilon = 1e-12);
        assert_relative_eq!(line.reward_amount, plan.total_gain_if_win_all, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_trades_inside_engine() {
        let plan = derive(&RiskInput {
            num_trades: 0,
            ..base_input()
        });

        assert_eq!(plan.per_trade_risk, 0.0);
        assert_eq!(plan.total_gain_if_win_all, 0.0);
        assert!(plan.trade_lines.is_empty());
        assert_relative_eq!(plan.daily_risk_amount, 20.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_risk_reward_clears_take_profit_price() {
        let plan = derive(&RiskInput {
            risk_reward: 0.0,
            entry_price: 1.1,
            ..base_input()
        });

        assert_eq!(plan.tp_pips, 0.0);
        assert_eq!(plan.tp_price, 0.0);
        assert_relative_eq!(plan.sl_price, 1.096, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_inputs_do_not_panic() {
        let inputs = [
            RiskInput {
                funds: -1000.0,
                ..base_input()
            },
            RiskInput {
                risk_reward: -2.0,
                entry_price: 1.1,
                ..base_input()
            },
            RiskInput {
                pip_size: -0.0001,
                entry_price: 1.1,
                ..base_input()
            },
            RiskInput {
                daily_risk_pct: -2.0,
                ..base_input()
            },
        ];

        for input in &inputs {
            let plan = derive(input);
            assert_all_finite(&plan);
            assert_eq!(plan.trade_lines.len(), input.num_trades as usize);
        }
    }

    #[test]
    fn test_negative_funds_arithmetic() {
        let plan = derive(&RiskInput {
            funds: -1000.0,
            ..base_input()
        });

        // Raw arithmetic carries through; both signs cancel in slPips.
        assert_relative_eq!(plan.daily_risk_amount, -20.0, epsilon = 1e-10);
        assert_relative_eq!(plan.sl_pips, 40.0, epsilon = 1e-9);
        assert_eq!(plan.suggested_max_trades, 10);
    }

    #[test]
    fn test_non_finite_inputs_resolve_to_zero() {
        let plan = derive(&RiskInput {
            funds: f64::INFINITY,
            daily_risk_pct: f64::NAN,
            risk_reward: f64::INFINITY,
            pip_size: f64::NAN,
            entry_price: f64::INFINITY,
            ..base_input()
        });

        assert_all_finite(&plan);
        assert_eq!(plan.suggested_max_trades, 0);
    }

    #[test]
    fn test_suggested_max_trades() {
        assert_eq!(suggested_max_trades(1.0), 10);
        assert_eq!(suggested_max_trades(10.0), 10);
        assert_eq!(suggested_max_trades(15.0), 6);
        assert_eq!(suggested_max_trades(33.0), 3);
        assert_eq!(suggested_max_trades(100.0), 1);
        assert_eq!(suggested_max_trades(150.0), 0);
        assert_eq!(suggested_max_trades(1e-320), 10);
        assert_eq!(suggested_max_trades(0.0), 0);
        assert_eq!(suggested_max_trades(-3.0), 0);
        assert_eq!(suggested_max_trades(f64::NAN), 0);
        assert_eq!(suggested_max_trades(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(1.0960000000000001), 1.096);
        assert_eq!(round_price(1.234564), 1.23456);
        assert_eq!(round_price(1.234566), 1.23457);
        assert_eq!(round_price(f64::NAN), 0.0);
    }

    #[test]
    fn test_round_price_uses_exact_binary_value() {
        // 1.077175 is stored just below the half.
        assert_eq!(round_price(1.077175), 1.07717);
        assert_eq!(round_price(-1.077175), -1.07717);
    }

    #[test]
    fn test_round_price_exact_halves_round_away_from_zero() {
        assert_eq!(round_price(1.015625), 1.01563);
        assert_eq!(round_price(0.046875), 0.04688);
        assert_eq!(round_price(-1.015625), -1.01563);
    }

    #[test]
    fn test_sl_price_matches_displayed_price() {
        let plan = derive(&RiskInput {
            num_trades: 8,
            daily_risk_pct: 2.5,
            entry_price: 1.0803,
            ..base_input()
        });

        assert_relative_eq!(plan.sl_pips, 31.25, epsilon = 1e-9);
        assert_eq!(plan.sl_price, 1.07717);
        assert_eq!(crate::display::format_price(plan.sl_price), "1.07717");
    }

    #[test]
    fn test_derive_is_idempotent() {
        let input = RiskInput {
            funds: 12_345.67,
            num_trades: 7,
            daily_risk_pct: 3.3,
            risk_reward: 1.7,
            pip_size: 0.01,
            entry_price: 151.234,
            notes: "jpy cross".to_string(),
        };

        assert_eq!(derive(&input), derive(&input));
    }

    #[test]
    fn test_notes_have_no_effect() {
        let with_notes = RiskInput {
            notes: "anything".to_string(),
            ..base_input()
        };
        assert_eq!(derive(&with_notes), derive(&base_input()));
    }
}
