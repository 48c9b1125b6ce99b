//! Input record and boundary clamping.
//!
//! The derivation engine accepts any [`RiskInput`]. Presentation layers are
//! expected to pass values through the boundary rules here first, either
//! wholesale with [`RiskInput::clamped`] or one edit at a time with
//! [`RiskInput::edit`].
//!
//! # Examples
//!
//! ```
//! use sizing_core::types::input::{InputField, RiskInput};
//!
//! let mut input = RiskInput::default();
//! input.edit(InputField::NumTrades, "0");
//! assert_eq!(input.num_trades, 1);
//!
//! input.edit(InputField::DailyRiskPct, "250");
//! assert_eq!(input.daily_risk_pct, 100.0);
//!
//! input.edit(InputField::PipSize, "abc");
//! assert_eq!(input.pip_size, 0.0001);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InputError;

/// Account balance the form starts with.
pub const DEFAULT_FUNDS: f64 = 1000.0;
/// Planned trades the form starts with.
pub const DEFAULT_NUM_TRADES: u32 = 5;
/// Daily risk percentage the form starts with.
pub const DEFAULT_DAILY_RISK_PCT: f64 = 2.0;
/// Risk:reward multiple the form starts with.
pub const DEFAULT_RISK_REWARD: f64 = 2.0;
/// Pip size of most major pairs.
pub const DEFAULT_PIP_SIZE: f64 = 0.0001;
/// Lowest accepted risk:reward multiple.
pub const MIN_RISK_REWARD: f64 = 0.1;
/// Highest accepted daily risk percentage.
pub const MAX_DAILY_RISK_PCT: f64 = 100.0;
/// Highest accepted trade count; bounds the per-trade schedule allocation.
pub const MAX_NUM_TRADES: u32 = 10_000;

/// User-editable input record.
///
/// Serialises with camelCase field names. Missing fields deserialise to the
/// form defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskInput {
    /// Account balance.
    pub funds: f64,
    /// Planned trade count for the day.
    pub num_trades: u32,
    /// Percent of funds willing to risk across the whole day.
    pub daily_risk_pct: f64,
    /// Reward multiple per unit of risk.
    pub risk_reward: f64,
    /// Minimum price increment of the instrument.
    pub pip_size: f64,
    /// Manual entry price, `0.0` when unset.
    pub entry_price: f64,
    /// Free-text annotation with no computational effect.
    pub notes: String,
}

impl Default for RiskInput {
    fn default() -> Self {
        Self {
            funds: DEFAULT_FUNDS,
            num_trades: DEFAULT_NUM_TRADES,
            daily_risk_pct: DEFAULT_DAILY_RISK_PCT,
            risk_reward: DEFAULT_RISK_REWARD,
            pip_size: DEFAULT_PIP_SIZE,
            entry_price: 0.0,
            notes: String::new(),
        }
    }
}

impl RiskInput {
    /// Create an input record holding the form defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the boundary rules to every numeric field.
    ///
    /// - `funds`, `entry_price`: non-finite → 0, then clamped to ≥ 0
    /// - `num_trades`: clamped to [1, [`MAX_NUM_TRADES`]]
    /// - `daily_risk_pct`: non-finite → 0, then clamped to [0, 100]
    /// - `risk_reward`: non-finite → 0.1, then clamped to ≥ 0.1
    /// - `pip_size`: non-finite or ≤ 0 → 0.0001
    ///
    /// # Examples
    ///
    /// ```
    /// use sizing_core::types::RiskInput;
    ///
    /// let input = RiskInput {
    ///     funds: -50.0,
    ///     risk_reward: 0.0,
    ///     pip_size: -1.0,
    ///     ..RiskInput::default()
    /// }
    /// .clamped();
    ///
    /// assert_eq!(input.funds, 0.0);
    /// assert_eq!(input.risk_reward, 0.1);
    /// assert_eq!(input.pip_size, 0.0001);
    /// ```
    pub fn clamped(self) -> Self {
        Self {
            funds: non_negative(self.funds),
            num_trades: self.num_trades.clamp(1, MAX_NUM_TRADES),
            daily_risk_pct: finite_or(self.daily_risk_pct, 0.0).clamp(0.0, MAX_DAILY_RISK_PCT),
            risk_reward: finite_or(self.risk_reward, MIN_RISK_REWARD).max(MIN_RISK_REWARD),
            pip_size: positive_or_default(self.pip_size),
            entry_price: non_negative(self.entry_price),
            notes: self.notes,
        }
    }

    /// Apply a raw textual edit to one field.
    ///
    /// Non-numeric and zero entries take the field's fallback value (see
    /// [`InputField::fallback`]); the result is then clamped. `Notes` stores
    /// the raw text unchanged.
    pub fn edit(&mut self, field: InputField, raw: &str) {
        if field == InputField::Notes {
            self.notes = raw.to_string();
            return;
        }

        let value = parse_number(raw)
            .filter(|v| *v != 0.0)
            .unwrap_or_else(|| field.fallback());

        match field {
            InputField::Funds => self.funds = non_negative(value),
            InputField::NumTrades => self.num_trades = trade_count(value),
            InputField::DailyRiskPct => {
                self.daily_risk_pct = value.clamp(0.0, MAX_DAILY_RISK_PCT)
            }
            InputField::RiskReward => self.risk_reward = value.max(MIN_RISK_REWARD),
            InputField::PipSize => self.pip_size = positive_or_default(value),
            InputField::EntryPrice => self.entry_price = non_negative(value),
            InputField::Notes => {}
        }
    }

    /// Apply an edit written as `field=value`.
    ///
    /// Returns the field that was edited.
    ///
    /// # Errors
    ///
    /// - `InputError::MalformedEdit` when there is no `=`
    /// - `InputError::UnknownField` when the field name is not recognised
    pub fn apply_edit(&mut self, edit: &str) -> Result<InputField, InputError> {
        let (name, raw) = edit
            .split_once('=')
            .ok_or_else(|| InputError::MalformedEdit(edit.to_string()))?;
        let field: InputField = name.parse()?;
        let raw = if field == InputField::Notes {
            raw
        } else {
            raw.trim()
        };
        self.edit(field, raw);
        Ok(field)
    }
}

/// Names of the editable input fields.
///
/// Parsing accepts camelCase, snake_case and kebab-case spellings, case
/// insensitively, plus a few short aliases (`trades`, `rr`, `entry`).
///
/// # Examples
///
/// ```
/// use sizing_core::types::InputField;
///
/// assert_eq!("dailyRiskPct".parse::<InputField>().unwrap(), InputField::DailyRiskPct);
/// assert_eq!("daily_risk_pct".parse::<InputField>().unwrap(), InputField::DailyRiskPct);
/// assert_eq!("rr".parse::<InputField>().unwrap(), InputField::RiskReward);
/// assert!("leverage".parse::<InputField>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Account balance
    Funds,
    /// Planned trade count
    NumTrades,
    /// Daily risk percentage
    DailyRiskPct,
    /// Risk:reward multiple
    RiskReward,
    /// Pip size
    PipSize,
    /// Manual entry price
    EntryPrice,
    /// Free-text notes
    Notes,
}

impl InputField {
    /// All fields in form order.
    pub const ALL: [InputField; 7] = [
        InputField::EntryPrice,
        InputField::Funds,
        InputField::NumTrades,
        InputField::DailyRiskPct,
        InputField::RiskReward,
        InputField::PipSize,
        InputField::Notes,
    ];

    /// The camelCase wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Funds => "funds",
            InputField::NumTrades => "numTrades",
            InputField::DailyRiskPct => "dailyRiskPct",
            InputField::RiskReward => "riskReward",
            InputField::PipSize => "pipSize",
            InputField::EntryPrice => "entryPrice",
            InputField::Notes => "notes",
        }
    }

    /// Value substituted for a non-numeric or zero entry.
    ///
    /// `Notes` has no numeric fallback and returns `0.0`.
    pub fn fallback(&self) -> f64 {
        match self {
            InputField::Funds => 0.0,
            InputField::NumTrades => 1.0,
            InputField::DailyRiskPct => 0.0,
            InputField::RiskReward => MIN_RISK_REWARD,
            InputField::PipSize => DEFAULT_PIP_SIZE,
            InputField::EntryPrice => 0.0,
            InputField::Notes => 0.0,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "funds" => Ok(InputField::Funds),
            "numtrades" | "trades" => Ok(InputField::NumTrades),
            "dailyriskpct" | "riskpct" => Ok(InputField::DailyRiskPct),
            "riskreward" | "rr" => Ok(InputField::RiskReward),
            "pipsize" | "pip" => Ok(InputField::PipSize),
            "entryprice" | "entry" => Ok(InputField::EntryPrice),
            "notes" => Ok(InputField::Notes),
            _ => Err(InputError::UnknownField(s.trim().to_string())),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or(value, 0.0).max(0.0)
}

fn positive_or_default(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        DEFAULT_PIP_SIZE
    }
}

// Fractional counts truncate toward zero; `as` saturates out-of-range values.
fn trade_count(value: f64) -> u32 {
    (value.trunc() as u32).clamp(1, MAX_NUM_TRADES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let input = RiskInput::default();
        assert_eq!(input.funds, 1000.0);
        assert_eq!(input.num_trades, 5);
        assert_eq!(input.daily_risk_pct, 2.0);
        assert_eq!(input.risk_reward, 2.0);
        assert_eq!(input.pip_size, 0.0001);
        assert_eq!(input.entry_price, 0.0);
        assert!(input.notes.is_empty());
    }

    #[test]
    fn test_clamped_leaves_valid_input_untouched() {
        let input = RiskInput {
            entry_price: 1.25,
            notes: "london open".to_string(),
            ..RiskInput::default()
        };
        assert_eq!(input.clone().clamped(), input);
    }

    #[test]
    fn test_clamped_negative_inputs() {
        let input = RiskInput {
            funds: -1000.0,
            num_trades: 0,
            daily_risk_pct: -5.0,
            risk_reward: -2.0,
            pip_size: -0.0001,
            entry_price: -1.1,
            notes: String::new(),
        }
        .clamped();

        assert_eq!(input.funds, 0.0);
        assert_eq!(input.num_trades, 1);
        assert_eq!(input.daily_risk_pct, 0.0);
        assert_eq!(input.risk_reward, MIN_RISK_REWARD);
        assert_eq!(input.pip_size, DEFAULT_PIP_SIZE);
        assert_eq!(input.entry_price, 0.0);
    }

    #[test]
    fn test_clamped_non_finite_inputs() {
        let input = RiskInput {
            funds: f64::NAN,
            daily_risk_pct: f64::INFINITY,
            risk_reward: f64::NAN,
            pip_size: f64::NEG_INFINITY,
            entry_price: f64::INFINITY,
            ..RiskInput::default()
        }
        .clamped();

        assert_eq!(input.funds, 0.0);
        assert_eq!(input.daily_risk_pct, 0.0);
        assert_eq!(input.risk_reward, MIN_RISK_REWARD);
        assert_eq!(input.pip_size, DEFAULT_PIP_SIZE);
        assert_eq!(input.entry_price, 0.0);
    }

    #[test]
    fn test_clamped_daily_risk_upper_bound() {
        let input = RiskInput {
            daily_risk_pct: 150.0,
            ..RiskInput::default()
        }
        .clamped();
        assert_eq!(input.daily_risk_pct, 100.0);
    }

    #[test]
    fn test_edit_numeric_fields() {
        let mut input = RiskInput::default();
        input.edit(InputField::Funds, "2500.5");
        input.edit(InputField::NumTrades, "3");
        input.edit(InputField::DailyRiskPct, "1.5");
        input.edit(InputField::RiskReward, "3");
        input.edit(InputField::PipSize, "0.01");
        input.edit(InputField::EntryPrice, " 150.25 ");

        assert_eq!(input.funds, 2500.5);
        assert_eq!(input.num_trades, 3);
        assert_eq!(input.daily_risk_pct, 1.5);
        assert_eq!(input.risk_reward, 3.0);
        assert_eq!(input.pip_size, 0.01);
        assert_eq!(input.entry_price, 150.25);
    }

    #[test]
    fn test_edit_non_numeric_falls_back() {
        let mut input = RiskInput::default();
        input.edit(InputField::Funds, "lots");
        input.edit(InputField::NumTrades, "");
        input.edit(InputField::DailyRiskPct, "two");
        input.edit(InputField::RiskReward, "?");
        input.edit(InputField::PipSize, "pip");
        input.edit(InputField::EntryPrice, "NaN");

        assert_eq!(input.funds, 0.0);
        assert_eq!(input.num_trades, 1);
        assert_eq!(input.daily_risk_pct, 0.0);
        assert_eq!(input.risk_reward, MIN_RISK_REWARD);
        assert_eq!(input.pip_size, DEFAULT_PIP_SIZE);
        assert_eq!(input.entry_price, 0.0);
    }

    #[test]
    fn test_edit_zero_takes_fallback() {
        let mut input = RiskInput::default();
        input.edit(InputField::PipSize, "0");
        input.edit(InputField::RiskReward, "0");
        input.edit(InputField::NumTrades, "0");

        assert_eq!(input.pip_size, DEFAULT_PIP_SIZE);
        assert_eq!(input.risk_reward, MIN_RISK_REWARD);
        assert_eq!(input.num_trades, 1);
    }

    #[test]
    fn test_edit_clamps_out_of_range() {
        let mut input = RiskInput::default();
        input.edit(InputField::NumTrades, "-4");
        input.edit(InputField::DailyRiskPct, "101");
        input.edit(InputField::RiskReward, "0.05");
        input.edit(InputField::Funds, "-10");

        assert_eq!(input.num_trades, 1);
        assert_eq!(input.daily_risk_pct, 100.0);
        assert_eq!(input.risk_reward, MIN_RISK_REWARD);
        assert_eq!(input.funds, 0.0);
    }

    #[test]
    fn test_edit_fractional_trades_truncate() {
        let mut input = RiskInput::default();
        input.edit(InputField::NumTrades, "3.9");
        assert_eq!(input.num_trades, 3);

        input.edit(InputField::NumTrades, "0.5");
        assert_eq!(input.num_trades, 1);
    }

    #[test]
    fn test_edit_caps_oversized_trade_count() {
        let mut input = RiskInput::default();
        input.edit(InputField::NumTrades, "1e12");
        assert_eq!(input.num_trades, MAX_NUM_TRADES);

        input.edit(InputField::NumTrades, "99999999999");
        assert_eq!(input.num_trades, MAX_NUM_TRADES);

        input.edit(InputField::NumTrades, "10000");
        assert_eq!(input.num_trades, 10_000);
    }

    #[test]
    fn test_clamped_caps_trade_count() {
        let input = RiskInput {
            num_trades: u32::MAX,
            ..RiskInput::default()
        }
        .clamped();
        assert_eq!(input.num_trades, MAX_NUM_TRADES);
    }

    #[test]
    fn test_edit_notes_keeps_raw_text() {
        let mut input = RiskInput::default();
        input.edit(InputField::Notes, "  NFP at 13:30  ");
        assert_eq!(input.notes, "  NFP at 13:30  ");
        assert_eq!(input.funds, DEFAULT_FUNDS);
    }

    #[test]
    fn test_apply_edit() {
        let mut input = RiskInput::default();
        let field = input.apply_edit("entry_price = 1.2345").unwrap();
        assert_eq!(field, InputField::EntryPrice);
        assert_eq!(input.entry_price, 1.2345);

        let field = input.apply_edit("notes=a=b").unwrap();
        assert_eq!(field, InputField::Notes);
        assert_eq!(input.notes, "a=b");
    }

    #[test]
    fn test_apply_edit_errors() {
        let mut input = RiskInput::default();
        assert_eq!(
            input.apply_edit("funds"),
            Err(InputError::MalformedEdit("funds".to_string()))
        );
        assert_eq!(
            input.apply_edit("leverage=10"),
            Err(InputError::UnknownField("leverage".to_string()))
        );
        assert_eq!(input, RiskInput::default());
    }

    #[test]
    fn test_field_from_str_spellings() {
        for (raw, field) in [
            ("funds", InputField::Funds),
            ("numTrades", InputField::NumTrades),
            ("num_trades", InputField::NumTrades),
            ("num-trades", InputField::NumTrades),
            ("TRADES", InputField::NumTrades),
            ("riskPct", InputField::DailyRiskPct),
            ("risk_reward", InputField::RiskReward),
            ("pipSize", InputField::PipSize),
            ("entry", InputField::EntryPrice),
            ("Notes", InputField::Notes),
        ] {
            assert_eq!(raw.parse::<InputField>().unwrap(), field, "{}", raw);
        }
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in InputField::ALL {
            assert_eq!(field.name().parse::<InputField>().unwrap(), field);
            assert_eq!(field.to_string(), field.name());
        }
    }

    #[test]
    fn test_serde_camel_case_and_defaults() {
        let input: RiskInput =
            serde_json::from_str(r#"{"funds": 5000, "numTrades": 2, "entryPrice": 1.3}"#).unwrap();
        assert_eq!(input.funds, 5000.0);
        assert_eq!(input.num_trades, 2);
        assert_eq!(input.entry_price, 1.3);
        assert_eq!(input.daily_risk_pct, DEFAULT_DAILY_RISK_PCT);
        assert_eq!(input.pip_size, DEFAULT_PIP_SIZE);

        let json = serde_json::to_string(&RiskInput::default()).unwrap();
        assert!(json.contains("dailyRiskPct"));
        assert!(json.contains("riskReward"));
    }
}
