//! CLI configuration file
//!
//! An optional TOML file supplies the input values used when a flag is
//! omitted:
//!
//! ```toml
//! [defaults]
//! funds = 2500
//! num_trades = 4
//! daily_risk_pct = 1.5
//! risk_reward = 3
//! pip_size = 0.01
//! ```
//!
//! Configured values pass through the same boundary rules as typed input.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sizing_core::types::{InputField, RiskInput};
use tracing::debug;

use crate::{CliError, Result};

/// Config path used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "trade-risk.toml";

/// Parsed CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Input defaults applied before command-line flags
    pub defaults: InputDefaults,
}

/// The `[defaults]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputDefaults {
    pub funds: Option<f64>,
    pub num_trades: Option<f64>,
    pub daily_risk_pct: Option<f64>,
    pub risk_reward: Option<f64>,
    pub pip_size: Option<f64>,
    pub entry_price: Option<f64>,
    pub notes: Option<String>,
}

impl CliConfig {
    /// Load the configuration at `path`
    ///
    /// A missing file at [`DEFAULT_CONFIG_PATH`] yields the built-in
    /// defaults. Any other missing path is an error.
    pub fn load(path: &str) -> Result<Self> {
        let path_ref = Path::new(path);
        if !path_ref.exists() {
            if path == DEFAULT_CONFIG_PATH {
                debug!(path, "No configuration file, using built-in defaults");
                return Ok(Self::default());
            }
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path
            )));
        }

        let content = std::fs::read_to_string(path_ref)
            .map_err(|e| CliError::Config(format!("Failed to read {}: {}", path, e)))?;
        let config = Self::from_toml(&content)?;
        debug!(path, ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// The starting input for commands, with configured values applied
    pub fn base_input(&self) -> RiskInput {
        self.defaults.apply(RiskInput::default())
    }
}

impl InputDefaults {
    /// Apply every configured value to `input` through the boundary rules
    pub fn apply(&self, mut input: RiskInput) -> RiskInput {
        let numeric = [
            (InputField::Funds, self.funds),
            (InputField::NumTrades, self.num_trades),
            (InputField::DailyRiskPct, self.daily_risk_pct),
            (InputField::RiskReward, self.risk_reward),
            (InputField::PipSize, self.pip_size),
            (InputField::EntryPrice, self.entry_price),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                input.edit(field, &value.to_string());
            }
        }
        if let Some(notes) = &self.notes {
            input.edit(InputField::Notes, notes);
        }
        input
    }
}
