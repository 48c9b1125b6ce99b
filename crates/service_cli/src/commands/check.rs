//! Check command implementation
//!
//! Prints the effective configuration: where it came from and the input
//! record that commands start from.

use std::io::{self, Write};
use std::path::Path;

use sizing_core::engine::derive;
use sizing_core::types::InputField;

use crate::config::CliConfig;
use crate::Result;

/// Print the effective configuration to stdout
pub fn run(config_path: &str, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(config_path, config, &mut out)
}

/// Print the effective configuration to any writer
pub fn execute<W: Write>(config_path: &str, config: &CliConfig, out: &mut W) -> Result<()> {
    let source = if Path::new(config_path).exists() {
        "loaded"
    } else {
        "not found, using built-in defaults"
    };
    let input = config.base_input();
    let plan = derive(&input);

    writeln!(out, "trade-risk v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Config file: {} ({})", config_path, source)?;
    writeln!(out)?;
    writeln!(out, "Starting input:")?;
    for field in InputField::ALL {
        let value = match field {
            InputField::Funds => input.funds.to_string(),
            InputField::NumTrades => input.num_trades.to_string(),
            InputField::DailyRiskPct => input.daily_risk_pct.to_string(),
            InputField::RiskReward => input.risk_reward.to_string(),
            InputField::PipSize => input.pip_size.to_string(),
            InputField::EntryPrice => input.entry_price.to_string(),
            InputField::Notes => format!("{:?}", input.notes),
        };
        writeln!(out, "  {:<14} {}", field.name(), value)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Suggested max trades based on risk: {}",
        plan.suggested_max_trades
    )?;
    Ok(())
}
