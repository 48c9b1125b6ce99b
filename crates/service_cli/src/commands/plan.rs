//! Plan command implementation
//!
//! Builds an input record from configured defaults and flags, derives the
//! plan once, and prints it.

use std::io::{self, Write};

use sizing_core::engine::derive;
use sizing_core::types::{InputField, RiskInput};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{write_advice, write_plan, OutputFormat};
use crate::Result;

/// Flags of the `plan` command
///
/// Numeric flags are kept as text so they go through the same fallback
/// rules as an edit typed into the form.
#[derive(Debug, Clone, Default)]
pub struct PlanArgs {
    pub funds: Option<String>,
    pub trades: Option<String>,
    pub risk_pct: Option<String>,
    pub rr: Option<String>,
    pub pip_size: Option<String>,
    pub entry: Option<String>,
    pub notes: Option<String>,
    pub format: String,
    pub advice: bool,
}

impl PlanArgs {
    fn edits(&self) -> [(InputField, Option<&str>); 7] {
        [
            (InputField::Funds, self.funds.as_deref()),
            (InputField::NumTrades, self.trades.as_deref()),
            (InputField::DailyRiskPct, self.risk_pct.as_deref()),
            (InputField::RiskReward, self.rr.as_deref()),
            (InputField::PipSize, self.pip_size.as_deref()),
            (InputField::EntryPrice, self.entry.as_deref()),
            (InputField::Notes, self.notes.as_deref()),
        ]
    }
}

/// Run the plan command against stdout
pub fn run(config: &CliConfig, args: &PlanArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(config, args, &mut out)
}

/// Run the plan command against any writer
pub fn execute<W: Write>(config: &CliConfig, args: &PlanArgs, out: &mut W) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let input = build_input(config, args);
    debug!(?input, "Effective input");

    let plan = derive(&input);
    info!(
        daily_risk_amount = plan.daily_risk_amount,
        trades = plan.trade_lines.len(),
        "Plan derived"
    );

    write_plan(out, format, &input, &plan)?;

    if args.advice {
        writeln!(out)?;
        write_advice(out)?;
    }
    Ok(())
}

/// Configured defaults overridden by every flag that was given
pub fn build_input(config: &CliConfig, args: &PlanArgs) -> RiskInput {
    let mut input = config.base_input();
    for (field, raw) in args.edits() {
        if let Some(raw) = raw {
            input.edit(field, raw);
        }
    }
    input
}
