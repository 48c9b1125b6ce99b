//! Trade risk CLI
//!
//! Command-line front end for daily position sizing.
//!
//! # Commands
//!
//! - `trade-risk plan` - Derive and print a plan from flags and configured defaults
//! - `trade-risk session` - Edit inputs interactively, recomputing after each edit
//! - `trade-risk advice` - Print the daily trading best practices
//! - `trade-risk check` - Print the effective configuration

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use crate::commands::plan::PlanArgs;
use crate::config::{CliConfig, DEFAULT_CONFIG_PATH};
pub use error::{CliError, Result};

/// Daily risk and position sizing planner
#[derive(Parser)]
#[command(name = "trade-risk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive and print a daily risk plan
    Plan {
        /// Account balance
        #[arg(long, allow_hyphen_values = true)]
        funds: Option<String>,

        /// Planned number of trades
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        trades: Option<String>,

        /// Percent of funds to risk across the day
        #[arg(long, allow_hyphen_values = true)]
        risk_pct: Option<String>,

        /// Reward multiple per unit of risk
        #[arg(long, allow_hyphen_values = true)]
        rr: Option<String>,

        /// Pip size of the instrument
        #[arg(long, allow_hyphen_values = true)]
        pip_size: Option<String>,

        /// Entry price for SL/TP price levels
        #[arg(long, allow_hyphen_values = true)]
        entry: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Append the best-practice list
        #[arg(long)]
        advice: bool,
    },

    /// Edit inputs interactively from stdin
    Session,

    /// Print the daily trading best practices
    Advice,

    /// Check the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON and CSV output stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Plan {
            funds,
            trades,
            risk_pct,
            rr,
            pip_size,
            entry,
            notes,
            format,
            advice,
        } => commands::plan::run(
            &config,
            &PlanArgs {
                funds,
                trades,
                risk_pct,
                rr,
                pip_size,
                entry,
                notes,
                format,
                advice,
            },
        ),
        Commands::Session => commands::session::run(&config),
        Commands::Advice => commands::advice::run(),
        Commands::Check => commands::check::run(&cli.config, &config),
    }
}
