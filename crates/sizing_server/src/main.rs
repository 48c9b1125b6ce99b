//! Trade risk sizing server
//!
//! REST API for daily risk plans.

use clap::Parser;
use sizing_server::config::{build_config, CliArgs as ConfigCliArgs};
use sizing_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Trade risk sizing server - REST API for daily risk plans
#[derive(Parser, Debug)]
#[command(name = "sizing_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "SIZING_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SIZING_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SIZING_LOG_LEVEL")]
    log_level: Option<String>,

    /// Largest trade count a plan request may schedule
    #[arg(long, env = "SIZING_MAX_TRADES")]
    max_trades: Option<u32>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            max_trades: args.max_trades,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Trade risk sizing server v{}", sizing_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        max_trades = %config.max_trades,
        allow_any_origin = %config.allow_any_origin,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.bind_address(), "Starting server");

    server.run().await?;

    Ok(())
}
