//! netmon-live - live console view of a network traffic monitor
//!
//! Pulls snapshots and follows pushed updates until interrupted.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use netmon_live::config::Config;
use netmon_live::utils::logging::{LogFormat, LogLevel, init_logging};
use netmon_live::{LiveClient, LogPresenter, build_info};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "netmon-live", version, about = "Live client for a network traffic monitor")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Monitor base URL
    #[arg(short, long, env = "NETMON_SERVER_URL", value_name = "URL")]
    server: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Only follow pushed updates; no periodic snapshots
    #[arg(long)]
    no_poll: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())
        .await
        .context("failed to load configuration")?;

    apply_overrides(&mut config, &args)?;
    config.validate().context("invalid configuration")?;

    init_logging(config.logging()).context("failed to initialise logging")?;

    let build = build_info();
    info!(
        "netmon-live {} (git {}, built {})",
        build.version, build.git_hash, build.build_time
    );

    let presenter = LogPresenter::new(config.display().clone());
    let mut client = LiveClient::new(config.client, presenter)?;

    let handle = client.handle();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, shutting down"),
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
        let _ = handle.shutdown();
    });

    client.run().await?;
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) -> anyhow::Result<()> {
    if let Some(server) = &args.server {
        config.client.server.base_url = server.clone();
    }
    if let Some(level) = &args.log_level {
        config.client.logging.level = level.parse::<LogLevel>()?;
    }
    if args.json_logs {
        config.client.logging.format = LogFormat::Json;
    }
    if args.no_poll {
        config.client.polling.enabled = false;
    }
    Ok(())
}
