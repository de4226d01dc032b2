//! Quote intake server
//!
//! Loads configuration from the environment (and an optional `.env` file)
//! and serves the quote form endpoints.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use quote_intake::{Config, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Quote request intake service
#[derive(Debug, Parser)]
#[command(name = "quote-server", version, about)]
struct Args {
    /// Bind host, overrides HOST
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Optional dotenv file loaded before reading configuration
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, env = "QUOTE_LOG_JSON")]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate().context("Invalid configuration")?;

    let warnings = config.warn_incomplete();
    if warnings > 0 {
        info!(warnings, "Starting with incomplete configuration");
    }

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let dotenv = dotenvy::from_path(&args.env_file);
    init_tracing(args.json_logs);

    match dotenv {
        Ok(()) => info!("Loaded environment from {}", args.env_file.display()),
        Err(e) if e.not_found() => {}
        Err(e) => error!("Failed to read {}: {}", args.env_file.display(), e),
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate Display keeps the context chain on one line
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
