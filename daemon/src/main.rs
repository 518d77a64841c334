//! Vantage daemon binary
//!
//! Loads the check configuration once, then serves the dashboard and report
//! endpoints until interrupted. A missing or invalid configuration file is
//! the only fatal condition; everything after startup degrades per check.

#![allow(unused_crate_dependencies)]

use clap::Parser;
use daemon::{Daemon, DaemonError};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use vantage_core::{load_settings_from_toml_path, utils, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "vantaged")]
#[command(about = "Stateless health-aggregation dashboard daemon")]
#[command(version)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, env = "VANTAGE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8090)]
    port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> daemon::Result<()> {
    let args = Args::parse();
    utils::init_tracing(&args.log_level)?;

    let settings = load_settings_from_toml_path(&args.config)?;
    info!(
        "Loaded {} service checks and {} disk checks from {:?}",
        settings.services.len(),
        settings.system.disk_checks.len(),
        args.config
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| DaemonError::ServerError(format!("Invalid bind address: {}", e)))?;

    Daemon::new(settings, addr)
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received Ctrl+C, shutting down...");
        })
        .await
}
