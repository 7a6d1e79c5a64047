// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! AutoGuard REST API server binary

use ag_logging::{init, CliLogLevel, Level, LogFormat};
use ag_rest_server::{ScanConfig, Server, ServerConfig};
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Database path (SQLite)
    #[arg(short, long, default_value = ":memory:")]
    database: String,

    /// Enable permissive CORS for development
    #[arg(long)]
    cors: bool,

    /// Attempts given to each lint check before a violation is confirmed
    #[arg(long, default_value_t = 3)]
    lint_attempts: u32,

    /// Backoff delay in milliseconds before the second check attempt
    #[arg(long, default_value_t = 1000)]
    retry_base_delay_ms: u64,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: CliLogLevel,

    /// Log output format
    #[arg(long, default_value = "plaintext")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let default_level: Level = args.log_level.into();
    init("ag-rest-server", default_level, args.log_format)?;

    tracing::info!("Starting AutoGuard REST API server");

    let lint_attempts =
        NonZeroU32::new(args.lint_attempts).ok_or("lint attempts must be at least 1")?;

    // Create server configuration
    let config = ServerConfig {
        bind_addr: args.bind,
        database_path: args.database,
        enable_cors: args.cors,
        scan: ScanConfig {
            lint_attempts,
            retry_base_delay: Duration::from_millis(args.retry_base_delay_ms),
        },
    };

    // Create and start server
    let server = Server::new(config)?;
    server.run().await?;

    Ok(())
}
