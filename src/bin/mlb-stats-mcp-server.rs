// ABOUTME: Server binary for the MLB Stats MCP server
// ABOUTME: Loads configuration from the environment and serves MCP over stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # MLB Stats MCP Server
//!
//! ## Usage
//!
//! ```bash
//! # Serve MCP over stdin/stdout
//! cargo run --bin mlb-stats-mcp-server
//!
//! # Debug logging to a file
//! MLB_STATS_LOG_LEVEL=debug MLB_STATS_LOG_FILE=/tmp/mlb.log cargo run --bin mlb-stats-mcp-server
//! ```

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use mlb_stats_mcp_server::config::environment::ServerConfig;
use mlb_stats_mcp_server::constants::protocol::{SERVER_NAME, SERVER_VERSION};
use mlb_stats_mcp_server::logging;
use mlb_stats_mcp_server::mcp::{stdio, ServerResources};

#[derive(Parser)]
#[command(
    name = "mlb-stats-mcp-server",
    version,
    about = "MLB Stats MCP Server",
    long_about = "Expose MLB Stats API and Baseball Savant data as MCP tools over stdio"
)]
struct ServerArgs {
    /// Transport to serve on (only stdio is supported)
    #[arg(long, default_value = "stdio")]
    transport: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();

    if args.transport != "stdio" {
        bail!("Unsupported transport '{}': only stdio is available", args.transport);
    }

    let config = ServerConfig::from_env().context("Failed to load configuration")?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;
    info!("=== {SERVER_NAME} {SERVER_VERSION} ===");
    info!("Configuration: {}", config.summary());

    let resources = ServerResources::from_config(config).context("Failed to build server")?;
    stdio::run_stdio(Arc::new(resources))
        .await
        .context("stdio transport failed")?;

    Ok(())
}
