// ABOUTME: Upstream data provider traits for the MLB Stats API and Baseball Savant
// ABOUTME: Tool adapters depend on these seams so HTTP clients can be swapped for fakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Data Providers
//!
//! Two upstream collaborators back every tool:
//!
//! - [`StatsApiProvider`]: the MLB Stats API, addressed by endpoint name plus a
//!   parameter map (see [`crate::external::endpoints`])
//! - [`SavantProvider`]: Baseball Savant CSV exports, addressed by path plus query
//!
//! The HTTP implementations live in [`crate::external`]. Tests plug in in-memory
//! fakes through the same traits.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mlb_stats_mcp_server::config::environment::ServerConfig;
//! use mlb_stats_mcp_server::providers::{create_http_providers, StatsApiProvider};
//! use serde_json::Map;
//!
//! # async fn example() -> Result<(), mlb_stats_mcp_server::errors::AppError> {
//! let config = ServerConfig::from_env()?;
//! let (stats_api, _savant) = create_http_providers(&config)?;
//! let teams = stats_api.get("teams", &Map::new()).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::config::environment::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::external::savant_client::SavantClient;
use crate::external::statsapi_client::StatsApiClient;

/// MLB Stats API access by catalog endpoint name
#[async_trait]
pub trait StatsApiProvider: Send + Sync {
    /// Call `endpoint` with `params` and return the decoded JSON body
    async fn get(&self, endpoint: &str, params: &Map<String, Value>) -> AppResult<Value>;

    /// Base URL used when describing endpoints
    fn base_url(&self) -> &str;
}

/// Baseball Savant CSV export access
#[async_trait]
pub trait SavantProvider: Send + Sync {
    /// Fetch `path` with `query` and return the CSV body
    async fn fetch_csv(&self, path: &str, query: &[(String, String)]) -> AppResult<String>;
}

/// Build one shared reqwest client from configuration
///
/// # Errors
///
/// Returns a config error if the TLS backend cannot be initialized
pub fn build_http_client(config: &ServerConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.http_client.timeout_secs))
        .user_agent(config.http_client.user_agent.clone())
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))
}

/// Create the HTTP-backed providers sharing one connection pool
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built
pub fn create_http_providers(
    config: &ServerConfig,
) -> AppResult<(Arc<dyn StatsApiProvider>, Arc<dyn SavantProvider>)> {
    let client = build_http_client(config)?;
    let stats_api = StatsApiClient::new(client.clone(), &config.upstream.statsapi_base_url);
    let savant = SavantClient::new(client, &config.upstream.savant_base_url);
    Ok((Arc::new(stats_api), Arc::new(savant)))
}
