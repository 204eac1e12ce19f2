// ABOUTME: Shared server resources built once at start-up and handed to every request
// ABOUTME: Holds configuration, upstream providers and the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::providers::{create_http_providers, SavantProvider, StatsApiProvider};
use crate::tools::context::ToolExecutionContext;
use crate::tools::registry::ToolRegistry;

/// Read-only state shared by all in-flight requests
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// MLB Stats API provider
    pub stats_api: Arc<dyn StatsApiProvider>,
    /// Baseball Savant provider
    pub savant: Arc<dyn SavantProvider>,
    /// Registered tools
    pub tools: ToolRegistry,
}

impl ServerResources {
    /// Resources over explicit providers with the full tool catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the tool registry cannot be built
    pub fn new(
        config: ServerConfig,
        stats_api: Arc<dyn StatsApiProvider>,
        savant: Arc<dyn SavantProvider>,
    ) -> AppResult<Self> {
        Ok(Self {
            config: Arc::new(config),
            stats_api,
            savant,
            tools: ToolRegistry::with_default_tools()?,
        })
    }

    /// Resources backed by the HTTP clients
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the tool registry cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let (stats_api, savant) = create_http_providers(&config)?;
        Self::new(config, stats_api, savant)
    }

    /// Execution context for one tool call, dated today
    #[must_use]
    pub fn tool_context(&self) -> ToolExecutionContext {
        ToolExecutionContext::new(Arc::clone(&self.stats_api), Arc::clone(&self.savant))
    }
}
