// ABOUTME: Library entry point for the MLB Stats MCP server
// ABOUTME: Exposes MLB Stats API and Baseball Savant data as MCP tools over stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # MLB Stats MCP Server
//!
//! A Model Context Protocol (MCP) server that gives AI assistants access to baseball data
//! from two public sources:
//!
//! - **MLB Stats API**: schedules, standings, rosters, boxscores, player and league stats
//! - **Baseball Savant**: pitch-level Statcast searches and season leaderboards
//!
//! ## Architecture
//!
//! - **Tools**: one [`McpTool`](tools::McpTool) per operation, dispatched by the
//!   [`ToolRegistry`](tools::ToolRegistry), which owns the error envelope
//! - **Providers**: [`StatsApiProvider`](providers::StatsApiProvider) and
//!   [`SavantProvider`](providers::SavantProvider) seams with HTTP implementations in
//!   [`external`]
//! - **MCP**: JSON-RPC routing and the stdio transport
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mlb_stats_mcp_server::config::environment::ServerConfig;
//! use mlb_stats_mcp_server::errors::AppResult;
//! use mlb_stats_mcp_server::mcp::{stdio, ServerResources};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     stdio::run_stdio(resources).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Protocol constants, env-var names and upstream defaults
pub mod constants;

/// Unified error type
pub mod errors;

/// HTTP clients and the Stats API endpoint catalog
pub mod external;

/// Tabular and text output formatting
pub mod formatters;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Logging initialization
pub mod logging;

/// MCP server: schemas, routing and transport
pub mod mcp;

/// Reshaping of Stats API payloads
pub mod models;

/// MCP prompt templates
pub mod prompts;

/// Upstream provider traits
pub mod providers;

/// Tool trait, registry and implementations
pub mod tools;
