// ABOUTME: External API clients for the MLB Stats API and Baseball Savant
// ABOUTME: Hosts the Stats API endpoint catalog used for URL rendering and endpoint notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

/// MLB Stats API endpoint catalog
pub mod endpoints;
/// Baseball Savant CSV client
pub mod savant_client;
/// MLB Stats API client
pub mod statsapi_client;

pub use savant_client::SavantClient;
pub use statsapi_client::StatsApiClient;
