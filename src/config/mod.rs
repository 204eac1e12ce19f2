// ABOUTME: Configuration module root
// ABOUTME: Environment-only configuration for logging, HTTP client and upstream URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

/// Environment-driven server configuration
pub mod environment;
