// ABOUTME: Model Context Protocol server: wire schemas, shared resources, routing and transport
// ABOUTME: Only the stdio transport is provided
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

/// Method routing
pub mod request_processor;
/// Shared server state
pub mod resources;
/// Tool, prompt and content schemas
pub mod schema;
/// Newline-delimited stdio transport
pub mod stdio;

pub use request_processor::RequestProcessor;
pub use resources::ServerResources;
