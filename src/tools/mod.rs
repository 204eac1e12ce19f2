// ABOUTME: Tool layer: trait, registry/dispatcher, argument helpers and implementations
// ABOUTME: Adapters return AppResult; the registry owns the wire error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Tools
//!
//! Every remotely invocable operation is an [`McpTool`](traits::McpTool) registered in
//! the [`ToolRegistry`](registry::ToolRegistry).

/// Per-call execution context
pub mod context;
/// Tool implementations
pub mod implementations;
/// Argument extraction helpers
pub mod params;
/// Name lookup and dispatch
pub mod registry;
/// Successful tool output
pub mod result;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
