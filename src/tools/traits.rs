// ABOUTME: Core McpTool trait and ToolCapabilities flags for registered tools
// ABOUTME: Every tool declares its name, description, static input schema and capabilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Tool Trait
//!
//! Tools are stateless unit structs. The signature a client sees (`input_schema`) is
//! declared next to the handler and is independent of how errors are wrapped.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, ToolAnnotations};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;

bitflags! {
    /// What a tool touches when it runs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Read-only data access
        const READS_DATA = 0b0000_0001;
        /// Calls the MLB Stats API
        const STATS_API = 0b0000_0010;
        /// Calls Baseball Savant
        const SAVANT = 0b0000_0100;
        /// Returns a tabular result (`data`, `count`, `columns`)
        const TABULAR = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Whether the tool reaches an upstream service
    #[must_use]
    pub const fn is_networked(self) -> bool {
        self.intersects(Self::STATS_API.union(Self::SAVANT))
    }

    /// Annotations advertised in `tools/list`
    #[must_use]
    pub const fn annotations(self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: self.contains(Self::READS_DATA),
            open_world_hint: self.is_networked(),
        }
    }
}

/// A remotely invocable tool
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &'static str;

    /// Description shown to clients
    fn description(&self) -> &'static str;

    /// Declared argument schema
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Run the tool
    ///
    /// Failures are returned as errors; the registry turns them into the
    /// `Error in <name>: <message>` envelope.
    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult>;
}
