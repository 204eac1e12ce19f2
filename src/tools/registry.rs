// ABOUTME: Tool registry and dispatcher with the uniform error envelope
// ABOUTME: Looks tools up by name, runs them, and converts any failure to "Error in <name>: ..."
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Tool Registry
//!
//! The registry is the only place that turns a tool failure into a wire result. A
//! failing tool yields an MCP result with `isError: true`, text
//! `Error in <name>: <message>`, and structured content carrying the same text under
//! `error` together with the tool name and the original arguments.

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::{debug, error, instrument};

use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{Content, ToolResponse, ToolSchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::implementations::{
    create_game_tools, create_player_tools, create_reference_tools, create_statcast_tools,
    create_team_tools,
};
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Registered tools in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full tool catalog
    ///
    /// # Errors
    ///
    /// Returns an error if two tools share a name
    pub fn with_default_tools() -> AppResult<Self> {
        let mut registry = Self::new();
        for tool in create_reference_tools()
            .into_iter()
            .chain(create_game_tools())
            .chain(create_player_tools())
            .chain(create_team_tools())
            .chain(create_statcast_tools())
        {
            registry.register(tool)?;
        }
        debug!(tool_count = registry.len(), "Tool registry initialized");
        Ok(registry)
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns an error if a tool with the same name is already registered
    pub fn register(&mut self, tool: Box<dyn McpTool>) -> AppResult<()> {
        let name = tool.name();
        if self.index.contains_key(name) {
            return Err(AppError::internal(format!(
                "Tool '{name}' is already registered"
            )));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn McpTool> {
        self.index.get(name).map(|&idx| self.tools[idx].as_ref())
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Names of tools having every flag in `capabilities`
    #[must_use]
    pub fn names_with(&self, capabilities: ToolCapabilities) -> Vec<&'static str> {
        self.tools
            .iter()
            .filter(|tool| tool.capabilities().contains(capabilities))
            .map(|tool| tool.name())
            .collect()
    }

    /// Schemas for `tools/list`
    #[must_use]
    pub fn list(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
                annotations: Some(tool.capabilities().annotations()),
            })
            .collect()
    }

    /// Invoke a tool by name
    ///
    /// Tool failures are returned as `Ok` error envelopes; only an unknown tool name
    /// is an `Err`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no tool has this name
    #[instrument(skip(self, args, ctx), fields(tool = %name))]
    pub async fn call(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResponse> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::not_found(format!("Unknown tool: {name}")))?;

        debug!(arguments = %args, "Executing tool");
        match tool.execute(args.clone(), ctx).await {
            Ok(result) => {
                debug!("Tool completed");
                Ok(result.into_response())
            }
            Err(err) => {
                error!(tool = name, error = %err, code = %err.code, "Tool execution failed");
                Ok(error_envelope(name, &err, args))
            }
        }
    }
}

/// The uniform failure result for `name`
#[must_use]
pub fn error_envelope(name: &str, err: &AppError, arguments: Value) -> ToolResponse {
    let message = format!("Error in {name}: {err}");
    ToolResponse {
        content: vec![Content::text(message.clone())],
        is_error: true,
        structured_content: Some(json!({
            "error": message,
            "tool": name,
            "arguments": arguments,
        })),
    }
}
