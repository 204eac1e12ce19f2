// ABOUTME: Successful tool output wrapper
// ABOUTME: Converts a JSON result into MCP text content plus structured content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{Content, ToolResponse};

/// Successful result of a tool execution
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// JSON payload
    pub content: Value,
}

impl ToolResult {
    /// Wrap a JSON payload
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self { content }
    }

    /// Serialize any value into a result
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn from_serializable<T: Serialize>(value: &T) -> AppResult<Self> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }

    /// MCP response: pretty JSON text, structured copy when the payload is an object
    #[must_use]
    pub fn into_response(self) -> ToolResponse {
        let text = serde_json::to_string_pretty(&self.content)
            .unwrap_or_else(|_| self.content.to_string());
        let structured_content = self.content.is_object().then_some(self.content);
        ToolResponse {
            content: vec![Content::text(text)],
            is_error: false,
            structured_content,
        }
    }
}
