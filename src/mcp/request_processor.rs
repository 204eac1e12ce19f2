// ABOUTME: MCP method routing for initialize, ping, tools/* and prompts/*
// ABOUTME: Turns one decoded JSON-RPC request into at most one response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Request Processor
//!
//! Protocol-level failures (unknown method, unknown tool or prompt, malformed params)
//! become JSON-RPC errors. Tool failures do not: the registry already turned them into
//! `isError: true` results.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use crate::constants::errors::{ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND, ERROR_PARSE};
use crate::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::mcp::resources::ServerResources;
use crate::prompts::{list_prompts, Prompt};

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn call_params(params: Option<Value>) -> AppResult<CallParams> {
    let params = params.ok_or_else(|| AppError::invalid_input("Missing params"))?;
    serde_json::from_value(params)
        .map_err(|e| AppError::invalid_input(format!("Invalid params: {e}")))
}

/// Routes MCP requests against shared resources
#[derive(Clone)]
pub struct RequestProcessor {
    resources: Arc<ServerResources>,
}

impl RequestProcessor {
    /// Processor over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources
    #[must_use]
    pub fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Decode and handle one line of input
    ///
    /// Returns `None` for notifications and blank lines.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to parse JSON-RPC message");
                return Some(JsonRpcResponse::error(
                    None,
                    ERROR_PARSE,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                ERROR_INVALID_PARAMS,
                format!("Invalid request: {e}"),
            )),
        }
    }

    /// Handle a decoded request
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.method.starts_with("notifications/") {
            debug!("Notification received");
            return None;
        }
        if request.is_notification() {
            debug!("Ignoring request without id");
            return None;
        }

        let id = request.id.clone();
        let result = match request.method.as_str() {
            "initialize" => Ok(Self::initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.resources.tools.list() })),
            "tools/call" => self.call_tool(request.params).await,
            "prompts/list" => Ok(json!({ "prompts": list_prompts() })),
            "prompts/get" => Self::get_prompt(request.params),
            other => {
                return Some(JsonRpcResponse::error(
                    id,
                    ERROR_METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                ));
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(err) => {
                warn!(error = %err, "Request failed");
                JsonRpcResponse::from_app_error(id, err)
            }
        })
    }

    fn initialize(params: Option<&Value>) -> Value {
        let protocol_version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(MCP_PROTOCOL_VERSION);
        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {"listChanged": false},
                "prompts": {"listChanged": false},
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
            },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> AppResult<Value> {
        let CallParams { name, arguments } = call_params(params)?;
        let ctx = self.resources.tool_context();
        let response = self.resources.tools.call(&name, arguments, &ctx).await?;
        Ok(serde_json::to_value(response)?)
    }

    fn get_prompt(params: Option<Value>) -> AppResult<Value> {
        let CallParams { name, arguments } = call_params(params)?;
        let result = Prompt::from_name(&name)?.render(&arguments)?;
        Ok(serde_json::to_value(result)?)
    }
}
