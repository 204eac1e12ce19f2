// ABOUTME: JSON-RPC 2.0 message types used by the MCP stdio transport
// ABOUTME: Request, response and error structs plus constructors for common replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! JSON-RPC 2.0 foundation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::protocol::JSONRPC_VERSION;
use crate::errors::AppError;

/// Incoming JSON-RPC request or notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, expected to be "2.0"
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Request id; absent for notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

fn default_version() -> String {
    JSONRPC_VERSION.to_owned()
}

impl JsonRpcRequest {
    /// Notifications carry no id and never receive a response
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Optional structured detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<AppError> for JsonRpcError {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.jsonrpc_code(),
            message: err.message,
            data: None,
        }
    }
}

/// Outgoing JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version
    pub jsonrpc: String,
    /// Successful result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    /// Id of the request this answers (null when the request id was unreadable)
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    /// Successful response
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Error response with an explicit code
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }

    /// Error response built from an application error
    #[must_use]
    pub fn from_app_error(id: Option<Value>, err: AppError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(err.into()),
            id,
        }
    }
}
