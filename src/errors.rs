// ABOUTME: Unified error type for adapters, upstream clients and the protocol layer
// ABOUTME: AppError carries an ErrorCode plus message and maps onto JSON-RPC error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Error Handling
//!
//! Every fallible operation in the crate returns [`AppResult`]. Tool adapters never
//! build error payloads themselves; the tool registry converts an [`AppError`] into
//! the wire error envelope in one place.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::errors::{ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS};

/// Standard error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller supplied an invalid value
    InvalidInput,
    /// A required argument was not supplied
    MissingRequiredField,
    /// Requested resource (endpoint, tool, prompt, player) does not exist
    ResourceNotFound,
    /// Upstream returned a response with nothing to report
    NoData,
    /// Upstream service failed or returned an unusable response
    ExternalServiceError,
    /// Invalid configuration value
    ConfigError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// JSON-RPC error code used when this error reaches the protocol layer
    #[must_use]
    pub const fn jsonrpc_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ResourceNotFound => {
                ERROR_INVALID_PARAMS
            }
            Self::NoData | Self::ExternalServiceError | Self::ConfigError | Self::InternalError => {
                ERROR_INTERNAL_ERROR
            }
        }
    }

    /// Short machine-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::MissingRequiredField => "missing_required_field",
            Self::ResourceNotFound => "resource_not_found",
            Self::NoData => "no_data",
            Self::ExternalServiceError => "external_service_error",
            Self::ConfigError => "config_error",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error with a category and a human-readable message
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable message, surfaced verbatim to MCP clients
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required argument
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required parameter: {field}"),
        )
    }

    /// Resource lookup failed
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Upstream answered but returned nothing to report
    #[must_use]
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoData, message)
    }

    /// Upstream service failure, prefixed with the service name
    #[must_use]
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization error: {err}"))
    }
}

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
