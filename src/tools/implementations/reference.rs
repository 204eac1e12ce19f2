// ABOUTME: Generic Stats API access and endpoint reference tools
// ABOUTME: Implements get_stats, get_meta, get_available_endpoints and get_notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Reference Tools
//!
//! - `GetStatsTool` - raw access to any catalog endpoint
//! - `GetMetaTool` - lookup values (positions, stat groups, game types, ...)
//! - `GetAvailableEndpointsTool` - the endpoint catalog with URLs and parameters
//! - `GetNotesTool` - required/optional parameters and hints for one endpoint
//!
//! The last two never touch the network; they are rendered from
//! [`crate::external::endpoints`].

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::constants::stats_api::META_TYPES;
use crate::errors::{AppError, AppResult};
use crate::external::endpoints;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{ToolArgs, UpstreamParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

// ============================================================================
// GetStatsTool
// ============================================================================

/// Call any endpoint in the catalog with caller-supplied parameters
pub struct GetStatsTool;

#[async_trait]
impl McpTool for GetStatsTool {
    fn name(&self) -> &'static str {
        "get_stats"
    }

    fn description(&self) -> &'static str {
        "Access any endpoint in the MLB Stats API with custom parameters. Use get_available_endpoints to list endpoint names and get_notes for their parameters."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "endpoint",
                    PropertySchema::new(
                        "string",
                        "The API endpoint to query (e.g., 'teams', 'schedule', 'standings')",
                    ),
                ),
                (
                    "params",
                    PropertySchema::new("object", "Parameters to pass to the endpoint"),
                ),
            ],
            &["endpoint", "params"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let endpoint = args.req_str("endpoint")?;
        let params = args.opt_object("params")?.unwrap_or_default();

        debug!(endpoint = %endpoint, params = ?params, "Calling MLB Stats API endpoint");
        let result = ctx.stats_api.get(&endpoint, &params).await?;
        debug!(endpoint = %endpoint, "MLB Stats API response received");
        Ok(ToolResult::ok(result))
    }
}

// ============================================================================
// GetMetaTool
// ============================================================================

/// Lookup values for use in other queries
pub struct GetMetaTool;

#[async_trait]
impl McpTool for GetMetaTool {
    fn name(&self) -> &'static str {
        "get_meta"
    }

    fn description(&self) -> &'static str {
        "Get available values from the MLB Stats API for use in other queries (e.g., positions, statGroups, leagueLeaderTypes, gameTypes)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "type_name",
                    PropertySchema::new("string", "Type of metadata to retrieve")
                        .with_enum(META_TYPES),
                ),
                (
                    "fields",
                    PropertySchema::new("string", "Comma-separated fields to return"),
                ),
            ],
            &["type_name"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let type_name = args.req_str("type_name")?;
        if !META_TYPES.contains(&type_name.as_str()) {
            return Err(AppError::invalid_input(format!(
                "Unsupported meta type '{type_name}'. Available types: {}",
                META_TYPES.join(", ")
            )));
        }

        let params = UpstreamParams::new()
            .set("type", type_name.as_str())
            .set_opt("fields", args.opt_str("fields")?)
            .into_map();

        debug!(type_name = %type_name, "Retrieving metadata");
        Ok(ToolResult::ok(ctx.stats_api.get("meta", &params).await?))
    }
}

// ============================================================================
// GetAvailableEndpointsTool
// ============================================================================

/// List every catalog endpoint with its URL and parameters
pub struct GetAvailableEndpointsTool;

#[async_trait]
impl McpTool for GetAvailableEndpointsTool {
    fn name(&self) -> &'static str {
        "get_available_endpoints"
    }

    fn description(&self) -> &'static str {
        "Get information about all MLB Stats API endpoints that can be used with the get_stats tool"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(Vec::new(), &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let base_url = ctx.stats_api.base_url();
        let endpoints: Map<String, Value> = endpoints::catalog()
            .iter()
            .filter(|endpoint| endpoint.name != "meta")
            .map(|endpoint| (endpoint.name.to_owned(), endpoint.describe(base_url)))
            .collect();

        Ok(ToolResult::ok(json!({
            "endpoints": endpoints,
            "usage_note": "Use these endpoints with the get_stats tool by specifying the endpoint name and required parameters",
            "example": {
                "endpoint": "teams",
                "params": {"sportId": 1},
            },
        })))
    }
}

// ============================================================================
// GetNotesTool
// ============================================================================

/// Parameter notes for one endpoint
pub struct GetNotesTool;

#[async_trait]
impl McpTool for GetNotesTool {
    fn name(&self) -> &'static str {
        "get_notes"
    }

    fn description(&self) -> &'static str {
        "Retrieve notes for a given MLB Stats API endpoint, including required parameters and hints"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![(
                "endpoint",
                PropertySchema::new(
                    "string",
                    "The API endpoint to get notes for (e.g., 'stats', 'schedule', 'standings')",
                ),
            )],
            &["endpoint"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(&self, args: Value, _ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let endpoint = args.req_str("endpoint")?;
        Ok(ToolResult::ok(endpoints::find(&endpoint)?.notes()))
    }
}

/// Reference tools in listing order
#[must_use]
pub fn create_reference_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetStatsTool),
        Box::new(GetMetaTool),
        Box::new(GetAvailableEndpointsTool),
        Box::new(GetNotesTool),
    ]
}
