// ABOUTME: HTTP client for the MLB Stats API (statsapi.mlb.com)
// ABOUTME: Renders catalog endpoints into requests and maps transport/status failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! MLB Stats API Client
//!
//! Thin wrapper over `reqwest` that resolves an endpoint name through the
//! [`endpoints`](super::endpoints) catalog. No caching and no retries: a failed request
//! is reported once and the caller decides what to do.
//!
//! # API Reference
//! The Stats API is undocumented; the endpoint table mirrors what the public site uses.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::endpoints;
use crate::constants::upstream::STATSAPI_SERVICE;
use crate::errors::{AppError, AppResult};
use crate::providers::StatsApiProvider;

/// Error body the Stats API returns on 4xx/5xx
#[derive(Debug, Deserialize)]
struct StatsApiErrorBody {
    #[serde(rename = "messageNumber")]
    message_number: Option<i64>,
    message: Option<String>,
}

/// MLB Stats API client
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    http_client: Client,
    base_url: String,
}

impl StatsApiClient {
    /// Create a client over a shared `reqwest::Client`
    #[must_use]
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Issue a GET for a catalog endpoint
    ///
    /// # Errors
    ///
    /// Returns invalid-input/not-found errors for bad endpoint usage and
    /// external-service errors for transport, status or decoding failures
    pub async fn get_endpoint(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
    ) -> AppResult<Value> {
        let request = endpoints::find(endpoint)?.render(&self.base_url, params)?;
        debug!(endpoint, url = %request.url, query = ?request.query, "Calling MLB Stats API");

        let response = self
            .http_client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| AppError::external_service(STATSAPI_SERVICE, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::external_service(STATSAPI_SERVICE, e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<StatsApiErrorBody>(&body)
                .ok()
                .and_then(|err| {
                    err.message.map(|message| match err.message_number {
                        Some(number) => format!("{message} (messageNumber {number})"),
                        None => message,
                    })
                })
                .unwrap_or_else(|| format!("Request to {endpoint} failed with HTTP {status}"));
            return Err(AppError::external_service(STATSAPI_SERVICE, detail));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(STATSAPI_SERVICE, format!("JSON parse error: {e}"))
        })?;
        debug!(endpoint, "MLB Stats API response received");
        Ok(value)
    }
}

#[async_trait]
impl StatsApiProvider for StatsApiClient {
    async fn get(&self, endpoint: &str, params: &Map<String, Value>) -> AppResult<Value> {
        self.get_endpoint(endpoint, params).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
