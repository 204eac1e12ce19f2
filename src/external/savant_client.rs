// ABOUTME: HTTP client for Baseball Savant CSV exports (statcast search and leaderboards)
// ABOUTME: Returns raw CSV text; parsing into tables happens in formatters::table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! Baseball Savant Client

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::constants::upstream::SAVANT_SERVICE;
use crate::errors::{AppError, AppResult};
use crate::providers::SavantProvider;

/// Baseball Savant client
#[derive(Debug, Clone)]
pub struct SavantClient {
    http_client: Client,
    base_url: String,
}

impl SavantClient {
    /// Create a client over a shared `reqwest::Client`
    #[must_use]
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl SavantProvider for SavantClient {
    async fn fetch_csv(&self, path: &str, query: &[(String, String)]) -> AppResult<String> {
        let url = self.url_for(path);
        debug!(url = %url, query = ?query, "Calling Baseball Savant");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::external_service(SAVANT_SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                SAVANT_SERVICE,
                format!("Request to {path} failed with HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::external_service(SAVANT_SERVICE, e.to_string()))?;
        debug!(path, bytes = body.len(), "Baseball Savant response received");
        Ok(body)
    }
}
