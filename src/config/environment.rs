// ABOUTME: Environment-based configuration for the MLB stats MCP server
// ABOUTME: Parses log level/file/format, HTTP timeout and upstream base URLs from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Environment Configuration
//!
//! All configuration comes from environment variables. [`ServerConfig::from_env`] is
//! called once by the binary; the resulting value is passed down explicitly so that
//! nothing in the library reads the environment on its own.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::constants::env_config;
use crate::constants::upstream::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SAVANT_BASE_URL, DEFAULT_STATSAPI_BASE_URL, USER_AGENT,
};
use crate::errors::{AppError, AppResult};

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Very verbose tracing
    Trace,
    /// Request-level detail
    Debug,
    /// Lifecycle events (default)
    #[default]
    Info,
    /// Recoverable problems
    Warn,
    /// Failures only
    Error,
}

impl LogLevel {
    /// Parse a level name, falling back to `Info` for anything unrecognized
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" | "critical" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Invalid {}: '{other}' (expected 'text' or 'json')",
                env_config::LOG_FORMAT
            ))),
        }
    }
}

/// Logging configuration, built once at start-up
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingConfig {
    /// Minimum level emitted
    pub level: LogLevel,
    /// Append to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Output format
    pub format: LogFormat,
}

/// Outbound HTTP client settings shared by both upstream clients
#[derive(Debug, Clone, Serialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

/// Upstream base URLs
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamConfig {
    /// MLB Stats API base URL (no trailing slash)
    pub statsapi_base_url: String,
    /// Baseball Savant base URL (no trailing slash)
    pub savant_base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            statsapi_base_url: DEFAULT_STATSAPI_BASE_URL.to_owned(),
            savant_base_url: DEFAULT_SAVANT_BASE_URL.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// HTTP client settings
    pub http_client: HttpClientConfig,
    /// Upstream endpoints
    pub upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable is set to an unparseable value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns a config error when a value is present but invalid
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let logging = LoggingConfig {
            level: non_empty(env_config::LOG_LEVEL)
                .map(|v| LogLevel::from_str_or_default(&v))
                .unwrap_or_default(),
            file: non_empty(env_config::LOG_FILE).map(PathBuf::from),
            format: non_empty(env_config::LOG_FORMAT)
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        let timeout_secs = match non_empty(env_config::HTTP_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let upstream = UpstreamConfig {
            statsapi_base_url: match non_empty(env_config::STATSAPI_BASE_URL) {
                Some(raw) => validate_base_url(env_config::STATSAPI_BASE_URL, &raw)?,
                None => DEFAULT_STATSAPI_BASE_URL.to_owned(),
            },
            savant_base_url: match non_empty(env_config::SAVANT_BASE_URL) {
                Some(raw) => validate_base_url(env_config::SAVANT_BASE_URL, &raw)?,
                None => DEFAULT_SAVANT_BASE_URL.to_owned(),
            },
        };

        Ok(Self {
            logging,
            http_client: HttpClientConfig {
                timeout_secs,
                user_agent: USER_AGENT.to_owned(),
            },
            upstream,
        })
    }

    /// One-line summary for the start-up log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "log_level={} log_format={:?} log_file={} statsapi={} savant={} timeout={}s",
            self.logging.level,
            self.logging.format,
            self.logging
                .file
                .as_ref()
                .map_or_else(|| "stderr".to_owned(), |p| p.display().to_string()),
            self.upstream.statsapi_base_url,
            self.upstream.savant_base_url,
            self.http_client.timeout_secs,
        )
    }
}

fn parse_timeout(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::config(format!(
            "Invalid {}: '{raw}' (expected a positive number of seconds)",
            env_config::HTTP_TIMEOUT_SECS
        ))),
        Ok(secs) => Ok(secs),
    }
}

fn validate_base_url(key: &str, raw: &str) -> AppResult<String> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid {key}: '{raw}' ({e})")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Invalid {key}: '{raw}' (scheme must be http or https)"
        )));
    }
    Ok(raw.trim().trim_end_matches('/').to_owned())
}
