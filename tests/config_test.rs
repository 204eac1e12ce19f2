// ABOUTME: Tests for environment configuration parsing and validation
// ABOUTME: Covers defaults, overrides, invalid timeouts and URLs, and log level aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use serial_test::serial;

use mlb_stats_mcp_server::config::environment::{LogFormat, LogLevel, ServerConfig};
use mlb_stats_mcp_server::errors::{AppResult, ErrorCode};

fn config_from(pairs: &[(&str, &str)]) -> AppResult<ServerConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.logging.file.is_none());
    assert_eq!(config.http_client.timeout_secs, 30);
    assert_eq!(config.upstream.statsapi_base_url, "https://statsapi.mlb.com");
    assert_eq!(
        config.upstream.savant_base_url,
        "https://baseballsavant.mlb.com"
    );
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("MLB_STATS_LOG_LEVEL", "DEBUG"),
        ("MLB_STATS_LOG_FILE", "/tmp/mlb-stats.log"),
        ("MLB_STATS_LOG_FORMAT", "json"),
        ("MLB_STATS_HTTP_TIMEOUT_SECS", " 45 "),
        ("MLB_STATSAPI_BASE_URL", "http://localhost:8080/"),
        ("MLB_SAVANT_BASE_URL", "https://savant.example.test"),
    ])
    .unwrap();

    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/mlb-stats.log"))
    );
    assert_eq!(config.http_client.timeout_secs, 45);
    assert_eq!(config.upstream.statsapi_base_url, "http://localhost:8080");
    assert_eq!(
        config.upstream.savant_base_url,
        "https://savant.example.test"
    );

    let summary = config.summary();
    assert!(summary.contains("log_level=debug"));
    assert!(summary.contains("timeout=45s"));
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = config_from(&[
        ("MLB_STATS_LOG_FILE", "  "),
        ("MLB_STATS_HTTP_TIMEOUT_SECS", ""),
    ])
    .unwrap();

    assert!(config.logging.file.is_none());
    assert_eq!(config.http_client.timeout_secs, 30);
    assert!(config.summary().contains("log_file=stderr"));
}

#[test]
fn test_invalid_timeout() {
    for raw in ["0", "soon", "-5"] {
        let err = config_from(&[("MLB_STATS_HTTP_TIMEOUT_SECS", raw)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError, "{raw}");
        assert!(err.message.contains("MLB_STATS_HTTP_TIMEOUT_SECS"));
    }
}

#[test]
fn test_invalid_base_urls() {
    let err = config_from(&[("MLB_STATSAPI_BASE_URL", "not a url")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("MLB_STATSAPI_BASE_URL"));

    let err = config_from(&[("MLB_SAVANT_BASE_URL", "ftp://baseballsavant.mlb.com")]).unwrap_err();
    assert!(err.message.contains("scheme must be http or https"));
}

#[test]
fn test_invalid_log_format() {
    let err = config_from(&[("MLB_STATS_LOG_FORMAT", "xml")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Text);
}

#[test]
fn test_log_level_aliases() {
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("WARNING"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("critical"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    assert_eq!(LogLevel::Warn.to_string(), "warn");
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var("MLB_STATS_LOG_LEVEL", "error");
    env::set_var("MLB_STATS_HTTP_TIMEOUT_SECS", "12");

    let config = ServerConfig::from_env();

    env::remove_var("MLB_STATS_LOG_LEVEL");
    env::remove_var("MLB_STATS_HTTP_TIMEOUT_SECS");

    let config = config.unwrap();
    assert_eq!(config.logging.level, LogLevel::Error);
    assert_eq!(config.http_client.timeout_secs, 12);
}

#[test]
#[serial]
fn test_from_env_rejects_bad_timeout() {
    env::set_var("MLB_STATS_HTTP_TIMEOUT_SECS", "0");
    let result = ServerConfig::from_env();
    env::remove_var("MLB_STATS_HTTP_TIMEOUT_SECS");

    assert!(result.is_err());
}
