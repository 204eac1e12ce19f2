// ABOUTME: Logging initialization built on tracing-subscriber
// ABOUTME: Installs an EnvFilter + fmt layer writing text or JSON to stderr or an append-only file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Logging
//!
//! stdout carries the MCP protocol, so logs go to stderr unless a log file is
//! configured. [`init_logging`] is called exactly once by the binary.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, registry, EnvFilter};

use crate::config::environment::{LogFormat, LogLevel, LoggingConfig};
use crate::errors::{AppError, AppResult};

/// HTTP stack crates that are noisy below `warn`
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Build the filter for a configured level
///
/// # Errors
///
/// Returns a config error if the directive string cannot be parsed
pub fn build_filter(level: LogLevel) -> AppResult<EnvFilter> {
    let mut directives = level.as_directive().to_owned();
    for target in QUIET_TARGETS {
        directives.push(',');
        directives.push_str(target);
        directives.push_str("=warn");
    }
    EnvFilter::try_new(&directives)
        .map_err(|e| AppError::config(format!("Invalid log filter '{directives}': {e}")))
}

/// Open (creating if needed) a log file in append mode
///
/// # Errors
///
/// Returns a config error if the file cannot be opened
pub fn open_log_file(path: &Path) -> AppResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AppError::config(format!("Cannot open log file {}: {e}", path.display()))
        })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is already installed
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = build_filter(config.level)?;

    let writer = match &config.file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
        None => BoxMakeWriter::new(io::stderr),
    };

    // No ANSI colors: stderr is captured verbatim by MCP clients
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Text => registry().with(filter).with(layer).try_init(),
        LogFormat::Json => registry().with(filter).with(layer.json()).try_init(),
    };
    installed.map_err(|e| AppError::internal(format!("Failed to install logger: {e}")))?;

    match &config.file {
        Some(path) => info!(
            level = %config.level,
            "Logging configured at {} level, writing to {}",
            config.level,
            path.display()
        ),
        None => info!(
            level = %config.level,
            "Logging configured at {} level, writing to stderr",
            config.level
        ),
    }
    Ok(())
}
