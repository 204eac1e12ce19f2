// ABOUTME: Output shaping for tool results: tabular JSON and plain-text summaries
// ABOUTME: table normalizes Savant CSV; text renders boxscores, linescores, rosters and leaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! Output formatters
//!
//! - [`table`]: CSV ingest and the `{data, count, columns}` tabular result
//! - [`text`]: fixed-width text renderings of Stats API payloads

/// Tabular data model and normalization
pub mod table;
/// Plain-text renderers
pub mod text;

pub use table::{Cell, DataTable, TabularResult};
