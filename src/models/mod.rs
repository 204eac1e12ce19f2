// ABOUTME: Reshaping of raw MLB Stats API payloads into the summaries tools return
// ABOUTME: Schedule games, standings tables, player bios with stat splits, game feed extracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Stats API Models
//!
//! Stats API responses are deep, loosely typed documents. Rather than mirroring every
//! upstream field in a struct, the models here read the handful of fields each summary
//! needs through JSON pointers and leave the rest of the payload untouched.

use serde_json::Value;

/// Schedule, linescore, scoring plays, highlights, previous/next game
pub mod game;
/// Player bio and stat splits, name matching
pub mod player;
/// Division standings
pub mod standings;

pub use game::GameSummary;
pub use player::PlayerStatData;

/// String at a JSON pointer
#[must_use]
pub fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// String at a JSON pointer, or empty
#[must_use]
pub fn text_at(value: &Value, pointer: &str) -> String {
    str_at(value, pointer).unwrap_or_default().to_owned()
}

/// Integer at a JSON pointer
#[must_use]
pub fn i64_at(value: &Value, pointer: &str) -> Option<i64> {
    value.pointer(pointer).and_then(Value::as_i64)
}

/// Array at a JSON pointer, or an empty slice
#[must_use]
pub fn array_at<'a>(value: &'a Value, pointer: &str) -> &'a [Value] {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Clone of the value at a JSON pointer, or `null`
#[must_use]
pub fn value_at(value: &Value, pointer: &str) -> Value {
    value.pointer(pointer).cloned().unwrap_or(Value::Null)
}

/// Scalar rendered as display text (strings unquoted, numbers as-is, others empty)
#[must_use]
pub fn display_at(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
