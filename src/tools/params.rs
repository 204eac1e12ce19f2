// ABOUTME: Typed extraction of tool arguments with defaults and date validation
// ABOUTME: Accepts snake_case names and their camelCase spelling for every parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Tool Arguments
//!
//! MCP clients send arguments as a JSON object. [`ToolArgs`] reads it leniently where
//! LLM clients commonly drift (numbers sent as strings, `teamId` instead of `team_id`)
//! and strictly everywhere else: a value of the wrong shape is an error, never a
//! silent default.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};

/// Accepted input date formats
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a `YYYY-MM-DD` or `MM/DD/YYYY` date
///
/// # Errors
///
/// Returns an invalid-input error naming the parameter when the date does not parse
pub fn parse_date(param: &str, raw: &str) -> AppResult<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "Invalid date for '{param}': '{raw}' (expected YYYY-MM-DD or MM/DD/YYYY)"
            ))
        })
}

/// Format a date the way both upstreams expect it
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn camel_case(key: &str) -> Option<String> {
    if !key.contains('_') {
        return None;
    }
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

/// Borrowed view over a tool's argument object
#[derive(Debug, Clone, Copy)]
pub struct ToolArgs<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> ToolArgs<'a> {
    /// Wrap call arguments; `null` is treated as an empty object
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the arguments are not an object
    pub fn new(args: &'a Value) -> AppResult<Self> {
        match args {
            Value::Object(map) => Ok(Self { map: Some(map) }),
            Value::Null => Ok(Self { map: None }),
            other => Err(AppError::invalid_input(format!(
                "Arguments must be a JSON object, got {other}"
            ))),
        }
    }

    /// Raw value for `key` (or its camelCase spelling), ignoring nulls
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        let map = self.map?;
        map.get(key).filter(|v| !v.is_null()).or_else(|| {
            camel_case(key)
                .and_then(|camel| map.get(&camel))
                .filter(|v| !v.is_null())
        })
    }

    /// Optional string; numbers are accepted and stringified
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for non-scalar values
    pub fn opt_str(&self, key: &str) -> AppResult<Option<String>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(AppError::invalid_input(format!(
                "Parameter '{key}' must be a string, got {other}"
            ))),
        }
    }

    /// Required string
    ///
    /// # Errors
    ///
    /// Returns an error when missing, empty or not a string
    pub fn req_str(&self, key: &str) -> AppResult<String> {
        match self.opt_str(key)? {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(AppError::missing_field(key)),
        }
    }

    /// String with a default
    ///
    /// # Errors
    ///
    /// Returns an error when present but not a string
    pub fn str_or(&self, key: &str, default: &str) -> AppResult<String> {
        Ok(self.opt_str(key)?.unwrap_or_else(|| default.to_owned()))
    }

    /// Optional integer; integral strings are accepted
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for non-integral values
    pub fn opt_i64(&self, key: &str) -> AppResult<Option<i64>> {
        let invalid = |v: &Value| {
            AppError::invalid_input(format!("Parameter '{key}' must be an integer, got {v}"))
        };
        match self.raw(key) {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(value)),
            Some(value @ Value::String(s)) => {
                s.trim().parse::<i64>().map(Some).map_err(|_| invalid(value))
            }
            Some(other) => Err(invalid(other)),
        }
    }

    /// Required integer
    ///
    /// # Errors
    ///
    /// Returns an error when missing or not an integer
    pub fn req_i64(&self, key: &str) -> AppResult<i64> {
        self.opt_i64(key)?
            .ok_or_else(|| AppError::missing_field(key))
    }

    /// Integer with a default
    ///
    /// # Errors
    ///
    /// Returns an error when present but not an integer
    pub fn i64_or(&self, key: &str, default: i64) -> AppResult<i64> {
        Ok(self.opt_i64(key)?.unwrap_or(default))
    }

    /// Boolean with a default; `"true"`/`"false"` strings are accepted
    ///
    /// # Errors
    ///
    /// Returns an error for anything else
    pub fn bool_or(&self, key: &str, default: bool) -> AppResult<bool> {
        match self.raw(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(true),
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(false),
            Some(other) => Err(AppError::invalid_input(format!(
                "Parameter '{key}' must be a boolean, got {other}"
            ))),
        }
    }

    /// Optional object
    ///
    /// # Errors
    ///
    /// Returns an error when present but not an object
    pub fn opt_object(&self, key: &str) -> AppResult<Option<Map<String, Value>>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(other) => Err(AppError::invalid_input(format!(
                "Parameter '{key}' must be an object, got {other}"
            ))),
        }
    }

    /// Optional validated date
    ///
    /// # Errors
    ///
    /// Returns an error when present but not a valid date
    pub fn opt_date(&self, key: &str) -> AppResult<Option<NaiveDate>> {
        self.opt_str(key)?
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_date(key, &s))
            .transpose()
    }
}

/// Builder for the parameter map handed to [`StatsApiProvider::get`](crate::providers::StatsApiProvider::get)
#[derive(Debug, Clone, Default)]
pub struct UpstreamParams {
    map: Map<String, Value>,
}

impl UpstreamParams {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_owned(), value.into());
        self
    }

    /// Set a parameter only when a value is present
    #[must_use]
    pub fn set_opt<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Finished parameter map
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}
