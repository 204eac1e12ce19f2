// ABOUTME: Tabular data model and JSON normalization for Baseball Savant exports
// ABOUTME: Parses CSV with the arrow reader, types each cell, and emits {data, count, columns}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Tabular Results
//!
//! Savant serves every leaderboard and pitch-level search as CSV. [`DataTable::from_csv`]
//! reads it with arrow's CSV reader (every column as nullable UTF-8) and types each cell
//! individually, since Savant columns routinely mix numbers with blanks.
//!
//! [`TabularResult`] is the JSON shape returned to clients:
//!
//! ```json
//! {"data": [{"col": 1}], "count": 1, "columns": ["col"]}
//! ```
//!
//! Empty strings, missing cells and non-finite floats all serialize as `null`.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Arc;

use arrow::array::{Array, StringArray};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::errors::{AppError, AppResult};

const CSV_BATCH_SIZE: usize = 8_192;
const UTF8_BOM: char = '\u{feff}';

/// A single typed cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent value (empty CSV field, short row, column missing from a chunk)
    Missing,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point; non-finite values normalize to `null`
    Float(f64),
    /// Anything else
    Text(String),
}

impl Cell {
    /// Type a raw CSV field: integer, then float, then boolean, else text
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if let Ok(int) = trimmed.parse::<i64>() {
            return Self::Int(int);
        }
        if looks_numeric(trimmed) {
            if let Ok(float) = trimmed.parse::<f64>() {
                return Self::Float(float);
            }
        }
        match trimmed {
            "true" | "True" | "TRUE" => Self::Bool(true),
            "false" | "False" | "FALSE" => Self::Bool(false),
            "nan" | "NaN" | "NAN" | "null" | "NULL" | "None" => Self::Missing,
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Whether this cell serializes to `null`
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(f) => !f.is_finite(),
            Self::Text(s) => s.is_empty(),
            Self::Bool(_) | Self::Int(_) => false,
        }
    }

    /// JSON value for this cell
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Missing => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Number((*i).into()),
            Self::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Text(s) if s.is_empty() => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Rejects words like "inf" or "nan" that `f64::from_str` would otherwise accept
fn looks_numeric(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
}

/// Column-named rows of typed cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Empty table with the given columns
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns an error if the row length differs from the column count
    pub fn push_row(&mut self, row: Vec<Cell>) -> AppResult<()> {
        if row.len() != self.columns.len() {
            return Err(AppError::internal(format!(
                "Row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse CSV text with a header row
    ///
    /// Duplicate header names get `.1`, `.2` suffixes; a leading UTF-8 BOM is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV is malformed
    pub fn from_csv(text: &str) -> AppResult<Self> {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let headers = dedupe_headers(read_headers(text)?);
        if headers.is_empty() {
            return Ok(Self::default());
        }

        let fields: Vec<Field> = headers
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect();
        let reader = ReaderBuilder::new(Arc::new(Schema::new(fields)))
            .with_header(true)
            .with_batch_size(CSV_BATCH_SIZE)
            .with_truncated_rows(true)
            .build(Cursor::new(text.as_bytes()))
            .map_err(|e| AppError::internal(format!("Failed to create CSV reader: {e}")))?;

        let mut table = Self::new(headers);
        for batch in reader {
            let batch =
                batch.map_err(|e| AppError::internal(format!("Failed to parse CSV: {e}")))?;
            let columns: Vec<&StringArray> = batch
                .columns()
                .iter()
                .map(|col| {
                    col.as_any().downcast_ref::<StringArray>().ok_or_else(|| {
                        AppError::internal("CSV column was not read as UTF-8 text")
                    })
                })
                .collect::<AppResult<_>>()?;

            for row in 0..batch.num_rows() {
                let cells = columns
                    .iter()
                    .map(|col| {
                        if col.is_null(row) {
                            Cell::Missing
                        } else {
                            Cell::parse(col.value(row))
                        }
                    })
                    .collect();
                table.rows.push(cells);
            }
        }

        debug!(
            rows = table.rows.len(),
            columns = table.columns.len(),
            "Parsed CSV table"
        );
        Ok(table)
    }

    /// Concatenate tables by column name
    ///
    /// Columns appear in first-seen order; cells for columns a table lacks are `Missing`.
    #[must_use]
    pub fn concat(tables: Vec<Self>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for table in &tables {
            for column in &table.columns {
                if seen.insert(column.clone()) {
                    columns.push(column.clone());
                }
            }
        }

        let mut combined = Self::new(columns);
        for table in tables {
            let positions: HashMap<&str, usize> = table
                .columns
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.as_str(), idx))
                .collect();
            let mapping: Vec<Option<usize>> = combined
                .columns
                .iter()
                .map(|name| positions.get(name.as_str()).copied())
                .collect();

            for row in table.rows {
                let cells = mapping
                    .iter()
                    .map(|pos| {
                        pos.and_then(|idx| row.get(idx).cloned())
                            .unwrap_or(Cell::Missing)
                    })
                    .collect();
                combined.rows.push(cells);
            }
        }
        combined
    }
}

fn read_headers(text: &str) -> AppResult<Vec<String>> {
    let (schema, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(text.as_bytes()), Some(0))
        .map_err(|e| AppError::internal(format!("Failed to read CSV header: {e}")))?;
    Ok(schema
        .fields()
        .iter()
        .map(|field| field.name().trim().to_owned())
        .collect())
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut emitted: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|name| {
            let unique = if emitted.contains(&name) {
                let suffix = suffixes.entry(name.clone()).or_insert(0);
                loop {
                    *suffix += 1;
                    let candidate = format!("{name}.{suffix}");
                    if !emitted.contains(&candidate) {
                        break candidate;
                    }
                }
            } else {
                name
            };
            emitted.insert(unique.clone());
            unique
        })
        .collect()
}

/// Row-oriented JSON rendering of a [`DataTable`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabularResult {
    /// One object per row, keyed by column name
    pub data: Vec<Map<String, Value>>,
    /// Number of rows in `data`
    pub count: usize,
    /// Column names in source order
    pub columns: Vec<String>,
}

impl TabularResult {
    /// Normalize a table; an empty table is an error carrying `empty_message`
    ///
    /// # Errors
    ///
    /// Returns a no-data error when the table has no rows or no columns
    pub fn from_table(table: &DataTable, empty_message: &str) -> AppResult<Self> {
        if table.is_empty() || table.columns.is_empty() {
            return Err(AppError::no_data(empty_message));
        }

        let data: Vec<Map<String, Value>> = table
            .rows
            .iter()
            .map(|row| {
                table
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| (column.clone(), cell.to_json()))
                    .collect()
            })
            .collect();

        Ok(Self {
            count: data.len(),
            data,
            columns: table.columns.clone(),
        })
    }

    /// Serialize to a JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_value(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
