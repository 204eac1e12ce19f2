// ABOUTME: Tests for CSV ingest and tabular result normalization
// ABOUTME: Covers cell typing, header handling, concatenation and the empty-table error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};

use mlb_stats_mcp_server::errors::ErrorCode;
use mlb_stats_mcp_server::formatters::{Cell, DataTable, TabularResult};

mod common;

#[test]
fn test_cell_parse_types() {
    assert_eq!(Cell::parse(""), Cell::Missing);
    assert_eq!(Cell::parse("   "), Cell::Missing);
    assert_eq!(Cell::parse("42"), Cell::Int(42));
    assert_eq!(Cell::parse("-7"), Cell::Int(-7));
    assert_eq!(Cell::parse("97.3"), Cell::Float(97.3));
    assert_eq!(Cell::parse(".305"), Cell::Float(0.305));
    assert_eq!(Cell::parse("true"), Cell::Bool(true));
    assert_eq!(Cell::parse("False"), Cell::Bool(false));
    assert_eq!(Cell::parse("NaN"), Cell::Missing);
    assert_eq!(Cell::parse("FF"), Cell::Text("FF".to_owned()));
    assert_eq!(Cell::parse("inf"), Cell::Text("inf".to_owned()));
}

#[test]
fn test_absent_cells_serialize_to_null() {
    assert_eq!(Cell::Missing.to_json(), Value::Null);
    assert_eq!(Cell::Float(f64::NAN).to_json(), Value::Null);
    assert_eq!(Cell::Float(f64::INFINITY).to_json(), Value::Null);
    assert_eq!(Cell::Text(String::new()).to_json(), Value::Null);
    assert!(Cell::Float(f64::NEG_INFINITY).is_absent());
    assert!(!Cell::Int(0).is_absent());
    assert_eq!(Cell::Float(1.5).to_json(), json!(1.5));
}

#[test]
fn test_from_csv_reads_quoted_fields_and_missing_values() {
    let table = DataTable::from_csv(common::STATCAST_CSV).unwrap();

    assert_eq!(
        table.columns(),
        [
            "pitch_type",
            "game_date",
            "release_speed",
            "player_name",
            "batter",
            "launch_speed",
            "des"
        ]
    );
    assert_eq!(table.row_count(), 2);

    let first = &table.rows()[0];
    assert_eq!(first[0], Cell::Text("FF".to_owned()));
    assert_eq!(first[2], Cell::Float(97.3));
    assert_eq!(first[3], Cell::Text("Cole, Gerrit".to_owned()));
    assert_eq!(first[4], Cell::Int(592_450));
    assert_eq!(first[5], Cell::Missing);
}

#[test]
fn test_from_csv_strips_bom_and_dedupes_headers() {
    let csv = "\u{feff}player_id,year,pa,pa\n1,2024,500,510\n";
    let table = DataTable::from_csv(csv).unwrap();

    assert_eq!(table.columns(), ["player_id", "year", "pa", "pa.1"]);
    assert_eq!(table.rows()[0][3], Cell::Int(510));

    let table = DataTable::from_csv("a,a,a.1\n1,2,3\n").unwrap();
    assert_eq!(table.columns(), ["a", "a.1", "a.1.1"]);

    let result = TabularResult::from_table(&table, "No statcast data found").unwrap();
    assert_eq!(result.data[0].len(), 3);
    assert_eq!(result.data[0]["a"], json!(1));
    assert_eq!(result.data[0]["a.1"], json!(2));
    assert_eq!(result.data[0]["a.1.1"], json!(3));
}

#[test]
fn test_from_csv_short_rows_are_padded() {
    let csv = "a,b,c\n1,2\n";
    let table = DataTable::from_csv(csv).unwrap();

    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0][2], Cell::Missing);
}

#[test]
fn test_from_csv_empty_body() {
    assert!(DataTable::from_csv("").unwrap().is_empty());
    assert!(DataTable::from_csv("\u{feff}").unwrap().is_empty());

    let header_only = DataTable::from_csv("a,b\n").unwrap();
    assert!(header_only.is_empty());
}

#[test]
fn test_push_row_rejects_wrong_width() {
    let mut table = DataTable::new(vec!["a".to_owned(), "b".to_owned()]);
    assert!(table.push_row(vec![Cell::Int(1)]).is_err());
    table.push_row(vec![Cell::Int(1), Cell::Int(2)]).unwrap();
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_concat_aligns_columns_by_name() {
    let first = DataTable::from_csv("a,b\n1,2\n").unwrap();
    let second = DataTable::from_csv("b,c\n3,4\n").unwrap();

    let combined = DataTable::concat(vec![first, second]);

    assert_eq!(combined.columns(), ["a", "b", "c"]);
    assert_eq!(
        combined.rows(),
        [
            vec![Cell::Int(1), Cell::Int(2), Cell::Missing],
            vec![Cell::Missing, Cell::Int(3), Cell::Int(4)],
        ]
    );
}

#[test]
fn test_concat_skips_empty_chunks() {
    let combined = DataTable::concat(vec![
        DataTable::default(),
        DataTable::from_csv("a\n1\n").unwrap(),
        DataTable::default(),
    ]);
    assert_eq!(combined.columns(), ["a"]);
    assert_eq!(combined.row_count(), 1);
}

#[test]
fn test_tabular_result_shape() {
    let table = DataTable::from_csv(common::STATCAST_CSV).unwrap();
    let result = TabularResult::from_table(&table, "No statcast data found").unwrap();

    assert_eq!(result.count, 2);
    assert_eq!(result.count, result.data.len());
    assert_eq!(result.columns, table.columns());
    assert_eq!(result.data[0]["launch_speed"], Value::Null);
    assert_eq!(result.data[1]["launch_speed"], json!(104.2));
    assert_eq!(result.data[1]["des"], json!("Judge homers (30)."));

    let value = result.to_value().unwrap();
    assert_eq!(value["count"], json!(2));
    assert!(value["data"].is_array());
    assert!(value["columns"].is_array());
}

#[test]
fn test_tabular_result_null_and_empty_text_share_absent_marker() {
    let mut table = DataTable::new(vec![
        "player_name".to_owned(),
        "pitch_name".to_owned(),
        "release_speed".to_owned(),
    ]);
    table
        .push_row(vec![
            Cell::Text("Cole, Gerrit".to_owned()),
            Cell::Missing,
            Cell::Float(97.3),
        ])
        .unwrap();
    table
        .push_row(vec![
            Cell::Text("Cease, Dylan".to_owned()),
            Cell::Text(String::new()),
            Cell::Float(f64::NAN),
        ])
        .unwrap();

    let result = TabularResult::from_table(&table, "No statcast data found").unwrap();

    assert_eq!(result.count, 2);
    assert_eq!(result.count, result.data.len());
    assert_eq!(result.columns, ["player_name", "pitch_name", "release_speed"]);
    assert_eq!(result.data[0]["pitch_name"], Value::Null);
    assert_eq!(result.data[1]["pitch_name"], Value::Null);
    assert_eq!(result.data[0]["pitch_name"], result.data[1]["pitch_name"]);
    assert_eq!(result.data[1]["release_speed"], Value::Null);
    for row in &result.data {
        assert_eq!(row.len(), result.columns.len());
    }
}

#[test]
fn test_tabular_result_empty_table_is_error() {
    let err = TabularResult::from_table(&DataTable::default(), "No statcast data found")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoData);
    assert_eq!(err.message, "No statcast data found");

    let header_only = DataTable::from_csv("a,b\n").unwrap();
    assert!(TabularResult::from_table(&header_only, "empty").is_err());
}
