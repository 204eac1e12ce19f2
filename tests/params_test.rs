// ABOUTME: Tests for tool argument extraction, defaults and date parsing
// ABOUTME: Covers camelCase fallback, integer strings and strict type errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::json;

use mlb_stats_mcp_server::errors::ErrorCode;
use mlb_stats_mcp_server::tools::params::{format_date, parse_date, ToolArgs, UpstreamParams};

mod common;

#[test]
fn test_parse_date_formats() {
    assert_eq!(
        parse_date("date", "2024-07-04").unwrap(),
        common::date("2024-07-04")
    );
    assert_eq!(
        parse_date("date", "07/04/2024").unwrap(),
        common::date("2024-07-04")
    );
    assert_eq!(
        parse_date("date", " 2024-07-04 ").unwrap(),
        common::date("2024-07-04")
    );

    let err = parse_date("start_dt", "July 4th").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("start_dt"));
    assert!(err.message.contains("July 4th"));
}

#[test]
fn test_format_date() {
    assert_eq!(format_date(common::date("2024-03-09")), "2024-03-09");
}

#[test]
fn test_args_must_be_object_or_null() {
    assert!(ToolArgs::new(&json!(null)).is_ok());
    assert!(ToolArgs::new(&json!({})).is_ok());
    let err = ToolArgs::new(&json!([1, 2])).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_null_args_read_as_absent() {
    let value = json!(null);
    let args = ToolArgs::new(&value).unwrap();
    assert_eq!(args.opt_str("name").unwrap(), None);
    assert_eq!(args.i64_or("limit", 10).unwrap(), 10);
}

#[test]
fn test_camel_case_fallback() {
    let value = json!({"teamId": 147, "game_id": 1, "opponent_id": null, "opponentId": 111});
    let args = ToolArgs::new(&value).unwrap();

    assert_eq!(args.req_i64("team_id").unwrap(), 147);
    assert_eq!(args.req_i64("game_id").unwrap(), 1);
    assert_eq!(args.opt_i64("opponent_id").unwrap(), Some(111));
}

#[test]
fn test_integers_accept_numeric_strings() {
    let value = json!({"season": "2024", "limit": 5, "bad": "abc", "float": 1.5});
    let args = ToolArgs::new(&value).unwrap();

    assert_eq!(args.req_i64("season").unwrap(), 2024);
    assert_eq!(args.i64_or("limit", 10).unwrap(), 5);
    assert_eq!(
        args.opt_i64("bad").unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert!(args.opt_i64("float").is_err());
}

#[test]
fn test_required_fields() {
    let value = json!({"name": "   "});
    let args = ToolArgs::new(&value).unwrap();

    let err = args.req_str("name").unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.message, "Missing required parameter: name");

    let err = args.req_i64("player_id").unwrap_err();
    assert_eq!(err.message, "Missing required parameter: player_id");
}

#[test]
fn test_strings_accept_numbers_but_not_objects() {
    let value = json!({"season": 2024, "group": {"x": 1}});
    let args = ToolArgs::new(&value).unwrap();

    assert_eq!(args.opt_str("season").unwrap().as_deref(), Some("2024"));
    assert!(args.opt_str("group").is_err());
}

#[test]
fn test_booleans() {
    let value = json!({"verbose": false, "parallel": "TRUE", "bad": 1});
    let args = ToolArgs::new(&value).unwrap();

    assert!(!args.bool_or("verbose", true).unwrap());
    assert!(args.bool_or("parallel", false).unwrap());
    assert!(args.bool_or("missing", true).unwrap());
    assert!(args.bool_or("bad", true).is_err());
}

#[test]
fn test_dates_and_objects() {
    let value = json!({"date": "07/04/2024", "empty": "", "params": {"sportId": 1}, "nope": 3});
    let args = ToolArgs::new(&value).unwrap();

    assert_eq!(
        args.opt_date("date").unwrap(),
        Some(common::date("2024-07-04"))
    );
    assert_eq!(args.opt_date("empty").unwrap(), None);
    assert_eq!(args.opt_object("params").unwrap().unwrap()["sportId"], json!(1));
    assert!(args.opt_object("nope").is_err());
}

#[test]
fn test_upstream_params_skip_absent_values() {
    let map = UpstreamParams::new()
        .set("sportId", 1)
        .set_opt("teamId", Some(147))
        .set_opt::<i64>("opponentId", None)
        .set("hydrate", "person")
        .into_map();

    assert_eq!(map.len(), 3);
    assert_eq!(map["teamId"], json!(147));
    assert!(!map.contains_key("opponentId"));
}
