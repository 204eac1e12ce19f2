// ABOUTME: Tests for the Baseball Savant backed Statcast tools
// ABOUTME: Covers date chunking, chunk ordering, query construction and argument validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};

use mlb_stats_mcp_server::tools::implementations::statcast::{date_chunks, search_query, PlayerType};
use mlb_stats_mcp_server::tools::{ToolExecutionContext, ToolRegistry};

mod common;
use common::{query_value, FakeSavant};

async fn call(ctx: &ToolExecutionContext, name: &str, args: Value) -> (bool, String, Value) {
    let registry = ToolRegistry::with_default_tools().unwrap();
    let response = registry.call(name, args, ctx).await.unwrap();
    let text = response.content[0].as_text().to_owned();
    (
        response.is_error,
        text,
        response.structured_content.unwrap_or(Value::Null),
    )
}

fn game_dates(result: &Value) -> Vec<String> {
    result["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["game_date"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// Date chunking
// ============================================================================

#[test]
fn test_date_chunks_are_inclusive_windows() {
    let chunks = date_chunks(common::date("2024-07-01"), common::date("2024-07-12"), 5);

    assert_eq!(
        chunks,
        vec![
            (common::date("2024-07-01"), common::date("2024-07-05")),
            (common::date("2024-07-06"), common::date("2024-07-10")),
            (common::date("2024-07-11"), common::date("2024-07-12")),
        ]
    );
}

#[test]
fn test_date_chunks_edge_cases() {
    let day = common::date("2024-07-01");
    assert_eq!(date_chunks(day, day, 5), vec![(day, day)]);
    assert!(date_chunks(common::date("2024-07-02"), day, 5).is_empty());

    let chunks = date_chunks(common::date("2024-03-28"), common::date("2024-09-29"), 60);
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0].1, common::date("2024-05-26"));
    assert_eq!(chunks[3].1, common::date("2024-09-29"));
}

#[test]
fn test_date_chunks_stop_at_last_representable_day() {
    let last = NaiveDate::MAX;
    let start = last.pred_opt().unwrap();

    assert_eq!(date_chunks(start, last, 5), vec![(start, last)]);
    assert_eq!(date_chunks(last, last, 60), vec![(last, last)]);
}

#[test]
fn test_search_query_player_lookup_key() {
    let day = common::date("2024-07-01");

    let batter = search_query(PlayerType::Batter, day, day, None, Some(592_450));
    assert_eq!(query_value(&batter, "batters_lookup[]"), Some("592450"));
    assert_eq!(query_value(&batter, "player_type"), Some("batter"));
    assert_eq!(query_value(&batter, "team"), Some(""));

    let league = search_query(PlayerType::Pitcher, day, day, Some("NYY"), None);
    assert_eq!(query_value(&league, "team"), Some("NYY"));
    assert!(query_value(&league, "pitchers_lookup[]").is_none());
}

// ============================================================================
// get_statcast_data
// ============================================================================

#[tokio::test]
async fn test_statcast_data_single_day() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    let (is_error, _, result) = call(
        &ctx,
        "get_statcast_data",
        json!({"start_dt": "2024-07-01", "end_dt": "2024-07-01", "team": "NYY"}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(result["count"], json!(2));
    assert_eq!(result["data"][0]["player_name"], json!("Cole, Gerrit"));
    assert_eq!(result["data"][0]["launch_speed"], Value::Null);

    let requests = savant.requests();
    assert_eq!(requests.len(), 1);
    let (path, query) = &requests[0];
    assert_eq!(path, "statcast_search/csv");
    assert_eq!(query_value(query, "game_date_gt"), Some("2024-07-01"));
    assert_eq!(query_value(query, "game_date_lt"), Some("2024-07-01"));
    assert_eq!(query_value(query, "team"), Some("NYY"));
}

#[tokio::test]
async fn test_statcast_data_defaults_to_yesterday() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    let (is_error, _, _) = call(&ctx, "get_statcast_data", json!({})).await;

    assert!(!is_error);
    let (_, query) = &savant.requests()[0];
    assert_eq!(query_value(query, "game_date_gt"), Some("2024-07-14"));
    assert_eq!(query_value(query, "game_date_lt"), Some("2024-07-14"));
}

#[tokio::test]
async fn test_parallel_chunks_keep_window_order() {
    // Earlier windows answer last, so completion order is the reverse of window order
    let savant = FakeSavant::responding(|_, query| Ok(common::chunk_csv(query))).with_delay(
        |query| {
            let day: u64 = query_value(query, "game_date_gt").unwrap()[8..]
                .parse()
                .unwrap();
            Duration::from_millis(60_u64.saturating_sub(day * 2))
        },
    );
    let (savant, ctx) = common::savant_context(savant);

    let (is_error, text, result) = call(
        &ctx,
        "get_statcast_data",
        json!({"start_dt": "2024-07-01", "end_dt": "2024-07-20", "verbose": false}),
    )
    .await;

    assert!(!is_error, "{text}");
    assert_eq!(savant.requests().len(), 4);
    assert_eq!(
        game_dates(&result),
        ["2024-07-01", "2024-07-06", "2024-07-11", "2024-07-16"]
    );
}

#[tokio::test]
async fn test_sequential_chunks_match_parallel() {
    let (savant, ctx) = common::savant_context(FakeSavant::responding(|_, query| {
        Ok(common::chunk_csv(query))
    }));

    let (is_error, _, result) = call(
        &ctx,
        "get_statcast_data",
        json!({"start_dt": "2024-07-01", "end_dt": "2024-07-11", "parallel": false}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(
        game_dates(&result),
        ["2024-07-01", "2024-07-06", "2024-07-11"]
    );
    let starts: Vec<String> = savant
        .requests()
        .iter()
        .map(|(_, q)| query_value(q, "game_date_gt").unwrap().to_owned())
        .collect();
    assert_eq!(starts, ["2024-07-01", "2024-07-06", "2024-07-11"]);
}

#[tokio::test]
async fn test_statcast_data_empty_is_error() {
    let (_, ctx) = common::savant_context(FakeSavant::csv(""));

    let (is_error, text, result) = call(
        &ctx,
        "get_statcast_data",
        json!({"start_dt": "2024-01-10", "end_dt": "2024-01-12"}),
    )
    .await;

    assert!(is_error);
    assert_eq!(text, "Error in get_statcast_data: No statcast data found");
    assert_eq!(result["tool"], json!("get_statcast_data"));
}

#[tokio::test]
async fn test_statcast_data_rejects_reversed_range() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_data",
        json!({"start_dt": "2024-07-10", "end_dt": "2024-07-01"}),
    )
    .await;

    assert!(is_error);
    assert!(text.contains("start_dt 2024-07-10 must not be after end_dt 2024-07-01"));
    assert!(savant.requests().is_empty());
}

#[tokio::test]
async fn test_statcast_data_rejects_dates_outside_search_seasons() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    for (args, key) in [
        (json!({"start_dt": "+262142-12-31", "end_dt": "+262142-12-31"}), "start_dt"),
        (json!({"start_dt": "0001-01-01", "end_dt": "2024-07-01"}), "start_dt"),
        (json!({"start_dt": "2024-07-01", "end_dt": "2025-04-01"}), "end_dt"),
    ] {
        let (is_error, text, _) = call(&ctx, "get_statcast_data", args).await;
        assert!(is_error, "{text}");
        assert!(
            text.contains(&format!("{key} must be between the 2008 and 2024 seasons")),
            "{text}"
        );
    }

    let (is_error, _, _) = call(
        &ctx,
        "get_statcast_batter_data",
        json!({"player_id": 592_450, "start_dt": "2007-09-30"}),
    )
    .await;
    assert!(is_error);
    assert!(savant.requests().is_empty());
}

// ============================================================================
// Player searches and single game
// ============================================================================

#[tokio::test]
async fn test_pitcher_data_uses_player_windows() {
    let (savant, ctx) = common::savant_context(FakeSavant::responding(|_, query| {
        Ok(common::chunk_csv(query))
    }));

    let (is_error, _, result) = call(
        &ctx,
        "get_statcast_pitcher_data",
        json!({"player_id": 543_037, "start_dt": "2024-04-01", "end_dt": "2024-07-01"}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(result["count"], json!(2));

    let requests = savant.requests();
    assert_eq!(requests.len(), 2);
    let (_, first) = &requests[0];
    assert_eq!(query_value(first, "pitchers_lookup[]"), Some("543037"));
    assert_eq!(query_value(first, "player_type"), Some("pitcher"));
    assert_eq!(query_value(first, "game_date_lt"), Some("2024-05-30"));
    assert_eq!(query_value(&requests[1].1, "game_date_gt"), Some("2024-05-31"));
}

#[tokio::test]
async fn test_batter_data_requires_player_id() {
    let (_, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    let (is_error, text, _) = call(&ctx, "get_statcast_batter_data", json!({})).await;

    assert!(is_error);
    assert_eq!(
        text,
        "Error in get_statcast_batter_data: Missing required parameter: player_id"
    );
}

#[tokio::test]
async fn test_single_game_query() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(common::STATCAST_CSV));

    let (is_error, _, _) = call(&ctx, "get_statcast_single_game", json!({"game_pk": 745_001})).await;

    assert!(!is_error);
    let (path, query) = &savant.requests()[0];
    assert_eq!(path, "statcast_search/csv");
    assert_eq!(query_value(query, "game_pk"), Some("745001"));
}

// ============================================================================
// Leaderboards
// ============================================================================

const LEADERBOARD_CSV: &str = "\"last_name, first_name\",player_id,year,pa,xwoba\n\
\"Judge, Aaron\",592450,2023,458,.457\n";

#[tokio::test]
async fn test_expected_stats_leaderboard_query() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    let (is_error, _, result) = call(
        &ctx,
        "get_statcast_batter_expected_stats",
        json!({"year": 2023}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(result["data"][0]["player_id"], json!(592_450));
    assert_eq!(result["data"][0]["xwoba"], json!(0.457));

    let (path, query) = &savant.requests()[0];
    assert_eq!(path, "leaderboard/expected_statistics");
    assert_eq!(query_value(query, "type"), Some("batter"));
    assert_eq!(query_value(query, "year"), Some("2023"));
    assert_eq!(query_value(query, "min"), Some("q"));
    assert_eq!(query_value(query, "csv"), Some("true"));
}

#[tokio::test]
async fn test_exitvelo_and_percentile_paths() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    call(
        &ctx,
        "get_statcast_pitcher_exitvelo_barrels",
        json!({"year": 2022, "minBBE": "100"}),
    )
    .await;
    call(&ctx, "get_statcast_batter_percentile_ranks", json!({"year": 2022})).await;

    let requests = savant.requests();
    assert_eq!(requests[0].0, "leaderboard/statcast");
    assert_eq!(query_value(&requests[0].1, "type"), Some("pitcher"));
    assert_eq!(query_value(&requests[0].1, "min"), Some("100"));
    assert_eq!(requests[1].0, "leaderboard/percentile-rankings");
    assert!(query_value(&requests[1].1, "min").is_none());
}

#[tokio::test]
async fn test_leaderboard_year_bounds() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_batter_exitvelo_barrels",
        json!({"year": 2014}),
    )
    .await;
    assert!(is_error);
    assert!(text.contains("year must be between 2015 and 2024, got 2014"));

    let (is_error, _, _) = call(
        &ctx,
        "get_statcast_pitcher_percentile_ranks",
        json!({"year": 2025}),
    )
    .await;
    assert!(is_error);

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_pitcher_pitch_arsenal",
        json!({"year": 2018}),
    )
    .await;
    assert!(is_error);
    assert!(text.contains("between 2019 and 2024"));

    assert!(savant.requests().is_empty());
}

#[tokio::test]
async fn test_leaderboard_minimum_validation() {
    let (_, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_batter_expected_stats",
        json!({"year": 2023, "minPA": "lots"}),
    )
    .await;
    assert!(is_error);
    assert!(text.contains("minPA must be a non-negative integer or \"q\""));
}

#[tokio::test]
async fn test_pitcher_arsenal_query_and_type_validation() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    let (is_error, _, _) = call(
        &ctx,
        "get_statcast_pitcher_pitch_arsenal",
        json!({"year": 2023, "arsenal_type": "n_"}),
    )
    .await;
    assert!(!is_error);
    let (path, query) = &savant.requests()[0];
    assert_eq!(path, "leaderboard/pitch-arsenals");
    assert_eq!(query_value(query, "type"), Some("n_"));
    assert_eq!(query_value(query, "min"), Some("q"));

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_pitcher_pitch_arsenal",
        json!({"year": 2023, "arsenal_type": "avg_break"}),
    )
    .await;
    assert!(is_error);
    assert!(text.contains("arsenal_type must be one of avg_speed, n_, avg_spin"));
}

#[tokio::test]
async fn test_batter_arsenal_min_pa() {
    let (savant, ctx) = common::savant_context(FakeSavant::csv(LEADERBOARD_CSV));

    let (is_error, _, _) = call(
        &ctx,
        "get_statcast_batter_pitch_arsenal",
        json!({"year": 2023}),
    )
    .await;
    assert!(!is_error);
    let (path, query) = &savant.requests()[0];
    assert_eq!(path, "leaderboard/pitch-arsenal-stats");
    assert_eq!(query_value(query, "min"), Some("25"));

    let (is_error, text, _) = call(
        &ctx,
        "get_statcast_batter_pitch_arsenal",
        json!({"year": 2023, "minPA": -1}),
    )
    .await;
    assert!(is_error);
    assert!(text.contains("minPA must be non-negative, got -1"));
}
