// ABOUTME: Game-centric Stats API tools: schedule, boxscore, linescore, plays, highlights, pace
// ABOUTME: Each tool fetches one endpoint and reshapes it through crate::models::game
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Game Tools
//!
//! - `GetScheduleTool` - games for a date or range, flattened to `GameSummary`
//! - `GetBoxscoreTool` - text boxscore
//! - `GetLinescoreTool` - text linescore plus inning data
//! - `GetGameScoringPlayDataTool` - scoring plays from the live feed
//! - `GetGameHighlightDataTool` - highlight clips
//! - `GetGamePaceTool` - game duration and pace aggregates

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::constants::stats_api::{MLB_SPORT_ID, SCHEDULE_HYDRATE};
use crate::errors::{AppError, AppResult};
use crate::formatters::text;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::game;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{format_date, ToolArgs, UpstreamParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

fn game_id_schema() -> JsonSchema {
    JsonSchema::object(
        vec![("game_id", PropertySchema::new("integer", "MLB game ID (gamePk)"))],
        &["game_id"],
    )
}

fn stats_api_capabilities() -> ToolCapabilities {
    ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
}

// ============================================================================
// GetScheduleTool
// ============================================================================

/// Games for a date or date range
pub struct GetScheduleTool;

#[async_trait]
impl McpTool for GetScheduleTool {
    fn name(&self) -> &'static str {
        "get_schedule"
    }

    fn description(&self) -> &'static str {
        "Get game schedule information for a date or date range, optionally filtered by team, opponent, game or game type"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "date",
                    PropertySchema::new("string", "Date (YYYY-MM-DD or MM/DD/YYYY); defaults to today"),
                ),
                (
                    "start_date",
                    PropertySchema::new("string", "Range start (YYYY-MM-DD or MM/DD/YYYY)"),
                ),
                (
                    "end_date",
                    PropertySchema::new("string", "Range end (YYYY-MM-DD or MM/DD/YYYY)"),
                ),
                ("team_id", PropertySchema::new("integer", "MLB team ID to filter by")),
                (
                    "opponent_id",
                    PropertySchema::new("integer", "Opponent team ID to filter by"),
                ),
                (
                    "sport_id",
                    PropertySchema::new("integer", "Sport ID (1 for MLB)")
                        .with_default(json!(MLB_SPORT_ID)),
                ),
                ("game_id", PropertySchema::new("integer", "Single game ID (gamePk)")),
                (
                    "game_type",
                    PropertySchema::new(
                        "string",
                        "Game type (R=Regular Season, S=Spring Training, P=Postseason, ...)",
                    ),
                ),
            ],
            &[],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let date = args.opt_date("date")?;
        let start_date = args.opt_date("start_date")?;
        let end_date = args.opt_date("end_date")?;

        let mut params = UpstreamParams::new()
            .set("sportId", args.i64_or("sport_id", MLB_SPORT_ID)?)
            .set("hydrate", SCHEDULE_HYDRATE)
            .set_opt("teamId", args.opt_i64("team_id")?)
            .set_opt("opponentId", args.opt_i64("opponent_id")?)
            .set_opt("gamePk", args.opt_i64("game_id")?)
            .set_opt("gameType", args.opt_str("game_type")?);

        params = match (date, start_date, end_date) {
            (Some(date), _, _) => params.set("date", format_date(date)),
            (None, Some(start), Some(end)) => {
                if start > end {
                    return Err(AppError::invalid_input(format!(
                        "start_date {start} is after end_date {end}"
                    )));
                }
                params
                    .set("startDate", format_date(start))
                    .set("endDate", format_date(end))
            }
            (None, Some(single), None) | (None, None, Some(single)) => {
                params.set("date", format_date(single))
            }
            (None, None, None) => params,
        };

        let response = ctx.stats_api.get("schedule", &params.into_map()).await?;
        let games = game::schedule_games(&response);
        debug!(game_count = games.len(), "Retrieved schedule");
        Ok(ToolResult::ok(json!({ "games": games })))
    }
}

// ============================================================================
// GetBoxscoreTool
// ============================================================================

/// Text boxscore for one game
pub struct GetBoxscoreTool;

#[async_trait]
impl McpTool for GetBoxscoreTool {
    fn name(&self) -> &'static str {
        "get_boxscore"
    }

    fn description(&self) -> &'static str {
        "Get a formatted boxscore (batting and pitching lines for both teams) for a game"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("game_id", PropertySchema::new("integer", "MLB game ID (gamePk)")),
                (
                    "timecode",
                    PropertySchema::new(
                        "string",
                        "Optional timecode (YYYYMMDD_HHMMSS) for an in-game snapshot",
                    ),
                ),
            ],
            &["game_id"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let game_id = args.req_i64("game_id")?;
        let timecode = args.opt_str("timecode")?.filter(|t| !t.trim().is_empty());

        let params = UpstreamParams::new()
            .set("gamePk", game_id)
            .set_opt("timecode", timecode)
            .into_map();
        let response = ctx.stats_api.get("game_boxscore", &params).await?;
        if response.pointer("/teams").is_none() {
            return Err(AppError::no_data(format!(
                "No boxscore data found for game {game_id}"
            )));
        }

        debug!(game_id, "Retrieved boxscore");
        Ok(ToolResult::ok(json!({
            "game_id": game_id,
            "boxscore": text::boxscore(&response),
            "success": true,
        })))
    }
}

// ============================================================================
// GetLinescoreTool
// ============================================================================

/// Linescore for one game
pub struct GetLinescoreTool;

#[async_trait]
impl McpTool for GetLinescoreTool {
    fn name(&self) -> &'static str {
        "get_linescore"
    }

    fn description(&self) -> &'static str {
        "Get the inning-by-inning linescore for a game, as text plus structured innings and totals"
    }

    fn input_schema(&self) -> JsonSchema {
        game_id_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let game_id = args.req_i64("game_id")?;
        let params = UpstreamParams::new().set("gamePk", game_id).into_map();
        let feed = ctx.stats_api.get("game", &params).await?;
        Ok(ToolResult::ok(game::linescore_payload(game_id, &feed)?))
    }
}

// ============================================================================
// GetGameScoringPlayDataTool
// ============================================================================

/// Scoring plays for one game
pub struct GetGameScoringPlayDataTool;

#[async_trait]
impl McpTool for GetGameScoringPlayDataTool {
    fn name(&self) -> &'static str {
        "get_game_scoring_play_data"
    }

    fn description(&self) -> &'static str {
        "Get scoring play data for a game, with both teams' details"
    }

    fn input_schema(&self) -> JsonSchema {
        game_id_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let game_id = args.req_i64("game_id")?;
        let params = UpstreamParams::new().set("gamePk", game_id).into_map();
        let feed = ctx.stats_api.get("game", &params).await?;
        Ok(ToolResult::ok(game::scoring_play_data(game_id, &feed)?))
    }
}

// ============================================================================
// GetGameHighlightDataTool
// ============================================================================

/// Highlight clips for one game
pub struct GetGameHighlightDataTool;

#[async_trait]
impl McpTool for GetGameHighlightDataTool {
    fn name(&self) -> &'static str {
        "get_game_highlight_data"
    }

    fn description(&self) -> &'static str {
        "Get highlight video data (headline, description, duration, playback URLs) for a game"
    }

    fn input_schema(&self) -> JsonSchema {
        game_id_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let game_id = args.req_i64("game_id")?;
        let params = UpstreamParams::new().set("gamePk", game_id).into_map();
        let content = ctx.stats_api.get("game_content", &params).await?;
        let data = game::highlights(&content);
        debug!(game_id, highlight_count = data.len(), "Retrieved highlights");
        Ok(ToolResult::ok(json!({ "game_id": game_id, "data": data })))
    }
}

// ============================================================================
// GetGamePaceTool
// ============================================================================

/// Game pace aggregates for a season
pub struct GetGamePaceTool;

#[async_trait]
impl McpTool for GetGamePaceTool {
    fn name(&self) -> &'static str {
        "get_game_pace"
    }

    fn description(&self) -> &'static str {
        "Get game pace data (game duration, time per pitch, pitches per game) for a season, optionally for one team"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                ("team_id", PropertySchema::new("integer", "MLB team ID to filter by")),
            ],
            &[],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let season = args.i64_or("season", i64::from(ctx.current_season()))?;
        let team_id = args.opt_i64("team_id")?;

        let params = UpstreamParams::new()
            .set("season", season)
            .set("sportId", MLB_SPORT_ID)
            .set_opt("teamIds", team_id)
            .into_map();
        debug!(season, team_id = ?team_id, "Retrieving game pace data");
        let response = ctx.stats_api.get("gamePace", &params).await?;

        let has_data = ["sports", "teams", "leagues"].iter().any(|key| {
            response
                .get(*key)
                .and_then(Value::as_array)
                .is_some_and(|items| !items.is_empty())
        });
        if !has_data {
            return Err(AppError::no_data(format!(
                "No game pace data found for season {season}"
            )));
        }
        Ok(ToolResult::ok(response))
    }
}

/// Game tools in listing order
#[must_use]
pub fn create_game_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetScheduleTool),
        Box::new(GetBoxscoreTool),
        Box::new(GetLinescoreTool),
        Box::new(GetGameScoringPlayDataTool),
        Box::new(GetGameHighlightDataTool),
        Box::new(GetGamePaceTool),
    ]
}
