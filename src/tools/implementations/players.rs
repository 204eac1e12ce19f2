// ABOUTME: Player-centric Stats API tools: player stats, player lookup and league leaders
// ABOUTME: Lookups with no result are reported as errors rather than empty payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Player Tools

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::constants::stats_api::{DEFAULT_LEADER_LIMIT, MLB_SPORT_ID};
use crate::errors::{AppError, AppResult};
use crate::formatters::text;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::player::{matching_people, PlayerStatData};
use crate::models::{array_at, display_at, text_at};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{ToolArgs, UpstreamParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

// ============================================================================
// GetPlayerStatsTool
// ============================================================================

/// Player bio and stat splits
pub struct GetPlayerStatsTool;

#[async_trait]
impl McpTool for GetPlayerStatsTool {
    fn name(&self) -> &'static str {
        "get_player_stats"
    }

    fn description(&self) -> &'static str {
        "Get player bio and statistics for a stat group (hitting, pitching, fielding) and stat type (season, career, gameLog, ...)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("player_id", PropertySchema::new("integer", "MLB player ID")),
                (
                    "group",
                    PropertySchema::new("string", "Stat group (hitting, pitching, fielding)")
                        .with_default(json!("hitting")),
                ),
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                (
                    "stats",
                    PropertySchema::new("string", "Stat type (season, career, gameLog, ...)")
                        .with_default(json!("season")),
                ),
            ],
            &["player_id"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let player_id = args.req_i64("player_id")?;
        let group = args.str_or("group", "hitting")?;
        let stat_type = args.str_or("stats", "season")?;
        let season = args.opt_i64("season")?;

        let season_clause = season.map_or_else(String::new, |s| format!(",season={s}"));
        let hydrate = format!(
            "stats(group=[{group}],type=[{stat_type}]{season_clause},sportId={MLB_SPORT_ID}),currentTeam"
        );
        let params = UpstreamParams::new()
            .set("personId", player_id)
            .set("hydrate", hydrate)
            .into_map();

        debug!(player_id, group = %group, stat_type = %stat_type, "Retrieving player stats");
        let response = ctx.stats_api.get("person", &params).await?;
        let data = PlayerStatData::from_person_response(&response, player_id)?;
        ToolResult::from_serializable(&data)
    }
}

// ============================================================================
// LookupPlayerTool
// ============================================================================

/// Find players whose fields contain every part of a name
pub struct LookupPlayerTool;

#[async_trait]
impl McpTool for LookupPlayerTool {
    fn name(&self) -> &'static str {
        "lookup_player"
    }

    fn description(&self) -> &'static str {
        "Look up players by name (any part of first, last or full name) to get their MLB IDs"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("name", PropertySchema::new("string", "Player name to search for")),
                (
                    "season",
                    PropertySchema::new("integer", "Season to search (defaults to current season)"),
                ),
                (
                    "sport_id",
                    PropertySchema::new("integer", "Sport ID (1 for MLB)")
                        .with_default(json!(MLB_SPORT_ID)),
                ),
            ],
            &["name"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let name = args.req_str("name")?;
        let params = UpstreamParams::new()
            .set("sportId", args.i64_or("sport_id", MLB_SPORT_ID)?)
            .set(
                "season",
                args.i64_or("season", i64::from(ctx.current_season()))?,
            )
            .into_map();

        let response = ctx.stats_api.get("sports_players", &params).await?;
        let people = matching_people(&response, &name);
        if people.is_empty() {
            info!(name = %name, "No players found");
            return Err(AppError::not_found(format!(
                "No players found matching '{name}'"
            )));
        }

        debug!(name = %name, matches = people.len(), "Found matching players");
        Ok(ToolResult::ok(json!({ "people": people })))
    }
}

// ============================================================================
// GetLeagueLeaderDataTool
// ============================================================================

/// League leaders for one or more stat categories
pub struct GetLeagueLeaderDataTool;

#[async_trait]
impl McpTool for GetLeagueLeaderDataTool {
    fn name(&self) -> &'static str {
        "get_league_leader_data"
    }

    fn description(&self) -> &'static str {
        "Get league leaders for stat categories (e.g., homeRuns, battingAverage, earnedRunAverage)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "leader_categories",
                    PropertySchema::new(
                        "string",
                        "Comma-separated leader categories (see get_meta type leagueLeaderTypes)",
                    ),
                ),
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                (
                    "limit",
                    PropertySchema::new("integer", "Number of leaders per category")
                        .with_default(json!(DEFAULT_LEADER_LIMIT)),
                ),
                (
                    "stat_group",
                    PropertySchema::new("string", "Stat group (hitting, pitching, fielding)"),
                ),
                (
                    "league_id",
                    PropertySchema::new("integer", "League ID (103 AL, 104 NL)"),
                ),
                (
                    "game_type",
                    PropertySchema::new("string", "Game type (R, P, S, ...)"),
                ),
                (
                    "player_pool",
                    PropertySchema::new("string", "Player pool (all, qualified, rookies)"),
                ),
                (
                    "sport_id",
                    PropertySchema::new("integer", "Sport ID (1 for MLB)")
                        .with_default(json!(MLB_SPORT_ID)),
                ),
                (
                    "stat_type",
                    PropertySchema::new(
                        "string",
                        "Stat type (e.g., statsSingleSeason for all-time single season leaders)",
                    ),
                ),
            ],
            &["leader_categories"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let categories = args.req_str("leader_categories")?;
        let season = args.i64_or("season", i64::from(ctx.current_season()))?;

        let params = UpstreamParams::new()
            .set("leaderCategories", categories.as_str())
            .set("season", season)
            .set("sportId", args.i64_or("sport_id", MLB_SPORT_ID)?)
            .set("limit", args.i64_or("limit", DEFAULT_LEADER_LIMIT)?)
            .set_opt("statGroup", args.opt_str("stat_group")?)
            .set_opt("leagueId", args.opt_i64("league_id")?)
            .set_opt("leaderGameTypes", args.opt_str("game_type")?)
            .set_opt("playerPool", args.opt_str("player_pool")?)
            .set_opt("statType", args.opt_str("stat_type")?)
            .into_map();

        let response = ctx.stats_api.get("stats_leaders", &params).await?;
        let leaders: Vec<Value> = array_at(&response, "/leagueLeaders")
            .iter()
            .filter(|block| !array_at(block, "/leaders").is_empty())
            .map(|block| {
                let category = text_at(block, "/leaderCategory");
                let entries = array_at(block, "/leaders");
                json!({
                    "category": category,
                    "stat_group": text_at(block, "/statGroup"),
                    "leaders": entries
                        .iter()
                        .map(|leader| json!({
                            "rank": display_at(leader, "/rank"),
                            "name": text_at(leader, "/person/fullName"),
                            "team": text_at(leader, "/team/name"),
                            "value": display_at(leader, "/value"),
                        }))
                        .collect::<Vec<_>>(),
                    "table": text::league_leaders(&category, entries),
                })
            })
            .collect();

        if leaders.is_empty() {
            return Err(AppError::no_data(format!(
                "No league leader data found for categories '{categories}' in season {season}"
            )));
        }

        Ok(ToolResult::ok(json!({
            "leaders": leaders,
            "season": season,
            "categories": categories,
        })))
    }
}

/// Player tools in listing order
#[must_use]
pub fn create_player_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetPlayerStatsTool),
        Box::new(LookupPlayerTool),
        Box::new(GetLeagueLeaderDataTool),
    ]
}
