// ABOUTME: Team-centric Stats API tools: standings, team leaders, roster, last and next game
// ABOUTME: Reshapes upstream records into division tables, ranked text and roster lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Team Tools
//!
//! - `GetStandingsTool` - division standings keyed by division id
//! - `GetTeamLeadersTool` - a team's leaders in one category
//! - `GetTeamRosterTool` - roster as text and as player records
//! - `GetLastGameTool` / `GetNextGameTool` - a team's previous and upcoming game

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::constants::stats_api::{DEFAULT_LEADER_LIMIT, DEFAULT_LEAGUE_IDS};
use crate::errors::{AppError, AppResult};
use crate::formatters::text;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::standings::standings_by_division;
use crate::models::{array_at, display_at, game, i64_at, str_at, text_at, value_at};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{format_date, ToolArgs, UpstreamParams};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

fn team_id_schema() -> JsonSchema {
    JsonSchema::object(
        vec![("team_id", PropertySchema::new("integer", "MLB team ID"))],
        &["team_id"],
    )
}

fn stats_api_capabilities() -> ToolCapabilities {
    ToolCapabilities::READS_DATA | ToolCapabilities::STATS_API
}

// ============================================================================
// GetStandingsTool
// ============================================================================

/// Division standings
pub struct GetStandingsTool;

#[async_trait]
impl McpTool for GetStandingsTool {
    fn name(&self) -> &'static str {
        "get_standings"
    }

    fn description(&self) -> &'static str {
        "Get division standings (wins, losses, games back, wild card rank) keyed by division ID"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "league_id",
                    PropertySchema::new("string", "League ID(s), comma separated (103 AL, 104 NL)")
                        .with_default(json!(DEFAULT_LEAGUE_IDS)),
                ),
                (
                    "division_id",
                    PropertySchema::new("integer", "Only return this division"),
                ),
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                (
                    "standings_types",
                    PropertySchema::new(
                        "string",
                        "Standings type (regularSeason, wildCard, springTraining, ...)",
                    )
                    .with_default(json!("regularSeason")),
                ),
                (
                    "date",
                    PropertySchema::new("string", "Standings as of this date (YYYY-MM-DD or MM/DD/YYYY)"),
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
        let division_id = args.opt_i64("division_id")?;
        let standings_types = args.str_or("standings_types", "regularSeason")?;

        let params = UpstreamParams::new()
            .set("leagueId", args.str_or("league_id", DEFAULT_LEAGUE_IDS)?)
            .set(
                "season",
                args.i64_or("season", i64::from(ctx.current_season()))?,
            )
            .set("standingsTypes", standings_types.as_str())
            .set("hydrate", "team(division)")
            .set_opt("date", args.opt_date("date")?.map(format_date))
            .into_map();

        let response = ctx.stats_api.get("standings", &params).await?;
        let divisions = standings_by_division(&response, division_id);
        if divisions.is_empty() {
            return Err(AppError::no_data(format!(
                "No standings data found for standings type '{standings_types}'"
            )));
        }
        debug!(division_count = divisions.len(), "Retrieved standings");
        ToolResult::from_serializable(&divisions)
    }
}

// ============================================================================
// GetTeamLeadersTool
// ============================================================================

/// A team's leaders in one category
pub struct GetTeamLeadersTool;

#[async_trait]
impl McpTool for GetTeamLeadersTool {
    fn name(&self) -> &'static str {
        "get_team_leaders"
    }

    fn description(&self) -> &'static str {
        "Get a team's statistical leaders in one category (homeRuns, battingAverage, strikeouts, ...)"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("team_id", PropertySchema::new("integer", "MLB team ID")),
                (
                    "leader_category",
                    PropertySchema::new("string", "Statistic to rank by")
                        .with_default(json!("homeRuns")),
                ),
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                (
                    "leader_game_type",
                    PropertySchema::new("string", "Game type (R=Regular Season, P=Postseason, ...)")
                        .with_default(json!("R")),
                ),
                (
                    "limit",
                    PropertySchema::new("integer", "Number of leaders to return")
                        .with_default(json!(DEFAULT_LEADER_LIMIT)),
                ),
            ],
            &["team_id"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let team_id = args.req_i64("team_id")?;
        let category = args.str_or("leader_category", "homeRuns")?;
        let season = args.i64_or("season", i64::from(ctx.current_season()))?;

        let params = UpstreamParams::new()
            .set("teamId", team_id)
            .set("leaderCategories", category.as_str())
            .set("season", season)
            .set("leaderGameTypes", args.str_or("leader_game_type", "R")?)
            .set("hydrate", "person")
            .set("limit", args.i64_or("limit", DEFAULT_LEADER_LIMIT)?)
            .into_map();

        debug!(team_id, category = %category, "Retrieving team leaders");
        let response = ctx.stats_api.get("team_leaders", &params).await?;
        let leaders = array_at(&response, "/teamLeaders")
            .iter()
            .find(|block| str_at(block, "/leaderCategory") == Some(category.as_str()))
            .or_else(|| array_at(&response, "/teamLeaders").first())
            .map(|block| array_at(block, "/leaders"))
            .unwrap_or_default();

        if leaders.is_empty() {
            return Err(AppError::no_data(format!(
                "No {category} leaders found for team {team_id} in season {season}"
            )));
        }

        Ok(ToolResult::ok(json!({
            "teamId": team_id,
            "leaderCategory": category,
            "season": season,
            "results": text::team_leaders(&category, leaders),
            "leaders": leaders,
            "teamLeaders": true,
        })))
    }
}

// ============================================================================
// GetTeamRosterTool
// ============================================================================

/// A team's roster
pub struct GetTeamRosterTool;

#[async_trait]
impl McpTool for GetTeamRosterTool {
    fn name(&self) -> &'static str {
        "get_team_roster"
    }

    fn description(&self) -> &'static str {
        "Get a team's roster (active, 40Man, fullSeason, ...) with jersey numbers and positions"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("team_id", PropertySchema::new("integer", "MLB team ID")),
                (
                    "roster_type",
                    PropertySchema::new("string", "Roster type (see get_meta type rosterTypes)")
                        .with_default(json!("active")),
                ),
                (
                    "season",
                    PropertySchema::new("integer", "Season year (defaults to current season)"),
                ),
                (
                    "date",
                    PropertySchema::new("string", "Roster as of this date (YYYY-MM-DD or MM/DD/YYYY)"),
                ),
            ],
            &["team_id"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let team_id = args.req_i64("team_id")?;
        let roster_type = args.str_or("roster_type", "active")?;
        let season = args.i64_or("season", i64::from(ctx.current_season()))?;

        let params = UpstreamParams::new()
            .set("teamId", team_id)
            .set("rosterType", roster_type.as_str())
            .set("season", season)
            .set("hydrate", "person")
            .set_opt("date", args.opt_date("date")?.map(format_date))
            .into_map();

        let response = ctx.stats_api.get("team_roster", &params).await?;
        let players: Vec<Value> = array_at(&response, "/roster")
            .iter()
            .map(|entry| {
                json!({
                    "jersey_number": display_at(entry, "/jerseyNumber"),
                    "position": text_at(entry, "/position/abbreviation"),
                    "name": text_at(entry, "/person/fullName"),
                    "person_id": i64_at(entry, "/person/id"),
                    "status": value_at(entry, "/status/description"),
                })
            })
            .collect();

        if players.is_empty() {
            return Err(AppError::no_data(format!(
                "No {roster_type} roster found for team {team_id} in season {season}"
            )));
        }

        debug!(team_id, player_count = players.len(), "Retrieved roster");
        Ok(ToolResult::ok(json!({
            "team_id": team_id,
            "roster_type": roster_type,
            "season": season,
            "roster": text::roster(&response),
            "players": players,
        })))
    }
}

// ============================================================================
// GetLastGameTool / GetNextGameTool
// ============================================================================

/// A team's most recent game
pub struct GetLastGameTool;

#[async_trait]
impl McpTool for GetLastGameTool {
    fn name(&self) -> &'static str {
        "get_last_game"
    }

    fn description(&self) -> &'static str {
        "Get the game ID, date and status of a team's most recent game"
    }

    fn input_schema(&self) -> JsonSchema {
        team_id_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let team_id = args.req_i64("team_id")?;
        let params = UpstreamParams::new()
            .set("teamId", team_id)
            .set("hydrate", "previousSchedule")
            .into_map();
        let response = ctx.stats_api.get("team", &params).await?;
        Ok(ToolResult::ok(game::last_game(&response, team_id)?))
    }
}

/// A team's upcoming game
pub struct GetNextGameTool;

#[async_trait]
impl McpTool for GetNextGameTool {
    fn name(&self) -> &'static str {
        "get_next_game"
    }

    fn description(&self) -> &'static str {
        "Get the game ID, date, opponent and venue side of a team's next game"
    }

    fn input_schema(&self) -> JsonSchema {
        team_id_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        stats_api_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let team_id = args.req_i64("team_id")?;
        let params = UpstreamParams::new()
            .set("teamId", team_id)
            .set("hydrate", "nextSchedule")
            .into_map();
        let response = ctx.stats_api.get("team", &params).await?;
        Ok(ToolResult::ok(game::next_game(&response, team_id)?))
    }
}

/// Team tools in listing order
#[must_use]
pub fn create_team_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetStandingsTool),
        Box::new(GetTeamLeadersTool),
        Box::new(GetTeamRosterTool),
        Box::new(GetLastGameTool),
        Box::new(GetNextGameTool),
    ]
}
