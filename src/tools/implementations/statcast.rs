// ABOUTME: Statcast tools backed by Baseball Savant CSV exports
// ABOUTME: Pitch-level searches split into date chunks, plus season leaderboards, all as tabular results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Statcast Tools
//!
//! Pitch-level searches are capped by Savant at roughly 25k rows per request, so date
//! ranges are split into short windows and the resulting tables are concatenated in
//! window order. League-wide searches use [`CHUNK_DAYS`]-day windows, optionally fetched
//! with [`PARALLEL_CHUNKS`] requests in flight; single-player searches use
//! [`PLAYER_CHUNK_DAYS`]-day windows fetched one after another.
//!
//! Every tool returns `{data, count, columns}` and fails with
//! `No statcast data found` when Savant returns no rows.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use futures_util::{stream, StreamExt, TryStreamExt};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::constants::statcast::{
    ARSENAL_FIRST_SEASON, CHUNK_DAYS, FIRST_SEASON, NO_DATA_MESSAGE, PARALLEL_CHUNKS,
    PLAYER_CHUNK_DAYS, SEARCH_FIRST_SEASON,
};
use crate::errors::{AppError, AppResult};
use crate::formatters::table::{DataTable, TabularResult};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{format_date, ToolArgs};
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

const SEARCH_PATH: &str = "statcast_search/csv";
const ARSENAL_TYPES: &[&str] = &["avg_speed", "n_", "avg_spin"];

// ============================================================================
// Shared helpers
// ============================================================================

/// Which side of the pitch a search or leaderboard is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Hitters
    Batter,
    /// Pitchers
    Pitcher,
}

impl PlayerType {
    /// Savant `type` / `player_type` value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Batter => "batter",
            Self::Pitcher => "pitcher",
        }
    }

    const fn lookup_key(self) -> &'static str {
        match self {
            Self::Batter => "batters_lookup[]",
            Self::Pitcher => "pitchers_lookup[]",
        }
    }
}

/// Split `[start, end]` into consecutive inclusive windows of at most `days` days
#[must_use]
pub fn date_chunks(start: NaiveDate, end: NaiveDate, days: i64) -> Vec<(NaiveDate, NaiveDate)> {
    let span = Duration::days(days.max(1) - 1);
    let mut chunks = Vec::new();
    let mut chunk_start = start;
    while chunk_start <= end {
        let chunk_end = chunk_start
            .checked_add_signed(span)
            .map_or(end, |last| last.min(end));
        chunks.push((chunk_start, chunk_end));
        match chunk_end.succ_opt() {
            Some(next) => chunk_start = next,
            None => break,
        }
    }
    chunks
}

fn pairs(items: &[(&str, String)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

/// Query for a pitch-level search over one date window
#[must_use]
pub fn search_query(
    player_type: PlayerType,
    start: NaiveDate,
    end: NaiveDate,
    team: Option<&str>,
    player_id: Option<i64>,
) -> Vec<(String, String)> {
    let mut query = pairs(&[
        ("all", "true".to_owned()),
        ("hfGT", "R|PO|S|".to_owned()),
        ("player_type", player_type.as_str().to_owned()),
        ("game_date_gt", format_date(start)),
        ("game_date_lt", format_date(end)),
        ("team", team.unwrap_or_default().to_owned()),
        ("min_pitches", "0".to_owned()),
        ("min_results", "0".to_owned()),
        ("group_by", "name".to_owned()),
        ("sort_col", "pitches".to_owned()),
        ("player_event_sort", "h_launch_speed".to_owned()),
        ("sort_order", "desc".to_owned()),
        ("min_abs", "0".to_owned()),
        ("type", "details".to_owned()),
    ]);
    if let Some(id) = player_id {
        query.push((player_type.lookup_key().to_owned(), id.to_string()));
    }
    query
}

async fn fetch_table(
    ctx: &ToolExecutionContext,
    path: &str,
    query: &[(String, String)],
) -> AppResult<DataTable> {
    let csv = ctx.savant.fetch_csv(path, query).await?;
    DataTable::from_csv(&csv)
}

fn tabular(table: &DataTable) -> AppResult<ToolResult> {
    let result = TabularResult::from_table(table, NO_DATA_MESSAGE)?;
    debug!(rows = result.count, columns = result.columns.len(), "Statcast table ready");
    Ok(ToolResult::ok(result.to_value()?))
}

/// Validated `start_dt` / `end_dt` pair; `start_dt` defaults to yesterday, `end_dt` to `start_dt`
///
/// Both days must fall between [`SEARCH_FIRST_SEASON`] and the current season.
fn date_range(args: &ToolArgs<'_>, ctx: &ToolExecutionContext) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = args.opt_date("start_dt")?.unwrap_or_else(|| ctx.yesterday());
    let end = args.opt_date("end_dt")?.unwrap_or(start);
    let seasons = SEARCH_FIRST_SEASON..=ctx.current_season();
    for (key, day) in [("start_dt", start), ("end_dt", end)] {
        if !seasons.contains(&day.year()) {
            return Err(AppError::invalid_input(format!(
                "{key} must be between the {} and {} seasons, got {day}",
                seasons.start(),
                seasons.end()
            )));
        }
    }
    if start > end {
        return Err(AppError::invalid_input(format!(
            "start_dt {start} must not be after end_dt {end}"
        )));
    }
    Ok((start, end))
}

fn season_year(args: &ToolArgs<'_>, ctx: &ToolExecutionContext, first: i32) -> AppResult<i64> {
    let year = args.req_i64("year")?;
    let current = i64::from(ctx.current_season());
    if !(i64::from(first)..=current).contains(&year) {
        return Err(AppError::invalid_input(format!(
            "year must be between {first} and {current}, got {year}"
        )));
    }
    Ok(year)
}

/// A leaderboard minimum: an integer or `"q"` for qualified players
fn minimum(args: &ToolArgs<'_>, key: &str, default: &str) -> AppResult<String> {
    let value = args.str_or(key, default)?;
    if value == "q" || value.trim().parse::<u32>().is_ok() {
        Ok(value.trim().to_owned())
    } else {
        Err(AppError::invalid_input(format!(
            "{key} must be a non-negative integer or \"q\", got '{value}'"
        )))
    }
}

fn date_props() -> Vec<(&'static str, PropertySchema)> {
    vec![
        (
            "start_dt",
            PropertySchema::new(
                "string",
                "First day of the range (YYYY-MM-DD or MM/DD/YYYY); defaults to yesterday",
            ),
        ),
        (
            "end_dt",
            PropertySchema::new(
                "string",
                "Last day of the range (YYYY-MM-DD or MM/DD/YYYY); defaults to start_dt",
            ),
        ),
    ]
}

fn year_prop(first: i32) -> (&'static str, PropertySchema) {
    (
        "year",
        PropertySchema::new("integer", &format!("Season year ({first} or later)")),
    )
}

fn savant_capabilities() -> ToolCapabilities {
    ToolCapabilities::READS_DATA | ToolCapabilities::SAVANT | ToolCapabilities::TABULAR
}

// ============================================================================
// GetStatcastDataTool
// ============================================================================

/// League-wide pitch-level data for a date range
pub struct GetStatcastDataTool;

impl GetStatcastDataTool {
    async fn fetch_chunk(
        ctx: &ToolExecutionContext,
        (start, end): (NaiveDate, NaiveDate),
        team: Option<&str>,
        verbose: bool,
    ) -> AppResult<DataTable> {
        let query = search_query(PlayerType::Pitcher, start, end, team, None);
        let table = fetch_table(ctx, SEARCH_PATH, &query).await?;
        if verbose {
            info!(%start, %end, rows = table.row_count(), "Completed statcast chunk");
        }
        Ok(table)
    }
}

#[async_trait]
impl McpTool for GetStatcastDataTool {
    fn name(&self) -> &'static str {
        "get_statcast_data"
    }

    fn description(&self) -> &'static str {
        "Get pitch-level Statcast data for all games in a date range, optionally for one team (e.g., 'NYY')"
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = date_props();
        properties.extend([
            (
                "team",
                PropertySchema::new("string", "Team abbreviation (e.g., 'NYY', 'BOS')"),
            ),
            (
                "verbose",
                PropertySchema::new("boolean", "Log progress for each date chunk")
                    .with_default(json!(true)),
            ),
            (
                "parallel",
                PropertySchema::new("boolean", "Fetch date chunks concurrently")
                    .with_default(json!(true)),
            ),
        ]);
        JsonSchema::object(properties, &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let (start, end) = date_range(&args, ctx)?;
        let team = args.opt_str("team")?.filter(|t| !t.trim().is_empty());
        let verbose = args.bool_or("verbose", true)?;
        let parallel = args.bool_or("parallel", true)?;

        let chunks = date_chunks(start, end, CHUNK_DAYS);
        if verbose {
            info!(
                %start,
                %end,
                chunk_count = chunks.len(),
                parallel,
                "Fetching statcast data"
            );
        }

        let team = team.as_deref();
        let tables: Vec<DataTable> = if parallel {
            stream::iter(
                chunks
                    .clone()
                    .into_iter()
                    .map(|chunk| Self::fetch_chunk(ctx, chunk, team, verbose)),
            )
            .buffered(PARALLEL_CHUNKS)
            .try_collect()
            .await?
        } else {
            let mut tables = Vec::with_capacity(chunks.len());
            for &chunk in &chunks {
                tables.push(Self::fetch_chunk(ctx, chunk, team, verbose).await?);
            }
            tables
        };

        tabular(&DataTable::concat(tables))
    }
}

// ============================================================================
// StatcastPlayerDataTool
// ============================================================================

/// Pitch-level data for one batter or pitcher
pub struct StatcastPlayerDataTool {
    player_type: PlayerType,
}

impl StatcastPlayerDataTool {
    /// Tool for the given side
    #[must_use]
    pub const fn new(player_type: PlayerType) -> Self {
        Self { player_type }
    }
}

#[async_trait]
impl McpTool for StatcastPlayerDataTool {
    fn name(&self) -> &'static str {
        match self.player_type {
            PlayerType::Batter => "get_statcast_batter_data",
            PlayerType::Pitcher => "get_statcast_pitcher_data",
        }
    }

    fn description(&self) -> &'static str {
        match self.player_type {
            PlayerType::Batter => {
                "Get pitch-level Statcast data for every pitch seen by one batter in a date range"
            }
            PlayerType::Pitcher => {
                "Get pitch-level Statcast data for every pitch thrown by one pitcher in a date range"
            }
        }
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = vec![(
            "player_id",
            PropertySchema::new("integer", "MLBAM player ID (see lookup_player)"),
        )];
        properties.extend(date_props());
        JsonSchema::object(properties, &["player_id"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let player_id = args.req_i64("player_id")?;
        let (start, end) = date_range(&args, ctx)?;

        let chunks = date_chunks(start, end, PLAYER_CHUNK_DAYS);
        debug!(
            player_id,
            player_type = self.player_type.as_str(),
            chunk_count = chunks.len(),
            "Fetching statcast player data"
        );

        let mut tables = Vec::with_capacity(chunks.len());
        for (chunk_start, chunk_end) in chunks {
            let query = search_query(self.player_type, chunk_start, chunk_end, None, Some(player_id));
            tables.push(fetch_table(ctx, SEARCH_PATH, &query).await?);
        }
        tabular(&DataTable::concat(tables))
    }
}

// ============================================================================
// GetStatcastSingleGameTool
// ============================================================================

/// Pitch-level data for one game
pub struct GetStatcastSingleGameTool;

#[async_trait]
impl McpTool for GetStatcastSingleGameTool {
    fn name(&self) -> &'static str {
        "get_statcast_single_game"
    }

    fn description(&self) -> &'static str {
        "Get pitch-level Statcast data for a single game"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![("game_pk", PropertySchema::new("integer", "MLB game ID (gamePk)"))],
            &["game_pk"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let game_pk = args.req_i64("game_pk")?;
        let query = pairs(&[
            ("all", "true".to_owned()),
            ("type", "details".to_owned()),
            ("game_pk", game_pk.to_string()),
        ]);
        tabular(&fetch_table(ctx, SEARCH_PATH, &query).await?)
    }
}

// ============================================================================
// Season leaderboards
// ============================================================================

/// Which season leaderboard a [`LeaderboardTool`] reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaderboard {
    /// Exit velocity and barrels (`minBBE`)
    ExitVeloBarrels,
    /// Expected stats (`minPA`)
    ExpectedStats,
    /// Percentile ranks (no minimum)
    PercentileRanks,
}

/// Season leaderboard for batters or pitchers
pub struct LeaderboardTool {
    board: Leaderboard,
    player_type: PlayerType,
}

impl LeaderboardTool {
    /// Tool for the given leaderboard and side
    #[must_use]
    pub const fn new(board: Leaderboard, player_type: PlayerType) -> Self {
        Self { board, player_type }
    }

    const fn min_key(&self) -> Option<&'static str> {
        match self.board {
            Leaderboard::ExitVeloBarrels => Some("minBBE"),
            Leaderboard::ExpectedStats => Some("minPA"),
            Leaderboard::PercentileRanks => None,
        }
    }

    const fn path(&self) -> &'static str {
        match self.board {
            Leaderboard::ExitVeloBarrels => "leaderboard/statcast",
            Leaderboard::ExpectedStats => "leaderboard/expected_statistics",
            Leaderboard::PercentileRanks => "leaderboard/percentile-rankings",
        }
    }
}

#[async_trait]
impl McpTool for LeaderboardTool {
    fn name(&self) -> &'static str {
        match (self.board, self.player_type) {
            (Leaderboard::ExitVeloBarrels, PlayerType::Batter) => {
                "get_statcast_batter_exitvelo_barrels"
            }
            (Leaderboard::ExitVeloBarrels, PlayerType::Pitcher) => {
                "get_statcast_pitcher_exitvelo_barrels"
            }
            (Leaderboard::ExpectedStats, PlayerType::Batter) => "get_statcast_batter_expected_stats",
            (Leaderboard::ExpectedStats, PlayerType::Pitcher) => {
                "get_statcast_pitcher_expected_stats"
            }
            (Leaderboard::PercentileRanks, PlayerType::Batter) => {
                "get_statcast_batter_percentile_ranks"
            }
            (Leaderboard::PercentileRanks, PlayerType::Pitcher) => {
                "get_statcast_pitcher_percentile_ranks"
            }
        }
    }

    fn description(&self) -> &'static str {
        match (self.board, self.player_type) {
            (Leaderboard::ExitVeloBarrels, PlayerType::Batter) => {
                "Get batted ball exit velocity, launch angle and barrel data for batters in a season"
            }
            (Leaderboard::ExitVeloBarrels, PlayerType::Pitcher) => {
                "Get batted ball exit velocity, launch angle and barrel data allowed by pitchers in a season"
            }
            (Leaderboard::ExpectedStats, PlayerType::Batter) => {
                "Get expected stats (xBA, xSLG, xwOBA) versus actual results for batters in a season"
            }
            (Leaderboard::ExpectedStats, PlayerType::Pitcher) => {
                "Get expected stats (xBA, xSLG, xwOBA, xERA) allowed by pitchers in a season"
            }
            (Leaderboard::PercentileRanks, PlayerType::Batter) => {
                "Get Statcast percentile ranks for batters in a season"
            }
            (Leaderboard::PercentileRanks, PlayerType::Pitcher) => {
                "Get Statcast percentile ranks for pitchers in a season"
            }
        }
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = vec![year_prop(FIRST_SEASON)];
        if let Some(key) = self.min_key() {
            let what = if self.board == Leaderboard::ExitVeloBarrels {
                "Minimum batted ball events"
            } else {
                "Minimum plate appearances"
            };
            properties.push((
                key,
                PropertySchema::new("string", &format!("{what}, or \"q\" for qualified players"))
                    .with_default(json!("q")),
            ));
        }
        JsonSchema::object(properties, &["year"])
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let year = season_year(&args, ctx, FIRST_SEASON)?;

        let mut query = pairs(&[
            ("type", self.player_type.as_str().to_owned()),
            ("year", year.to_string()),
            ("position", String::new()),
            ("team", String::new()),
        ]);
        if let Some(key) = self.min_key() {
            query.push(("min".to_owned(), minimum(&args, key, "q")?));
        }
        query.push(("csv".to_owned(), "true".to_owned()));

        debug!(leaderboard = self.path(), year, "Fetching statcast leaderboard");
        tabular(&fetch_table(ctx, self.path(), &query).await?)
    }
}

// ============================================================================
// Pitch arsenal leaderboards
// ============================================================================

/// Batter results by pitch type
pub struct GetStatcastBatterPitchArsenalTool;

#[async_trait]
impl McpTool for GetStatcastBatterPitchArsenalTool {
    fn name(&self) -> &'static str {
        "get_statcast_batter_pitch_arsenal"
    }

    fn description(&self) -> &'static str {
        "Get batter results (BA, SLG, wOBA, whiff rate, run value) against each pitch type in a season"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                year_prop(ARSENAL_FIRST_SEASON),
                (
                    "minPA",
                    PropertySchema::new("integer", "Minimum plate appearances")
                        .with_default(json!(25)),
                ),
            ],
            &["year"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let year = season_year(&args, ctx, ARSENAL_FIRST_SEASON)?;
        let min_pa = args.i64_or("minPA", 25)?;
        if min_pa < 0 {
            return Err(AppError::invalid_input(format!(
                "minPA must be non-negative, got {min_pa}"
            )));
        }

        let query = pairs(&[
            ("type", PlayerType::Batter.as_str().to_owned()),
            ("pitchType", String::new()),
            ("year", year.to_string()),
            ("team", String::new()),
            ("min", min_pa.to_string()),
            ("csv", "true".to_owned()),
        ]);
        tabular(&fetch_table(ctx, "leaderboard/pitch-arsenal-stats", &query).await?)
    }
}

/// Pitcher arsenal: speed, usage or spin by pitch type
pub struct GetStatcastPitcherPitchArsenalTool;

#[async_trait]
impl McpTool for GetStatcastPitcherPitchArsenalTool {
    fn name(&self) -> &'static str {
        "get_statcast_pitcher_pitch_arsenal"
    }

    fn description(&self) -> &'static str {
        "Get each pitcher's arsenal by pitch type in a season: average speed, usage share or average spin"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                year_prop(ARSENAL_FIRST_SEASON),
                (
                    "minP",
                    PropertySchema::new("string", "Minimum pitches, or \"q\" for qualified pitchers")
                        .with_default(json!("q")),
                ),
                (
                    "arsenal_type",
                    PropertySchema::new(
                        "string",
                        "avg_speed (velocity), n_ (usage percentage) or avg_spin (spin rate)",
                    )
                    .with_default(json!("avg_speed"))
                    .with_enum(ARSENAL_TYPES),
                ),
            ],
            &["year"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        savant_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let args = ToolArgs::new(&args)?;
        let year = season_year(&args, ctx, ARSENAL_FIRST_SEASON)?;
        let min_pitches = minimum(&args, "minP", "q")?;
        let arsenal_type = args.str_or("arsenal_type", "avg_speed")?;
        if !ARSENAL_TYPES.contains(&arsenal_type.as_str()) {
            return Err(AppError::invalid_input(format!(
                "arsenal_type must be one of {}, got '{arsenal_type}'",
                ARSENAL_TYPES.join(", ")
            )));
        }

        let query = pairs(&[
            ("year", year.to_string()),
            ("min", min_pitches),
            ("type", arsenal_type),
            ("hand", String::new()),
            ("csv", "true".to_owned()),
        ]);
        tabular(&fetch_table(ctx, "leaderboard/pitch-arsenals", &query).await?)
    }
}

/// Statcast tools in listing order
#[must_use]
pub fn create_statcast_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetStatcastDataTool),
        Box::new(StatcastPlayerDataTool::new(PlayerType::Batter)),
        Box::new(StatcastPlayerDataTool::new(PlayerType::Pitcher)),
        Box::new(GetStatcastSingleGameTool),
        Box::new(LeaderboardTool::new(Leaderboard::ExitVeloBarrels, PlayerType::Batter)),
        Box::new(LeaderboardTool::new(Leaderboard::ExitVeloBarrels, PlayerType::Pitcher)),
        Box::new(LeaderboardTool::new(Leaderboard::ExpectedStats, PlayerType::Batter)),
        Box::new(LeaderboardTool::new(Leaderboard::ExpectedStats, PlayerType::Pitcher)),
        Box::new(LeaderboardTool::new(Leaderboard::PercentileRanks, PlayerType::Batter)),
        Box::new(LeaderboardTool::new(Leaderboard::PercentileRanks, PlayerType::Pitcher)),
        Box::new(GetStatcastBatterPitchArsenalTool),
        Box::new(GetStatcastPitcherPitchArsenalTool),
    ]
}
