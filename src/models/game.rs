// ABOUTME: Game-level reshaping: schedule summaries, linescore, scoring plays and highlights
// ABOUTME: Also resolves a team's previous and next game from hydrated team records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use serde::Serialize;
use serde_json::{json, Value};

use super::{array_at, display_at, i64_at, str_at, text_at, value_at};
use crate::errors::{AppError, AppResult};
use crate::formatters::text;

// ============================================================================
// Schedule
// ============================================================================

/// One scheduled game, flattened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    /// `gamePk`
    pub game_id: i64,
    /// First pitch timestamp (UTC, RFC 3339)
    pub game_datetime: String,
    /// Official game date (`YYYY-MM-DD`)
    pub game_date: String,
    /// Game type code (`R`, `P`, `S`, ...)
    pub game_type: String,
    /// Detailed status (`Final`, `Scheduled`, `In Progress`, ...)
    pub status: String,
    /// Away team name
    pub away_name: String,
    /// Home team name
    pub home_name: String,
    /// Away team id
    pub away_id: Option<i64>,
    /// Home team id
    pub home_id: Option<i64>,
    /// `Y`, `N` or `S` (split doubleheader)
    pub doubleheader: String,
    /// Game number within the day
    pub game_num: i64,
    /// Home probable starter
    pub home_probable_pitcher: String,
    /// Away probable starter
    pub away_probable_pitcher: String,
    /// Home probable starter note
    pub home_pitcher_note: String,
    /// Away probable starter note
    pub away_pitcher_note: String,
    /// Away runs
    pub away_score: i64,
    /// Home runs
    pub home_score: i64,
    /// Current inning ordinal, empty before first pitch
    pub current_inning: String,
    /// `Top`, `Middle`, `Bottom`, `End`, or empty
    pub inning_state: String,
    /// Venue id
    pub venue_id: Option<i64>,
    /// Venue name
    pub venue_name: String,
    /// National broadcast names
    pub national_broadcasts: Vec<String>,
    /// Postseason series status line
    pub series_status: Option<String>,
    /// Winner, final games only
    pub winning_team: Option<String>,
    /// Loser, final games only
    pub losing_team: Option<String>,
    /// Pitcher of record for the win
    pub winning_pitcher: Option<String>,
    /// Pitcher of record for the loss
    pub losing_pitcher: Option<String>,
    /// Pitcher credited with the save, empty if none
    pub save_pitcher: Option<String>,
    /// One-line human summary
    pub summary: String,
}

impl GameSummary {
    /// Flatten one `dates[].games[]` entry
    #[must_use]
    pub fn from_schedule_game(game_date: &str, game: &Value) -> Self {
        let status = text_at(game, "/status/detailedState");
        let away_name = text_at(game, "/teams/away/team/name");
        let home_name = text_at(game, "/teams/home/team/name");
        let away_score = i64_at(game, "/teams/away/score").unwrap_or(0);
        let home_score = i64_at(game, "/teams/home/score").unwrap_or(0);
        let current_inning = display_at(game, "/linescore/currentInningOrdinal");
        let inning_state = text_at(game, "/linescore/inningState");

        let national_broadcasts = array_at(game, "/broadcasts")
            .iter()
            .filter(|b| b.get("isNational").and_then(Value::as_bool) == Some(true))
            .filter_map(|b| b.get("name").and_then(Value::as_str))
            .map(str::to_owned)
            .collect();

        let mut summary = Self {
            game_id: i64_at(game, "/gamePk").unwrap_or_default(),
            game_datetime: text_at(game, "/gameDate"),
            game_date: game_date.to_owned(),
            game_type: text_at(game, "/gameType"),
            status,
            away_id: i64_at(game, "/teams/away/team/id"),
            home_id: i64_at(game, "/teams/home/team/id"),
            doubleheader: text_at(game, "/doubleHeader"),
            game_num: i64_at(game, "/gameNumber").unwrap_or(1),
            home_probable_pitcher: text_at(game, "/teams/home/probablePitcher/fullName"),
            away_probable_pitcher: text_at(game, "/teams/away/probablePitcher/fullName"),
            home_pitcher_note: text_at(game, "/teams/home/probablePitcher/note"),
            away_pitcher_note: text_at(game, "/teams/away/probablePitcher/note"),
            away_score,
            home_score,
            current_inning,
            inning_state,
            venue_id: i64_at(game, "/venue/id"),
            venue_name: text_at(game, "/venue/name"),
            national_broadcasts,
            series_status: str_at(game, "/seriesStatus/result").map(str::to_owned),
            winning_team: None,
            losing_team: None,
            winning_pitcher: None,
            losing_pitcher: None,
            save_pitcher: None,
            summary: String::new(),
            away_name,
            home_name,
        };

        if is_final(game) {
            let away_won = game
                .pointer("/teams/away/isWinner")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let (winner, loser) = if away_won {
                (&summary.away_name, &summary.home_name)
            } else {
                (&summary.home_name, &summary.away_name)
            };
            summary.winning_team = Some(winner.clone());
            summary.losing_team = Some(loser.clone());
            summary.winning_pitcher = Some(text_at(game, "/decisions/winner/fullName"));
            summary.losing_pitcher = Some(text_at(game, "/decisions/loser/fullName"));
            summary.save_pitcher = Some(text_at(game, "/decisions/save/fullName"));
            summary.summary = format!(
                "{} - {} ({}) @ {} ({}) ({})",
                summary.game_date,
                summary.away_name,
                summary.away_score,
                summary.home_name,
                summary.home_score,
                summary.status
            );
        } else if str_at(game, "/status/abstractGameState") == Some("Live") {
            summary.summary = format!(
                "{} - {} ({}) @ {} ({}) ({} of the {}) ({})",
                summary.game_date,
                summary.away_name,
                summary.away_score,
                summary.home_name,
                summary.home_score,
                summary.inning_state,
                summary.current_inning,
                summary.status
            );
        } else {
            summary.summary = format!(
                "{} - {} @ {} ({})",
                summary.game_date, summary.away_name, summary.home_name, summary.status
            );
        }
        summary
    }
}

fn is_final(game: &Value) -> bool {
    str_at(game, "/status/abstractGameState") == Some("Final")
        || matches!(
            str_at(game, "/status/detailedState"),
            Some("Final" | "Game Over" | "Completed Early")
        )
}

/// Flatten every game of a `schedule` response, in date order
#[must_use]
pub fn schedule_games(response: &Value) -> Vec<GameSummary> {
    array_at(response, "/dates")
        .iter()
        .flat_map(|date| {
            let day = text_at(date, "/date");
            array_at(date, "/games")
                .iter()
                .map(move |game| GameSummary::from_schedule_game(&day, game))
        })
        .collect()
}

// ============================================================================
// Live feed extracts
// ============================================================================

fn require_game_data(feed: &Value, game_id: i64) -> AppResult<()> {
    if feed.pointer("/gameData").is_none() {
        return Err(AppError::no_data(format!(
            "No game data found for game {game_id}"
        )));
    }
    Ok(())
}

/// Linescore extract of a `game` feed
///
/// # Errors
///
/// Returns a no-data error when the feed has no linescore
pub fn linescore_payload(game_id: i64, feed: &Value) -> AppResult<Value> {
    require_game_data(feed, game_id)?;
    let linescore = feed
        .pointer("/liveData/linescore")
        .ok_or_else(|| AppError::no_data(format!("No linescore found for game {game_id}")))?;

    Ok(json!({
        "game_id": game_id,
        "linescore": text::linescore(feed),
        "teams": {
            "away": value_at(feed, "/gameData/teams/away/name"),
            "home": value_at(feed, "/gameData/teams/home/name"),
        },
        "innings": value_at(linescore, "/innings"),
        "totals": value_at(linescore, "/teams"),
    }))
}

/// Scoring plays of a `game` feed with both teams' records
///
/// # Errors
///
/// Returns a no-data error when the feed carries no game data
pub fn scoring_play_data(game_id: i64, feed: &Value) -> AppResult<Value> {
    require_game_data(feed, game_id)?;
    let all_plays = array_at(feed, "/liveData/plays/allPlays");
    let plays: Vec<Value> = array_at(feed, "/liveData/plays/scoringPlays")
        .iter()
        .filter_map(Value::as_u64)
        .filter_map(|idx| usize::try_from(idx).ok())
        .filter_map(|idx| all_plays.get(idx).cloned())
        .collect();

    Ok(json!({
        "home": value_at(feed, "/gameData/teams/home"),
        "away": value_at(feed, "/gameData/teams/away"),
        "plays": plays,
    }))
}

/// One highlight clip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct Highlight {
    pub date: Value,
    #[serde(rename = "type")]
    pub kind: Value,
    pub headline: Value,
    pub description: Value,
    pub duration: Value,
    pub playbacks: Value,
    pub title: Value,
}

/// Highlight clips of a `game_content` response
#[must_use]
pub fn highlights(content: &Value) -> Vec<Highlight> {
    array_at(content, "/highlights/highlights/items")
        .iter()
        .map(|item| Highlight {
            date: value_at(item, "/date"),
            kind: value_at(item, "/type"),
            headline: value_at(item, "/headline"),
            description: value_at(item, "/description"),
            duration: value_at(item, "/duration"),
            playbacks: item
                .get("playbacks")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            title: value_at(item, "/title"),
        })
        .collect()
}

// ============================================================================
// Previous / next game
// ============================================================================

fn first_team(response: &Value, team_id: i64) -> AppResult<&Value> {
    array_at(response, "/teams")
        .first()
        .ok_or_else(|| AppError::no_data(format!("No team found with id {team_id}")))
}

/// Most recent game from a `team` response hydrated with `previousSchedule`
///
/// # Errors
///
/// Returns a no-data error when the team or its previous schedule is missing
pub fn last_game(response: &Value, team_id: i64) -> AppResult<Value> {
    let team = first_team(response, team_id)?;
    let game = array_at(team, "/previousSchedule/dates")
        .iter()
        .flat_map(|date| array_at(date, "/games"))
        .next_back()
        .ok_or_else(|| {
            AppError::no_data(format!("No previous game found for team {team_id}"))
        })?;

    Ok(json!({
        "game_id": value_at(game, "/gamePk"),
        "team_id": team_id,
        "date": value_at(game, "/officialDate"),
        "status": value_at(game, "/status/detailedState"),
    }))
}

/// Upcoming game from a `team` response hydrated with `nextSchedule`
///
/// # Errors
///
/// Returns a no-data error when the team or its next schedule is missing
pub fn next_game(response: &Value, team_id: i64) -> AppResult<Value> {
    let team = first_team(response, team_id)?;
    let game = array_at(team, "/nextSchedule/dates")
        .iter()
        .flat_map(|date| array_at(date, "/games"))
        .find(|game| str_at(game, "/status/abstractGameState") != Some("Final"))
        .ok_or_else(|| AppError::no_data(format!("No upcoming game found for team {team_id}")))?;

    let is_home = i64_at(game, "/teams/home/team/id") == Some(team_id);
    let opponent = if is_home {
        value_at(game, "/teams/away/team/name")
    } else {
        value_at(game, "/teams/home/team/name")
    };

    Ok(json!({
        "game_id": value_at(game, "/gamePk"),
        "team_id": team_id,
        "date": value_at(game, "/officialDate"),
        "opponent": opponent,
        "status": value_at(game, "/status/detailedState"),
        "is_home": is_home,
    }))
}
