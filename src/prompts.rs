// ABOUTME: MCP prompt templates that walk a client through multi-tool baseball analyses
// ABOUTME: player_report, team_comparison, game_recap and statistical_deep_dive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Prompts
//!
//! Templates only reference tools this server registers.

use serde_json::Value;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{Content, GetPromptResult, PromptArgument, PromptMessage, PromptSchema};
use crate::tools::params::ToolArgs;

/// A prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Player performance report
    PlayerReport,
    /// Side-by-side team comparison
    TeamComparison,
    /// Single game recap
    GameRecap,
    /// League-wide look at one stat category
    StatisticalDeepDive,
}

impl Prompt {
    /// Every prompt in listing order
    pub const ALL: [Self; 4] = [
        Self::PlayerReport,
        Self::TeamComparison,
        Self::GameRecap,
        Self::StatisticalDeepDive,
    ];

    /// Prompt name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlayerReport => "player_report",
            Self::TeamComparison => "team_comparison",
            Self::GameRecap => "game_recap",
            Self::StatisticalDeepDive => "statistical_deep_dive",
        }
    }

    /// Look a prompt up by name
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown names
    pub fn from_name(name: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|prompt| prompt.name() == name)
            .ok_or_else(|| AppError::not_found(format!("Unknown prompt: {name}")))
    }

    /// Prompt description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PlayerReport => {
                "Build a player performance report from bio, season stats and Statcast metrics"
            }
            Self::TeamComparison => {
                "Compare two teams across standings, leaders, rosters and recent results"
            }
            Self::GameRecap => "Recap one game from its boxscore, scoring plays and pitch data",
            Self::StatisticalDeepDive => {
                "Explore one statistical category across the league: leaders, distribution and context"
            }
        }
    }

    fn arguments(self) -> Vec<PromptArgument> {
        let arg = |name: &str, description: &str, required: bool| PromptArgument {
            name: name.to_owned(),
            description: description.to_owned(),
            required,
        };
        match self {
            Self::PlayerReport => vec![
                arg("player_name", "Full or partial player name", true),
                arg("season", "Season year (defaults to the current season)", false),
            ],
            Self::TeamComparison => vec![
                arg("team1", "First team name or ID", true),
                arg("team2", "Second team name or ID", true),
                arg(
                    "focus_area",
                    "overall, offense, pitching or defense (default overall)",
                    false,
                ),
            ],
            Self::GameRecap => vec![arg("game_id", "MLB game ID (gamePk)", true)],
            Self::StatisticalDeepDive => vec![
                arg(
                    "stat_category",
                    "Leader category such as homeRuns or earnedRunAverage",
                    true,
                ),
                arg("season", "Season year (defaults to the current season)", false),
                arg("min_qualifier", "Minimum qualifier such as plate appearances", false),
            ],
        }
    }

    /// `prompts/list` entry
    #[must_use]
    pub fn schema(self) -> PromptSchema {
        PromptSchema {
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            arguments: self.arguments(),
        }
    }

    /// Render the prompt with `arguments`
    ///
    /// # Errors
    ///
    /// Returns a missing-field error when a required argument is absent
    pub fn render(self, arguments: &Value) -> AppResult<GetPromptResult> {
        let args = ToolArgs::new(arguments)?;
        let text = match self {
            Self::PlayerReport => {
                player_report(&args.req_str("player_name")?, args.opt_str("season")?.as_deref())
            }
            Self::TeamComparison => team_comparison(
                &args.req_str("team1")?,
                &args.req_str("team2")?,
                &args.str_or("focus_area", "overall")?,
            ),
            Self::GameRecap => game_recap(&args.req_str("game_id")?),
            Self::StatisticalDeepDive => statistical_deep_dive(
                &args.req_str("stat_category")?,
                args.opt_str("season")?.as_deref(),
                args.opt_str("min_qualifier")?.as_deref(),
            ),
        };
        debug!(prompt = self.name(), "Rendered prompt");

        Ok(GetPromptResult {
            description: self.description().to_owned(),
            messages: vec![PromptMessage {
                role: "user".to_owned(),
                content: Content::text(text),
            }],
        })
    }
}

/// All prompt schemas in listing order
#[must_use]
pub fn list_prompts() -> Vec<PromptSchema> {
    Prompt::ALL.into_iter().map(Prompt::schema).collect()
}

fn season_phrase(season: Option<&str>) -> String {
    season.map_or_else(
        || "the current season".to_owned(),
        |s| format!("the {s} season"),
    )
}

fn player_report(player_name: &str, season: Option<&str>) -> String {
    let period = season_phrase(season);
    let year = season.unwrap_or("<current year>");
    let range = season.map_or_else(String::new, |s| {
        format!(", start_dt=\"{s}-03-01\", end_dt=\"{s}-11-30\"")
    });
    format!(
        "Write a performance report on {player_name} for {period}.

1. Identify the player
   - lookup_player(name=\"{player_name}\") and pick the most relevant match; note the player id.
2. Core statistics
   - get_player_stats(player_id, group=\"hitting\") and get_player_stats(player_id, group=\"pitching\").
   - Decide whether the player is a hitter, a pitcher or both, and focus accordingly.
3. Statcast metrics
   - Hitters: get_statcast_batter_data(player_id{range}), get_statcast_batter_expected_stats(year={year}),
     get_statcast_batter_percentile_ranks(year={year}), get_statcast_batter_exitvelo_barrels(year={year}).
   - Pitchers: get_statcast_pitcher_data(player_id{range}), get_statcast_pitcher_expected_stats(year={year}),
     get_statcast_pitcher_percentile_ranks(year={year}), get_statcast_pitcher_pitch_arsenal(year={year}).
4. Context
   - get_standings() for the team's position, get_league_leader_data() for how the player ranks.
5. Report
   - Summarize strengths, weaknesses and trends with the key numbers. Cite which tool each figure came from."
    )
}

fn team_comparison(team1: &str, team2: &str, focus_area: &str) -> String {
    format!(
        "Compare {team1} and {team2}, focusing on {focus_area} performance.

1. Resolve both teams to team ids with get_stats(endpoint=\"teams\", params={{\"sportId\": 1}}).
2. Standings: get_standings() and locate both teams (record, games back, wild card position).
3. Rosters: get_team_roster(team_id) for each team.
4. Leaders: get_team_leaders(team_id, leader_category=...) for each team.
   - Offense: homeRuns, runsBattedIn, battingAverage, onBasePercentage.
   - Pitching: earnedRunAverage, strikeouts, wins, saves.
5. Recent form: get_last_game(team_id) and get_next_game(team_id); get_schedule(team_id=..., start_date=..., end_date=...) for the last few weeks.
6. Head to head: get_schedule(team_id=<team1 id>, opponent_id=<team2 id>, start_date=..., end_date=...).
7. Conclude with which team has the edge in {focus_area} and why."
    )
}

fn game_recap(game_id: &str) -> String {
    format!(
        "Write a recap of game {game_id}.

1. Result: get_boxscore(game_id={game_id}) and get_linescore(game_id={game_id}).
2. Turning points: get_game_scoring_play_data(game_id={game_id}).
3. Pitch-level detail: get_statcast_single_game(game_pk={game_id}) for hardest-hit balls, velocity and pitch mix.
4. Highlights: get_game_highlight_data(game_id={game_id}) for notable plays worth linking.
5. Tell the story of the game inning by inning, then name the standout hitter and pitcher with their lines."
    )
}

fn statistical_deep_dive(
    stat_category: &str,
    season: Option<&str>,
    min_qualifier: Option<&str>,
) -> String {
    let period = season_phrase(season);
    let season_arg = season.map_or_else(String::new, |s| format!(", season={s}"));
    let qualifier = min_qualifier.map_or_else(String::new, |q| {
        format!("\n   - Only consider players meeting the minimum qualifier: {q}.")
    });
    format!(
        "Take a deep look at {stat_category} across MLB for {period}.

1. Leaders: get_league_leader_data(leader_categories=\"{stat_category}\"{season_arg}, limit=50).{qualifier}
2. Definitions: get_meta(type_name=\"leagueLeaderTypes\") and get_meta(type_name=\"baseballStats\") to confirm the stat.
3. Underlying quality: get_statcast_batter_expected_stats or get_statcast_pitcher_expected_stats for the same year.
4. Analyse the distribution: spread between the top and the rest, outliers, and whether expected metrics support the leaders.
5. Summarize the findings with the supporting numbers."
    )
}
