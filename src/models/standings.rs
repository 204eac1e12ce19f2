// ABOUTME: Division standings reshaping from a Stats API standings response
// ABOUTME: Groups team records by division id with rank, record and games-back columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{array_at, display_at, i64_at, text_at};

/// One team row in a division table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsTeam {
    /// Team name
    pub name: String,
    /// Division rank
    pub div_rank: String,
    /// Wins
    pub w: i64,
    /// Losses
    pub l: i64,
    /// Games back in the division
    pub gb: String,
    /// Wild card rank, `-` when not applicable
    pub wc_rank: String,
    /// Wild card games back
    pub wc_gb: String,
    /// Wild card elimination number
    pub wc_elim_num: String,
    /// Division elimination number
    pub elim_num: String,
    /// Team id
    pub team_id: i64,
    /// League rank
    pub league_rank: String,
    /// Sport rank
    pub sport_rank: String,
}

/// A division and its teams in standings order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionStandings {
    /// Division name
    pub div_name: String,
    /// Team rows
    pub teams: Vec<StandingsTeam>,
}

fn or_dash(record: &Value, pointer: &str) -> String {
    let text = display_at(record, pointer);
    if text.is_empty() {
        "-".to_owned()
    } else {
        text
    }
}

/// Standings keyed by division id, optionally restricted to one division
#[must_use]
pub fn standings_by_division(
    response: &Value,
    division_id: Option<i64>,
) -> BTreeMap<String, DivisionStandings> {
    let mut divisions: BTreeMap<String, DivisionStandings> = BTreeMap::new();

    for record in array_at(response, "/records") {
        let Some(div_id) = i64_at(record, "/division/id") else {
            continue;
        };
        if division_id.is_some_and(|wanted| wanted != div_id) {
            continue;
        }

        for team in array_at(record, "/teamRecords") {
            let division = divisions
                .entry(div_id.to_string())
                .or_insert_with(|| DivisionStandings {
                    div_name: division_name(record, team),
                    teams: Vec::new(),
                });
            division.teams.push(StandingsTeam {
                name: text_at(team, "/team/name"),
                div_rank: or_dash(team, "/divisionRank"),
                w: i64_at(team, "/wins").unwrap_or(0),
                l: i64_at(team, "/losses").unwrap_or(0),
                gb: or_dash(team, "/gamesBack"),
                wc_rank: or_dash(team, "/wildCardRank"),
                wc_gb: or_dash(team, "/wildCardGamesBack"),
                wc_elim_num: or_dash(team, "/wildCardEliminationNumber"),
                elim_num: or_dash(team, "/eliminationNumber"),
                team_id: i64_at(team, "/team/id").unwrap_or_default(),
                league_rank: or_dash(team, "/leagueRank"),
                sport_rank: or_dash(team, "/sportRank"),
            });
        }
    }
    divisions
}

/// Prefers the hydrated `team.division.name`, then the record's own division name
fn division_name(record: &Value, team: &Value) -> String {
    let hydrated = text_at(team, "/team/division/name");
    if hydrated.is_empty() {
        text_at(record, "/division/name")
    } else {
        hydrated
    }
}
