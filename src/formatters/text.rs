// ABOUTME: Fixed-width text renderings of Stats API payloads for LLM-friendly summaries
// ABOUTME: Boxscore, linescore, roster, team leader and league leader tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Text Renderers
//!
//! Several tools return a human-readable table next to (or instead of) raw JSON. All
//! renderers are pure functions of the upstream payload.

use std::fmt::Write;

use serde_json::Value;

use crate::models::{array_at, display_at, text_at};

const NAME_WIDTH: usize = 24;

fn pad(text: &str, width: usize) -> String {
    let cell: String = text.chars().take(width).collect();
    format!("{cell:<width$}")
}

// ============================================================================
// Linescore
// ============================================================================

/// Inning-by-inning linescore from a live `game` feed
///
/// ```text
/// Final      1  2  3  4  5  6  7  8  9   R  H  E
/// Yankees    0  1  0  0  2  0  0  0  1   4  9  0
/// Red Sox    0  0  0  1  0  0  0  0  0   1  5  1
/// ```
#[must_use]
pub fn linescore(feed: &Value) -> String {
    let innings = array_at(feed, "/liveData/linescore/innings");
    let status = text_at(feed, "/gameData/status/detailedState");
    let away = text_at(feed, "/gameData/teams/away/teamName");
    let home = text_at(feed, "/gameData/teams/home/teamName");
    let width = [status.len(), away.len(), home.len(), 6]
        .into_iter()
        .max()
        .unwrap_or(6)
        + 1;

    let mut header = pad(&status, width);
    for inning in innings {
        let _ = write!(header, "{:>3}", display_at(inning, "/num"));
    }
    header.push_str("   R  H  E");

    let row = |side: &str, name: &str| {
        let mut line = pad(name, width);
        for inning in innings {
            let _ = write!(line, "{:>3}", display_at(inning, &format!("/{side}/runs")));
        }
        let totals = format!("/liveData/linescore/teams/{side}");
        let _ = write!(
            line,
            " {:>3}{:>3}{:>3}",
            display_at(feed, &format!("{totals}/runs")),
            display_at(feed, &format!("{totals}/hits")),
            display_at(feed, &format!("{totals}/errors")),
        );
        line
    };

    [header, row("away", &away), row("home", &home)]
        .into_iter()
        .map(|line| line.trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Boxscore
// ============================================================================

fn player<'a>(team: &'a Value, id: &Value) -> Option<&'a Value> {
    team.pointer(&format!("/players/ID{id}"))
}

fn batting_section(team: &Value, out: &mut String) {
    let _ = writeln!(
        out,
        "{}{:>4}{:>3}{:>3}{:>4}{:>3}{:>3}{:>4}{:>6}{:>6}",
        pad("Batters", NAME_WIDTH),
        "AB",
        "R",
        "H",
        "RBI",
        "BB",
        "K",
        "LOB",
        "AVG",
        "OPS"
    );
    for id in array_at(team, "/batters") {
        let Some(p) = player(team, id) else { continue };
        if p.pointer("/stats/batting/atBats").is_none() {
            continue;
        }
        let name = format!(
            "{} {}",
            text_at(p, "/person/fullName"),
            text_at(p, "/position/abbreviation")
        );
        let _ = writeln!(
            out,
            "{}{:>4}{:>3}{:>3}{:>4}{:>3}{:>3}{:>4}{:>6}{:>6}",
            pad(&name, NAME_WIDTH),
            display_at(p, "/stats/batting/atBats"),
            display_at(p, "/stats/batting/runs"),
            display_at(p, "/stats/batting/hits"),
            display_at(p, "/stats/batting/rbi"),
            display_at(p, "/stats/batting/baseOnBalls"),
            display_at(p, "/stats/batting/strikeOuts"),
            display_at(p, "/stats/batting/leftOnBase"),
            display_at(p, "/seasonStats/batting/avg"),
            display_at(p, "/seasonStats/batting/ops"),
        );
    }
    let _ = writeln!(
        out,
        "{}{:>4}{:>3}{:>3}{:>4}{:>3}{:>3}{:>4}",
        pad("Totals", NAME_WIDTH),
        display_at(team, "/teamStats/batting/atBats"),
        display_at(team, "/teamStats/batting/runs"),
        display_at(team, "/teamStats/batting/hits"),
        display_at(team, "/teamStats/batting/rbi"),
        display_at(team, "/teamStats/batting/baseOnBalls"),
        display_at(team, "/teamStats/batting/strikeOuts"),
        display_at(team, "/teamStats/batting/leftOnBase"),
    );
}

fn pitching_section(team: &Value, out: &mut String) {
    let _ = writeln!(
        out,
        "{}{:>5}{:>3}{:>3}{:>3}{:>3}{:>3}{:>3}{:>6}",
        pad("Pitchers", NAME_WIDTH),
        "IP",
        "H",
        "R",
        "ER",
        "BB",
        "K",
        "HR",
        "ERA"
    );
    for id in array_at(team, "/pitchers") {
        let Some(p) = player(team, id) else { continue };
        let _ = writeln!(
            out,
            "{}{:>5}{:>3}{:>3}{:>3}{:>3}{:>3}{:>3}{:>6}",
            pad(&text_at(p, "/person/fullName"), NAME_WIDTH),
            display_at(p, "/stats/pitching/inningsPitched"),
            display_at(p, "/stats/pitching/hits"),
            display_at(p, "/stats/pitching/runs"),
            display_at(p, "/stats/pitching/earnedRuns"),
            display_at(p, "/stats/pitching/baseOnBalls"),
            display_at(p, "/stats/pitching/strikeOuts"),
            display_at(p, "/stats/pitching/homeRuns"),
            display_at(p, "/seasonStats/pitching/era"),
        );
    }
}

/// Batting and pitching lines for both teams from a `game_boxscore` response
#[must_use]
pub fn boxscore(response: &Value) -> String {
    let mut out = String::new();
    for side in ["away", "home"] {
        let Some(team) = response.pointer(&format!("/teams/{side}")) else {
            continue;
        };
        let _ = writeln!(out, "{}", text_at(team, "/team/name"));
        batting_section(team, &mut out);
        out.push('\n');
        pitching_section(team, &mut out);
        out.push('\n');
    }
    out.trim_end().to_owned()
}

// ============================================================================
// Roster and leaders
// ============================================================================

/// One line per roster entry: `#99  RF  Aaron Judge`
#[must_use]
pub fn roster(response: &Value) -> String {
    array_at(response, "/roster")
        .iter()
        .map(|entry| {
            format!(
                "#{:<3} {:<3} {}",
                display_at(entry, "/jerseyNumber"),
                display_at(entry, "/position/abbreviation"),
                display_at(entry, "/person/fullName"),
            )
            .trim_end()
            .to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ranked table for one `teamLeaders` category
#[must_use]
pub fn team_leaders(category: &str, leaders: &[Value]) -> String {
    let mut out = format!("Rank {} Value\n", pad(category, NAME_WIDTH));
    for leader in leaders {
        let _ = writeln!(
            out,
            "{:<4} {} {}",
            display_at(leader, "/rank"),
            pad(&display_at(leader, "/person/fullName"), NAME_WIDTH),
            display_at(leader, "/value"),
        );
    }
    out.trim_end().to_owned()
}

/// Ranked table for one league leader category, with team names
#[must_use]
pub fn league_leaders(category: &str, leaders: &[Value]) -> String {
    let mut out = format!(
        "Rank {} {} Value\n",
        pad(category, NAME_WIDTH),
        pad("Team", NAME_WIDTH)
    );
    for leader in leaders {
        let _ = writeln!(
            out,
            "{:<4} {} {} {}",
            display_at(leader, "/rank"),
            pad(&display_at(leader, "/person/fullName"), NAME_WIDTH),
            pad(&display_at(leader, "/team/name"), NAME_WIDTH),
            display_at(leader, "/value"),
        );
    }
    out.trim_end().to_owned()
}
