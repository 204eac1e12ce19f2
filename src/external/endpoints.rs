// ABOUTME: Catalog of MLB Stats API endpoints with URL templates and parameter rules
// ABOUTME: Renders endpoint + params into a URL and query string, and produces endpoint notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Stats API Endpoint Catalog
//!
//! Every endpoint reachable through `get_stats` is described once here. The same table
//! drives URL rendering, required-parameter validation, `get_available_endpoints`
//! and `get_notes`, so the three can never disagree.
//!
//! Templates use `{name}` placeholders. `{ver}` is always present. Path parameters
//! come in three kinds:
//!
//! - [`PathParamKind::Required`]: substituted verbatim; the template supplies slashes
//! - [`PathParamKind::Optional`]: rendered as `/<value>` when supplied, else dropped
//! - [`PathParamKind::Flag`]: rendered as `/<name>` when truthy, else dropped

use std::iter;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// How a path parameter is rendered into the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathParamKind {
    /// Must be supplied (or defaulted)
    Required,
    /// Rendered with a leading slash when supplied
    Optional,
    /// Boolean switch rendered as its own name
    Flag,
}

/// Path parameter declaration
#[derive(Debug, Clone, Copy)]
pub struct PathParam {
    /// Placeholder name in the template
    pub name: &'static str,
    /// Rendering rule
    pub kind: PathParamKind,
    /// Value used when the caller omits a required parameter
    pub default: Option<&'static str>,
}

const fn required(name: &'static str) -> PathParam {
    PathParam {
        name,
        kind: PathParamKind::Required,
        default: None,
    }
}

const fn optional(name: &'static str) -> PathParam {
    PathParam {
        name,
        kind: PathParamKind::Optional,
        default: None,
    }
}

const fn flag(name: &'static str) -> PathParam {
    PathParam {
        name,
        kind: PathParamKind::Flag,
        default: None,
    }
}

/// Endpoint declaration
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Name used by `get_stats`
    pub name: &'static str,
    /// Path template relative to the API base URL
    pub template: &'static str,
    /// Default value for `{ver}`
    pub version: &'static str,
    /// Path parameters other than `ver`
    pub path_params: &'static [PathParam],
    /// Accepted query parameters
    pub query_params: &'static [&'static str],
    /// Alternative groups of required query parameters; any one complete group suffices
    pub required_query: &'static [&'static [&'static str]],
    /// Usage note
    pub note: Option<&'static str>,
}

/// A rendered request: absolute URL plus query pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRequest {
    /// Absolute URL without query string
    pub url: String,
    /// Query parameters in caller order
    pub query: Vec<(String, String)>,
}

const HYDRATE_HINT: &str = "The hydrate function is available for this endpoint. Call the endpoint with {'hydrate': 'hydrations', 'fields': 'hydrations'} for a list of available hydrate values.";

static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "attendance",
        template: "/api/{ver}/attendance",
        version: "v1",
        path_params: &[],
        query_params: &["teamId", "leagueId", "season", "date", "leagueListId", "gameType", "fields"],
        required_query: &[&["teamId"], &["leagueId"], &["leagueListId"]],
        note: None,
    },
    Endpoint {
        name: "awards",
        template: "/api/{ver}/awards{awardId}{recipients}",
        version: "v1",
        path_params: &[optional("awardId"), flag("recipients")],
        query_params: &["sportId", "leagueId", "season", "hydrate", "fields"],
        required_query: &[],
        note: Some("Call awards endpoint with no parameters to return a list of awardIds."),
    },
    Endpoint {
        name: "conferences",
        template: "/api/{ver}/conferences",
        version: "v1",
        path_params: &[],
        query_params: &["conferenceId", "season", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "divisions",
        template: "/api/{ver}/divisions",
        version: "v1",
        path_params: &[],
        query_params: &["divisionId", "leagueId", "sportId", "season"],
        required_query: &[],
        note: Some("Call divisions endpoint with no parameters to return a list of divisions."),
    },
    Endpoint {
        name: "draft",
        template: "/api/{ver}/draft{prospects}{year}{latest}",
        version: "v1",
        path_params: &[flag("prospects"), optional("year"), flag("latest")],
        query_params: &[
            "limit", "fields", "round", "name", "school", "state", "country", "position",
            "teamId", "playerId", "bisPlayerId",
        ],
        required_query: &[],
        note: Some("No query parameters are honored when 'latest' endpoint is queried (year is still required). Prospects and Latest cannot be used together."),
    },
    Endpoint {
        name: "game",
        template: "/api/{ver}/game/{gamePk}/feed/live",
        version: "v1.1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "hydrate", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_diff",
        template: "/api/{ver}/game/{gamePk}/feed/live/diffPatch",
        version: "v1.1",
        path_params: &[required("gamePk")],
        query_params: &["startTimecode", "endTimecode"],
        required_query: &[&["startTimecode", "endTimecode"]],
        note: None,
    },
    Endpoint {
        name: "game_timestamps",
        template: "/api/{ver}/game/{gamePk}/feed/live/timestamps",
        version: "v1.1",
        path_params: &[required("gamePk")],
        query_params: &[],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_changes",
        template: "/api/{ver}/game/changes",
        version: "v1",
        path_params: &[],
        query_params: &["updatedSince", "sportId", "gameType", "season", "fields"],
        required_query: &[&["updatedSince"]],
        note: None,
    },
    Endpoint {
        name: "game_contextMetrics",
        template: "/api/{ver}/game/{gamePk}/contextMetrics",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_winProbability",
        template: "/api/{ver}/game/{gamePk}/winProbability",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "fields"],
        required_query: &[],
        note: Some("If you only want the current win probability for each team, try the game_contextMetrics endpoint instead."),
    },
    Endpoint {
        name: "game_boxscore",
        template: "/api/{ver}/game/{gamePk}/boxscore",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_content",
        template: "/api/{ver}/game/{gamePk}/content",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["highlightLimit"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_linescore",
        template: "/api/{ver}/game/{gamePk}/linescore",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "game_playByPlay",
        template: "/api/{ver}/game/{gamePk}/playByPlay",
        version: "v1",
        path_params: &[required("gamePk")],
        query_params: &["timecode", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "gamePace",
        template: "/api/{ver}/gamePace",
        version: "v1",
        path_params: &[],
        query_params: &[
            "season", "teamIds", "leagueIds", "leagueListId", "sportId", "gameType",
            "startDate", "endDate", "venueIds", "orgType", "includeChildren", "fields",
        ],
        required_query: &[&["season"]],
        note: None,
    },
    Endpoint {
        name: "meta",
        template: "/api/{ver}/{type}",
        version: "v1",
        path_params: &[required("type")],
        query_params: &["fields"],
        required_query: &[],
        note: Some("The meta endpoint is used to retrieve values to be used within other API calls. Available types: awards, baseballStats, eventTypes, gameStatus, gameTypes, hitTrajectories, jobTypes, languages, leagueLeaderTypes, logicalEvents, metrics, pitchCodes, pitchTypes, platforms, positions, reviewReasons, rosterTypes, scheduleEventTypes, situationCodes, sky, standingsTypes, statGroups, statTypes, windDirection."),
    },
    Endpoint {
        name: "people",
        template: "/api/{ver}/people",
        version: "v1",
        path_params: &[],
        query_params: &["personIds", "hydrate", "fields"],
        required_query: &[&["personIds"]],
        note: None,
    },
    Endpoint {
        name: "person",
        template: "/api/{ver}/people/{personId}",
        version: "v1",
        path_params: &[required("personId")],
        query_params: &["hydrate", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "person_stats",
        template: "/api/{ver}/people/{personId}/stats/game/{gamePk}",
        version: "v1",
        path_params: &[required("personId"), required("gamePk")],
        query_params: &["fields"],
        required_query: &[],
        note: Some("Specify 'current' instead of a gamePk for a player's current game stats."),
    },
    Endpoint {
        name: "schedule",
        template: "/api/{ver}/schedule",
        version: "v1",
        path_params: &[],
        query_params: &[
            "scheduleType", "eventTypes", "hydrate", "teamId", "leagueId", "sportId", "gamePk",
            "gamePks", "venueIds", "gameType", "gameTypes", "date", "startDate", "endDate",
            "opponentId", "fields", "season",
        ],
        required_query: &[&["sportId"], &["gamePk"], &["gamePks"]],
        note: None,
    },
    Endpoint {
        name: "sports_players",
        template: "/api/{ver}/sports/{sportId}/players",
        version: "v1",
        path_params: &[PathParam {
            name: "sportId",
            kind: PathParamKind::Required,
            default: Some("1"),
        }],
        query_params: &["season", "gameType", "fields"],
        required_query: &[&["season"]],
        note: None,
    },
    Endpoint {
        name: "standings",
        template: "/api/{ver}/standings",
        version: "v1",
        path_params: &[],
        query_params: &["leagueId", "season", "standingsTypes", "date", "hydrate", "fields"],
        required_query: &[&["leagueId"]],
        note: None,
    },
    Endpoint {
        name: "stats",
        template: "/api/{ver}/stats",
        version: "v1",
        path_params: &[],
        query_params: &[
            "stats", "playerPool", "position", "teamId", "leagueId", "limit", "offset", "group",
            "gameType", "season", "sportIds", "sortStat", "order", "hydrate", "fields",
            "personId", "metrics", "startDate", "endDate",
        ],
        required_query: &[&["stats", "group"]],
        note: Some("If no limit is specified, the response will be limited to 50 records."),
    },
    Endpoint {
        name: "stats_leaders",
        template: "/api/{ver}/stats/leaders",
        version: "v1",
        path_params: &[],
        query_params: &[
            "leaderCategories", "playerPool", "leaderGameTypes", "statGroup", "season",
            "leagueId", "sportId", "hydrate", "limit", "fields", "statType",
        ],
        required_query: &[&["leaderCategories"]],
        note: Some("If excluding season parameter to get all time leaders, include statType=statsSingleSeason or you will likely not get any results."),
    },
    Endpoint {
        name: "teams",
        template: "/api/{ver}/teams",
        version: "v1",
        path_params: &[],
        query_params: &[
            "season", "activeStatus", "leagueIds", "sportId", "sportIds", "gameType", "hydrate",
            "fields",
        ],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "team",
        template: "/api/{ver}/teams/{teamId}",
        version: "v1",
        path_params: &[required("teamId")],
        query_params: &["season", "sportId", "hydrate", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "team_roster",
        template: "/api/{ver}/teams/{teamId}/roster",
        version: "v1",
        path_params: &[required("teamId")],
        query_params: &["rosterType", "season", "date", "hydrate", "fields"],
        required_query: &[],
        note: None,
    },
    Endpoint {
        name: "team_leaders",
        template: "/api/{ver}/teams/{teamId}/leaders",
        version: "v1",
        path_params: &[required("teamId")],
        query_params: &["leaderCategories", "season", "leaderGameTypes", "hydrate", "limit", "fields"],
        required_query: &[&["leaderCategories", "season"]],
        note: None,
    },
    Endpoint {
        name: "venues",
        template: "/api/{ver}/venues",
        version: "v1",
        path_params: &[],
        query_params: &["venueIds", "season", "hydrate", "fields"],
        required_query: &[&["venueIds"]],
        note: None,
    },
];

/// All catalog entries, in listing order
#[must_use]
pub fn catalog() -> &'static [Endpoint] {
    ENDPOINTS
}

/// Look up an endpoint by name
///
/// # Errors
///
/// Returns a not-found error for unknown endpoint names
pub fn find(name: &str) -> AppResult<&'static Endpoint> {
    ENDPOINTS
        .iter()
        .find(|endpoint| endpoint.name == name)
        .ok_or_else(|| AppError::not_found(format!("Endpoint {name} not found")))
}

/// Render a parameter value into its URL string form; `None` for null
#[must_use]
pub fn param_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(param_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !matches!(s.to_lowercase().as_str(), "" | "false" | "0" | "no"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl Endpoint {
    /// Render the endpoint into a concrete request
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when required path or query parameters are missing
    pub fn render(&self, base_url: &str, params: &Map<String, Value>) -> AppResult<RenderedRequest> {
        let version = params
            .get("ver")
            .and_then(param_to_string)
            .unwrap_or_else(|| self.version.to_owned());
        let mut path = self.template.replace("{ver}", &version);
        let mut missing: Vec<String> = Vec::new();

        for param in self.path_params {
            let placeholder = format!("{{{}}}", param.name);
            let supplied = params.get(param.name);
            let rendered = match param.kind {
                PathParamKind::Required => {
                    match supplied.and_then(param_to_string).or_else(|| param.default.map(str::to_owned)) {
                        Some(value) => value,
                        None => {
                            missing.push(param.name.to_owned());
                            String::new()
                        }
                    }
                }
                PathParamKind::Optional => supplied
                    .and_then(param_to_string)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("/{v}"))
                    .unwrap_or_default(),
                PathParamKind::Flag => {
                    if supplied.is_some_and(is_truthy) {
                        format!("/{}", param.name)
                    } else {
                        String::new()
                    }
                }
            };
            path = path.replace(&placeholder, &rendered);
        }

        let mut query = Vec::new();
        for (key, value) in params {
            if key == "ver" || self.path_params.iter().any(|p| p.name == key) {
                continue;
            }
            if self.query_params.contains(&key.as_str()) {
                if let Some(rendered) = param_to_string(value) {
                    query.push((key.clone(), rendered));
                }
            } else {
                debug!(endpoint = self.name, param = %key, "Ignoring unknown parameter");
            }
        }

        if !self.required_query.is_empty() {
            let satisfied = self.required_query.iter().any(|group| {
                group
                    .iter()
                    .all(|name| query.iter().any(|(key, _)| key == name))
            });
            if !satisfied {
                missing.push(self.required_query_display().join(", "));
            }
        }

        if !missing.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Missing required parameter(s) for endpoint {}: {}",
                self.name,
                missing.join(", ")
            )));
        }

        Ok(RenderedRequest {
            url: format!("{}{path}", base_url.trim_end_matches('/')),
            query,
        })
    }

    /// Required query parameters in display form (`a or b` for alternatives)
    #[must_use]
    pub fn required_query_display(&self) -> Vec<String> {
        match self.required_query {
            [] => Vec::new(),
            [single] => single.iter().map(|&name| name.to_owned()).collect(),
            groups => vec![groups
                .iter()
                .map(|group| group.join(" and "))
                .collect::<Vec<_>>()
                .join(" or ")],
        }
    }

    /// Required path parameters (those without a default)
    #[must_use]
    pub fn required_path_params(&self) -> Vec<String> {
        self.path_params
            .iter()
            .filter(|p| p.kind == PathParamKind::Required && p.default.is_none())
            .map(|p| p.name.to_owned())
            .collect()
    }

    /// Every required parameter, path first
    #[must_use]
    pub fn required_params(&self) -> Vec<String> {
        let mut required = self.required_path_params();
        required.extend(self.required_query_display());
        required
    }

    /// Path parameters including `ver`
    #[must_use]
    pub fn path_param_names(&self) -> Vec<String> {
        iter::once("ver")
            .chain(self.path_params.iter().map(|p| p.name))
            .map(str::to_owned)
            .collect()
    }

    /// Query parameter names
    #[must_use]
    pub fn query_param_names(&self) -> Vec<String> {
        self.query_params.iter().map(|&name| name.to_owned()).collect()
    }

    /// Path then query parameter names
    #[must_use]
    pub fn all_params(&self) -> Vec<String> {
        let mut all = self.path_param_names();
        all.extend(self.query_param_names());
        all
    }

    /// Usage hints: the endpoint note plus the hydrate hint where applicable
    #[must_use]
    pub fn hints(&self) -> String {
        let mut hints = String::new();
        if let Some(note) = self.note {
            hints.push_str(note);
            hints.push('\n');
        }
        if self.query_params.contains(&"hydrate") {
            hints.push_str(HYDRATE_HINT);
            hints.push('\n');
        }
        hints
    }

    /// Listing entry used by `get_available_endpoints`
    #[must_use]
    pub fn describe(&self, base_url: &str) -> Value {
        json!({
            "url": format!("{}{}", base_url.trim_end_matches('/'), self.template),
            "required_params": self.required_params(),
            "all_params": self.all_params(),
            "notes": self.note,
        })
    }

    /// Structured notes used by `get_notes`
    #[must_use]
    pub fn notes(&self) -> Value {
        json!({
            "endpoint": self.name,
            "required_params": self.required_params(),
            "all_params": self.all_params(),
            "hints": self.hints(),
            "path_params": self.path_param_names(),
            "query_params": self.query_param_names(),
        })
    }
}
