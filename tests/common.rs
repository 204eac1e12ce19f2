// ABOUTME: Shared test utilities for the MLB Stats MCP server integration tests
// ABOUTME: Provides in-memory Stats API and Savant fakes, fixtures and context builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::type_complexity
)]
//! Shared test utilities for `mlb_stats_mcp_server`
//!
//! Every tool is exercised against [`FakeStatsApi`] and [`FakeSavant`]; no test touches
//! the network.

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use tokio::time::sleep;

use mlb_stats_mcp_server::config::environment::ServerConfig;
use mlb_stats_mcp_server::errors::{AppError, AppResult};
use mlb_stats_mcp_server::mcp::{RequestProcessor, ServerResources};
use mlb_stats_mcp_server::providers::{SavantProvider, StatsApiProvider};
use mlb_stats_mcp_server::tools::ToolExecutionContext;

static INIT_LOGGER: Once = Once::new();

/// Fixed "today" used by every test context
pub const TODAY: (i32, u32, u32) = (2024, 7, 15);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Stats API fake
// ============================================================================

/// In-memory Stats API: one JSON fixture per endpoint name
#[derive(Default)]
pub struct FakeStatsApi {
    fixtures: HashMap<String, Value>,
    failure: Option<AppError>,
    calls: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl FakeStatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `endpoint` with `body`
    pub fn with(mut self, endpoint: &str, body: Value) -> Self {
        self.fixtures.insert(endpoint.to_owned(), body);
        self
    }

    /// Fail every call with an upstream error
    pub fn failing() -> Self {
        Self {
            failure: Some(AppError::external_service(
                "MLB Stats API",
                "HTTP 500 Internal Server Error",
            )),
            ..Self::default()
        }
    }

    /// Recorded `(endpoint, params)` calls in order
    pub fn calls(&self) -> Vec<(String, Map<String, Value>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Params of the last call to `endpoint`
    pub fn last_params(&self, endpoint: &str) -> Map<String, Value> {
        self.calls()
            .into_iter()
            .rev()
            .find(|(name, _)| name == endpoint)
            .map(|(_, params)| params)
            .unwrap_or_else(|| panic!("no call recorded for endpoint {endpoint}"))
    }
}

#[async_trait]
impl StatsApiProvider for FakeStatsApi {
    async fn get(&self, endpoint: &str, params: &Map<String, Value>) -> AppResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_owned(), params.clone()));
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.fixtures
            .get(endpoint)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Endpoint {endpoint} not found")))
    }

    fn base_url(&self) -> &str {
        "https://statsapi.test"
    }
}

// ============================================================================
// Savant fake
// ============================================================================

type Responder = Box<dyn Fn(&str, &[(String, String)]) -> AppResult<String> + Send + Sync>;
type Delay = Box<dyn Fn(&[(String, String)]) -> Duration + Send + Sync>;

/// In-memory Baseball Savant: CSV bodies produced by a responder closure
pub struct FakeSavant {
    responder: Responder,
    delay: Option<Delay>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeSavant {
    /// Answer every request with the same CSV body
    pub fn csv(body: &str) -> Self {
        let body = body.to_owned();
        Self::responding(move |_, _| Ok(body.clone()))
    }

    /// Answer with a closure over path and query
    pub fn responding<F>(responder: F) -> Self
    where
        F: Fn(&str, &[(String, String)]) -> AppResult<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with an upstream error
    pub fn failing() -> Self {
        Self::responding(|_, _| {
            Err(AppError::external_service(
                "Baseball Savant",
                "HTTP 502 Bad Gateway",
            ))
        })
    }

    /// Sleep before answering, per request
    pub fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(&[(String, String)]) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Recorded `(path, query)` requests in arrival order
    pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SavantProvider for FakeSavant {
    async fn fetch_csv(&self, path: &str, query: &[(String, String)]) -> AppResult<String> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_owned(), query.to_vec()));
        if let Some(delay) = &self.delay {
            sleep(delay(query)).await;
        }
        (self.responder)(path, query)
    }
}

/// Value of `key` in a Savant query
pub fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

// ============================================================================
// Context builders
// ============================================================================

pub fn context(stats_api: Arc<FakeStatsApi>, savant: Arc<FakeSavant>) -> ToolExecutionContext {
    init_test_logging();
    ToolExecutionContext::new(stats_api, savant).with_today(today())
}

pub fn stats_context(stats_api: FakeStatsApi) -> (Arc<FakeStatsApi>, ToolExecutionContext) {
    let stats_api = Arc::new(stats_api);
    let ctx = context(Arc::clone(&stats_api), Arc::new(FakeSavant::csv("")));
    (stats_api, ctx)
}

pub fn savant_context(savant: FakeSavant) -> (Arc<FakeSavant>, ToolExecutionContext) {
    let savant = Arc::new(savant);
    let ctx = context(Arc::new(FakeStatsApi::new()), Arc::clone(&savant));
    (savant, ctx)
}

pub fn default_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

pub fn processor(stats_api: FakeStatsApi, savant: FakeSavant) -> RequestProcessor {
    init_test_logging();
    let resources =
        ServerResources::new(default_config(), Arc::new(stats_api), Arc::new(savant)).unwrap();
    RequestProcessor::new(Arc::new(resources))
}

// ============================================================================
// Fixtures
// ============================================================================

pub const STATCAST_CSV: &str = "pitch_type,game_date,release_speed,player_name,batter,launch_speed,des\n\
FF,2024-07-01,97.3,\"Cole, Gerrit\",592450,,strikeout\n\
SL,2024-07-01,88.1,\"Cole, Gerrit\",592450,104.2,\"Judge homers (30).\"\n";

/// Statcast CSV whose single row carries the chunk's start date
pub fn chunk_csv(query: &[(String, String)]) -> String {
    let start = query_value(query, "game_date_gt").unwrap_or_default();
    format!("game_date,pitch_type,release_speed\n{start},FF,95.0\n")
}

pub fn schedule_fixture() -> Value {
    json!({
        "totalGames": 2,
        "dates": [{
            "date": "2024-07-04",
            "games": [
                {
                    "gamePk": 745001,
                    "gameDate": "2024-07-04T17:05:00Z",
                    "gameType": "R",
                    "doubleHeader": "N",
                    "gameNumber": 1,
                    "status": {"abstractGameState": "Final", "detailedState": "Final"},
                    "teams": {
                        "away": {
                            "team": {"id": 147, "name": "New York Yankees"},
                            "score": 3,
                            "isWinner": false,
                            "probablePitcher": {"fullName": "Gerrit Cole", "note": "Back from IL"}
                        },
                        "home": {
                            "team": {"id": 111, "name": "Boston Red Sox"},
                            "score": 5,
                            "isWinner": true,
                            "probablePitcher": {"fullName": "Brayan Bello"}
                        }
                    },
                    "decisions": {
                        "winner": {"fullName": "Brayan Bello"},
                        "loser": {"fullName": "Gerrit Cole"},
                        "save": {"fullName": "Kenley Jansen"}
                    },
                    "linescore": {"currentInningOrdinal": "9th", "inningState": "Bottom"},
                    "venue": {"id": 3, "name": "Fenway Park"},
                    "broadcasts": [
                        {"name": "FOX", "isNational": true},
                        {"name": "NESN", "isNational": false}
                    ],
                    "seriesStatus": {"result": "BOS leads 1-0"}
                },
                {
                    "gamePk": 745002,
                    "gameDate": "2024-07-04T23:10:00Z",
                    "gameType": "R",
                    "doubleHeader": "N",
                    "gameNumber": 1,
                    "status": {"abstractGameState": "Live", "detailedState": "In Progress"},
                    "teams": {
                        "away": {"team": {"id": 119, "name": "Los Angeles Dodgers"}, "score": 2},
                        "home": {"team": {"id": 137, "name": "San Francisco Giants"}, "score": 1}
                    },
                    "linescore": {"currentInningOrdinal": "6th", "inningState": "Top"},
                    "venue": {"id": 2395, "name": "Oracle Park"}
                }
            ]
        }]
    })
}

pub fn sports_players_fixture() -> Value {
    json!({
        "people": [
            {"id": 592450, "fullName": "Aaron Judge", "firstName": "Aaron", "lastName": "Judge", "useName": "Aaron"},
            {"id": 660271, "fullName": "Shohei Ohtani", "firstName": "Shohei", "lastName": "Ohtani", "useName": "Shohei"},
            {"id": 665742, "fullName": "Juan Soto", "firstName": "Juan", "lastName": "Soto", "useName": "Juan"}
        ]
    })
}

pub fn standings_fixture() -> Value {
    json!({
        "records": [
            {
                "division": {"id": 201, "name": "American League East"},
                "teamRecords": [
                    {
                        "team": {"id": 110, "name": "Baltimore Orioles", "division": {"name": "American League East"}},
                        "divisionRank": "1", "wins": 58, "losses": 35, "gamesBack": "-",
                        "wildCardRank": "1", "wildCardGamesBack": "-",
                        "leagueRank": "1", "sportRank": "2"
                    },
                    {
                        "team": {"id": 147, "name": "New York Yankees", "division": {"name": "American League East"}},
                        "divisionRank": "2", "wins": 58, "losses": 38, "gamesBack": "1.5",
                        "wildCardRank": "1", "wildCardGamesBack": "+4.0",
                        "wildCardEliminationNumber": "66", "eliminationNumber": "67",
                        "leagueRank": "2", "sportRank": "4"
                    }
                ]
            },
            {
                "division": {"id": 204, "name": "National League East"},
                "teamRecords": [
                    {
                        "team": {"id": 143, "name": "Philadelphia Phillies"},
                        "divisionRank": "1", "wins": 62, "losses": 32, "gamesBack": "-",
                        "leagueRank": "1", "sportRank": "1"
                    }
                ]
            }
        ]
    })
}

pub fn roster_fixture() -> Value {
    json!({
        "roster": [
            {
                "person": {"id": 592450, "fullName": "Aaron Judge"},
                "jerseyNumber": "99",
                "position": {"abbreviation": "RF"},
                "status": {"description": "Active"}
            },
            {
                "person": {"id": 543037, "fullName": "Gerrit Cole"},
                "jerseyNumber": "45",
                "position": {"abbreviation": "P"},
                "status": {"description": "Active"}
            }
        ]
    })
}

pub fn team_leaders_fixture() -> Value {
    json!({
        "teamLeaders": [{
            "leaderCategory": "homeRuns",
            "season": "2024",
            "leaders": [
                {"rank": 1, "value": "34", "person": {"id": 592450, "fullName": "Aaron Judge"}},
                {"rank": 2, "value": "21", "person": {"id": 665742, "fullName": "Juan Soto"}}
            ]
        }]
    })
}

pub fn league_leaders_fixture() -> Value {
    json!({
        "leagueLeaders": [
            {
                "leaderCategory": "homeRuns",
                "statGroup": "hitting",
                "leaders": [
                    {"rank": 1, "value": "34", "person": {"fullName": "Aaron Judge"}, "team": {"name": "New York Yankees"}},
                    {"rank": 2, "value": "29", "person": {"fullName": "Shohei Ohtani"}, "team": {"name": "Los Angeles Dodgers"}}
                ]
            },
            {
                "leaderCategory": "stolenBases",
                "statGroup": "hitting",
                "leaders": []
            }
        ]
    })
}

pub fn person_fixture() -> Value {
    json!({
        "people": [{
            "id": 592450,
            "firstName": "Aaron",
            "useName": "Aaron",
            "lastName": "Judge",
            "nickName": "All Rise",
            "active": true,
            "currentTeam": {"id": 147, "name": "New York Yankees"},
            "primaryPosition": {"abbreviation": "RF"},
            "mlbDebutDate": "2016-08-13",
            "batSide": {"description": "Right"},
            "pitchHand": {"description": "Right"},
            "stats": [{
                "type": {"displayName": "season"},
                "group": {"displayName": "hitting"},
                "splits": [{"season": "2024", "stat": {"homeRuns": 34, "avg": ".305"}}]
            }]
        }]
    })
}

pub fn live_feed_fixture() -> Value {
    json!({
        "gameData": {
            "status": {"detailedState": "Final"},
            "teams": {
                "away": {"id": 147, "name": "New York Yankees", "teamName": "Yankees"},
                "home": {"id": 111, "name": "Boston Red Sox", "teamName": "Red Sox"}
            }
        },
        "liveData": {
            "linescore": {
                "innings": [
                    {"num": 1, "away": {"runs": 0}, "home": {"runs": 2}},
                    {"num": 2, "away": {"runs": 3}, "home": {"runs": 0}}
                ],
                "teams": {
                    "away": {"runs": 3, "hits": 6, "errors": 1},
                    "home": {"runs": 2, "hits": 4, "errors": 0}
                }
            },
            "plays": {
                "allPlays": [
                    {"result": {"description": "Groundout"}},
                    {"result": {"description": "Devers homers (20)"}},
                    {"result": {"description": "Judge doubles, 3 runs score"}}
                ],
                "scoringPlays": [1, 2]
            }
        }
    })
}

pub fn team_schedule_fixture(key: &str) -> Value {
    json!({
        "teams": [{
            "id": 147,
            "name": "New York Yankees",
            key: {
                "dates": [
                    {"games": [{
                        "gamePk": 745100,
                        "officialDate": "2024-07-13",
                        "status": {"abstractGameState": "Final", "detailedState": "Final"},
                        "teams": {"away": {"team": {"id": 147, "name": "New York Yankees"}}, "home": {"team": {"id": 110, "name": "Baltimore Orioles"}}}
                    }]},
                    {"games": [{
                        "gamePk": 745101,
                        "officialDate": "2024-07-14",
                        "status": {"abstractGameState": "Preview", "detailedState": "Scheduled"},
                        "teams": {"away": {"team": {"id": 110, "name": "Baltimore Orioles"}}, "home": {"team": {"id": 147, "name": "New York Yankees"}}}
                    }]}
                ]
            }
        }]
    })
}
