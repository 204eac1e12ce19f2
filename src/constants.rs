// ABOUTME: Application constants shared by the protocol layer, upstream clients and config
// ABOUTME: Groups JSON-RPC codes, MCP protocol values, env-var names and upstream defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! Application-wide constants grouped by concern

/// MCP / JSON-RPC protocol values
pub mod protocol {
    /// JSON-RPC version string carried on every message
    pub const JSONRPC_VERSION: &str = "2.0";

    /// MCP protocol revision this server implements
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name reported in `initialize`
    pub const SERVER_NAME: &str = "mlb-stats-mcp";

    /// Server version reported in `initialize`
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// JSON-RPC error codes
pub mod errors {
    /// Malformed JSON on the wire
    pub const ERROR_PARSE: i32 = -32700;
    /// Request object is not a valid JSON-RPC request
    pub const ERROR_INVALID_REQUEST: i32 = -32600;
    /// Method does not exist
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;
    /// Internal server error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;
}

/// Environment variable names read by [`crate::config::environment::ServerConfig`]
pub mod env_config {
    /// Log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub const LOG_LEVEL: &str = "MLB_STATS_LOG_LEVEL";
    /// Optional log file path; stderr when unset
    pub const LOG_FILE: &str = "MLB_STATS_LOG_FILE";
    /// Log output format (`text` or `json`)
    pub const LOG_FORMAT: &str = "MLB_STATS_LOG_FORMAT";
    /// Stats API base URL override
    pub const STATSAPI_BASE_URL: &str = "MLB_STATSAPI_BASE_URL";
    /// Baseball Savant base URL override
    pub const SAVANT_BASE_URL: &str = "MLB_SAVANT_BASE_URL";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "MLB_STATS_HTTP_TIMEOUT_SECS";
}

/// Upstream service defaults
pub mod upstream {
    /// Default MLB Stats API base URL
    pub const DEFAULT_STATSAPI_BASE_URL: &str = "https://statsapi.mlb.com";
    /// Default Baseball Savant base URL
    pub const DEFAULT_SAVANT_BASE_URL: &str = "https://baseballsavant.mlb.com";
    /// Default HTTP timeout
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
    /// User agent sent to both upstreams
    pub const USER_AGENT: &str = concat!("mlb-stats-mcp-server/", env!("CARGO_PKG_VERSION"));

    /// Service label used in external-service errors for the Stats API
    pub const STATSAPI_SERVICE: &str = "MLB Stats API";
    /// Service label used in external-service errors for Baseball Savant
    pub const SAVANT_SERVICE: &str = "Baseball Savant";
}

/// Statcast query limits
pub mod statcast {
    /// Largest date span (inclusive, in days) requested from Savant in one search
    pub const CHUNK_DAYS: i64 = 5;
    /// Chunk requests kept in flight when fetching in parallel
    pub const PARALLEL_CHUNKS: usize = 4;
    /// First season covered by Savant pitch-level searches
    pub const SEARCH_FIRST_SEASON: i32 = 2008;
    /// First season with Statcast leaderboards
    pub const FIRST_SEASON: i32 = 2015;
    /// First season with pitch arsenal leaderboards
    pub const ARSENAL_FIRST_SEASON: i32 = 2019;
    /// Largest date span requested per player search
    pub const PLAYER_CHUNK_DAYS: i64 = 60;
    /// Error text for an empty Savant export
    pub const NO_DATA_MESSAGE: &str = "No statcast data found";
}

/// Stats API defaults
pub mod stats_api {
    /// Sport id for MLB
    pub const MLB_SPORT_ID: i64 = 1;
    /// American and National league ids
    pub const DEFAULT_LEAGUE_IDS: &str = "103,104";
    /// Default leader list size
    pub const DEFAULT_LEADER_LIMIT: i64 = 10;
    /// Hydration applied to schedule requests
    pub const SCHEDULE_HYDRATE: &str =
        "decisions,probablePitcher(note),linescore,broadcasts,game(content(media(epg))),seriesStatus";
    /// Types accepted by the meta endpoint
    pub const META_TYPES: &[&str] = &[
        "awards",
        "baseballStats",
        "eventTypes",
        "gameStatus",
        "gameTypes",
        "hitTrajectories",
        "jobTypes",
        "languages",
        "leagueLeaderTypes",
        "logicalEvents",
        "metrics",
        "pitchCodes",
        "pitchTypes",
        "platforms",
        "positions",
        "reviewReasons",
        "rosterTypes",
        "scheduleEventTypes",
        "situationCodes",
        "sky",
        "standingsTypes",
        "statGroups",
        "statTypes",
        "windDirection",
    ];
}
