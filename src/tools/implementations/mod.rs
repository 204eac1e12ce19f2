// ABOUTME: Tool implementations grouped by subject
// ABOUTME: Each submodule exposes a create_*_tools() factory used by the registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

/// Schedule, boxscore, linescore, scoring plays, highlights, game pace
pub mod games;
/// Player stats, player lookup, league leaders
pub mod players;
/// Raw endpoint access and endpoint reference
pub mod reference;
/// Baseball Savant statcast searches and leaderboards
pub mod statcast;
/// Standings, team leaders, roster, last and next game
pub mod teams;

pub use games::create_game_tools;
pub use players::create_player_tools;
pub use reference::create_reference_tools;
pub use statcast::create_statcast_tools;
pub use teams::create_team_tools;
