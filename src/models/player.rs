// ABOUTME: Player reshaping: bio plus stat splits from a hydrated person record
// ABOUTME: Also implements the name-part matcher behind player lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

use serde::Serialize;
use serde_json::{Map, Value};

use super::{array_at, i64_at, str_at, text_at, value_at};
use crate::errors::{AppError, AppResult};

/// One stat split (`type`/`group`/`season` with the raw stat line)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSplit {
    /// Stat type display name (`season`, `career`, `gameLog`, ...)
    #[serde(rename = "type")]
    pub stat_type: String,
    /// Stat group display name (`hitting`, `pitching`, `fielding`)
    pub group: String,
    /// Season, absent for career splits
    pub season: Option<String>,
    /// Raw stat line
    pub stats: Value,
}

/// Player bio with requested stat splits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStatData {
    /// MLB person id
    pub id: i64,
    /// Preferred first name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Whether the player is active
    pub active: bool,
    /// Current team name
    pub current_team: String,
    /// Primary position abbreviation
    pub position: String,
    /// Nickname
    pub nickname: Option<String>,
    /// Date last played
    pub last_played: Option<String>,
    /// MLB debut date
    pub mlb_debut: Option<String>,
    /// Batting side
    pub bat_side: String,
    /// Throwing hand
    pub pitch_hand: String,
    /// Stat splits in upstream order
    pub stats: Vec<StatSplit>,
}

impl PlayerStatData {
    /// Build from a `person` response hydrated with `stats(...)` and `currentTeam`
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the response holds no person
    pub fn from_person_response(response: &Value, player_id: i64) -> AppResult<Self> {
        let person = array_at(response, "/people")
            .first()
            .ok_or_else(|| AppError::not_found(format!("No player found with id {player_id}")))?;

        let stats = array_at(person, "/stats")
            .iter()
            .flat_map(|block| {
                let stat_type = text_at(block, "/type/displayName");
                let group = text_at(block, "/group/displayName");
                array_at(block, "/splits").iter().map(move |split| StatSplit {
                    stat_type: stat_type.clone(),
                    group: group.clone(),
                    season: str_at(split, "/season").map(str::to_owned),
                    stats: value_at(split, "/stat"),
                })
            })
            .collect();

        let first_name = str_at(person, "/useName")
            .or_else(|| str_at(person, "/firstName"))
            .unwrap_or_default()
            .to_owned();

        Ok(Self {
            id: i64_at(person, "/id").unwrap_or(player_id),
            first_name,
            last_name: text_at(person, "/lastName"),
            active: person
                .get("active")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            current_team: text_at(person, "/currentTeam/name"),
            position: text_at(person, "/primaryPosition/abbreviation"),
            nickname: str_at(person, "/nickName").map(str::to_owned),
            last_played: str_at(person, "/lastPlayedDate").map(str::to_owned),
            mlb_debut: str_at(person, "/mlbDebutDate").map(str::to_owned),
            bat_side: text_at(person, "/batSide/description"),
            pitch_hand: text_at(person, "/pitchHand/description"),
            stats,
        })
    }
}

/// Lowercased, whitespace-separated name parts
#[must_use]
pub fn name_parts(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_lowercase).collect()
}

/// Whether every part appears in at least one of the person's field values
#[must_use]
pub fn person_matches(person: &Map<String, Value>, parts: &[String]) -> bool {
    let haystack: Vec<String> = person
        .values()
        .map(|value| match value {
            Value::String(s) => s.to_lowercase(),
            other => other.to_string().to_lowercase(),
        })
        .collect();
    parts
        .iter()
        .all(|part| haystack.iter().any(|field| field.contains(part.as_str())))
}

/// People from a `sports_players` response matching `name`
#[must_use]
pub fn matching_people(response: &Value, name: &str) -> Vec<Value> {
    let parts = name_parts(name);
    if parts.is_empty() {
        return Vec::new();
    }
    array_at(response, "/people")
        .iter()
        .filter(|person| {
            person
                .as_object()
                .is_some_and(|fields| person_matches(fields, &parts))
        })
        .cloned()
        .collect()
}
