//! Stable response schema served by the proxy
//!
//! These types define the JSON shape callers depend on. Field names are
//! part of the contract; upstream field names that differ (`playedGames`,
//! `draw`) are remapped during normalization and never leak through.
//! Optional fields serialize as explicit `null` rather than being dropped
//! so the schema stays structurally constant.

use serde::{Deserialize, Serialize};

/// One row of a normalized league table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingRow {
    pub position: u32,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub points: u32,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    pub crest: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
}

/// Normalized league table for one competition season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsTable {
    /// Full competition name as reported by upstream
    pub competition: String,
    /// Four-character season label, e.g. "2023"
    pub season: String,
    pub table: Vec<StandingRow>,
}

/// Player identity within a scorer entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerPlayer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// Team identity within a scorer entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerTeam {
    pub id: u64,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub crest: String,
}

/// One entry of a top scorers ranking. Assist and penalty counts are
/// passed through as-is since upstream omits them for some competitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerEntry {
    pub player: ScorerPlayer,
    pub team: ScorerTeam,
    pub goals: u32,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
}

/// Top scorers ranking for one competition season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopScorers {
    pub competition: String,
    pub season: String,
    pub scorers: Vec<ScorerEntry>,
}

/// Squad member as served inside a team's roster. Absent upstream fields
/// stay `null` here; only the flattened player records substitute defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// One team with its full squad roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamSquad {
    pub id: u64,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    pub squad: Vec<PlayerSummary>,
}

/// All squad rosters of a competition, in standings order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionSquads {
    pub competition: String,
    pub season: String,
    pub teams: Vec<TeamSquad>,
}

/// Flattened per-player record with team context and defaults filled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub nationality: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub team: String,
    #[serde(rename = "teamId")]
    pub team_id: u64,
    #[serde(rename = "shirtNumber", default)]
    pub shirt_number: Option<u32>,
    pub role: String,
    pub age: u32,
}

/// Every player of a competition as one flat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionPlayers {
    pub competition: String,
    pub season: String,
    pub players: Vec<PlayerRecord>,
}
