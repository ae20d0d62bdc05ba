//! Wire models for the standings endpoint

use serde::{Deserialize, Serialize};

use super::common::{CompetitionInfo, SeasonInfo, TeamRef};

/// Raw standings response. Upstream groups tables by standing type
/// (`TOTAL`, `HOME`, `AWAY`); normalization reads the first group only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsResponse {
    pub competition: CompetitionInfo,
    pub season: SeasonInfo,
    pub standings: Vec<StandingsGroup>,
}

/// One standings group with its table rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsGroup {
    #[serde(rename = "type", default)]
    pub group_type: Option<String>,
    pub table: Vec<TableEntry>,
}

/// One raw table row. Field names follow the upstream contract
/// (`playedGames`, `draw`); normalization remaps them to the proxy schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableEntry {
    pub position: u32,
    pub team: TeamRef,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    #[serde(rename = "goalsFor")]
    pub goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
}
