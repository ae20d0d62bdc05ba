//! Wire models for the top scorers endpoint

use serde::{Deserialize, Serialize};

use super::common::{CompetitionInfo, SeasonInfo, TeamRef};

/// Raw top scorers response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorersResponse {
    pub competition: CompetitionInfo,
    pub season: SeasonInfo,
    pub scorers: Vec<ScorerItem>,
}

/// One raw scorer entry. Assist and penalty counts are absent for some
/// competitions and stay optional all the way to the response schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerItem {
    pub player: ScorerPlayerInfo,
    pub team: TeamRef,
    pub goals: u32,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
}

/// Player identity inside a scorer entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerPlayerInfo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}
