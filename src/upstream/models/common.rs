//! Wire fragments shared by several upstream endpoints

use serde::{Deserialize, Serialize};

/// Competition header attached to standings and scorers responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionInfo {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Season header attached to standings and scorers responses. The season
/// label is derived from the start date, so that field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonInfo {
    #[serde(rename = "startDate")]
    pub start_date: String,
}

/// Team reference embedded in table entries and scorer entries. All fields
/// are required; upstream always populates them in these contexts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRef {
    pub id: u64,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub crest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_info_without_code() {
        let json = r#"{"name": "Premier League"}"#;
        let info: CompetitionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "Premier League");
        assert_eq!(info.code, None);
    }

    #[test]
    fn test_season_info_start_date_rename() {
        let json = r#"{"startDate": "2023-08-11", "endDate": "2024-05-19"}"#;
        let season: SeasonInfo = serde_json::from_str(json).unwrap();
        assert_eq!(season.start_date, "2023-08-11");
    }

    #[test]
    fn test_team_ref_requires_all_fields() {
        let json = r#"{"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "crest": "https://crests.example.com/57.png"}"#;
        let team: TeamRef = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, 57);
        assert_eq!(team.short_name, "Arsenal");

        let missing_crest = r#"{"id": 57, "name": "Arsenal FC", "shortName": "Arsenal"}"#;
        assert!(serde_json::from_str::<TeamRef>(missing_crest).is_err());
    }
}
