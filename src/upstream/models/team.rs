//! Wire models for the team detail endpoint

use serde::{Deserialize, Serialize};

/// Raw team detail response with the squad roster. Everything beyond id
/// and name is optional here; team payloads vary much more than table
/// rows, and lower-league or freshly promoted teams often lack fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamResponse {
    pub id: u64,
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub squad: Vec<SquadMember>,
}

/// One raw squad member. Only identity is guaranteed; the player
/// flattening operation substitutes defaults for the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(rename = "shirtNumber", default)]
    pub shirt_number: Option<u32>,
    #[serde(default)]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squad_member_default_fields() {
        // A minimal member parses with every optional field absent
        let json = r#"{"id": 99999, "name": "Academy Prospect"}"#;
        let member: SquadMember = serde_json::from_str(json).unwrap();

        assert_eq!(member.id, 99999);
        assert_eq!(member.name, "Academy Prospect");
        assert_eq!(member.position, None);
        assert_eq!(member.date_of_birth, None);
        assert_eq!(member.nationality, None);
        assert_eq!(member.shirt_number, None);
        assert_eq!(member.role, None);
    }

    #[test]
    fn test_squad_member_full_fields() {
        let json = r#"{
            "id": 3754,
            "name": "Bukayo Saka",
            "position": "Right Winger",
            "dateOfBirth": "2001-09-05",
            "nationality": "England",
            "shirtNumber": 7,
            "role": "PLAYER"
        }"#;

        let member: SquadMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.position.as_deref(), Some("Right Winger"));
        assert_eq!(member.date_of_birth.as_deref(), Some("2001-09-05"));
        assert_eq!(member.shirt_number, Some(7));
    }

    #[test]
    fn test_team_response_without_squad() {
        let json = r#"{"id": 57, "name": "Arsenal FC"}"#;
        let team: TeamResponse = serde_json::from_str(json).unwrap();

        assert_eq!(team.id, 57);
        assert_eq!(team.short_name, None);
        assert_eq!(team.crest, None);
        assert!(team.squad.is_empty());
    }

    #[test]
    fn test_team_response_full_shape() {
        let json = r#"{
            "id": 57,
            "name": "Arsenal FC",
            "shortName": "Arsenal",
            "crest": "https://crests.example.com/57.png",
            "founded": 1886,
            "squad": [
                {"id": 3754, "name": "Bukayo Saka", "position": "Right Winger"},
                {"id": 4832, "name": "Declan Rice"}
            ]
        }"#;

        let team: TeamResponse = serde_json::from_str(json).unwrap();
        assert_eq!(team.short_name.as_deref(), Some("Arsenal"));
        assert_eq!(team.squad.len(), 2);
        assert_eq!(team.squad[1].position, None);
    }
}
