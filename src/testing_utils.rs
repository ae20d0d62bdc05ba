use serde_json::{Value, json};

/// Test utilities for creating mock upstream payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a standings payload with `team_count` table rows in rank
    /// order. Row at position `p` gets team id `100 + p` so tests can
    /// address individual teams.
    pub fn create_standings_payload(
        competition_name: &str,
        code: &str,
        start_date: &str,
        team_count: u32,
    ) -> Value {
        let table: Vec<Value> = (1..=team_count)
            .map(|position| {
                let team_id = 100 + u64::from(position);
                let won = team_count + 5 - position;
                let draw = 6;
                let played = won + draw + position + 2;
                json!({
                    "position": position,
                    "team": {
                        "id": team_id,
                        "name": format!("Team {position}"),
                        "shortName": format!("T{position}"),
                        "crest": format!("https://crests.example.com/{team_id}.png")
                    },
                    "playedGames": played,
                    "won": won,
                    "draw": draw,
                    "lost": position + 2,
                    "points": 3 * won + draw,
                    "goalsFor": 40 + won,
                    "goalsAgainst": 30 + position,
                    "goalDifference": (40 + won) as i64 - (30 + position) as i64
                })
            })
            .collect();

        json!({
            "competition": {"name": competition_name, "code": code},
            "season": {"startDate": start_date},
            "standings": [
                {"type": "TOTAL", "table": table},
                {"type": "HOME", "table": []}
            ]
        })
    }

    /// Creates a scorers payload with `count` entries in rank order.
    /// Even-ranked entries omit their penalty count.
    pub fn create_scorers_payload(
        competition_name: &str,
        code: &str,
        start_date: &str,
        count: u32,
    ) -> Value {
        let scorers: Vec<Value> = (1..=count)
            .map(|rank| {
                let team_id = 100 + u64::from(rank);
                let mut entry = json!({
                    "player": {
                        "id": 1000 + u64::from(rank),
                        "name": format!("Scorer {rank}"),
                        "nationality": "England",
                        "position": "Centre-Forward"
                    },
                    "team": {
                        "id": team_id,
                        "name": format!("Team {rank}"),
                        "shortName": format!("T{rank}"),
                        "crest": format!("https://crests.example.com/{team_id}.png")
                    },
                    "goals": 30 - rank,
                    "assists": 5
                });
                if rank % 2 != 0 {
                    entry["penalties"] = json!(rank);
                }
                entry
            })
            .collect();

        json!({
            "competition": {"name": competition_name, "code": code},
            "season": {"startDate": start_date},
            "scorers": scorers
        })
    }

    /// Creates a team payload whose squad holds one fully populated member
    /// and one carrying only identity fields.
    pub fn create_team_payload(team_id: u64, name: &str) -> Value {
        Self::create_team_payload_with_squad(
            team_id,
            name,
            json!([
                Self::create_squad_member(team_id * 10 + 1, "First Player", "2000-05-15"),
                Self::create_minimal_squad_member(team_id * 10 + 2, "Second Player"),
            ]),
        )
    }

    /// Creates a team payload with an explicit squad array.
    pub fn create_team_payload_with_squad(team_id: u64, name: &str, squad: Value) -> Value {
        json!({
            "id": team_id,
            "name": name,
            "shortName": name,
            "crest": format!("https://crests.example.com/{team_id}.png"),
            "squad": squad
        })
    }

    /// Creates a fully populated squad member.
    pub fn create_squad_member(member_id: u64, name: &str, date_of_birth: &str) -> Value {
        json!({
            "id": member_id,
            "name": name,
            "position": "Midfielder",
            "dateOfBirth": date_of_birth,
            "nationality": "Spain",
            "shirtNumber": 8,
            "role": "PLAYER"
        })
    }

    /// Creates a squad member with only identity fields.
    pub fn create_minimal_squad_member(member_id: u64, name: &str) -> Value {
        json!({
            "id": member_id,
            "name": name
        })
    }
}
