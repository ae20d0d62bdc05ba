//! Flattened player records
//!
//! Flattening substitutes fixed defaults for absent squad member fields
//! so every record carries the same shape. The roster operation leaves
//! the same fields absent; the two surfaces are deliberately different.

use tracing::{info, instrument};

use crate::constants::defaults;
use crate::error::AppError;
use crate::schema::{CompetitionPlayers, PlayerRecord};
use crate::upstream::UpstreamClient;
use crate::upstream::models::{SquadMember, TeamResponse};

use super::fanout::{self, ConcurrencyPolicy, PacingPolicy};
use super::standings::season_label;

/// Fetches every player of a competition as one flat list. Team details
/// are requested one at a time under the default pacing to stay inside
/// the upstream rate limit.
#[instrument(skip(client))]
pub async fn get_players_by_competition(
    client: &UpstreamClient,
    competition_code: &str,
) -> Result<CompetitionPlayers, AppError> {
    get_players_by_competition_with_policy(
        client,
        competition_code,
        ConcurrencyPolicy::SequentialPaced(PacingPolicy::default()),
    )
    .await
}

/// Same as [`get_players_by_competition`] with an explicit fan-out policy.
#[instrument(skip(client))]
pub async fn get_players_by_competition_with_policy(
    client: &UpstreamClient,
    competition_code: &str,
    policy: ConcurrencyPolicy,
) -> Result<CompetitionPlayers, AppError> {
    info!("Fetching players for competition {competition_code}");

    let (standings, team_ids) = fanout::enumerate_teams(client, competition_code).await?;
    let teams = fanout::fetch_team_details(client, &team_ids, policy).await;

    let players = teams
        .iter()
        .flat_map(|team| {
            team.squad
                .iter()
                .map(move |member| project_player_record(member, team))
        })
        .collect();

    Ok(CompetitionPlayers {
        competition: standings.competition.name.clone(),
        season: season_label(&standings.season.start_date),
        players,
    })
}

/// Builds one flattened record from a squad member and its team context.
/// Absent fields take fixed defaults. The age default applies whenever no
/// usable birth year exists and is independent of the date of birth
/// default; a malformed date passes through while the age falls back.
fn project_player_record(member: &SquadMember, team: &TeamResponse) -> PlayerRecord {
    let age = match &member.date_of_birth {
        Some(date_of_birth) => age_from_birth_date(date_of_birth),
        None => defaults::AGE,
    };

    PlayerRecord {
        id: member.id,
        name: member.name.clone(),
        position: member
            .position
            .clone()
            .unwrap_or_else(|| defaults::POSITION.to_string()),
        nationality: member
            .nationality
            .clone()
            .unwrap_or_else(|| defaults::NATIONALITY.to_string()),
        date_of_birth: member
            .date_of_birth
            .clone()
            .unwrap_or_else(|| defaults::DATE_OF_BIRTH.to_string()),
        team: team.name.clone(),
        team_id: team.id,
        shirt_number: member.shirt_number,
        role: member
            .role
            .clone()
            .unwrap_or_else(|| defaults::ROLE.to_string()),
        age,
    }
}

/// Age from the leading four-digit year of a birth date, measured against
/// the fixed reference year.
fn age_from_birth_date(date_of_birth: &str) -> u32 {
    date_of_birth
        .get(..4)
        .and_then(|year| year.parse::<u32>().ok())
        .map(|year| defaults::AGE_REFERENCE_YEAR.saturating_sub(year))
        .unwrap_or(defaults::AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> UpstreamClient {
        let config = Config {
            api_token: "test-token".to_string(),
            api_domain: mock_server.uri(),
            log_file_path: None,
            http_timeout_seconds: 5,
        };
        UpstreamClient::new(&config).unwrap()
    }

    fn immediate_policy() -> ConcurrencyPolicy {
        ConcurrencyPolicy::SequentialPaced(PacingPolicy::immediate())
    }

    fn sample_team(team_id: u64, name: &str) -> TeamResponse {
        TeamResponse {
            id: team_id,
            name: name.to_string(),
            short_name: Some(name.to_string()),
            crest: None,
            squad: vec![],
        }
    }

    fn minimal_member(member_id: u64, name: &str) -> SquadMember {
        SquadMember {
            id: member_id,
            name: name.to_string(),
            position: None,
            date_of_birth: None,
            nationality: None,
            shirt_number: None,
            role: None,
        }
    }

    #[test]
    fn test_project_fills_defaults_for_minimal_member() {
        let team = sample_team(101, "Team 1");
        let member = minimal_member(5001, "Academy Prospect");

        let record = project_player_record(&member, &team);
        assert_eq!(record.position, "Unknown");
        assert_eq!(record.nationality, "Unknown");
        assert_eq!(record.role, "PLAYER");
        assert_eq!(record.date_of_birth, "1990-01-01");
        assert_eq!(record.age, 25);
        assert_eq!(record.shirt_number, None);
        assert_eq!(record.team, "Team 1");
        assert_eq!(record.team_id, 101);
    }

    #[test]
    fn test_project_keeps_present_fields() {
        let team = sample_team(101, "Team 1");
        let mut member = minimal_member(5001, "Bukayo Saka");
        member.position = Some("Right Winger".to_string());
        member.nationality = Some("England".to_string());
        member.date_of_birth = Some("2001-09-05".to_string());
        member.shirt_number = Some(7);
        member.role = Some("CAPTAIN".to_string());

        let record = project_player_record(&member, &team);
        assert_eq!(record.position, "Right Winger");
        assert_eq!(record.nationality, "England");
        assert_eq!(record.date_of_birth, "2001-09-05");
        assert_eq!(record.shirt_number, Some(7));
        assert_eq!(record.role, "CAPTAIN");
        assert_eq!(record.age, 23);
    }

    #[test]
    fn test_project_malformed_birth_date_passes_through_with_default_age() {
        let team = sample_team(101, "Team 1");
        let mut member = minimal_member(5001, "Unknown Import");
        member.date_of_birth = Some("05/15/2000".to_string());

        let record = project_player_record(&member, &team);
        assert_eq!(record.date_of_birth, "05/15/2000");
        assert_eq!(record.age, 25);
    }

    #[test]
    fn test_age_from_birth_date() {
        assert_eq!(age_from_birth_date("2000-05-15"), 24);
        assert_eq!(age_from_birth_date("1999-12-31"), 25);
        assert_eq!(age_from_birth_date("2024-01-01"), 0);
    }

    #[test]
    fn test_age_from_birth_date_unusable_year() {
        assert_eq!(age_from_birth_date(""), 25);
        assert_eq!(age_from_birth_date("20"), 25);
        assert_eq!(age_from_birth_date("abcd-01-01"), 25);
        assert_eq!(age_from_birth_date("2030-01-01"), 0);
    }

    #[tokio::test]
    async fn test_players_flattens_teams_in_standings_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::create_standings_payload(
                    "Premier League",
                    "PL",
                    "2023-08-11",
                    2,
                ),
            ))
            .mount(&mock_server)
            .await;
        for team_id in [101u64, 102] {
            Mock::given(method("GET"))
                .and(path(format!("/teams/{team_id}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(
                    TestDataBuilder::create_team_payload(
                        team_id,
                        &format!("Team {}", team_id - 100),
                    ),
                ))
                .mount(&mock_server)
                .await;
        }

        let client = create_test_client(&mock_server);
        let players =
            get_players_by_competition_with_policy(&client, "PL", immediate_policy())
                .await
                .unwrap();

        assert_eq!(players.competition, "Premier League");
        assert_eq!(players.season, "2023");
        assert_eq!(players.players.len(), 4);

        let team_ids: Vec<u64> = players.players.iter().map(|player| player.team_id).collect();
        assert_eq!(team_ids, vec![101, 101, 102, 102]);
    }

    #[tokio::test]
    async fn test_players_substitutes_defaults_in_flat_records() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::create_standings_payload(
                    "Premier League",
                    "PL",
                    "2023-08-11",
                    1,
                ),
            ))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/101"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::create_team_payload_with_squad(
                    101,
                    "Team 1",
                    json!([TestDataBuilder::create_minimal_squad_member(5001, "Prospect")]),
                ),
            ))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let players =
            get_players_by_competition_with_policy(&client, "PL", immediate_policy())
                .await
                .unwrap();

        let record = &players.players[0];
        assert_eq!(record.position, "Unknown");
        assert_eq!(record.nationality, "Unknown");
        assert_eq!(record.role, "PLAYER");
        assert_eq!(record.date_of_birth, "1990-01-01");
        assert_eq!(record.age, 25);
    }

    #[tokio::test]
    async fn test_players_recovers_from_one_rate_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::create_standings_payload(
                    "Premier League",
                    "PL",
                    "2023-08-11",
                    1,
                ),
            ))
            .mount(&mock_server)
            .await;
        // First team attempt is rate limited, the retry succeeds
        Mock::given(method("GET"))
            .and(path("/teams/101"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/101"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestDataBuilder::create_team_payload(101, "Team 1")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let players =
            get_players_by_competition_with_policy(&client, "PL", immediate_policy())
                .await
                .unwrap();

        assert_eq!(players.players.len(), 2);
    }

    #[tokio::test]
    async fn test_players_drops_team_failing_with_other_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::create_standings_payload(
                    "Premier League",
                    "PL",
                    "2023-08-11",
                    2,
                ),
            ))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/101"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/teams/102"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestDataBuilder::create_team_payload(102, "Team 2")),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let players =
            get_players_by_competition_with_policy(&client, "PL", immediate_policy())
                .await
                .unwrap();

        let team_ids: Vec<u64> = players.players.iter().map(|player| player.team_id).collect();
        assert_eq!(team_ids, vec![102, 102]);
    }

    #[tokio::test]
    async fn test_players_standings_failure_is_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/standings"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result =
            get_players_by_competition_with_policy(&client, "PL", immediate_policy()).await;

        assert!(matches!(result, Err(AppError::ApiRateLimit { .. })));
    }
}
