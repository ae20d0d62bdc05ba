//! Squad roster aggregation

use tracing::{info, instrument};

use crate::error::AppError;
use crate::schema::{CompetitionSquads, PlayerSummary, TeamSquad};
use crate::upstream::UpstreamClient;
use crate::upstream::models::{SquadMember, TeamResponse};

use super::fanout::{self, ConcurrencyPolicy};
use super::standings::season_label;

/// Fetches every team of a competition with its full squad roster. Team
/// details are requested concurrently; a team whose request fails is
/// dropped from the result instead of failing the whole operation.
#[instrument(skip(client))]
pub async fn get_squads_for_competition(
    client: &UpstreamClient,
    competition_code: &str,
) -> Result<CompetitionSquads, AppError> {
    info!("Fetching squads for competition {competition_code}");

    let (standings, team_ids) = fanout::enumerate_teams(client, competition_code).await?;
    let teams =
        fanout::fetch_team_details(client, &team_ids, ConcurrencyPolicy::ConcurrentJoin).await;

    Ok(CompetitionSquads {
        competition: standings.competition.name.clone(),
        season: season_label(&standings.season.start_date),
        teams: teams.iter().map(project_team_squad).collect(),
    })
}

/// Projects a raw team record onto the roster schema. Absent fields stay
/// absent here; no defaults are substituted at roster level.
fn project_team_squad(team: &TeamResponse) -> TeamSquad {
    TeamSquad {
        id: team.id,
        name: team.name.clone(),
        short_name: team.short_name.clone(),
        crest: team.crest.clone(),
        squad: team.squad.iter().map(project_player_summary).collect(),
    }
}

fn project_player_summary(member: &SquadMember) -> PlayerSummary {
    PlayerSummary {
        id: member.id,
        name: member.name.clone(),
        position: member.position.clone(),
        date_of_birth: member.date_of_birth.clone(),
        nationality: member.nationality.clone(),
    }
}
