//! Top scorers normalization

use tracing::{info, instrument};

use crate::error::AppError;
use crate::schema::{ScorerEntry, ScorerPlayer, ScorerTeam, TopScorers};
use crate::upstream::UpstreamClient;
use crate::upstream::models::{ScorerItem, ScorersResponse};

use super::standings::season_label;

/// Fetches and normalizes the top scorers of a competition. The limit is
/// forwarded to upstream, which caps the ranking server-side.
#[instrument(skip(client))]
pub async fn get_top_scorers(
    client: &UpstreamClient,
    competition_code: &str,
    limit: u32,
) -> Result<TopScorers, AppError> {
    info!("Fetching top scorers for competition {competition_code} (limit {limit})");
    let response = client.scorers(competition_code, limit).await?;
    Ok(normalize_scorers(&response))
}

/// Projects a raw scorers response onto the stable response schema.
/// Assist and penalty counts pass through untouched, absent values
/// included.
pub fn normalize_scorers(response: &ScorersResponse) -> TopScorers {
    TopScorers {
        competition: response.competition.name.clone(),
        season: season_label(&response.season.start_date),
        scorers: response.scorers.iter().map(project_scorer).collect(),
    }
}

fn project_scorer(item: &ScorerItem) -> ScorerEntry {
    ScorerEntry {
        player: ScorerPlayer {
            id: item.player.id,
            name: item.player.name.clone(),
            nationality: item.player.nationality.clone(),
            position: item.player.position.clone(),
        },
        team: ScorerTeam {
            id: item.team.id,
            name: item.team.name.clone(),
            short_name: item.team.short_name.clone(),
            crest: item.team.crest.clone(),
        },
        goals: item.goals,
        assists: item.assists,
        penalties: item.penalties,
    }
}
