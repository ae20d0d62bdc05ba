//! League table normalization

use tracing::{info, instrument};

use crate::error::AppError;
use crate::schema::{StandingRow, StandingsTable};
use crate::upstream::models::{StandingsResponse, TableEntry};
use crate::upstream::{UpstreamClient, build_standings_url};

/// Fetches and normalizes the league table of a competition.
#[instrument(skip(client))]
pub async fn get_standings(
    client: &UpstreamClient,
    competition_code: &str,
) -> Result<StandingsTable, AppError> {
    info!("Fetching standings for competition {competition_code}");
    let response = client.standings(competition_code).await?;
    let url = build_standings_url(client.api_domain(), competition_code);
    normalize_standings(&response, &url)
}

/// Projects a raw standings response onto the stable response schema.
/// Only the first standings group is read; upstream lists the overall
/// table before any home or away splits.
pub fn normalize_standings(
    response: &StandingsResponse,
    url: &str,
) -> Result<StandingsTable, AppError> {
    let group = response
        .standings
        .first()
        .ok_or_else(|| AppError::api_no_data("Standings response contained no table groups", url))?;

    Ok(StandingsTable {
        competition: response.competition.name.clone(),
        season: season_label(&response.season.start_date),
        table: group.table.iter().map(project_row).collect(),
    })
}

/// Four-character season label cut from a season start date. Plain
/// truncation, not date parsing; "2023-08-11" becomes "2023" and a
/// shorter input is passed through whole.
pub fn season_label(start_date: &str) -> String {
    start_date.chars().take(4).collect()
}

fn project_row(entry: &TableEntry) -> StandingRow {
    StandingRow {
        position: entry.position,
        name: entry.team.name.clone(),
        short_name: entry.team.short_name.clone(),
        points: entry.points,
        goals_for: entry.goals_for,
        goals_against: entry.goals_against,
        goal_difference: entry.goal_difference,
        crest: entry.team.crest.clone(),
        played: entry.played_games,
        won: entry.won,
        drawn: entry.draw,
        lost: entry.lost,
    }
}
