//! Team enumeration and per-team request fan-out
//!
//! Both roster operations share the same two-step shape: enumerate the
//! competition's teams from its standings, then fetch each team's detail
//! record. Only the enumeration step is fatal; failed team requests drop
//! that team from the result and the rest carries on.

use futures::future::join_all;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::constants::pacing;
use crate::error::AppError;
use crate::upstream::models::{StandingsResponse, TeamResponse};
use crate::upstream::{UpstreamClient, build_standings_url};

/// Pacing of a sequential fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    /// Delay inserted before every team request after the first.
    pub call_spacing: Duration,
    /// Wait applied after a rate limited attempt before retrying it.
    pub rate_limit_backoff: Duration,
    /// Total attempts per team request. Only rate limited attempts are
    /// retried; everything else fails the request on the first attempt.
    pub max_attempts: u32,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            call_spacing: pacing::TEAM_CALL_SPACING,
            rate_limit_backoff: pacing::RATE_LIMIT_BACKOFF,
            max_attempts: pacing::MAX_ATTEMPTS,
        }
    }
}

impl PacingPolicy {
    /// Policy with all waiting removed. Attempt counting still applies,
    /// so retry behavior stays observable against a local mock server.
    pub fn immediate() -> Self {
        Self {
            call_spacing: Duration::ZERO,
            rate_limit_backoff: Duration::ZERO,
            max_attempts: pacing::MAX_ATTEMPTS,
        }
    }
}

/// How the per-team fan-out issues its requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    /// All team requests in flight at once, joined at the end.
    ConcurrentJoin,
    /// One team request at a time under the given pacing.
    SequentialPaced(PacingPolicy),
}

/// Fetches the standings of a competition and collects its team ids in
/// standings order. This enumeration step is the one call whose failure
/// aborts a roster operation.
pub(super) async fn enumerate_teams(
    client: &UpstreamClient,
    competition_code: &str,
) -> Result<(StandingsResponse, Vec<u64>), AppError> {
    let response = client.standings(competition_code).await?;

    let team_ids: Vec<u64> = match response.standings.first() {
        Some(group) => group.table.iter().map(|entry| entry.team.id).collect(),
        None => {
            let url = build_standings_url(client.api_domain(), competition_code);
            return Err(AppError::api_no_data(
                "Standings response contained no table groups",
                url,
            ));
        }
    };

    Ok((response, team_ids))
}

/// Fetches team detail records for the given ids under the chosen policy.
/// Input order is preserved for the teams that survive.
pub(super) async fn fetch_team_details(
    client: &UpstreamClient,
    team_ids: &[u64],
    policy: ConcurrencyPolicy,
) -> Vec<TeamResponse> {
    match policy {
        ConcurrencyPolicy::ConcurrentJoin => fetch_concurrent(client, team_ids).await,
        ConcurrencyPolicy::SequentialPaced(pacing) => {
            fetch_sequential(client, team_ids, pacing).await
        }
    }
}

async fn fetch_concurrent(client: &UpstreamClient, team_ids: &[u64]) -> Vec<TeamResponse> {
    let futures = team_ids
        .iter()
        .map(|&team_id| async move { (team_id, client.team(team_id).await) });

    let mut teams = Vec::with_capacity(team_ids.len());
    for (team_id, result) in join_all(futures).await {
        match result {
            Ok(team) => teams.push(team),
            Err(e) => warn!("Dropping team {team_id} from result: {e}"),
        }
    }
    teams
}

async fn fetch_sequential(
    client: &UpstreamClient,
    team_ids: &[u64],
    pacing: PacingPolicy,
) -> Vec<TeamResponse> {
    let mut teams = Vec::with_capacity(team_ids.len());

    for (index, &team_id) in team_ids.iter().enumerate() {
        if index > 0 {
            sleep(pacing.call_spacing).await;
        }

        match fetch_team_paced(client, team_id, pacing).await {
            Ok(team) => teams.push(team),
            Err(e) => warn!("Dropping team {team_id} from result: {e}"),
        }
    }

    teams
}

/// One team fetch under the pacing policy. A rate limited attempt backs
/// off and goes again until the attempt budget is spent; any other error
/// is returned as-is on the first attempt.
async fn fetch_team_paced(
    client: &UpstreamClient,
    team_id: u64,
    pacing: PacingPolicy,
) -> Result<TeamResponse, AppError> {
    let mut attempt = 1;
    loop {
        match client.team(team_id).await {
            Ok(team) => return Ok(team),
            Err(e) if e.is_rate_limit() && attempt < pacing.max_attempts => {
                info!(
                    "Rate limited fetching team {team_id}, backing off {:?} before retrying",
                    pacing.rate_limit_backoff
                );
                sleep(pacing.rate_limit_backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
