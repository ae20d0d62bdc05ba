//! URL builders for upstream API endpoints

/// Builds the URL for fetching competition standings
///
/// # Example
/// ```
/// use football_proxy::upstream::build_standings_url;
///
/// let url = build_standings_url("https://api.football-data.org/v4", "PL");
/// assert_eq!(url, "https://api.football-data.org/v4/competitions/PL/standings");
/// ```
pub fn build_standings_url(api_domain: &str, competition_code: &str) -> String {
    format!("{api_domain}/competitions/{competition_code}/standings")
}

/// Builds the URL for fetching a competition's top scorers
///
/// # Example
/// ```
/// use football_proxy::upstream::build_scorers_url;
///
/// let url = build_scorers_url("https://api.football-data.org/v4", "SA", 10);
/// assert_eq!(url, "https://api.football-data.org/v4/competitions/SA/scorers?limit=10");
/// ```
pub fn build_scorers_url(api_domain: &str, competition_code: &str, limit: u32) -> String {
    format!("{api_domain}/competitions/{competition_code}/scorers?limit={limit}")
}

/// Builds the URL for fetching a single team with its squad roster
///
/// # Example
/// ```
/// use football_proxy::upstream::build_team_url;
///
/// let url = build_team_url("https://api.football-data.org/v4", 57);
/// assert_eq!(url, "https://api.football-data.org/v4/teams/57");
/// ```
pub fn build_team_url(api_domain: &str, team_id: u64) -> String {
    format!("{api_domain}/teams/{team_id}")
}
