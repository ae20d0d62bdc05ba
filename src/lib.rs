//! Football League Aggregation Proxy Library
//!
//! This library provides a read-only aggregation layer in front of the
//! football-data.org API: league standings, top scorers and full squad
//! rosters, normalized into a stable JSON schema.
//!
//! # Examples
//!
//! ```rust,no_run
//! use football_proxy::config::Config;
//! use football_proxy::error::AppError;
//! use football_proxy::service::get_standings;
//! use football_proxy::upstream::UpstreamClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = UpstreamClient::new(&config)?;
//!
//!     // Fetch and normalize the Premier League table
//!     let standings = get_standings(&client, "PL").await?;
//!     println!("{}", serde_json::to_string_pretty(&standings)?);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod competitions;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod schema;
pub mod service;
pub mod testing_utils;
pub mod upstream;

// Re-export commonly used types for convenience
pub use competitions::Competition;
pub use config::Config;
pub use error::AppError;
pub use schema::{
    CompetitionPlayers, CompetitionSquads, PlayerRecord, PlayerSummary, ScorerEntry, StandingRow,
    StandingsTable, TeamSquad, TopScorers,
};
pub use service::{
    ConcurrencyPolicy, PacingPolicy, get_players_by_competition,
    get_players_by_competition_with_policy, get_squads_for_competition, get_standings,
    get_top_scorers,
};
pub use upstream::UpstreamClient;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
