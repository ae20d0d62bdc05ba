//! Upstream API access: wire models, URL builders and the HTTP client

pub mod client;
pub mod models;
pub mod urls;

// Re-export the client and URL builders for easier access
pub use client::UpstreamClient;
pub use urls::{build_scorers_url, build_standings_url, build_team_url};
