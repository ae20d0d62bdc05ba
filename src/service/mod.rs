//! Aggregation operations served by the proxy
//!
//! Each operation fetches from upstream, normalizes the payload into the
//! stable response schema and applies its own fan-out policy where more
//! than one upstream call is involved.

pub mod fanout;
pub mod players;
pub mod scorers;
pub mod squads;
pub mod standings;

// Re-export operation entry points and policies for easier access
pub use fanout::{ConcurrencyPolicy, PacingPolicy};
pub use players::{get_players_by_competition, get_players_by_competition_with_policy};
pub use scorers::get_top_scorers;
pub use squads::get_squads_for_competition;
pub use standings::get_standings;
