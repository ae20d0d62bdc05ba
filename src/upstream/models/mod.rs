pub mod common;
pub mod scorers;
pub mod standings;
pub mod team;

// Re-export all public types for easier access
pub use common::{CompetitionInfo, SeasonInfo, TeamRef};
pub use scorers::{ScorerItem, ScorerPlayerInfo, ScorersResponse};
pub use standings::{StandingsGroup, StandingsResponse, TableEntry};
pub use team::{SquadMember, TeamResponse};
