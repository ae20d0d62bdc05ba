//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default base URL of the upstream football data API
pub const DEFAULT_API_DOMAIN: &str = "https://api.football-data.org/v4";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Timeout for team detail requests in seconds. Team payloads carry full
/// squad rosters and are noticeably larger than table responses, so they
/// get more headroom.
pub const TEAM_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of scorer entries requested from upstream when no limit is given
pub const DEFAULT_SCORERS_LIMIT: u32 = 20;

/// Pacing of the sequential per-team fan-out used when flattening player
/// records. The upstream free tier allows 10 requests per minute, so team
/// detail calls are spaced out instead of fired concurrently.
pub mod pacing {
    use std::time::Duration;

    /// Delay between consecutive team detail requests
    pub const TEAM_CALL_SPACING: Duration = Duration::from_secs(3);

    /// Back-off applied after a rate limit response before retrying
    pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(15);

    /// Total attempts per team detail request. A rate limited call is
    /// retried exactly once after backing off; other failures are not
    /// retried.
    pub const MAX_ATTEMPTS: u32 = 2;
}

/// Fallback values substituted for absent squad member fields when building
/// flattened player records
pub mod defaults {
    /// Position used when a squad member has none listed
    pub const POSITION: &str = "Unknown";

    /// Nationality used when a squad member has none listed
    pub const NATIONALITY: &str = "Unknown";

    /// Role used when a squad member has none listed
    pub const ROLE: &str = "PLAYER";

    /// Date of birth used when a squad member has none listed
    pub const DATE_OF_BIRTH: &str = "1990-01-01";

    /// Age used when a date of birth is absent or carries no leading
    /// four-digit year. Independent of [`DATE_OF_BIRTH`].
    pub const AGE: u32 = 25;

    /// Fixed reference year ages are computed against. Keeps player records
    /// stable instead of shifting at year boundaries.
    pub const AGE_REFERENCE_YEAR: u32 = 2024;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the upstream API token
    pub const API_TOKEN: &str = "FOOTBALL_PROXY_API_TOKEN";

    /// Environment variable for overriding the API domain
    pub const API_DOMAIN: &str = "FOOTBALL_PROXY_API_DOMAIN";

    /// Environment variable for custom log file path
    pub const LOG_FILE: &str = "FOOTBALL_PROXY_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_PROXY_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_relationships() {
        assert!(
            TEAM_HTTP_TIMEOUT_SECONDS > DEFAULT_HTTP_TIMEOUT_SECONDS,
            "Team detail calls should get more time than table calls"
        );
        assert!(DEFAULT_HTTP_TIMEOUT_SECONDS > 0);
    }

    #[test]
    fn test_pacing_relationships() {
        assert!(
            pacing::RATE_LIMIT_BACKOFF > pacing::TEAM_CALL_SPACING,
            "Rate limit back-off should exceed normal call spacing"
        );
        assert_eq!(
            pacing::MAX_ATTEMPTS,
            2,
            "A rate limited call is retried exactly once"
        );
    }

    #[test]
    fn test_default_values() {
        assert_eq!(defaults::POSITION, "Unknown");
        assert_eq!(defaults::NATIONALITY, "Unknown");
        assert_eq!(defaults::ROLE, "PLAYER");
        assert_eq!(defaults::DATE_OF_BIRTH, "1990-01-01");
        assert_eq!(defaults::AGE, 25);
        assert!(defaults::AGE_REFERENCE_YEAR >= 2024);
    }

    #[test]
    fn test_api_domain_format() {
        assert!(DEFAULT_API_DOMAIN.starts_with("https://"));
        assert!(!DEFAULT_API_DOMAIN.ends_with('/'));
    }

    #[test]
    fn test_env_var_names() {
        assert!(env_vars::API_TOKEN.starts_with("FOOTBALL_PROXY_"));
        assert!(env_vars::API_DOMAIN.starts_with("FOOTBALL_PROXY_"));
        assert!(env_vars::LOG_FILE.starts_with("FOOTBALL_PROXY_"));
        assert!(env_vars::HTTP_TIMEOUT.starts_with("FOOTBALL_PROXY_"));
    }
}
