//! Supported competitions and their upstream identifiers
//!
//! The upstream API addresses competitions by short uppercase codes while
//! the proxy surface uses URL-friendly slugs. This module is the single
//! place both vocabularies are defined and mapped.

use std::fmt;

/// A competition served by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competition {
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
    Ligue1,
}

impl Competition {
    /// All supported competitions in presentation order.
    pub const ALL: [Competition; 5] = [
        Competition::PremierLeague,
        Competition::LaLiga,
        Competition::Bundesliga,
        Competition::SerieA,
        Competition::Ligue1,
    ];

    /// Upstream competition code used in API paths.
    ///
    /// # Example
    /// ```
    /// use football_proxy::competitions::Competition;
    ///
    /// assert_eq!(Competition::PremierLeague.code(), "PL");
    /// assert_eq!(Competition::Bundesliga.code(), "BL1");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "PL",
            Competition::LaLiga => "PD",
            Competition::Bundesliga => "BL1",
            Competition::SerieA => "SA",
            Competition::Ligue1 => "FL1",
        }
    }

    /// URL-friendly slug exposed by the proxy surface.
    pub fn slug(&self) -> &'static str {
        match self {
            Competition::PremierLeague => "premier-league",
            Competition::LaLiga => "la-liga",
            Competition::Bundesliga => "bundesliga",
            Competition::SerieA => "serie-a",
            Competition::Ligue1 => "ligue-1",
        }
    }

    /// Resolve a proxy slug to a competition.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Resolve an upstream code to a competition. Matching is
    /// case-insensitive since codes arrive from user input.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_uppercase();
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl Default for Competition {
    fn default() -> Self {
        Competition::PremierLeague
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
