use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::competitions::Competition;
use crate::constants::DEFAULT_SCORERS_LIMIT;
use crate::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football League Aggregation Proxy
///
/// A read-only command line proxy in front of the football-data.org API.
/// Fetches league standings, top scorers and full squad rosters for the
/// top five European leagues and prints them as normalized JSON on stdout.
///
/// Pick exactly one operation per invocation:
/// - --standings for the league table
/// - --scorers for the top scorers ranking
/// - --squads for every squad roster
/// - --players for one flat list of all players
///
/// Log output goes to a daily rolling file so stdout stays clean JSON.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League to query by slug: premier-league, la-liga, bundesliga,
    /// serie-a or ligue-1. Defaults to premier-league.
    #[arg(long = "league", help_heading = "Selection")]
    pub league: Option<String>,

    /// League to query by upstream competition code (e.g. PL, BL1).
    /// Takes precedence over --league and is forwarded as given.
    #[arg(long = "code", help_heading = "Selection")]
    pub code: Option<String>,

    /// Fetch the normalized league table
    #[arg(long = "standings", short = 's', help_heading = "Operations")]
    pub standings: bool,

    /// Fetch the top scorers ranking
    #[arg(long = "scorers", help_heading = "Operations")]
    pub scorers: bool,

    /// Fetch every squad roster of the competition
    #[arg(long = "squads", help_heading = "Operations")]
    pub squads: bool,

    /// Fetch all players of the competition as one flat list.
    /// Team details are requested one at a time with pacing, so this
    /// operation takes around a minute per competition.
    #[arg(long = "players", help_heading = "Operations")]
    pub players: bool,

    /// Maximum number of scorer entries to request (used with --scorers)
    #[arg(long = "limit", default_value_t = DEFAULT_SCORERS_LIMIT, help_heading = "Operations")]
    pub limit: u32,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", short = 'p', help_heading = "Output")]
    pub pretty: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which mirrors log output to stderr at debug level.
    /// The JSON payload on stdout is unaffected.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Resolves the upstream competition code from --code or --league,
    /// defaulting to the Premier League when neither is given. An unknown
    /// code is forwarded uppercased and left for upstream to reject; an
    /// unknown slug is a configuration error.
    pub fn competition_code(&self) -> Result<String, AppError> {
        if let Some(code) = &self.code {
            return Ok(code.to_uppercase());
        }

        match &self.league {
            Some(slug) => match Competition::from_slug(slug) {
                Some(competition) => Ok(competition.code().to_string()),
                None => {
                    let known = Competition::ALL
                        .iter()
                        .map(|c| c.slug())
                        .collect::<Vec<_>>()
                        .join(", ");
                    Err(AppError::config_error(format!(
                        "Unknown league '{slug}'. Known leagues: {known}"
                    )))
                }
            },
            None => Ok(Competition::default().code().to_string()),
        }
    }

    /// Number of operation flags set. Exactly one must be picked; the
    /// caller turns any other count into a usage error.
    pub fn operation_count(&self) -> usize {
        [self.standings, self.scorers, self.squads, self.players]
            .iter()
            .filter(|&&flag| flag)
            .count()
    }
}
