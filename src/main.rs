// src/main.rs
use clap::Parser;
use serde::Serialize;
use tracing::info;

use football_proxy::cli::Args;
use football_proxy::config::Config;
use football_proxy::error::AppError;
use football_proxy::logging::setup_logging;
use football_proxy::service;
use football_proxy::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    if !args.list_config && args.operation_count() != 1 {
        return Err(AppError::config_error(
            "Pick exactly one of --standings, --scorers, --squads or --players",
        ));
    }

    let (log_file_path, _guard) = setup_logging(&args).await?;

    // Log the location of the log file
    info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let client = UpstreamClient::new(&config)?;
    let competition_code = args.competition_code()?;

    let payload = if args.standings {
        to_json(
            &service::get_standings(&client, &competition_code).await?,
            args.pretty,
        )?
    } else if args.scorers {
        to_json(
            &service::get_top_scorers(&client, &competition_code, args.limit).await?,
            args.pretty,
        )?
    } else if args.squads {
        to_json(
            &service::get_squads_for_competition(&client, &competition_code).await?,
            args.pretty,
        )?
    } else {
        to_json(
            &service::get_players_by_competition(&client, &competition_code).await?,
            args.pretty,
        )?
    };

    // stdout carries nothing but the payload
    println!("{payload}");

    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}
