//! Authenticated HTTP client for the upstream football data API
//!
//! The client performs exactly one attempt per request and maps transport,
//! status and body-shape failures to specific error variants. Retry and
//! pacing decisions belong to the callers; the roster fan-out is the only
//! place a request is ever repeated.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, TEAM_HTTP_TIMEOUT_SECONDS};
use crate::error::AppError;
use crate::upstream::models::{ScorersResponse, StandingsResponse, TeamResponse};
use crate::upstream::urls::{build_scorers_url, build_standings_url, build_team_url};

/// Header carrying the upstream API token.
const AUTH_HEADER: &str = "X-Auth-Token";

/// HTTP client bound to one upstream domain and token.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    api_domain: String,
}

impl UpstreamClient {
    /// Creates a client from the given configuration. The API token is
    /// attached as a default header on every request and marked sensitive
    /// so it never shows up in debug output.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut token = HeaderValue::from_str(&config.api_token).map_err(|e| {
            AppError::config_error(format!("API token is not a valid header value: {e}"))
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, token);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_domain: config.api_domain.clone(),
        })
    }

    /// Base URL this client talks to.
    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    /// Fetches the raw standings of a competition.
    pub async fn standings(&self, competition_code: &str) -> Result<StandingsResponse, AppError> {
        let url = build_standings_url(&self.api_domain, competition_code);
        self.request(self.client.get(&url), &url).await
    }

    /// Fetches the raw top scorers of a competition, capped at `limit`
    /// entries upstream.
    pub async fn scorers(
        &self,
        competition_code: &str,
        limit: u32,
    ) -> Result<ScorersResponse, AppError> {
        let url = build_scorers_url(&self.api_domain, competition_code, limit);
        self.request(self.client.get(&url), &url).await
    }

    /// Fetches one team with its squad roster. Uses a longer per-request
    /// timeout since squad payloads are large.
    pub async fn team(&self, team_id: u64) -> Result<TeamResponse, AppError> {
        let url = build_team_url(&self.api_domain, team_id);
        let request = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(TEAM_HTTP_TIMEOUT_SECONDS));
        self.request(request, &url).await
    }

    /// Sends one request and decodes the response, mapping failures to
    /// specific error variants based on transport state, HTTP status and
    /// body shape.
    #[instrument(skip(self, request))]
    async fn request<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, AppError> {
        info!("Fetching data from URL: {url}");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");

            error!("HTTP {} - {} (URL: {})", status_code, reason, url);

            // Return specific error types based on HTTP status code
            return Err(match status_code {
                404 => AppError::api_not_found(url),
                429 => AppError::api_rate_limit(reason, url),
                400..=499 => AppError::api_client_error(status_code, reason, url),
                500..=599 => {
                    if status_code == 502 || status_code == 503 {
                        AppError::api_service_unavailable(status_code, reason, url)
                    } else {
                        AppError::api_server_error(status_code, reason, url)
                    }
                }
                _ => AppError::api_server_error(status_code, reason, url),
            });
        }

        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read response text from URL {}: {}", url, e);
                return Err(AppError::ApiFetch(e));
            }
        };

        debug!("Response length: {} bytes", response_text.len());

        match serde_json::from_str::<T>(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                error!("Failed to parse API response: {} (URL: {})", e, url);
                error!(
                    "Response text (first 200 chars): {}",
                    &response_text.chars().take(200).collect::<String>()
                );

                // Check if it's malformed JSON vs unexpected structure
                if response_text.trim().is_empty() {
                    Err(AppError::api_no_data("Response body is empty", url))
                } else if !response_text.trim_start().starts_with('{')
                    && !response_text.trim_start().starts_with('[')
                {
                    Err(AppError::api_malformed_json(
                        "Response is not valid JSON",
                        url,
                    ))
                } else {
                    // Valid JSON but unexpected structure
                    Err(AppError::api_unexpected_structure(e.to_string(), url))
                }
            }
        }
    }
}
