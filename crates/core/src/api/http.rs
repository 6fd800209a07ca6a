//! HTTP implementation of the Terminal API client.
//!
//! Three read-only endpoints, no authentication:
//! - `/game/leaderboard/metrics` - per-season counters
//! - `/game/leaderboard?page={i}` - one rating-sorted page of algos
//! - `/game/algo/{id}/matches` - an algo's match history

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;

use super::{AlgoId, AlgoRecord, ApiClient, ApiError, MatchRecord, Season, SeasonMetrics};

/// Reqwest-backed client for the live Terminal service.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and decode the JSON body, mapping failures to `Fetch`.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::fetch(path, format!("HTTP {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::fetch(path, format!("undecodable response: {}", e)))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    fn name(&self) -> &str {
        "terminal-http"
    }

    async fn season_metrics(&self, season: Season) -> Result<SeasonMetrics, ApiError> {
        let path = "/game/leaderboard/metrics";
        debug!(season = %season, "fetching leaderboard metrics");

        let envelope: MetricsEnvelope = self.get_json(path).await?;
        envelope
            .data
            .get(season.token())
            .copied()
            .ok_or(ApiError::UnknownSeason(season))
    }

    async fn leaderboard_page(&self, page: u32) -> Result<Vec<AlgoRecord>, ApiError> {
        if page < 1 {
            return Err(ApiError::PageOutOfRange(page));
        }

        let path = format!("/game/leaderboard?page={}", page);
        debug!(page, "fetching leaderboard page");

        let envelope: LeaderboardEnvelope = self.get_json(&path).await?;
        Ok(envelope.data.algos)
    }

    async fn algo_matches(&self, id: AlgoId) -> Result<Vec<MatchRecord>, ApiError> {
        let path = format!("/game/algo/{}/matches", id);
        debug!(id, "fetching algo matches");

        let response = self.client.get(self.url(&path)).send().await?;

        let status = response.status();
        // The service answers ids it does not recognize with an error page
        // rather than a JSON envelope.
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            return Err(ApiError::InvalidId(id));
        }
        if !status.is_success() {
            return Err(ApiError::fetch(&path, format!("HTTP {}", status)));
        }

        let envelope: MatchesEnvelope = response
            .json()
            .await
            .map_err(|_| ApiError::InvalidId(id))?;
        Ok(envelope.data.matches)
    }
}

// Terminal API response envelopes (private)

#[derive(Debug, Deserialize)]
struct MetricsEnvelope {
    data: HashMap<String, SeasonMetrics>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardEnvelope {
    data: LeaderboardData,
}

#[derive(Debug, Deserialize)]
struct LeaderboardData {
    algos: Vec<AlgoRecord>,
}

#[derive(Debug, Deserialize)]
struct MatchesEnvelope {
    data: MatchesData,
}

#[derive(Debug, Deserialize)]
struct MatchesData {
    matches: Vec<MatchRecord>,
}
