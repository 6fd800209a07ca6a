//! Types for the Terminal API surface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric identifier of an algo in the ranked service.
pub type AlgoId = u64;

/// Numeric identifier of a played match.
pub type MatchId = u64;

/// A competition season. The service currently tracks two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    One,
    Two,
}

impl Season {
    /// The key the metrics endpoint uses for this season.
    pub fn token(&self) -> &'static str {
        match self {
            Season::One => "1",
            Season::Two => "2",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Per-season counters shown on the leaderboard page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonMetrics {
    /// Total registered players.
    #[serde(rename = "Players")]
    pub players: u64,
    /// Total matches played.
    #[serde(rename = "Matches")]
    pub matches: u64,
    /// Total algos uploaded.
    #[serde(rename = "Algos")]
    pub algos: u64,
}

/// One row of a leaderboard page.
///
/// Pages are sorted by rating descending. The sort is assumed, not verified;
/// the elo-bounded listing depends on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlgoRecord {
    /// Display name. Not unique across algos.
    pub name: String,
    pub id: AlgoId,
    /// Elo skill score.
    pub rating: f64,
}

/// One side of a played match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlgoRef {
    pub name: String,
    pub id: AlgoId,
}

/// A match from an algo's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: MatchId,
    #[serde(rename = "winning_algo")]
    pub winner: AlgoRef,
    #[serde(rename = "losing_algo")]
    pub loser: AlgoRef,
}

/// Errors from the Terminal API surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, non-success status or undecodable response.
    #[error("request to {path} failed: {reason}")]
    Fetch { path: String, reason: String },

    /// The service rejected the identifier as structurally invalid.
    /// Distinct from "this algo has played no matches".
    #[error("{0} is not a valid algo id")]
    InvalidId(AlgoId),

    /// Leaderboard pages start at 1. Raised before any network access.
    #[error("leaderboard page must be 1 or larger, got {0}")]
    PageOutOfRange(u32),

    /// The metrics response carried no entry for the requested season.
    #[error("no metrics recorded for season {0}")]
    UnknownSeason(Season),
}

impl ApiError {
    pub(crate) fn fetch(path: impl Into<String>, reason: impl fmt::Display) -> Self {
        ApiError::Fetch {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Stable label for the probe-failure metric.
    pub(crate) fn metric_kind(&self) -> &'static str {
        match self {
            ApiError::Fetch { .. } => "fetch",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::PageOutOfRange(_) => "page_out_of_range",
            ApiError::UnknownSeason(_) => "unknown_season",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        let path = e
            .url()
            .map(|u| u.path().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        ApiError::Fetch {
            path,
            reason: e.to_string(),
        }
    }
}

/// Read-only view of the Terminal service.
///
/// Everything downstream (the search paths, the replay listing) talks to the
/// service through this trait so tests can swap in a mock.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Client name for logging.
    fn name(&self) -> &str;

    /// Per-season leaderboard counters.
    async fn season_metrics(&self, season: Season) -> Result<SeasonMetrics, ApiError>;

    /// The algos on the given leaderboard page, in rating-descending order.
    ///
    /// Implementations must reject `page < 1` with
    /// [`ApiError::PageOutOfRange`] without touching the network.
    async fn leaderboard_page(&self, page: u32) -> Result<Vec<AlgoRecord>, ApiError>;

    /// The matches the given algo has played, most recent first.
    async fn algo_matches(&self, id: AlgoId) -> Result<Vec<MatchRecord>, ApiError>;
}
