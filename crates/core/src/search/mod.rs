//! Algo id resolution.
//!
//! Two paths resolve a display name to its numeric id:
//! - [`IdResolver::search_id_space`] - concurrent brute-force probe over the
//!   full historical id space; slow, works for unranked algos.
//! - [`IdResolver::search_leaderboard`] - sequential paginated scan of the
//!   current leaderboard; fast, only finds currently ranked algos.

mod brute;
mod cursor;
mod estimate;
mod leaderboard;

pub use cursor::IdCursor;
pub use estimate::estimate_start;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::api::{AlgoId, ApiClient, ApiError};
use crate::config::SearchConfig;
use crate::metrics;

/// Result of a name resolution attempt.
///
/// Exhausting the search space without a hit is an ordinary outcome, not an
/// error; fallible paths return `Result<SearchOutcome, ApiError>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(AlgoId),
    NotFound,
}

impl SearchOutcome {
    /// The resolved id, if any.
    pub fn id(&self) -> Option<AlgoId> {
        match self {
            SearchOutcome::Found(id) => Some(*id),
            SearchOutcome::NotFound => None,
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::NotFound => "not_found",
        }
    }
}

/// Resolves algo names to ids against a Terminal API client.
pub struct IdResolver {
    client: Arc<dyn ApiClient>,
    config: SearchConfig,
}

impl IdResolver {
    pub fn new(client: Arc<dyn ApiClient>, config: SearchConfig) -> Self {
        Self { client, config }
    }

    /// Upper bound of the id space to probe: total uploaded algos across both
    /// seasons plus the configured offset.
    pub async fn estimate_id_space(&self) -> Result<AlgoId, ApiError> {
        estimate::estimate_start(self.client.as_ref(), self.config.id_offset).await
    }

    /// Brute-force the full id space for `name`, newest ids first.
    ///
    /// Spawns the configured number of workers over a shared cursor. The
    /// only error is a failed space estimate; per-id fetch failures are
    /// absorbed (logged and counted), so a persistently failing service can
    /// yield a false `NotFound`. With duplicate names the winner is whichever
    /// worker lands its hit first - not deterministic across runs, though the
    /// descending claim order biases toward recently uploaded algos.
    pub async fn search_id_space(&self, name: &str) -> Result<SearchOutcome, ApiError> {
        let start = self.estimate_id_space().await?;
        info!(
            name,
            start,
            workers = self.config.workers,
            "starting brute-force id search"
        );

        let outcome = brute::run(Arc::clone(&self.client), name, self.config.workers, start).await;

        metrics::SEARCHES
            .with_label_values(&["id_space", outcome.metric_label()])
            .inc();
        info!(name, ?outcome, "brute-force id search finished");
        Ok(outcome)
    }

    /// Scan the current leaderboard for `name`, up to the configured page
    /// limit. Much faster than [`search_id_space`](Self::search_id_space)
    /// when the algo is known to be ranked. Any page fetch error aborts the
    /// scan; with duplicate names the highest-rated one wins.
    pub async fn search_leaderboard(&self, name: &str) -> Result<SearchOutcome, ApiError> {
        info!(
            name,
            max_pages = self.config.max_pages,
            "starting leaderboard search"
        );

        let result = leaderboard::scan(self.client.as_ref(), name, self.config.max_pages).await;

        let label = match &result {
            Ok(outcome) => outcome.metric_label(),
            Err(_) => "error",
        };
        metrics::SEARCHES
            .with_label_values(&["leaderboard", label])
            .inc();

        if let Ok(outcome) = &result {
            info!(name, ?outcome, "leaderboard search finished");
        }
        result
    }

    /// Collect `name -> id` for every algo rated at least `min_rating` on
    /// the requested pages. Pages must all be >= 1.
    pub async fn leaderboard_ids(
        &self,
        pages: &[u32],
        min_rating: f64,
    ) -> Result<HashMap<String, AlgoId>, ApiError> {
        leaderboard::collect_ids(self.client.as_ref(), pages, min_rating).await
    }
}
