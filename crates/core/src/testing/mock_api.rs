//! Mock Terminal API client for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{
    AlgoId, AlgoRecord, ApiClient, ApiError, MatchRecord, Season, SeasonMetrics,
};

/// A recorded API call for test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedCall {
    Metrics(Season),
    Page(u32),
    Matches(AlgoId),
}

/// Mock implementation of the [`ApiClient`] trait.
///
/// Provides controllable behavior for testing:
/// - Configurable season metrics, leaderboard pages and match histories
/// - Injectable fetch failures and invalid ids
/// - Call recording for assertions
///
/// Unconfigured pages come back empty (past the end of the leaderboard) and
/// unconfigured ids come back with an empty match history, so searches over
/// a sparse fixture terminate instead of erroring.
pub struct MockApiClient {
    metrics: Arc<RwLock<HashMap<Season, SeasonMetrics>>>,
    pages: Arc<RwLock<Vec<Vec<AlgoRecord>>>>,
    histories: Arc<RwLock<HashMap<AlgoId, Vec<MatchRecord>>>>,
    failing_pages: Arc<RwLock<HashSet<u32>>>,
    failing_algos: Arc<RwLock<HashSet<AlgoId>>>,
    invalid_algos: Arc<RwLock<HashSet<AlgoId>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApiClient {
    /// Create a mock with no data configured.
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(HashMap::new())),
            pages: Arc::new(RwLock::new(Vec::new())),
            histories: Arc::new(RwLock::new(HashMap::new())),
            failing_pages: Arc::new(RwLock::new(HashSet::new())),
            failing_algos: Arc::new(RwLock::new(HashSet::new())),
            invalid_algos: Arc::new(RwLock::new(HashSet::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the metrics returned for a season.
    pub async fn set_season_metrics(&self, season: Season, metrics: SeasonMetrics) {
        self.metrics.write().await.insert(season, metrics);
    }

    /// Set the leaderboard content; index 0 is page 1.
    pub async fn set_leaderboard_pages(&self, pages: Vec<Vec<AlgoRecord>>) {
        *self.pages.write().await = pages;
    }

    /// Set the match history for an algo id.
    pub async fn set_algo_matches(&self, id: AlgoId, matches: Vec<MatchRecord>) {
        self.histories.write().await.insert(id, matches);
    }

    /// Make fetches of the given page fail with [`ApiError::Fetch`].
    pub async fn fail_page(&self, page: u32) {
        self.failing_pages.write().await.insert(page);
    }

    /// Make probes of the given id fail with [`ApiError::Fetch`].
    pub async fn fail_algo(&self, id: AlgoId) {
        self.failing_algos.write().await.insert(id);
    }

    /// Make the given id rejected with [`ApiError::InvalidId`].
    pub async fn invalidate_algo(&self, id: AlgoId) {
        self.invalid_algos.write().await.insert(id);
    }

    /// All calls made so far, in order.
    pub async fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    /// How many ids have been probed via `algo_matches`.
    pub async fn probe_count(&self) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, RecordedCall::Matches(_)))
            .count()
    }

    async fn record(&self, call: RecordedCall) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn season_metrics(&self, season: Season) -> Result<SeasonMetrics, ApiError> {
        self.record(RecordedCall::Metrics(season)).await;
        self.metrics
            .read()
            .await
            .get(&season)
            .copied()
            .ok_or(ApiError::UnknownSeason(season))
    }

    async fn leaderboard_page(&self, page: u32) -> Result<Vec<AlgoRecord>, ApiError> {
        if page < 1 {
            return Err(ApiError::PageOutOfRange(page));
        }
        self.record(RecordedCall::Page(page)).await;

        if self.failing_pages.read().await.contains(&page) {
            return Err(ApiError::fetch(
                format!("/game/leaderboard?page={}", page),
                "simulated failure",
            ));
        }

        Ok(self
            .pages
            .read()
            .await
            .get((page - 1) as usize)
            .cloned()
            .unwrap_or_default())
    }

    async fn algo_matches(&self, id: AlgoId) -> Result<Vec<MatchRecord>, ApiError> {
        self.record(RecordedCall::Matches(id)).await;

        if self.invalid_algos.read().await.contains(&id) {
            return Err(ApiError::InvalidId(id));
        }
        if self.failing_algos.read().await.contains(&id) {
            return Err(ApiError::fetch(
                format!("/game/algo/{}/matches", id),
                "simulated failure",
            ));
        }

        Ok(self
            .histories
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_unconfigured_page_is_empty() {
        let client = MockApiClient::new();
        let records = client.leaderboard_page(7).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_algo_has_no_matches() {
        let client = MockApiClient::new();
        let matches = client.algo_matches(12345).await.unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_error_injection() {
        tokio_test::block_on(async {
            let client = MockApiClient::new();
            client.fail_algo(1).await;
            client.invalidate_algo(2).await;

            assert!(matches!(
                client.algo_matches(1).await,
                Err(ApiError::Fetch { .. })
            ));
            assert!(matches!(
                client.algo_matches(2).await,
                Err(ApiError::InvalidId(2))
            ));
        });
    }

    #[tokio::test]
    async fn test_call_recording() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![vec![fixtures::algo("a", 1, 2000.0)]])
            .await;

        client.leaderboard_page(1).await.unwrap();
        client.algo_matches(5).await.unwrap();

        let calls = client.recorded_calls().await;
        assert_eq!(
            calls,
            vec![RecordedCall::Page(1), RecordedCall::Matches(5)]
        );
        assert_eq!(client.probe_count().await, 1);
    }
}
