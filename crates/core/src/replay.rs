//! Match listing and watch URLs for a resolved algo id.

use crate::api::{AlgoId, ApiClient, ApiError, MatchId};

/// Base URL for the service's replay viewer.
const WATCH_URL: &str = "http://terminal.c1games.com/watch";

/// The ids of the matches an algo has played, most recent first.
pub async fn match_ids(client: &dyn ApiClient, id: AlgoId) -> Result<Vec<MatchId>, ApiError> {
    let matches = client.algo_matches(id).await?;
    Ok(matches.into_iter().map(|m| m.id).collect())
}

/// A browser URL for watching a single match.
pub fn watch_url(match_id: MatchId) -> String {
    format!("{}/{}", WATCH_URL, match_id)
}

/// Watch URLs for every match an algo has played.
pub async fn watch_urls(client: &dyn ApiClient, id: AlgoId) -> Result<Vec<String>, ApiError> {
    let ids = match_ids(client, id).await?;
    Ok(ids.into_iter().map(watch_url).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockApiClient};

    #[test]
    fn test_watch_url_format() {
        assert_eq!(
            watch_url(1656045),
            "http://terminal.c1games.com/watch/1656045"
        );
    }

    #[tokio::test]
    async fn test_match_ids_preserve_order() {
        let client = MockApiClient::new();
        client
            .set_algo_matches(
                3000,
                vec![
                    fixtures::match_between(30, ("a", 3000), ("b", 1)),
                    fixtures::match_between(20, ("c", 2), ("a", 3000)),
                    fixtures::match_between(10, ("a", 3000), ("d", 3)),
                ],
            )
            .await;

        let ids = match_ids(&client, 3000).await.unwrap();
        assert_eq!(ids, vec![30, 20, 10]);
    }

    #[tokio::test]
    async fn test_watch_urls_delegate_to_match_ids() {
        let client = MockApiClient::new();
        client
            .set_algo_matches(
                3000,
                vec![fixtures::match_between(42, ("a", 3000), ("b", 1))],
            )
            .await;

        let urls = watch_urls(&client, 3000).await.unwrap();
        assert_eq!(urls, vec!["http://terminal.c1games.com/watch/42"]);
    }

    #[tokio::test]
    async fn test_match_ids_propagate_invalid_id() {
        let client = MockApiClient::new();
        client.invalidate_algo(999).await;

        let result = match_ids(&client, 999).await;
        assert!(matches!(result, Err(ApiError::InvalidId(999))));
    }
}
