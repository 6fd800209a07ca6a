//! Sequential leaderboard scans.
//!
//! Both operations here are single-threaded and page-ordered. Unlike the
//! brute-force path they fail fast: the leaderboard is a bounded,
//! authoritative listing, so a fetch error surfaces instead of being skipped.

use std::collections::HashMap;

use tracing::debug;

use crate::api::{AlgoId, ApiClient, ApiError};
use crate::metrics;

use super::SearchOutcome;

/// Scan pages `1..=max_pages` for a case-insensitive name match, returning
/// on the first hit without fetching further rows or pages.
pub(super) async fn scan(
    client: &dyn ApiClient,
    name: &str,
    max_pages: u32,
) -> Result<SearchOutcome, ApiError> {
    let target = name.to_lowercase();

    for page in 1..=max_pages {
        debug!(page, "scanning leaderboard page");
        let records = client.leaderboard_page(page).await?;
        metrics::LEADERBOARD_PAGES_FETCHED.inc();

        for record in records {
            if record.name.to_lowercase() == target {
                return Ok(SearchOutcome::Found(record.id));
            }
        }
    }

    Ok(SearchOutcome::NotFound)
}

/// Collect `name -> id` for every algo rated at least `min_rating` on the
/// requested pages.
///
/// Relies on pages being rating-descending: once a row falls below the
/// floor the rest of that page is abandoned, but later requested pages are
/// still processed. The sort is assumed, not enforced; a violating page
/// yields a strict prefix rather than a true rating filter.
pub(super) async fn collect_ids(
    client: &dyn ApiClient,
    pages: &[u32],
    min_rating: f64,
) -> Result<HashMap<String, AlgoId>, ApiError> {
    // Validate the whole request before touching the network.
    if let Some(&bad) = pages.iter().find(|&&page| page < 1) {
        return Err(ApiError::PageOutOfRange(bad));
    }

    let mut ids = HashMap::new();
    for &page in pages {
        let records = client.leaderboard_page(page).await?;
        metrics::LEADERBOARD_PAGES_FETCHED.inc();

        for record in records {
            if record.rating < min_rating {
                debug!(
                    page,
                    rating = record.rating,
                    min_rating,
                    "rating floor reached, abandoning page"
                );
                break;
            }
            ids.insert(record.name, record.id);
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockApiClient, RecordedCall};

    #[tokio::test]
    async fn test_scan_finds_on_later_page_and_short_circuits() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![
                vec![fixtures::algo("alpha", 1, 2000.0)],
                vec![
                    fixtures::algo("beta", 2, 1900.0),
                    fixtures::algo("gamma", 3, 1890.0),
                    fixtures::algo("Target-Algo", 4, 1880.0),
                ],
                vec![fixtures::algo("delta", 5, 1800.0)],
            ])
            .await;

        let outcome = scan(&client, "target-algo", 10).await.unwrap();
        assert_eq!(outcome, SearchOutcome::Found(4));

        // Page 3 and beyond were never requested.
        let pages: Vec<u32> = client
            .recorded_calls()
            .await
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Page(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_scan_exhausts_pages_without_match() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![
                vec![fixtures::algo("alpha", 1, 2000.0)],
                vec![fixtures::algo("beta", 2, 1900.0)],
            ])
            .await;

        let outcome = scan(&client, "missing", 2).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_scan_surfaces_page_fetch_error() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![
                vec![fixtures::algo("alpha", 1, 2000.0)],
                vec![fixtures::algo("beta", 2, 1900.0)],
            ])
            .await;
        client.fail_page(2).await;

        let result = scan(&client, "beta", 5).await;
        assert!(matches!(result, Err(ApiError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_collect_ids_rating_floor_boundary() {
        let page = vec![
            fixtures::algo("first", 1, 1800.0),
            fixtures::algo("second", 2, 1750.0),
            fixtures::algo("third", 3, 1700.0),
        ];
        let client = MockApiClient::new();
        client.set_leaderboard_pages(vec![page]).await;

        // Floor at 1750: exactly the first two.
        let ids = collect_ids(&client, &[1], 1750.0).await.unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids["first"], 1);
        assert_eq!(ids["second"], 2);

        // Floor at 1701: still exactly the first two.
        let ids = collect_ids(&client, &[1], 1701.0).await.unwrap();
        assert_eq!(ids.len(), 2);

        // Floor at 1700: the boundary row is included.
        let ids = collect_ids(&client, &[1], 1700.0).await.unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids["third"], 3);
    }

    #[tokio::test]
    async fn test_collect_ids_abandons_page_not_operation() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![
                vec![
                    fixtures::algo("high", 1, 2000.0),
                    fixtures::algo("low", 2, 1000.0),
                    fixtures::algo("unreachable", 3, 2500.0),
                ],
                vec![fixtures::algo("next-page", 4, 1950.0)],
            ])
            .await;

        let ids = collect_ids(&client, &[1, 2], 1500.0).await.unwrap();
        // "low" stops page 1 early; "unreachable" sits behind the floor
        // violation and is skipped, but page 2 is still processed.
        assert_eq!(ids.len(), 2);
        assert!(ids.contains_key("high"));
        assert!(ids.contains_key("next-page"));
    }

    #[tokio::test]
    async fn test_collect_ids_rejects_page_zero_before_fetching() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![vec![fixtures::algo("alpha", 1, 2000.0)]])
            .await;

        let result = collect_ids(&client, &[1, 0, 2], f64::MIN).await;
        assert!(matches!(result, Err(ApiError::PageOutOfRange(0))));
        assert!(client.recorded_calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_collect_ids_surfaces_fetch_error() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![vec![fixtures::algo("alpha", 1, 2000.0)]])
            .await;
        client.fail_page(1).await;

        let result = collect_ids(&client, &[1], f64::MIN).await;
        assert!(matches!(result, Err(ApiError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_collect_ids_duplicate_names_last_write_wins() {
        let client = MockApiClient::new();
        client
            .set_leaderboard_pages(vec![
                vec![fixtures::algo("twin", 1, 2000.0)],
                vec![fixtures::algo("twin", 2, 1900.0)],
            ])
            .await;

        let ids = collect_ids(&client, &[1, 2], f64::MIN).await.unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids["twin"], 2);
    }
}
