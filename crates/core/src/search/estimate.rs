//! Upper bound estimation for the brute-force id space.

use tracing::debug;

use crate::api::{AlgoId, ApiClient, ApiError, Season};

/// Estimate the highest algo id worth probing.
///
/// The service's id counter spans both seasons, and some ids were burned on
/// entries that never appeared publicly (deleted test uploads and the like),
/// so the algo counts undershoot the real ceiling. `offset` compensates; the
/// default of 507 in [`SearchConfig`](crate::config::SearchConfig) was
/// measured against the live service.
///
/// Metrics errors propagate: without the season counts there is no valid
/// bound to start a search from.
pub async fn estimate_start(client: &dyn ApiClient, offset: u64) -> Result<AlgoId, ApiError> {
    let season_one = client.season_metrics(Season::One).await?;
    let season_two = client.season_metrics(Season::Two).await?;

    let start = season_one.algos + season_two.algos + offset;
    debug!(
        season_one = season_one.algos,
        season_two = season_two.algos,
        offset,
        start,
        "estimated id space bound"
    );

    Ok(start)
}
