//! Prometheus metrics for the search paths.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Algo ids probed by brute-force workers.
pub static IDS_PROBED: Lazy<IntCounter> =
    Lazy::new(|| IntCounter::new("termsvr_ids_probed_total", "Total algo ids probed").unwrap());

/// Probe failures absorbed by the brute-force path.
pub static PROBE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "termsvr_probe_failures_total",
            "Probe failures absorbed during brute-force search",
        ),
        &["kind"], // "fetch", "invalid_id"
    )
    .unwrap()
});

/// Searches run, by path and result.
pub static SEARCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("termsvr_searches_total", "Total id searches run"),
        &["path", "result"], // path: "id_space", "leaderboard"; result: "found", "not_found", "error"
    )
    .unwrap()
});

/// Leaderboard pages fetched across scans and listings.
pub static LEADERBOARD_PAGES_FETCHED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "termsvr_leaderboard_pages_fetched_total",
        "Total leaderboard pages fetched",
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(IDS_PROBED.clone()),
        Box::new(PROBE_FAILURES.clone()),
        Box::new(SEARCHES.clone()),
        Box::new(LEADERBOARD_PAGES_FETCHED.clone()),
    ]
}
