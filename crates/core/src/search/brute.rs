//! Concurrent brute-force id search.
//!
//! A fixed pool of workers shares one [`IdCursor`] and one result slot. Each
//! worker claims ids from the cursor, fetches that algo's match history and
//! scans it for the target name. The first hit wins; everyone else stops at
//! their next claim boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::api::{AlgoId, ApiClient, MatchRecord};
use crate::metrics;

use super::cursor::IdCursor;
use super::SearchOutcome;

/// Run a brute-force search over ids `(0, start]` with `workers` tasks.
///
/// Infallible by design: a fetch failure or service-rejected id is treated
/// as "no match at this id" and the worker moves on. A persistent failure
/// pattern can therefore produce a false `NotFound`; that trade favors
/// forward progress over completeness.
pub(super) async fn run(
    client: Arc<dyn ApiClient>,
    name: &str,
    workers: usize,
    start: AlgoId,
) -> SearchOutcome {
    let cursor = Arc::new(IdCursor::new(start));
    let stop = Arc::new(AtomicBool::new(false));
    // Bounded(1) channel as a single-assignment result slot: the first
    // try_send wins, later senders find it occupied and their hit is dropped.
    let (found_tx, mut found_rx) = mpsc::channel::<AlgoId>(1);

    let target = name.to_lowercase();
    let mut pool = JoinSet::new();
    for worker in 0..workers {
        pool.spawn(probe_loop(
            Arc::clone(&client),
            target.clone(),
            Arc::clone(&cursor),
            Arc::clone(&stop),
            found_tx.clone(),
            worker,
        ));
    }
    // Workers hold the only remaining senders; the channel closes once every
    // worker has exited without a hit.
    drop(found_tx);

    match found_rx.recv().await {
        Some(id) => {
            stop.store(true, Ordering::Relaxed);
            debug!(id, remaining = cursor.remaining(), "brute-force search hit");
            // Dropping the pool aborts workers still mid-fetch; they are
            // reaped by the runtime rather than awaited.
            SearchOutcome::Found(id)
        }
        None => {
            debug!(start, "id space exhausted without a match");
            SearchOutcome::NotFound
        }
    }
}

/// One worker: claim, probe, repeat until a hit, a stop signal or exhaustion.
async fn probe_loop(
    client: Arc<dyn ApiClient>,
    target: String,
    cursor: Arc<IdCursor>,
    stop: Arc<AtomicBool>,
    found_tx: mpsc::Sender<AlgoId>,
    worker: usize,
) {
    while !stop.load(Ordering::Relaxed) {
        let Some(id) = cursor.claim() else {
            trace!(worker, "worker exhausted the id space");
            break;
        };

        trace!(worker, id, "probing");
        metrics::IDS_PROBED.inc();

        let matches = match client.algo_matches(id).await {
            Ok(matches) => matches,
            Err(e) => {
                // No match at this id; never terminal for the search.
                debug!(worker, id, error = %e, "probe failed, skipping id");
                metrics::PROBE_FAILURES
                    .with_label_values(&[e.metric_kind()])
                    .inc();
                continue;
            }
        };

        if let Some(hit) = match_by_name(&matches, &target) {
            stop.store(true, Ordering::Relaxed);
            let _ = found_tx.try_send(hit);
            break;
        }
    }
}

/// Scan a match history for a case-insensitive name hit on either side,
/// returning the matching side's own id.
fn match_by_name(matches: &[MatchRecord], target: &str) -> Option<AlgoId> {
    for m in matches {
        if m.loser.name.to_lowercase() == target {
            return Some(m.loser.id);
        }
        if m.winner.name.to_lowercase() == target {
            return Some(m.winner.id);
        }
    }
    None
}
