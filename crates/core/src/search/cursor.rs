//! Shared id cursor for brute-force workers.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::api::AlgoId;

/// A monotonically decreasing counter from which concurrent workers claim
/// unique algo ids to probe.
///
/// Claiming is a single `fetch_sub`, so no two successful claims can ever
/// return the same id regardless of worker count. Once the counter passes
/// zero every further claim reports exhaustion; the value keeps drifting a
/// little below zero (at most one step per racing worker), which is harmless.
#[derive(Debug)]
pub struct IdCursor {
    next: AtomicI64,
}

impl IdCursor {
    /// Create a cursor whose first claim returns `start`.
    pub fn new(start: AlgoId) -> Self {
        Self {
            next: AtomicI64::new(start as i64),
        }
    }

    /// Claim the next unclaimed id, or `None` if the space is exhausted.
    pub fn claim(&self) -> Option<AlgoId> {
        let prev = self.next.fetch_sub(1, Ordering::Relaxed);
        if prev <= 0 {
            None
        } else {
            Some(prev as AlgoId)
        }
    }

    /// How many ids are still unclaimed. Logging only; stale by the time the
    /// caller reads it.
    pub fn remaining(&self) -> u64 {
        self.next.load(Ordering::Relaxed).max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_claims_descend_from_start() {
        let cursor = IdCursor::new(5);
        assert_eq!(cursor.claim(), Some(5));
        assert_eq!(cursor.claim(), Some(4));
        assert_eq!(cursor.claim(), Some(3));
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let cursor = IdCursor::new(2);
        assert_eq!(cursor.claim(), Some(2));
        assert_eq!(cursor.claim(), Some(1));
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_zero_start_is_immediately_exhausted() {
        let cursor = IdCursor::new(0);
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn test_concurrent_claims_are_unique() {
        const START: u64 = 10_000;
        const THREADS: usize = 8;

        let cursor = Arc::new(IdCursor::new(START));
        let mut handles = Vec::new();
        for _ in 0..THREADS {
            let cursor = Arc::clone(&cursor);
            handles.push(std::thread::spawn(move || {
                let mut claimed = Vec::new();
                while let Some(id) = cursor.claim() {
                    claimed.push(id);
                }
                claimed
            }));
        }

        let mut all: Vec<u64> = Vec::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }

        let unique: HashSet<u64> = all.iter().copied().collect();
        assert_eq!(all.len(), START as usize);
        assert_eq!(unique.len(), START as usize);
        assert!(all.iter().all(|&id| id >= 1 && id <= START));
    }
}
