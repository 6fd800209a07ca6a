//! Testing utilities and a mock API client.
//!
//! [`MockApiClient`] stands in for the remote service so both search paths
//! can be exercised end to end without network access.

mod mock_api;

pub use mock_api::{MockApiClient, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::api::{AlgoId, AlgoRecord, AlgoRef, MatchId, MatchRecord};

    /// Create a leaderboard row.
    pub fn algo(name: &str, id: AlgoId, rating: f64) -> AlgoRecord {
        AlgoRecord {
            name: name.to_string(),
            id,
            rating,
        }
    }

    /// Create a match record from `(name, id)` pairs for each side.
    pub fn match_between(
        match_id: MatchId,
        winner: (&str, AlgoId),
        loser: (&str, AlgoId),
    ) -> MatchRecord {
        MatchRecord {
            id: match_id,
            winner: AlgoRef {
                name: winner.0.to_string(),
                id: winner.1,
            },
            loser: AlgoRef {
                name: loser.0.to_string(),
                id: loser.1,
            },
        }
    }
}
