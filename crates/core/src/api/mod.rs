//! Terminal API abstraction.
//!
//! The [`ApiClient`] trait is the seam between the search algorithms and the
//! remote service; [`HttpApiClient`] is the live implementation.

mod http;
mod types;

pub use http::HttpApiClient;
pub use types::*;
