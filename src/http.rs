//! Shared HTTP client construction for search backend requests.
//!
//! Provides a configured [`reqwest::Client`] with a per-request timeout
//! and a stable User-Agent. One client is built per batch and reused for
//! every keyword's request.

use crate::config::SearchConfig;
use crate::error::FacetError;
use std::time::Duration;

/// User-Agent sent with every backend request.
const USER_AGENT: &str = concat!("facet-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for search backend requests.
///
/// The client has:
/// - Timeout from `config.timeout_seconds`
/// - A crate-identifying User-Agent
/// - Gzip decompression
///
/// # Errors
///
/// Returns [`FacetError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, FacetError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FacetError::Http(format!("failed to build HTTP client: {e}")))
}
