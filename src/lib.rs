//! # facet-search
//!
//! Batch extraction of shopping "refine filter" facets for a list of
//! keywords, using the SerpAPI Google search backend.
//!
//! ## Design
//!
//! - Validates a raw newline-separated keyword block (at most 30 keywords)
//! - Queries the backend strictly sequentially, one keyword at a time,
//!   reporting progress before each request
//! - Tolerates partial failure: a failed keyword is recorded and skipped,
//!   never aborting the batch
//! - Flattens each result's facet groups into `(keyword, type, title)` rows
//!   and exports them as CSV with a `Keyword,Type,Title` header
//!
//! ## Security
//!
//! - The API key travels only in the request query; it never appears in
//!   error messages or logs
//! - No network listeners — this is a library, not a server
//! - Keywords are logged only at trace/debug level, failures at warn

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod http;
pub mod types;
pub mod validate;

pub use batch::{process_keywords, ProgressFn};
pub use client::{perform_search, SearchBackend, SerpApiClient};
pub use config::{SearchConfig, DEFAULT_MAX_KEYWORDS};
pub use error::{FacetError, Result};
pub use export::{csv_string, read_csv, save_csv, timestamped_filename, write_csv};
pub use extract::{extract_metadata, extract_refine_filters};
pub use types::{BatchResult, FacetRow, SearchMetadata};
pub use validate::validate_keywords;

/// Run a full facet extraction batch against SerpAPI.
///
/// Validates `config`, builds one [`SerpApiClient`], and processes every
/// keyword in order. The optional progress callback fires with
/// `(current_index, total, keyword)` before each request.
///
/// # Errors
///
/// Returns [`FacetError::Config`] for an invalid configuration and
/// [`FacetError::Http`] if the HTTP client cannot be constructed.
/// Per-keyword search failures do not error; they land in
/// [`BatchResult::failed_keywords`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> facet_search::Result<()> {
/// let config = facet_search::SearchConfig::new("my-api-key");
/// let (keywords, errors) = facet_search::validate_keywords("low heels\nrunning shoes", 30);
/// assert!(errors.is_empty());
///
/// let result = facet_search::extract_facets(&keywords, &config, None).await?;
/// println!(
///     "{} rows, {} failed",
///     result.total_rows(),
///     result.failed_keywords.len()
/// );
/// let csv = facet_search::csv_string(&result.rows)?;
/// # let _ = csv;
/// # Ok(())
/// # }
/// ```
pub async fn extract_facets(
    keywords: &[String],
    config: &SearchConfig,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<BatchResult> {
    config.validate()?;
    let client = SerpApiClient::new(config.clone())?;
    Ok(process_keywords(keywords, &client, progress).await)
}
