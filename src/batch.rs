//! Batch orchestrator: sequential per-keyword search and accumulation.
//!
//! Drives validated keywords through a [`SearchBackend`] one at a time,
//! in input order, collecting facet rows, failed keywords, and per-search
//! metadata into one [`BatchResult`]. A failed keyword is recorded and
//! skipped; nothing inside the loop aborts the batch.

use crate::client::{perform_search, SearchBackend};
use crate::extract::{extract_metadata, extract_refine_filters};
use crate::types::BatchResult;

/// Progress callback invoked before each keyword's request with
/// `(current_index, total, keyword)`. Indices run from 0 to `total - 1`.
pub type ProgressFn<'a> = dyn FnMut(usize, usize, &str) + 'a;

/// Process a batch of keywords against a search backend.
///
/// Iteration is strictly sequential in input order; each request completes
/// before the next begins. Batch sizes are bounded at 30 by validation, so
/// there is nothing to gain from fanning out, and sequential execution
/// keeps progress reporting stable.
///
/// For each keyword:
/// 1. the progress callback, if supplied, fires with `(index, total, keyword)`;
/// 2. the backend is queried with the trimmed keyword;
/// 3. on failure the keyword is appended to `failed_keywords` and the loop
///    continues;
/// 4. on success the result's metadata (if present) is copied and tagged,
///    then its facet rows are appended.
///
/// The returned [`BatchResult`] always satisfies
/// `failed_keywords.len() + successful_count() == total_keywords`.
pub async fn process_keywords<B: SearchBackend>(
    keywords: &[String],
    backend: &B,
    mut progress: Option<&mut ProgressFn<'_>>,
) -> BatchResult {
    let total = keywords.len();
    let mut result = BatchResult {
        total_keywords: total,
        ..BatchResult::default()
    };

    for (index, keyword) in keywords.iter().enumerate() {
        if let Some(ref mut callback) = progress {
            callback(index, total, keyword);
        }

        let trimmed = keyword.trim();
        let Some(results) = perform_search(backend, trimmed).await else {
            result.failed_keywords.push(keyword.clone());
            continue;
        };

        if let Some(metadata) = extract_metadata(&results, trimmed) {
            result.metadata.push(metadata);
        }

        let rows = extract_refine_filters(&results, trimmed);
        tracing::debug!(keyword = trimmed, rows = rows.len(), "keyword processed");
        result.rows.extend(rows);
    }

    tracing::debug!(
        total,
        failed = result.failed_keywords.len(),
        rows = result.rows.len(),
        "batch complete"
    );
    result
}
