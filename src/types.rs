//! Core types for extracted facets and batch outcomes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flattened refine-filter option extracted from a search result.
///
/// Serde renames match the CSV export header: `Keyword,Type,Title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRow {
    /// The keyword whose search produced this facet.
    #[serde(rename = "Keyword")]
    pub keyword: String,
    /// The facet group label, e.g. `"Department"` or `"Color"`.
    /// `"Unknown"` when the backend omits the field.
    #[serde(rename = "Type")]
    pub facet_type: String,
    /// The option value within the group, e.g. `"Women's"`.
    /// `"Unknown"` when the backend omits the field.
    #[serde(rename = "Title")]
    pub title: String,
}

impl FacetRow {
    /// Construct a row from string-like parts.
    pub fn new(
        keyword: impl Into<String>,
        facet_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            facet_type: facet_type.into(),
            title: title.into(),
        }
    }
}

/// The backend's `search_metadata` section for one successful search,
/// tagged with the keyword that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// The originating keyword, trimmed.
    pub keyword: String,
    /// Verbatim copy of the backend's metadata fields (status, timing,
    /// endpoint references). Shape is backend-defined and not validated.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Aggregate outcome of one batch run.
///
/// Built incrementally by the orchestrator and immutable once returned.
/// Invariant: `failed_keywords.len() + successful_count() == total_keywords`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResult {
    /// Flattened facet rows, grouped by keyword in input order.
    pub rows: Vec<FacetRow>,
    /// Keywords whose search failed, in input order.
    pub failed_keywords: Vec<String>,
    /// Metadata for each successful search, in input order.
    pub metadata: Vec<SearchMetadata>,
    /// Number of keywords submitted to the batch.
    pub total_keywords: usize,
}

impl BatchResult {
    /// Number of keywords whose search succeeded.
    pub fn successful_count(&self) -> usize {
        self.total_keywords - self.failed_keywords.len()
    }

    /// Total number of flattened filter rows across the batch.
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }
}
