//! Flattening of raw search results into facet rows.
//!
//! Pure functions over the backend's opaque JSON. Every field access is an
//! explicit `.get()` probe; absent or oddly-shaped sections are treated as
//! empty rather than errors, and missing labels fall back to `"Unknown"`.

use crate::types::{FacetRow, SearchMetadata};
use serde_json::Value;

/// Sentinel recorded when the backend omits a facet `type` or `title`.
const UNKNOWN: &str = "Unknown";

/// Extract refine-filter rows from one raw search result.
///
/// Walks `refine_search_filters` in backend order: one row per option,
/// grouped by facet group. Returns an empty vec when the section is
/// missing or not an array — a keyword with no shopping facets is a
/// normal outcome, not an error.
pub fn extract_refine_filters(results: &Value, keyword: &str) -> Vec<FacetRow> {
    let Some(filters) = results.get("refine_search_filters").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for group in filters {
        let facet_type = group
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN);
        let Some(options) = group.get("options").and_then(Value::as_array) else {
            continue;
        };

        for option in options {
            let title = option
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN);
            rows.push(FacetRow::new(keyword, facet_type, title));
        }
    }

    rows
}

/// Copy the result's `search_metadata` section, tagged with the keyword.
///
/// Returns `None` when the section is missing or not an object.
pub fn extract_metadata(results: &Value, keyword: &str) -> Option<SearchMetadata> {
    let fields = results.get("search_metadata")?.as_object()?.clone();
    Some(SearchMetadata {
        keyword: keyword.to_string(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mock_results() -> Value {
        json!({
            "refine_search_filters": [
                {
                    "type": "Department",
                    "options": [
                        {"title": "Women's"},
                        {"title": "Men's"}
                    ]
                },
                {
                    "type": "Color",
                    "options": [
                        {"title": "Black"},
                        {"title": "White"},
                        {"title": "Red"}
                    ]
                }
            ]
        })
    }

    #[test]
    fn extracts_rows_in_group_then_option_order() {
        let rows = extract_refine_filters(&mock_results(), "test shoes");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], FacetRow::new("test shoes", "Department", "Women's"));
        assert_eq!(rows[1], FacetRow::new("test shoes", "Department", "Men's"));
        assert_eq!(rows[2], FacetRow::new("test shoes", "Color", "Black"));
        assert_eq!(rows[3], FacetRow::new("test shoes", "Color", "White"));
        assert_eq!(rows[4], FacetRow::new("test shoes", "Color", "Red"));
    }

    #[test]
    fn missing_section_yields_empty() {
        let results = json!({"organic_results": []});
        let rows = extract_refine_filters(&results, "no filters");
        assert!(rows.is_empty());
    }

    #[test]
    fn non_array_section_yields_empty() {
        let results = json!({"refine_search_filters": "oops"});
        assert!(extract_refine_filters(&results, "kw").is_empty());
    }

    #[test]
    fn missing_type_defaults_to_unknown() {
        let results = json!({
            "refine_search_filters": [
                {"options": [{"title": "Nike"}]}
            ]
        });
        let rows = extract_refine_filters(&results, "kw");
        assert_eq!(rows, vec![FacetRow::new("kw", "Unknown", "Nike")]);
    }

    #[test]
    fn missing_title_defaults_to_unknown() {
        let results = json!({
            "refine_search_filters": [
                {"type": "Brand", "options": [{"link": "https://example.com"}]}
            ]
        });
        let rows = extract_refine_filters(&results, "kw");
        assert_eq!(rows, vec![FacetRow::new("kw", "Brand", "Unknown")]);
    }

    #[test]
    fn group_without_options_is_skipped() {
        let results = json!({
            "refine_search_filters": [
                {"type": "Brand"},
                {"type": "Color", "options": [{"title": "Black"}]}
            ]
        });
        let rows = extract_refine_filters(&results, "kw");
        assert_eq!(rows, vec![FacetRow::new("kw", "Color", "Black")]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let a = extract_refine_filters(&mock_results(), "test shoes");
        let b = extract_refine_filters(&mock_results(), "test shoes");
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_copied_and_tagged() {
        let results = json!({
            "search_metadata": {
                "status": "Success",
                "total_time_taken": 1.42
            }
        });
        let meta = extract_metadata(&results, "low heels").expect("metadata present");
        assert_eq!(meta.keyword, "low heels");
        assert_eq!(meta.fields["status"], "Success");
        assert_eq!(meta.fields["total_time_taken"], 1.42);
    }

    #[test]
    fn missing_metadata_yields_none() {
        let results = json!({"refine_search_filters": []});
        assert!(extract_metadata(&results, "kw").is_none());
    }

    #[test]
    fn non_object_metadata_yields_none() {
        let results = json!({"search_metadata": [1, 2, 3]});
        assert!(extract_metadata(&results, "kw").is_none());
    }
}
