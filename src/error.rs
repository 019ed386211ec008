//! Error types for the facet-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. The API key never appears in an error
//! message.

/// Errors that can occur during facet extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum FacetError {
    /// An HTTP request to the search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse the search backend's JSON response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to serialize or write the CSV export.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience type alias for facet-search results.
pub type Result<T> = std::result::Result<T, FacetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = FacetError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = FacetError::Parse("unexpected response body".into());
        assert_eq!(err.to_string(), "parse error: unexpected response body");
    }

    #[test]
    fn display_config() {
        let err = FacetError::Config("api_key must not be empty".into());
        assert_eq!(err.to_string(), "config error: api_key must not be empty");
    }

    #[test]
    fn display_export() {
        let err = FacetError::Export("permission denied".into());
        assert_eq!(err.to_string(), "export error: permission denied");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FacetError>();
    }
}
