//! Search backend adapter.
//!
//! [`SearchBackend`] is the seam between the batch orchestrator and the
//! outbound search API: one keyword in, one raw JSON result out. The
//! concrete [`SerpApiClient`] talks to SerpAPI's Google engine;
//! [`perform_search`] normalises any failure into `None` so the
//! orchestrator never handles errors from this layer directly.

use crate::config::SearchConfig;
use crate::error::FacetError;
use crate::http;
use serde_json::Value;

/// Public SerpAPI search endpoint.
pub const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

/// A search backend that resolves one keyword to a raw result document.
///
/// Implementors handle their own URL construction, authentication, and
/// response parsing. The returned [`Value`] is an opaque nested mapping;
/// callers probe it with explicit `.get()` access and tolerate any shape.
///
/// All implementations must be `Send + Sync` so a batch can run on any
/// executor thread.
pub trait SearchBackend: Send + Sync {
    /// Perform one search request for `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError`] if the HTTP request fails, the backend
    /// responds with an error status, or the body is not valid JSON.
    fn search(
        &self,
        keyword: &str,
    ) -> impl std::future::Future<Output = Result<Value, FacetError>> + Send;
}

/// SerpAPI client with a fixed request shape: `engine=google`, the keyword
/// as `q`, plus credential and locale from [`SearchConfig`].
///
/// One underlying [`reqwest::Client`] is built at construction and reused
/// for every request in the batch.
pub struct SerpApiClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl SerpApiClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FacetError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: SearchConfig) -> Result<Self, FacetError> {
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> &str {
        self.config.endpoint.as_deref().unwrap_or(SERPAPI_ENDPOINT)
    }
}

impl SearchBackend for SerpApiClient {
    async fn search(&self, keyword: &str) -> Result<Value, FacetError> {
        tracing::trace!(keyword, "search request");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("engine", "google"),
                ("q", keyword),
                ("api_key", self.config.api_key.as_str()),
                ("gl", self.config.country_code.as_str()),
                ("hl", self.config.language_code.as_str()),
            ])
            .send()
            .await
            // without_url: the request URL carries the api_key
            .map_err(|e| FacetError::Http(format!("search request failed: {}", e.without_url())))?
            .error_for_status()
            .map_err(|e| FacetError::Http(format!("search HTTP error: {}", e.without_url())))?;

        let results = response
            .json::<Value>()
            .await
            .map_err(|e| FacetError::Parse(format!("response was not valid JSON: {}", e.without_url())))?;

        tracing::trace!(keyword, "search response parsed");
        Ok(results)
    }
}

/// Run one search and flatten the outcome to an optional result.
///
/// Failures are logged at warn level with the offending keyword and the
/// underlying cause, then converted to `None`. This is the only failure
/// mode the orchestrator sees from the search layer: it branches on
/// presence, never on error variants.
pub async fn perform_search<B: SearchBackend>(backend: &B, keyword: &str) -> Option<Value> {
    match backend.search(keyword).await {
        Ok(results) => Some(results),
        Err(err) => {
            tracing::warn!(keyword, error = %err, "search failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A scripted backend for exercising the adapter contract.
    struct MockBackend {
        result: Option<Value>,
    }

    impl SearchBackend for MockBackend {
        async fn search(&self, _keyword: &str) -> Result<Value, FacetError> {
            match &self.result {
                Some(value) => Ok(value.clone()),
                None => Err(FacetError::Http("mock backend failure".into())),
            }
        }
    }

    #[test]
    fn serp_api_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SerpApiClient>();
    }

    #[test]
    fn client_builds_from_valid_config() {
        let client = SerpApiClient::new(SearchConfig::new("secret"));
        assert!(client.is_ok());
    }

    #[test]
    fn endpoint_defaults_to_serpapi() {
        let client = SerpApiClient::new(SearchConfig::new("secret")).expect("client");
        assert_eq!(client.endpoint(), SERPAPI_ENDPOINT);
    }

    #[test]
    fn endpoint_override_respected() {
        let config = SearchConfig {
            endpoint: Some("http://127.0.0.1:9000/search".into()),
            ..SearchConfig::new("secret")
        };
        let client = SerpApiClient::new(config).expect("client");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9000/search");
    }

    #[tokio::test]
    async fn perform_search_passes_through_success() {
        let backend = MockBackend {
            result: Some(json!({"search_metadata": {"status": "Success"}})),
        };
        let result = perform_search(&backend, "running shoes").await;
        assert!(result.is_some());
        let value = result.expect("result present");
        assert_eq!(value["search_metadata"]["status"], "Success");
    }

    #[tokio::test]
    async fn perform_search_flattens_failure_to_none() {
        let backend = MockBackend { result: None };
        let result = perform_search(&backend, "running shoes").await;
        assert!(result.is_none());
    }
}
