//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] carries the SerpAPI credential, locale parameters, and
//! batch bounds. The defaults match the original Google Shopping workflow:
//! `gl=us`, `hl=en`, at most 30 keywords per batch.

use crate::error::FacetError;

/// Default maximum number of keywords accepted in one batch.
pub const DEFAULT_MAX_KEYWORDS: usize = 30;

/// Countries the search can be localised to, as `(label, gl code)` pairs.
pub const SUPPORTED_COUNTRIES: &[(&str, &str)] = &[
    ("Australia", "au"),
    ("New Zealand", "nz"),
    ("United States", "us"),
    ("Singapore", "sg"),
    ("Philippines", "ph"),
    ("United Kingdom", "uk"),
    ("Germany", "de"),
];

/// Interface languages the search supports, as `(label, hl code)` pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("German", "de"),
    ("Chinese (Simplified)", "zh-cn"),
    ("Chinese (Traditional)", "zh-tw"),
];

/// Look up the `gl` country code for a display label, e.g. `"Australia"` → `"au"`.
pub fn country_code_for(label: &str) -> Option<&'static str> {
    SUPPORTED_COUNTRIES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}

/// Look up the `hl` language code for a display label, e.g. `"English"` → `"en"`.
pub fn language_code_for(label: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}

/// Configuration for a facet extraction batch.
///
/// Use [`SearchConfig::new`] with an API key for defaults, or construct
/// with field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// SerpAPI credential sent with every request.
    pub api_key: String,
    /// Country code for search localisation (`gl` parameter).
    pub country_code: String,
    /// Interface language code (`hl` parameter).
    pub language_code: String,
    /// Maximum number of keywords accepted in one batch.
    pub max_keywords: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Override for the search endpoint URL. `None` uses the public
    /// SerpAPI endpoint; tests point this at a local mock server.
    pub endpoint: Option<String>,
}

impl SearchConfig {
    /// Build a configuration with the given API key and default locale
    /// and bounds (`gl=us`, `hl=en`, 30 keywords, 8 second timeout).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            country_code: "us".into(),
            language_code: "en".into(),
            max_keywords: DEFAULT_MAX_KEYWORDS,
            timeout_seconds: 8,
            endpoint: None,
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_key` must not be empty
    /// - `country_code` and `language_code` must not be empty
    /// - `max_keywords` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), FacetError> {
        if self.api_key.trim().is_empty() {
            return Err(FacetError::Config("api_key must not be empty".into()));
        }
        if self.country_code.trim().is_empty() {
            return Err(FacetError::Config("country_code must not be empty".into()));
        }
        if self.language_code.trim().is_empty() {
            return Err(FacetError::Config("language_code must not be empty".into()));
        }
        if self.max_keywords == 0 {
            return Err(FacetError::Config(
                "max_keywords must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(FacetError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
