use std::time::Duration;

/// The default category listing endpoint.
pub const DEFAULT_CATEGORIES_ENDPOINT: &str =
    "https://www.themealdb.com/api/json/v1/1/categories.php";

/// Configuration of the category fetcher and its transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// The category listing endpoint.
    pub endpoint: String,

    /// The transport timeout, none means the client default.
    pub timeout: Option<Duration>,

    /// Whether an empty category list is still delivered to the listener.
    ///
    /// Off by default: an empty list is suppressed like a failure.
    pub deliver_empty_results: bool,
}

impl FetcherConfig {
    /// Creates a new `FetcherConfig` for the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout: None,
            deliver_empty_results: false,
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES_ENDPOINT)
    }
}
