//! UrlFetcher trait for abstracting HTTP page retrieval.
//!
//! Citation titles are resolved through this trait; the engine never owns a
//! network stack of its own.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for fetch operations. Only transport-level failures are
/// errors; HTTP error statuses come back as ordinary responses.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Network failure fetching '{url}': {message}")]
    Network { url: String, message: String },
}

/// A fetched page: status code plus decoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A trait for retrieving a page over the network.
pub trait UrlFetcher: Send + Sync + Debug {
    /// Fetch a URL. Fails with [`FetchError::Network`] on transport failure;
    /// a reachable server always yields a response, whatever the status.
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;

    /// Returns a human-readable name for this fetcher (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory fetcher serving pre-registered pages.
///
/// Unregistered URLs behave like an unreachable host.
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    pages: std::sync::RwLock<std::collections::HashMap<String, FetchResponse>>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a 200 response for a URL.
    pub fn add(&self, url: impl Into<String>, body: impl Into<String>) {
        self.add_response(url, FetchResponse::ok(body));
    }

    /// Register an arbitrary response for a URL.
    pub fn add_response(&self, url: impl Into<String>, response: FetchResponse) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(url.into(), response);
        }
    }
}

impl UrlFetcher for InMemoryFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let pages = self.pages.read().map_err(|_| FetchError::Network {
            url: url.to_string(),
            message: "page store lock poisoned".to_string(),
        })?;
        pages.get(url).cloned().ok_or_else(|| FetchError::Network {
            url: url.to_string(),
            message: "host unreachable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryFetcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_fetcher_serves_registered_page() {
        let fetcher = InMemoryFetcher::new();
        fetcher.add("http://example.com", "<title>Example</title>");

        let response = fetcher.fetch("http://example.com").unwrap();
        assert!(response.is_success());
        assert_eq!(response.body, "<title>Example</title>");
    }

    #[test]
    fn test_in_memory_fetcher_unknown_url_is_network_error() {
        let fetcher = InMemoryFetcher::new();
        let result = fetcher.fetch("http://nowhere.invalid");
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }

    #[test]
    fn test_in_memory_fetcher_error_status() {
        let fetcher = InMemoryFetcher::new();
        fetcher.add_response(
            "http://example.com/gone",
            FetchResponse {
                status: 404,
                body: String::new(),
            },
        );

        let response = fetcher.fetch("http://example.com/gone").unwrap();
        assert!(!response.is_success());
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Network {
            url: "http://x".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("http://x"));
        assert!(err.to_string().contains("connection refused"));
    }
}
