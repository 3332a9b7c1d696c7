//! Blocking HTTP fetcher backed by a shared `ureq` agent.

use galley_traits::{FetchError, FetchResponse, UrlFetcher};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches citation pages over HTTP(S).
///
/// HTTP error statuses are reported as ordinary responses so the caller can
/// decide how to degrade; only transport failures become errors.
#[derive(Debug)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        log::debug!("fetching {}", url);
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                let body = response.into_string().map_err(|e| FetchError::Network {
                    url: url.to_string(),
                    message: format!("failed to read body: {}", e),
                })?;
                Ok(FetchResponse { status, body })
            }
            Err(ureq::Error::Status(status, response)) => Ok(FetchResponse {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => Err(FetchError::Network {
                url: url.to_string(),
                message: transport.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "HttpFetcher"
    }
}
