use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

static SHARED_CHECKER: Lazy<HttpLinkChecker> = Lazy::new(HttpLinkChecker::new);

/// Why a probe did not confirm a resource. Never leaves this module as an error:
/// every variant collapses to `false` in [`LinkChecker::check_url_exists`].
#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    #[error("no url to probe")]
    MissingUrl,
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Network existence check for a single URL
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// Returns `true` only when the resource answered with a success status.
    /// Absent or empty URLs are `false` without touching the network.
    async fn check_url_exists(&self, url: Option<&str>) -> bool;
}

#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Issues one plain GET and classifies the outcome
    pub(crate) async fn probe(&self, url: Option<&str>) -> Result<(), ProbeError> {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(ProbeError::MissingUrl),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::Status {
                url: url.to_string(),
                status,
            })
        }
    }
}

impl Default for HttpLinkChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn check_url_exists(&self, url: Option<&str>) -> bool {
        match self.probe(url).await {
            Ok(()) => true,
            Err(e) => {
                debug!("Probe failed: {}", e);
                false
            }
        }
    }
}

/// Checks a URL with a process-wide HTTP client
pub async fn check_url_exists(url: Option<&str>) -> bool {
    SHARED_CHECKER.check_url_exists(url).await
}
