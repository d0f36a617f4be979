//! HTTP(S)-backed content store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;
use tracing::debug;
use url::Url;

use crate::domain::entities::FailureKind;
use crate::domain::repositories::{ContentError, ContentStore};

/// Dereferences `http://` and `https://` content pointers.
///
/// Transient failures (connection errors, timeouts, 5xx responses) are
/// retried with exponential backoff; everything else fails immediately.
pub struct HttpContentStore {
    client: Client,
    retries: usize,
}

impl HttpContentStore {
    /// Builds a store whose requests time out after `timeout` and which
    /// retries transient failures up to `retries` times.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration, retries: usize) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, retries })
    }

    /// Validates a content pointer.
    fn parse_pointer(uri: &str) -> Result<Url, ContentError> {
        let url = Url::parse(uri).map_err(|e| {
            ContentError::malformed(format!("Invalid content pointer `{}`: {}", uri, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ContentError::malformed(format!(
                "Unsupported content pointer scheme `{}`",
                scheme
            ))),
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Value, ContentError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ContentError::unreachable(format!("Cannot reach {}: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ContentError::not_found(format!("{} does not exist", url)));
        }
        if status.is_server_error() {
            return Err(ContentError::unreachable(format!(
                "{} responded with {}",
                url, status
            )));
        }
        if !status.is_success() {
            return Err(ContentError::new(
                FailureKind::Other,
                format!("{} responded with {}", url, status),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::unreachable(format!("Cannot read {}: {}", url, e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| ContentError::malformed(format!("{} is not valid JSON: {}", url, e)))
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch(&self, uri: &str) -> Result<Value, ContentError> {
        let url = Self::parse_pointer(uri)?;
        debug!("Fetching content from {}", url);

        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_secs(1))
            .take(self.retries);

        RetryIf::start(strategy, || self.fetch_once(&url), ContentError::is_transient).await
    }
}
