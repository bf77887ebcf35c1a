//! HTTP page fetching with a per-request timeout.

use reqwest::Client;
use tracing::debug;

use crate::error::ExtractError;
use crate::service::ParseOptions;

/// Fetches page HTML with the configured timeout and user agent
pub struct PageFetcher {
    client: Client,
    timeout_ms: u128,
}

impl PageFetcher {
    /// Create a new page fetcher
    pub fn new(options: &ParseOptions) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(ExtractError::Http)?;

        Ok(Self {
            client,
            timeout_ms: options.timeout.as_millis(),
        })
    }

    /// Fetch the HTML of a single page. One attempt, no retries.
    pub async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        debug!("Fetching page: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let html = response.text().await.map_err(|e| self.map_error(e))?;
        debug!("Fetched {} bytes from: {}", html.len(), url);

        Ok(html)
    }

    fn map_error(&self, err: reqwest::Error) -> ExtractError {
        if err.is_timeout() {
            ExtractError::Timeout(self.timeout_ms)
        } else {
            ExtractError::Http(err)
        }
    }
}
