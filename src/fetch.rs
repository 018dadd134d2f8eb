use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::CrawlConfig;
use crate::crawlers::crawler::Fetcher;
use crate::error::{CrawlError, Result};
use crate::results::Page;

/// HTTP collaborator backed by reqwest.
///
/// Follows redirects, applies the configured timeout and User-Agent, and
/// treats non-2xx statuses as fetch errors. Each call owns its connection
/// lifecycle; there is no pooling the crawler depends on.
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build a fetcher from crawl configuration
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            timeout_secs: config.fetch_timeout_secs,
        })
    }

    fn map_error(&self, e: reqwest::Error) -> CrawlError {
        if e.is_timeout() {
            CrawlError::Timeout {
                timeout: self.timeout_secs,
            }
        } else {
            CrawlError::Http(e)
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page> {
        let parsed = Url::parse(url).map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.map_error(e))?
            .error_for_status()?;

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        let text = decode_text(&body);

        ::log::debug!("fetched {} ({} bytes, {:?})", final_url, body.len(), content_type);

        Ok(Page::new(final_url, content_type, text, body.len()))
    }
}

/// Decode body bytes without ever rejecting them: strict UTF-8 when the
/// body is valid, otherwise a total single-byte-per-character decoding.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
