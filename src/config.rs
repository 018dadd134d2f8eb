use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Configuration for the web crawler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from
    pub start_url: String,

    /// Whether to probe for llms.txt under the start URL before crawling
    #[serde(default)]
    pub check_manifest: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Delay between queue items in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Delay per streamed line in milliseconds
    #[serde(default = "default_stream_delay_ms")]
    pub stream_delay_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default per-request timeout
fn default_fetch_timeout_secs() -> u64 {
    15
}

/// Default delay between requests
fn default_request_delay_ms() -> u64 {
    500
}

/// Default delay per streamed line
fn default_stream_delay_ms() -> u64 {
    5
}

/// Default User-Agent string
fn default_user_agent() -> String {
    "FollowPage/0.1 (+https://example.org/)".to_string()
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            check_manifest: false,
            fetch_timeout_secs: default_fetch_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
            stream_delay_ms: default_stream_delay_ms(),
            user_agent: default_user_agent(),
        }
    }

    /// Enable or disable the manifest probe
    pub fn with_check_manifest(mut self, check: bool) -> Self {
        self.check_manifest = check;
        self
    }

    /// Override the per-request timeout
    pub fn with_fetch_timeout(mut self, seconds: u64) -> Self {
        self.fetch_timeout_secs = seconds;
        self
    }

    /// Override the delay between queue items
    pub fn with_request_delay(mut self, millis: u64) -> Self {
        self.request_delay_ms = millis;
        self
    }

    /// Override the delay per streamed line
    pub fn with_stream_delay(mut self, millis: u64) -> Self {
        self.stream_delay_ms = millis;
        self
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
