use thiserror::Error;

/// Error type for crawl operations.
///
/// Fetch failures are never fatal to the crawl itself: the loop reports them
/// on the error sink and moves on to the next queued address.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// HTTP request failure, including non-2xx statuses
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// An address that could not be parsed as a URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration file I/O failure
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse failure
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;
