use serde::{Deserialize, Serialize};

/// Represents the result of fetching a single address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Final URL after any redirects
    pub url: String,

    /// Declared Content-Type header value (empty string when absent)
    pub content_type: String,

    /// Decoded body text
    pub text: String,

    /// Original body length in bytes, before decoding
    pub bytes: usize,
}

impl Page {
    /// Create a new page instance
    pub fn new(url: String, content_type: String, text: String, bytes: usize) -> Self {
        Self {
            url,
            content_type,
            text,
            bytes,
        }
    }
}
