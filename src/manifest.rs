use url::Url;

use crate::crawlers::crawler::Fetcher;
use crate::utils::ensure_trailing_slash;

/// Conventional manifest file name probed directly under the start address
pub const MANIFEST_NAME: &str = "llms.txt";

/// Probe for an llms.txt manifest directly under the given address.
///
/// The base is given a trailing slash so the join resolves "under this
/// path": probing `http://example.com/foo` checks
/// `http://example.com/foo/llms.txt`. One fetch, no retries. Returns true
/// only when the response looks like usable text, in which case the full
/// manifest is printed and the caller is expected to stop crawling.
pub async fn probe<F: Fetcher>(fetcher: &F, base_url: &str) -> bool {
    let base = ensure_trailing_slash(base_url);
    let candidate = match Url::parse(&base).and_then(|b| b.join(MANIFEST_NAME)) {
        Ok(url) => url,
        Err(e) => {
            ::log::warn!("cannot build manifest address from {}: {}", base_url, e);
            println!("[INFO] No accessible {} found at this URL.", MANIFEST_NAME);
            return false;
        }
    };

    println!("[INFO] Checking for {} at {}", MANIFEST_NAME, candidate);

    let page = match fetcher.fetch(candidate.as_str()).await {
        Ok(page) => page,
        Err(e) => {
            ::log::debug!("manifest probe failed: {}", e);
            println!("[INFO] No accessible {} found at this URL.", MANIFEST_NAME);
            return false;
        }
    };

    if !page.content_type.to_ascii_lowercase().contains("text") || page.text.trim().is_empty() {
        println!("[INFO] {} not in expected text format, ignoring.", MANIFEST_NAME);
        return false;
    }

    let rule = "#".repeat(80);
    println!("\n{}", rule);
    println!("[FOUND] {} at {} ({} bytes)", MANIFEST_NAME, page.url, page.bytes);
    println!("{}\n", rule);
    println!("{}", page.text);
    println!("\n{}", rule);
    println!("[INFO] Stopping crawl because {} was found and read.", MANIFEST_NAME);
    println!("{}\n", rule);

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CrawlError, Result};
    use crate::results::Page;
    use std::cell::RefCell;

    /// One-shot fetcher returning a fixed result and recording the
    /// requested address.
    struct FixedFetcher {
        result: std::result::Result<Page, String>,
        requested: RefCell<Vec<String>>,
    }

    impl FixedFetcher {
        fn ok(page: Page) -> Self {
            Self {
                result: Ok(page),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn err(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetcher for FixedFetcher {
        async fn fetch(&self, url: &str) -> Result<Page> {
            self.requested.borrow_mut().push(url.to_string());
            match &self.result {
                Ok(page) => Ok(page.clone()),
                Err(message) => Err(CrawlError::InvalidUrl(message.clone())),
            }
        }
    }

    fn text_page(text: &str) -> Page {
        Page::new(
            "http://a.com/llms.txt".to_string(),
            "text/plain".to_string(),
            text.to_string(),
            text.len(),
        )
    }

    #[tokio::test]
    async fn test_candidate_address_gets_a_trailing_slash() {
        let fetcher = FixedFetcher::err("unreachable");
        probe(&fetcher, "http://a.com/foo").await;
        assert_eq!(*fetcher.requested.borrow(), vec!["http://a.com/foo/llms.txt"]);
    }

    #[tokio::test]
    async fn test_existing_slash_is_not_doubled() {
        let fetcher = FixedFetcher::err("unreachable");
        probe(&fetcher, "http://a.com/foo/").await;
        assert_eq!(*fetcher.requested.borrow(), vec!["http://a.com/foo/llms.txt"]);
    }

    #[tokio::test]
    async fn test_fetch_error_counts_as_not_found() {
        let fetcher = FixedFetcher::err("connection refused");
        assert!(!probe(&fetcher, "http://a.com/").await);
        // Exactly one attempt, never retried.
        assert_eq!(fetcher.requested.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_non_text_content_type_is_a_format_mismatch() {
        let mut page = text_page("binary-ish payload");
        page.content_type = "application/octet-stream".to_string();
        let fetcher = FixedFetcher::ok(page);
        assert!(!probe(&fetcher, "http://a.com/").await);
    }

    #[tokio::test]
    async fn test_whitespace_only_body_is_a_format_mismatch() {
        let fetcher = FixedFetcher::ok(text_page("  \n\t\n"));
        assert!(!probe(&fetcher, "http://a.com/").await);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_a_format_mismatch() {
        let mut page = text_page("content");
        page.content_type = String::new();
        let fetcher = FixedFetcher::ok(page);
        assert!(!probe(&fetcher, "http://a.com/").await);
    }

    #[tokio::test]
    async fn test_usable_manifest_is_found() {
        let fetcher = FixedFetcher::ok(text_page("# Site manifest\n- /docs\n"));
        assert!(probe(&fetcher, "http://a.com/").await);
    }

    #[tokio::test]
    async fn test_content_type_match_is_case_insensitive() {
        let mut page = text_page("content");
        page.content_type = "TEXT/PLAIN; charset=utf-8".to_string();
        let fetcher = FixedFetcher::ok(page);
        assert!(probe(&fetcher, "http://a.com/").await);
    }
}
