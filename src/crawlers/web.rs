use std::collections::VecDeque;
use tokio::time::{Duration, sleep};
use url::Url;

use crate::config::CrawlConfig;
use crate::crawlers::crawler::Fetcher;
use crate::filter;
use crate::manifest;
use crate::parsers::{html, text};

/// Sequential breadth-first crawl driver.
///
/// Owns the FIFO work queue and processes one address at a time: fetch,
/// gate by content type, stream the page text, extract links, enqueue.
/// There is intentionally no visited set, so a cyclic link graph keeps the
/// queue alive forever; the natural exits are queue exhaustion and an
/// external interrupt.
pub struct WebCrawler<F> {
    config: CrawlConfig,
    fetcher: F,
    queue: VecDeque<String>,
}

impl<F: Fetcher> WebCrawler<F> {
    /// Create a crawler seeded with the configured start URL
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(config.start_url.clone());

        Self {
            config,
            fetcher,
            queue,
        }
    }

    /// Number of addresses currently waiting in the work queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Drive the crawl until the queue empties.
    ///
    /// When the manifest probe is enabled and finds a usable llms.txt the
    /// traversal never starts at all.
    pub async fn run(&mut self) {
        ::log::info!("starting crawl at {}", self.config.start_url);

        if self.config.check_manifest
            && manifest::probe(&self.fetcher, &self.config.start_url).await
        {
            return;
        }

        while self.step().await {}

        ::log::info!("work queue exhausted");
    }

    /// Process a single queued address. Returns false once the queue is
    /// empty, true otherwise - including after a failed or skipped fetch.
    pub async fn step(&mut self) -> bool {
        let Some(url) = self.queue.pop_front() else {
            return false;
        };

        let page = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                eprintln!("[ERROR] Failed to fetch {}: {}", url, e);
                return true;
            }
        };

        if !filter::is_crawlable_text(&page.content_type) {
            println!("[SKIP] {} (Content-Type: {})", page.url, page.content_type);
            return true;
        }

        println!(
            "[INFO] Fetched {} ({} bytes, {})",
            page.url, page.bytes, page.content_type
        );
        self.stream_page(&page.url, &page.text).await;

        // Links resolve against the final post-redirect address, not the
        // address that was queued.
        match Url::parse(&page.url) {
            Ok(base) => {
                let links = html::extract_links(&base, &page.text);
                println!("[INFO] Found {} links on {}", links.len(), page.url);
                self.enqueue_links(&links);
            }
            Err(e) => {
                ::log::warn!("unparseable final URL {}, skipping extraction: {}", page.url, e);
            }
        }

        if self.config.request_delay_ms > 0 {
            sleep(Duration::from_millis(self.config.request_delay_ms)).await;
        }

        true
    }

    /// Stream the page's visible lines to stdout with per-line pacing
    async fn stream_page(&self, url: &str, page_text: &str) {
        let rule = "=".repeat(80);
        println!("{}", rule);
        println!("[VISITING] {}", url);
        println!("{}", rule);

        for line in text::strip_style_blocks(page_text) {
            println!("{}", line);
            if self.config.stream_delay_ms > 0 {
                sleep(Duration::from_millis(self.config.stream_delay_ms)).await;
            }
        }

        println!("\n[END OF PAGE]\n");
    }

    /// Queue every extracted http(s) link, unconditionally.
    ///
    /// Addresses already crawled are queued again on purpose: revisiting is
    /// part of the design, not an oversight.
    fn enqueue_links(&mut self, links: &[String]) {
        for link in links {
            match Url::parse(link) {
                Ok(parsed) if filter::is_crawlable_scheme(&parsed) => {
                    self.queue.push_back(link.clone());
                }
                Ok(parsed) => {
                    ::log::debug!("not following {} scheme: {}", parsed.scheme(), link);
                }
                Err(e) => {
                    ::log::debug!("dropping unparseable link {:?}: {}", link, e);
                }
            }
        }
    }
}
