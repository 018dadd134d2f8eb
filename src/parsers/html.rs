use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts links in a forgiving way:
/// - First, walk proper `<a href="...">` tags in document order.
/// - Then, also regex any `href="..."` pattern from the raw text to catch
///   badly formed markup the structural parse may have rejected.
///
/// Both passes resolve against `base` and the merged result is deduplicated
/// by exact absolute string, preserving first-seen order.
pub fn extract_links(base: &Url, html: &str) -> Vec<String> {
    let mut links = structural_links(base, html);
    links.extend(fallback_links(base, html));

    let links = dedup_preserving_order(links);

    ::log::debug!("extracted {} unique links from {}", links.len(), base);
    links
}

/// Structural pass over well-formed anchor tags.
///
/// The underlying parser is non-validating and recovers from malformed
/// input, so this pass sees whatever anchors survive error recovery.
/// Anchors with an empty href are ignored.
pub fn structural_links(base: &Url, html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").expect("static selector");

    let mut links = Vec::new();
    for element in doc.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        match base.join(href) {
            Ok(resolved) => links.push(resolved.to_string()),
            Err(e) => ::log::debug!("skipping unresolvable href {:?}: {}", href, e),
        }
    }

    links
}

/// Fallback pass: match `href = "..."` anywhere in the raw text, including
/// inside comments and broken tags. Captured values are trimmed before
/// resolution.
pub fn fallback_links(base: &Url, html: &str) -> Vec<String> {
    let href_pattern =
        Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).expect("static pattern");

    let mut links = Vec::new();
    for capture in href_pattern.captures_iter(html) {
        let value = capture[1].trim();
        match base.join(value) {
            Ok(resolved) => links.push(resolved.to_string()),
            Err(e) => ::log::debug!("skipping unresolvable href {:?}: {}", value, e),
        }
    }

    links
}

/// Deduplicate while preserving first-seen order
fn dedup_preserving_order(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for link in links {
        if seen.insert(link.clone()) {
            unique.push(link);
        }
    }
    unique
}
