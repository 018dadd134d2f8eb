use url::Url;

/// Decide whether a fetched resource is crawlable text worth streaming and
/// mining for links, based on its declared Content-Type header.
///
/// Stylesheets are rejected outright; everything else passes as long as the
/// declared type mentions html, xml or text somewhere. An absent header
/// (empty string) fails the check.
pub fn is_crawlable_text(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();

    if ct.contains("text/css") {
        return false;
    }

    ct.contains("html") || ct.contains("xml") || ct.contains("text")
}

/// Check whether a resolved link uses a scheme this crawler follows
pub fn is_crawlable_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
