use crate::parsers::{html, text};
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
<head>
<style>
  body { color: red; }
</style>
</head>
<body>
<h1>Welcome</h1>
<a href="docs/">docs</a>
<!-- href="archive/" -->
<a href="../top.html">top</a>
</body>
</html>"#;

    #[test]
    fn test_streaming_and_extraction_over_the_same_page() {
        let base = Url::parse("http://a.com/dir/").unwrap();

        let lines = text::strip_style_blocks(PAGE);
        assert!(lines.contains(&"<h1>Welcome</h1>".to_string()));
        assert!(!lines.iter().any(|l| l.contains("color: red")));

        let links = html::extract_links(&base, PAGE);
        assert_eq!(
            links,
            vec![
                "http://a.com/dir/docs/",
                "http://a.com/top.html",
                "http://a.com/dir/archive/",
            ]
        );
    }

    #[test]
    fn test_extraction_is_independent_of_style_filtering() {
        // The extractor works on the raw text, so an href buried inside a
        // style block is still picked up by the fallback pass even though
        // the streamer suppresses the line.
        let page = "<style>\n/* href=\"css-note/\" */\n</style>\n<a href=\"real/\">r</a>";
        let base = Url::parse("http://a.com/").unwrap();

        let lines = text::strip_style_blocks(page);
        assert_eq!(lines, vec!["<a href=\"real/\">r</a>"]);

        let links = html::extract_links(&base, page);
        assert_eq!(links, vec!["http://a.com/real/", "http://a.com/css-note/"]);
    }
}
