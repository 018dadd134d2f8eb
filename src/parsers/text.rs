const STYLE_OPEN: &str = "<style";
const STYLE_CLOSE: &str = "</style>";

/// Filters a page's text down to the lines worth streaming, suppressing
/// everything between a `<style` open marker and its matching `</style>`
/// close, across line boundaries.
///
/// This is a best-effort single-pass filter, not a markup-aware renderer:
/// the markers are matched as plain case-insensitive substrings so the
/// filter degrades gracefully on malformed markup. Blank lines are never
/// emitted, inside or outside a style block.
pub fn strip_style_blocks(text: &str) -> Vec<String> {
    let mut in_style = false;
    let mut visible = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }

        let lower = line.to_ascii_lowercase();

        // Entering a style block. When the close marker sits on the same
        // line only the text after its last occurrence survives; the text
        // before and within the style span is dropped.
        if !in_style && lower.contains(STYLE_OPEN) {
            in_style = true;
            if let Some(tail) = tail_after_close(line, &lower) {
                in_style = false;
                if !tail.is_empty() {
                    visible.push(tail.to_string());
                }
            }
            continue;
        }

        // Inside a style block: skip lines until one carries the close
        // marker, then keep only the trimmed remainder after it.
        if in_style {
            if let Some(tail) = tail_after_close(line, &lower) {
                in_style = false;
                if !tail.is_empty() {
                    visible.push(tail.to_string());
                }
            }
            continue;
        }

        visible.push(line.to_string());
    }

    visible
}

/// Trimmed text after the last close marker on the line, or None when the
/// line has no close marker. `lower` must be the ASCII-lowercased copy of
/// `line` so byte positions carry over.
fn tail_after_close<'a>(line: &'a str, lower: &str) -> Option<&'a str> {
    lower
        .rfind(STYLE_CLOSE)
        .map(|pos| line[pos + STYLE_CLOSE.len()..].trim())
}
