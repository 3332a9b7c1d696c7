//! Inline citation rewriting and reference formatting.
//!
//! Only the first `[label](url)` occurrence in a line is rewritten; a second
//! link on the same line is left as literal text. This mirrors the behaviour
//! documents were written against and is a documented limitation, not a
//! silent loss.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Title used when a citation page cannot be fetched or carries no title.
pub const FALLBACK_TITLE: &str = "Untitled resource";

static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)").expect("inline link pattern"));

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title tag pattern"));

/// The outcome of rewriting one line's first inline link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    /// The line with `[label](url)` replaced by `label [index]`.
    pub line: String,
    /// The link target, to be resolved into a bibliography entry.
    pub url: String,
}

/// Replaces the first inline link in `line` with `label [index]`.
///
/// Returns `None` when the line carries no link; the citation index is
/// assigned by the caller, strictly in order of first appearance.
pub fn rewrite_first_link(line: &str, index: u32) -> Option<LinkRewrite> {
    let captures = INLINE_LINK.captures(line)?;
    let full = captures.get(0)?;
    let label = captures.get(1)?.as_str();
    let url = captures.get(2)?.as_str();

    let mut rewritten = String::with_capacity(line.len());
    rewritten.push_str(&line[..full.start()]);
    rewritten.push_str(label);
    rewritten.push_str(&format!(" [{}]", index));
    rewritten.push_str(&line[full.end()..]);

    Some(LinkRewrite {
        line: rewritten,
        url: url.to_string(),
    })
}

/// Extracts the `<title>` element text from an HTML page, whitespace
/// collapsed. Returns `None` for pages with no or an empty title.
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_TAG.captures(html)?.get(1)?.as_str();
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Formats one bibliography entry text.
pub fn format_reference(title: &str, url: &str, accessed: NaiveDate) -> String {
    format!(
        "{} [Electronic resource]. Access mode: {} (accessed: {}).",
        title,
        url,
        accessed.format("%d.%m.%Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_replaces_first_link_only() {
        let rewrite =
            rewrite_first_link("See [Site](http://x) and [Other](http://y).", 1).unwrap();
        assert_eq!(rewrite.line, "See Site [1] and [Other](http://y).");
        assert_eq!(rewrite.url, "http://x");
    }

    #[test]
    fn test_rewrite_keeps_surrounding_text() {
        let rewrite = rewrite_first_link("Some text [Site](http://x) more.", 3).unwrap();
        assert_eq!(rewrite.line, "Some text Site [3] more.");
    }

    #[test]
    fn test_line_without_link() {
        assert_eq!(rewrite_first_link("no links here", 1), None);
        // A bare bracketed marker is not a link.
        assert_eq!(rewrite_first_link("already rewritten [1]", 2), None);
    }

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>A Useful Page</title></head></html>";
        assert_eq!(extract_title(html), Some("A Useful Page".to_string()));
    }

    #[test]
    fn test_extract_title_collapses_whitespace() {
        let html = "<title>\n  Spread\n  Out\n</title>";
        assert_eq!(extract_title(html), Some("Spread Out".to_string()));
    }

    #[test]
    fn test_extract_title_case_insensitive_with_attributes() {
        let html = r#"<TITLE lang="en">Shouty</TITLE>"#;
        assert_eq!(extract_title(html), Some("Shouty".to_string()));
    }

    #[test]
    fn test_extract_title_missing_or_empty() {
        assert_eq!(extract_title("<p>no title</p>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[test]
    fn test_format_reference() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            format_reference("A Useful Page", "http://x", date),
            "A Useful Page [Electronic resource]. Access mode: http://x (accessed: 07.03.2024)."
        );
    }
}
