//! Maps one raw source line to a token kind.
//!
//! Classification order matters: the fence toggle is checked first and
//! short-circuits every other rule, and while a fence is open every line is
//! verbatim code. Lines that only partially match a syntax (missing space
//! after the heading marker, empty list text) fall through to `Text`;
//! malformed input is never an error.

use regex::Regex;
use std::sync::LazyLock;

/// The fence marker: a line consisting of exactly three backticks.
pub const FENCE: &str = "```";

/// The horizontal-rule token treated as a page-break marker.
pub const PAGE_BREAK: &str = "---";

/// Headings that keep the chapter style but stay outside the numbering
/// scheme, compared case-insensitively against the trimmed heading text.
const EXCLUDED_HEADINGS: [&str; 4] = ["introduction", "conclusion", "references", "contents"];

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("ordered item pattern"));

/// The token kind of a single line, borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A fence marker line; produces no block, flips the verbatim mode.
    FenceToggle,
    /// Any line while the fence is open, whitespace preserved.
    Code(&'a str),
    Blank,
    /// `---` alone on a line; the break applies to the next emitted block.
    PageBreak,
    OrderedItem(&'a str),
    BulletItem(&'a str),
    ChapterHeading(&'a str),
    SectionHeading(&'a str),
    /// Chapter-styled, page-broken, but outside the numbering scheme.
    ExcludedHeading(&'a str),
    /// `![[target]]` alone on a line.
    ImageEmbed(&'a str),
    Text(&'a str),
}

pub fn classify(line: &str, in_fence: bool) -> LineKind<'_> {
    if line == FENCE {
        return LineKind::FenceToggle;
    }
    if in_fence {
        return LineKind::Code(line);
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if line == PAGE_BREAK {
        return LineKind::PageBreak;
    }

    if let Some(rest) = line.strip_prefix("## ") {
        let text = rest.trim();
        if !text.is_empty() {
            return LineKind::SectionHeading(text);
        }
    } else if let Some(rest) = line.strip_prefix("# ") {
        let text = rest.trim();
        if !text.is_empty() {
            if EXCLUDED_HEADINGS
                .iter()
                .any(|h| text.eq_ignore_ascii_case(h))
            {
                return LineKind::ExcludedHeading(text);
            }
            return LineKind::ChapterHeading(text);
        }
    }

    if let Some(rest) = line.strip_prefix("- ") {
        let text = rest.trim();
        if !text.is_empty() {
            return LineKind::BulletItem(text);
        }
    }
    if let Some(captures) = ORDERED_ITEM.captures(line)
        && let Some(text) = captures.get(1)
    {
        return LineKind::OrderedItem(text.as_str().trim());
    }

    if let Some(target) = line
        .strip_prefix("![[")
        .and_then(|rest| rest.strip_suffix("]]"))
    {
        let target = target.trim();
        if !target.is_empty() {
            return LineKind::ImageEmbed(target);
        }
    }

    LineKind::Text(line)
}
