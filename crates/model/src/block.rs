use galley_style::{NumberingReference, StyleId};
use std::sync::Arc;

/// A reference-counted container for shared, immutable binary payloads.
pub type SharedData = Arc<Vec<u8>>;

/// Distinguishes independently-restarting runs of one numbering scheme.
///
/// Two non-adjacent ordered lists carry different instance ids so their
/// visible numbering restarts; the bibliography gets an instance of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListInstanceId(pub u32);

/// One element of the final block sequence. Immutable once produced; the
/// position in [`crate::Document::blocks`] is the only place ordering lives.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Start a new page before rendering this block.
    pub page_break_before: bool,
    pub content: BlockContent,
}

/// The closed set of block kinds. The renderer dispatches on the variant;
/// each variant carries exactly the fields its rendering needs.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// Placeholder the renderer expands into a generated table of contents.
    TocPlaceholder,
    Heading { style: StyleId, text: String },
    Paragraph { style: StyleId, text: String },
    Image {
        data: SharedData,
        width_px: u32,
        height_px: u32,
    },
    /// One verbatim line of a fenced code block.
    CodeLine { text: String },
    ListItem {
        text: String,
        numbering: NumberingReference,
        instance: ListInstanceId,
    },
    BibliographyEntry {
        text: String,
        numbering: NumberingReference,
        instance: ListInstanceId,
    },
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            page_break_before: false,
            content,
        }
    }

    pub fn with_page_break(mut self) -> Self {
        self.page_break_before = true;
        self
    }

    /// The named paragraph style this block renders under.
    pub fn style(&self) -> StyleId {
        match &self.content {
            BlockContent::Heading { style, .. } | BlockContent::Paragraph { style, .. } => *style,
            BlockContent::Image { .. } => StyleId::Center,
            BlockContent::CodeLine { .. } => StyleId::Code,
            BlockContent::TocPlaceholder
            | BlockContent::ListItem { .. }
            | BlockContent::BibliographyEntry { .. } => StyleId::Standard,
        }
    }

    /// The numbering reference and instance, for the variants that have one.
    pub fn numbering(&self) -> Option<(NumberingReference, ListInstanceId)> {
        match &self.content {
            BlockContent::ListItem {
                numbering,
                instance,
                ..
            }
            | BlockContent::BibliographyEntry {
                numbering,
                instance,
                ..
            } => Some((*numbering, *instance)),
            _ => None,
        }
    }

    /// The literal text of the block, if the variant carries any.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Heading { text, .. }
            | BlockContent::Paragraph { text, .. }
            | BlockContent::CodeLine { text }
            | BlockContent::ListItem { text, .. }
            | BlockContent::BibliographyEntry { text, .. } => Some(text),
            BlockContent::TocPlaceholder | BlockContent::Image { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match &self.content {
            BlockContent::TocPlaceholder => "toc-placeholder",
            BlockContent::Heading { .. } => "heading",
            BlockContent::Paragraph { .. } => "paragraph",
            BlockContent::Image { .. } => "image",
            BlockContent::CodeLine { .. } => "code-line",
            BlockContent::ListItem { .. } => "list-item",
            BlockContent::BibliographyEntry { .. } => "bibliography-entry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_break_flag() {
        let block = Block::new(BlockContent::Paragraph {
            style: StyleId::Standard,
            text: "body".to_string(),
        });
        assert!(!block.page_break_before);
        assert!(block.with_page_break().page_break_before);
    }

    #[test]
    fn test_implied_styles() {
        let image = Block::new(BlockContent::Image {
            data: SharedData::new(vec![1, 2, 3]),
            width_px: 600,
            height_px: 400,
        });
        assert_eq!(image.style(), StyleId::Center);

        let code = Block::new(BlockContent::CodeLine {
            text: "  indented".to_string(),
        });
        assert_eq!(code.style(), StyleId::Code);
    }

    #[test]
    fn test_numbering_accessor() {
        let item = Block::new(BlockContent::ListItem {
            text: "first".to_string(),
            numbering: NumberingReference::BulletPoints,
            instance: ListInstanceId(4),
        });
        assert_eq!(
            item.numbering(),
            Some((NumberingReference::BulletPoints, ListInstanceId(4)))
        );

        let heading = Block::new(BlockContent::Heading {
            style: StyleId::Chapter,
            text: "1. Intro".to_string(),
        });
        assert_eq!(heading.numbering(), None);
    }
}
