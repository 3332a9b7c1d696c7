use crate::block::Block;
use galley_style::Stylesheet;

/// The ordered result of one conversion pass, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
    /// Style palette, page setup and numbering schemes for the renderer.
    pub stylesheet: Stylesheet,
}

impl Document {
    pub fn new(blocks: Vec<Block>, stylesheet: Stylesheet) -> Self {
        Self { blocks, stylesheet }
    }

    /// Checks that every numbering reference used by a block is defined by a
    /// scheme in the stylesheet.
    pub fn numbering_references_defined(&self) -> bool {
        self.blocks
            .iter()
            .filter_map(|b| b.numbering())
            .all(|(reference, _)| self.stylesheet.scheme(reference).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockContent, ListInstanceId};
    use galley_style::NumberingReference;

    #[test]
    fn test_empty_document_is_consistent() {
        let doc = Document::new(Vec::new(), Stylesheet::default());
        assert!(doc.numbering_references_defined());
    }

    #[test]
    fn test_numbering_validation_spots_missing_scheme() {
        let mut stylesheet = Stylesheet::default();
        stylesheet
            .numbering
            .retain(|s| s.reference != NumberingReference::BulletPoints);

        let blocks = vec![Block::new(BlockContent::ListItem {
            text: "dangling".to_string(),
            numbering: NumberingReference::BulletPoints,
            instance: ListInstanceId(1),
        })];
        let doc = Document::new(blocks, stylesheet);
        assert!(!doc.numbering_references_defined());
    }
}
