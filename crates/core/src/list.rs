//! Accumulates consecutive list lines into numbering-instance groups.

use galley_model::{Block, BlockContent, ListInstanceId};
use galley_style::NumberingReference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Bulleted,
}

impl ListKind {
    /// The numbering scheme a list of this kind renders under.
    pub fn numbering(&self) -> NumberingReference {
        match self {
            ListKind::Ordered => NumberingReference::BaseNumbering,
            ListKind::Bulleted => NumberingReference::BulletPoints,
        }
    }
}

/// One open run of consecutive list lines of a single kind.
///
/// The instance id is fixed when the group opens; closing the group turns
/// the accumulated items into `ListItem` blocks sharing that instance, so
/// two non-adjacent lists restart their visible numbering.
#[derive(Debug)]
pub struct ListGroup {
    kind: ListKind,
    instance: ListInstanceId,
    items: Vec<String>,
}

impl ListGroup {
    pub fn open(kind: ListKind, instance: ListInstanceId) -> Self {
        Self {
            kind,
            instance,
            items: Vec::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn push(&mut self, text: String) {
        self.items.push(text);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finalizes the group into `ListItem` blocks in original order.
    pub fn into_blocks(self) -> Vec<Block> {
        let numbering = self.kind.numbering();
        self.items
            .into_iter()
            .map(|text| {
                Block::new(BlockContent::ListItem {
                    text,
                    numbering,
                    instance: self.instance,
                })
            })
            .collect()
    }
}
