//! Builds the terminal reference section from resolved citations.

use crate::pipeline::citations::PendingCitation;
use chrono::NaiveDate;
use galley_core::cite;
use galley_model::{Block, BlockContent, ListInstanceId};
use galley_style::{NumberingReference, StyleId};

pub(crate) const HEADING: &str = "References";

/// Awaits every citation in scheduling order, never completion order, so
/// index stability survives any network interleaving. Emits the heading plus
/// one entry per citation. A task that died still yields the placeholder
/// text for its URL.
pub(crate) async fn build(
    pending: Vec<PendingCitation>,
    instance: ListInstanceId,
    accessed: NaiveDate,
) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(pending.len() + 1);
    blocks.push(
        Block::new(BlockContent::Heading {
            style: StyleId::Chapter,
            text: HEADING.to_string(),
        })
        .with_page_break(),
    );

    for citation in pending {
        let text = match citation.handle.await {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "citation task for '{}' did not complete: {}",
                    citation.url,
                    e
                );
                cite::format_reference(cite::FALLBACK_TITLE, &citation.url, accessed)
            }
        };
        blocks.push(Block::new(BlockContent::BibliographyEntry {
            text,
            numbering: NumberingReference::BaseNumbering,
            instance,
        }));
    }

    blocks
}
