//! The single forward pass over the source lines.
//!
//! The scan is strictly sequential: classification and every counter update
//! happen in line order, before any asynchronous work for that line is
//! dispatched. Each emitted position becomes a [`Slot`]; suspending work
//! (image loading) leaves a pending slot that the caller awaits in place, so
//! the final sequence reflects the original line order no matter which task
//! settles first.

use crate::pipeline::citations::CitationRegistry;
use crate::pipeline::images;
use galley_core::classify::{self, LineKind};
use galley_core::list::{ListGroup, ListKind};
use galley_core::numbering::NumberingState;
use galley_core::picture;
use galley_model::{Block, BlockContent, ListInstanceId};
use galley_style::StyleId;
use galley_traits::ResourceProvider;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One position in the final block order.
pub(crate) enum Slot {
    Ready(Block),
    Pending {
        handle: JoinHandle<Block>,
        page_break: bool,
    },
}

/// Scan mode: default body handling, verbatim mode between fence toggles,
/// or an open run of list lines of one kind.
enum ScanState {
    Body,
    CodeFence,
    ListRun(ListGroup),
}

pub(crate) struct ScanOutcome {
    pub slots: Vec<Slot>,
    /// Fresh numbering instance for the bibliography, distinct from every
    /// body list.
    pub bibliography_instance: ListInstanceId,
}

pub(crate) struct Assembler {
    resources: Arc<dyn ResourceProvider>,
    picture_width: u32,
    state: ScanState,
    numbering: NumberingState,
    next_instance: u32,
    pending_break: bool,
    after_image: bool,
    slots: Vec<Slot>,
}

impl Assembler {
    pub fn new(resources: Arc<dyn ResourceProvider>, picture_width: u32) -> Self {
        Self {
            resources,
            picture_width,
            state: ScanState::Body,
            numbering: NumberingState::new(),
            next_instance: 0,
            pending_break: false,
            after_image: false,
            slots: Vec::new(),
        }
    }

    /// Drives the pass over all lines. Citation rewriting goes through the
    /// registry, which schedules its own resolution tasks.
    pub fn scan(mut self, source: &str, citations: &mut CitationRegistry) -> ScanOutcome {
        for line in source.lines() {
            let in_fence = matches!(self.state, ScanState::CodeFence);
            match classify::classify(line, in_fence) {
                LineKind::FenceToggle => {
                    if in_fence {
                        self.state = ScanState::Body;
                    } else {
                        self.close_list();
                        self.state = ScanState::CodeFence;
                    }
                    self.after_image = false;
                }
                LineKind::Code(text) => {
                    self.emit(Block::new(BlockContent::CodeLine {
                        text: text.to_string(),
                    }));
                }
                LineKind::Blank => {
                    self.close_list();
                    self.after_image = false;
                }
                LineKind::PageBreak => {
                    self.close_list();
                    self.pending_break = true;
                    self.after_image = false;
                }
                LineKind::ChapterHeading(text) => {
                    self.close_list();
                    let number = self.numbering.next_chapter();
                    let text = citations.rewrite_or_keep(text);
                    self.emit(
                        Block::new(BlockContent::Heading {
                            style: StyleId::Chapter,
                            text: format!("{}. {}", number, text),
                        })
                        .with_page_break(),
                    );
                    self.after_image = false;
                }
                LineKind::SectionHeading(text) => {
                    self.close_list();
                    let label = self.numbering.next_section();
                    let text = citations.rewrite_or_keep(text);
                    self.emit(Block::new(BlockContent::Heading {
                        style: StyleId::Paragraph,
                        text: format!("{}. {}", label, text),
                    }));
                    self.after_image = false;
                }
                LineKind::ExcludedHeading(text) => {
                    self.close_list();
                    let text = citations.rewrite_or_keep(text);
                    self.emit(
                        Block::new(BlockContent::Heading {
                            style: StyleId::Chapter,
                            text,
                        })
                        .with_page_break(),
                    );
                    self.after_image = false;
                }
                LineKind::OrderedItem(text) => {
                    self.push_list_item(ListKind::Ordered, text, citations);
                }
                LineKind::BulletItem(text) => {
                    self.push_list_item(ListKind::Bulleted, text, citations);
                }
                LineKind::ImageEmbed(target) => {
                    self.close_list();
                    let handle = images::spawn_resolve(
                        Arc::clone(&self.resources),
                        target.to_string(),
                        self.picture_width,
                    );
                    let page_break = std::mem::take(&mut self.pending_break);
                    self.slots.push(Slot::Pending { handle, page_break });
                    self.after_image = true;
                }
                LineKind::Text(text) => {
                    self.close_list();
                    let mut text = citations.rewrite_or_keep(text);
                    let block = if self.after_image && picture::contains_token(&text) {
                        // Caption template under the image it describes.
                        let number = self.numbering.next_picture();
                        Block::new(BlockContent::Paragraph {
                            style: StyleId::Center,
                            text: picture::rewrite_caption(&text, number),
                        })
                    } else {
                        if picture::contains_token(&text) {
                            let number = self.numbering.next_picture();
                            text = picture::substitute_number(&text, number);
                        }
                        Block::new(BlockContent::Paragraph {
                            style: StyleId::Standard,
                            text,
                        })
                    };
                    self.emit(block);
                    self.after_image = false;
                }
            }
        }

        // End of input: flush any open list. An unterminated fence needs no
        // action beyond dropping the flag.
        self.close_list();
        let bibliography_instance = self.alloc_instance();

        ScanOutcome {
            slots: self.slots,
            bibliography_instance,
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str, citations: &mut CitationRegistry) {
        let rewritten = citations.rewrite_or_keep(text);
        match &mut self.state {
            ScanState::ListRun(group) if group.kind() == kind => group.push(rewritten),
            _ => {
                self.close_list();
                let mut group = ListGroup::open(kind, self.alloc_instance());
                group.push(rewritten);
                self.state = ScanState::ListRun(group);
            }
        }
        self.after_image = false;
    }

    /// Flushes the open list group, if any, as finalized `ListItem` blocks.
    fn close_list(&mut self) {
        if !matches!(self.state, ScanState::ListRun(_)) {
            return;
        }
        if let ScanState::ListRun(group) = std::mem::replace(&mut self.state, ScanState::Body) {
            log::debug!("closing list run of {} items", group.len());
            for block in group.into_blocks() {
                self.emit(block);
            }
        }
    }

    /// Pushes a finished block, applying a pending page break if one is owed.
    fn emit(&mut self, mut block: Block) {
        if std::mem::take(&mut self.pending_break) {
            block.page_break_before = true;
        }
        self.slots.push(Slot::Ready(block));
    }

    fn alloc_instance(&mut self) -> ListInstanceId {
        self.next_instance += 1;
        ListInstanceId(self.next_instance)
    }
}
