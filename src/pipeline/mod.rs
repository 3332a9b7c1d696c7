//! Document conversion pipeline.
//!
//! [`Converter`] drives the synchronous line scan, fans out the blocking
//! image and citation work, and reassembles everything in original line
//! order before handing the finished [`Document`] back.
//!
//! # Example
//!
//! ```ignore
//! use galley::ConverterBuilder;
//!
//! let converter = ConverterBuilder::new().build();
//! let document = converter.convert_blocking(&source)?;
//! ```

mod bibliography;
mod citations;
mod images;
mod scan;

use crate::error::ConvertError;
use chrono::NaiveDate;
use galley_model::{Block, BlockContent, Document};
use galley_resource::{FilesystemResourceProvider, HttpFetcher};
use galley_style::Stylesheet;
use galley_traits::{ResourceProvider, UrlFetcher};
use scan::{Assembler, Slot};
use std::sync::Arc;

/// Display width every embedded picture is scaled to, in pixels.
pub const DEFAULT_PICTURE_WIDTH: u32 = 600;

/// The conversion engine, configured once and reusable across documents.
pub struct Converter {
    resources: Arc<dyn ResourceProvider>,
    fetcher: Arc<dyn UrlFetcher>,
    stylesheet: Stylesheet,
    picture_width: u32,
    accessed_date: Option<NaiveDate>,
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Converts one source text into an ordered document.
    ///
    /// Content-level failures degrade to placeholder blocks; the pass always
    /// produces a document, a minimal one for empty input.
    pub async fn convert(&self, source: &str) -> Result<Document, ConvertError> {
        let accessed = self
            .accessed_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut citations =
            citations::CitationRegistry::new(Arc::clone(&self.fetcher), accessed);
        let assembler = Assembler::new(Arc::clone(&self.resources), self.picture_width);
        let outcome = assembler.scan(source, &mut citations);
        log::info!(
            "scan finished: {} block slots, {} citations",
            outcome.slots.len(),
            citations.len()
        );

        let mut blocks = Vec::with_capacity(outcome.slots.len() + 2);
        blocks.push(Block::new(BlockContent::TocPlaceholder));
        for slot in outcome.slots {
            match slot {
                Slot::Ready(block) => blocks.push(block),
                Slot::Pending { handle, page_break } => {
                    let mut block = match handle.await {
                        Ok(block) => block,
                        Err(e) => {
                            log::warn!("image task did not complete: {}", e);
                            images::unavailable("embedded image")
                        }
                    };
                    if page_break {
                        block.page_break_before = true;
                    }
                    blocks.push(block);
                }
            }
        }

        blocks.extend(
            bibliography::build(
                citations.into_pending(),
                outcome.bibliography_instance,
                accessed,
            )
            .await,
        );

        Ok(Document::new(blocks, self.stylesheet.clone()))
    }

    /// Blocking wrapper around [`Converter::convert`] for synchronous hosts.
    pub fn convert_blocking(&self, source: &str) -> Result<Document, ConvertError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.convert(source))
    }
}

/// A builder for creating a [`Converter`].
pub struct ConverterBuilder {
    resources: Option<Arc<dyn ResourceProvider>>,
    fetcher: Option<Arc<dyn UrlFetcher>>,
    stylesheet: Stylesheet,
    picture_width: u32,
    accessed_date: Option<NaiveDate>,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self {
            resources: None,
            fetcher: None,
            stylesheet: Stylesheet::default(),
            picture_width: DEFAULT_PICTURE_WIDTH,
            accessed_date: None,
        }
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the provider image embeds are loaded through. Defaults to the
    /// filesystem rooted at the current directory.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Sets the fetcher citation pages are retrieved through. Defaults to a
    /// blocking HTTP client.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn UrlFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Sets the display width embedded pictures are scaled to.
    pub fn with_picture_width(mut self, width_px: u32) -> Self {
        self.picture_width = width_px;
        self
    }

    /// Pins the accessed date stamped into bibliography entries. Defaults to
    /// the local date at conversion time.
    pub fn with_accessed_date(mut self, date: NaiveDate) -> Self {
        self.accessed_date = Some(date);
        self
    }

    /// Consumes the builder and creates the [`Converter`].
    pub fn build(self) -> Converter {
        Converter {
            resources: self
                .resources
                .unwrap_or_else(|| Arc::new(FilesystemResourceProvider::new("."))),
            fetcher: self.fetcher.unwrap_or_else(|| Arc::new(HttpFetcher::new())),
            stylesheet: self.stylesheet,
            picture_width: self.picture_width,
            accessed_date: self.accessed_date,
        }
    }
}
