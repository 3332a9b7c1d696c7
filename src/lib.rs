//! # galley
//!
//! Converts a lightweight markup text (headings, lists, code fences, image
//! embeds, inline links) into an ordered, styled [`Document`] ready for a
//! word-processing renderer.
//!
//! The engine makes a single forward pass over the source. Classification
//! and every counter update happen synchronously in line order; image
//! loading and citation title fetches are fired as the pass encounters them
//! and awaited afterwards, keyed by their position so the final block
//! sequence always reflects the original line order.
//!
//! ```ignore
//! use galley::ConverterBuilder;
//!
//! let converter = ConverterBuilder::new().build();
//! let document = converter.convert_blocking("# Intro\nSome text.")?;
//! for block in &document.blocks {
//!     println!("{}: {:?}", block.kind(), block.text());
//! }
//! ```

// Re-export foundation crates
pub use galley_core as engine;
pub use galley_model as model;
pub use galley_render_core as render;
pub use galley_resource as resource;
pub use galley_style as style;
pub use galley_traits as traits;

pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use error::ConvertError;
pub use model::{Block, BlockContent, Document, ListInstanceId, SharedData};
pub use pipeline::{Converter, ConverterBuilder, DEFAULT_PICTURE_WIDTH};
pub use style::{NumberingReference, StyleId, Stylesheet};
pub use traits::{
    FetchError, FetchResponse, InMemoryFetcher, InMemoryResourceProvider, ResourceError,
    ResourceProvider, UrlFetcher,
};
