//! The in-memory representation of a converted document: the ordered block
//! sequence plus the style and numbering tables the renderer consumes.

pub mod block;
pub mod document;

pub use block::{Block, BlockContent, ListInstanceId, SharedData};
pub use document::Document;
