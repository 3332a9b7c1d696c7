//! The synchronous half of the conversion engine.
//!
//! Everything here is pure and runs inside the single forward pass: mapping
//! one source line to a token kind, advancing the chapter/section/picture
//! counters, accumulating list groups, rewriting inline links to citation
//! markers, and formatting reference strings. Anything that suspends (image
//! loading, title fetches) lives in the pipeline crate on top of this one.

pub mod cite;
pub mod classify;
pub mod list;
pub mod numbering;
pub mod picture;

pub use cite::{FALLBACK_TITLE, LinkRewrite, extract_title, format_reference, rewrite_first_link};
pub use classify::LineKind;
pub use list::{ListGroup, ListKind};
pub use numbering::NumberingState;
