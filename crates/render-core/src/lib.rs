//! Renderer abstractions.
//!
//! The conversion engine stops at the ordered [`galley_model::Document`];
//! serializing it into an actual word-processing file is the job of a
//! backend implementing [`DocumentRenderer`]. A conforming backend must
//! honor the named paragraph styles and both numbering schemes (with
//! per-instance restarts), apply the section page properties, and embed
//! image payloads at their stated pixel dimensions.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
