use crate::error::RenderError;
use galley_model::Document;
use std::io::Write;

/// A trait for document renderers, abstracting the file-format primitives.
///
/// The writer is handed back on success so streaming backends can keep
/// appending to it.
pub trait DocumentRenderer<W: Write> {
    fn render(&mut self, document: &Document, writer: W) -> Result<W, RenderError>;
}
