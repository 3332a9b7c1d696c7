use thiserror::Error;

/// The error surface of the conversion pipeline.
///
/// Content-level failures (unreadable images, dead links, malformed lines)
/// degrade to placeholder blocks inside the document and never show up
/// here; only runtime-level problems do.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
