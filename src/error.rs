//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and codec errors, and provides semantic variants for
//! batch usage errors and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(image::ImageError),

    #[error("write error: {0}")]
    Write(image::ImageError),

    #[error("resize error: {0}")]
    Resize(String),

    #[error("processing error: {0}")]
    Processing(String),

    #[error("no images selected")]
    EmptySelection,

    #[error("no destination folder set")]
    DestinationNotSet,

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// True for usage errors that abort a batch before any file I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::EmptySelection | Error::DestinationNotSet)
    }
}
