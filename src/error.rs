//! Error types for image generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or saving an image
#[derive(Error, Debug)]
pub enum Error {
    /// The embedded font could not be parsed
    #[error("Failed to load font: {0}")]
    Font(String),

    /// The output file could not be created or written
    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pixel buffer could not be encoded
    #[error("Failed to encode image")]
    Encode(#[from] image::ImageError),

    /// The timestamp label could not be formatted
    #[error("Failed to format timestamp")]
    Timestamp(#[from] time::error::Format),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
