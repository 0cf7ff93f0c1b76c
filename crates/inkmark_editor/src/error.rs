//! Editor error types

use inkmark_paint::PaintError;
use thiserror::Error;

/// Errors raised at the editor's boundary operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// Raster surface creation or resize failed
    #[error(transparent)]
    Paint(#[from] PaintError),

    /// Emoji code is not of the `U+1F600` form
    #[error("Invalid emoji code: {0}")]
    InvalidEmojiCode(String),

    /// Configuration could not be read, parsed or validated
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No element matches the requested handle or index
    #[error("Unknown element")]
    UnknownElement,
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
