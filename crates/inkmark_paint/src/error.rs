//! Paint error types

use thiserror::Error;

/// Paint-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// A raster surface cannot be allocated with these dimensions
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },

    /// Color value could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
