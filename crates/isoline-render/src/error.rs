//! Error types for segment rendering and export.

use thiserror::Error;

/// Errors that can occur while rendering or exporting segments.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Configuration error.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    /// The canvas for this grid would exceed the configured size limit.
    #[error("canvas {width}x{height} exceeds the {max}px limit")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },

    /// The raster backend could not allocate a canvas.
    #[error("failed to allocate {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    /// Image encoding failed.
    #[error("encoding failed: {0}")]
    Encode(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an Encode error.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
