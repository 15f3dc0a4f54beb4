//! Error types for grid sampling and contour extraction.

use thiserror::Error;

/// Errors that can occur while building or sampling a grid.
///
/// Extraction itself never fails on a well-formed [`Grid`](crate::Grid);
/// a grid with fewer than two rows or columns just yields no segments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsolineError {
    /// A coordinate range or the sampling resolution is unusable.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// The field evaluator (or a caller building a grid by hand) produced
    /// a different number of values than the mesh has points.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The requested grid exceeds the configured sampling cap.
    #[error("grid of {points} points exceeds the limit of {max}")]
    GridTooLarge { points: usize, max: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl IsolineError {
    /// Create an InvalidRange error.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for isoline operations.
pub type Result<T> = std::result::Result<T, IsolineError>;
