//! Zero-level isolines of sampled scalar fields.
//!
//! The pipeline has two stages:
//!
//! ```text
//! ScalarField ──► GridSampler::sample ──► Grid ──► ContourExtractor::extract ──► Vec<Segment>
//! ```
//!
//! - The **grid sampler** evaluates a field over a regular mesh covering
//!   `[x_min, x_max) x [y_min, y_max)` at a fixed resolution.
//! - The **contour extractor** runs marching squares against a threshold of
//!   zero and returns independent line segments in grid-index space
//!   (`x` = column, `y` = row).
//!
//! # Example
//!
//! ```
//! use isoline::{generate_contours, generate_grid};
//!
//! let grid = generate_grid(&|x: f64, y: f64| x.sin() * y.cos(), (-5.0, 5.0), (-5.0, 5.0), 0.5)?;
//! assert_eq!(grid.shape(), (20, 20));
//!
//! let segments = generate_contours(&grid);
//! assert!(!segments.is_empty());
//! # Ok::<(), isoline::IsolineError>(())
//! ```

pub mod config;
pub mod contour;
pub mod error;
pub mod field;
pub mod grid;

// Re-export commonly used types at crate root
pub use config::{ExtractorConfig, IsolineConfig, SamplerConfig};
pub use contour::{
    cell_segments, classify, generate_contours, generate_contours_parallel, process_cell,
    CaseIndex, Cell, ContourExtractor, EdgeMidpoint, LocalSegment, Point, Segment, THRESHOLD,
};
pub use error::{IsolineError, Result};
pub use field::{MeshField, ScalarField};
pub use grid::{generate_grid, Grid, GridSampler, GridSpec};
