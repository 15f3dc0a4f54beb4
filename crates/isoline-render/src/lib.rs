//! Rendering and export for isoline segments.
//!
//! Segments come out of the extractor in grid-index space. This crate maps
//! them onto a pixel canvas through [`CanvasTransform`] and writes them as:
//!
//! - **PNG**: stroked with tiny-skia, encoded by [`png::encode_rgba`]
//! - **SVG**: one `<line>` per segment, see [`svg::render_svg`]
//! - **JSON**: see [`export`]

pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod png;
pub mod svg;

pub use canvas::{render_segments_to_canvas, Canvas, CanvasTransform};
pub use config::{hex_to_rgba, RenderConfig, MAX_CANVAS_DIMENSION};
pub use error::{RenderError, Result};
pub use export::{segments_from_json, segments_to_json, ContourExport};
pub use svg::render_svg;

use isoline::Segment;

/// Render segments of a `rows x cols` grid and encode the canvas as PNG.
pub fn render_png(
    segments: &[Segment],
    rows: usize,
    cols: usize,
    config: &RenderConfig,
) -> Result<Vec<u8>> {
    let canvas = render_segments_to_canvas(segments, rows, cols, config)?;
    let png = png::encode_rgba(&canvas.pixels, canvas.width, canvas.height)?;

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        bytes = png.len(),
        "Encoded PNG"
    );

    Ok(png)
}
