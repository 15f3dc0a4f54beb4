//! Rasterizing segments onto an RGBA canvas with tiny-skia.

use crate::config::{RenderConfig, MAX_CANVAS_DIMENSION};
use crate::error::{RenderError, Result};
use isoline::{Point, Segment};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Maps grid-index coordinates to pixel coordinates.
///
/// Column `x` maps to `margin + x * scale`. Row `y` maps to
/// `margin + y * scale`, or with `flip_y` to `margin + (rows - 1 - y) * scale`
/// so that row 0 ends up at the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale: f32,
    pub margin: f32,
    pub flip_y: bool,
    /// Index of the last grid row (`rows - 1`), used when flipping
    pub last_row: f32,
    pub width: u32,
    pub height: u32,
}

impl CanvasTransform {
    /// Transform for a `rows x cols` grid.
    pub fn for_grid(rows: usize, cols: usize, config: &RenderConfig) -> Result<Self> {
        config.validate()?;

        let span = |n: usize| n.saturating_sub(1) as f32 * config.pixels_per_cell;
        let to_px = |len: f32| (len + 2.0 * config.margin).ceil().max(1.0);

        let width = to_px(span(cols));
        let height = to_px(span(rows));
        let max = MAX_CANVAS_DIMENSION as f32;
        if width > max || height > max {
            return Err(RenderError::CanvasTooLarge {
                width: width.min(u32::MAX as f32) as u32,
                height: height.min(u32::MAX as f32) as u32,
                max: MAX_CANVAS_DIMENSION,
            });
        }

        Ok(Self {
            scale: config.pixels_per_cell,
            margin: config.margin,
            flip_y: config.flip_y,
            last_row: rows.saturating_sub(1) as f32,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Pixel position of a grid-index point.
    pub fn apply(&self, p: Point) -> (f32, f32) {
        let x = self.margin + p.x as f32 * self.scale;
        let row = if self.flip_y {
            self.last_row - p.y as f32
        } else {
            p.y as f32
        };
        (x, self.margin + row * self.scale)
    }
}

/// Straight (non-premultiplied) RGBA pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Canvas {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Draw every segment of a `rows x cols` grid's contour onto a new canvas.
pub fn render_segments_to_canvas(
    segments: &[Segment],
    rows: usize,
    cols: usize,
    config: &RenderConfig,
) -> Result<Canvas> {
    let transform = CanvasTransform::for_grid(rows, cols, config)?;
    let [lr, lg, lb, la] = config.line_rgba()?;
    let [br, bg, bb, ba] = config.background_rgba()?;

    let mut pixmap = Pixmap::new(transform.width, transform.height).ok_or(
        RenderError::CanvasAllocation {
            width: transform.width,
            height: transform.height,
        },
    )?;
    pixmap.fill(Color::from_rgba8(br, bg, bb, ba));

    let mut paint = Paint::default();
    paint.set_color_rgba8(lr, lg, lb, la);
    paint.anti_alias = true;

    let mut stroke = Stroke::default();
    stroke.width = config.line_width;
    stroke.line_cap = LineCap::Round;
    stroke.line_join = LineJoin::Round;

    let mut pb = PathBuilder::new();
    for segment in segments {
        let (x1, y1) = transform.apply(segment.start);
        let (x2, y2) = transform.apply(segment.end);
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }

    // An empty builder yields no path; the canvas is just background.
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    let mut pixels = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    tracing::debug!(
        width = transform.width,
        height = transform.height,
        num_segments = segments.len(),
        "Rendered segments to canvas"
    );

    Ok(Canvas {
        width: transform.width,
        height: transform.height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(flip_y: bool) -> RenderConfig {
        RenderConfig {
            pixels_per_cell: 10.0,
            margin: 5.0,
            flip_y,
            ..Default::default()
        }
    }

    #[test]
    fn test_canvas_size() {
        let t = CanvasTransform::for_grid(3, 5, &config(true)).unwrap();
        assert_eq!((t.width, t.height), (50, 30));
    }

    #[test]
    fn test_degenerate_grid_still_has_a_pixel() {
        let cfg = RenderConfig {
            margin: 0.0,
            ..config(true)
        };
        let t = CanvasTransform::for_grid(1, 1, &cfg).unwrap();
        assert_eq!((t.width, t.height), (1, 1));
    }

    #[test]
    fn test_apply_without_flip() {
        let t = CanvasTransform::for_grid(3, 3, &config(false)).unwrap();
        assert_eq!(t.apply(Point::new(0.0, 0.0)), (5.0, 5.0));
        assert_eq!(t.apply(Point::new(1.5, 2.0)), (20.0, 25.0));
    }

    #[test]
    fn test_apply_with_flip() {
        let t = CanvasTransform::for_grid(3, 3, &config(true)).unwrap();
        // Row 0 goes to the bottom, row 2 to the top.
        assert_eq!(t.apply(Point::new(0.0, 0.0)), (5.0, 25.0));
        assert_eq!(t.apply(Point::new(0.0, 2.0)), (5.0, 5.0));
    }

    #[test]
    fn test_too_large() {
        let cfg = RenderConfig {
            pixels_per_cell: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            CanvasTransform::for_grid(1000, 2, &cfg),
            Err(RenderError::CanvasTooLarge { .. })
        ));
    }
}
