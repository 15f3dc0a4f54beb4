//! SVG output: one `<line>` element per segment.

use crate::canvas::CanvasTransform;
use crate::config::RenderConfig;
use crate::error::Result;
use isoline::Segment;

struct SvgBuilder {
    content: String,
}

impl SvgBuilder {
    fn new(width: u32, height: u32) -> Self {
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
"#
        );
        Self { content }
    }

    fn background(&mut self, width: u32, height: u32, rgba: [u8; 4]) {
        self.content.push_str(&format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}" fill-opacity="{}" />
"#,
            width,
            height,
            rgb_hex(rgba),
            opacity(rgba)
        ));
    }

    fn open_group(&mut self, rgba: [u8; 4], line_width: f32) {
        self.content.push_str(&format!(
            r#"  <g stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="round" fill="none">
"#,
            rgb_hex(rgba),
            opacity(rgba),
            line_width
        ));
    }

    fn line(&mut self, (x1, y1): (f32, f32), (x2, y2): (f32, f32)) {
        self.content.push_str(&format!(
            r#"    <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" />
"#,
            x1, y1, x2, y2
        ));
    }

    fn finish(mut self) -> String {
        self.content.push_str("  </g>\n</svg>\n");
        self.content
    }
}

fn rgb_hex([r, g, b, _]: [u8; 4]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn opacity(rgba: [u8; 4]) -> String {
    format!("{:.3}", rgba[3] as f32 / 255.0)
}

/// Render the segments of a `rows x cols` grid as an SVG document.
///
/// Uses the same pixel mapping as the raster path, so the SVG and PNG
/// outputs line up.
pub fn render_svg(
    segments: &[Segment],
    rows: usize,
    cols: usize,
    config: &RenderConfig,
) -> Result<String> {
    let transform = CanvasTransform::for_grid(rows, cols, config)?;
    let line = config.line_rgba()?;
    let background = config.background_rgba()?;

    let mut svg = SvgBuilder::new(transform.width, transform.height);
    svg.background(transform.width, transform.height, background);
    svg.open_group(line, config.line_width);
    for segment in segments {
        svg.line(transform.apply(segment.start), transform.apply(segment.end));
    }

    tracing::debug!(
        width = transform.width,
        height = transform.height,
        num_segments = segments.len(),
        "Rendered segments to SVG"
    );

    Ok(svg.finish())
}
