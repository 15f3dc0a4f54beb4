//! JSON export of extracted segments.

use crate::error::Result;
use isoline::{GridSpec, Segment};
use serde::{Deserialize, Serialize};

/// Segments together with the grid they were extracted from.
///
/// `grid` maps segment coordinates back to world space:
/// `x_world = grid.x_min + x * grid.resolution`, likewise for `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourExport {
    pub grid: GridSpec,
    pub segment_count: usize,
    pub segments: Vec<Segment>,
}

impl ContourExport {
    pub fn new(grid: GridSpec, segments: Vec<Segment>) -> Self {
        Self {
            grid,
            segment_count: segments.len(),
            segments,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialize segments as a JSON array of `{"start": {x, y}, "end": {x, y}}`.
pub fn segments_to_json(segments: &[Segment]) -> Result<String> {
    Ok(serde_json::to_string(segments)?)
}

/// Parse segments written by [`segments_to_json`].
pub fn segments_from_json(json: &str) -> Result<Vec<Segment>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use isoline::Point;

    #[test]
    fn test_segment_json_shape() {
        let segments = vec![Segment::new(Point::new(0.5, 1.0), Point::new(1.0, 0.5))];
        let json = segments_to_json(&segments).unwrap();
        assert_eq!(
            json,
            r#"[{"start":{"x":0.5,"y":1.0},"end":{"x":1.0,"y":0.5}}]"#
        );
        assert_eq!(segments_from_json(&json).unwrap(), segments);
    }

    #[test]
    fn test_empty() {
        assert_eq!(segments_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            segments_from_json("{not json"),
            Err(RenderError::Json(_))
        ));
    }

    #[test]
    fn test_export_document() {
        let spec = GridSpec::new((0.0, 2.0), (0.0, 2.0), 1.0).unwrap();
        let export = ContourExport::new(
            spec,
            vec![Segment::new(Point::new(0.5, 1.0), Point::new(1.0, 0.5))],
        );
        assert_eq!(export.segment_count, 1);

        let json = export.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grid"]["rows"], 2);
        assert_eq!(value["segment_count"], 1);

        let back: ContourExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, export);
    }
}
