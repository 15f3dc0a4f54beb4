//! Common test fixtures: reference fields, ranges and the expected case table.

use std::io::Write;

/// Reference scalar fields.
pub mod fields {
    /// `sin(x) * cos(y)`, the classic demo field.
    pub fn sin_cos(x: f64, y: f64) -> f64 {
        x.sin() * y.cos()
    }

    /// `x + y - 1`, a plane crossing zero along a diagonal.
    pub fn diagonal_plane(x: f64, y: f64) -> f64 {
        x + y - 1.0
    }

    /// `x^2 + y^2 - 1`, negative inside the unit circle.
    pub fn unit_circle(x: f64, y: f64) -> f64 {
        x * x + y * y - 1.0
    }
}

/// Common sampling ranges as `(min, max)`.
pub mod ranges {
    /// Domain used by the demo plot on both axes.
    pub const DEMO: (f64, f64) = (-5.0, 5.0);

    /// Resolution used by the demo plot.
    pub const DEMO_RESOLUTION: f64 = 0.5;

    /// Two unit samples per axis.
    pub const UNIT_PAIR: (f64, f64) = (0.0, 2.0);

    /// Inverted range (min > max).
    pub const INVERTED: (f64, f64) = (2.0, 0.0);

    /// Zero-width range.
    pub const EMPTY: (f64, f64) = (1.0, 1.0);
}

/// An endpoint in local cell coordinates, `(column offset, row offset)`.
pub type LocalPoint = (f64, f64);

pub const LEFT: LocalPoint = (0.0, 0.5);
pub const TOP: LocalPoint = (0.5, 0.0);
pub const RIGHT: LocalPoint = (1.0, 0.5);
pub const BOTTOM: LocalPoint = (0.5, 1.0);

/// Expected segments for every case, written out independently of the
/// extractor's own table.
pub const EXPECTED_CASES: [&[(LocalPoint, LocalPoint)]; 16] = [
    &[],
    &[(LEFT, TOP)],
    &[(TOP, RIGHT)],
    &[(LEFT, RIGHT)],
    &[(BOTTOM, RIGHT)],
    &[(LEFT, TOP), (BOTTOM, RIGHT)],
    &[(TOP, BOTTOM)],
    &[(LEFT, BOTTOM)],
    &[(BOTTOM, LEFT)],
    &[(TOP, BOTTOM)],
    &[(LEFT, TOP), (BOTTOM, RIGHT)],
    &[(BOTTOM, RIGHT)],
    &[(LEFT, RIGHT)],
    &[(TOP, RIGHT)],
    &[(LEFT, TOP)],
    &[],
];

/// Write `contents` to a fresh temporary file with the given extension.
///
/// The file is removed when the returned handle is dropped.
pub fn write_temp_file(contents: &str, extension: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_cases_empty_ends() {
        assert!(EXPECTED_CASES[0].is_empty());
        assert!(EXPECTED_CASES[15].is_empty());
        assert_eq!(EXPECTED_CASES[5].len(), 2);
        assert_eq!(EXPECTED_CASES[10].len(), 2);
    }

    #[test]
    fn test_diagonal_plane_corners() {
        assert_eq!(fields::diagonal_plane(0.0, 0.0), -1.0);
        assert_eq!(fields::diagonal_plane(1.0, 0.0), 0.0);
        assert_eq!(fields::diagonal_plane(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_write_temp_file() {
        let file = write_temp_file("field: linear\n", "yaml");
        let read = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(read, "field: linear\n");
        assert!(file.path().to_string_lossy().ends_with(".yaml"));
    }
}
