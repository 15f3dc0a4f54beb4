//! Zero-level contour extraction using the marching squares algorithm.
//!
//! Every 2x2 cell of the grid is classified by which corners lie strictly
//! above zero. The resulting 4-bit case selects zero, one or two segments
//! joining edge midpoints, which are then shifted to the cell's position.
//! Segments are emitted cell by cell in row-major order and never joined.

use crate::config::ExtractorConfig;
use crate::grid::Grid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The iso-level every cell is classified against.
pub const THRESHOLD: f64 = 0.0;

/// A point in grid-index space: `x` is the (fractional) column, `y` the
/// (fractional) row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Midpoint of one side of the unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeMidpoint {
    Left,
    Top,
    Right,
    Bottom,
}

impl EdgeMidpoint {
    /// Position inside the unit cell as `(column offset, row offset)`.
    pub const fn local(self) -> (f64, f64) {
        match self {
            EdgeMidpoint::Left => (0.0, 0.5),
            EdgeMidpoint::Top => (0.5, 0.0),
            EdgeMidpoint::Right => (1.0, 0.5),
            EdgeMidpoint::Bottom => (0.5, 1.0),
        }
    }

    /// Position in grid-index space for the cell whose top-left corner is
    /// at `(row, col)`.
    pub fn at(self, row: usize, col: usize) -> Point {
        let (dx, dy) = self.local();
        Point::new(col as f64 + dx, row as f64 + dy)
    }
}

/// A cell's local segment, as a pair of edge midpoints.
pub type LocalSegment = (EdgeMidpoint, EdgeMidpoint);

use self::EdgeMidpoint::{Bottom as B, Left as L, Right as R, Top as T};

/// Marching squares lookup table, indexed by [`CaseIndex`].
///
/// Cases 5 and 10 are saddles. Both emit the same two segments whatever the
/// cell centre value is.
const CASE_TABLE: [&[LocalSegment]; 16] = [
    &[],               // 0
    &[(L, T)],         // 1
    &[(T, R)],         // 2
    &[(L, R)],         // 3
    &[(B, R)],         // 4
    &[(L, T), (B, R)], // 5 (saddle)
    &[(T, B)],         // 6
    &[(L, B)],         // 7
    &[(B, L)],         // 8
    &[(T, B)],         // 9
    &[(L, T), (B, R)], // 10 (saddle)
    &[(B, R)],         // 11
    &[(L, R)],         // 12
    &[(T, R)],         // 13
    &[(L, T)],         // 14
    &[],               // 15
];

/// 4-bit classification of a cell's corners.
///
/// bit 0 = top-left, bit 1 = top-right, bit 2 = bottom-right,
/// bit 3 = bottom-left. A bit is set only when the corner is strictly
/// greater than [`THRESHOLD`]; exact zeros and NaN leave it clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseIndex(u8);

impl CaseIndex {
    pub const TOP_LEFT: u8 = 1;
    pub const TOP_RIGHT: u8 = 2;
    pub const BOTTOM_RIGHT: u8 = 4;
    pub const BOTTOM_LEFT: u8 = 8;

    /// Classify four corner values.
    pub fn from_corners(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        let mut index = 0;
        if top_left > THRESHOLD {
            index |= Self::TOP_LEFT;
        }
        if top_right > THRESHOLD {
            index |= Self::TOP_RIGHT;
        }
        if bottom_right > THRESHOLD {
            index |= Self::BOTTOM_RIGHT;
        }
        if bottom_left > THRESHOLD {
            index |= Self::BOTTOM_LEFT;
        }
        Self(index)
    }

    /// Build from a raw mask; only the low 4 bits are kept.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0f)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether this is one of the two ambiguous diagonal configurations.
    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// Local segments for this case.
    pub fn segments(self) -> &'static [LocalSegment] {
        CASE_TABLE[self.0 as usize]
    }
}

/// The four corner samples of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl Cell {
    pub fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The cell whose top-left corner is `(row, col)`, if it fits in the grid.
    pub fn at(grid: &Grid, row: usize, col: usize) -> Option<Self> {
        Some(Self {
            top_left: grid.get(row, col)?,
            top_right: grid.get(row, col + 1)?,
            bottom_right: grid.get(row + 1, col + 1)?,
            bottom_left: grid.get(row + 1, col)?,
        })
    }
}

/// Classify a cell against the zero threshold.
pub fn classify(cell: &Cell) -> CaseIndex {
    CaseIndex::from_corners(
        cell.top_left,
        cell.top_right,
        cell.bottom_right,
        cell.bottom_left,
    )
}

/// Local segments to draw for a cell.
pub fn process_cell(cell: &Cell) -> &'static [LocalSegment] {
    classify(cell).segments()
}

/// Segments for `case` translated to the cell at `(row, col)`.
pub fn cell_segments(case: CaseIndex, row: usize, col: usize) -> impl Iterator<Item = Segment> {
    case.segments()
        .iter()
        .map(move |&(a, b)| Segment::new(a.at(row, col), b.at(row, col)))
}

/// Segments produced by one row of cells (between grid rows `row` and `row + 1`).
fn march_row(top: &[f64], bottom: &[f64], row: usize, out: &mut Vec<Segment>) {
    for col in 0..top.len().saturating_sub(1) {
        let case = CaseIndex::from_corners(top[col], top[col + 1], bottom[col + 1], bottom[col]);
        out.extend(cell_segments(case, row, col));
    }
}

/// Marching squares over the whole grid, single-threaded.
///
/// Returns segments in grid-index space, cell by cell in row-major order.
/// Grids with fewer than two rows or two columns yield no segments.
///
/// ```
/// use isoline::{generate_contours, Grid, Point};
///
/// // Only the top-left corner is above zero (case 1).
/// let grid = Grid::from_values(2, 2, vec![1.0, -1.0, -1.0, -1.0]).unwrap();
/// let segments = generate_contours(&grid);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].start, Point::new(0.0, 0.5));
/// assert_eq!(segments[0].end, Point::new(0.5, 0.0));
/// ```
pub fn generate_contours(grid: &Grid) -> Vec<Segment> {
    let rows = grid.rows();
    if rows < 2 || grid.cols() < 2 {
        return vec![];
    }

    let mut segments = Vec::new();
    for row in 0..rows - 1 {
        if let (Some(top), Some(bottom)) = (grid.row(row), grid.row(row + 1)) {
            march_row(top, bottom, row, &mut segments);
        }
    }
    segments
}

/// Marching squares with cell rows spread over the rayon pool.
///
/// Per-row results are concatenated in row order, so the output is
/// identical to [`generate_contours`].
pub fn generate_contours_parallel(grid: &Grid) -> Vec<Segment> {
    let rows = grid.rows();
    if rows < 2 || grid.cols() < 2 {
        return vec![];
    }

    let per_row: Vec<Vec<Segment>> = (0..rows - 1)
        .into_par_iter()
        .map(|row| {
            let mut out = Vec::new();
            if let (Some(top), Some(bottom)) = (grid.row(row), grid.row(row + 1)) {
                march_row(top, bottom, row, &mut out);
            }
            out
        })
        .collect();

    per_row.into_iter().flatten().collect()
}

/// Contour extractor that picks the serial or parallel path from its config.
#[derive(Debug, Clone, Default)]
pub struct ContourExtractor {
    config: ExtractorConfig,
}

impl ContourExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Whether a grid with `rows` sample rows would take the parallel path.
    pub fn uses_parallel(&self, rows: usize) -> bool {
        self.config.parallel && rows.saturating_sub(1) >= self.config.parallel_min_rows
    }

    pub fn extract(&self, grid: &Grid) -> Vec<Segment> {
        let parallel = self.uses_parallel(grid.rows());
        let segments = if parallel {
            generate_contours_parallel(grid)
        } else {
            generate_contours(grid)
        };

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            cells = grid.rows().saturating_sub(1) * grid.cols().saturating_sub(1),
            num_segments = segments.len(),
            parallel,
            "Extracted contour segments"
        );

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_midpoint_local() {
        assert_eq!(EdgeMidpoint::Left.local(), (0.0, 0.5));
        assert_eq!(EdgeMidpoint::Top.local(), (0.5, 0.0));
        assert_eq!(EdgeMidpoint::Right.local(), (1.0, 0.5));
        assert_eq!(EdgeMidpoint::Bottom.local(), (0.5, 1.0));
    }

    #[test]
    fn test_case_index_bits() {
        assert_eq!(CaseIndex::from_corners(1.0, -1.0, -1.0, -1.0).bits(), 1);
        assert_eq!(CaseIndex::from_corners(-1.0, 1.0, -1.0, -1.0).bits(), 2);
        assert_eq!(CaseIndex::from_corners(-1.0, -1.0, 1.0, -1.0).bits(), 4);
        assert_eq!(CaseIndex::from_corners(-1.0, -1.0, -1.0, 1.0).bits(), 8);
        assert_eq!(CaseIndex::from_corners(1.0, 1.0, 1.0, 1.0).bits(), 15);
    }

    #[test]
    fn test_nan_corner_is_below() {
        assert_eq!(CaseIndex::from_corners(f64::NAN, 1.0, 1.0, 1.0).bits(), 14);
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        assert_eq!(CaseIndex::from_bits(0xf5).bits(), 5);
    }

    #[test]
    fn test_march_flat() {
        let grid = Grid::from_values(3, 3, vec![5.0; 9]).unwrap();
        assert!(generate_contours(&grid).is_empty());
    }

    #[test]
    fn test_march_simple_peak() {
        // 3x3 grid with a peak in the centre: each of the four cells has
        // exactly one corner above zero.
        let grid = Grid::from_values(
            3,
            3,
            vec![
                -1.0, -1.0, -1.0, //
                -1.0, 1.0, -1.0, //
                -1.0, -1.0, -1.0,
            ],
        )
        .unwrap();
        let segments = generate_contours(&grid);
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_uses_parallel_threshold() {
        let extractor = ContourExtractor::new(ExtractorConfig {
            parallel: true,
            parallel_min_rows: 4,
        });
        assert!(!extractor.uses_parallel(4));
        assert!(extractor.uses_parallel(5));
        assert!(!ContourExtractor::default().uses_parallel(10_000));
    }
}
