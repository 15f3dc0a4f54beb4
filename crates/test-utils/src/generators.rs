//! Synthetic grid generators.
//!
//! All generators return values in row-major order (row 0 first), matching
//! the layout `isoline::Grid::from_values` expects.

/// Corner values `(top_left, top_right, bottom_right, bottom_left)` that
/// classify to the given marching squares case.
///
/// Corners whose bit is set get `1.0`, the others `-1.0`.
///
/// ```
/// use test_utils::corners_for_case;
///
/// assert_eq!(corners_for_case(5), [1.0, -1.0, 1.0, -1.0]);
/// ```
pub fn corners_for_case(case: u8) -> [f64; 4] {
    let sign = |bit: u8| if case & bit != 0 { 1.0 } else { -1.0 };
    [sign(1), sign(2), sign(4), sign(8)]
}

/// Row-major values of a single 2x2 cell.
///
/// Argument order follows the bit order (clockwise from top-left); the
/// output order is the grid's row-major order `[tl, tr, bl, br]`.
pub fn cell_values(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Vec<f64> {
    vec![top_left, top_right, bottom_left, bottom_right]
}

/// Row-major values of a 2x2 grid whose single cell classifies to `case`.
pub fn create_case_grid(case: u8) -> Vec<f64> {
    let [tl, tr, br, bl] = corners_for_case(case);
    cell_values(tl, tr, br, bl)
}

/// Creates a grid filled with a single value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a checkerboard of `+1` / `-1`, so every cell is a saddle.
///
/// Cell `(row, col)` is case 5 when `row + col` is even and case 10 otherwise.
pub fn create_checkerboard_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (row + col) % 2 == 0 { 1.0 } else { -1.0 });
        }
    }
    data
}

/// Creates a smooth field with hills and valleys that crosses zero often.
pub fn create_smooth_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width.max(1) as f64;
            let fy = row as f64 / height.max(1) as f64;

            let v1 = (fx * std::f64::consts::PI * 4.0).sin();
            let v2 = (fy * std::f64::consts::PI * 4.0).cos();
            let v3 = ((fx + fy) * std::f64::consts::PI * 2.0).sin() * 0.5;

            data.push(v1 * v2 + v3);
        }
    }
    data
}

/// Creates a grid with NaN values at the specified positions.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (row, col) positions to set as NaN
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f64> {
    let mut data = create_smooth_grid(width, height);
    for &(row, col) in nan_positions {
        if row < height && col < width {
            data[row * width + col] = f64::NAN;
        }
    }
    data
}
