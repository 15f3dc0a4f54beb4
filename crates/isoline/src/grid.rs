//! Regular sampling grids and the sampler that fills them.

use crate::config::SamplerConfig;
use crate::error::{IsolineError, Result};
use crate::field::ScalarField;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Specification of a regular, axis-aligned sampling grid.
///
/// Coordinates follow half-open range semantics: the x axis holds
/// `x_min + k * resolution` for `k in 0..cols`, where
/// `cols = ceil((x_max - x_min) / resolution)`, so `x_max` itself is never
/// sampled. The y axis works the same way with `rows`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// First sample along x (column 0)
    pub x_min: f64,
    /// First sample along y (row 0)
    pub y_min: f64,
    /// Spacing between adjacent samples on both axes
    pub resolution: f64,
    /// Number of samples along y
    pub rows: usize,
    /// Number of samples along x
    pub cols: usize,
}

impl GridSpec {
    /// Build a grid specification from coordinate ranges.
    ///
    /// Fails with [`IsolineError::InvalidRange`] if either range is empty or
    /// inverted, the resolution is not positive, or any input is not finite.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), resolution: f64) -> Result<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(IsolineError::invalid_range(format!(
                "resolution must be positive and finite, got {resolution}"
            )));
        }

        let cols = axis_len("x", x_range, resolution)?;
        let rows = axis_len("y", y_range, resolution)?;

        Ok(Self {
            x_min: x_range.0,
            y_min: y_range.0,
            resolution,
            rows,
            cols,
        })
    }

    /// Re-check a spec that was built by hand or deserialized rather than
    /// produced by [`GridSpec::new`].
    pub fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(IsolineError::invalid_range(format!(
                "resolution must be positive and finite, got {}",
                self.resolution
            )));
        }
        if !self.x_min.is_finite() || !self.y_min.is_finite() {
            return Err(IsolineError::invalid_range(format!(
                "grid origin ({}, {}) must be finite",
                self.x_min, self.y_min
            )));
        }
        Ok(())
    }

    /// Total number of sample points.
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check if the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// X coordinate of each column.
    pub fn x_coords(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|j| self.x_min + j as f64 * self.resolution)
            .collect()
    }

    /// Y coordinate of each row.
    pub fn y_coords(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.y_min + i as f64 * self.resolution)
            .collect()
    }

    /// Build the outer-product coordinate mesh in row-major order.
    ///
    /// Entry `i * cols + j` of the returned pair is `(x[j], y[i])`.
    pub fn mesh(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.x_coords();
        let ys = self.y_coords();
        let n = self.len();

        let mut xx = Vec::with_capacity(n);
        let mut yy = Vec::with_capacity(n);
        for &y in &ys {
            xx.extend_from_slice(&xs);
            yy.extend(std::iter::repeat(y).take(xs.len()));
        }
        (xx, yy)
    }
}

/// Number of arange samples over `[min, max)` at the given step.
fn axis_len(axis: &str, (min, max): (f64, f64), step: f64) -> Result<usize> {
    if !min.is_finite() || !max.is_finite() {
        return Err(IsolineError::invalid_range(format!(
            "{axis} range ({min}, {max}) must be finite"
        )));
    }
    if max <= min {
        return Err(IsolineError::invalid_range(format!(
            "{axis} range ({min}, {max}) must have max > min"
        )));
    }

    let count = ((max - min) / step).ceil();
    if count > usize::MAX as f64 {
        return Err(IsolineError::invalid_range(format!(
            "{axis} range ({min}, {max}) at step {step} has too many samples"
        )));
    }
    Ok(count as usize)
}

/// An immutable, row-major grid of scalar samples.
///
/// Row index grows with y and column index grows with x. The value at
/// `(row, col)` is the field evaluated at
/// `(x_min + col * resolution, y_min + row * resolution)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    spec: GridSpec,
    values: Vec<f64>,
}

impl Grid {
    /// Wrap raw row-major values as a unit-resolution grid at the origin.
    ///
    /// Useful for hand-built grids in tests and for data that did not come
    /// from a [`ScalarField`]. Any `rows` or `cols` is accepted, including
    /// zero; `values.len()` must equal `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let spec = GridSpec {
            x_min: 0.0,
            y_min: 0.0,
            resolution: 1.0,
            rows,
            cols,
        };
        Self::with_spec(spec, values)
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(IsolineError::shape_mismatch(cols, row.len()));
            }
            values.extend_from_slice(row);
        }
        Self::from_values(rows.len(), cols, values)
    }

    fn with_spec(spec: GridSpec, values: Vec<f64>) -> Result<Self> {
        if values.len() != spec.len() {
            return Err(IsolineError::shape_mismatch(spec.len(), values.len()));
        }
        Ok(Self { spec, values })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn rows(&self) -> usize {
        self.spec.rows
    }

    pub fn cols(&self) -> usize {
        self.spec.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.spec.rows, self.spec.cols)
    }

    /// Sample at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.spec.rows || col >= self.spec.cols {
            return None;
        }
        self.values.get(row * self.spec.cols + col).copied()
    }

    /// One row of samples.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.spec.rows {
            return None;
        }
        let start = row * self.spec.cols;
        self.values.get(start..start + self.spec.cols)
    }

    /// All samples in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Samples a [`ScalarField`] onto a [`Grid`].
#[derive(Debug, Clone, Default)]
pub struct GridSampler {
    config: SamplerConfig,
}

impl GridSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Evaluate `field` over the mesh described by the ranges and resolution.
    pub fn sample<F>(
        &self,
        field: &F,
        x_range: (f64, f64),
        y_range: (f64, f64),
        resolution: f64,
    ) -> Result<Grid>
    where
        F: ScalarField + ?Sized,
    {
        let spec = GridSpec::new(x_range, y_range, resolution)?;
        self.sample_spec(field, spec)
    }

    /// Evaluate `field` over a grid specification.
    ///
    /// The spec is re-validated, so hand-built or deserialized specs are
    /// held to the same rules as [`GridSpec::new`].
    pub fn sample_spec<F>(&self, field: &F, spec: GridSpec) -> Result<Grid>
    where
        F: ScalarField + ?Sized,
    {
        spec.validate()?;

        let points = spec.rows.checked_mul(spec.cols).ok_or_else(|| {
            IsolineError::invalid_range(format!(
                "{} x {} grid overflows the point count",
                spec.rows, spec.cols
            ))
        })?;
        if points > self.config.max_points {
            return Err(IsolineError::GridTooLarge {
                points,
                max: self.config.max_points,
            });
        }

        let (xx, yy) = spec.mesh();
        let values = field.evaluate(&xx, &yy);

        let non_finite = values.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            warn!(
                non_finite,
                total = values.len(),
                "Scalar field returned non-finite samples"
            );
        }

        let grid = Grid::with_spec(spec, values)?;

        debug!(
            rows = spec.rows,
            cols = spec.cols,
            resolution = spec.resolution,
            "Sampled grid"
        );

        Ok(grid)
    }
}

/// Sample `field` over `x_range` x `y_range` at `resolution`, using the
/// default sampler limits.
///
/// ```
/// use isoline::generate_grid;
///
/// let grid = generate_grid(&|x: f64, y: f64| x + 10.0 * y, (0.0, 2.0), (0.0, 2.0), 1.0).unwrap();
/// assert_eq!(grid.shape(), (2, 2));
/// assert_eq!(grid.values(), &[0.0, 1.0, 10.0, 11.0]);
/// ```
pub fn generate_grid<F>(
    field: &F,
    x_range: (f64, f64),
    y_range: (f64, f64),
    resolution: f64,
) -> Result<Grid>
where
    F: ScalarField + ?Sized,
{
    GridSampler::default().sample(field, x_range, y_range, resolution)
}
