//! Scalar fields that can be sampled over a coordinate mesh.

/// A pure function of two real variables.
///
/// The sampler hands over the whole outer-product mesh at once: `xx[k]` and
/// `yy[k]` are the coordinates of the k-th sample, and the returned vector
/// must hold exactly one value per sample. Implementations must be
/// deterministic; the extractor's output is only reproducible if the field is.
pub trait ScalarField {
    fn evaluate(&self, xx: &[f64], yy: &[f64]) -> Vec<f64>;
}

/// Any point-wise closure is a field, evaluated element by element.
impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, xx: &[f64], yy: &[f64]) -> Vec<f64> {
        xx.iter().zip(yy).map(|(&x, &y)| self(x, y)).collect()
    }
}

/// Adapter for evaluators that work on whole coordinate arrays.
///
/// The wrapped function is trusted to return one value per input point; the
/// sampler checks the length and reports a shape mismatch otherwise.
///
/// ```
/// use isoline::{generate_grid, MeshField};
///
/// let field = MeshField::new(|xx: &[f64], yy: &[f64]| {
///     xx.iter().zip(yy).map(|(x, y)| x * y).collect()
/// });
/// let grid = generate_grid(&field, (0.0, 2.0), (0.0, 2.0), 1.0).unwrap();
/// assert_eq!(grid.get(1, 1), Some(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MeshField<F> {
    func: F,
}

impl<F> MeshField<F>
where
    F: Fn(&[f64], &[f64]) -> Vec<f64>,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> ScalarField for MeshField<F>
where
    F: Fn(&[f64], &[f64]) -> Vec<f64>,
{
    fn evaluate(&self, xx: &[f64], yy: &[f64]) -> Vec<f64> {
        (self.func)(xx, yy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_field_is_elementwise() {
        let field = |x: f64, y: f64| x - y;
        let values = field.evaluate(&[1.0, 2.0, 3.0], &[0.5, 0.5, 4.0]);
        assert_eq!(values, vec![0.5, 1.5, -1.0]);
    }

    #[test]
    fn test_mesh_field_passes_arrays_through() {
        let field = MeshField::new(|xx: &[f64], _yy: &[f64]| vec![0.0; xx.len() + 1]);
        assert_eq!(field.evaluate(&[1.0, 2.0], &[1.0, 2.0]).len(), 3);
    }
}
