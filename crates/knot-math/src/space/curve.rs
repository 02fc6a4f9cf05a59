//! One-dimensional sample space.

use super::{check_dimensions, validate_axis, Bracket, Location, Point};
use crate::error::{MathError, MathResult};

/// Samples `(x, value)` sorted by strictly increasing `x`.
///
/// # Example
///
/// ```rust
/// use knot_math::space::{Bracket, CurveSpace};
///
/// let space = CurveSpace::from_arrays(vec![0.5, 1.0, 2.0], vec![0.99, 0.98, 0.95]).unwrap();
///
/// assert_eq!(space.bracket(0.75), Bracket::new(0, 1));
/// assert_eq!(space.bracket(1.0), Bracket::new(1, 1));
/// assert_eq!(space.bracket(5.0), Bracket::new(2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSpace {
    xs: Vec<f64>,
    values: Vec<f64>,
    points: Vec<Point>,
}

impl CurveSpace {
    /// Builds a space from coordinates that are already strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` on a length mismatch,
    /// `MathError::InsufficientData` when empty and `MathError::NonMonotonic`
    /// when `xs` is not strictly increasing.
    pub fn from_arrays(xs: Vec<f64>, values: Vec<f64>) -> MathResult<Self> {
        if xs.len() != values.len() {
            return Err(MathError::invalid_input(format!(
                "xs and values must have same length: {} vs {}",
                xs.len(),
                values.len()
            )));
        }
        validate_axis(&xs)?;

        let points = xs
            .iter()
            .zip(&values)
            .map(|(&x, &v)| Point::one(x, v))
            .collect();

        Ok(Self { xs, values, points })
    }

    /// Builds a space from 1D points in any order.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` for a point that is not 1D,
    /// `MathError::DuplicateCoordinate` when two points share `x` and
    /// `MathError::InsufficientData` when empty.
    pub fn from_points(mut points: Vec<Point>) -> MathResult<Self> {
        check_dimensions(&points, 1)?;
        points.sort_by(|a, b| a.coord(0).total_cmp(&b.coord(0)));

        if let Some(pair) = points.windows(2).find(|p| p[0].coord(0) == p[1].coord(0)) {
            return Err(MathError::DuplicateCoordinate {
                coordinate: pair[1].coords().to_vec(),
            });
        }

        let xs = points.iter().map(|p| p.coord(0)).collect();
        let values = points.iter().map(Point::value).collect();
        Self::from_arrays(xs, values)
    }

    /// Sample coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Samples as points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed space.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Locates `x` on the axis.
    pub fn locate(&self, x: f64) -> Location {
        Location::find(&self.xs, x)
    }

    /// Bracket of the samples around `x`.
    pub fn bracket(&self, x: f64) -> Bracket {
        self.locate(x).bracket(self.len())
    }

    /// The raw samples bracketing `x`; both are the same sample on a knot or
    /// outside the domain.
    pub fn closest_values(&self, x: f64) -> [&Point; 2] {
        let b = self.bracket(x);
        [&self.points[b.lower], &self.points[b.upper]]
    }

    /// First coordinate.
    pub fn min_x(&self) -> f64 {
        self.xs[0]
    }

    /// Last coordinate.
    pub fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// True if `x` lies within `[min_x, max_x]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
