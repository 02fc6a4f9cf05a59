//! Two-dimensional grid space.

use super::{check_dimensions, distinct_axis, validate_axis, Bracket, Location, Point};
use crate::error::{MathError, MathResult};
use crate::linear_algebra::Matrix;

/// A complete grid of values over an `x` axis and a `y` axis.
///
/// `values[(i, j)]` is the sample at `(xs[i], ys[j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSpace {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Matrix,
}

impl SurfaceSpace {
    /// Builds a surface from two strictly increasing axes and an
    /// `xs.len() x ys.len()` value matrix.
    ///
    /// # Errors
    ///
    /// Returns an axis validation error or `MathError::IncompatibleDimensions`
    /// when the matrix shape does not match the axes.
    pub fn from_grid(xs: Vec<f64>, ys: Vec<f64>, values: Matrix) -> MathResult<Self> {
        validate_axis(&xs)?;
        validate_axis(&ys)?;
        if values.shape() != (xs.len(), ys.len()) {
            return Err(MathError::incompatible((xs.len(), ys.len()), values.shape()));
        }
        Ok(Self { xs, ys, values })
    }

    /// Builds a surface from 2D points covering every node of a grid.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` for a point that is not 2D,
    /// `MathError::DuplicateCoordinate` for a repeated node and
    /// `MathError::InvalidInput` when a grid node is missing.
    pub fn from_points(points: &[Point]) -> MathResult<Self> {
        if points.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        check_dimensions(points, 2)?;

        let xs = distinct_axis(points, 0);
        let ys = distinct_axis(points, 1);
        let mut values = Matrix::from_element(xs.len(), ys.len(), f64::NAN);
        let mut seen = vec![false; xs.len() * ys.len()];

        for p in points {
            let i = index_of(&xs, p.coord(0))?;
            let j = index_of(&ys, p.coord(1))?;
            if std::mem::replace(&mut seen[i * ys.len() + j], true) {
                return Err(MathError::DuplicateCoordinate {
                    coordinate: p.coords().to_vec(),
                });
            }
            values[(i, j)] = p.value();
        }

        if seen.iter().any(|s| !s) {
            return Err(MathError::invalid_input(format!(
                "points do not form a complete {}x{} grid",
                xs.len(),
                ys.len()
            )));
        }

        Self::from_grid(xs, ys, values)
    }

    /// The `x` axis.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The `y` axis.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The value grid.
    pub fn values(&self) -> &Matrix {
        &self.values
    }

    /// Value at grid node `(i, j)`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Number of grid nodes.
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// Always false for a constructed space.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locates a query on both axes.
    pub fn locate(&self, x: f64, y: f64) -> (Location, Location) {
        (Location::find(&self.xs, x), Location::find(&self.ys, y))
    }

    /// Per-axis brackets of a query.
    pub fn bracket(&self, x: f64, y: f64) -> (Bracket, Bracket) {
        let (lx, ly) = self.locate(x, y);
        (lx.bracket(self.xs.len()), ly.bracket(self.ys.len()))
    }

    /// The four grid nodes around the given brackets, ordered
    /// `(x0,y0), (x1,y0), (x0,y1), (x1,y1)`.
    pub fn corners(&self, bx: Bracket, by: Bracket) -> [Point; 4] {
        let node = |i: usize, j: usize| Point::two(self.xs[i], self.ys[j], self.values[(i, j)]);
        [
            node(bx.lower, by.lower),
            node(bx.upper, by.lower),
            node(bx.lower, by.upper),
            node(bx.upper, by.upper),
        ]
    }
}

pub(super) fn index_of(axis: &[f64], v: f64) -> MathResult<usize> {
    match Location::find(axis, v) {
        Location::Exact(i) => Ok(i),
        _ => Err(MathError::invalid_input(format!("{v} is not on the grid axis"))),
    }
}
