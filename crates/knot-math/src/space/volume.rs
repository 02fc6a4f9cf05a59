//! Three-dimensional grid space.

use super::surface::index_of;
use super::{check_dimensions, distinct_axis, validate_axis, Bracket, Location, Point};
use crate::error::{MathError, MathResult};

/// A complete grid of values over `x`, `y` and `z` axes.
///
/// Values are stored flat with `x` varying fastest, then `y`, then `z`.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSpace {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    values: Vec<f64>,
}

impl VolumeSpace {
    /// Builds a volume from three strictly increasing axes and flat values.
    ///
    /// # Errors
    ///
    /// Returns an axis validation error or `MathError::InvalidInput` when the
    /// number of values is not `nx * ny * nz`.
    pub fn from_grid(xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>, values: Vec<f64>) -> MathResult<Self> {
        validate_axis(&xs)?;
        validate_axis(&ys)?;
        validate_axis(&zs)?;
        let expected = xs.len() * ys.len() * zs.len();
        if values.len() != expected {
            return Err(MathError::invalid_input(format!(
                "volume grid needs {expected} values, got {}",
                values.len()
            )));
        }
        Ok(Self { xs, ys, zs, values })
    }

    /// Builds a volume from 3D points covering every node of a grid.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` for a point that is not 3D,
    /// `MathError::DuplicateCoordinate` for a repeated node and
    /// `MathError::InvalidInput` when a grid node is missing.
    pub fn from_points(points: &[Point]) -> MathResult<Self> {
        if points.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        check_dimensions(points, 3)?;

        let xs = distinct_axis(points, 0);
        let ys = distinct_axis(points, 1);
        let zs = distinct_axis(points, 2);
        let len = xs.len() * ys.len() * zs.len();
        let mut values = vec![f64::NAN; len];
        let mut seen = vec![false; len];

        for p in points {
            let idx = flat_index(
                xs.len(),
                ys.len(),
                index_of(&xs, p.coord(0))?,
                index_of(&ys, p.coord(1))?,
                index_of(&zs, p.coord(2))?,
            );
            if std::mem::replace(&mut seen[idx], true) {
                return Err(MathError::DuplicateCoordinate {
                    coordinate: p.coords().to_vec(),
                });
            }
            values[idx] = p.value();
        }

        if seen.iter().any(|s| !s) {
            return Err(MathError::invalid_input(format!(
                "points do not form a complete {}x{}x{} grid",
                xs.len(),
                ys.len(),
                zs.len()
            )));
        }

        Self::from_grid(xs, ys, zs, values)
    }

    /// The `x` axis.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The `y` axis.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The `z` axis.
    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    /// Value at grid node `(i, j, k)`.
    pub fn value(&self, i: usize, j: usize, k: usize) -> f64 {
        self.values[flat_index(self.xs.len(), self.ys.len(), i, j, k)]
    }

    /// Number of grid nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed space.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Locates a query on all three axes.
    pub fn locate(&self, x: f64, y: f64, z: f64) -> [Location; 3] {
        [
            Location::find(&self.xs, x),
            Location::find(&self.ys, y),
            Location::find(&self.zs, z),
        ]
    }

    /// Per-axis brackets of a query.
    pub fn bracket(&self, x: f64, y: f64, z: f64) -> [Bracket; 3] {
        let [lx, ly, lz] = self.locate(x, y, z);
        [
            lx.bracket(self.xs.len()),
            ly.bracket(self.ys.len()),
            lz.bracket(self.zs.len()),
        ]
    }

    /// The eight grid nodes around the given brackets, `x` fastest, then
    /// `y`, then `z`.
    pub fn corners(&self, [bx, by, bz]: [Bracket; 3]) -> [Point; 8] {
        let node = |i: usize, j: usize, k: usize| {
            Point::three(self.xs[i], self.ys[j], self.zs[k], self.value(i, j, k))
        };
        [
            node(bx.lower, by.lower, bz.lower),
            node(bx.upper, by.lower, bz.lower),
            node(bx.lower, by.upper, bz.lower),
            node(bx.upper, by.upper, bz.lower),
            node(bx.lower, by.lower, bz.upper),
            node(bx.upper, by.lower, bz.upper),
            node(bx.lower, by.upper, bz.upper),
            node(bx.upper, by.upper, bz.upper),
        ]
    }
}

fn flat_index(nx: usize, ny: usize, i: usize, j: usize, k: usize) -> usize {
    (k * ny + j) * nx + i
}
