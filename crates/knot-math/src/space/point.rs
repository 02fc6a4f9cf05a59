//! Coordinate points.

use serde::{Deserialize, Serialize};

/// A sample: `N` real coordinates plus one scalar value.
///
/// Points are immutable once built.
///
/// # Example
///
/// ```rust
/// use knot_math::space::Point;
///
/// let p = Point::two(1.0, 0.25, 0.18);
/// assert_eq!(p.dimension(), 2);
/// assert_eq!(p.coord(1), 0.25);
/// assert_eq!(p.value(), 0.18);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: Vec<f64>,
    value: f64,
}

impl Point {
    /// Creates a point from any number of coordinates.
    #[must_use]
    pub fn new(coords: Vec<f64>, value: f64) -> Self {
        Self { coords, value }
    }

    /// Creates a 1D point.
    #[must_use]
    pub fn one(x: f64, value: f64) -> Self {
        Self::new(vec![x], value)
    }

    /// Creates a 2D point.
    #[must_use]
    pub fn two(x: f64, y: f64, value: f64) -> Self {
        Self::new(vec![x, y], value)
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn three(x: f64, y: f64, z: f64, value: f64) -> Self {
        Self::new(vec![x, y, z], value)
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along axis `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dimension()`.
    pub fn coord(&self, i: usize) -> f64 {
        self.coords[i]
    }

    /// All coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// The sampled value.
    pub fn value(&self) -> f64 {
        self.value
    }
}
