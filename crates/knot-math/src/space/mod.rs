//! Discrete spaces of sampled points.
//!
//! A space stores sample coordinates and values, read-only after
//! construction, and answers bracket searches along each axis:
//!
//! - [`CurveSpace`]: 1D samples sorted by `x`
//! - [`SurfaceSpace`]: 2D grid over an `x` and a `y` axis
//! - [`VolumeSpace`]: 3D grid over `x`, `y` and `z` axes
//!
//! # Bracket rules
//!
//! | Query | [`Location`] | [`Bracket`] |
//! |-------|--------------|-------------|
//! | equal to `x[i]` | `Exact(i)` | `(i, i)` |
//! | below `x[0]` | `Below` | `(0, 0)` |
//! | above `x[n-1]` | `Above` | `(n-1, n-1)` |
//! | strictly inside `(x[i], x[i+1])` | `Between(i)` | `(i, i+1)` |
//!
//! A query exactly on a domain boundary is an exact match, never
//! out-of-domain.

mod curve;
mod point;
mod surface;
mod volume;

pub use curve::CurveSpace;
pub use point::Point;
pub use surface::SurfaceSpace;
pub use volume::VolumeSpace;

use crate::error::{MathError, MathResult};

/// Where a query falls along one sorted axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly below the first sample.
    Below,
    /// Equal to the sample at this index.
    Exact(usize),
    /// Strictly between the sample at this index and the next.
    Between(usize),
    /// Strictly above the last sample.
    Above,
}

impl Location {
    /// Locates `x` on a strictly increasing axis in `O(log n)`.
    ///
    /// NaN is treated as below the axis.
    #[must_use]
    pub fn find(axis: &[f64], x: f64) -> Self {
        let idx = axis.partition_point(|&v| v < x);
        if idx < axis.len() && axis[idx] == x {
            Location::Exact(idx)
        } else if idx == 0 {
            Location::Below
        } else if idx == axis.len() {
            Location::Above
        } else {
            Location::Between(idx - 1)
        }
    }

    /// True if the query lies outside the sampled range.
    #[must_use]
    pub fn is_outside(&self) -> bool {
        matches!(self, Location::Below | Location::Above)
    }

    /// Returns the bracket on an axis of `len` samples.
    #[must_use]
    pub fn bracket(&self, len: usize) -> Bracket {
        let last = len.saturating_sub(1);
        match *self {
            Location::Below => Bracket::degenerate(0),
            Location::Exact(i) => Bracket::degenerate(i),
            Location::Between(i) => Bracket::new(i, i + 1),
            Location::Above => Bracket::degenerate(last),
        }
    }

    /// Returns the containing interval, or the nearest edge interval for
    /// queries outside the axis.
    ///
    /// Degenerate on axes with fewer than two samples.
    #[must_use]
    pub fn segment(&self, len: usize) -> Bracket {
        if len < 2 {
            return Bracket::degenerate(0);
        }
        let last_segment = len - 2;
        let lower = match *self {
            Location::Below => 0,
            Location::Exact(i) => i.min(last_segment),
            Location::Between(i) => i,
            Location::Above => last_segment,
        };
        Bracket::new(lower, lower + 1)
    }
}

/// Indices of the samples bracketing a query along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket {
    /// Lower sample index.
    pub lower: usize,
    /// Upper sample index.
    pub upper: usize,
}

impl Bracket {
    /// Creates a bracket from two indices.
    #[must_use]
    pub const fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// Creates a degenerate bracket on a single index.
    #[must_use]
    pub const fn degenerate(index: usize) -> Self {
        Self {
            lower: index,
            upper: index,
        }
    }

    /// True if both indices are the same sample.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

/// Checks that an axis is non-empty, finite and strictly increasing.
pub(crate) fn validate_axis(axis: &[f64]) -> MathResult<()> {
    if axis.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if let Some(bad) = axis.iter().find(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "coordinates must be finite, got {bad}"
        )));
    }
    for (index, pair) in axis.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(MathError::NonMonotonic {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

/// Collects the sorted, distinct values of one coordinate of a point set.
pub(crate) fn distinct_axis(points: &[Point], dim: usize) -> Vec<f64> {
    let mut axis: Vec<f64> = points.iter().map(|p| p.coord(dim)).collect();
    axis.sort_by(f64::total_cmp);
    axis.dedup();
    axis
}

/// Checks that every point has the expected dimension.
pub(crate) fn check_dimensions(points: &[Point], expected: usize) -> MathResult<()> {
    match points.iter().find(|p| p.dimension() != expected) {
        Some(p) => Err(MathError::dimension_mismatch(expected, p.dimension())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIS: [f64; 4] = [0.0, 1.0, 2.0, 4.0];

    #[test]
    fn test_locate_exact() {
        assert_eq!(Location::find(&AXIS, 0.0), Location::Exact(0));
        assert_eq!(Location::find(&AXIS, 2.0), Location::Exact(2));
        assert_eq!(Location::find(&AXIS, 4.0), Location::Exact(3));
    }

    #[test]
    fn test_locate_between_and_outside() {
        assert_eq!(Location::find(&AXIS, 0.5), Location::Between(0));
        assert_eq!(Location::find(&AXIS, 3.0), Location::Between(2));
        assert_eq!(Location::find(&AXIS, -1.0), Location::Below);
        assert_eq!(Location::find(&AXIS, 4.5), Location::Above);
        assert_eq!(Location::find(&AXIS, f64::INFINITY), Location::Above);
        assert_eq!(Location::find(&AXIS, f64::NAN), Location::Below);
    }

    #[test]
    fn test_bracket_rules() {
        let n = AXIS.len();
        assert_eq!(Location::find(&AXIS, 2.0).bracket(n), Bracket::new(2, 2));
        assert_eq!(Location::find(&AXIS, -5.0).bracket(n), Bracket::new(0, 0));
        assert_eq!(Location::find(&AXIS, 9.0).bracket(n), Bracket::new(3, 3));
        assert_eq!(Location::find(&AXIS, 1.5).bracket(n), Bracket::new(1, 2));
    }

    #[test]
    fn test_segment_uses_edge_intervals() {
        let n = AXIS.len();
        assert_eq!(Location::Below.segment(n), Bracket::new(0, 1));
        assert_eq!(Location::Above.segment(n), Bracket::new(2, 3));
        assert_eq!(Location::Exact(3).segment(n), Bracket::new(2, 3));
        assert_eq!(Location::Between(1).segment(n), Bracket::new(1, 2));
        assert!(Location::Above.segment(1).is_exact());
    }

    #[test]
    fn test_single_sample_axis() {
        let axis = [5.0];
        assert_eq!(Location::find(&axis, 1.0).bracket(1), Bracket::degenerate(0));
        assert_eq!(Location::find(&axis, 9.0).bracket(1), Bracket::degenerate(0));
    }

    #[test]
    fn test_validate_axis() {
        assert!(validate_axis(&AXIS).is_ok());
        assert_eq!(validate_axis(&[]), Err(MathError::insufficient_data(1, 0)));
        assert!(matches!(
            validate_axis(&[0.0, 1.0, 1.0]),
            Err(MathError::NonMonotonic { index: 2, .. })
        ));
        assert!(matches!(
            validate_axis(&[0.0, f64::NAN]),
            Err(MathError::InvalidInput { .. })
        ));
    }
}
