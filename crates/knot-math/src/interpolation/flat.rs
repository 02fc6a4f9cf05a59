//! Piecewise constant interpolation.

use super::{check_bounding, check_query, Interpolation};
use crate::error::MathResult;
use crate::space::Point;

/// Piecewise constant interpolation.
///
/// Returns the lower sample at or below it and the upper sample strictly
/// inside the interval, so each step holds until the next knot. Outside the
/// domain it returns the boundary sample under either extrapolation policy.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::{FlatInterpolation, Interpolation};
/// use knot_math::space::Point;
///
/// let (a, b) = (Point::one(1.0, 0.02), Point::one(2.0, 0.03));
///
/// assert_eq!(FlatInterpolation.value(&[1.0], &[&a, &b]).unwrap(), 0.02);
/// assert_eq!(FlatInterpolation.value(&[1.4], &[&a, &b]).unwrap(), 0.03);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatInterpolation;

impl Interpolation for FlatInterpolation {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        check_bounding(bounding)?;

        let lower = bounding[0];
        let upper = bounding.get(1).copied().unwrap_or(lower);
        if query[0] <= lower.coord(0) {
            Ok(lower.value())
        } else {
            Ok(upper.value())
        }
    }
}
