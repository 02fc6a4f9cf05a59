//! Linear interpolation.

use super::{check_bounding, check_query, clamped_lerp, lerp, Interpolation};
use crate::error::MathResult;
use crate::space::Point;

/// Linear interpolation between the two bracket samples.
///
/// Inside the domain the value saturates at the bracket ends; a zero-width
/// bracket returns the lower sample. Extrapolation continues the edge slope.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::{Interpolation, LinearInterpolation};
/// use knot_math::space::Point;
///
/// let (a, b) = (Point::one(1.0, 1.0), Point::one(2.0, 4.0));
///
/// let y = LinearInterpolation.value(&[1.5], &[&a, &b]).unwrap();
/// assert_eq!(y, 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    fn bracket_ends<'a>(bounding: &[&'a Point]) -> (&'a Point, &'a Point) {
        let lower = bounding[0];
        (lower, bounding.get(1).copied().unwrap_or(lower))
    }
}

impl Interpolation for LinearInterpolation {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        check_bounding(bounding)?;
        let (p0, p1) = Self::bracket_ends(bounding);
        Ok(clamped_lerp(
            query[0],
            p0.coord(0),
            p1.coord(0),
            p0.value(),
            p1.value(),
        ))
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        check_bounding(bounding)?;
        let (p0, p1) = Self::bracket_ends(bounding);
        Ok(lerp(query[0], p0.coord(0), p1.coord(0), p0.value(), p1.value()))
    }
}
