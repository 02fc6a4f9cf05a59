//! Log-linear interpolation.
//!
//! Interpolates the logarithm of the samples, which keeps discount factors
//! positive and gives piecewise constant forward rates.

use super::{check_bounding, check_query, clamped_lerp, lerp, Interpolation};
use crate::error::{MathError, MathResult};
use crate::space::Point;

/// Linear interpolation of `ln(y)` between the two bracket samples.
///
/// ```text
/// y(x) = exp(linear_interpolate(x, ln(y)))
/// ```
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::{Interpolation, LogLinearInterpolation};
/// use knot_math::space::Point;
///
/// let (a, b) = (Point::one(1.0, 0.97), Point::one(2.0, 0.94));
///
/// let df = LogLinearInterpolation.value(&[1.5], &[&a, &b]).unwrap();
/// assert!((df - (0.97f64 * 0.94).sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLinearInterpolation;

impl LogLinearInterpolation {
    fn log_bracket(bounding: &[&Point]) -> MathResult<[(f64, f64); 2]> {
        check_bounding(bounding)?;
        let lower = bounding[0];
        let upper = bounding.get(1).copied().unwrap_or(lower);
        Ok([log_sample(lower)?, log_sample(upper)?])
    }
}

fn log_sample(p: &Point) -> MathResult<(f64, f64)> {
    let y = p.value();
    if y <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "sample {y} at x = {} is not positive; log-linear requires positive values",
            p.coord(0)
        )));
    }
    Ok((p.coord(0), y.ln()))
}

impl Interpolation for LogLinearInterpolation {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        let [(x0, l0), (x1, l1)] = Self::log_bracket(bounding)?;
        Ok(clamped_lerp(query[0], x0, x1, l0, l1).exp())
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        let [(x0, l0), (x1, l1)] = Self::log_bracket(bounding)?;
        Ok(lerp(query[0], x0, x1, l0, l1).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_forward_rate() {
        // df = exp(-0.04 t) is reproduced exactly by log-linear.
        let df = |t: f64| (-0.04 * t).exp();
        let (a, b) = (Point::one(1.0, df(1.0)), Point::one(3.0, df(3.0)));

        for t in [1.0, 1.25, 2.0, 2.9, 3.0] {
            assert_relative_eq!(
                LogLinearInterpolation.value(&[t], &[&a, &b]).unwrap(),
                df(t),
                epsilon = 1e-14
            );
        }
        assert_relative_eq!(
            LogLinearInterpolation.extrapolate(&[5.0], &[&a, &b]).unwrap(),
            df(5.0),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_value_clamps_to_bracket() {
        let (a, b) = (Point::one(1.0, 0.97), Point::one(2.0, 0.94));
        assert_relative_eq!(
            LogLinearInterpolation.value(&[0.0], &[&a, &b]).unwrap(),
            0.97,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            LogLinearInterpolation.value(&[9.0], &[&a, &b]).unwrap(),
            0.94,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_non_positive_sample_rejected() {
        let (a, b) = (Point::one(1.0, 0.97), Point::one(2.0, 0.0));
        assert!(matches!(
            LogLinearInterpolation.value(&[1.5], &[&a, &b]),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_query_dimension() {
        let (a, b) = (Point::one(1.0, 0.97), Point::one(2.0, 0.94));
        assert_eq!(
            LogLinearInterpolation.value(&[1.5, 0.0], &[&a, &b]).unwrap_err(),
            MathError::dimension_mismatch(1, 2)
        );
    }
}
