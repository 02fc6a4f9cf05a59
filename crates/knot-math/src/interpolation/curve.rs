//! Interpolated one-dimensional curve.

use super::{CurveInterpolator, Interpolation, InterpolationMethod};
use crate::error::{MathError, MathResult};
use crate::extrapolation::ExtrapolationPolicy;
use crate::space::{CurveSpace, Point};

/// A curve space with a fitted interpolator and an extrapolation policy.
///
/// Queries run a bracket search on the space. A query on a knot, or outside
/// the domain under [`ExtrapolationPolicy::Clamp`], returns the stored
/// sample; anything else is answered by the interpolator.
///
/// # Example
///
/// ```rust
/// use knot_math::extrapolation::ExtrapolationPolicy;
/// use knot_math::interpolation::{InterpolatedCurve, InterpolationMethod};
///
/// let curve = InterpolatedCurve::from_arrays(
///     vec![1.0, 2.0, 3.0],
///     vec![0.98, 0.95, 0.91],
///     InterpolationMethod::Linear,
///     ExtrapolationPolicy::Clamp,
/// )
/// .unwrap();
///
/// assert!((curve.value_at(1.5).unwrap() - 0.965).abs() < 1e-12);
/// assert_eq!(curve.value_at(10.0).unwrap(), 0.91);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve {
    space: CurveSpace,
    method: InterpolationMethod,
    policy: ExtrapolationPolicy,
    interpolator: CurveInterpolator,
}

impl InterpolatedCurve {
    /// Fits `method` over an existing space.
    ///
    /// # Errors
    ///
    /// Returns `MathError::UnsupportedMethod` for surface methods, or a
    /// spline construction error.
    pub fn new(
        space: CurveSpace,
        method: InterpolationMethod,
        policy: ExtrapolationPolicy,
    ) -> MathResult<Self> {
        let interpolator = CurveInterpolator::fit(method, space.xs(), space.values())?;
        Ok(Self {
            space,
            method,
            policy,
            interpolator,
        })
    }

    /// Builds the space from strictly increasing coordinates and fits it.
    pub fn from_arrays(
        xs: Vec<f64>,
        values: Vec<f64>,
        method: InterpolationMethod,
        policy: ExtrapolationPolicy,
    ) -> MathResult<Self> {
        Self::new(CurveSpace::from_arrays(xs, values)?, method, policy)
    }

    /// Builds the space from points in any order and fits it.
    pub fn from_points(
        points: Vec<Point>,
        method: InterpolationMethod,
        policy: ExtrapolationPolicy,
    ) -> MathResult<Self> {
        Self::new(CurveSpace::from_points(points)?, method, policy)
    }

    /// Value at `x`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` if `x` is NaN.
    pub fn value_at(&self, x: f64) -> MathResult<f64> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query coordinate is NaN"));
        }

        let (bracket, extended) = self.policy.resolve(self.space.locate(x), self.space.len());
        if bracket.is_exact() {
            return Ok(self.space.values()[bracket.lower]);
        }

        let points = self.space.points();
        let bounding = [&points[bracket.lower], &points[bracket.upper]];
        if extended {
            self.interpolator.extrapolate(&[x], &bounding)
        } else {
            self.interpolator.value(&[x], &bounding)
        }
    }

    /// Value at a one-coordinate query.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` unless `query` has exactly one
    /// coordinate.
    pub fn value_at_point(&self, query: &[f64]) -> MathResult<f64> {
        match query {
            [x] => self.value_at(*x),
            _ => Err(MathError::dimension_mismatch(1, query.len())),
        }
    }

    /// The raw samples bracketing `x`.
    pub fn closest_values(&self, x: f64) -> [&Point; 2] {
        self.space.closest_values(x)
    }

    /// The underlying space.
    pub fn space(&self) -> &CurveSpace {
        &self.space
    }

    /// The fitted method.
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// The extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.policy
    }

    /// The fitted interpolator.
    pub fn interpolator(&self) -> &CurveInterpolator {
        &self.interpolator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(method: InterpolationMethod, policy: ExtrapolationPolicy) -> InterpolatedCurve {
        InterpolatedCurve::from_arrays(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0.10, 0.20, 0.25, 0.27, 0.28],
            method,
            policy,
        )
        .unwrap()
    }

    #[test]
    fn test_knots_are_exact_for_every_method() {
        for method in [
            InterpolationMethod::Flat,
            InterpolationMethod::Linear,
            InterpolationMethod::NaturalSpline,
            InterpolationMethod::ParabolicSpline,
            InterpolationMethod::Akima,
            InterpolationMethod::LogLinear,
            InterpolationMethod::LinearRate,
            InterpolationMethod::PiecewiseConstantRate,
            InterpolationMethod::LogRateCubicSpline,
        ] {
            let c = curve(method, ExtrapolationPolicy::Continue);
            for (x, v) in c.space().xs().iter().zip(c.space().values()) {
                assert_eq!(c.value_at(*x).unwrap(), *v, "{method} at {x}");
            }
        }
    }

    #[test]
    fn test_discount_curve_rate_methods() {
        let ts = vec![0.0, 0.5, 1.0, 2.0, 5.0];
        let dfs = vec![1.0, 0.99, 0.975, 0.95, 0.87];

        for method in [
            InterpolationMethod::LogLinear,
            InterpolationMethod::LinearRate,
            InterpolationMethod::PiecewiseConstantRate,
            InterpolationMethod::LogRateCubicSpline,
        ] {
            for policy in [ExtrapolationPolicy::Clamp, ExtrapolationPolicy::Continue] {
                let c = InterpolatedCurve::from_arrays(ts.clone(), dfs.clone(), method, policy)
                    .unwrap();
                for (t, df) in ts.iter().zip(&dfs) {
                    assert_eq!(c.value_at(*t).unwrap(), *df, "{method} {policy} at {t}");
                }
                for t in [0.25, 0.75, 1.5, 3.0, 4.9] {
                    let v = c.value_at(t).unwrap();
                    assert!(v > 0.0 && v <= 1.0, "{method} at {t}: {v}");
                }
            }
        }

        let log_linear = InterpolatedCurve::from_arrays(
            ts,
            dfs,
            InterpolationMethod::LogLinear,
            ExtrapolationPolicy::Clamp,
        )
        .unwrap();
        assert_relative_eq!(
            log_linear.value_at(1.5).unwrap(),
            (0.975f64 * 0.95).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_clamp_returns_boundary_samples() {
        for method in [InterpolationMethod::Linear, InterpolationMethod::NaturalSpline] {
            let c = curve(method, ExtrapolationPolicy::Clamp);
            assert_eq!(c.value_at(0.0).unwrap(), 0.10);
            assert_eq!(c.value_at(-1e9).unwrap(), 0.10);
            assert_eq!(c.value_at(9.0).unwrap(), 0.28);
            assert_eq!(c.value_at(f64::INFINITY).unwrap(), 0.28);
        }
    }

    #[test]
    fn test_continue_extends_edge_segment() {
        let c = curve(InterpolationMethod::Linear, ExtrapolationPolicy::Continue);
        assert_relative_eq!(c.value_at(6.0).unwrap(), 0.29, epsilon = 1e-12);
        assert_relative_eq!(c.value_at(0.0).unwrap(), 0.0, epsilon = 1e-12);

        let flat = curve(InterpolationMethod::Flat, ExtrapolationPolicy::Continue);
        assert_eq!(flat.value_at(6.0).unwrap(), 0.28);
        assert_eq!(flat.value_at(0.0).unwrap(), 0.10);
    }

    #[test]
    fn test_continue_spline_uses_edge_cubic() {
        let c = curve(InterpolationMethod::NaturalSpline, ExtrapolationPolicy::Continue);
        let CurveInterpolator::Spline(spline) = c.interpolator() else {
            panic!("expected a spline");
        };
        assert_eq!(c.value_at(5.5).unwrap(), spline.evaluate(5.5));
        assert_ne!(c.value_at(5.5).unwrap(), 0.28);
    }

    #[test]
    fn test_interior_flat_and_linear() {
        let flat = curve(InterpolationMethod::Flat, ExtrapolationPolicy::Clamp);
        assert_eq!(flat.value_at(2.5).unwrap(), 0.25);

        let linear = curve(InterpolationMethod::Linear, ExtrapolationPolicy::Clamp);
        assert_relative_eq!(linear.value_at(2.5).unwrap(), 0.225, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_curve() {
        let c = InterpolatedCurve::from_arrays(
            vec![2.0],
            vec![0.5],
            InterpolationMethod::NaturalSpline,
            ExtrapolationPolicy::Continue,
        )
        .unwrap();
        assert_eq!(c.value_at(-3.0).unwrap(), 0.5);
        assert_eq!(c.value_at(2.0).unwrap(), 0.5);
        assert_eq!(c.value_at(7.0).unwrap(), 0.5);
    }

    #[test]
    fn test_nan_and_dimension_rejected() {
        let c = curve(InterpolationMethod::Linear, ExtrapolationPolicy::Clamp);
        assert!(matches!(c.value_at(f64::NAN), Err(MathError::InvalidInput { .. })));
        assert_eq!(
            c.value_at_point(&[1.0, 2.0]).unwrap_err(),
            MathError::dimension_mismatch(1, 2)
        );
        assert_eq!(c.value_at_point(&[2.0]).unwrap(), 0.20);
    }

    #[test]
    fn test_closest_values() {
        let c = curve(InterpolationMethod::Linear, ExtrapolationPolicy::Clamp);
        let [lo, hi] = c.closest_values(3.5);
        assert_eq!((lo.value(), hi.value()), (0.25, 0.27));
    }

    #[test]
    fn test_surface_method_rejected() {
        let err = InterpolatedCurve::from_arrays(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            InterpolationMethod::Trilinear,
            ExtrapolationPolicy::Clamp,
        )
        .unwrap_err();
        assert!(matches!(err, MathError::UnsupportedMethod { .. }));
    }
}
