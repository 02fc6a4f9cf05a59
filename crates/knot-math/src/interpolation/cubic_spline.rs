//! Cubic spline interpolation.

use serde::{Deserialize, Serialize};

use super::{check_query, Interpolation};
use crate::error::{MathError, MathResult};
use crate::linear_algebra::{solve_linear_system, solve_tridiagonal, tridiagonal_matrix};
use crate::space::{validate_axis, Location, Point};

use nalgebra::DVector;

/// Condition imposed at one end of a cubic spline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplineBoundary {
    /// Zero second derivative.
    Natural,
    /// Prescribed first derivative.
    FirstDerivative(f64),
    /// Prescribed second derivative.
    SecondDerivative(f64),
    /// End interval is a parabola (zero third derivative).
    Parabolic,
}

/// Piecewise cubic Hermite spline.
///
/// Each interval `[x_i, x_{i+1}]` carries
/// `y(x) = c0 + c1 t + c2 t^2 + c3 t^3` with `t = x - x_i`, built from the
/// knot values and knot first derivatives. The derivatives come from a
/// tridiagonal system (natural, clamped and parabolic splines) or from
/// local weighted secants (Akima). Coefficients are computed once.
///
/// Queries outside the knots evaluate the edge cubic.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::CubicSpline;
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::natural(xs, ys).unwrap();
/// assert_eq!(spline.evaluate(2.0), 4.0);
/// assert!(spline.second_derivative(0.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// `[c0, c1, c2, c3]` per interval
    coefficients: Vec<[f64; 4]>,
    /// Integral from `xs[0]` to each knot
    cumulative: Vec<f64>,
}

impl CubicSpline {
    /// Creates a spline with the given end conditions.
    ///
    /// # Arguments
    ///
    /// * `xs` - Knot coordinates (strictly increasing)
    /// * `ys` - Knot values
    /// * `left` - Condition at the first knot
    /// * `right` - Condition at the last knot
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, `xs` is not strictly
    /// increasing, there are fewer than 2 knots (3 with a parabolic end) or
    /// the derivative system is singular.
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        left: SplineBoundary,
        right: SplineBoundary,
    ) -> MathResult<Self> {
        let parabolic = matches!(left, SplineBoundary::Parabolic)
            || matches!(right, SplineBoundary::Parabolic);
        check_knots(&xs, &ys, if parabolic { 3 } else { 2 })?;

        let derivatives = solve_derivatives(&xs, &ys, left, right)?;
        Ok(Self::from_derivatives(xs, ys, &derivatives))
    }

    /// Natural spline: zero second derivative at both ends.
    pub fn natural(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::new(xs, ys, SplineBoundary::Natural, SplineBoundary::Natural)
    }

    /// Clamped spline with prescribed end slopes.
    pub fn with_end_slopes(
        xs: Vec<f64>,
        ys: Vec<f64>,
        left: f64,
        right: f64,
    ) -> MathResult<Self> {
        Self::new(
            xs,
            ys,
            SplineBoundary::FirstDerivative(left),
            SplineBoundary::FirstDerivative(right),
        )
    }

    /// Spline with prescribed end curvature.
    pub fn with_end_curvature(
        xs: Vec<f64>,
        ys: Vec<f64>,
        left: f64,
        right: f64,
    ) -> MathResult<Self> {
        Self::new(
            xs,
            ys,
            SplineBoundary::SecondDerivative(left),
            SplineBoundary::SecondDerivative(right),
        )
    }

    /// Parabolically terminated spline.
    pub fn parabolic(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::new(xs, ys, SplineBoundary::Parabolic, SplineBoundary::Parabolic)
    }

    /// Akima spline.
    ///
    /// Interior derivatives are weighted averages of the adjacent secants
    /// with weights `|m_{i+1} - m_i|`, which damps oscillation around
    /// outliers. The two end derivatives on each side come from the
    /// parabola through the three outermost knots.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InsufficientData` with fewer than 5 knots.
    pub fn akima(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_knots(&xs, &ys, 5)?;

        let n = xs.len();
        let slopes: Vec<f64> = (0..n - 1)
            .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
            .collect();
        let mut weights = vec![0.0; n - 1];
        for i in 1..n - 1 {
            weights[i] = (slopes[i] - slopes[i - 1]).abs();
        }

        let mut d = vec![0.0; n];
        for i in 2..n - 2 {
            let (wl, wr) = (weights[i - 1], weights[i + 1]);
            d[i] = if wl < ZERO_WEIGHT && wr < ZERO_WEIGHT {
                ((xs[i + 1] - xs[i]) * slopes[i - 1] + (xs[i] - xs[i - 1]) * slopes[i])
                    / (xs[i + 1] - xs[i - 1])
            } else {
                (wr * slopes[i - 1] + wl * slopes[i]) / (wr + wl)
            };
        }
        d[0] = three_point_derivative(&xs, &ys, 0, [0, 1, 2]);
        d[1] = three_point_derivative(&xs, &ys, 1, [0, 1, 2]);
        d[n - 2] = three_point_derivative(&xs, &ys, n - 2, [n - 3, n - 2, n - 1]);
        d[n - 1] = three_point_derivative(&xs, &ys, n - 1, [n - 3, n - 2, n - 1]);

        Ok(Self::from_derivatives(xs, ys, &d))
    }

    fn from_derivatives(xs: Vec<f64>, ys: Vec<f64>, d: &[f64]) -> Self {
        let coefficients: Vec<[f64; 4]> = (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                let s = (ys[i + 1] - ys[i]) / h;
                [
                    ys[i],
                    d[i],
                    (3.0 * s - 2.0 * d[i] - d[i + 1]) / h,
                    (d[i] + d[i + 1] - 2.0 * s) / (h * h),
                ]
            })
            .collect();

        let mut cumulative = Vec::with_capacity(xs.len());
        let mut total = 0.0;
        cumulative.push(total);
        for (c, w) in coefficients.iter().zip(xs.windows(2)) {
            total += segment_integral(c, w[1] - w[0]);
            cumulative.push(total);
        }

        Self {
            xs,
            ys,
            coefficients,
            cumulative,
        }
    }

    /// Knot coordinates.
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }

    /// Knot values.
    pub fn values(&self) -> &[f64] {
        &self.ys
    }

    /// Interval index and offset for `x`.
    fn segment(&self, x: f64) -> (usize, f64) {
        let i = Location::find(&self.xs, x).segment(self.xs.len()).lower;
        (i, x - self.xs[i])
    }

    /// Spline value at `x`; exact at every knot.
    pub fn evaluate(&self, x: f64) -> f64 {
        if let Location::Exact(i) = Location::find(&self.xs, x) {
            return self.ys[i];
        }
        let (i, t) = self.segment(x);
        let [c0, c1, c2, c3] = self.coefficients[i];
        c0 + t * (c1 + t * (c2 + t * c3))
    }

    /// First derivative at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        let (i, t) = self.segment(x);
        let [_, c1, c2, c3] = self.coefficients[i];
        c1 + t * (2.0 * c2 + 3.0 * c3 * t)
    }

    /// Second derivative at `x`.
    pub fn second_derivative(&self, x: f64) -> f64 {
        let (i, t) = self.segment(x);
        let [_, _, c2, c3] = self.coefficients[i];
        2.0 * c2 + 6.0 * c3 * t
    }

    /// Definite integral of the spline from `a` to `b`.
    ///
    /// Bounds outside the knots integrate the edge cubic; `a > b` gives the
    /// negated integral.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }

    fn antiderivative(&self, x: f64) -> f64 {
        let (i, t) = self.segment(x);
        self.cumulative[i] + segment_integral(&self.coefficients[i], t)
    }
}

impl Interpolation for CubicSpline {
    fn value(&self, query: &[f64], _bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        Ok(self.evaluate(query[0]))
    }
}

const ZERO_WEIGHT: f64 = 1e-15;

fn check_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    validate_axis(xs)
}

/// `c0 t + c1 t^2/2 + c2 t^3/3 + c3 t^4/4`
fn segment_integral(c: &[f64; 4], t: f64) -> f64 {
    t * (c[0] + t * (c[1] / 2.0 + t * (c[2] / 3.0 + t * c[3] / 4.0)))
}

/// Derivative at `xs[at]` of the parabola through three knots.
fn three_point_derivative(xs: &[f64], ys: &[f64], at: usize, [i0, i1, i2]: [usize; 3]) -> f64 {
    let x0 = xs[i0];
    let t = xs[at] - x0;
    let t1 = xs[i1] - x0;
    let t2 = xs[i2] - x0;
    let a = (ys[i2] - ys[i0] - t2 / t1 * (ys[i1] - ys[i0])) / (t2 * t2 - t1 * t2);
    let b = (ys[i1] - ys[i0] - a * t1 * t1) / t1;
    2.0 * a * t + b
}

/// Solves for the knot first derivatives.
///
/// Interior rows enforce continuity of the second derivative:
/// `h_i d_{i-1} + 2(h_{i-1} + h_i) d_i + h_{i-1} d_{i+1} = 3(s_{i-1} h_i + s_i h_{i-1})`.
fn solve_derivatives(
    xs: &[f64],
    ys: &[f64],
    left: SplineBoundary,
    right: SplineBoundary,
) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let s: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    let mut sub = vec![0.0; n - 1];
    let mut diag = vec![0.0; n];
    let mut sup = vec![0.0; n - 1];
    let mut rhs = vec![0.0; n];

    match left {
        SplineBoundary::Natural => {
            diag[0] = 2.0;
            sup[0] = 1.0;
            rhs[0] = 3.0 * s[0];
        }
        SplineBoundary::SecondDerivative(m) => {
            diag[0] = 2.0;
            sup[0] = 1.0;
            rhs[0] = 3.0 * s[0] - 0.5 * m * h[0];
        }
        SplineBoundary::FirstDerivative(v) => {
            diag[0] = 1.0;
            rhs[0] = v;
        }
        SplineBoundary::Parabolic => {
            diag[0] = 1.0;
            sup[0] = 1.0;
            rhs[0] = 2.0 * s[0];
        }
    }

    for i in 1..n - 1 {
        sub[i - 1] = h[i];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        sup[i] = h[i - 1];
        rhs[i] = 3.0 * (s[i - 1] * h[i] + s[i] * h[i - 1]);
    }

    let last = n - 1;
    match right {
        SplineBoundary::Natural => {
            sub[last - 1] = 1.0;
            diag[last] = 2.0;
            rhs[last] = 3.0 * s[last - 1];
        }
        SplineBoundary::SecondDerivative(m) => {
            sub[last - 1] = 1.0;
            diag[last] = 2.0;
            rhs[last] = 3.0 * s[last - 1] + 0.5 * m * h[last - 1];
        }
        SplineBoundary::FirstDerivative(v) => {
            diag[last] = 1.0;
            rhs[last] = v;
        }
        SplineBoundary::Parabolic => {
            sub[last - 1] = 1.0;
            diag[last] = 1.0;
            rhs[last] = 2.0 * s[last - 1];
        }
    }

    match solve_tridiagonal(&sub, &diag, &sup, &rhs) {
        Ok(d) => Ok(d),
        Err(MathError::SingularMatrix) => {
            log::debug!("Thomas sweep hit a zero pivot on {n} knots, solving with LU");
            let dense = tridiagonal_matrix(&sub, &diag, &sup);
            let d = solve_linear_system(&dense, &DVector::from_vec(rhs))?;
            Ok(d.iter().copied().collect())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const XS: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 5.0, 7.0];
    const YS: [f64; 6] = [0.020, 0.025, 0.031, 0.029, 0.035, 0.036];

    fn all_splines() -> Vec<(&'static str, CubicSpline)> {
        let (xs, ys) = (XS.to_vec(), YS.to_vec());
        vec![
            ("natural", CubicSpline::natural(xs.clone(), ys.clone()).unwrap()),
            (
                "first",
                CubicSpline::with_end_slopes(xs.clone(), ys.clone(), 0.01, -0.002).unwrap(),
            ),
            (
                "second",
                CubicSpline::with_end_curvature(xs.clone(), ys.clone(), 0.004, 0.001).unwrap(),
            ),
            ("parabolic", CubicSpline::parabolic(xs.clone(), ys.clone()).unwrap()),
            ("akima", CubicSpline::akima(xs, ys).unwrap()),
        ]
    }

    #[test]
    fn test_spline_through_knots() {
        for (name, spline) in all_splines() {
            for (x, y) in XS.iter().zip(YS.iter()) {
                assert_eq!(spline.evaluate(*x), *y, "{name} at {x}");
            }
        }
    }

    #[test]
    fn test_spline_continuity_at_knots() {
        let h = 1e-9;
        for (name, spline) in all_splines() {
            for &x in &XS[1..XS.len() - 1] {
                assert_relative_eq!(
                    spline.evaluate(x - h),
                    spline.evaluate(x + h),
                    epsilon = 1e-9
                );
                assert!(
                    (spline.derivative(x - h) - spline.derivative(x + h)).abs() < 1e-6,
                    "{name} first derivative jumps at {x}"
                );
            }
        }
    }

    #[test]
    fn test_natural_second_derivative_is_zero_at_ends() {
        let spline = CubicSpline::natural(XS.to_vec(), YS.to_vec()).unwrap();
        assert_relative_eq!(spline.second_derivative(XS[0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(spline.second_derivative(XS[5]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_ends() {
        let first = CubicSpline::with_end_slopes(XS.to_vec(), YS.to_vec(), 0.01, -0.002).unwrap();
        assert_relative_eq!(first.derivative(XS[0]), 0.01, epsilon = 1e-12);
        assert_relative_eq!(first.derivative(XS[5]), -0.002, epsilon = 1e-12);

        let second =
            CubicSpline::with_end_curvature(XS.to_vec(), YS.to_vec(), 0.004, 0.001).unwrap();
        assert_relative_eq!(second.second_derivative(XS[0]), 0.004, epsilon = 1e-12);
        assert_relative_eq!(second.second_derivative(XS[5]), 0.001, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_matches_zero_end_curvature() {
        let natural = CubicSpline::natural(XS.to_vec(), YS.to_vec()).unwrap();
        let zero = CubicSpline::with_end_curvature(XS.to_vec(), YS.to_vec(), 0.0, 0.0).unwrap();
        assert_eq!(natural, zero);
    }

    #[test]
    fn test_mixed_boundaries() {
        let spline = CubicSpline::new(
            XS.to_vec(),
            YS.to_vec(),
            SplineBoundary::FirstDerivative(0.0),
            SplineBoundary::Natural,
        )
        .unwrap();
        assert_relative_eq!(spline.derivative(XS[0]), 0.0, epsilon = 1e-12);
        assert_relative_eq!(spline.second_derivative(XS[5]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_spline_reproduces_cubic() {
        let f = |x: f64| 1.0 - 2.0 * x + 0.5 * x * x + 0.25 * x * x * x;
        let df = |x: f64| -2.0 + x + 0.75 * x * x;
        let xs = vec![0.0, 0.7, 1.5, 2.0, 3.2];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        let spline = CubicSpline::with_end_slopes(xs, ys, df(0.0), df(3.2)).unwrap();
        for x in [0.3, 1.1, 1.9, 2.6, 3.0] {
            assert_relative_eq!(spline.evaluate(x), f(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_parabolic_reproduces_quadratic() {
        let f = |x: f64| 2.0 + 0.5 * x - 0.1 * x * x;
        let xs = vec![0.0, 1.0, 2.5, 4.0];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        let spline = CubicSpline::parabolic(xs, ys).unwrap();
        for x in [0.5, 1.7, 3.3] {
            assert_relative_eq!(spline.evaluate(x), f(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_akima_reproduces_quadratic_ends() {
        // Three-point differentiation is exact for parabolas.
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();

        let spline = CubicSpline::akima(xs, ys).unwrap();
        assert_relative_eq!(spline.derivative(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(1.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(4.0), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_akima_flat_region_stays_flat() {
        let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let spline = CubicSpline::akima(xs, ys).unwrap();
        assert_eq!(spline.evaluate(1.5), 0.0);
        assert_eq!(spline.evaluate(2.5), 0.0);
    }

    #[test]
    fn test_akima_constant_samples_stay_constant() {
        let xs = vec![0.0, 0.7, 1.1, 2.5, 4.0, 4.2, 9.0];
        let ys = vec![0.035; 7];

        let spline = CubicSpline::akima(xs, ys).unwrap();
        for x in [-2.0, 0.0, 0.35, 1.0, 3.3, 4.1, 8.99, 9.0, 15.0] {
            assert_eq!(spline.evaluate(x), 0.035, "x = {x}");
            assert_eq!(spline.derivative(x), 0.0, "x = {x}");
        }
        assert_relative_eq!(spline.integral(0.0, 9.0), 0.035 * 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_akima_needs_five_points() {
        assert_eq!(
            CubicSpline::akima(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4]).unwrap_err(),
            MathError::insufficient_data(5, 4)
        );
    }

    #[test]
    fn test_two_knot_natural_is_linear() {
        let spline = CubicSpline::natural(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        assert_relative_eq!(spline.evaluate(2.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(4.0), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parabolic_needs_three_points() {
        assert_eq!(
            CubicSpline::parabolic(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap_err(),
            MathError::insufficient_data(3, 2)
        );
    }

    #[test]
    fn test_invalid_knots() {
        assert!(CubicSpline::natural(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).is_err());
        assert!(matches!(
            CubicSpline::natural(vec![0.0, 2.0, 1.0], vec![0.0, 1.0, 2.0]),
            Err(MathError::NonMonotonic { .. })
        ));
        assert_eq!(
            CubicSpline::natural(vec![0.0], vec![0.0]).unwrap_err(),
            MathError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_integral() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![1.0, 1.0, 1.0, 1.0];
        let spline = CubicSpline::natural(xs, ys).unwrap();
        assert_relative_eq!(spline.integral(0.0, 3.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(spline.integral(0.5, 2.25), 1.75, epsilon = 1e-12);
        assert_relative_eq!(spline.integral(2.25, 0.5), -1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_integral_of_reproduced_cubic() {
        let f = |x: f64| x * x * x;
        let xs = vec![0.0, 0.5, 1.0, 1.5, 2.0];
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let spline = CubicSpline::with_end_slopes(xs, ys, 0.0, 12.0).unwrap();

        // int_0^2 x^3 dx = 4
        assert_relative_eq!(spline.integral(0.0, 2.0), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_query_must_be_one_dimensional() {
        let spline = CubicSpline::natural(XS.to_vec(), YS.to_vec()).unwrap();
        assert_eq!(
            spline.value(&[0.5, 3.0], &[]).unwrap_err(),
            MathError::dimension_mismatch(1, 2)
        );
        assert_eq!(
            spline.extrapolate(&[], &[]).unwrap_err(),
            MathError::dimension_mismatch(1, 0)
        );
        assert_eq!(spline.value(&[0.5], &[]).unwrap(), YS[0]);
    }

    #[test]
    fn test_extrapolates_edge_cubic() {
        let spline = CubicSpline::natural(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        assert_relative_eq!(
            spline.extrapolate(&[0.0], &[]).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }
}
