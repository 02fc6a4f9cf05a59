//! Discount factor interpolation in zero-rate space.
//!
//! Samples are discount factors `df` at times `t`. Each strategy converts
//! them to continuously compounded zero rates `r = -ln(df) / t`,
//! interpolates the rates and converts back with `df = exp(-r t)`. A sample
//! at `t = 0` carries no rate information and borrows the rate of its
//! neighbour.

use super::{
    check_bounding, check_query, CubicSpline, FlatInterpolation, Interpolation, LinearInterpolation,
};
use crate::error::{MathError, MathResult};
use crate::space::Point;

/// Continuously compounded zero rate implied by `df` at time `t`.
///
/// Returns NaN at `t = 0`.
#[inline]
pub fn zero_rate(t: f64, df: f64) -> f64 {
    -df.ln() / t
}

/// Discount factor implied by the zero rate `r` at time `t`.
#[inline]
pub fn discount_factor(t: f64, r: f64) -> f64 {
    (-r * t).exp()
}

fn check_positive(p: &Point) -> MathResult<()> {
    if p.value() <= 0.0 {
        return Err(MathError::invalid_input(format!(
            "discount factor {} at t = {} is not positive",
            p.value(),
            p.coord(0)
        )));
    }
    Ok(())
}

/// Rate at `own`, borrowing from `neighbour` when `own` sits at `t = 0`.
fn sample_rate(own: &Point, neighbour: &Point) -> f64 {
    if own.coord(0) != 0.0 {
        zero_rate(own.coord(0), own.value())
    } else if neighbour.coord(0) != 0.0 {
        zero_rate(neighbour.coord(0), neighbour.value())
    } else {
        0.0
    }
}

fn rate_bracket(bounding: &[&Point]) -> MathResult<[Point; 2]> {
    check_bounding(bounding)?;
    let lower = bounding[0];
    let upper = bounding.get(1).copied().unwrap_or(lower);
    check_positive(lower)?;
    check_positive(upper)?;
    Ok([
        Point::one(lower.coord(0), sample_rate(lower, upper)),
        Point::one(upper.coord(0), sample_rate(upper, lower)),
    ])
}

/// Applies a one-dimensional strategy to zero rates instead of discount
/// factors.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::{Interpolation, LinearRateInterpolation, ZeroRateInterpolation};
/// use knot_math::interpolation::LinearInterpolation;
/// use knot_math::space::Point;
///
/// // 2% at one year, 4% at three years
/// let a = Point::one(1.0, (-0.02f64).exp());
/// let b = Point::one(3.0, (-0.12f64).exp());
///
/// let strategy: LinearRateInterpolation = ZeroRateInterpolation(LinearInterpolation);
/// let df = strategy.value(&[2.0], &[&a, &b]).unwrap();
/// assert!((df - (-0.06f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroRateInterpolation<I>(pub I);

/// Linear interpolation of zero rates.
pub type LinearRateInterpolation = ZeroRateInterpolation<LinearInterpolation>;

/// Piecewise constant zero rates.
pub type PiecewiseConstantRateInterpolation = ZeroRateInterpolation<FlatInterpolation>;

impl<I: Interpolation> Interpolation for ZeroRateInterpolation<I> {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        let [p0, p1] = rate_bracket(bounding)?;
        let r = self.0.value(query, &[&p0, &p1])?;
        Ok(discount_factor(query[0], r))
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        let [p0, p1] = rate_bracket(bounding)?;
        let r = self.0.extrapolate(query, &[&p0, &p1])?;
        Ok(discount_factor(query[0], r))
    }
}

/// Natural cubic spline through the zero rates of every knot.
#[derive(Debug, Clone)]
pub struct LogRateSpline {
    spline: CubicSpline,
}

impl LogRateSpline {
    /// Fits the rate spline to discount factors `dfs` at times `ts`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` for a non-positive discount factor,
    /// or any [`CubicSpline::natural`] error.
    pub fn natural(ts: Vec<f64>, dfs: &[f64]) -> MathResult<Self> {
        if ts.len() != dfs.len() {
            return Err(MathError::invalid_input(format!(
                "{} times but {} discount factors",
                ts.len(),
                dfs.len()
            )));
        }
        let points: Vec<Point> = ts.iter().zip(dfs).map(|(&t, &df)| Point::one(t, df)).collect();
        for p in &points {
            check_positive(p)?;
        }

        let n = points.len();
        let rates = (0..n)
            .map(|i| {
                let neighbour = if i + 1 < n { i + 1 } else { i.saturating_sub(1) };
                sample_rate(&points[i], &points[neighbour])
            })
            .collect();

        Ok(Self {
            spline: CubicSpline::natural(ts, rates)?,
        })
    }

    /// Interpolated zero rate at `t`.
    pub fn rate(&self, t: f64) -> f64 {
        self.spline.evaluate(t)
    }

    /// The spline through the knot rates.
    pub fn spline(&self) -> &CubicSpline {
        &self.spline
    }
}

impl Interpolation for LogRateSpline {
    fn value(&self, query: &[f64], _bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 1)?;
        Ok(discount_factor(query[0], self.rate(query[0])))
    }
}
