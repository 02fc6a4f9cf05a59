//! Interpolation strategies over discrete spaces.
//!
//! Every strategy answers the same question: given a query and the sample
//! points bracketing it, what is the value?
//!
//! # Available Methods
//!
//! **Local (bracket only):**
//! - [`FlatInterpolation`]: piecewise constant
//! - [`LinearInterpolation`]: straight line between the two bracket samples
//! - [`BilinearInterpolation`]: linear in `x`, then in `y` (surfaces)
//! - [`TrilinearInterpolation`]: linear in `x`, `y`, then `z` (volumes)
//! - [`LogLinearInterpolation`]: linear in `ln(y)`, for discount factors
//! - [`LinearRateInterpolation`], [`PiecewiseConstantRateInterpolation`]:
//!   discount factors interpolated through their zero rates
//!
//! **Fitted (all knots, coefficients precomputed):**
//! - [`CubicSpline`]: natural, clamped, parabolic and Akima splines
//! - [`LogRateSpline`]: natural spline through the zero rates of every knot
//!
//! # Choosing an Interpolation Method
//!
//! | Method | Dim | Smoothness | Min knots |
//! |--------|-----|------------|-----------|
//! | Flat | 1 | none | 1 |
//! | Linear | 1 | C0 | 1 |
//! | Bilinear | 2 | C0 | 1 |
//! | Trilinear | 3 | C0 | 1 |
//! | Log-linear | 1 | C0 | 1 |
//! | Linear / piecewise constant rate | 1 | C0 / none | 1 |
//! | Log-rate spline | 1 | C2 in rate | 2 |
//! | Natural / clamped spline | 1 | C2 | 2 |
//! | Parabolic spline | 1 | C2 | 3 |
//! | Akima | 1 | C1 | 5 |
//!
//! The facades return the stored value exactly at every knot.

mod cubic_spline;
mod curve;
mod flat;
mod linear;
mod log_linear;
mod multilinear;
mod rate;
mod surface;

pub use cubic_spline::{CubicSpline, SplineBoundary};
pub use curve::InterpolatedCurve;
pub use flat::FlatInterpolation;
pub use linear::LinearInterpolation;
pub use log_linear::LogLinearInterpolation;
pub use multilinear::{BilinearInterpolation, TrilinearInterpolation};
pub use rate::{
    discount_factor, zero_rate, LinearRateInterpolation, LogRateSpline,
    PiecewiseConstantRateInterpolation, ZeroRateInterpolation,
};
pub use surface::{InterpolatedSurface, InterpolatedVolume};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::space::Point;

/// Trait for interpolation strategies.
///
/// `bounding` holds the samples around `query` in the order produced by the
/// space: two points for a curve, four corners for a surface and eight for
/// a volume. Both entries of a pair are the same sample when the query sits
/// on a knot.
pub trait Interpolation: Send + Sync {
    /// Value at `query` inside the bracket.
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64>;

    /// Value at `query` outside the sampled range, continuing the edge
    /// interval in `bounding`.
    ///
    /// Defaults to [`value`](Self::value), which keeps strategies that
    /// saturate at their bracket ends.
    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        self.value(query, bounding)
    }
}

/// Unclamped linear interpolation; a zero-width interval returns `f0`.
#[inline]
pub(crate) fn lerp(x: f64, x0: f64, x1: f64, f0: f64, f1: f64) -> f64 {
    if x1 == x0 {
        f0
    } else {
        f0 + (x - x0) * (f1 - f0) / (x1 - x0)
    }
}

/// Linear interpolation saturating at the interval ends.
#[inline]
pub(crate) fn clamped_lerp(x: f64, x0: f64, x1: f64, f0: f64, f1: f64) -> f64 {
    if x1 == x0 || x <= x0 {
        f0
    } else if x >= x1 {
        f1
    } else {
        f0 + (x - x0) * (f1 - f0) / (x1 - x0)
    }
}

/// Rejects queries whose coordinate count differs from `dimension`.
pub(crate) fn check_query(query: &[f64], dimension: usize) -> MathResult<()> {
    if query.len() != dimension {
        return Err(MathError::dimension_mismatch(dimension, query.len()));
    }
    Ok(())
}

pub(crate) fn check_bounding(bounding: &[&Point]) -> MathResult<()> {
    if bounding.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(())
}

/// The closed set of interpolation methods.
///
/// Serializes as a tagged enum; clamped spline variants carry their
/// boundary values.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::InterpolationMethod;
///
/// let method: InterpolationMethod = "CubicSplineInterpolation".parse().unwrap();
/// assert_eq!(method, InterpolationMethod::NaturalSpline);
/// assert_eq!(method.dimension(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Piecewise constant.
    Flat,
    /// Piecewise linear.
    #[default]
    Linear,
    /// Bilinear over a surface grid.
    Bilinear,
    /// Trilinear over a volume grid.
    Trilinear,
    /// Cubic spline with zero curvature at both ends.
    NaturalSpline,
    /// Cubic spline with prescribed end slopes.
    FirstDerivativeSpline {
        /// Slope at the first knot.
        left: f64,
        /// Slope at the last knot.
        right: f64,
    },
    /// Cubic spline with prescribed end curvature.
    SecondDerivativeSpline {
        /// Second derivative at the first knot.
        left: f64,
        /// Second derivative at the last knot.
        right: f64,
    },
    /// Cubic spline whose end intervals are parabolas.
    ParabolicSpline,
    /// Akima spline.
    Akima,
    /// Linear in the logarithm of the samples.
    LogLinear,
    /// Discount factors with linearly interpolated zero rates.
    LinearRate,
    /// Discount factors with piecewise constant zero rates.
    PiecewiseConstantRate,
    /// Discount factors with a natural spline through the zero rates.
    LogRateCubicSpline,
}

impl InterpolationMethod {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Linear => "Linear",
            Self::Bilinear => "Bilinear",
            Self::Trilinear => "Trilinear",
            Self::NaturalSpline => "NaturalSpline",
            Self::FirstDerivativeSpline { .. } => "FirstDerivativeSpline",
            Self::SecondDerivativeSpline { .. } => "SecondDerivativeSpline",
            Self::ParabolicSpline => "ParabolicSpline",
            Self::Akima => "Akima",
            Self::LogLinear => "LogLinear",
            Self::LinearRate => "LinearRate",
            Self::PiecewiseConstantRate => "PiecewiseConstantRate",
            Self::LogRateCubicSpline => "LogRateCubicSpline",
        }
    }

    /// Number of coordinates the method interpolates over.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Bilinear => 2,
            Self::Trilinear => 3,
            _ => 1,
        }
    }

    /// True for methods that interpolate discount factors through
    /// `ln(df)` or the zero rate, and so need positive samples.
    pub fn needs_positive_values(&self) -> bool {
        matches!(
            self,
            Self::LogLinear
                | Self::LinearRate
                | Self::PiecewiseConstantRate
                | Self::LogRateCubicSpline
        )
    }

    /// True for the fitted spline methods.
    pub fn is_spline(&self) -> bool {
        matches!(
            self,
            Self::NaturalSpline
                | Self::FirstDerivativeSpline { .. }
                | Self::SecondDerivativeSpline { .. }
                | Self::ParabolicSpline
                | Self::Akima
                | Self::LogRateCubicSpline
        )
    }

    /// Minimum number of knots a curve needs for this method.
    pub fn min_points(&self) -> usize {
        match self {
            Self::ParabolicSpline => 3,
            Self::Akima => 5,
            m if m.is_spline() => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "flatinterpolation" | "piecewiseconstantinterpolation" => Self::Flat,
            "linear" | "linearinterpolation" => Self::Linear,
            "bilinear" | "bilinearinterpolation" => Self::Bilinear,
            "trilinear" | "trilinearinterpolation" => Self::Trilinear,
            "cubicspline"
            | "naturalspline"
            | "cubicsplineinterpolation"
            | "cubichermitespline"
            | "cubichermitesplineinterpolation" => Self::NaturalSpline,
            "parabolicspline" => Self::ParabolicSpline,
            "akima" | "akimasplineinterpolation" => Self::Akima,
            "loglinear" | "loglinearinterpolation" => Self::LogLinear,
            "linearrate" | "linearrateinterpolation" => Self::LinearRate,
            "piecewiseconstantrate"
            | "piecewiseconstantrateinterpolation"
            | "piecewiseconstantzerorateinterpolation" => Self::PiecewiseConstantRate,
            "logratecubicspline" | "logratecubicsplineinterpolation" => Self::LogRateCubicSpline,
            "firstderivativespline" | "secondderivativespline" => {
                return Err(MathError::unsupported_method(
                    s,
                    "clamped splines need boundary values",
                ))
            }
            _ => return Err(MathError::unsupported_method(s, "unknown method name")),
        };
        Ok(method)
    }
}

/// A fitted one-dimensional interpolator.
#[derive(Debug, Clone)]
pub enum CurveInterpolator {
    /// Piecewise constant.
    Flat(FlatInterpolation),
    /// Piecewise linear.
    Linear(LinearInterpolation),
    /// Any cubic spline.
    Spline(CubicSpline),
    /// Log-linear.
    LogLinear(LogLinearInterpolation),
    /// Linear zero rates.
    LinearRate(LinearRateInterpolation),
    /// Piecewise constant zero rates.
    ConstantRate(PiecewiseConstantRateInterpolation),
    /// Spline through the zero rates.
    RateSpline(LogRateSpline),
}

impl CurveInterpolator {
    /// Fits `method` to the samples `(xs, ys)`.
    ///
    /// A single sample degrades to a flat interpolator for every method.
    ///
    /// # Errors
    ///
    /// Returns `MathError::UnsupportedMethod` for surface and volume methods,
    /// `MathError::InvalidInput` for a non-positive sample under a log or
    /// rate method, and any spline construction error.
    pub fn fit(method: InterpolationMethod, xs: &[f64], ys: &[f64]) -> MathResult<Self> {
        if method.needs_positive_values() {
            if let Some((i, y)) = ys.iter().enumerate().find(|(_, &y)| y <= 0.0) {
                return Err(MathError::invalid_input(format!(
                    "{method} requires positive values, got {y} at index {i}"
                )));
            }
        }

        let (xs, ys) = (xs.to_vec(), ys.to_vec());
        let interpolator = match method {
            InterpolationMethod::Bilinear | InterpolationMethod::Trilinear => {
                return Err(MathError::unsupported_method(
                    method.name(),
                    format!("requires a {}D space", method.dimension()),
                ))
            }
            _ if xs.len() < 2 => {
                log::debug!("{method} over {} sample(s) degrades to flat", xs.len());
                Self::Flat(FlatInterpolation)
            }
            InterpolationMethod::Flat => Self::Flat(FlatInterpolation),
            InterpolationMethod::Linear => Self::Linear(LinearInterpolation),
            InterpolationMethod::NaturalSpline => Self::Spline(CubicSpline::natural(xs, ys)?),
            InterpolationMethod::FirstDerivativeSpline { left, right } => {
                Self::Spline(CubicSpline::with_end_slopes(xs, ys, left, right)?)
            }
            InterpolationMethod::SecondDerivativeSpline { left, right } => {
                Self::Spline(CubicSpline::with_end_curvature(xs, ys, left, right)?)
            }
            InterpolationMethod::ParabolicSpline => Self::Spline(CubicSpline::parabolic(xs, ys)?),
            InterpolationMethod::Akima => Self::Spline(CubicSpline::akima(xs, ys)?),
            InterpolationMethod::LogLinear => Self::LogLinear(LogLinearInterpolation),
            InterpolationMethod::LinearRate => Self::LinearRate(LinearRateInterpolation::default()),
            InterpolationMethod::PiecewiseConstantRate => {
                Self::ConstantRate(PiecewiseConstantRateInterpolation::default())
            }
            InterpolationMethod::LogRateCubicSpline => {
                Self::RateSpline(LogRateSpline::natural(xs, &ys)?)
            }
        };
        Ok(interpolator)
    }

    fn inner(&self) -> &dyn Interpolation {
        match self {
            Self::Flat(i) => i,
            Self::Linear(i) => i,
            Self::Spline(i) => i,
            Self::LogLinear(i) => i,
            Self::LinearRate(i) => i,
            Self::ConstantRate(i) => i,
            Self::RateSpline(i) => i,
        }
    }
}

impl Interpolation for CurveInterpolator {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        self.inner().value(query, bounding)
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        self.inner().extrapolate(query, bounding)
    }
}
