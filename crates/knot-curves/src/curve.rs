//! Date-aware discrete curve.
//!
//! A `DiscreteCurve` maps calendar dates to time coordinates with a day count
//! measured from its base date, then delegates every query to an
//! [`InterpolatedCurve`].

use knot_core::daycounts::DayCountConvention;
use knot_core::Date;
use knot_math::extrapolation::ExtrapolationPolicy;
use knot_math::interpolation::{InterpolatedCurve, InterpolationMethod};
use knot_math::space::{CurveSpace, Point};

use crate::error::{CurveError, CurveResult};

/// A curve of sampled values indexed by date or by time in years.
///
/// # Example
///
/// ```rust
/// use knot_core::prelude::*;
/// use knot_curves::prelude::*;
///
/// let base = Date::from_ymd(2020, 1, 1).unwrap();
/// let dates = vec![
///     base,
///     Date::from_ymd(2021, 1, 1).unwrap(),
///     Date::from_ymd(2022, 1, 1).unwrap(),
/// ];
///
/// let curve = DiscreteCurve::from_dates(
///     base,
///     InterpolationMethod::Linear,
///     ExtrapolationPolicy::Clamp,
///     &dates,
///     vec![1.0, 0.95, 0.90],
///     DayCountConvention::Act365Fixed,
/// )
/// .unwrap();
///
/// let df = curve.value_at_date(Date::from_ymd(2020, 7, 2).unwrap()).unwrap();
/// assert!((df - 0.975).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct DiscreteCurve {
    /// Date at which time is zero.
    base_date: Date,
    /// Converts dates to times.
    day_count: DayCountConvention,
    /// Sample dates, when the curve was built from dates.
    dates: Option<Vec<Date>>,
    /// Time-coordinate engine.
    curve: InterpolatedCurve,
}

impl std::fmt::Debug for DiscreteCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscreteCurve")
            .field("base_date", &self.base_date)
            .field("day_count", &self.day_count)
            .field("times", &self.times())
            .field("values", &self.values())
            .field("method", &self.method())
            .field("policy", &self.policy())
            .finish()
    }
}

impl DiscreteCurve {
    /// Builds a curve from dated samples.
    ///
    /// Each date becomes the year fraction from `base_date` under
    /// `day_count`. Dates before the base date give negative times.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dates` and `values` differ in length
    /// - dates are not strictly increasing
    /// - there are no samples, or `method` is a surface method
    pub fn from_dates(
        base_date: Date,
        method: InterpolationMethod,
        extrapolation: ExtrapolationPolicy,
        dates: &[Date],
        values: Vec<f64>,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        if dates.len() != values.len() {
            return Err(CurveError::length_mismatch(dates.len(), values.len()));
        }
        for (i, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(CurveError::non_monotonic_dates(i + 1, pair[0], pair[1]));
            }
        }

        let dc = day_count.day_count();
        let times = dates
            .iter()
            .map(|&d| dc.year_fraction(base_date, d))
            .collect();
        let curve = Self::fit(times, values, method, extrapolation)?;
        Ok(Self {
            base_date,
            day_count,
            dates: Some(dates.to_vec()),
            curve,
        })
    }

    /// Builds a curve from samples already expressed in years.
    ///
    /// Date queries on the result use ACT/365.FIXED from `base_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, times are not strictly
    /// increasing, there are no samples, or `method` is a surface method.
    pub fn from_times(
        base_date: Date,
        method: InterpolationMethod,
        extrapolation: ExtrapolationPolicy,
        times: Vec<f64>,
        values: Vec<f64>,
    ) -> CurveResult<Self> {
        if times.len() != values.len() {
            return Err(CurveError::length_mismatch(times.len(), values.len()));
        }
        let curve = Self::fit(times, values, method, extrapolation)?;
        Ok(Self {
            base_date,
            day_count: DayCountConvention::Act365Fixed,
            dates: None,
            curve,
        })
    }

    /// Builds a curve from a method name, an extrapolate flag and a day
    /// count name.
    ///
    /// Names are parsed case-insensitively, e.g. `"LinearInterpolation"`,
    /// `"Akima"`, `"ACT/360"`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown method or day count name, plus
    /// everything [`from_dates`](Self::from_dates) rejects.
    pub fn from_ids(
        base_date: Date,
        method_id: &str,
        extrapolate: bool,
        dates: &[Date],
        values: Vec<f64>,
        day_count_id: &str,
    ) -> CurveResult<Self> {
        let method: InterpolationMethod = method_id.parse()?;
        let day_count = DayCountConvention::parse(day_count_id)?;
        Self::from_dates(
            base_date,
            method,
            ExtrapolationPolicy::from_flag(extrapolate),
            dates,
            values,
            day_count,
        )
    }

    fn fit(
        times: Vec<f64>,
        values: Vec<f64>,
        method: InterpolationMethod,
        policy: ExtrapolationPolicy,
    ) -> CurveResult<InterpolatedCurve> {
        let points = times.len();
        let curve = InterpolatedCurve::from_arrays(times, values, method, policy)?;
        tracing::debug!(points, %method, %policy, "built discrete curve");
        Ok(curve)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Value at time `t` in years from the base date.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is NaN.
    pub fn value_at(&self, t: f64) -> CurveResult<f64> {
        Ok(self.curve.value_at(t)?)
    }

    /// Value at `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the day count yields NaN.
    pub fn value_at_date(&self, date: Date) -> CurveResult<f64> {
        self.value_at(self.time_of(date))
    }

    /// The raw samples bracketing time `t`.
    pub fn closest_values(&self, t: f64) -> [&Point; 2] {
        self.curve.closest_values(t)
    }

    /// Year fraction from the base date to `date`.
    pub fn time_of(&self, date: Date) -> f64 {
        self.day_count
            .day_count()
            .year_fraction(self.base_date, date)
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    /// A new curve with every sample shifted by `shift`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shifted samples cannot be refitted.
    pub fn bumped(&self, shift: f64) -> CurveResult<Self> {
        let values = self.values().iter().map(|v| v + shift).collect();
        self.with_values(values)
    }

    /// A new curve on the same coordinates with different sample values.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::LengthMismatch` if `values` has the wrong
    /// length, or an error if the values cannot be fitted.
    pub fn with_values(&self, values: Vec<f64>) -> CurveResult<Self> {
        if values.len() != self.curve.space().len() {
            return Err(CurveError::length_mismatch(
                self.curve.space().len(),
                values.len(),
            ));
        }
        let space = CurveSpace::from_arrays(self.times().to_vec(), values)?;
        let curve = InterpolatedCurve::new(space, self.method(), self.policy())?;
        tracing::debug!(points = curve.space().len(), "rebuilt discrete curve with new values");
        Ok(Self {
            base_date: self.base_date,
            day_count: self.day_count,
            dates: self.dates.clone(),
            curve,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Date at which time is zero.
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Day count used to convert dates to times.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Sample dates, if the curve was built from dates.
    pub fn dates(&self) -> Option<&[Date]> {
        self.dates.as_deref()
    }

    /// Sample times in years.
    pub fn times(&self) -> &[f64] {
        self.curve.space().xs()
    }

    /// Sample values.
    pub fn values(&self) -> &[f64] {
        self.curve.space().values()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.curve.space().len()
    }

    /// True if the curve has no samples. Never true for a built curve.
    pub fn is_empty(&self) -> bool {
        self.curve.space().is_empty()
    }

    /// Interpolation method.
    pub fn method(&self) -> InterpolationMethod {
        self.curve.method()
    }

    /// Extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.curve.policy()
    }

    /// The time-coordinate engine.
    pub fn interpolated(&self) -> &InterpolatedCurve {
        &self.curve
    }
}
