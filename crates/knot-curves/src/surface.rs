//! Date-aware discrete surface.
//!
//! The first axis is time from the base date, the second is a raw
//! coordinate such as strike or tenor. Values are interpolated bilinearly.

use knot_core::daycounts::DayCountConvention;
use knot_core::Date;
use knot_math::extrapolation::ExtrapolationPolicy;
use knot_math::interpolation::InterpolatedSurface;
use knot_math::linear_algebra::Matrix;
use knot_math::space::SurfaceSpace;

use crate::error::{CurveError, CurveResult};

/// A grid of values over (time, second coordinate).
///
/// `values[(i, j)]` is the sample at `times[i]` and `ys[j]`.
#[derive(Debug, Clone)]
pub struct DiscreteSurface {
    base_date: Date,
    day_count: DayCountConvention,
    surface: InterpolatedSurface,
}

impl DiscreteSurface {
    /// Builds a surface whose first axis is given as dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates are not strictly increasing, or the
    /// grid does not match the axes.
    pub fn from_dates(
        base_date: Date,
        extrapolation: ExtrapolationPolicy,
        dates: &[Date],
        ys: Vec<f64>,
        values: Matrix,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
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
        Self::build(base_date, day_count, extrapolation, times, ys, values)
    }

    /// Builds a surface whose first axis is already in years. Date queries
    /// use ACT/365.FIXED.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is not strictly increasing, or the grid
    /// does not match the axes.
    pub fn from_times(
        base_date: Date,
        extrapolation: ExtrapolationPolicy,
        times: Vec<f64>,
        ys: Vec<f64>,
        values: Matrix,
    ) -> CurveResult<Self> {
        Self::build(
            base_date,
            DayCountConvention::Act365Fixed,
            extrapolation,
            times,
            ys,
            values,
        )
    }

    fn build(
        base_date: Date,
        day_count: DayCountConvention,
        policy: ExtrapolationPolicy,
        times: Vec<f64>,
        ys: Vec<f64>,
        values: Matrix,
    ) -> CurveResult<Self> {
        let space = SurfaceSpace::from_grid(times, ys, values)?;
        tracing::debug!(
            rows = space.xs().len(),
            columns = space.ys().len(),
            %policy,
            "built discrete surface"
        );
        Ok(Self {
            base_date,
            day_count,
            surface: InterpolatedSurface::new(space, policy),
        })
    }

    /// Value at time `t` and second coordinate `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is NaN.
    pub fn value_at(&self, t: f64, y: f64) -> CurveResult<f64> {
        Ok(self.surface.value_at(t, y)?)
    }

    /// Value at `date` and second coordinate `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `y` is NaN.
    pub fn value_at_date(&self, date: Date, y: f64) -> CurveResult<f64> {
        self.value_at(self.time_of(date), y)
    }

    /// Value at a `[t, y]` query.
    ///
    /// # Errors
    ///
    /// Returns an error unless `query` has exactly two coordinates.
    pub fn value_at_point(&self, query: &[f64]) -> CurveResult<f64> {
        Ok(self.surface.value_at_point(query)?)
    }

    /// Year fraction from the base date to `date`.
    pub fn time_of(&self, date: Date) -> f64 {
        self.day_count
            .day_count()
            .year_fraction(self.base_date, date)
    }

    /// Date at which time is zero.
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Day count used for the time axis.
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Sample times in years.
    pub fn times(&self) -> &[f64] {
        self.surface.space().xs()
    }

    /// Second-axis coordinates.
    pub fn ys(&self) -> &[f64] {
        self.surface.space().ys()
    }

    /// Extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.surface.policy()
    }
}
