//! Actual/365 day count conventions.

use super::DayCount;
use crate::types::date::is_leap_year;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The year basis is always 365 days, ignoring leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365.FIXED"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }
}

/// Actual/365 Leap day count convention (ACT/365L).
///
/// The denominator is 366 if the period `(start, end]` contains
/// 29 February, otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Leap;

impl DayCount for Act365Leap {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let basis = if contains_feb_29(start, end) {
            366.0
        } else {
            365.0
        };
        self.day_count(start, end) as f64 / basis
    }
}

/// Checks if the period `(start, end]` contains 29 February.
///
/// The dates may be given in either order.
pub(super) fn contains_feb_29(start: Date, end: Date) -> bool {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    (start.year()..=end.year())
        .filter(|&year| is_leap_year(year))
        .filter_map(|year| Date::from_ymd(year, 2, 29).ok())
        .any(|feb_29| feb_29 > start && feb_29 <= end)
}
