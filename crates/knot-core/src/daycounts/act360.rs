//! Actual/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual calendar days over a fixed 360-day year, the money-market
/// convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_first_half_of_leap_year() {
        assert_eq!(Act360.day_count(d(2020, 1, 1), d(2020, 7, 1)), 182);
        assert_eq!(Act360.year_fraction(d(2020, 1, 1), d(2020, 7, 1)), 182.0 / 360.0);
    }

    #[test]
    fn test_year_basis_is_always_360() {
        for (start, end, days) in [
            (d(2023, 1, 1), d(2024, 1, 1), 365.0),
            (d(2024, 1, 1), d(2025, 1, 1), 366.0),
            (d(2025, 3, 31), d(2025, 6, 30), 91.0),
        ] {
            assert_relative_eq!(Act360.year_fraction(start, end), days / 360.0);
        }
    }

    #[test]
    fn test_reversed_dates_are_negative() {
        let (later, earlier) = (d(2021, 3, 15), d(2021, 3, 1));
        assert_eq!(Act360.day_count(later, earlier), -14);
        assert_relative_eq!(
            Act360.year_fraction(later, earlier),
            -Act360.year_fraction(earlier, later)
        );
    }
}
