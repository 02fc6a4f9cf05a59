//! Business/252 day count convention.

use std::borrow::Cow;

use super::DayCount;
use crate::types::Date;

/// Business/252 day count convention.
///
/// Counts business days in `[start, end)` and divides by 252. A business
/// day is Monday to Friday and not in the holiday list; the shared
/// instance behind [`DayCountConvention::Business252`](super::DayCountConvention::Business252)
/// excludes weekends only.
///
/// # Example
///
/// ```rust
/// use knot_core::daycounts::{Business252, DayCount};
/// use knot_core::types::Date;
///
/// let dc = Business252::weekends_only();
/// let friday = Date::from_ymd(2025, 1, 3).unwrap();
/// let monday = Date::from_ymd(2025, 1, 6).unwrap();
/// assert_eq!(dc.day_count(friday, monday), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business252 {
    holidays: Cow<'static, [Date]>,
}

impl Business252 {
    /// Creates the convention with weekends as the only non-business days.
    #[must_use]
    pub const fn weekends_only() -> Self {
        Self {
            holidays: Cow::Borrowed(&[]),
        }
    }

    /// Creates the convention with an additional holiday list.
    #[must_use]
    pub fn with_holidays(holidays: impl Into<Vec<Date>>) -> Self {
        let mut holidays = holidays.into();
        holidays.sort_unstable();
        holidays.dedup();
        Self {
            holidays: Cow::Owned(holidays),
        }
    }

    /// Returns the configured holidays, sorted.
    #[must_use]
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }

    /// Checks if the date is a business day.
    #[must_use]
    pub fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && self.holidays.binary_search(&date).is_err()
    }

    /// Counts business days in `[start, end)`; `start <= end` is assumed.
    fn count_forward(&self, start: Date, end: Date) -> i64 {
        let total = start.days_between(&end);
        let full_weeks = total / 7;
        let mut count = full_weeks * 5;

        let mut current = start.add_days(full_weeks * 7);
        while current < end {
            if current.is_weekday() {
                count += 1;
            }
            current = current.add_days(1);
        }

        let holidays = self
            .holidays
            .iter()
            .filter(|h| **h >= start && **h < end && h.is_weekday())
            .count();

        count - holidays as i64
    }
}

impl Default for Business252 {
    fn default() -> Self {
        Self::weekends_only()
    }
}

impl DayCount for Business252 {
    fn name(&self) -> &'static str {
        "BUS/252"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        if start <= end {
            self.count_forward(start, end)
        } else {
            -self.count_forward(end, start)
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 252.0
    }
}
