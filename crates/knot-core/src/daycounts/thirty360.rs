//! 30/360 day count conventions.
//!
//! All variants share one formula and differ only in how the day-of-month
//! values are adjusted first:
//!
//! $$\text{Days} = 360 (Y_2 - Y_1) + 30 (M_2 - M_1) + (D_2 - D_1)$$

use super::{ymd, DayCount};
use crate::types::Date;

#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

#[inline]
fn thirty_360_days(y1: i64, m1: i64, d1: i64, y2: i64, m2: i64, d2: i64) -> i64 {
    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

/// 30/360 US day count convention (Bond Basis).
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February and D1 was too, change D2 to 30
/// 4. If D2 is 31 and D1 is now 30 or more, change D2 to 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (y1, m1, mut d1) = ymd(start);
        let (y2, m2, mut d2) = ymd(end);

        let start_feb_eom = is_last_day_of_february(start);
        if start_feb_eom || d1 == 31 {
            d1 = 30;
        }

        if (start_feb_eom && is_last_day_of_february(end)) || (d2 == 31 && d1 >= 30) {
            d2 = 30;
        }

        thirty_360_days(y1, m1, d1, y2, m2, d2)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

/// 30E/360 day count convention (Eurobond Basis).
///
/// Any 31st on either end becomes 30; February gets no special handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (y1, m1, d1) = ymd(start);
        let (y2, m2, d2) = ymd(end);

        thirty_360_days(y1, m1, d1.min(30), y2, m2, d2.min(30))
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

/// 30E/360 ISDA day count convention.
///
/// # Rules
///
/// 1. If D1 is the last day of the month, change D1 to 30
/// 2. If D2 is the last day of the month, change D2 to 30, unless D2 is the
///    last day of February and the termination date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360EIsda {
    termination_date: Option<Date>,
}

impl Thirty360EIsda {
    /// Creates the convention with a termination (maturity) date.
    #[must_use]
    pub const fn new(termination_date: Option<Date>) -> Self {
        Self { termination_date }
    }

    /// Creates the convention without a termination date.
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            termination_date: None,
        }
    }
}

impl DayCount for Thirty360EIsda {
    fn name(&self) -> &'static str {
        "30E/360.ISDA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (y1, m1, mut d1) = ymd(start);
        let (y2, m2, mut d2) = ymd(end);

        if start.is_end_of_month() {
            d1 = 30;
        }

        let is_termination = self.termination_date == Some(end);
        if end.is_end_of_month() && !(is_termination && end.month() == 2) {
            d2 = 30;
        }

        thirty_360_days(y1, m1, d1, y2, m2, d2)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}

/// 30/360 German day count convention.
///
/// A 31st or the last day of February on either end becomes 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360German;

impl DayCount for Thirty360German {
    fn name(&self) -> &'static str {
        "30/360.GERMAN"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (y1, m1, mut d1) = ymd(start);
        let (y2, m2, mut d2) = ymd(end);

        if d1 == 31 || is_last_day_of_february(start) {
            d1 = 30;
        }
        if d2 == 31 || is_last_day_of_february(end) {
            d2 = 30;
        }

        thirty_360_days(y1, m1, d1, y2, m2, d2)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }
}
