//! Actual/Actual day count conventions.

use super::act365::contains_feb_29;
use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The period is split into the portions falling in each calendar year,
/// each divided by that year's length.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT.ISDA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start > end {
            return -self.year_fraction(end, start);
        }

        let start_basis = f64::from(start.days_in_year());
        if start.year() == end.year() {
            return self.day_count(start, end) as f64 / start_basis;
        }

        // Remainder of the first year, whole years between, elapsed part of the last.
        let first = f64::from(start.days_in_year() - start.day_of_year() + 1) / start_basis;
        let whole = f64::from(end.year() - start.year() - 1);
        let last = f64::from(end.day_of_year() - 1) / f64::from(end.days_in_year());

        first + whole + last
    }
}

/// Actual/Actual ICMA day count convention.
///
/// The year fraction depends on the coupon frequency and the actual
/// length of the reference period.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days}}{\text{Frequency} \times \text{Days in Period}}$$
///
/// Without a reference period the fraction falls back to actual/365.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActActIcma {
    frequency: u32,
}

impl ActActIcma {
    /// Creates a new ACT/ACT ICMA convention with the given coupon frequency.
    #[must_use]
    pub const fn new(frequency: u32) -> Self {
        Self { frequency }
    }

    /// Creates the convention with semi-annual reference periods.
    #[must_use]
    pub const fn semi_annual() -> Self {
        Self { frequency: 2 }
    }

    /// Returns the coupon frequency.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }
}

impl Default for ActActIcma {
    fn default() -> Self {
        Self::semi_annual()
    }
}

impl DayCount for ActActIcma {
    fn name(&self) -> &'static str {
        "ACT/ACT.ICMA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn year_fraction_with_period(
        &self,
        start: Date,
        end: Date,
        ref_start: Date,
        ref_end: Date,
    ) -> f64 {
        let days_in_period = ref_start.days_between(&ref_end);
        if days_in_period == 0 || self.frequency == 0 {
            return self.year_fraction(start, end);
        }

        self.day_count(start, end) as f64 / (f64::from(self.frequency) * days_in_period as f64)
    }
}

/// Actual/Actual AFB day count convention.
///
/// Whole years are counted back from the end date; the remaining stub is
/// divided by 366 if it contains 29 February, otherwise 365. Rolling back
/// from 29 February lands on 28 February.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActAfb;

impl DayCount for ActActAfb {
    fn name(&self) -> &'static str {
        "ACT/ACT.AFB"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start > end {
            return -self.year_fraction(end, start);
        }

        let mut whole_years = 0;
        let mut stub_end = end;
        while let Ok(previous) = end.add_years(-(whole_years + 1)) {
            if previous < start {
                break;
            }
            whole_years += 1;
            stub_end = previous;
        }

        let basis = if contains_feb_29(start, stub_end) {
            366.0
        } else {
            365.0
        };

        f64::from(whole_years) + start.days_between(&stub_end) as f64 / basis
    }
}
