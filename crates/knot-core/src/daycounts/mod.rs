//! Day count conventions.
//!
//! A day count turns a pair of dates into the fractional-year number used as
//! a curve's time axis.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`]: Actual/360
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`Act365Leap`]: Actual/365 Leap
//! - [`ActActIsda`]: Actual/Actual ISDA, split by calendar year
//! - [`ActActIcma`]: Actual/Actual ICMA, reference-period based
//! - [`ActActAfb`]: Actual/Actual AFB
//!
//! ## 30/360 Family
//!
//! - [`Thirty360US`]: 30/360 US bond basis (with Feb EOM rules)
//! - [`Thirty360E`]: 30E/360 Eurobond basis
//! - [`Thirty360EIsda`]: 30E/360 ISDA
//! - [`Thirty360German`]: 30/360 German
//!
//! ## Business days
//!
//! - [`Business252`]: business days / 252
//!
//! # Usage
//!
//! ```rust
//! use knot_core::daycounts::{DayCount, DayCountConvention};
//! use knot_core::types::Date;
//!
//! let dc = DayCountConvention::Thirty360US.day_count();
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! assert_eq!(dc.year_fraction(start, end), 0.5);
//! ```

mod act360;
mod act365;
mod actact;
mod business252;
mod thirty360;

pub use act360::Act360;
pub use act365::{Act365Fixed, Act365Leap};
pub use actact::{ActActAfb, ActActIcma, ActActIsda};
pub use business252::Business252;
pub use thirty360::{Thirty360E, Thirty360EIsda, Thirty360German, Thirty360US};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations are stateless and thread-safe, so a single shared
/// instance serves every curve in the process.
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day month assumption. Negative if
    /// `end < start`.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the year fraction given a reference (coupon) period.
    ///
    /// Only period-based conventions use the reference dates; the default
    /// ignores them.
    fn year_fraction_with_period(
        &self,
        start: Date,
        end: Date,
        _ref_start: Date,
        _ref_end: Date,
    ) -> f64 {
        self.year_fraction(start, end)
    }
}

impl std::fmt::Debug for dyn DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayCount({})", self.name())
    }
}

static ACT_360: Act360 = Act360;
static ACT_365_FIXED: Act365Fixed = Act365Fixed;
static ACT_365_LEAP: Act365Leap = Act365Leap;
static ACT_ACT_ISDA: ActActIsda = ActActIsda;
static ACT_ACT_ICMA: ActActIcma = ActActIcma::semi_annual();
static ACT_ACT_AFB: ActActAfb = ActActAfb;
static THIRTY_360_US: Thirty360US = Thirty360US;
static THIRTY_360_E: Thirty360E = Thirty360E;
static THIRTY_360_E_ISDA: Thirty360EIsda = Thirty360EIsda::simple();
static THIRTY_360_GERMAN: Thirty360German = Thirty360German;
static BUSINESS_252: Business252 = Business252::weekends_only();

/// Enumeration of all supported day count conventions.
///
/// Selects one of the shared convention instances at runtime.
///
/// # Example
///
/// ```rust
/// use knot_core::daycounts::DayCountConvention;
/// use knot_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/365.FIXED".parse().unwrap();
/// let dc = convention.day_count();
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2026, 1, 1).unwrap();
/// assert_eq!(dc.year_fraction(start, end), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360
    #[serde(rename = "ACT/360")]
    Act360,

    /// Actual/365 Fixed
    #[serde(rename = "ACT/365.FIXED")]
    Act365Fixed,

    /// Actual/365 Leap, denominator 366 when the period spans 29 February
    #[serde(rename = "ACT/365L")]
    Act365Leap,

    /// Actual/Actual ISDA
    #[serde(rename = "ACT/ACT.ISDA")]
    ActActIsda,

    /// Actual/Actual ICMA, semi-annual reference periods by default
    #[serde(rename = "ACT/ACT.ICMA")]
    ActActIcma,

    /// Actual/Actual AFB
    #[serde(rename = "ACT/ACT.AFB")]
    ActActAfb,

    /// 30/360 US bond basis
    #[serde(rename = "30/360")]
    Thirty360US,

    /// 30E/360 Eurobond basis
    #[serde(rename = "30E/360")]
    Thirty360E,

    /// 30E/360 ISDA
    #[serde(rename = "30E/360.ISDA")]
    Thirty360EIsda,

    /// 30/360 German
    #[serde(rename = "30/360.GERMAN")]
    Thirty360German,

    /// Business days / 252, weekends excluded
    #[serde(rename = "BUS/252")]
    Business252,
}

impl DayCountConvention {
    /// Returns the shared instance implementing this convention.
    #[must_use]
    pub fn day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &ACT_360,
            DayCountConvention::Act365Fixed => &ACT_365_FIXED,
            DayCountConvention::Act365Leap => &ACT_365_LEAP,
            DayCountConvention::ActActIsda => &ACT_ACT_ISDA,
            DayCountConvention::ActActIcma => &ACT_ACT_ICMA,
            DayCountConvention::ActActAfb => &ACT_ACT_AFB,
            DayCountConvention::Thirty360US => &THIRTY_360_US,
            DayCountConvention::Thirty360E => &THIRTY_360_E,
            DayCountConvention::Thirty360EIsda => &THIRTY_360_E_ISDA,
            DayCountConvention::Thirty360German => &THIRTY_360_GERMAN,
            DayCountConvention::Business252 => &BUSINESS_252,
        }
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.day_count().name()
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365Leap,
            DayCountConvention::ActActIsda,
            DayCountConvention::ActActIcma,
            DayCountConvention::ActActAfb,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
            DayCountConvention::Thirty360EIsda,
            DayCountConvention::Thirty360German,
            DayCountConvention::Business252,
        ]
    }

    /// Returns the nominal year basis (denominator).
    ///
    /// ACT/ACT variants report 365 as an approximation.
    #[must_use]
    pub const fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Act360
            | DayCountConvention::Thirty360US
            | DayCountConvention::Thirty360E
            | DayCountConvention::Thirty360EIsda
            | DayCountConvention::Thirty360German => 360,

            DayCountConvention::Act365Fixed
            | DayCountConvention::Act365Leap
            | DayCountConvention::ActActIsda
            | DayCountConvention::ActActIcma
            | DayCountConvention::ActActAfb => 365,

            DayCountConvention::Business252 => 252,
        }
    }

    /// Parses a convention from its name.
    ///
    /// Accepts canonical names, FpML day count codes and common aliases,
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedConvention` for unknown names.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        name.parse()
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365.FIXED" | "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365"
            | "ACTUAL/365 FIXED" | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "ACT/365L" | "ACT/365 LEAP" | "ACTUAL/365 LEAP" | "ACT365LEAP" => {
                Ok(DayCountConvention::Act365Leap)
            }

            "ACT/ACT.ISDA" | "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA"
            | "ACTACTISDA" | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            "ACT/ACT.ICMA" | "ACT/ACT.ISMA" | "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA"
            | "ACTACTICMA" | "ISMA" => Ok(DayCountConvention::ActActIcma),

            "ACT/ACT.AFB" | "ACT/ACT AFB" | "ACTUAL/ACTUAL AFB" | "ACTACTAFB" | "AFB" => {
                Ok(DayCountConvention::ActActAfb)
            }

            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" | "30/360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            "30E/360" | "30/360 ICMA" | "EUROBOND" | "THIRTY360E" | "30E360" => {
                Ok(DayCountConvention::Thirty360E)
            }

            "30E/360.ISDA" | "30E/360 ISDA" | "THIRTY360EISDA" | "30E/360ISDA" => {
                Ok(DayCountConvention::Thirty360EIsda)
            }

            "30/360.GERMAN" | "30/360 GERMAN" | "30E/360 GERMAN" | "GERMAN"
            | "THIRTY360GERMAN" => Ok(DayCountConvention::Thirty360German),

            "BUS/252" | "BUSINESS/252" | "BUS252" | "BUSINESS252" => {
                Ok(DayCountConvention::Business252)
            }

            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

/// Splits a date into the `(y, m, d)` triple used by the 30/360 family.
pub(crate) fn ymd(date: Date) -> (i64, i64, i64) {
    (
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_act360_half_year_2020() {
        let dc = DayCountConvention::Act360.day_count();
        let yf = dc.year_fraction(date(2020, 1, 1), date(2020, 7, 1));
        assert_relative_eq!(yf, 182.0 / 360.0);
    }

    #[test]
    fn test_act365_fixed_full_year() {
        let dc = DayCountConvention::Act365Fixed.day_count();
        assert_eq!(dc.year_fraction(date(2025, 1, 1), date(2026, 1, 1)), 1.0);
    }

    #[test]
    fn test_convention_enum() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);

        for convention in DayCountConvention::all() {
            let dc = convention.day_count();
            assert!(!dc.name().is_empty());

            let yf = dc.year_fraction(start, end);
            assert!(yf > 0.4 && yf < 0.6, "{convention}: {yf}");
        }
    }

    #[test]
    fn test_negative_interval_gives_negative_fraction() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);

        for convention in DayCountConvention::all() {
            let dc = convention.day_count();
            let forward = dc.year_fraction(start, end);
            let backward = dc.year_fraction(end, start);
            assert!(backward < 0.0, "{convention}");
            assert_relative_eq!(backward, -forward, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_same_date_is_zero() {
        let d = date(2024, 2, 29);
        for convention in DayCountConvention::all() {
            assert_eq!(convention.day_count().year_fraction(d, d), 0.0);
        }
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
        assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365.FIXED");
        assert_eq!(DayCountConvention::ActActIcma.name(), "ACT/ACT.ICMA");
        assert_eq!(DayCountConvention::Thirty360US.name(), "30/360");
        assert_eq!(DayCountConvention::Business252.name(), "BUS/252");
        assert_eq!(format!("{}", DayCountConvention::Thirty360E), "30E/360");
    }

    #[test]
    fn test_basis() {
        assert_eq!(DayCountConvention::Act360.basis(), 360);
        assert_eq!(DayCountConvention::ActActIsda.basis(), 365);
        assert_eq!(DayCountConvention::Business252.basis(), 252);
    }

    #[test]
    fn test_parse_aliases() {
        let cases = [
            ("ACT/360", DayCountConvention::Act360),
            ("Actual/360", DayCountConvention::Act360),
            ("ACT/365.FIXED", DayCountConvention::Act365Fixed),
            ("act/365f", DayCountConvention::Act365Fixed),
            ("ACT/365L", DayCountConvention::Act365Leap),
            ("ACT/ACT.ISDA", DayCountConvention::ActActIsda),
            ("ACT/ACT", DayCountConvention::ActActIsda),
            ("ACT/ACT.ISMA", DayCountConvention::ActActIcma),
            ("ACT/ACT.AFB", DayCountConvention::ActActAfb),
            ("BOND", DayCountConvention::Thirty360US),
            ("30E/360", DayCountConvention::Thirty360E),
            ("30E/360.ISDA", DayCountConvention::Thirty360EIsda),
            ("30/360 German", DayCountConvention::Thirty360German),
            ("BUS/252", DayCountConvention::Business252),
            ("  bus/252 ", DayCountConvention::Business252),
        ];

        for (name, expected) in cases {
            assert_eq!(DayCountConvention::parse(name).unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn test_parse_invalid() {
        let err = DayCountConvention::parse("ACT/999").unwrap_err();
        assert_eq!(err, CoreError::unsupported_convention("ACT/999"));
    }

    #[test]
    fn test_name_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DayCountConvention::Act365Fixed).unwrap();
        assert_eq!(json, "\"ACT/365.FIXED\"");

        let parsed: DayCountConvention = serde_json::from_str("\"30E/360.ISDA\"").unwrap();
        assert_eq!(parsed, DayCountConvention::Thirty360EIsda);
    }

    #[test]
    fn test_singletons_are_shared() {
        let a = DayCountConvention::Act360.day_count();
        let b = DayCountConvention::Act360.day_count();
        assert!(std::ptr::eq(
            a as *const dyn DayCount as *const u8,
            b as *const dyn DayCount as *const u8
        ));
    }
}
