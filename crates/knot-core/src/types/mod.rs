//! Domain types for curve construction.
//!
//! - [`Date`]: Calendar date used for curve pillars and query dates

pub(crate) mod date;

pub use date::Date;
