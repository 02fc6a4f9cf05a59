//! # Knot Core
//!
//! Core types shared by the Knot curve engine.
//!
//! This crate provides the foundational building blocks used throughout Knot:
//!
//! - **Types**: [`Date`], a calendar date newtype with the arithmetic the
//!   day count rules need
//! - **Day Count Conventions**: year fraction calculations that turn calendar
//!   dates into curve time coordinates
//!
//! ## Example
//!
//! ```rust
//! use knot_core::prelude::*;
//!
//! let start = Date::from_ymd(2020, 1, 1).unwrap();
//! let end = Date::from_ymd(2020, 7, 1).unwrap();
//!
//! let dc = DayCountConvention::parse("ACT/360").unwrap().day_count();
//! assert_eq!(dc.year_fraction(start, end), 182.0 / 360.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
