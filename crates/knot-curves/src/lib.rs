//! # Knot Curves
//!
//! Date-aware curves and surfaces on top of [`knot_math`].
//!
//! This crate provides:
//!
//! - **Curves**: [`DiscreteCurve`], sampled values indexed by date or by time
//!   in years, with any one-dimensional interpolation method
//! - **Surfaces**: [`DiscreteSurface`], a time by strike (or tenor) grid
//!   interpolated bilinearly
//! - **Configuration**: [`CurveConfig`](config::CurveConfig), JSON-backed curve
//!   settings with validation
//!
//! ## Quick Start
//!
//! ```rust
//! use knot_core::prelude::*;
//! use knot_curves::prelude::*;
//!
//! let base = Date::from_ymd(2020, 1, 1).unwrap();
//! let curve = DiscreteCurve::from_ids(
//!     base,
//!     "LinearInterpolation",
//!     false,
//!     &[base, Date::from_ymd(2021, 1, 1).unwrap(), Date::from_ymd(2022, 1, 1).unwrap()],
//!     vec![1.0, 0.95, 0.90],
//!     "ACT/365.FIXED",
//! )
//! .unwrap();
//!
//! // Clamped beyond the last date
//! assert_eq!(curve.value_at(5.0).unwrap(), 0.90);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod curve;
pub mod error;
pub mod surface;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::CurveConfig;
    pub use crate::curve::DiscreteCurve;
    pub use crate::error::{CurveError, CurveResult, Validate, ValidationError};
    pub use crate::surface::DiscreteSurface;
    pub use knot_math::extrapolation::ExtrapolationPolicy;
    pub use knot_math::interpolation::InterpolationMethod;
}

pub use curve::DiscreteCurve;
pub use error::{CurveError, CurveResult};
pub use surface::DiscreteSurface;
