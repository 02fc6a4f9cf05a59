//! # Knot Math
//!
//! Numerical building blocks of the Knot curve engine.
//!
//! This crate provides:
//!
//! - **Spaces**: sampled points in one, two and three dimensions with
//!   `O(log n)` bracket search
//! - **Interpolation**: flat, linear, bilinear, trilinear, cubic spline,
//!   log-linear and zero-rate strategies behind one
//!   [`Interpolation`](interpolation::Interpolation) trait
//! - **Extrapolation**: clamp or continue beyond the sampled range
//! - **Linear Algebra**: LU and QR decompositions, tridiagonal and least
//!   squares solves
//! - **Primes**: a caller-owned prime cache and Halton points
//!
//! ## Example
//!
//! ```rust
//! use knot_math::prelude::*;
//!
//! let curve = InterpolatedCurve::from_arrays(
//!     vec![0.5, 1.0, 2.0, 5.0, 10.0],
//!     vec![0.030, 0.032, 0.035, 0.040, 0.042],
//!     InterpolationMethod::NaturalSpline,
//!     ExtrapolationPolicy::Clamp,
//! )
//! .unwrap();
//!
//! assert_eq!(curve.value_at(2.0).unwrap(), 0.035);
//! assert_eq!(curve.value_at(30.0).unwrap(), 0.042);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;
pub mod linear_algebra;
pub mod primes;
pub mod space;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::ExtrapolationPolicy;
    pub use crate::interpolation::{
        BilinearInterpolation, CubicSpline, CurveInterpolator, FlatInterpolation,
        InterpolatedCurve, InterpolatedSurface, InterpolatedVolume, Interpolation,
        InterpolationMethod, LinearInterpolation, LinearRateInterpolation, LogLinearInterpolation,
        LogRateSpline, PiecewiseConstantRateInterpolation, SplineBoundary,
        TrilinearInterpolation, ZeroRateInterpolation,
    };
    pub use crate::linear_algebra::{
        fit_polynomial, solve_linear_system, solve_tridiagonal, LuDecomposition, Matrix,
        Polynomial, QrDecomposition,
    };
    pub use crate::primes::PrimeCache;
    pub use crate::space::{Bracket, CurveSpace, Location, Point, SurfaceSpace, VolumeSpace};
}

pub use error::{MathError, MathResult};
