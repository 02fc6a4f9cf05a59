//! Extrapolation policy for queries outside the sampled range.
//!
//! | Policy | Out-of-domain result |
//! |--------|----------------------|
//! | [`Clamp`](ExtrapolationPolicy::Clamp) | nearest boundary sample, never fails |
//! | [`Continue`](ExtrapolationPolicy::Continue) | the edge interval of the interpolation model, unclamped |
//!
//! Inside the domain both policies give the same value.
//!
//! # Example
//!
//! ```rust
//! use knot_math::extrapolation::ExtrapolationPolicy;
//! use knot_math::space::{Bracket, Location};
//!
//! let xs = [1.0, 2.0, 3.0];
//! let below = Location::find(&xs, 0.0);
//!
//! assert_eq!(ExtrapolationPolicy::Clamp.resolve(below, 3), (Bracket::new(0, 0), false));
//! assert_eq!(ExtrapolationPolicy::Continue.resolve(below, 3), (Bracket::new(0, 1), true));
//! ```

use serde::{Deserialize, Serialize};

use crate::space::{Bracket, Location};

/// How a curve answers queries beyond its first or last sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExtrapolationPolicy {
    /// Return the nearest boundary sample.
    #[default]
    Clamp,
    /// Extend the edge interval of the interpolation model.
    Continue,
}

impl ExtrapolationPolicy {
    /// Maps the boolean extrapolation flag: `true` continues the model,
    /// `false` clamps.
    #[must_use]
    pub const fn from_flag(extrapolate: bool) -> Self {
        if extrapolate {
            Self::Continue
        } else {
            Self::Clamp
        }
    }

    /// True for [`Continue`](Self::Continue).
    #[must_use]
    pub const fn extrapolates(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Resolves a located query into the bracket to interpolate on.
    ///
    /// The flag is true when the bracket is an edge interval that the
    /// query lies outside of.
    #[must_use]
    pub fn resolve(&self, location: Location, len: usize) -> (Bracket, bool) {
        match self {
            Self::Continue if location.is_outside() && len >= 2 => {
                (location.segment(len), true)
            }
            _ => (location.bracket(len), false),
        }
    }
}

impl std::fmt::Display for ExtrapolationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "Clamp"),
            Self::Continue => write!(f, "Continue"),
        }
    }
}
