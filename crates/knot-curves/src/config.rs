//! Curve configuration.
//!
//! A [`CurveConfig`] names the interpolation method, extrapolation policy
//! and day count for a curve, can be stored as JSON, and builds a
//! [`DiscreteCurve`] from market samples.

use serde::{Deserialize, Serialize};

use knot_core::daycounts::DayCountConvention;
use knot_core::Date;
use knot_math::extrapolation::ExtrapolationPolicy;
use knot_math::interpolation::InterpolationMethod;

use crate::curve::DiscreteCurve;
use crate::error::{CurveResult, Validate, ValidationError};

// =============================================================================
// CURVE CONFIG
// =============================================================================

/// Settings for building a [`DiscreteCurve`].
///
/// # Example
///
/// ```rust
/// use knot_curves::config::CurveConfig;
///
/// let config = CurveConfig::from_json(r#"{"name": "USD.OIS", "interpolation": "Akima"}"#).unwrap();
/// assert_eq!(config.day_count.name(), "ACT/365.FIXED");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Curve name.
    pub name: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Interpolation between samples.
    pub interpolation: InterpolationMethod,

    /// Behaviour outside the sampled range.
    pub extrapolation: ExtrapolationPolicy,

    /// Day count converting dates to times.
    #[serde(default = "default_day_count")]
    pub day_count: DayCountConvention,
}

fn default_day_count() -> DayCountConvention {
    DayCountConvention::Act365Fixed
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            interpolation: InterpolationMethod::Linear,
            extrapolation: ExtrapolationPolicy::Clamp,
            day_count: default_day_count(),
        }
    }
}

impl CurveConfig {
    /// Creates a configuration with the default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation = method;
        self
    }

    /// Sets the extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, policy: ExtrapolationPolicy) -> Self {
        self.extrapolation = policy;
        self
    }

    /// Sets the day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` for malformed JSON or unknown values.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` if serialization fails.
    pub fn to_json(&self) -> CurveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the configuration and builds a curve from dated samples.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or anything
    /// [`DiscreteCurve::from_dates`] rejects.
    pub fn build_curve(
        &self,
        base_date: Date,
        dates: &[Date],
        values: Vec<f64>,
    ) -> CurveResult<DiscreteCurve> {
        self.validate_or_error()?;
        tracing::debug!(name = %self.name, "building curve from config");
        DiscreteCurve::from_dates(
            base_date,
            self.interpolation,
            self.extrapolation,
            dates,
            values,
            self.day_count,
        )
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.interpolation.dimension() != 1 {
            errors.push(ValidationError::with_rule(
                "interpolation",
                format!("{} is not a curve method", self.interpolation),
                "curve_method",
            ));
        }

        let boundaries = match self.interpolation {
            InterpolationMethod::FirstDerivativeSpline { left, right }
            | InterpolationMethod::SecondDerivativeSpline { left, right } => [left, right],
            _ => [0.0, 0.0],
        };
        if boundaries.iter().any(|b| !b.is_finite()) {
            errors.push(ValidationError::with_rule(
                "interpolation",
                "Spline boundary values must be finite",
                "finite_boundary",
            ));
        }

        errors
    }
}
