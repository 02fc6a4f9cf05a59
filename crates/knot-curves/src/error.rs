//! Error types for curve construction and configuration.

use knot_core::{CoreError, Date};
use knot_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Coordinate and value arrays differ in length.
    #[error("Length mismatch: {coordinates} coordinates, {values} values")]
    LengthMismatch {
        /// Number of dates or times.
        coordinates: usize,
        /// Number of values.
        values: usize,
    },

    /// Dates are not strictly increasing.
    #[error("Non-monotonic dates at index {index}: {previous} >= {current}")]
    NonMonotonicDates {
        /// Index where the ordering breaks.
        index: usize,
        /// The date before `index`.
        previous: Date,
        /// The date at `index`.
        current: Date,
    },

    /// Configuration could not be read or written.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the failure.
        reason: String,
    },

    /// A configuration field failed validation.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// Field name.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Several configuration fields failed validation.
    #[error("{} validation errors, first: {}", .0.len(), .0.first().map(ToString::to_string).unwrap_or_default())]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Invalid input that fits no other category.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Failure in the interpolation or linear algebra layer.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Failure in dates or day counts.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(coordinates: usize, values: usize) -> Self {
        Self::LengthMismatch {
            coordinates,
            values,
        }
    }

    /// Creates a non-monotonic dates error.
    #[must_use]
    pub fn non_monotonic_dates(index: usize, previous: Date, current: Date) -> Self {
        Self::NonMonotonicDates {
            index,
            previous,
            current,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates a single-field validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// A single failed validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
    /// Name of the violated rule, if any.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a validation error without a rule name.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error tagged with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "{}: {} (rule: {})", self.field, self.message, rule),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Types that can check their own consistency.
pub trait Validate {
    /// Every failed check; empty when valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// True if [`validate`](Self::validate) finds nothing.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Folds the failed checks into a single error.
    fn validate_or_error(&self) -> CurveResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let ValidationError { field, message, .. } = errors.remove(0);
                Err(CurveError::Validation { field, message })
            }
            _ => Err(CurveError::MultipleValidationErrors(errors)),
        }
    }
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {err}"))
    }
}
