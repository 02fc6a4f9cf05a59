//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during space construction, interpolation and
/// matrix decomposition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Coordinates are not strictly increasing.
    #[error("Coordinates must be strictly increasing: x[{index}] = {current} follows {previous}")]
    NonMonotonic {
        /// Index of the offending coordinate.
        index: usize,
        /// The coordinate before it.
        previous: f64,
        /// The offending coordinate.
        current: f64,
    },

    /// Two points share the same coordinates.
    #[error("Duplicate coordinate: {coordinate:?}")]
    DuplicateCoordinate {
        /// The repeated coordinate.
        coordinate: Vec<f64>,
    },

    /// A point or query has the wrong number of coordinates.
    #[error("Dimension mismatch: expected {expected} coordinate(s), got {actual}")]
    DimensionMismatch {
        /// Dimension required by the space.
        expected: usize,
        /// Dimension supplied.
        actual: usize,
    },

    /// Matrix dimensions are incompatible.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    IncompatibleDimensions {
        /// Rows in first matrix.
        rows1: usize,
        /// Columns in first matrix.
        cols1: usize,
        /// Rows in second matrix.
        rows2: usize,
        /// Columns in second matrix.
        cols2: usize,
    },

    /// A square matrix was required.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot solve")]
    SingularMatrix,

    /// Matrix does not have full column rank.
    #[error("Matrix is rank deficient: cannot solve")]
    RankDeficient,

    /// Interpolation method unknown or not valid for the space.
    #[error("Unsupported interpolation method '{method}': {reason}")]
    UnsupportedMethod {
        /// The method name.
        method: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Creates an unsupported method error.
    #[must_use]
    pub fn unsupported_method(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Creates an incompatible dimensions error from two shapes.
    #[must_use]
    pub fn incompatible(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::IncompatibleDimensions {
            rows1: lhs.0,
            cols1: lhs.1,
            rows2: rhs.0,
            cols2: rhs.1,
        }
    }
}
