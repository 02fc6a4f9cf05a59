//! Least squares polynomial calibration.

use super::{Matrix, QrDecomposition};
use crate::error::{MathError, MathResult};

/// A polynomial `c[0] + c[1] x + ... + c[d] x^d`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending powers.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Returns the coefficients in ascending powers.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree (zero for an empty or constant polynomial).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial with Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Evaluates the first derivative.
    pub fn derivative(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (k, c)| acc * x + k as f64 * c)
    }
}

/// Fits a polynomial of the given degree to `(xs, ys)` by least squares.
///
/// The Vandermonde system is solved with [`QrDecomposition`]; with exactly
/// `degree + 1` distinct points the fit interpolates.
///
/// # Example
///
/// ```rust
/// use knot_math::linear_algebra::fit_polynomial;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [1.0, 2.0, 5.0, 10.0]; // 1 + x^2
///
/// let poly = fit_polynomial(&xs, &ys, 2).unwrap();
/// assert!((poly.evaluate(4.0) - 17.0).abs() < 1e-10);
/// ```
///
/// # Errors
///
/// Returns `MathError::InvalidInput` for mismatched lengths,
/// `MathError::InsufficientData` with fewer than `degree + 1` points and
/// `MathError::RankDeficient` if the abscissae do not determine the fit.
pub fn fit_polynomial(xs: &[f64], ys: &[f64], degree: usize) -> MathResult<Polynomial> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    let terms = degree + 1;
    if xs.len() < terms {
        return Err(MathError::insufficient_data(terms, xs.len()));
    }

    let vandermonde = Matrix::from_fn(xs.len(), terms, |i, j| xs[i].powi(j as i32));
    let rhs = Matrix::from_column_slice(ys.len(), 1, ys);

    let solution = QrDecomposition::new(&vandermonde)?.solve(&rhs)?;

    Ok(Polynomial::new(solution.column(0).iter().copied().collect()))
}
