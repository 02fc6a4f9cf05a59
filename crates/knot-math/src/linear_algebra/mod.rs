//! Linear algebra utilities.
//!
//! Dense decompositions for the small systems that arise in curve fitting:
//!
//! - [`LuDecomposition`]: LU with partial pivoting for square systems
//! - [`QrDecomposition`]: Householder QR for square and least squares systems
//! - [`solve_tridiagonal`]: Thomas algorithm for spline coefficient systems
//! - [`fit_polynomial`]: least squares polynomial calibration

mod least_squares;
mod lu;
mod qr;

pub use least_squares::{fit_polynomial, Polynomial};
pub use lu::LuDecomposition;
pub use qr::QrDecomposition;

use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// Dense matrix of `f64`. Dimensions are fixed at construction.
pub type Matrix = DMatrix<f64>;

/// Computes `sqrt(a^2 + b^2)` without intermediate overflow or underflow.
#[must_use]
pub fn hypot(a: f64, b: f64) -> f64 {
    if a.abs() > b.abs() {
        let r = b / a;
        a.abs() * (1.0 + r * r).sqrt()
    } else if b != 0.0 {
        let r = a / b;
        b.abs() * (1.0 + r * r).sqrt()
    } else {
        0.0
    }
}

/// Solves a tridiagonal system of equations with the Thomas algorithm.
///
/// The system has the form:
/// ```text
/// | d[0]  u[0]   0    ...      0     | | x[0]   |   | r[0]   |
/// | l[0]  d[1]  u[1]  ...      0     | | x[1]   |   | r[1]   |
/// |  0    l[1]  d[2]  ...      0     | | x[2]   | = | r[2]   |
/// | ...   ...   ...   ...     ...    | | ...    |   | ...    |
/// |  0     0     0   l[n-2]  d[n-1]  | | x[n-1] |   | r[n-1] |
/// ```
///
/// # Arguments
///
/// * `sub` - Sub-diagonal `l` (length n-1)
/// * `diag` - Main diagonal `d` (length n)
/// * `sup` - Super-diagonal `u` (length n-1)
/// * `rhs` - Right-hand side `r` (length n)
///
/// # Errors
///
/// Returns `MathError::SingularMatrix` when the sweep meets a zero pivot.
/// The system may still be solvable with pivoting.
pub fn solve_tridiagonal(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
) -> MathResult<Vec<f64>> {
    let n = diag.len();
    if n == 0 {
        return Ok(vec![]);
    }
    if sub.len() != n - 1 || sup.len() != n - 1 || rhs.len() != n {
        return Err(MathError::invalid_input(
            "Tridiagonal system has inconsistent dimensions",
        ));
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if diag[0].abs() < 1e-15 {
        return Err(MathError::SingularMatrix);
    }
    if n > 1 {
        c_prime[0] = sup[0] / diag[0];
    }
    d_prime[0] = rhs[0] / diag[0];

    // Forward elimination
    for i in 1..n {
        let denom = diag[i] - sub[i - 1] * c_prime[i - 1];
        if denom.abs() < 1e-15 {
            return Err(MathError::SingularMatrix);
        }

        if i < n - 1 {
            c_prime[i] = sup[i] / denom;
        }
        d_prime[i] = (rhs[i] - sub[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    Ok(x)
}

/// Assembles the dense form of a tridiagonal system.
pub(crate) fn tridiagonal_matrix(sub: &[f64], diag: &[f64], sup: &[f64]) -> Matrix {
    let n = diag.len();
    Matrix::from_fn(n, n, |i, j| {
        if i == j {
            diag[i]
        } else if i == j + 1 {
            sub[j]
        } else if j == i + 1 {
            sup[i]
        } else {
            0.0
        }
    })
}

/// Solves `A * x = b`.
///
/// Square systems use LU with partial pivoting; tall systems are solved
/// in the least squares sense with QR.
///
/// # Errors
///
/// Returns `MathError::IncompatibleDimensions` if `b` does not match `A`,
/// `MathError::SingularMatrix` or `MathError::RankDeficient` if `A` cannot
/// be solved, and `MathError::InvalidInput` if `A` has more columns than rows.
pub fn solve_linear_system(a: &Matrix, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    if a.nrows() != b.len() {
        return Err(MathError::incompatible(a.shape(), (b.len(), 1)));
    }

    if a.is_square() {
        LuDecomposition::new(a)?.solve_vector(b)
    } else {
        let rhs = Matrix::from_column_slice(b.len(), 1, b.as_slice());
        let x = QrDecomposition::new(a)?.solve(&rhs)?;
        Ok(x.column(0).into_owned())
    }
}

/// Inverts a square matrix.
///
/// # Errors
///
/// Returns `MathError::NotSquare` or `MathError::SingularMatrix`.
pub fn inverse(a: &Matrix) -> MathResult<Matrix> {
    LuDecomposition::new(a)?.inverse()
}
