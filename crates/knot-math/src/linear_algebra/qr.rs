//! QR decomposition by Householder reflections.

use super::{hypot, Matrix};
use crate::error::{MathError, MathResult};

/// QR decomposition of an `m x n` matrix with `m >= n`.
///
/// Factors `A = Q * R` where `Q` is `m x n` with orthonormal columns and
/// `R` is `n x n` upper triangular. Each column is reflected with a
/// Householder vector built from the sub-column norm; the diagonal of `R`
/// takes the sign opposite the pivot entry to avoid cancellation.
///
/// For `m > n`, [`solve`](Self::solve) returns the least squares solution.
///
/// # Example
///
/// ```rust
/// use knot_math::linear_algebra::{Matrix, QrDecomposition};
///
/// // Fit y = a + b x through (0, 1), (1, 3), (2, 5)
/// let a = Matrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// let y = Matrix::from_row_slice(3, 1, &[1.0, 3.0, 5.0]);
///
/// let coeffs = QrDecomposition::new(&a).unwrap().solve(&y).unwrap();
/// assert!((coeffs[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((coeffs[(1, 0)] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    qr: Matrix,
    r_diag: Vec<f64>,
    householder: Matrix,
    q: Matrix,
    r: Matrix,
}

impl QrDecomposition {
    /// Factors a matrix with at least as many rows as columns.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` if the matrix has more columns
    /// than rows.
    pub fn new(a: &Matrix) -> MathResult<Self> {
        let (m, n) = a.shape();
        if m < n {
            return Err(MathError::invalid_input(format!(
                "QR decomposition needs rows >= columns, got {m}x{n}"
            )));
        }

        let mut qr = a.clone();
        let mut r_diag = vec![0.0; n];

        for k in 0..n {
            let mut nrm = (k..m).fold(0.0, |acc, i| hypot(acc, qr[(i, k)]));

            if nrm != 0.0 {
                if qr[(k, k)] < 0.0 {
                    nrm = -nrm;
                }
                for i in k..m {
                    qr[(i, k)] /= nrm;
                }
                qr[(k, k)] += 1.0;

                // Apply the reflector to the remaining columns.
                for j in k + 1..n {
                    let s: f64 = (k..m).map(|i| qr[(i, k)] * qr[(i, j)]).sum();
                    let s = -s / qr[(k, k)];
                    for i in k..m {
                        let v = qr[(i, k)];
                        qr[(i, j)] += s * v;
                    }
                }
            }
            r_diag[k] = -nrm;
        }

        let householder = Matrix::from_fn(m, n, |i, j| if i >= j { qr[(i, j)] } else { 0.0 });

        let r = Matrix::from_fn(n, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Less => qr[(i, j)],
            std::cmp::Ordering::Equal => r_diag[i],
            std::cmp::Ordering::Greater => 0.0,
        });

        let mut q = Matrix::zeros(m, n);
        for k in (0..n).rev() {
            q[(k, k)] = 1.0;
            for j in k..n {
                if qr[(k, k)] != 0.0 {
                    let s: f64 = (k..m).map(|i| qr[(i, k)] * q[(i, j)]).sum();
                    let s = -s / qr[(k, k)];
                    for i in k..m {
                        q[(i, j)] += s * qr[(i, k)];
                    }
                }
            }
        }

        let decomposition = Self {
            qr,
            r_diag,
            householder,
            q,
            r,
        };
        if !decomposition.is_full_rank() {
            log::trace!("QR factorization of {m}x{n} matrix is rank deficient");
        }

        Ok(decomposition)
    }

    /// Returns the Householder vectors (lower trapezoidal, `m x n`).
    pub fn householder(&self) -> &Matrix {
        &self.householder
    }

    /// Returns the orthonormal factor (`m x n`).
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// Returns the upper triangular factor (`n x n`).
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// True iff no diagonal entry of `R` is zero.
    pub fn is_full_rank(&self) -> bool {
        self.r_diag.iter().all(|d| *d != 0.0)
    }

    /// Determinant of the original matrix, `None` unless it is square.
    ///
    /// Every Householder reflector has determinant -1, so
    /// `det(A) = prod(-R[k][k])`.
    pub fn determinant(&self) -> Option<f64> {
        let (m, n) = self.qr.shape();
        (m == n).then(|| self.r_diag.iter().map(|d| -d).product())
    }

    /// Solves `A * X = B` in the least squares sense.
    ///
    /// # Errors
    ///
    /// Returns `MathError::IncompatibleDimensions` if `B` has the wrong
    /// number of rows and `MathError::RankDeficient` if `A` is rank deficient.
    pub fn solve(&self, b: &Matrix) -> MathResult<Matrix> {
        let (m, n) = self.qr.shape();
        if b.nrows() != m {
            return Err(MathError::incompatible(self.qr.shape(), b.shape()));
        }
        if !self.is_full_rank() {
            return Err(MathError::RankDeficient);
        }

        let nx = b.ncols();
        let mut x = b.clone();

        // Compute Q^T * B from the stored reflectors.
        for k in 0..n {
            for j in 0..nx {
                let s: f64 = (k..m).map(|i| self.qr[(i, k)] * x[(i, j)]).sum();
                let s = -s / self.qr[(k, k)];
                for i in k..m {
                    x[(i, j)] += s * self.qr[(i, k)];
                }
            }
        }

        // Solve R * X = Q^T * B
        for k in (0..n).rev() {
            for j in 0..nx {
                x[(k, j)] /= self.r_diag[k];
            }
            for i in 0..k {
                for j in 0..nx {
                    x[(i, j)] -= x[(k, j)] * self.qr[(i, k)];
                }
            }
        }

        Ok(x.rows(0, n).into_owned())
    }
}
