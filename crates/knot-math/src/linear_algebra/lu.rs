//! LU decomposition with partial pivoting.

use nalgebra::DVector;

use super::Matrix;
use crate::error::{MathError, MathResult};

/// LU decomposition of a square matrix with partial (row) pivoting.
///
/// Factors `A` into a unit lower triangular `L` and an upper triangular
/// `U` such that `A[piv, :] = L * U`. The factorization is a left-looking
/// (Crout/Doolittle dot-product) sweep over the columns, choosing at each
/// step the remaining row with the largest absolute value in the column.
///
/// Construction never fails on singular input; singularity only surfaces
/// from [`solve`](Self::solve).
///
/// # Example
///
/// ```rust
/// use knot_math::linear_algebra::{LuDecomposition, Matrix};
///
/// let a = Matrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
/// let lu = LuDecomposition::new(&a).unwrap();
///
/// assert!((lu.determinant() - 5.0).abs() < 1e-12);
/// let x = lu.solve(&Matrix::from_row_slice(2, 1, &[5.0, 5.0])).unwrap();
/// assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: Matrix,
    pivot: Vec<usize>,
    pivot_sign: f64,
    l: Matrix,
    u: Matrix,
}

impl LuDecomposition {
    /// Factors a square matrix.
    ///
    /// # Errors
    ///
    /// Returns `MathError::NotSquare` if the matrix is not square.
    pub fn new(a: &Matrix) -> MathResult<Self> {
        let (m, n) = a.shape();
        if m != n {
            return Err(MathError::NotSquare { rows: m, cols: n });
        }

        let mut lu = a.clone();
        let mut pivot: Vec<usize> = (0..m).collect();
        let mut pivot_sign = 1.0;
        let mut col = vec![0.0; m];

        for j in 0..n {
            for (i, c) in col.iter_mut().enumerate() {
                *c = lu[(i, j)];
            }

            // Apply the previous transformations to column j.
            for i in 0..m {
                let kmax = i.min(j);
                let s: f64 = (0..kmax).map(|k| lu[(i, k)] * col[k]).sum();
                col[i] -= s;
                lu[(i, j)] = col[i];
            }

            let mut p = j;
            for i in j + 1..m {
                if col[i].abs() > col[p].abs() {
                    p = i;
                }
            }

            if p != j {
                lu.swap_rows(p, j);
                pivot.swap(p, j);
                pivot_sign = -pivot_sign;
            }

            let diag = lu[(j, j)];
            if diag != 0.0 {
                for i in j + 1..m {
                    lu[(i, j)] /= diag;
                }
            }
        }

        let l = Matrix::from_fn(m, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => lu[(i, j)],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        });
        let u = Matrix::from_fn(n, n, |i, j| if i <= j { lu[(i, j)] } else { 0.0 });

        let decomposition = Self {
            lu,
            pivot,
            pivot_sign,
            l,
            u,
        };
        if !decomposition.is_non_singular() {
            log::trace!("LU factorization of {m}x{n} matrix is singular");
        }

        Ok(decomposition)
    }

    /// Returns the unit lower triangular factor.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// Returns the upper triangular factor.
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// Returns the row permutation: row `i` of `L * U` is row `pivot[i]` of `A`.
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// Returns the sign of the row permutation (+1 or -1).
    pub fn permutation_sign(&self) -> f64 {
        self.pivot_sign
    }

    /// Returns the dimension of the factored matrix.
    pub fn dimension(&self) -> usize {
        self.lu.nrows()
    }

    /// True iff every diagonal entry of `U` is non-zero.
    pub fn is_non_singular(&self) -> bool {
        (0..self.lu.ncols()).all(|j| self.lu[(j, j)] != 0.0)
    }

    /// Determinant of the original matrix.
    pub fn determinant(&self) -> f64 {
        (0..self.lu.ncols()).fold(self.pivot_sign, |det, j| det * self.lu[(j, j)])
    }

    /// Solves `A * X = B`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::IncompatibleDimensions` if `B` has the wrong
    /// number of rows and `MathError::SingularMatrix` if `A` is singular.
    pub fn solve(&self, b: &Matrix) -> MathResult<Matrix> {
        let n = self.lu.nrows();
        if b.nrows() != n {
            return Err(MathError::incompatible(self.lu.shape(), b.shape()));
        }
        if !self.is_non_singular() {
            return Err(MathError::SingularMatrix);
        }

        let nx = b.ncols();
        let mut x = Matrix::from_fn(n, nx, |i, j| b[(self.pivot[i], j)]);

        // Solve L * Y = B[piv, :]
        for k in 0..n {
            for i in k + 1..n {
                let factor = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] -= x[(k, j)] * factor;
                }
            }
        }

        // Solve U * X = Y
        for k in (0..n).rev() {
            let diag = self.lu[(k, k)];
            for j in 0..nx {
                x[(k, j)] /= diag;
            }
            for i in 0..k {
                let factor = self.lu[(i, k)];
                for j in 0..nx {
                    x[(i, j)] -= x[(k, j)] * factor;
                }
            }
        }

        Ok(x)
    }

    /// Solves `A * x = b` for a single right-hand side.
    pub fn solve_vector(&self, b: &DVector<f64>) -> MathResult<DVector<f64>> {
        let rhs = Matrix::from_column_slice(b.len(), 1, b.as_slice());
        let x = self.solve(&rhs)?;
        Ok(x.column(0).into_owned())
    }

    /// Inverse of the original matrix.
    pub fn inverse(&self) -> MathResult<Matrix> {
        let n = self.lu.nrows();
        self.solve(&Matrix::identity(n, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn permuted(a: &Matrix, pivot: &[usize]) -> Matrix {
        Matrix::from_fn(a.nrows(), a.ncols(), |i, j| a[(pivot[i], j)])
    }

    #[test]
    fn test_lu_reconstructs_permuted_matrix() {
        let a = Matrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
        let lu = LuDecomposition::new(&a).unwrap();

        let product = lu.l() * lu.u();
        let expected = permuted(&a, lu.pivot());
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(product[(i, j)], expected[(i, j)], epsilon = 1e-12);
            }
        }
        // Largest entry of the first column is pivoted to the top
        assert_eq!(lu.pivot()[0], 2);
    }

    #[test]
    fn test_lu_determinant() {
        let a = Matrix::from_row_slice(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert_relative_eq!(lu.determinant(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_solve() {
        let a = Matrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let lu = LuDecomposition::new(&a).unwrap();

        let x = lu.solve_vector(&DVector::from_vec(vec![5.0, 5.0])).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lu_needs_pivoting() {
        // Zero leading entry: fails without row exchanges
        let a = Matrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let lu = LuDecomposition::new(&a).unwrap();

        assert!(lu.is_non_singular());
        assert_relative_eq!(lu.permutation_sign(), -1.0);
        assert_relative_eq!(lu.determinant(), -1.0);

        let x = lu.solve_vector(&DVector::from_vec(vec![3.0, 7.0])).unwrap();
        assert_relative_eq!(x[0], 7.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_lu_singular() {
        let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let lu = LuDecomposition::new(&a).unwrap();

        assert!(!lu.is_non_singular());
        assert_eq!(lu.determinant(), 0.0);
        assert_eq!(
            lu.solve(&Matrix::identity(2, 2)).unwrap_err(),
            MathError::SingularMatrix
        );
    }

    #[test]
    fn test_lu_not_square() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            LuDecomposition::new(&a).unwrap_err(),
            MathError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_lu_rhs_mismatch() {
        let lu = LuDecomposition::new(&Matrix::identity(3, 3)).unwrap();
        assert!(matches!(
            lu.solve(&Matrix::zeros(2, 1)),
            Err(MathError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn test_lu_inverse() {
        let a = Matrix::from_row_slice(3, 3, &[4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0]);
        let inv = LuDecomposition::new(&a).unwrap().inverse().unwrap();

        let identity = &a * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }
}
