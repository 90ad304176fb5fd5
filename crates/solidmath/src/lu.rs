//! Doolittle LU decomposition with partial pivoting.

use crate::{Float, Matrix, MatrixError, is_approx_zero, util};

/// LU decomposition of a square matrix `A`, such that `P * A = L * U` where
/// `P` is a permutation matrix, `L` is lower-triangular with ones on its
/// diagonal, and `U` is upper-triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    /// `L` and `U` packed into one matrix. The unit diagonal of `L` is
    /// implicit.
    lu: Matrix,
    /// Row `i` of `P * A` is row `permutation[i]` of `A`.
    permutation: Vec<usize>,
    /// `1.0` for an even number of row swaps; `-1.0` for odd.
    sign: Float,
}

impl LuDecomposition {
    /// Decomposes a square matrix.
    ///
    /// For each column, the row at or below the diagonal with the largest
    /// absolute value in that column becomes the pivot. Returns
    /// [`MatrixError::Unfactorable`] if every candidate pivot is
    /// approximately zero, and [`MatrixError::NotSquare`] for non-square
    /// input.
    pub fn new(matrix: &Matrix) -> Result<Self, MatrixError> {
        if !matrix.is_square() {
            return Err(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        let n = matrix.rows();
        let mut lu = matrix.clone();
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for j in 0..n {
            let pivot_row = util::max_by_key(j..n, |&i| lu.get(i, j).abs()).unwrap_or(j);
            if pivot_row != j {
                log::trace!("LU pivot: swapping rows {j} and {pivot_row}");
                lu.swap_rows(j, pivot_row);
                permutation.swap(j, pivot_row);
                sign = -sign;
            }

            let pivot = lu.get(j, j);
            if is_approx_zero(&pivot) {
                return Err(MatrixError::Unfactorable { column: j });
            }

            for i in j + 1..n {
                let factor = lu.get(i, j) / pivot;
                lu.set(i, j, factor);
                for k in j + 1..n {
                    let new_value = lu.get(i, k) - factor * lu.get(j, k);
                    lu.set(i, k, new_value);
                }
            }
        }

        Ok(Self {
            lu,
            permutation,
            sign,
        })
    }

    /// Returns the size of the decomposed matrix.
    pub fn ndim(&self) -> usize {
        self.lu.rows()
    }

    /// Returns the lower-triangular factor, which has ones on its diagonal.
    pub fn lower(&self) -> Matrix {
        Matrix::from_fn(self.ndim(), self.ndim(), |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Less => 0.0,
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Greater => self.lu.get(i, j),
        })
    }
    /// Returns the upper-triangular factor.
    pub fn upper(&self) -> Matrix {
        Matrix::from_fn(self.ndim(), self.ndim(), |i, j| match i <= j {
            true => self.lu.get(i, j),
            false => 0.0,
        })
    }
    /// Returns the row permutation: row `i` of `L * U` corresponds to row
    /// `permutation()[i]` of the original matrix.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
    /// Returns the permutation matrix `P` such that `P * A = L * U`.
    pub fn permutation_matrix(&self) -> Matrix {
        Matrix::from_fn(self.ndim(), self.ndim(), |i, j| {
            (self.permutation[i] == j) as u8 as Float
        })
    }
    /// Returns `1.0` if the permutation is even and `-1.0` if it is odd.
    pub fn sign(&self) -> Float {
        self.sign
    }

    /// Returns the determinant of the original matrix.
    pub fn determinant(&self) -> Float {
        self.sign * (0..self.ndim()).map(|i| self.lu.get(i, i)).product::<Float>()
    }

    /// Solves `A * x = b` for `x`.
    ///
    /// Back substitution skips any row whose diagonal entry in `U` is exactly
    /// zero, leaving that component of `x` at zero.
    pub fn solve(&self, b: &[Float]) -> Result<Vec<Float>, MatrixError> {
        let n = self.ndim();
        if b.len() != n {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: n,
                expected_cols: 1,
                rows: b.len(),
                cols: 1,
            });
        }

        // Forward substitution with the unit diagonal of `L`.
        let mut y: Vec<Float> = self.permutation.iter().map(|&i| b[i]).collect();
        for i in 1..n {
            let sum: Float = (0..i).map(|k| self.lu.get(i, k) * y[k]).sum();
            y[i] -= sum;
        }

        // Back substitution with `U`.
        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let diagonal = self.lu.get(i, i);
            if diagonal == 0.0 {
                log::debug!("LU solve: skipping row {i} with zero diagonal");
                continue;
            }
            let sum: Float = (i + 1..n).map(|k| self.lu.get(i, k) * x[k]).sum();
            x[i] = (y[i] - sum) / diagonal;
        }

        Ok(x)
    }
}
