//! Dense real matrix math.

use std::ops::*;

use crate::lu::LuDecomposition;
use crate::{EPSILON, Float, MatrixError, Vec3, is_approx_zero};

/// Rectangular matrix with a fixed number of rows and columns.
///
/// Shape-changing operations return a [`MatrixError`] on mismatched
/// dimensions instead of padding or truncating.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Elements stored in **row-major** order.
    elems: Vec<Float>,
}

impl Matrix {
    /// Constructs a matrix with all zeros.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            elems: vec![0.0; rows * cols],
        }
    }
    /// Constructs an identity matrix.
    pub fn ident(n: usize) -> Self {
        let mut ret = Self::zero(n, n);
        for i in 0..n {
            ret.set(i, i, 1.0);
        }
        ret
    }
    /// Constructs a matrix from a function for each element, given `(row,
    /// col)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> Float) -> Self {
        let f = &f;
        Self {
            rows,
            cols,
            elems: (0..rows)
                .flat_map(|i| (0..cols).map(move |j| f(i, j)))
                .collect(),
        }
    }
    /// Constructs a matrix from a list of rows.
    ///
    /// Returns an error if the rows do not all have the same length.
    ///
    /// ```
    /// # use solidmath::prelude::*;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Float>>) -> Result<Self, MatrixError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());
        let mut elems = Vec::with_capacity(row_count * col_count);
        for row in rows {
            if row.len() != col_count {
                return Err(MatrixError::DimensionMismatch {
                    expected_rows: row_count,
                    expected_cols: col_count,
                    rows: row_count,
                    cols: row.len(),
                });
            }
            elems.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            elems,
        })
    }
    /// Constructs an N-by-1 column matrix.
    pub fn column(values: &[Float]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            elems: values.to_vec(),
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Returns whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
    /// Returns a slice of the elements in **row-major** order.
    pub fn as_slice(&self) -> &[Float] {
        &self.elems
    }

    /// Returns an element from the matrix.
    ///
    /// # Panics
    ///
    /// This method panics if `row >= self.rows() || col >= self.cols()`.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.elems[self.index_of(row, col)]
    }
    /// Returns a mutable reference to an element from the matrix.
    ///
    /// # Panics
    ///
    /// This method panics if `row >= self.rows() || col >= self.cols()`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Float {
        let i = self.index_of(row, col);
        &mut self.elems[i]
    }
    /// Sets an element of the matrix.
    ///
    /// # Panics
    ///
    /// This method panics if `row >= self.rows() || col >= self.cols()`.
    pub fn set(&mut self, row: usize, col: usize, value: Float) {
        *self.get_mut(row, col) = value;
    }
    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        assert!(col < self.cols, "col {col} out of range for {} cols", self.cols);
        row * self.cols + col
    }

    /// Returns a copy of a row.
    pub fn row(&self, row: usize) -> Vec<Float> {
        (0..self.cols).map(|j| self.get(row, j)).collect()
    }
    /// Returns a copy of a column.
    pub fn col(&self, col: usize) -> Vec<Float> {
        (0..self.rows).map(|i| self.get(i, col)).collect()
    }
    /// Overwrites a row. Returns an error if `values` has the wrong length.
    pub fn set_row(&mut self, row: usize, values: &[Float]) -> Result<(), MatrixError> {
        if values.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: 1,
                expected_cols: self.cols,
                rows: 1,
                cols: values.len(),
            });
        }
        for (j, &x) in values.iter().enumerate() {
            self.set(row, j, x);
        }
        Ok(())
    }
    /// Overwrites a column. Returns an error if `values` has the wrong
    /// length.
    pub fn set_col(&mut self, col: usize, values: &[Float]) -> Result<(), MatrixError> {
        if values.len() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: 1,
                rows: values.len(),
                cols: 1,
            });
        }
        for (i, &x) in values.iter().enumerate() {
            self.set(i, col, x);
        }
        Ok(())
    }
    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.cols {
                let (ia, ib) = (self.index_of(a, j), self.index_of(b, j));
                self.elems.swap(ia, ib);
            }
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols, self.rows, |i, j| self.get(j, i))
    }

    /// Returns the sum of two matrices with identical shape.
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(rhs)?;
        Ok(self.zip_map(rhs, |a, b| a + b))
    }
    /// Returns the difference of two matrices with identical shape.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(rhs)?;
        Ok(self.zip_map(rhs, |a, b| a - b))
    }
    /// Returns the product `self * rhs`. The number of columns of `self` must
    /// equal the number of rows of `rhs`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::IncompatibleShape {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }
        Ok(Matrix::from_fn(self.rows, rhs.cols, |i, j| {
            (0..self.cols).map(|k| self.get(i, k) * rhs.get(k, j)).sum()
        }))
    }

    fn ensure_same_shape(&self, rhs: &Matrix) -> Result<(), MatrixError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: rhs.rows,
                cols: rhs.cols,
            });
        }
        Ok(())
    }
    fn ensure_square(&self) -> Result<(), MatrixError> {
        match self.is_square() {
            true => Ok(()),
            false => Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }
    fn zip_map(&self, rhs: &Matrix, f: impl Fn(Float, Float) -> Float) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            elems: std::iter::zip(&self.elems, &rhs.elems)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Returns the matrix with one row and one column removed.
    ///
    /// # Panics
    ///
    /// This method panics if the row or column is out of range.
    #[must_use]
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix {
        assert!(row < self.rows && col < self.cols);
        Matrix::from_fn(self.rows - 1, self.cols - 1, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self.get(i, j)
        })
    }

    /// Returns the determinant of the matrix by recursive cofactor expansion
    /// along the first row.
    pub fn determinant(&self) -> Result<Float, MatrixError> {
        self.ensure_square()?;
        Ok(self.determinant_unchecked())
    }
    fn determinant_unchecked(&self) -> Float {
        match self.rows {
            0 => 1.0,
            1 => self.get(0, 0),
            n => (0..n)
                .map(|j| self.get(0, j) * self.cofactor_unchecked(0, j))
                .sum(),
        }
    }

    /// Returns the cofactor of an element: the signed determinant of the
    /// matrix with that element's row and column removed.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<Float, MatrixError> {
        self.ensure_square()?;
        Ok(self.cofactor_unchecked(row, col))
    }
    fn cofactor_unchecked(&self, row: usize, col: usize) -> Float {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.submatrix(row, col).determinant_unchecked()
    }

    /// Returns the matrix of cofactors.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        self.ensure_square()?;
        Ok(Matrix::from_fn(self.rows, self.cols, |i, j| {
            self.cofactor_unchecked(i, j)
        }))
    }
    /// Returns the adjugate, which is the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix, MatrixError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Returns the inverse of the matrix, computed as the adjugate divided by
    /// the determinant.
    ///
    /// ```
    /// # use solidmath::prelude::*;
    /// let m = row_matrix![[4, 7], [2, 6]];
    /// let inv = m.invert().unwrap();
    /// solidmath::assert_approx_eq!(m.try_mul(&inv).unwrap(), Matrix::ident(2));
    /// assert_eq!(row_matrix![[1, 2], [2, 4]].invert(), Err(MatrixError::NotInvertible));
    /// ```
    pub fn invert(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if is_approx_zero(&det) {
            return Err(MatrixError::NotInvertible);
        }
        Ok(self.adjugate()? / det)
    }

    /// Returns the LU decomposition of the matrix.
    pub fn decompose(&self) -> Result<LuDecomposition, MatrixError> {
        LuDecomposition::new(self)
    }
    /// Solves the linear system `self * x = b` for `x` using LU
    /// decomposition.
    pub fn system_solve(&self, b: &[Float]) -> Result<Vec<Float>, MatrixError> {
        self.decompose()?.solve(b)
    }

    /// Multiplies a 3-by-3 matrix by a column vector.
    ///
    /// # Panics
    ///
    /// This method panics if the matrix is not 3-by-3.
    pub fn apply_to(&self, v: Vec3) -> Vec3 {
        assert!(
            self.rows == 3 && self.cols == 3,
            "expected 3x3 matrix; got {}x{}",
            self.rows,
            self.cols,
        );
        let [x, y, z] = [0, 1, 2].map(|i| {
            self.get(i, 0) * v.x + self.get(i, 1) * v.y + self.get(i, 2) * v.z
        });
        Vec3::new(x, y, z)
    }
}

/// Constructs a matrix from rows.
///
/// # Panics
///
/// Panics if the rows have different lengths.
#[macro_export]
macro_rules! row_matrix {
    ($([$($n:expr),* $(,)?]),* $(,)?) => {
        match $crate::Matrix::from_rows(vec![$(vec![$($n as $crate::Float),*]),*]) {
            Ok(m) => m,
            Err(e) => panic!("bad matrix literal: {e}"),
        }
    };
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}
impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Mul<Float> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: Float) -> Self::Output {
        for x in &mut self.elems {
            *x *= rhs;
        }
        self
    }
}
impl Mul<Float> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Float) -> Self::Output {
        self.clone() * rhs
    }
}

impl Div<Float> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: Float) -> Self::Output {
        self * (1.0 / rhs)
    }
}
impl Div<Float> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: Float) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl approx::AbsDiffEq for Matrix {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && std::iter::zip(&self.elems, &other.elems)
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::*;

    #[test]
    fn test_matrix_multiply() {
        let m1 = row_matrix![[1, 0, 1], [2, 1, 1], [0, 1, 1], [0, 0, 0]];
        let m2 = row_matrix![[1, 2], [2, 3], [4, 2]];
        assert_eq!(
            m1.try_mul(&m2).unwrap(),
            row_matrix![[5, 4], [8, 9], [6, 5], [0, 0]],
        );
        assert_eq!(
            m1.try_mul(&Matrix::column(&[1.0, 2.0, 3.0])).unwrap(),
            row_matrix![[4], [7], [5], [0]],
        );
        assert_eq!(
            m2.try_mul(&m1),
            Err(MatrixError::IncompatibleShape {
                lhs_rows: 3,
                lhs_cols: 2,
                rhs_rows: 4,
                rhs_cols: 3,
            }),
        );
    }

    #[test]
    fn test_matrix_add_sub() {
        let a = row_matrix![[1, 2], [3, 4]];
        let b = row_matrix![[10, 20], [30, 40]];
        assert_eq!(a.try_add(&b).unwrap(), row_matrix![[11, 22], [33, 44]]);
        assert_eq!(b.try_sub(&a).unwrap(), row_matrix![[9, 18], [27, 36]]);
        assert!(matches!(
            a.try_add(&row_matrix![[1, 2, 3]]),
            Err(MatrixError::DimensionMismatch { .. }),
        ));
    }

    #[test]
    fn test_matrix_rows_and_cols() {
        let mut m = row_matrix![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.row(1), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.col(2), vec![3.0, 6.0]);
        m.set_row(0, &[7.0, 8.0, 9.0]).unwrap();
        m.set_col(1, &[0.0, 0.0]).unwrap();
        assert_eq!(m, row_matrix![[7, 0, 9], [4, 0, 6]]);
        assert!(m.set_row(0, &[1.0]).is_err());
        assert!(m.set_col(0, &[1.0]).is_err());
    }

    #[test]
    fn test_matrix_determinant() {
        assert_eq!(row_matrix![[4, 3], [6, 3]].determinant(), Ok(-6.0));
        assert_eq!(row_matrix![[3, 1], [7, -4]].determinant(), Ok(-19.0));
        assert_eq!(
            row_matrix![[-2, 2, -3], [-1, 1, 3], [2, 4, -1]].determinant(),
            Ok(54.0),
        );
        assert_eq!(
            row_matrix![[1, 5, -10, 3], [2, 6, 3, 1], [3, 8, 6, 4], [4, 7, 2, 1]].determinant(),
            Ok(-402.0),
        );
        assert_eq!(row_matrix![[7]].determinant(), Ok(7.0));
        assert_eq!(
            row_matrix![[1, 2, 3]].determinant(),
            Err(MatrixError::NotSquare { rows: 1, cols: 3 }),
        );
    }

    #[test]
    fn test_matrix_ident_determinant() {
        for n in 1..6 {
            assert_eq!(Matrix::ident(n).determinant(), Ok(1.0));
        }
    }

    #[test]
    fn test_matrix_cofactor_and_adjugate() {
        let m = row_matrix![[1, 2, 3], [0, 4, 5], [1, 0, 6]];
        assert_eq!(m.cofactor(0, 0), Ok(24.0));
        assert_eq!(m.cofactor(0, 1), Ok(5.0));
        assert_eq!(m.cofactor(1, 0), Ok(-12.0));
        assert_eq!(
            m.adjugate().unwrap(),
            row_matrix![[24, -12, -2], [5, 3, -5], [-4, 2, 4]],
        );
    }

    #[test]
    fn test_matrix_inverse() {
        let m = row_matrix![[1, 1, -3], [0, 1, 0], [4, 6, -10]];
        assert_approx_eq!(m.try_mul(&m.invert().unwrap()).unwrap(), Matrix::ident(3));
        assert_eq!(
            row_matrix![[1, 2], [3, 4], [5, 6]].invert(),
            Err(MatrixError::NotSquare { rows: 3, cols: 2 }),
        );
    }

    #[test]
    fn test_matrix_transpose() {
        assert_eq!(
            row_matrix![[1, 2, 3], [4, 5, 6]].transpose(),
            row_matrix![[1, 4], [2, 5], [3, 6]],
        );
    }

    #[test]
    fn test_matrix_submatrix() {
        let m = row_matrix![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        assert_eq!(m.submatrix(1, 1), row_matrix![[1, 3], [7, 9]]);
        assert_eq!(m.submatrix(0, 2), row_matrix![[4, 5], [7, 8]]);
    }

    fn invertible_matrix() -> impl Strategy<Value = Matrix> {
        (2_usize..=4)
            .prop_flat_map(|n| {
                proptest::collection::vec(-10.0..10.0_f64, n * n).prop_map(move |v| (n, v))
            })
            .prop_map(|(n, v)| Matrix::from_fn(n, n, |i, j| v[i * n + j]))
            .prop_filter("matrix must be well-conditioned", |m| {
                m.determinant().is_ok_and(|d| d.abs() > 0.5)
            })
    }

    proptest! {
        #[test]
        fn proptest_matrix_inverse(m in invertible_matrix()) {
            let n = m.rows();
            let product = m.try_mul(&m.invert().unwrap()).unwrap();
            prop_assert!(approx::abs_diff_eq!(product, Matrix::ident(n), epsilon = 1e-6));
        }
    }
}
