//! Matrix factories: zero matrices, column vectors, identity.

use crate::error::{MatrixError, Result};

use super::{Matrix, check_shape};

impl Matrix {
    /// Create a `rows x cols` matrix with every entry zero.
    ///
    /// Returns [`MatrixError::InvalidShape`] if either dimension is zero.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let m = Matrix::of_size(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn of_size(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, 0.0)
    }

    /// Create a `rows x cols` matrix with every entry set to `value`.
    pub fn full(rows: usize, cols: usize, value: f32) -> Result<Self> {
        let len = check_shape(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Create an `n x 1` column vector holding `values` in order.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let v = Matrix::of(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.shape(), (3, 1));
    /// assert_eq!(v.get(2, 0).unwrap(), 3.0);
    /// ```
    pub fn of(values: &[f32]) -> Result<Self> {
        Self::from_slice(values.len(), 1, values)
    }

    /// Create a zero column vector of length `size`.
    pub fn column_vector(size: usize) -> Result<Self> {
        Self::of_size(size, 1)
    }

    /// Create a column vector from literal values; same as [`Matrix::of`].
    pub fn column_vector_of(values: &[f32]) -> Result<Self> {
        Self::of(values)
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let eye = Matrix::identity(3).unwrap();
    /// assert_eq!(eye.get(1, 1).unwrap(), 1.0);
    /// assert_eq!(eye.get(0, 1).unwrap(), 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::of_size(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }
}

impl TryFrom<Vec<Vec<f32>>> for Matrix {
    type Error = MatrixError;

    /// Build a matrix from nested rows; every row must have the same length.
    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(MatrixError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
                reason: "rows have different lengths",
            });
        }
        Self::from_vec(n_rows, n_cols, rows.into_iter().flatten().collect())
    }
}
