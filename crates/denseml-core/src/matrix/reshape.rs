//! Shape manipulation: transpose and reshape.

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Transpose into a new `cols x rows` matrix (copies the data).
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let v = Matrix::column_vector_of(&[1.0, 2.0, 3.0]).unwrap();
    /// let t = v.transpose();
    /// assert_eq!(t.shape(), (1, 3));
    /// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = vec![0.0; self.len()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        Matrix {
            data,
            rows: cols,
            cols: rows,
        }
    }

    /// Reinterpret the entries under a new shape without copying.
    ///
    /// Row-major entry order is unchanged. Consumes `self`, so the storage
    /// moves to the result and no other matrix can observe later writes.
    /// Returns [`MatrixError::SizeMismatch`] if `rows * cols` differs from
    /// the current element count, or [`MatrixError::InvalidShape`] if either
    /// dimension is zero or `rows * cols` overflows `usize`.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let m = Matrix::of(&[1.0, 2.0, 3.0, 4.0]).unwrap().resized_as(2, 2).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3.0);
    /// ```
    pub fn resized_as(mut self, rows: usize, cols: usize) -> Result<Matrix> {
        if super::check_shape(rows, cols)? != self.len() {
            return Err(MatrixError::SizeMismatch {
                from: self.shape(),
                to: (rows, cols),
            });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(self)
    }

    /// Reshaped copy; the source is left untouched.
    pub fn resized(&self, rows: usize, cols: usize) -> Result<Matrix> {
        self.clone().resized_as(rows, cols)
    }
}
