//! Dense 2-D matrix with fixed shape and contiguous row-major storage.
//!
//! The element at `(row, col)` lives at flat index `row * cols + col`. The
//! shape never changes after construction; operations that change the
//! logical shape (`transpose`, `resized_as`, `matrix_multiply`) return a new
//! [`Matrix`].

mod create;
mod display;
mod ops;
mod reshape;

use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};

/// A dense `rows x cols` matrix of `f32`.
///
/// The matrix owns its entries and `clone()` performs a deep copy, so two
/// distinct matrices never share storage.
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major data vector.
    ///
    /// Returns [`MatrixError::InvalidShape`] if either dimension is zero,
    /// `rows * cols` overflows `usize`, or `rows * cols != data.len()`.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 0).unwrap(), 4.0);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if check_shape(rows, cols)? != data.len() {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a flat row-major slice (copies the data).
    pub fn from_slice(rows: usize, cols: usize, data: &[f32]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of entries, always `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a matrix has at least one row and one column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix has a single column.
    #[inline]
    pub fn is_column_vector(&self) -> bool {
        self.cols == 1
    }

    /// All entries in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// All entries in row-major order, mutably. The shape cannot change
    /// through this slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the matrix and return the row-major entries.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        let flat = self.flat_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Overwrite the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Iterate over all entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.data.iter()
    }

    /// Iterate over `(row, col, value)` triples in row-major order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / cols, i % cols, v))
    }

    // ------------------------------------------------------------------
    // Map / zip
    // ------------------------------------------------------------------

    /// Apply `f` to every entry, returning a matrix of the same shape.
    ///
    /// Entries are visited in row-major order, so a stateful `f` (such as a
    /// random sampler) sees a deterministic sequence.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let doubled = m.map(|x| x * 2.0);
    /// assert_eq!(doubled.shape(), (2, 3));
    /// assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    /// ```
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f32) -> f32,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply `f` pairwise to two matrices of identical shape.
    ///
    /// Returns [`MatrixError::ShapeMismatch`] when the shapes differ.
    pub fn zip_map<F>(&self, other: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f32, f32) -> f32,
    {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    /// # Panics
    ///
    /// Panics if `(row, col)` is out of range.
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        match self.flat_index(row, col) {
            Ok(flat) => &self.data[flat],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        match self.flat_index(row, col) {
            Ok(flat) => &mut self.data[flat],
            Err(e) => panic!("{e}"),
        }
    }
}

/// Exact comparison: same shape and pairwise `==` entries, no tolerance.
/// Like `f32`, a matrix holding `NaN` is not equal to itself.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        for &x in &self.data {
            // 0.0 == -0.0, so both must feed the hasher the same bits.
            let bits = if x == 0.0 { 0 } else { x.to_bits() };
            bits.hash(state);
        }
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Validate a shape and return its element count.
pub(crate) fn check_shape(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape {
            rows,
            cols,
            reason: "rows and cols must be positive",
        });
    }
    rows.checked_mul(cols).ok_or(MatrixError::InvalidShape {
        rows,
        cols,
        reason: "rows * cols overflows usize",
    })
}
