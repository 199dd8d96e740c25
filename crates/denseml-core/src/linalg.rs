//! Matrix products.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | [`Matrix::matrix_multiply`] | O(m·k·n) |
//! | [`gemm`] (`C = alpha * A * B + beta * C`) | O(m·k·n) |
//!
//! Both use the naive triple loop with a fixed `ijk` order, so a product is
//! bit-for-bit reproducible for the same inputs.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Dot products of every row of `a` with every column of `b`, in row-major
/// order of the output. Shapes must already be validated.
fn multiply_kernel(a: &Matrix, b: &Matrix, mut emit: impl FnMut(usize, f32)) {
    let (m, k) = a.shape();
    let n = b.cols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = i * k;
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            emit(i * n + j, sum);
        }
    }
}

fn check_multiplicable(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// - `a` has shape `[m, k]`, `b` has shape `[k, n]`, `c` has shape `[m, n]`.
///
/// ```
/// # use denseml_core::Matrix;
/// # use denseml_core::linalg::gemm;
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
/// let mut c = Matrix::of_size(2, 2).unwrap();
/// gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn gemm(alpha: f32, a: &Matrix, b: &Matrix, beta: f32, c: &mut Matrix) -> Result<()> {
    check_multiplicable(a, b)?;
    if c.shape() != (a.rows(), b.cols()) {
        return Err(MatrixError::DimensionMismatch {
            left: (a.rows(), b.cols()),
            right: c.shape(),
        });
    }

    log::trace!("gemm {:?} x {:?}", a.shape(), b.shape());
    let c_data = c.as_mut_slice();
    multiply_kernel(a, b, |idx, sum| {
        c_data[idx] = alpha * sum + beta * c_data[idx];
    });
    Ok(())
}

impl Matrix {
    /// Conventional matrix product `self × other`.
    ///
    /// Requires `self.cols() == other.rows()`, otherwise returns
    /// [`MatrixError::DimensionMismatch`]. The result has shape
    /// `(self.rows(), other.cols())`.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_vec(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
    /// let c = a.matrix_multiply(&b).unwrap();
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    /// ```
    pub fn matrix_multiply(&self, other: &Matrix) -> Result<Matrix> {
        check_multiplicable(self, other)?;
        log::trace!("matrix_multiply {:?} x {:?}", self.shape(), other.shape());
        let mut out = vec![0.0; self.rows() * other.cols()];
        multiply_kernel(self, other, |idx, sum| out[idx] = sum);
        Matrix::from_vec(self.rows(), other.cols(), out)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mat(rows: usize, cols: usize, data: &[f32]) -> Matrix {
        Matrix::from_slice(rows, cols, data).unwrap()
    }

    fn sample_a() -> Matrix {
        mat(3, 3, &[3.0, 2.0, 9.0, 2.0, 1.0, 8.0, 4.0, 5.0, 2.0])
    }

    #[test]
    fn test_identity_both_sides() {
        let eye = Matrix::identity(3).unwrap();
        let a = sample_a();
        assert_eq!(eye.matrix_multiply(&a).unwrap(), a);
        assert_eq!(a.matrix_multiply(&eye).unwrap(), a);
    }

    #[test]
    fn test_3x3_product() {
        let b = mat(3, 3, &[0.0, 9.0, 4.0, 3.0, 1.0, 4.0, 1.0, 2.0, 0.0]);
        let expected = mat(3, 3, &[15.0, 47.0, 20.0, 11.0, 35.0, 12.0, 17.0, 45.0, 36.0]);
        assert_eq!(sample_a().matrix_multiply(&b).unwrap(), expected);
    }

    #[test]
    fn test_rectangular_product() {
        // A (2x3) @ B (3x2) = C (2x2)
        let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = mat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = a.matrix_multiply(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        // Row 0: 1*7+2*9+3*11 = 58, 1*8+2*10+3*12 = 64
        // Row 1: 4*7+5*9+6*11 = 139, 4*8+5*10+6*12 = 154
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_outer_product() {
        let col = Matrix::of(&[1.0, 2.0]).unwrap();
        let row = mat(1, 3, &[3.0, 4.0, 5.0]);
        let c = col.matrix_multiply(&row).unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert_eq!(c.as_slice(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::of_size(2, 3).unwrap();
        assert_eq!(
            a.matrix_multiply(&a),
            Err(MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (2, 3)
            })
        );
    }

    #[test]
    fn test_gemm_with_alpha_beta() {
        // C = 2 * I @ B + 3 * C
        let eye = Matrix::identity(2).unwrap();
        let b = mat(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let mut c = Matrix::full(2, 2, 1.0).unwrap();
        gemm(2.0, &eye, &b, 3.0, &mut c).unwrap();
        assert_eq!(c.as_slice(), &[13.0, 15.0, 17.0, 19.0]);
    }

    #[test]
    fn test_gemm_output_shape_mismatch() {
        let a = Matrix::of_size(2, 3).unwrap();
        let b = Matrix::of_size(3, 4).unwrap();
        let mut c = Matrix::of_size(2, 3).unwrap();
        assert!(gemm(1.0, &a, &b, 0.0, &mut c).is_err());
        assert!(c.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_gemm_matches_matrix_multiply() {
        let a = mat(2, 3, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        let b = mat(3, 2, &[0.7, 0.8, 0.9, 1.0, 1.1, 1.2]);
        let mut c = Matrix::of_size(2, 2).unwrap();
        gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
        assert_eq!(c, a.matrix_multiply(&b).unwrap());
    }
}
