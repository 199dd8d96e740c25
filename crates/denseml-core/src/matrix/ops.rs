//! Element-wise arithmetic for [`Matrix`].
//!
//! Named methods return `Result` on shape mismatch. Operator impls cover:
//! - `Matrix +/- Matrix` (element-wise, same shape, panics on mismatch)
//! - `Matrix op f32` for `+ - * /`, and `f32 * Matrix`
//! - unary `-`
//!
//! There is no `Matrix * Matrix` operator; use
//! [`Matrix::matrix_multiply`] or [`Matrix::elementwise_multiply`].

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::Result;

use super::Matrix;

impl Matrix {
    /// Element-wise sum. Fails with `ShapeMismatch` unless shapes are equal.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise difference. Fails with `ShapeMismatch` unless shapes are
    /// equal.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Hadamard product. Fails with `ShapeMismatch` unless shapes are equal.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    /// let b = Matrix::from_vec(1, 3, vec![4.0, 5.0, 6.0]).unwrap();
    /// let c = a.elementwise_multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[4.0, 10.0, 18.0]);
    /// ```
    pub fn elementwise_multiply(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a * b)
    }

    /// Subtract `scalar` from every entry.
    pub fn minus_scalar(&self, scalar: f32) -> Matrix {
        self.map(|x| x - scalar)
    }

    /// Multiply every entry by `scalar`.
    pub fn times(&self, scalar: f32) -> Matrix {
        self.map(|x| x * scalar)
    }

    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    /// Sum of all entries, accumulated in row-major order.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Sum of `f` applied to every entry; same as `self.map(f).sum()`.
    ///
    /// ```
    /// # use denseml_core::Matrix;
    /// let m = Matrix::of(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.sum_of(|x| x * x), 14.0);
    /// ```
    pub fn sum_of<F>(&self, f: F) -> f32
    where
        F: FnMut(f32) -> f32,
    {
        self.data.iter().copied().map(f).sum()
    }
}

// ======================================================================
// Matrix + Matrix  (element-wise, same shape — panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $named:ident) => {
        impl $trait for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                (&self).$method(&rhs)
            }
        }

        impl $trait for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                match self.$named(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("element-wise {}: {e}", stringify!($method)),
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, plus);
impl_matrix_binop!(Sub, sub, minus);

// ======================================================================
// Matrix op scalar
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f32> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f32) -> Matrix {
                let mut m = self;
                for x in &mut m.data {
                    *x = *x $op rhs;
                }
                m
            }
        }

        impl $trait<f32> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f32) -> Matrix {
                self.map(|x| x $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

impl Mul<Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

// ======================================================================
// Negation
// ======================================================================

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}
