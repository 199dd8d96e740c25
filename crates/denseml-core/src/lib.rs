//! `denseml-core` — Foundation crate for denseml.
//!
//! Provides [`Matrix`], a dense row-major `f32` matrix with a fixed shape,
//! plus matrix products and random matrix creation. The neural-network crate
//! builds on top of this one.
//!
//! # Design
//!
//! - Shapes are validated eagerly; every fallible operation returns
//!   [`Result`] and never yields a partially computed matrix.
//! - Operator impls (`+`, `-`, scalar `*`) panic on shape mismatch. Matrix
//!   product and Hadamard product are only available as named methods
//!   ([`Matrix::matrix_multiply`], [`Matrix::elementwise_multiply`]).
//! - No two matrices share storage. [`Matrix::resized_as`] consumes its
//!   source instead of aliasing it.

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod random;

// Re-export key types at crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use denseml_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{MatrixError, Result};
    pub use crate::linalg::gemm;
    pub use crate::matrix::Matrix;
}
