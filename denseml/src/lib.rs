//! # denseml
//!
//! A minimal dense-matrix type and a small feed-forward layer, in pure Rust.
//!
//! One `use denseml::prelude::*;` gives you [`Matrix`](core::Matrix), its
//! error type and, with the `nn` feature, activations, Xavier initialization
//! and dense layers.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `nn` *(default)* | Activations, weight initialization, dense layers |
//!
//! ```
//! use denseml::prelude::*;
//!
//! let a = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let eye = Matrix::identity(2).unwrap();
//! assert_eq!(a.matrix_multiply(&eye).unwrap(), a);
//! ```

pub use denseml_core as core;
#[cfg(feature = "nn")]
pub use denseml_nn as nn;

/// Glob-import convenience: `use denseml::prelude::*;`
pub mod prelude {
    pub use denseml_core::prelude::*;
    #[cfg(feature = "nn")]
    pub use denseml_nn::prelude::*;
}
