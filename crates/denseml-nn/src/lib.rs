//! `denseml-nn` — a small feed-forward building kit on top of
//! [`denseml_core::Matrix`].
//!
//! - [`activation`]: scalar activation functions and softmax
//! - [`init`]: Xavier weight initialization with an explicit RNG
//! - [`layer`]: a dense layer with forward, backward and update steps
//!
//! Errors are [`denseml_core::MatrixError`]: everything here is composed
//! from matrix operations and fails only through them.

pub mod activation;
pub mod init;
pub mod layer;

pub use activation::{Activation, ActivationFunction, Softmax, softmax};
pub use init::xavier_uniform;
pub use layer::{Layer, LayerConfig};

/// Items intended for glob-import: `use denseml_nn::prelude::*;`
pub mod prelude {
    pub use crate::activation::{Activation, ActivationFunction, Softmax, softmax};
    pub use crate::init::xavier_uniform;
    pub use crate::layer::{Layer, LayerConfig};
}
