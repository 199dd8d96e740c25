//! Activation functions.
//!
//! Every activation is a pure `f32 -> f32` function behind the
//! [`ActivationFunction`] trait. [`Activation`] covers the stateless and
//! parametric variants; [`Softmax`] is separate because it normalizes by a
//! statistic read off a whole matrix.

use core::f32::consts::FRAC_2_PI;

use denseml_core::Matrix;

/// A scalar activation applied entry by entry.
pub trait ActivationFunction {
    /// Evaluate the activation at `x`.
    fn activate(&self, x: f32) -> f32;

    /// Apply the activation to every entry of `m`; the shape is preserved.
    fn activate_matrix(&self, m: &Matrix) -> Matrix {
        m.map(|x| self.activate(x))
    }
}

/// Stateless and parametric activations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Activation {
    /// 1 for `x >= 0`, else 0.
    BinaryStep,
    /// Identity.
    #[default]
    Linear,
    /// `1 / (1 + e^-x)`.
    Sigmoid,
    /// Hyperbolic tangent.
    Tanh,
    /// `max(0, x)`.
    Relu,
    /// `max(0.1 * x, x)`.
    LeakyRelu,
    /// `max(a * x, x)` for a caller-chosen slope `a`.
    ParametricRelu(f32),
    /// Exponential linear unit: `alpha * (e^x - 1)` for `x < 0`, else `x`.
    Elu(f32),
    /// `x * sigmoid(x)`.
    Swish,
    /// Gaussian error linear unit, tanh approximation.
    Gelu,
    /// Scaled ELU: `lambda * elu_alpha(x)`.
    Selu { alpha: f32, lambda: f32 },
}

impl Activation {
    /// Slope used by [`Activation::LeakyRelu`].
    pub const LEAKY_RELU_SLOPE: f32 = 0.1;

    /// Standard SELU constants from Klambauer et al. (2017).
    pub fn selu() -> Self {
        Self::Selu {
            alpha: 1.673_263_2,
            lambda: 1.050_701,
        }
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

fn parametric_relu(slope: f32, x: f32) -> f32 {
    (slope * x).max(x)
}

fn elu(alpha: f32, x: f32) -> f32 {
    if x < 0.0 { alpha * x.exp_m1() } else { x }
}

impl ActivationFunction for Activation {
    fn activate(&self, x: f32) -> f32 {
        match *self {
            Self::BinaryStep => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Linear => x,
            Self::Sigmoid => sigmoid(x),
            Self::Tanh => x.tanh(),
            Self::Relu => parametric_relu(0.0, x),
            Self::LeakyRelu => parametric_relu(Self::LEAKY_RELU_SLOPE, x),
            Self::ParametricRelu(slope) => parametric_relu(slope, x),
            Self::Elu(alpha) => elu(alpha, x),
            Self::Swish => x * sigmoid(x),
            Self::Gelu => {
                let inner = FRAC_2_PI.sqrt() * (x + 0.044_715 * x.powi(3));
                0.5 * x * (1.0 + inner.tanh())
            }
            Self::Selu { alpha, lambda } => lambda * elu(alpha, x),
        }
    }
}

/// Softmax over all entries of a matrix.
///
/// The normalizer `sum(e^x)` is computed once from the matrix given to
/// [`Softmax::new`]; [`ActivationFunction::activate`] then maps `x` to
/// `e^x / sum`.
///
/// ```
/// use denseml_core::Matrix;
/// use denseml_nn::{ActivationFunction, Softmax};
///
/// let logits = Matrix::of(&[1.0, 2.0, 3.0]).unwrap();
/// let probs = Softmax::new(&logits).activate_matrix(&logits);
/// assert!((probs.sum() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Softmax {
    sum_of_exponentials: f32,
}

impl Softmax {
    /// Capture the normalizer of `input`.
    pub fn new(input: &Matrix) -> Self {
        Self {
            sum_of_exponentials: input.sum_of(f32::exp),
        }
    }

    /// The cached `sum(e^x)`.
    pub fn normalizer(&self) -> f32 {
        self.sum_of_exponentials
    }
}

impl ActivationFunction for Softmax {
    fn activate(&self, x: f32) -> f32 {
        x.exp() / self.sum_of_exponentials
    }
}

/// Softmax of `input` normalized over its own entries.
pub fn softmax(input: &Matrix) -> Matrix {
    Softmax::new(input).activate_matrix(input)
}
