//! Fully connected layer: `y = W × x + b`.
//!
//! `W` has shape `(output_size, input_size)`, `x` is an `(input_size, 1)`
//! column vector and `b` an `(output_size, 1)` column vector.
//!
//! The configured activation is stored but **not** applied by
//! [`Layer::forward`], and [`Layer::backward`] treats the layer as linear.
//! Callers that want a non-linearity apply [`Layer::activation`] to the
//! forward output themselves.

use denseml_core::{Matrix, MatrixError, Result};
use rand::Rng;

use crate::activation::Activation;
use crate::init::xavier_uniform;

/// Construction parameters for a [`Layer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerConfig {
    /// Length of the input column vector.
    pub input_size: usize,
    /// Length of the output column vector.
    pub output_size: usize,
    /// Exposed through [`Layer::activation`]; not applied by the layer.
    pub activation: Activation,
    /// Xavier gain used to scale the initial weights.
    pub gain: f32,
}

impl LayerConfig {
    /// Linear activation, gain 1.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            activation: Activation::Linear,
            gain: 1.0,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }
}

/// A dense layer holding its parameters, the gradients from the last
/// [`backward`](Layer::backward) call and the input cached by the last
/// [`forward`](Layer::forward) call.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use denseml_core::Matrix;
/// use denseml_nn::{Layer, LayerConfig};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut layer = Layer::new(LayerConfig::new(3, 2), &mut rng).unwrap();
///
/// let x = Matrix::of(&[1.0, 0.5, -1.0]).unwrap();
/// let y = layer.forward(&x).unwrap();
/// assert_eq!(y.shape(), (2, 1));
///
/// let upstream = layer.backward(&Matrix::of(&[0.1, -0.2]).unwrap()).unwrap();
/// assert_eq!(upstream.shape(), (3, 1));
/// layer.update(0.01).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Layer {
    config: LayerConfig,
    weights: Matrix,
    bias: Matrix,
    weight_gradients: Matrix,
    bias_gradient: f32,
    input_transpose: Matrix,
}

impl Layer {
    /// Build a layer with Xavier-initialized weights and a zero bias.
    ///
    /// Returns [`MatrixError::InvalidShape`] if either size is zero.
    pub fn new<R: Rng + ?Sized>(config: LayerConfig, rng: &mut R) -> Result<Self> {
        let LayerConfig {
            input_size,
            output_size,
            gain,
            ..
        } = config;
        let weights = xavier_uniform(rng, input_size, output_size, gain)?;
        log::debug!(
            "dense layer {input_size} -> {output_size}, activation {:?}",
            config.activation
        );
        Ok(Self {
            config,
            weights,
            bias: Matrix::column_vector(output_size)?,
            weight_gradients: Matrix::of_size(output_size, input_size)?,
            bias_gradient: 0.0,
            input_transpose: Matrix::of_size(1, input_size)?,
        })
    }

    pub fn input_size(&self) -> usize {
        self.config.input_size
    }

    pub fn output_size(&self) -> usize {
        self.config.output_size
    }

    /// The configured activation; not applied by [`Layer::forward`].
    pub fn activation(&self) -> Activation {
        self.config.activation
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// Weight gradient from the last [`Layer::backward`]; zero before it.
    pub fn weight_gradients(&self) -> &Matrix {
        &self.weight_gradients
    }

    /// Bias gradient from the last [`Layer::backward`]: the sum of the
    /// output losses.
    pub fn bias_gradient(&self) -> f32 {
        self.bias_gradient
    }

    /// Replace the weights. The new matrix must have the current shape.
    pub fn set_weights(&mut self, weights: Matrix) -> Result<()> {
        check_same_shape(&self.weights, &weights)?;
        self.weights = weights;
        Ok(())
    }

    /// Replace the bias. The new matrix must have the current shape.
    pub fn set_bias(&mut self, bias: Matrix) -> Result<()> {
        check_same_shape(&self.bias, &bias)?;
        self.bias = bias;
        Ok(())
    }

    /// Compute `W × input + b` and cache `inputᵀ` for [`Layer::backward`].
    ///
    /// `input` must be an `(input_size, 1)` column vector. On error the
    /// cached input is left unchanged.
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix> {
        log::trace!("forward {:?}", input.shape());
        let output = self.weights.matrix_multiply(input)?.plus(&self.bias)?;
        self.input_transpose = input.transpose();
        Ok(output)
    }

    /// Store gradients for `output_losses` and return the loss propagated to
    /// the layer input, `Wᵀ × output_losses`.
    ///
    /// The weight gradient is `output_losses × inputᵀ` (the shape of `W`)
    /// and the bias gradient is the scalar sum of `output_losses`. Nothing
    /// is stored if any product fails.
    pub fn backward(&mut self, output_losses: &Matrix) -> Result<Matrix> {
        log::trace!("backward {:?}", output_losses.shape());
        let upstream = self.weights.transpose().matrix_multiply(output_losses)?;
        let weight_gradients = output_losses.matrix_multiply(&self.input_transpose)?;

        self.weight_gradients = weight_gradients;
        self.bias_gradient = output_losses.sum();
        Ok(upstream)
    }

    /// Gradient-descent step: `W -= lr * dW`, `b -= lr * db`.
    pub fn update(&mut self, learning_rate: f32) -> Result<()> {
        log::trace!("update lr={learning_rate}");
        self.weights = self
            .weights
            .minus(&(learning_rate * &self.weight_gradients))?;
        self.bias = self.bias.minus_scalar(learning_rate * self.bias_gradient);
        Ok(())
    }
}

fn check_same_shape(current: &Matrix, replacement: &Matrix) -> Result<()> {
    if current.shape() != replacement.shape() {
        return Err(MatrixError::ShapeMismatch {
            left: current.shape(),
            right: replacement.shape(),
        });
    }
    Ok(())
}
