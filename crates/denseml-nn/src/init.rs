//! Weight initialization.
//!
//! The generator is passed in explicitly so training runs can be made
//! reproducible with a seeded `rand::rngs::StdRng`.

use denseml_core::{Matrix, MatrixError, Result};
use rand::Rng;

/// Xavier/Glorot uniform initialization (Glorot & Bengio, 2010).
///
/// Samples every entry from `U[-a, a)` with
/// `a = gain * sqrt(6 / (fan_in + fan_out))`. The result has shape
/// `(fan_out, fan_in)`, matching a layer that computes `W × x`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use denseml_nn::init::xavier_uniform;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let w = xavier_uniform(&mut rng, 4, 2, 1.0).unwrap();
/// assert_eq!(w.shape(), (2, 4));
/// assert!(w.iter().all(|x| x.abs() <= 1.0));
/// ```
pub fn xavier_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    fan_in: usize,
    fan_out: usize,
    gain: f32,
) -> Result<Matrix> {
    if !gain.is_finite() {
        return Err(MatrixError::InvalidArgument {
            reason: "xavier gain must be finite",
        });
    }
    let weights = Matrix::of_size(fan_out, fan_in)?;
    let bound = xavier_bound(fan_in, fan_out, gain);
    Ok(weights.map(|_| rng.r#gen::<f32>() * 2.0 * bound - bound))
}

/// The half-width `gain * sqrt(6 / (fan_in + fan_out))` used by
/// [`xavier_uniform`].
pub fn xavier_bound(fan_in: usize, fan_out: usize, gain: f32) -> f32 {
    gain * (6.0 / (fan_in + fan_out) as f32).sqrt()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_xavier_bound() {
        assert_eq!(xavier_bound(3, 3, 1.0), 1.0);
        assert_eq!(xavier_bound(3, 3, 2.0), 2.0);
        assert!((xavier_bound(784, 256, 1.0) - 0.075_955).abs() < 1e-5);
    }

    #[test]
    fn test_xavier_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let w = xavier_uniform(&mut rng, 10, 5, 1.0).unwrap();
        assert_eq!(w.shape(), (5, 10));
        let bound = xavier_bound(10, 5, 1.0);
        assert!(w.iter().all(|&x| x.abs() <= bound));
        // 50 draws all landing on zero would mean the sampler never ran
        assert!(w.iter().any(|&x| x != 0.0));
    }

    #[test]
    fn test_xavier_is_reproducible() {
        let a = xavier_uniform(&mut StdRng::seed_from_u64(9), 3, 2, 1.0).unwrap();
        let b = xavier_uniform(&mut StdRng::seed_from_u64(9), 3, 2, 1.0).unwrap();
        let c = xavier_uniform(&mut StdRng::seed_from_u64(10), 3, 2, 1.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_xavier_zero_gain_is_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let w = xavier_uniform(&mut rng, 3, 3, 0.0).unwrap();
        assert!(w.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_xavier_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(xavier_uniform(&mut rng, 0, 3, 1.0).is_err());
        assert!(xavier_uniform(&mut rng, 3, 3, f32::NAN).is_err());
    }
}
