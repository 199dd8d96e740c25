//! Random matrix creation.
//!
//! All functions take the generator explicitly (`&mut R` where
//! `R: rand::Rng`); there is no hidden global or thread-local state, so a
//! seeded generator reproduces the same matrix. Entries are drawn in
//! row-major order.

use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Create a `rows x cols` matrix with entries uniform in [`low`, `high`).
///
/// Returns an error if `low >= high` or either bound is not finite.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use denseml_core::random::uniform;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let m = uniform(&mut rng, 2, 3, -1.0, 1.0).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert!(m.iter().all(|&x| (-1.0..1.0).contains(&x)));
/// ```
pub fn uniform<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    low: f32,
    high: f32,
) -> Result<Matrix> {
    if !low.is_finite() || !high.is_finite() {
        return Err(MatrixError::InvalidArgument {
            reason: "uniform bounds must be finite",
        });
    }
    if low >= high {
        return Err(MatrixError::InvalidArgument {
            reason: "uniform requires low < high",
        });
    }
    Ok(Matrix::of_size(rows, cols)?.map(|_| rng.gen_range(low..high)))
}

/// Create a `rows x cols` matrix of samples from N(`mean`, `std_dev`).
///
/// Uses the Box-Muller transform. Returns an error if `std_dev` is negative
/// or not finite.
pub fn normal<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    mean: f32,
    std_dev: f32,
) -> Result<Matrix> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(MatrixError::InvalidArgument {
            reason: "normal requires a finite, non-negative std_dev",
        });
    }
    Ok(Matrix::of_size(rows, cols)?.map(|_| mean + std_dev * standard_normal_sample(rng)))
}

fn standard_normal_sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    // u1 in (0, 1] keeps ln() finite
    let u1: f32 = 1.0 - rng.r#gen::<f32>();
    let u2: f32 = rng.r#gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * core::f32::consts::PI * u2).cos()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uniform_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = uniform(&mut rng, 3, 4, 2.0, 5.0).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert!(m.iter().all(|&x| (2.0..5.0).contains(&x)));
    }

    #[test]
    fn test_uniform_is_reproducible() {
        let a = uniform(&mut StdRng::seed_from_u64(7), 2, 2, 0.0, 1.0).unwrap();
        let b = uniform(&mut StdRng::seed_from_u64(7), 2, 2, 0.0, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_invalid_args() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(uniform(&mut rng, 2, 2, 1.0, 1.0).is_err());
        assert!(uniform(&mut rng, 2, 2, 0.0, f32::INFINITY).is_err());
        assert!(uniform(&mut rng, 0, 2, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = StdRng::seed_from_u64(123);
        let m = normal(&mut rng, 100, 100, 3.0, 2.0).unwrap();
        let mean = m.sum() / m.len() as f32;
        let var = m.sum_of(|x| (x - mean) * (x - mean)) / m.len() as f32;
        assert!((mean - 3.0).abs() < 0.1, "mean = {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std = {}", var.sqrt());
    }

    #[test]
    fn test_normal_zero_std_is_constant() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = normal(&mut rng, 2, 2, 1.5, 0.0).unwrap();
        assert!(m.iter().all(|&x| x == 1.5));
    }

    #[test]
    fn test_normal_invalid_std() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(normal(&mut rng, 2, 2, 0.0, -1.0).is_err());
        assert!(normal(&mut rng, 2, 2, 0.0, f32::NAN).is_err());
    }
}
