use crate::error::ScalarGradError;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

/// How freshly created parameters draw their initial value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init<T = f64> {
    /// Uniform on `[low, high)`.
    Uniform { low: T, high: T },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: T, std: T },
    /// Every parameter starts at the same value.
    Constant(T),
}

impl<T: Float> Default for Init<T> {
    /// Uniform on `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -T::one(),
            high: T::one(),
        }
    }
}

impl<T> Init<T>
where
    T: Float + SampleUniform,
    StandardNormal: Distribution<T>,
{
    /// Draws one initial value from `rng`.
    ///
    /// # Errors
    /// `InvalidConfig` for an empty uniform range, a non-finite mean or a
    /// negative/non-finite standard deviation.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T, ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low < high) || !low.is_finite() || !high.is_finite() {
                    return Err(ScalarGradError::InvalidConfig(
                        "uniform init requires finite bounds with low < high".to_string(),
                    ));
                }
                Ok(rng.gen_range(low..high))
            }
            Init::Normal { mean, std } => {
                // rand_distr accepts a negative std and flips the distribution.
                if !(std >= T::zero() && std.is_finite() && mean.is_finite()) {
                    return Err(ScalarGradError::InvalidConfig(
                        "normal init requires a finite mean and a finite, non-negative std"
                            .to_string(),
                    ));
                }
                let normal = Normal::new(mean, std).map_err(|e| {
                    ScalarGradError::InvalidConfig(format!("normal init: {}", e))
                })?;
                Ok(normal.sample(rng))
            }
            Init::Constant(value) => Ok(value),
        }
    }

    /// Draws `n` initial values.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<T>, ScalarGradError> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}
