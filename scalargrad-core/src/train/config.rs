//! Training configuration.

use crate::error::ScalarGradError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for model training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of full passes over the dataset.
    pub epochs: usize,
    /// Step size of gradient descent.
    pub learning_rate: f64,
    /// Log the loss every `log_every` epochs (and at the last one); `0` disables it.
    pub log_every: usize,
    /// Seed for parameter initialisation.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.01,
            log_every: 10,
            seed: 42,
        }
    }
}

impl TrainConfig {
    /// Creates a new TrainConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the logging period.
    pub fn log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Sets the initialisation seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deterministic generator seeded with [`TrainConfig::seed`].
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
