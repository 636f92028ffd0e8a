use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use num_traits::Float;
use std::fmt;

/// Implements plain gradient descent: `p <- p - lr * grad(p)`.
pub struct Sgd<'p, T = f64> {
    params: Vec<&'p Parameter<T>>,
    lr: T,
}

impl<'p, T: Float> Sgd<'p, T> {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize, typically `module.parameters()`.
    /// * `lr`: The learning rate; must be finite and positive.
    pub fn new(
        params: impl IntoIterator<Item = &'p Parameter<T>>,
        lr: T,
    ) -> Result<Self, ScalarGradError> {
        check_lr(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }

    pub fn lr(&self) -> T {
        self.lr
    }

    pub fn set_lr(&mut self, lr: T) -> Result<(), ScalarGradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }

    pub fn params(&self) -> &[&'p Parameter<T>] {
        &self.params
    }
}

impl<'p, T: Float> Optimizer for Sgd<'p, T> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        let mut non_finite = 0usize;
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            param.set_data(param.data() - self.lr * grad);
        }
        if non_finite > 0 {
            log::warn!(
                "SGD step applied {} non-finite gradient(s) out of {}",
                non_finite,
                self.params.len()
            );
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

impl<'p, T: Copy + fmt::Debug> fmt::Debug for Sgd<'p, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sgd")
            .field("params", &self.params.len())
            .field("lr", &self.lr)
            .finish()
    }
}

fn check_lr<T: Float>(lr: T) -> Result<(), ScalarGradError> {
    if !(lr.is_finite() && lr > T::zero()) {
        return Err(ScalarGradError::InvalidConfig(
            "learning rate must be finite and positive".to_string(),
        ));
    }
    Ok(())
}
