use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update model parameters from the gradients pulled out of the last
/// backward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it once per iteration, before pulling the gradients of a new
    /// backward pass.
    fn zero_grad(&mut self);
}
