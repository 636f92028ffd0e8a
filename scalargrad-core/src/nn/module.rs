use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::value::Value;
use num_traits::Float;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module<T: Float> {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph receiving the nodes of this pass. Parameters are bound
    ///   into it as leaves.
    /// * `inputs`: Input values, all belonging to `graph`.
    ///
    /// # Returns
    /// The output values of the module, or a `ScalarGradError` if the inputs do not
    /// match the module's fan-in.
    fn forward<'g>(
        &self,
        graph: &'g Graph<T>,
        inputs: &[Value<'g, T>],
    ) -> Result<Vec<Value<'g, T>>, ScalarGradError>;

    /// Returns every learnable parameter of the module, sub-modules included.
    fn parameters(&self) -> Vec<&Parameter<T>>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Clears the gradient stored in every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Copies every parameter's gradient out of `graph` after a backward pass.
    ///
    /// # Errors
    /// `ParameterNotBound` if a parameter took no part in the forward pass on `graph`.
    fn pull_grads(&self, graph: &Graph<T>) -> Result<(), ScalarGradError> {
        for param in self.parameters() {
            param.pull_grad(graph)?;
        }
        Ok(())
    }
}
