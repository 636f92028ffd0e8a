use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// No non-linearity: the neuron outputs its weighted sum.
    Identity,
}

impl Activation {
    pub fn apply<'g, T: Float>(&self, x: Value<'g, T>) -> Value<'g, T> {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }
}

/// A single unit computing `act(b + w_1 x_1 + ... + w_n x_n)`.
pub struct Neuron<T = f64> {
    weights: Vec<Parameter<T>>,
    bias: Parameter<T>,
    activation: Activation,
}

impl<T> Neuron<T>
where
    T: Float + SampleUniform,
    StandardNormal: Distribution<T>,
{
    /// Creates a neuron with `in_features` weights and a bias, all drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        activation: Activation,
        init: &Init<T>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = init
            .sample_n(rng, in_features)?
            .into_iter()
            .map(Parameter::new)
            .collect();
        let bias = Parameter::new(init.sample(rng)?);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }
}

impl<T: Float> Neuron<T> {
    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: Vec<T>, bias: T, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter<T> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass producing the neuron's single output.
    pub fn activate<'g>(
        &self,
        graph: &'g Graph<T>,
        inputs: &[Value<'g, T>],
    ) -> Result<Value<'g, T>, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut sum = self.bias.bind(graph);
        for (weight, &input) in self.weights.iter().zip(inputs) {
            sum = sum + weight.bind(graph) * input;
        }
        Ok(self.activation.apply(sum))
    }
}

impl<T: Float> Module<T> for Neuron<T> {
    fn forward<'g>(
        &self,
        graph: &'g Graph<T>,
        inputs: &[Value<'g, T>],
    ) -> Result<Vec<Value<'g, T>>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Neuron<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neuron")
            .field("weights", &self.weights)
            .field("bias", &self.bias)
            .field("activation", &self.activation)
            .finish()
    }
}
