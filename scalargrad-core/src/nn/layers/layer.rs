use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// A fully connected layer: `out_features` neurons reading the same inputs.
pub struct Layer<T = f64> {
    neurons: Vec<Neuron<T>>,
}

impl<T> Layer<T>
where
    T: Float + SampleUniform,
    StandardNormal: Distribution<T>,
{
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        init: &Init<T>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if out_features == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..out_features)
            .map(|_| Neuron::new(in_features, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }
}

impl<T: Float> Layer<T> {
    /// Builds a layer from already constructed neurons.
    pub fn from_neurons(neurons: Vec<Neuron<T>>) -> Result<Self, ScalarGradError> {
        let in_features = match neurons.first() {
            Some(neuron) => neuron.in_features(),
            None => {
                return Err(ScalarGradError::InvalidConfig(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.in_features() != in_features) {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: in_features,
                actual: odd.in_features(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }
}

impl<T: Float> Module<T> for Layer<T> {
    fn forward<'g>(
        &self,
        graph: &'g Graph<T>,
        inputs: &[Value<'g, T>],
    ) -> Result<Vec<Value<'g, T>>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Layer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer").field("neurons", &self.neurons).finish()
    }
}
