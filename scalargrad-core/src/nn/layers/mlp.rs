use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::layers::neuron::Activation;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// Multi-layer perceptron: a chain of fully connected tanh layers.
///
/// `Mlp::new(3, &[4, 4, 1], ..)` builds `3 -> 4 -> 4 -> 1`.
pub struct Mlp<T = f64> {
    layers: Vec<Layer<T>>,
}

impl<T> Mlp<T>
where
    T: Float + SampleUniform,
    StandardNormal: Distribution<T>,
{
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        init: &Init<T>,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for &size in layer_sizes {
            layers.push(Layer::new(fan_in, size, Activation::Tanh, init, rng)?);
            fan_in = size;
        }
        log::debug!(
            "built MLP {} -> {:?} ({} parameters)",
            in_features,
            layer_sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }
}

impl<T: Float> Mlp<T> {
    /// Chains already constructed layers; each layer's fan-in must match the
    /// previous layer's width.
    pub fn from_layers(layers: Vec<Layer<T>>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].in_features() != pair[0].out_features() {
                return Err(ScalarGradError::InputSizeMismatch {
                    expected: pair[0].out_features(),
                    actual: pair[1].in_features(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl<T: Float> Module<T> for Mlp<T> {
    fn forward<'g>(
        &self,
        graph: &'g Graph<T>,
        inputs: &[Value<'g, T>],
    ) -> Result<Vec<Value<'g, T>>, ScalarGradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<&Parameter<T>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Mlp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mlp").field("layers", &self.layers).finish()
    }
}
