#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::error::ScalarGradError;
    use crate::nn::init::Init;
    use crate::nn::layers::neuron::{Activation, Neuron};
    use crate::nn::module::Module;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BIAS: f64 = 6.881_373_587_019_543_2;

    #[test]
    fn test_neuron_new() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(3);
        let neuron: Neuron<f64> = Neuron::new(5, Activation::Tanh, &Init::default(), &mut rng)?;
        assert_eq!(neuron.in_features(), 5);
        assert_eq!(neuron.num_parameters(), 6);
        assert_eq!(neuron.activation(), Activation::Tanh);
        assert!(neuron
            .parameters()
            .iter()
            .all(|p| (-1.0..1.0).contains(&p.data())));
        Ok(())
    }

    #[test]
    fn test_linear_neuron_gradients() -> Result<(), ScalarGradError> {
        let graph: Graph<f64> = Graph::new();
        let neuron = Neuron::from_weights(vec![-3.0, 1.0], BIAS, Activation::Identity);
        let x1 = graph.leaf(2.0);
        let x2 = graph.leaf(0.0);
        let n = neuron.activate(&graph, &[x1, x2])?;
        assert_relative_eq!(n.value(), 0.881_373_587_019_543_2, epsilon = 1e-12);

        n.backward();
        neuron.pull_grads(&graph)?;
        assert_eq!(x1.grad(), -3.0);
        assert_eq!(x2.grad(), 1.0);
        assert_eq!(neuron.weights()[0].grad(), 2.0);
        assert_eq!(neuron.weights()[1].grad(), 0.0);
        assert_eq!(neuron.bias().grad(), 1.0);
        Ok(())
    }

    #[test]
    fn test_tanh_neuron_gradients() -> Result<(), ScalarGradError> {
        let graph: Graph<f64> = Graph::new();
        let neuron = Neuron::from_weights(vec![-3.0, 1.0], BIAS, Activation::Tanh);
        let x1 = graph.leaf(2.0);
        let x2 = graph.leaf(0.0);
        let outputs = neuron.forward(&graph, &[x1, x2])?;
        assert_eq!(outputs.len(), 1);
        let o = outputs[0];
        assert_relative_eq!(o.value(), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);

        o.backward();
        neuron.pull_grads(&graph)?;
        assert_relative_eq!(x1.grad(), -1.5, epsilon = 1e-9);
        assert_relative_eq!(x2.grad(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(neuron.weights()[0].grad(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(neuron.weights()[1].grad(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(neuron.bias().grad(), 0.5, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_input_size_mismatch() {
        let graph: Graph<f64> = Graph::new();
        let neuron = Neuron::from_weights(vec![1.0, 2.0, 3.0], 0.0, Activation::Tanh);
        let inputs = [graph.leaf(1.0), graph.leaf(2.0)];
        assert_eq!(
            neuron.activate(&graph, &inputs).map(|v| v.value()),
            Err(ScalarGradError::InputSizeMismatch {
                expected: 3,
                actual: 2,
                operation: "Neuron::forward".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_input_neuron_outputs_activated_bias() -> Result<(), ScalarGradError> {
        let graph: Graph<f64> = Graph::new();
        let neuron = Neuron::from_weights(Vec::new(), 0.5, Activation::Tanh);
        let out = neuron.activate(&graph, &[])?;
        assert_relative_eq!(out.value(), 0.5f64.tanh());
        Ok(())
    }

    #[test]
    fn test_parameters_order_and_zero_grad() -> Result<(), ScalarGradError> {
        let graph: Graph<f64> = Graph::new();
        let neuron = Neuron::from_weights(vec![0.1, 0.2], 0.3, Activation::Identity);
        let data: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
        assert_eq!(data, vec![0.1, 0.2, 0.3]);

        let inputs = [graph.leaf(1.0), graph.leaf(1.0)];
        neuron.activate(&graph, &inputs)?.backward();
        neuron.pull_grads(&graph)?;
        assert!(neuron.parameters().iter().all(|p| p.grad() == 1.0));
        neuron.zero_grad();
        assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
        Ok(())
    }
}
