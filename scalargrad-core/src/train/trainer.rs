//! Training loop implementation.

use super::TrainConfig;
use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::losses::{MseLoss, Reduction};
use crate::nn::Module;
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;
use num_traits::Float;

/// Outcome of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport<T> {
    /// Summed squared error of every epoch, measured before that epoch's update.
    pub loss_history: Vec<T>,
}

impl<T: Float> TrainReport<T> {
    pub fn final_loss(&self) -> Option<T> {
        self.loss_history.last().copied()
    }
}

/// Trains a single-output `model` on `(inputs[i], targets[i])` pairs with plain
/// gradient descent on the summed squared error.
///
/// Every epoch builds a fresh graph, so node values stay immutable while the
/// parameters move between epochs: forward all samples, zero the parameter
/// gradients, backpropagate the loss, pull the gradients and step.
pub fn fit<T, M>(
    model: &M,
    inputs: &[Vec<T>],
    targets: &[T],
    config: &TrainConfig,
) -> Result<TrainReport<T>, ScalarGradError>
where
    T: Float,
    M: Module<T> + ?Sized,
{
    config.validate()?;
    if inputs.is_empty() {
        return Err(ScalarGradError::EmptyInput {
            operation: "fit".to_string(),
        });
    }
    if inputs.len() != targets.len() {
        return Err(ScalarGradError::InputSizeMismatch {
            expected: inputs.len(),
            actual: targets.len(),
            operation: "fit".to_string(),
        });
    }
    let lr = T::from(config.learning_rate).ok_or_else(|| {
        ScalarGradError::InvalidConfig(format!(
            "learning rate {} does not fit the scalar type",
            config.learning_rate
        ))
    })?;

    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(model.parameters(), lr)?;
    let mut loss_history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let graph = Graph::new();
        let mut predictions = Vec::with_capacity(inputs.len());
        for sample in inputs {
            let leaves: Vec<Value<'_, T>> = sample.iter().map(|&x| graph.leaf(x)).collect();
            let outputs = model.forward(&graph, &leaves)?;
            match outputs.as_slice() {
                [prediction] => predictions.push(*prediction),
                other => {
                    return Err(ScalarGradError::InputSizeMismatch {
                        expected: 1,
                        actual: other.len(),
                        operation: "fit (model outputs per sample)".to_string(),
                    })
                }
            }
        }

        let loss = loss_fn.calculate(&predictions, targets)?;
        optimizer.zero_grad();
        loss.backward();
        model.pull_grads(&graph)?;
        optimizer.step()?;

        let loss_value = loss.value();
        loss_history.push(loss_value);
        if !loss_value.is_finite() {
            log::warn!("Epoch {}: loss is not finite", epoch + 1);
        }
        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch + 1 == config.epochs) {
            log::info!(
                "Epoch {}/{}: loss = {:.6} ({} nodes)",
                epoch + 1,
                config.epochs,
                loss_value.to_f64().unwrap_or(f64::NAN),
                graph.len()
            );
        }
    }

    Ok(TrainReport { loss_history })
}
