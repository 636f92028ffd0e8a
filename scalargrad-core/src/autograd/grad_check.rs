use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps) = {value_plus}, f(x-eps) = {value_minus}")]
    NonFiniteNumerical {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Finite-difference step must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
}

/// Checks backward-pass gradients against central finite differences.
///
/// `func` is evaluated on a fresh graph whose leaves hold `inputs`; its output is
/// differentiated with [`Value::backward`]. For every input `x_i` the analytical
/// gradient is compared with `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)`, using
/// `tolerance` both as absolute and as relative bound.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&[Value<'g, f64>]) -> Result<Value<'g, f64>, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Value<'_, f64>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        let value_plus = evaluate(&func, inputs, input_index, epsilon)?;
        let value_minus = evaluate(&func, inputs, input_index, -epsilon)?;
        let numerical = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical.is_finite() {
            return Err(GradCheckError::NonFiniteNumerical {
                input_index,
                value_plus,
                value_minus,
            });
        }
        log::trace!(
            "grad check input {}: analytical {} numerical {}",
            input_index,
            analytical,
            numerical
        );
        if !relative_eq!(analytical, numerical, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}

/// Evaluates `func` with `inputs[index]` shifted by `delta`, on its own graph.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, ScalarGradError>
where
    F: for<'g> Fn(&[Value<'g, f64>]) -> Result<Value<'g, f64>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_, f64>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&leaves)?;
    Ok(output.value())
}
