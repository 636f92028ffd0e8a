// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;
use std::str::FromStr;

/// Specifies the reduction applied to the per-sample squared errors:
/// 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(ScalarGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared error between predictions and scalar targets.
///
/// Builds `Σ (pred_i - target_i)^2` in the predictions' graph (divided by the
/// number of samples with [`Reduction::Mean`]); targets enter as leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate<'g, T: Float>(
        &self,
        predictions: &[Value<'g, T>],
        targets: &[T],
    ) -> Result<Value<'g, T>, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MseLoss::calculate".to_string(),
            });
        }
        let two = T::one() + T::one();
        let mut squared = predictions
            .iter()
            .zip(targets)
            .map(|(&prediction, &target)| (prediction - target).pow(two));
        let first = squared.next().ok_or_else(|| ScalarGradError::EmptyInput {
            operation: "MseLoss::calculate".to_string(),
        })?;
        let total = squared.fold(first, |acc, term| acc + term);

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let count = T::from(predictions.len()).ok_or_else(|| {
                    ScalarGradError::InvalidConfig(format!(
                        "cannot represent sample count {} in the scalar type",
                        predictions.len()
                    ))
                })?;
                Ok(total / count)
            }
        }
    }
}
