use crate::autograd::graph::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use num_traits::Float;

/// Divides two nodes as `a * b^(-1)`.
///
/// A zero-valued divisor is not an error: `b^(-1)` is `inf` and the result
/// follows IEEE-754 (`inf`, `-inf`, or `NaN` for `0 / 0`), and so do the
/// gradients.
pub fn div_op<T: Float>(graph: &Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    graph.check(a)?;
    graph.check(b)?;
    let reciprocal = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, reciprocal)
}
