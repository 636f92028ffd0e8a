use crate::autograd::graph::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use num_traits::Float;

/// Negates a node as `a * (-1)`.
///
/// Pushes a `-1` leaf and a `Mul` node; the gradient comes from the product rule.
pub fn neg_op<T: Float>(graph: &Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    graph.check(a)?;
    let minus_one = graph.push_leaf(-T::one());
    mul_op(graph, a, minus_one)
}
