use crate::autograd::graph::{Graph, Node, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;

/// Hyperbolic tangent: `out = (e^2a - 1) / (e^2a + 1)`.
///
/// Computed with `Float::tanh`, which saturates to `±1` for large inputs instead of
/// overflowing the exponentials.
pub fn tanh_op<T: Float>(graph: &Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value_of(a)?;
    Ok(graph.push(a_value.tanh(), Op::Tanh(a)))
}

/// d tanh(a)/da = 1 - tanh(a)^2, read from the already computed output.
pub(crate) fn tanh_backward<T: Float>(nodes: &mut [Node<T>], a: usize, grad_output: T, output: T) {
    let local = T::one() - output * output;
    nodes[a].grad = nodes[a].grad + grad_output * local;
}
