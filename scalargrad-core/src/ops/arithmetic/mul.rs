use crate::autograd::graph::{Graph, Node, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;

/// Multiplies two nodes: `out = a * b`.
pub fn mul_op<T: Float>(graph: &Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value_of(a)?;
    let b_value = graph.value_of(b)?;
    Ok(graph.push(a_value * b_value, Op::Mul(a, b)))
}

/// Product rule. `a` and `b` may be the same node (`x * x`), in which case it
/// receives both contributions.
pub(crate) fn mul_backward<T: Float>(nodes: &mut [Node<T>], a: usize, b: usize, grad_output: T) {
    let a_value = nodes[a].value;
    let b_value = nodes[b].value;
    nodes[a].grad = nodes[a].grad + grad_output * b_value;
    nodes[b].grad = nodes[b].grad + grad_output * a_value;
}
