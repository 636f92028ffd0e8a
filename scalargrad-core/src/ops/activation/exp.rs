use crate::autograd::graph::{Graph, Node, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;

/// Exponential: `out = e^a`.
pub fn exp_op<T: Float>(graph: &Graph<T>, a: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value_of(a)?;
    Ok(graph.push(a_value.exp(), Op::Exp(a)))
}

/// d e^a/da = e^a, which is the node's own forward value.
pub(crate) fn exp_backward<T: Float>(nodes: &mut [Node<T>], a: usize, grad_output: T, output: T) {
    nodes[a].grad = nodes[a].grad + grad_output * output;
}
