use crate::autograd::graph::{Graph, Node, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;

/// Adds two nodes: `out = a + b`.
pub fn add_op<T: Float>(graph: &Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value_of(a)?;
    let b_value = graph.value_of(b)?;
    Ok(graph.push(a_value + b_value, Op::Add(a, b)))
}

/// d(a + b)/da = d(a + b)/db = 1: both operands receive the output gradient unchanged.
pub(crate) fn add_backward<T: Float>(nodes: &mut [Node<T>], a: usize, b: usize, grad_output: T) {
    nodes[a].grad = nodes[a].grad + grad_output;
    nodes[b].grad = nodes[b].grad + grad_output;
}
