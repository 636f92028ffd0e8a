use crate::autograd::graph::{Graph, Node, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;

/// Raises a node to a constant power: `out = a^exponent`.
///
/// The exponent is a plain number and never receives a gradient.
///
/// Domain errors follow IEEE-754 `powf`: `0^-1` is `inf`, a negative base with a
/// fractional exponent is `NaN`. The same holds for the derivative
/// `exponent * a^(exponent - 1)`, so a zero base with `exponent < 1` yields an
/// infinite or NaN gradient rather than an error.
pub fn pow_op<T: Float>(graph: &Graph<T>, a: NodeId, exponent: T) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value_of(a)?;
    Ok(graph.push(a_value.powf(exponent), Op::Pow(a, exponent)))
}

pub(crate) fn pow_backward<T: Float>(nodes: &mut [Node<T>], a: usize, exponent: T, grad_output: T) {
    let local = exponent * nodes[a].value.powf(exponent - T::one());
    nodes[a].grad = nodes[a].grad + grad_output * local;
}
