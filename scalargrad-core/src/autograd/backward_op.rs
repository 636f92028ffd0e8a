use crate::autograd::graph::{Node, NodeId};
use crate::ops::activation::exp::exp_backward;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use num_traits::Float;

/// The operation that produced a node, together with its operands.
///
/// The tag doubles as the node's local derivative rule: the backward pass
/// dispatches on it to push the node's gradient onto its operands. Negation,
/// subtraction and division have no tag of their own; they are built from
/// `Mul`, `Add` and `Pow` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// A leaf: an input, a parameter or a promoted literal.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Power with a constant exponent.
    Pow(NodeId, T),
    Tanh(NodeId),
    Exp(NodeId),
}

impl<T: Float> Op<T> {
    /// Nodes this node was directly computed from, in operand order.
    ///
    /// The same node appears twice when an operation used it twice (`x + x`).
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Tanh(a) | Op::Exp(a) => vec![a],
        }
    }

    /// Short symbol naming the operation; `none` for leaves.
    pub fn tag(&self) -> &'static str {
        match self {
            Op::Leaf => "none",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow(..) => "**",
            Op::Tanh(_) => "tanh",
            Op::Exp(_) => "exp",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Accumulates the contribution of the output gradient into the operands.
    ///
    /// `grad_output` and `output` are the gradient and forward value of the node
    /// carrying this op. Operand gradients are only ever added to.
    pub(crate) fn backward(&self, nodes: &mut [Node<T>], grad_output: T, output: T) {
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => add_backward(nodes, a.index(), b.index(), grad_output),
            Op::Mul(a, b) => mul_backward(nodes, a.index(), b.index(), grad_output),
            Op::Pow(a, exponent) => pow_backward(nodes, a.index(), exponent, grad_output),
            Op::Tanh(a) => tanh_backward(nodes, a.index(), grad_output, output),
            Op::Exp(a) => exp_backward(nodes, a.index(), grad_output, output),
        }
    }
}
