use crate::autograd::export::GraphTrace;
use crate::autograd::{Graph, NodeId, Op};
use crate::error::ScalarGradError;
use crate::ops::{exp_op, pow_op, tanh_op};
use num_traits::Float;

mod arithmetic;
mod debug;


/// Handle on one node of a [`Graph`].
///
/// A `Value` is a graph reference plus a [`NodeId`]; copying it copies the handle,
/// not the node. Arithmetic on values (`+`, `-`, `*`, `/`, unary `-`, [`pow`],
/// [`tanh`], [`exp`]) evaluates immediately and records a new node in the same
/// graph. Plain numbers mixed with values are promoted to leaf nodes first.
///
/// # Panics
///
/// Combining values from two different graphs panics: the operands of a node must
/// live in the node's own arena.
///
/// [`pow`]: Value::pow
/// [`tanh`]: Value::tanh
/// [`exp`]: Value::exp
pub struct Value<'g, T = f64> {
    graph: &'g Graph<T>,
    id: NodeId,
}

impl<'g, T> Clone for Value<'g, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T> Copy for Value<'g, T> {}

impl<'g, T: Float> Value<'g, T> {
    pub(crate) fn new(graph: &'g Graph<T>, id: NodeId) -> Self {
        Value { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    /// The forward value, fixed when the node was created.
    pub fn value(&self) -> T {
        self.graph.nodes()[self.id.index()].value
    }

    /// The gradient accumulated by backward passes so far.
    pub fn grad(&self) -> T {
        self.graph.nodes()[self.id.index()].grad
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph
            .with_node_mut(self.id.index(), |node| node.grad = T::zero());
    }

    pub fn op(&self) -> Op<T> {
        self.graph.nodes()[self.id.index()].op
    }

    pub fn label(&self) -> Option<String> {
        self.graph.nodes()[self.id.index()].label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.graph
            .with_node_mut(self.id.index(), |node| node.label = Some(label));
    }

    /// Builder-style [`set_label`](Value::set_label).
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Raises this value to a constant power.
    pub fn pow(self, exponent: T) -> Self {
        self.lift(pow_op(self.graph, self.id, exponent))
    }

    pub fn tanh(self) -> Self {
        self.lift(tanh_op(self.graph, self.id))
    }

    pub fn exp(self) -> Self {
        self.lift(exp_op(self.graph, self.id))
    }

    /// Runs the backward pass from this node.
    ///
    /// Sets this node's gradient to one and accumulates d(self)/d(node) into every
    /// node it depends on. Gradients are added to, never overwritten: zero them
    /// first when the same nodes already went through a backward pass.
    pub fn backward(&self) {
        self.graph.backward_from(self.id.index());
    }

    /// Nodes this value depends on (itself included), operands first.
    pub fn topological_order(&self) -> Vec<NodeId> {
        let nodes = self.graph.nodes();
        crate::autograd::graph::topological_sort(&nodes, self.id.index())
            .into_iter()
            .map(|index| self.graph.node_id(index))
            .collect()
    }

    /// Snapshot of the sub-graph ending at this value.
    pub fn trace(&self) -> GraphTrace<T> {
        GraphTrace::collect(self.graph, self.id.index())
    }

    /// Wraps the id produced by an `_op` function into a handle on the same graph.
    fn lift(&self, result: Result<NodeId, ScalarGradError>) -> Self {
        match result {
            Ok(id) => Value::new(self.graph, id),
            Err(err) => panic!("{}", err),
        }
    }
}
