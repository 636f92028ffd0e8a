use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;
use std::cell::{Ref, RefCell};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// Stable identifier of a node inside a [`Graph`] arena.
///
/// Identity is positional: two nodes holding the same number are still two
/// different nodes. The id also records which graph created it, so an id can
/// never silently address a node of another graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: usize,
    index: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena (creation order).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identifier of the graph that created this node.
    pub fn graph(&self) -> usize {
        self.graph
    }
}

/// One scalar of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) label: Option<String>,
}

/// Arena owning every node of one computation.
///
/// Nodes are only ever appended, and an operation can only reference nodes that
/// already exist, so the operand relation is acyclic by construction. Node values
/// are fixed when pushed; gradients and labels are the only mutable state.
///
/// The graph never resets gradients on its own: call [`Graph::zero_grad`] (or
/// [`Value::zero_grad`]) before running a second backward pass over the same nodes.
pub struct Graph<T = f64> {
    id: usize,
    nodes: RefCell<Vec<Node<T>>>,
    // Dropped with the graph; lets holders of node ids notice the graph is gone.
    alive: Arc<()>,
}

impl<T: Float> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Graph<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: RefCell::new(Vec::with_capacity(capacity)),
            alive: Arc::new(()),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Creates a leaf node holding `value`.
    pub fn leaf(&self, value: T) -> Value<'_, T> {
        Value::new(self, self.push_leaf(value))
    }

    /// Returns a handle on an existing node of this graph.
    pub fn handle(&self, id: NodeId) -> Result<Value<'_, T>, ScalarGradError> {
        self.check(id)?;
        Ok(Value::new(self, id))
    }

    pub fn value_of(&self, id: NodeId) -> Result<T, ScalarGradError> {
        let index = self.check(id)?;
        Ok(self.nodes.borrow()[index].value)
    }

    pub fn grad_of(&self, id: NodeId) -> Result<T, ScalarGradError> {
        let index = self.check(id)?;
        Ok(self.nodes.borrow()[index].grad)
    }

    /// Overwrites the gradient of one node, typically to reset it to zero
    /// between two backward passes.
    pub fn set_grad(&self, id: NodeId, grad: T) -> Result<(), ScalarGradError> {
        let index = self.check(id)?;
        self.nodes.borrow_mut()[index].grad = grad;
        Ok(())
    }

    pub fn op_of(&self, id: NodeId) -> Result<Op<T>, ScalarGradError> {
        let index = self.check(id)?;
        Ok(self.nodes.borrow()[index].op)
    }

    pub fn label_of(&self, id: NodeId) -> Result<Option<String>, ScalarGradError> {
        let index = self.check(id)?;
        Ok(self.nodes.borrow()[index].label.clone())
    }

    pub fn set_label(&self, id: NodeId, label: impl Into<String>) -> Result<(), ScalarGradError> {
        let index = self.check(id)?;
        self.nodes.borrow_mut()[index].label = Some(label.into());
        Ok(())
    }

    /// Resets the gradient of every node in the arena to zero.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Lists the nodes `root` depends on (itself included), each one after all
    /// of its operands.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        let root_index = self.check(root)?;
        let nodes = self.nodes.borrow();
        Ok(topological_sort(&nodes, root_index)
            .into_iter()
            .map(|index| self.node_id(index))
            .collect())
    }

    /// Computes d(root)/d(node) for every node `root` depends on.
    ///
    /// Seeds `root`'s gradient with one and applies each node's local derivative
    /// rule in reverse topological order. Gradients are accumulated into whatever
    /// the nodes already hold.
    pub fn backward(&self, root: NodeId) -> Result<(), ScalarGradError> {
        let root_index = self.check(root)?;
        self.backward_from(root_index);
        Ok(())
    }

    pub(crate) fn backward_from(&self, root_index: usize) {
        let mut nodes = self.nodes.borrow_mut();
        let order = topological_sort(&nodes, root_index);
        log::debug!(
            "backward from node {} of graph {}: {} of {} nodes reachable",
            root_index,
            self.id,
            order.len(),
            nodes.len()
        );

        nodes[root_index].grad = T::one();
        for &index in order.iter().rev() {
            let (op, grad, value) = {
                let node = &nodes[index];
                (node.op, node.grad, node.value)
            };
            log::trace!("propagating node {} ({})", index, op.tag());
            op.backward(&mut nodes, grad, value);
        }
    }

    pub(crate) fn push(&self, value: T, op: Op<T>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let index = nodes.len();
        nodes.push(Node {
            value,
            grad: T::zero(),
            op,
            label: None,
        });
        self.node_id(index)
    }

    pub(crate) fn push_leaf(&self, value: T) -> NodeId {
        self.push(value, Op::Leaf)
    }

    /// Validates that `id` addresses a node of this graph and returns its index.
    pub(crate) fn check(&self, id: NodeId) -> Result<usize, ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                graph: self.id,
                node_graph: id.graph,
                index: id.index,
            });
        }
        let len = self.len();
        if id.index >= len {
            return Err(ScalarGradError::UnknownNode {
                index: id.index,
                len,
            });
        }
        Ok(id.index)
    }

    pub(crate) fn node_id(&self, index: usize) -> NodeId {
        NodeId {
            graph: self.id,
            index,
        }
    }

    /// Token that stops upgrading once this graph is dropped.
    pub(crate) fn liveness(&self) -> Weak<()> {
        Arc::downgrade(&self.alive)
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node<T>>> {
        self.nodes.borrow()
    }

    pub(crate) fn with_node_mut<R>(&self, index: usize, f: impl FnOnce(&mut Node<T>) -> R) -> R {
        f(&mut self.nodes.borrow_mut()[index])
    }
}

/// Depth-first post-order over the operand relation, starting at `root`.
///
/// Each node is listed once, after all of its operands. Uses an explicit stack so
/// deep chains cannot overflow the call stack; the order matches the recursive
/// formulation (operands visited left to right).
pub(crate) fn topological_sort<T: Float>(nodes: &[Node<T>], root: usize) -> Vec<usize> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((index, operands_done)) = stack.pop() {
        if operands_done {
            sorted.push(index);
            continue;
        }
        if visited[index] {
            continue;
        }
        visited[index] = true;
        stack.push((index, true));
        for operand in nodes[index].op.operands().iter().rev() {
            if !visited[operand.index()] {
                stack.push((operand.index(), false));
            }
        }
    }
    sorted
}
