use crate::autograd::graph::{Graph, NodeId};
use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use num_traits::Float;

/// Subtracts two nodes as `a + (-b)`.
pub fn sub_op<T: Float>(graph: &Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
    // Validate both sides before pushing the intermediate nodes.
    graph.check(a)?;
    graph.check(b)?;
    let negated = neg_op(graph, b)?;
    add_op(graph, a, negated)
}
