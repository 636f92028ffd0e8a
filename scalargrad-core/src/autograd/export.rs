use crate::autograd::graph::{topological_sort, Graph, NodeId};
use crate::autograd::Op;
use crate::error::ScalarGradError;
use num_traits::Float;
use std::fmt;

/// Snapshot of one node, as handed to a visualisation consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceNode<T> {
    pub id: NodeId,
    pub value: T,
    pub grad: T,
    pub label: Option<String>,
    pub op: Op<T>,
}

/// Nodes and edges of the sub-graph ending at one root.
///
/// Nodes are listed in discovery order (operands before their consumers, root
/// last). Each edge goes from an operand to the node computed from it; an operand
/// used twice by the same node yields two identical edges.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphTrace<T> {
    pub nodes: Vec<TraceNode<T>>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl<T: Float> Graph<T> {
    /// Exports the sub-graph `root` depends on.
    pub fn trace(&self, root: NodeId) -> Result<GraphTrace<T>, ScalarGradError> {
        let root_index = self.check(root)?;
        Ok(GraphTrace::collect(self, root_index))
    }
}

impl<T: Float> GraphTrace<T> {
    pub(crate) fn collect(graph: &Graph<T>, root_index: usize) -> Self {
        let nodes = graph.nodes();
        let order = topological_sort(&nodes, root_index);
        let mut trace = GraphTrace {
            nodes: Vec::with_capacity(order.len()),
            edges: Vec::new(),
        };
        for index in order {
            let node = &nodes[index];
            let id = graph.node_id(index);
            trace
                .edges
                .extend(node.op.operands().into_iter().map(|operand| (operand, id)));
            trace.nodes.push(TraceNode {
                id,
                value: node.value,
                grad: node.grad,
                label: node.label.clone(),
                op: node.op,
            });
        }
        trace
    }

    pub fn root(&self) -> Option<&TraceNode<T>> {
        self.nodes.last()
    }
}

impl<T: Float + fmt::Display> GraphTrace<T> {
    /// Renders the trace as a Graphviz digraph, one record per value and one
    /// small node per operation.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl<T: Float + fmt::Display> fmt::Display for GraphTrace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "  rankdir=LR;")?;
        for node in &self.nodes {
            let name = dot_name(node.id);
            let label = node.label.as_deref().map(escape_record).unwrap_or_default();
            writeln!(
                f,
                "  \"{}\" [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
                name, label, node.value, node.grad
            )?;
            if !node.op.is_leaf() {
                let op_label = match node.op {
                    Op::Pow(_, exponent) => format!("**{}", exponent),
                    ref op => op.tag().to_string(),
                };
                writeln!(f, "  \"{}{}\" [label=\"{}\"];", name, node.op.tag(), op_label)?;
                writeln!(f, "  \"{}{}\" -> \"{}\";", name, node.op.tag(), name)?;
            }
        }
        for &(operand, consumer) in &self.edges {
            let consumer_op = self
                .nodes
                .iter()
                .find(|node| node.id == consumer)
                .map(|node| node.op.tag())
                .unwrap_or_default();
            writeln!(
                f,
                "  \"{}\" -> \"{}{}\";",
                dot_name(operand),
                dot_name(consumer),
                consumer_op
            )?;
        }
        writeln!(f, "}}")
    }
}

fn dot_name(id: NodeId) -> String {
    format!("g{}n{}", id.graph(), id.index())
}

/// Escapes the characters Graphviz gives a meaning inside record labels.
fn escape_record(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
