//! Computation graph, reverse-mode differentiation and graph inspection.

pub mod backward_op;
pub mod export;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use export::{GraphTrace, TraceNode};
pub use graph::{Graph, NodeId};
