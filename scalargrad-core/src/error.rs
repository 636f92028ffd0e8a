use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Node {index} belongs to graph {node_graph}, not to graph {graph}")]
    ForeignNode {
        graph: usize,
        node_graph: usize,
        index: usize,
    },

    #[error("Unknown node index {index} for a graph holding {len} nodes")]
    UnknownNode { index: usize, len: usize },

    #[error("Parameter '{name}' has no leaf in this graph; call bind() before pulling its gradient")]
    ParameterNotBound { name: String },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
