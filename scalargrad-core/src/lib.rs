//! Scalar reverse-mode automatic differentiation.
//!
//! Every [`Value`] is a node of a [`Graph`] arena. Arithmetic on values computes
//! the result immediately and records how it was obtained; [`Value::backward`]
//! then walks the recorded graph in reverse topological order and accumulates
//! d(output)/d(node) into every node the output depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph: Graph<f64> = Graph::new();
//! let a = graph.leaf(2.0).with_label("a");
//! let b = graph.leaf(5.0).with_label("b");
//! let z = a * b + a.pow(2.0);
//! z.backward();
//!
//! assert_eq!(z.value(), 14.0);
//! assert_eq!(a.grad(), 9.0); // b + 2a
//! assert_eq!(b.grad(), 2.0); // a
//! ```
//!
//! The engine never resets gradients by itself; zero them with
//! [`Graph::zero_grad`] before differentiating the same nodes again. The [`nn`],
//! [`optim`] and [`train`] modules build a small multi-layer perceptron and its
//! gradient-descent training loop on top of the engine.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;
pub mod value;

pub use autograd::{Graph, GraphTrace, NodeId, Op};
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
