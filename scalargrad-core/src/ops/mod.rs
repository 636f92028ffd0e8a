//! # Scalar Operations Module (`ops`)
//!
//! Forward operations on graph nodes, grouped by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a function (`add_op`, `tanh_op`, ...) that takes
//!   the graph and the operand [`NodeId`](crate::autograd::NodeId)s, computes the forward
//!   value immediately and pushes exactly one node tagged with the matching
//!   [`Op`](crate::autograd::Op). Operand ids are validated; ids from another graph or past
//!   the end of the arena are rejected.
//! - **`_backward` Functions:** Primitive operations also define their local derivative
//!   rule next to the forward code. The backward pass reaches them through `Op::backward`.
//! - **Composite operations** (`neg_op`, `sub_op`, `div_op`) are expressed through the
//!   primitives and have no rule of their own.
//!
//! [`Value`](crate::Value) operators and methods are thin wrappers over these functions.

pub mod activation;
pub mod arithmetic;

pub use activation::{exp_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
