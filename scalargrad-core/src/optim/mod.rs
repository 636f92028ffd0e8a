// scalargrad-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and plain stochastic gradient
//! descent (`Sgd`).

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;

#[cfg(test)]
mod sgd_test;
