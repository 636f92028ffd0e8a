//! Gradient-descent training loop for single-output modules.

mod config;
mod trainer;

pub use config::TrainConfig;
pub use trainer::{fit, TrainReport};
