// src/nn/mod.rs
// Neural-network building blocks composed from scalar graph nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use init::Init;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{MseLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
