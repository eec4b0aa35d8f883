// src/nn/mod.rs
// Neural network building blocks driven by the scalar graph.

pub mod activation;
pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use layers::neuron::Neuron;
pub use module::Module;
