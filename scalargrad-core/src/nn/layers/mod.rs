// src/nn/layers/mod.rs

pub mod neuron;

// Re-export key layer structs
pub use neuron::Neuron;
