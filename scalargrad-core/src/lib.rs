//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Values are nodes in a [`Graph`] arena. Operation constructors
//! (`add`, `sub`, `mul`, `pow`, `div`, `relu`, `sigmoid`) append new nodes
//! that remember their operands; [`Graph::backward`] then walks the graph in
//! reverse topological order and accumulates d(root)/d(node) into every
//! reachable node. The [`nn`] module builds a single [`Neuron`](nn::Neuron)
//! on top of the engine.

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod scalar;
pub mod utils;

// Ré-exporte les types principaux pour un accès direct via `scalargrad_core::Graph`
pub use autograd::Operation;
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use scalar::Scalar;
// Re-export traits required by public functions/structs
pub use num_traits;
