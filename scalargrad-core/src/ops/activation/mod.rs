//! # Activation Functions
//!
//! Non-linear scalar activations recorded as graph nodes.
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`sigmoid_op`]: Logistic sigmoid.

pub mod relu;
pub mod sigmoid;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
