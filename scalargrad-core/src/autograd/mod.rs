//! # Reverse-mode automatic differentiation
//!
//! - [`backward_op`]: the [`Operation`] tag every node carries and its local
//!   gradient rule ([`BackwardOp`]).
//! - [`graph`]: dependency ordering of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The driver itself lives on [`Graph::backward`](crate::Graph::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, Operation};
pub use graph::topological_sort;
