//! # Graph Operations Module (`ops`)
//!
//! Every function here is an operation constructor: it reads existing
//! nodes, allocates exactly the node(s) it needs in the [`Graph`](crate::Graph)
//! and records the [`Operation`](crate::autograd::Operation) tag from which
//! the backward pass derives the local gradient rule. No existing node is
//! modified.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function named `xxx_op`
//!   taking the graph and operand ids. The same operations are available as
//!   methods on `Graph` (`graph.add(a, b)`), which is the usual entry point.
//! - [`arithmetic`]: add, sub, mul, pow, div.
//! - [`activation`]: relu, sigmoid.

pub mod activation;
pub mod arithmetic;
