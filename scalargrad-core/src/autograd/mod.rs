//! Reverse-mode differentiation over the node arena.
//!
//! - [`graph`]: topological ordering of the nodes reachable from an output.
//! - [`backward`]: the propagation pass applying each node's local gradient rule.
//! - [`grad_check`]: central finite-difference verification of analytical gradients.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
