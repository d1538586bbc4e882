//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Forward evaluation pushes nodes into a [`Graph`] arena; each node records the
//! [`Op`] that produced it and the [`NodeId`] handles of its operands. [`Graph::backward`]
//! then walks the nodes reachable from an output in reverse topological order and
//! accumulates \( \frac{d\,\text{output}}{d\,\text{node}} \) into every node's gradient.
//!
//! Two equivalent surfaces are available:
//!
//! - named methods on [`Graph`] (`add`, `mul`, `pow`, `tanh`, ...) taking handles or raw
//!   scalars and returning `Result<NodeId, GradError>`;
//! - the [`Value`] handle, which overloads `+ - * /` and unary `-`.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod value;

pub use autograd::{check_grad, GradCheckConfig, GradCheckError};
pub use error::GradError;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use ops::traits::Scalar;
pub use ops::{Op, Operand};
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
