//! # scalargrad-nn
//!
//! Neuron, layer and multi-layer perceptron built purely from `scalargrad-core`
//! operations. Every module owns leaf handles in a caller-provided [`Graph`] and draws
//! their initial values from a caller-provided random generator.
//!
//! [`Graph`]: scalargrad_core::Graph

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
