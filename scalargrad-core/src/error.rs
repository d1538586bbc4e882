use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradError {
    #[error("Invalid argument for operation {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("Unknown node: handle {id} does not belong to this graph of {len} nodes")]
    UnknownNode { id: usize, len: usize },
}
