use scalargrad_core::{GradError, Graph, NodeId, Operand, Scalar};

/// The base trait for all network modules (neurons, layers, stacks of layers).
pub trait Module<T: Scalar> {
    /// Builds the forward computation on `graph` and returns the output handles.
    ///
    /// `inputs` may mix existing nodes and raw scalars; scalars become leaves.
    fn forward(&self, graph: &Graph<T>, inputs: &[Operand<T>]) -> Result<Vec<NodeId>, GradError>;

    /// Returns every learnable leaf of the module, in construction order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the parameters with hierarchical names (e.g. "layers.0.neurons.1.w.2").
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Resets the gradient of every parameter.
    fn zero_grad(&self, graph: &Graph<T>) -> Result<(), GradError> {
        graph.zero_grad_of(&self.parameters())
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Converts a slice of handles into forward inputs.
pub fn as_inputs<T: Scalar>(ids: &[NodeId]) -> Vec<Operand<T>> {
    ids.iter().map(|&id| Operand::Node(id)).collect()
}
