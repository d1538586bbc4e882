use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::Operand;

impl<T: Scalar> Graph<T> {
    /// Records `a - b` as `a + (-b)`.
    ///
    /// # Errors
    /// `GradError::UnknownNode` if a handle does not belong to this graph.
    pub fn sub(
        &self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        Ok(self.sub_nodes(a, b))
    }

    pub(crate) fn sub_nodes(&self, a: NodeId, b: NodeId) -> NodeId {
        let neg_b = self.neg_node(b);
        self.add_nodes(a, neg_b)
    }
}
