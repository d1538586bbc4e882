use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;

impl<T: Scalar> Graph<T> {
    /// Records `-a` as `a * (-1)`, the `-1` being a fresh leaf.
    pub fn neg(&self, a: impl Into<NodeId>) -> Result<NodeId, GradError> {
        let a = self.check(a.into())?;
        Ok(self.neg_node(a))
    }

    pub(crate) fn neg_node(&self, a: NodeId) -> NodeId {
        let minus_one = self.leaf(-T::one());
        self.mul_nodes(a, minus_one)
    }
}
