use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::Operand;

impl<T: Scalar> Graph<T> {
    /// Records `a / b` as `a * b^-1`.
    ///
    /// A zero divisor is not guarded: the forward value becomes infinite or NaN and the
    /// gradients degenerate accordingly.
    ///
    /// # Errors
    /// `GradError::UnknownNode` if a handle does not belong to this graph.
    pub fn div(
        &self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        Ok(self.div_nodes(a, b))
    }

    pub(crate) fn div_nodes(&self, a: NodeId, b: NodeId) -> NodeId {
        let recip = self.pow_node(b, -T::one());
        self.mul_nodes(a, recip)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
