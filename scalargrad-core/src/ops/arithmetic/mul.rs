use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::{Op, Operand};

impl<T: Scalar> Graph<T> {
    /// Records `a * b`.
    ///
    /// Either side may be a raw scalar, which is first pushed as a leaf.
    /// Backward: each operand receives the other operand's value times the upstream
    /// gradient. When `a` and `b` are the same node both contributions add up.
    ///
    /// # Errors
    /// `GradError::UnknownNode` if a handle does not belong to this graph.
    pub fn mul(
        &self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        Ok(self.mul_nodes(a, b))
    }

    pub(crate) fn mul_nodes(&self, a: NodeId, b: NodeId) -> NodeId {
        self.apply(Op::Mul, vec![a, b])
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
