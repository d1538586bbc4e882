use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::ops::{Op, Operand};

impl<T: Scalar> Graph<T> {
    /// Records `a ^ exponent`.
    ///
    /// The exponent must be a plain numeric constant. It is stored in the operation tag,
    /// not as an operand, so no gradient flows to it.
    /// Backward: \( \frac{dL}{da} \mathrel{+}= e \cdot a^{e-1} \cdot \frac{dL}{d\text{out}} \).
    ///
    /// A negative exponent applied to zero yields an infinite value and gradient; these
    /// propagate like any other number.
    ///
    /// # Errors
    /// - `GradError::InvalidArgument` if `exponent` is a node. Nothing is pushed.
    /// - `GradError::UnknownNode` if `a` does not belong to this graph.
    pub fn pow(
        &self,
        a: impl Into<NodeId>,
        exponent: impl Into<Operand<T>>,
    ) -> Result<NodeId, GradError> {
        let exponent = match exponent.into() {
            Operand::Constant(e) => e,
            Operand::Node(id) => {
                return Err(GradError::InvalidArgument {
                    operation: "pow".to_string(),
                    reason: format!(
                        "exponent must be a numeric constant, got node {}",
                        id
                    ),
                })
            }
        };
        let a = self.check(a.into())?;
        Ok(self.pow_node(a, exponent))
    }

    pub(crate) fn pow_node(&self, a: NodeId, exponent: T) -> NodeId {
        self.apply(Op::Pow { exponent }, vec![a])
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
