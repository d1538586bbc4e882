use crate::graph::Graph;
use crate::ops::traits::Scalar;
use std::fmt;

// Manual implementation: one line per node, operands by handle.
impl<T: Scalar> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes.try_borrow() {
            Ok(nodes) => {
                writeln!(f, "Graph(nodes={})", nodes.len())?;
                for (i, node) in nodes.iter().enumerate() {
                    write!(f, "  #{} data={} grad={}", i, node.data, node.grad)?;
                    if !node.is_leaf() {
                        let operands: Vec<String> =
                            node.operands.iter().map(|id| id.to_string()).collect();
                        write!(f, " op='{}' operands=[{}]", node.op, operands.join(", "))?;
                    }
                    if let Some(label) = &node.label {
                        write!(f, " label={:?}", label)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
            Err(_) => write!(f, "Graph(<mutably borrowed>)"),
        }
    }
}
