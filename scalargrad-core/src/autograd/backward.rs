use crate::autograd::graph::topological_sort;
use crate::node::{Node, NodeId};
use crate::ops::traits::Scalar;
use log::{debug, trace};

/// Runs reverse-mode differentiation from `root` over the arena.
///
/// 1. Seeds `root.grad = 1` (overwritten, not accumulated).
/// 2. Sorts the nodes reachable from `root` topologically.
/// 3. Walks that order backwards and applies each node's local gradient rule, adding
///    \( \frac{dL}{d\text{in}_i} \mathrel{+}= \frac{d\text{out}}{d\text{in}_i} \cdot \frac{dL}{d\text{out}} \)
///    into every operand.
///
/// Every consumer of a node precedes it in the reversed order, so a node's gradient is
/// complete by the time its own rule reads it. Gradients of the reachable nodes are not
/// reset first: a second call accumulates on top of the first.
///
/// Returns the number of nodes whose rule was applied.
pub(crate) fn run_backward<T: Scalar>(nodes: &mut [Node<T>], root: NodeId) -> usize {
    nodes[root.index()].grad = T::one();

    let order = topological_sort(nodes, root);
    debug!(
        "backward from {}: {} reachable nodes out of {}",
        root,
        order.len(),
        nodes.len()
    );

    for &id in order.iter().rev() {
        // Operands always precede their consumer in the arena, so they all sit in
        // `before` while the node itself is the first element of `rest`.
        let (before, rest) = nodes.split_at_mut(id.index());
        let node = &rest[0];
        if node.is_leaf() {
            continue;
        }
        let upstream = node.grad;
        let inputs: Vec<T> = node
            .operands
            .iter()
            .map(|operand| before[operand.index()].data)
            .collect();
        let local_grads = node.op.local_grads(&inputs, node.data);
        trace!(
            "apply {} {:?}: upstream={} local={:?}",
            id,
            node.op,
            upstream,
            local_grads
        );
        for (operand, local) in node.operands.iter().zip(local_grads) {
            before[operand.index()].grad += local * upstream;
        }
    }
    order.len()
}
