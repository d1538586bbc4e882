use crate::node::{Node, NodeId};
use crate::ops::traits::Scalar;

/// Builds the topological order of every node reachable from `root`.
///
/// The order is the post-order of a depth-first traversal that visits operands in
/// recorded order: a node is appended only after all of its operands. Reversing it
/// therefore yields every consumer before the nodes it consumes, which is the order
/// the backward pass needs.
///
/// Visited nodes are tracked in a `Vec<bool>` indexed by handle, so each node is
/// appended exactly once however many paths reach it, and the order is identical from
/// run to run. The traversal keeps an explicit stack instead of recursing, so graph
/// depth is bounded by memory rather than by the call stack.
pub(crate) fn topological_sort<T: Scalar>(nodes: &[Node<T>], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node, operands already pushed)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        // Reversed so the first operand is popped, and finished, first.
        for &operand in nodes[id.index()].operands.iter().rev() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }
    sorted
}
