//! The node arena.
//!
//! A [`Graph`] owns every node pushed during forward evaluation. Nodes refer to their
//! operands through [`NodeId`] handles, so shared operands (fan-out) need no reference
//! counting and the whole graph is dropped at once with its arena.

use crate::error::GradError;
use crate::node::{Node, NodeId};
use crate::ops::traits::Scalar;
use crate::ops::{Op, Operand};
use crate::value::Value;
use log::trace;
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;

// Graph identities start at 1; 0 never names a live graph.
static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(1);

fn next_graph_id() -> usize {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Arena of scalar nodes forming a computation DAG.
///
/// All methods take `&self`; the node storage sits behind a `RefCell` so that several
/// [`Value`] handles can extend the same graph through operator overloading. A `Graph`
/// is meant to be used from a single thread.
///
/// Every graph gets a process-wide identity stamped into the handles it mints, so a
/// [`NodeId`] from another graph is rejected even when its index is in range.
pub struct Graph<T: Scalar = f64> {
    id: usize,
    pub(crate) nodes: RefCell<Vec<Node<T>>>,
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            id: next_graph_id(),
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: next_graph_id(),
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes pushed so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Wraps an existing node in a [`Value`] handle for operator-based composition.
    pub fn handle(&self, id: NodeId) -> Result<Value<'_, T>, GradError> {
        let id = self.check(id)?;
        Ok(Value::new(self, id))
    }

    /// Pushes a leaf and returns it as a [`Value`] handle.
    pub fn value(&self, data: T) -> Value<'_, T> {
        let id = self.push(Node::leaf(data));
        Value::new(self, id)
    }

    /// Validates that `id` was minted by this graph and is in range.
    pub(crate) fn check(&self, id: NodeId) -> Result<NodeId, GradError> {
        let len = self.len();
        if id.graph() == self.id && id.index() < len {
            Ok(id)
        } else {
            Err(GradError::UnknownNode {
                id: id.index(),
                len,
            })
        }
    }

    pub(crate) fn push(&self, node: Node<T>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId::new(self.id, nodes.len());
        trace!("push {} op={:?} operands={:?}", id, node.op, node.operands);
        nodes.push(node);
        id
    }

    /// Records `op` applied to already validated operands and evaluates its forward formula.
    pub(crate) fn apply(&self, op: Op<T>, operands: Vec<NodeId>) -> NodeId {
        let data = {
            let nodes = self.nodes.borrow();
            let inputs: Vec<T> = operands.iter().map(|id| nodes[id.index()].data).collect();
            op.forward(&inputs)
        };
        self.push(Node::from_op(data, op, operands))
    }

    /// Resolves the operands of a binary operation.
    ///
    /// Node handles are validated first so that a failing call pushes nothing; constants
    /// are then promoted to leaves, left operand first.
    pub(crate) fn resolve_pair(
        &self,
        a: Operand<T>,
        b: Operand<T>,
    ) -> Result<(NodeId, NodeId), GradError> {
        for operand in [a, b] {
            if let Operand::Node(id) = operand {
                self.check(id)?;
            }
        }
        Ok((self.promote(a), self.promote(b)))
    }

    fn promote(&self, operand: Operand<T>) -> NodeId {
        match operand {
            Operand::Node(id) => id,
            Operand::Constant(value) => self.push(Node::leaf(value)),
        }
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
