use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::{NodeData, Operands};
use crate::value::Value;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a node in its graph arena.
///
/// Ids are handed out in creation order, so every operand id is strictly smaller
/// than the id of the node that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of `GraphData::graph_id`; ids are never reused within a process.
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Arena storage behind a `Graph`.
#[derive(Debug)]
pub struct GraphData {
    pub(crate) nodes: Vec<NodeData>,
    /// Identifies this arena in checkpoints, even after it has been dropped.
    pub(crate) graph_id: u64,
    /// Bumped by every rewind that discards nodes.
    pub(crate) epoch: u64,
}

impl GraphData {
    fn with_capacity(capacity: usize) -> Self {
        GraphData {
            nodes: Vec::with_capacity(capacity),
            graph_id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
        }
    }

    /// Looks up a node, rejecting handles whose node was discarded by a rewind.
    pub(crate) fn node(&self, id: NodeId, epoch: u64) -> Result<&NodeData, AutogradError> {
        match self.nodes.get(id.index()) {
            Some(node) if node.epoch == epoch => Ok(node),
            _ => Err(AutogradError::StaleValue { index: id.index() }),
        }
    }

    pub(crate) fn node_mut(
        &mut self,
        id: NodeId,
        epoch: u64,
    ) -> Result<&mut NodeData, AutogradError> {
        match self.nodes.get_mut(id.index()) {
            Some(node) if node.epoch == epoch => Ok(node),
            _ => Err(AutogradError::StaleValue { index: id.index() }),
        }
    }
}

/// A recorded arena length, used to discard the nodes appended after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
    graph_id: u64,
}

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Append-only arena owning every node of one computation graph.
///
/// `Graph` is a cheap, shared handle (`Rc<RefCell<GraphData>>`); every `Value`
/// carries a clone of the graph it lives in. Operations between values of two
/// different graphs are rejected.
///
/// The arena is single-threaded by construction: `Graph` is neither `Send` nor
/// `Sync`, so two backward passes can never race on the same accumulators.
#[derive(Clone)]
pub struct Graph {
    pub(crate) inner: Rc<RefCell<GraphData>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            inner: Rc::new(RefCell::new(GraphData::with_capacity(capacity))),
        }
    }

    /// Creates a leaf node (an input or a parameter) holding `value`.
    pub fn leaf(&self, value: f64) -> Value {
        self.push(value, Operands::none(), BackwardOp::Leaf)
    }

    /// Creates a leaf node with a human-readable label.
    pub fn leaf_with_label(&self, value: f64, label: impl Into<String>) -> Value {
        let leaf = self.leaf(value);
        leaf.set_label(label);
        leaf
    }

    /// Creates one unlabelled leaf per value, in order.
    pub fn leaves(&self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if both handles point to the same arena.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Records the current arena length.
    ///
    /// Typical use is to take a checkpoint once the parameters of a model exist,
    /// then rewind to it after every training step so the arena does not grow
    /// without bound.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.len(),
            graph_id: self.borrow().graph_id,
        }
    }

    /// Discards every node appended after `checkpoint`.
    ///
    /// Handles to discarded nodes become stale: operations on them return
    /// `AutogradError::StaleValue` and their accessors panic. Nodes older than the
    /// checkpoint, and their handles, are unaffected.
    pub fn rewind(&self, checkpoint: Checkpoint) -> Result<(), AutogradError> {
        let mut data = self.borrow_mut();
        if checkpoint.graph_id != data.graph_id {
            return Err(AutogradError::GraphMismatch {
                operation: "rewind".to_string(),
            });
        }
        if checkpoint.len >= data.nodes.len() {
            return Ok(());
        }
        let discarded = data.nodes.len() - checkpoint.len;
        data.nodes.truncate(checkpoint.len);
        data.epoch += 1;
        log::debug!(
            "Graph rewound to {} nodes ({} discarded, epoch {})",
            checkpoint.len,
            discarded,
            data.epoch
        );
        Ok(())
    }

    /// Appends a node and returns a handle to it.
    pub(crate) fn push(&self, value: f64, operands: Operands, backward_op: BackwardOp) -> Value {
        let mut data = self.borrow_mut();
        let id = NodeId::new(data.nodes.len());
        debug_assert!(
            operands.as_slice().iter().all(|operand| *operand < id),
            "operand ids must precede their consumer"
        );
        let epoch = data.epoch;
        data.nodes.push(NodeData::new(value, operands, backward_op, epoch));
        drop(data);
        Value {
            graph: self.clone(),
            id,
            epoch,
        }
    }

    pub(crate) fn borrow(&self) -> Ref<'_, GraphData> {
        self.inner.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, GraphData> {
        self.inner.borrow_mut()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.borrow();
        write!(f, "Graph(nodes={}, epoch={})", data.nodes.len(), data.epoch)
    }
}

/// Orders the nodes reachable from `root` so that every node comes after all of
/// its operands (depth-first post-order, each node visited once).
///
/// Walking the result backwards therefore visits every consumer before any of its
/// operands. The traversal is iterative, so deep graphs do not exhaust the stack,
/// and the visited set is a boolean array indexed by `NodeId`.
pub(crate) fn topological_sort(data: &GraphData, root: NodeId) -> Vec<NodeId> {
    // Operands always precede their consumer, so nothing reachable lies past `root`.
    let mut visited = vec![false; root.index() + 1];
    let mut sorted_list = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited[root.index()] = true;

    while let Some(&(node, next_operand)) = stack.last() {
        let operands = data.nodes[node.index()].operands;
        match operands.as_slice().get(next_operand) {
            Some(&operand) => {
                let top = stack.len() - 1;
                stack[top].1 += 1;
                if !visited[operand.index()] {
                    visited[operand.index()] = true;
                    stack.push((operand, 0));
                }
            }
            None => {
                sorted_list.push(node);
                stack.pop();
            }
        }
    }
    sorted_list
}
