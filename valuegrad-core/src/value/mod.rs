// src/value/mod.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::{Graph, NodeId};
use crate::error::AutogradError;
use crate::node_data::NodeData;

mod autograd_methods;
mod op_methods;
mod traits;

/// Handle to one scalar node of a computation graph.
///
/// A `Value` is a graph handle plus a `NodeId`, so clones are cheap and all
/// clones refer to the same node: a gradient written through one is visible
/// through the others. Arithmetic on values appends new nodes to the shared
/// graph; see the `ops` module for the operations and their rules.
pub struct Value {
    pub(crate) graph: Graph,
    pub(crate) id: NodeId,
    /// Epoch of the arena when the node was created; a mismatch means the node
    /// was discarded by `Graph::rewind`.
    pub(crate) epoch: u64,
}

impl Value {
    /// Runs `f` on this node's record, or reports a stale handle.
    pub(crate) fn try_read<R>(&self, f: impl FnOnce(&NodeData) -> R) -> Result<R, AutogradError> {
        let data = self.graph.borrow();
        data.node(self.id, self.epoch).map(f)
    }

    pub(crate) fn try_write<R>(
        &self,
        f: impl FnOnce(&mut NodeData) -> R,
    ) -> Result<R, AutogradError> {
        let mut data = self.graph.borrow_mut();
        data.node_mut(self.id, self.epoch).map(f)
    }

    fn read<R>(&self, f: impl FnOnce(&NodeData) -> R) -> R {
        self.try_read(f).unwrap_or_else(|e| panic!("{}", e))
    }

    fn write<R>(&self, f: impl FnOnce(&mut NodeData) -> R) -> R {
        self.try_write(f).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The forward value.
    ///
    /// # Panics
    /// Panics if the node was discarded by `Graph::rewind`.
    pub fn data(&self) -> f64 {
        self.read(|node| node.value)
    }

    /// Non-panicking variant of [`Value::data`].
    pub fn try_data(&self) -> Result<f64, AutogradError> {
        self.try_read(|node| node.value)
    }

    /// Overwrites the value of a leaf node, e.g. for a parameter update.
    ///
    /// Nodes produced by an operation keep the value computed at construction;
    /// changing them would desynchronise the values captured by their consumers'
    /// backward rules.
    pub fn set_data(&self, value: f64) -> Result<(), AutogradError> {
        let index = self.id.index();
        self.try_write(|node| {
            if !node.is_leaf() {
                return Err(AutogradError::NotALeaf {
                    operation: "set_data".to_string(),
                    index,
                });
            }
            node.value = value;
            Ok(())
        })?
    }

    pub fn label(&self) -> Option<String> {
        self.read(|node| node.label.clone())
    }

    pub fn set_label(&self, label: impl Into<String>) {
        let label = label.into();
        self.write(|node| node.label = Some(label));
    }

    /// Tag of the operation that produced this node (`""` for leaves).
    pub fn operation_tag(&self) -> String {
        self.read(|node| node.backward_op.to_string())
    }

    /// The local-gradient rule attached to this node.
    pub fn backward_op(&self) -> BackwardOp {
        self.read(|node| node.backward_op)
    }

    /// Handles to the operands this node was computed from, in rule order.
    ///
    /// A node used twice by the same operation (`x * x`) appears twice.
    pub fn operands(&self) -> Vec<Value> {
        let data = self.graph.borrow();
        let node = data
            .node(self.id, self.epoch)
            .unwrap_or_else(|e| panic!("{}", e));
        node.operands
            .as_slice()
            .iter()
            .map(|&id| Value {
                graph: self.graph.clone(),
                id,
                epoch: data.nodes[id.index()].epoch,
            })
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.read(|node| node.is_leaf())
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// False once the node has been discarded by `Graph::rewind`.
    pub fn is_live(&self) -> bool {
        self.try_read(|_| ()).is_ok()
    }

    /// Returns true if both handles refer to the same node (identity, not value equality).
    pub fn same_node(&self, other: &Value) -> bool {
        self.graph.ptr_eq(&other.graph) && self.id == other.id && self.epoch == other.epoch
    }
}
