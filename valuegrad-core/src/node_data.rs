// src/node_data.rs

use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::NodeId;

/// The operands an operation consumed, in the order its `BackwardOp` expects them.
///
/// At most two. The same id may appear twice (`x * x`), which is what makes the
/// two contributions of a squared node add up during backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    ids: [NodeId; 2],
    len: u8,
}

impl Operands {
    pub fn none() -> Self {
        Operands {
            ids: [NodeId::new(0); 2],
            len: 0,
        }
    }

    pub fn unary(a: NodeId) -> Self {
        Operands {
            ids: [a, a],
            len: 1,
        }
    }

    pub fn binary(a: NodeId, b: NodeId) -> Self {
        Operands {
            ids: [a, b],
            len: 2,
        }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Internal record of one scalar node.
///
/// Records live inside the `Graph` arena and are addressed by `NodeId`. User code
/// never holds a `NodeData` directly; it goes through a `Value` handle.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Forward result, fixed at construction (leaves may be overwritten by `Value::set_data`).
    pub(crate) value: f64,
    /// Accumulated ∂root/∂self. Zero until a backward pass reaches this node.
    pub(crate) grad: f64,
    pub(crate) operands: Operands,
    /// Local-gradient rule with the numbers it needs captured at construction time.
    pub(crate) backward_op: BackwardOp,
    pub(crate) label: Option<String>,
    /// Arena epoch at creation, used to detect handles invalidated by a rewind.
    pub(crate) epoch: u64,
}

impl NodeData {
    pub fn new(value: f64, operands: Operands, backward_op: BackwardOp, epoch: u64) -> Self {
        debug_assert_eq!(
            operands.len(),
            backward_op.arity(),
            "operand count does not match {:?}",
            backward_op
        );
        NodeData {
            value,
            grad: 0.0,
            operands,
            backward_op,
            label: None,
            epoch,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}
