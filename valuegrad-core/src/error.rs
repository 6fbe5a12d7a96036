use thiserror::Error;

/// Custom error type for the valuegrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutogradError {
    #[error("Invalid operand kind for operation {operation}: expected a real-number constant, got {found}")]
    InvalidOperandKind { operation: String, found: String },

    #[error("Operands of {operation} belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Node {index} is no longer part of its graph (discarded by a rewind)")]
    StaleValue { index: usize },

    #[error("Operation {operation} requires a leaf node, but node {index} was produced by an operation")]
    NotALeaf { operation: String, index: usize },
}
