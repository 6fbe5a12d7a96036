//! Graph storage, local-gradient rules and the gradient checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
