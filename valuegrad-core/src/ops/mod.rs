//! Differentiable scalar operations.
//!
//! Each `*_op` function computes a forward value, appends the result node to the
//! first operand's graph and attaches the operation's `BackwardOp`. The operator
//! overloads and methods on `Value` are thin sugar over these functions.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operand;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
pub use operand::Operand;
