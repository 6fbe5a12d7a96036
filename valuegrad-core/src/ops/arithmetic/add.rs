use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::Operands;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Adds two scalars: `a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    let a_val = a.try_data()?;
    let b = b.into().into_value(a.graph(), "add")?;
    let b_val = b.try_data()?;
    Ok(a.graph().push(
        a_val + b_val,
        Operands::binary(a.id(), b.id()),
        BackwardOp::Add,
    ))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
