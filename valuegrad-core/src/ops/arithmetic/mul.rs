use crate::autograd::backward_op::BackwardOp;
use crate::error::AutogradError;
use crate::node_data::Operands;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Multiplies two scalars: `a * b`.
///
/// Backward: `a` receives `b * grad`, `b` receives `a * grad`, with the operand
/// values captured at construction.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Result<Value, AutogradError> {
    let a_val = a.try_data()?;
    let b = b.into().into_value(a.graph(), "mul")?;
    let b_val = b.try_data()?;
    Ok(a.graph().push(
        a_val * b_val,
        Operands::binary(a.id(), b.id()),
        BackwardOp::Mul {
            lhs: a_val,
            rhs: b_val,
        },
    ))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
